//! Terminal rendition of the frame, built on [ratatui](https://docs.rs/ratatui).
//!
//! This layer is the "underlying toolkit" side of the facade. It is organized
//! the same way the public side is consumed:
//!
//! - **`runtime`** — terminal session lifecycle and the draw/poll loop on
//!   the UI thread spawned by `Frame::show`
//! - **`input`** — translation of key presses into widget activations and
//!   event tokens
//! - **`render`** — stateless render functions for the controls strip,
//!   labels, automaton panel area, and status bar
//! - **[`theme`]** — centralized color palette used by all regions
//!
//! Application code never calls into this module directly; it only sees the
//! `Frame` API and the event stream.

pub(crate) mod input;
pub(crate) mod render;
pub(crate) mod runtime;
pub mod theme;
