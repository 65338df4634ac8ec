//! # Introduction
//!
//! flowtty is a minimal declarative facade over a terminal UI toolkit.
//! Application logic builds a window out of named widgets (buttons, labels,
//! combo boxes, automaton panels) through a fluent [`Frame`] API, then
//! consumes user interaction as a blocking stream of string event tokens.
//! The application never touches the toolkit: rendering and input run on a
//! UI thread owned by the frame.
//!
//! ## Data flow
//!
//! ```text
//! application thread             UI thread (ratatui + crossterm)
//! ──────────────────             ───────────────────────────────
//! Frame builder calls ────▶ widget registries ──▶ draw loop
//! events().next() ◀── event queue (FIFO) ◀── key dispatch
//! ```
//!
//! 1. [`frame`] — the [`Frame`] facade: registration, queries, the panel
//!    visibility state machine, and the window lifecycle.
//! 2. [`widget`] — plain state records for each widget kind, including the
//!    [`widget::PanelSet`] enforcing at most one visible automaton panel.
//! 3. [`events`] — the producer/consumer event queue and the blocking
//!    [`EventSource`] consumer handle.
//! 4. [`ui`] — the toolkit layer; not part of the stable library API.
//!
//! ## Event tokens
//!
//! A button press delivers the button's registered name, verbatim. A combo
//! box selection change delivers the combo's name with a `Selected` suffix.
//! Tokens arrive in production order, one per interaction, with no
//! coalescing. [`EventSource::next`] returns `None` only when the stream
//! has ended.

pub mod events;
pub mod frame;
pub mod ui;
pub mod widget;

pub use events::EventSource;
pub use frame::{Frame, FrameError};
pub use widget::WidgetKind;
