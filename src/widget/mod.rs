//! Widget data model
//!
//! This module defines the state carried by each registered widget kind:
//! - [`button`]: clickable controls that emit their name as an event token
//! - [`label`]: text displays whose content can be rewritten after creation
//! - [`combo`]: selectable item lists with a single current selection
//! - [`panel`]: named automaton panels with mutually exclusive visibility
//!
//! Widgets hold no toolkit handles. They are plain state records owned by a
//! frame; the `ui` layer reads them to draw and the frame mutates them in
//! response to API calls or user input.

pub mod button;
pub mod combo;
pub mod label;
pub mod panel;

pub use button::Button;
pub use combo::ComboBox;
pub use label::Label;
pub use panel::{AutomatonPanel, PanelSet};

use std::fmt;

/// The widget categories a frame can register.
///
/// Names are unique within a category, not across categories: a button and a
/// label may share a name without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Button,
    Label,
    ComboBox,
    Automaton,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Button => write!(f, "button"),
            WidgetKind::Label => write!(f, "label"),
            WidgetKind::ComboBox => write!(f, "combo box"),
            WidgetKind::Automaton => write!(f, "automaton panel"),
        }
    }
}
