//! Registry error types for the frame facade
//!
//! All frame errors are synchronous: they are raised at the call that
//! violates a precondition and leave every registry unchanged. There is no
//! partial-failure state to recover from.

use crate::widget::WidgetKind;
use std::fmt;

/// Errors raised by frame registration, query, and mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A widget of this kind is already registered under `name`.
    DuplicateName { kind: WidgetKind, name: String },

    /// The automaton panel `name` was never registered.
    UnknownPanel { name: String },

    /// No widget of this kind is registered under `name`.
    UnknownWidget { kind: WidgetKind, name: String },

    /// The combo box exists but does not contain `item`.
    UnknownItem { combo: String, item: String },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::DuplicateName { kind, name } => {
                write!(f, "{} '{}' already exists", kind, name)
            }
            FrameError::UnknownPanel { name } => {
                write!(f, "automaton panel '{}' does not exist", name)
            }
            FrameError::UnknownWidget { kind, name } => {
                write!(f, "{} '{}' does not exist", kind, name)
            }
            FrameError::UnknownItem { combo, item } => {
                write!(f, "combo box '{}' has no item '{}'", combo, item)
            }
        }
    }
}

impl std::error::Error for FrameError {}
