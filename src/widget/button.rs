//! Clickable button state

/// A clickable control. Pressing it (from the keyboard or programmatically)
/// enqueues the button's registered name as an event token.
#[derive(Debug, Clone)]
pub struct Button {
    /// Text drawn on the button face.
    pub text: String,
}

impl Button {
    pub fn new(text: &str) -> Self {
        Button {
            text: text.to_string(),
        }
    }
}
