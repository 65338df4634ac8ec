//! Text label state

/// A one-line text display. The text can be rewritten at any time through
/// the owning frame; labels never produce events.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Label {
            text: text.to_string(),
        }
    }
}
