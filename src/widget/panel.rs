//! Automaton panel registry
//!
//! Automaton panels are named visual regions with mutually exclusive
//! visibility: across the whole set, at most one panel is visible at any
//! instant. [`PanelSet`] enforces the invariant structurally by remembering
//! the currently visible panel's name, so switching is a constant-time
//! hide/show pair rather than a scan over all panels.

use rustc_hash::FxHashMap;

/// A named panel with a visibility flag. Panels start hidden.
#[derive(Debug, Clone)]
pub struct AutomatonPanel {
    pub visible: bool,
}

/// The panel registry plus the name of the panel currently shown.
#[derive(Debug, Default)]
pub struct PanelSet {
    panels: FxHashMap<String, AutomatonPanel>,
    current: Option<String>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new hidden panel. Returns `false` (set unchanged) when a
    /// panel of that name already exists.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.panels.contains_key(name) {
            return false;
        }
        self.panels
            .insert(name.to_string(), AutomatonPanel { visible: false });
        true
    }

    /// Make `name` the visible panel, hiding the previous one if any.
    /// Returns `false` (visibility unchanged) when `name` is not registered.
    pub fn show(&mut self, name: &str) -> bool {
        if !self.panels.contains_key(name) {
            return false;
        }
        if let Some(current) = &self.current {
            if let Some(panel) = self.panels.get_mut(current) {
                panel.visible = false;
            }
        }
        if let Some(panel) = self.panels.get_mut(name) {
            panel.visible = true;
        }
        self.current = Some(name.to_string());
        true
    }

    /// Name of the visible panel, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.panels.contains_key(name)
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.panels.get(name).is_some_and(|p| p.visible)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
