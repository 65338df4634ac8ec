//! The frame facade
//!
//! [`Frame`] is the single entry point of the crate: application logic
//! registers named widgets through its fluent API, shows the window, and
//! from then on consumes user interaction through the blocking token stream
//! returned by [`Frame::events`]. The frame exclusively owns its widget
//! registries and event queue; nothing is shared between frame instances.
//!
//! Internally the registries live in a `FrameState` behind an
//! `Arc<Mutex<_>>` shared with the UI thread spawned by [`Frame::show`]. The
//! application thread is the only writer of labels and panel visibility; the
//! UI thread is the only writer of focus and keyboard-driven combo
//! selection. The event queue is the sole structure both sides produce into.

pub mod error;

pub use error::FrameError;

use crate::events::{self, EventSink, EventSource};
use crate::ui::runtime;
use crate::widget::{Button, ComboBox, Label, PanelSet, WidgetKind};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

/// A widget reference in registration order, used for layout and the focus
/// ring. Automaton panels are not part of the flow; they occupy their own
/// region and only one is ever drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WidgetId {
    Button(String),
    Label(String),
    Combo(String),
}

impl WidgetId {
    /// Whether this widget takes part in the keyboard focus ring.
    fn is_interactive(&self) -> bool {
        matches!(self, WidgetId::Button(_) | WidgetId::Combo(_))
    }
}

/// All state of one frame: the widget registries, the flow order, keyboard
/// focus, the producer half of the event queue, and the window lifecycle
/// flags read by the UI thread.
#[derive(Debug)]
pub(crate) struct FrameState {
    pub(crate) title: String,
    pub(crate) size: Option<(u16, u16)>,
    pub(crate) buttons: FxHashMap<String, Button>,
    pub(crate) labels: FxHashMap<String, Label>,
    pub(crate) combos: FxHashMap<String, ComboBox>,
    pub(crate) panels: PanelSet,
    /// Buttons, labels and combo boxes in registration order.
    pub(crate) flow: Vec<WidgetId>,
    /// Index into `flow` of the focused widget, always an interactive one.
    pub(crate) focus: Option<usize>,
    pub(crate) events: EventSink,
    /// Set by the UI thread (keyboard close) or by `Frame::drop`.
    pub(crate) closing: bool,
    pub(crate) shown: bool,
}

impl FrameState {
    /// Move focus to the next interactive widget, wrapping past the end.
    pub(crate) fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    /// Move focus to the previous interactive widget, wrapping past the
    /// start.
    pub(crate) fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = self.flow.len();
        if len == 0 {
            return;
        }
        let start = match (self.focus, forward) {
            (Some(i), true) => i + 1,
            (Some(i), false) => i + len - 1,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        for offset in 0..len {
            let index = if forward {
                (start + offset) % len
            } else {
                (start + len - offset) % len
            };
            if self.flow[index].is_interactive() {
                self.focus = Some(index);
                return;
            }
        }
    }

    /// Activate the focused widget: a focused button emits its name token.
    pub(crate) fn press_focused(&mut self) {
        if let Some(WidgetId::Button(name)) = self.focus.and_then(|i| self.flow.get(i)) {
            self.events.emit(name.clone());
        }
    }

    /// Step the focused combo box's selection and emit its selection token
    /// if the selection actually moved.
    pub(crate) fn focused_combo_step(&mut self, forward: bool) {
        let name = match self.focus.and_then(|i| self.flow.get(i)) {
            Some(WidgetId::Combo(name)) => name.clone(),
            _ => return,
        };
        let changed = match self.combos.get_mut(&name) {
            Some(combo) if forward => combo.select_next(),
            Some(combo) => combo.select_prev(),
            None => false,
        };
        if changed {
            self.events.emit(events::selection_token(&name));
        }
    }
}

/// Lock a shared frame state, recovering from poisoning. A poisoned lock
/// only means another thread panicked mid-draw; the registries themselves
/// are still structurally sound.
pub(crate) fn lock(state: &Mutex<FrameState>) -> MutexGuard<'_, FrameState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The root window abstraction.
///
/// Registration, query and mutation calls return `&mut Self` (or
/// `Result<&mut Self, FrameError>`) so they chain:
///
/// ```
/// use flowtty::Frame;
///
/// let mut frame = Frame::new();
/// frame
///     .add_button("Save", "save")?
///     .add_label("ready", "status")?
///     .add_automaton("blinker")?
///     .show_automaton("blinker")?;
/// # Ok::<(), flowtty::FrameError>(())
/// ```
///
/// Dropping the frame closes the window and ends the event stream.
#[derive(Debug)]
pub struct Frame {
    state: Arc<Mutex<FrameState>>,
    events: EventSource,
    ui: Option<JoinHandle<()>>,
}

impl Frame {
    pub fn new() -> Self {
        let (sink, source) = events::channel();
        let state = FrameState {
            title: String::new(),
            size: None,
            buttons: FxHashMap::default(),
            labels: FxHashMap::default(),
            combos: FxHashMap::default(),
            panels: PanelSet::new(),
            flow: Vec::new(),
            focus: None,
            events: sink,
            closing: false,
            shown: false,
        };
        Frame {
            state: Arc::new(Mutex::new(state)),
            events: source,
            ui: None,
        }
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, FrameState> {
        lock(&self.state)
    }

    /// Set the text drawn on the window border.
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.state().title = title.to_string();
        self
    }

    /// Set the target window dimensions in terminal cells. The drawn frame
    /// is clamped to them; no minimum is enforced.
    pub fn set_size(&mut self, width: u16, height: u16) -> &mut Self {
        self.state().size = Some((width, height));
        self
    }

    /// Register a clickable button. Pressing it enqueues `name` as an event
    /// token.
    pub fn add_button(&mut self, text: &str, name: &str) -> Result<&mut Self, FrameError> {
        {
            let mut state = self.state();
            if state.buttons.contains_key(name) {
                return Err(FrameError::DuplicateName {
                    kind: WidgetKind::Button,
                    name: name.to_string(),
                });
            }
            state.buttons.insert(name.to_string(), Button::new(text));
            state.flow.push(WidgetId::Button(name.to_string()));
        }
        Ok(self)
    }

    /// Register a text label.
    pub fn add_label(&mut self, text: &str, name: &str) -> Result<&mut Self, FrameError> {
        {
            let mut state = self.state();
            if state.labels.contains_key(name) {
                return Err(FrameError::DuplicateName {
                    kind: WidgetKind::Label,
                    name: name.to_string(),
                });
            }
            state.labels.insert(name.to_string(), Label::new(text));
            state.flow.push(WidgetId::Label(name.to_string()));
        }
        Ok(self)
    }

    /// Register a combo box over `items`. The first item starts selected;
    /// every selection change enqueues `name` + `"Selected"` as an event
    /// token.
    pub fn add_combo_box(&mut self, items: &[&str], name: &str) -> Result<&mut Self, FrameError> {
        {
            let mut state = self.state();
            if state.combos.contains_key(name) {
                return Err(FrameError::DuplicateName {
                    kind: WidgetKind::ComboBox,
                    name: name.to_string(),
                });
            }
            state.combos.insert(name.to_string(), ComboBox::new(items));
            state.flow.push(WidgetId::Combo(name.to_string()));
        }
        Ok(self)
    }

    /// Register a named automaton panel, initially hidden.
    pub fn add_automaton(&mut self, name: &str) -> Result<&mut Self, FrameError> {
        if !self.state().panels.insert(name) {
            return Err(FrameError::DuplicateName {
                kind: WidgetKind::Automaton,
                name: name.to_string(),
            });
        }
        Ok(self)
    }

    /// Make `name` the visible automaton panel, hiding the previous one.
    /// This is the sole panel-visibility mutator.
    pub fn show_automaton(&mut self, name: &str) -> Result<&mut Self, FrameError> {
        if !self.state().panels.show(name) {
            return Err(FrameError::UnknownPanel {
                name: name.to_string(),
            });
        }
        Ok(self)
    }

    /// Overwrite the text displayed by the label `name`.
    pub fn set_label_text(&mut self, text: &str, name: &str) -> Result<&mut Self, FrameError> {
        match self.state().labels.get_mut(name) {
            Some(label) => label.text = text.to_string(),
            None => {
                return Err(FrameError::UnknownWidget {
                    kind: WidgetKind::Label,
                    name: name.to_string(),
                })
            }
        }
        Ok(self)
    }

    /// The currently selected item of the combo box `name`, or `None` for a
    /// combo box built over an empty item list. No side effects.
    pub fn selected_combo_item(&self, name: &str) -> Result<Option<String>, FrameError> {
        match self.state().combos.get(name) {
            Some(combo) => Ok(combo.selected_item().map(String::from)),
            None => Err(FrameError::UnknownWidget {
                kind: WidgetKind::ComboBox,
                name: name.to_string(),
            }),
        }
    }

    /// Name of the visible automaton panel, if any.
    pub fn current_automaton(&self) -> Option<String> {
        self.state().panels.current().map(String::from)
    }

    /// Whether the automaton panel `name` is currently visible.
    pub fn automaton_visible(&self, name: &str) -> Result<bool, FrameError> {
        let state = self.state();
        if !state.panels.contains(name) {
            return Err(FrameError::UnknownPanel {
                name: name.to_string(),
            });
        }
        Ok(state.panels.is_visible(name))
    }

    /// Press the button `name` programmatically, exactly as a user press
    /// would: its name token is enqueued. Works whether or not the window is
    /// shown.
    pub fn click(&mut self, name: &str) -> Result<&mut Self, FrameError> {
        {
            let state = self.state();
            if !state.buttons.contains_key(name) {
                return Err(FrameError::UnknownWidget {
                    kind: WidgetKind::Button,
                    name: name.to_string(),
                });
            }
            state.events.emit(name);
        }
        Ok(self)
    }

    /// Select `item` in the combo box `name` programmatically and enqueue
    /// its selection token, as the toolkit does for a user selection.
    pub fn select_combo_item(&mut self, item: &str, name: &str) -> Result<&mut Self, FrameError> {
        {
            let mut state = self.state();
            let combo = match state.combos.get_mut(name) {
                Some(combo) => combo,
                None => {
                    return Err(FrameError::UnknownWidget {
                        kind: WidgetKind::ComboBox,
                        name: name.to_string(),
                    })
                }
            };
            if !combo.select(item) {
                return Err(FrameError::UnknownItem {
                    combo: name.to_string(),
                    item: item.to_string(),
                });
            }
            state.events.emit(events::selection_token(name));
        }
        Ok(self)
    }

    /// Make the window visible: spawn the UI thread that owns the terminal
    /// session and translates key presses into widget events. Idempotent;
    /// repeated calls are no-ops.
    pub fn show(&mut self) -> io::Result<&mut Self> {
        if self.ui.is_none() {
            self.state().shown = true;
            match runtime::spawn(Arc::clone(&self.state)) {
                Ok(handle) => self.ui = Some(handle),
                Err(err) => {
                    self.state().shown = false;
                    return Err(err);
                }
            }
        }
        Ok(self)
    }

    /// Whether the window is currently live on its UI thread.
    pub fn is_shown(&self) -> bool {
        self.state().shown
    }

    /// A blocking consumer handle on this frame's event queue. Every handle
    /// returned here reads from the same queue.
    pub fn events(&self) -> EventSource {
        self.events.clone()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.state().closing = true;
        if let Some(ui) = self.ui.take() {
            let _ = ui.join();
        }
    }
}
