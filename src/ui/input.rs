//! Keyboard dispatch
//!
//! Translates crossterm key presses into widget activations on the shared
//! frame state. This is the producer side of the event queue: a pressed
//! button enqueues its name, a changed combo selection enqueues the
//! selection token. Everything else only moves focus or closes the window.

use crate::frame::FrameState;
use crossterm::event::{KeyCode, KeyEvent};

/// Apply one key press to the frame state.
pub(crate) fn handle_key(state: &mut FrameState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            state.closing = true;
        }
        KeyCode::Tab => {
            state.focus_next();
        }
        KeyCode::BackTab => {
            state.focus_prev();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.press_focused();
        }
        KeyCode::Down => {
            state.focused_combo_step(true);
        }
        KeyCode::Up => {
            state.focused_combo_step(false);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_frame() -> Frame {
        let mut frame = Frame::new();
        frame
            .add_button("Save", "save")
            .expect("register save")
            .add_label("ready", "status")
            .expect("register status")
            .add_combo_box(&["x", "y"], "sel")
            .expect("register sel");
        frame
    }

    #[test]
    fn test_q_requests_close() {
        let frame = demo_frame();
        let mut state = frame.state();
        handle_key(&mut state, press(KeyCode::Char('q')));
        assert!(state.closing);
    }

    #[test]
    fn test_tab_skips_labels_and_wraps() {
        let frame = demo_frame();
        let mut state = frame.state();

        // button -> combo (label is not focusable) -> back to button
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, Some(0));
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, Some(2));
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, Some(0));
    }

    #[test]
    fn test_back_tab_cycles_in_reverse() {
        let frame = demo_frame();
        let mut state = frame.state();
        handle_key(&mut state, press(KeyCode::BackTab));
        assert_eq!(state.focus, Some(2));
        handle_key(&mut state, press(KeyCode::BackTab));
        assert_eq!(state.focus, Some(0));
    }

    #[test]
    fn test_enter_on_focused_button_emits_its_name() {
        let frame = demo_frame();
        let events = frame.events();
        {
            let mut state = frame.state();
            handle_key(&mut state, press(KeyCode::Tab));
            handle_key(&mut state, press(KeyCode::Enter));
        }
        assert_eq!(events.next(), Some("save".to_string()));
    }

    #[test]
    fn test_enter_with_nothing_focused_emits_nothing() {
        let frame = demo_frame();
        let events = frame.events();
        {
            let mut state = frame.state();
            handle_key(&mut state, press(KeyCode::Enter));
            state.events.close();
        }
        assert_eq!(events.next(), None);
    }

    #[test]
    fn test_arrow_keys_drive_the_focused_combo() {
        let frame = demo_frame();
        let events = frame.events();
        {
            let mut state = frame.state();
            handle_key(&mut state, press(KeyCode::Tab));
            handle_key(&mut state, press(KeyCode::Tab));
            handle_key(&mut state, press(KeyCode::Down));
        }
        assert_eq!(events.next(), Some("selSelected".to_string()));
        assert_eq!(
            frame.selected_combo_item("sel").expect("sel exists"),
            Some("y".to_string())
        );
    }

    #[test]
    fn test_arrow_at_list_edge_emits_nothing() {
        let frame = demo_frame();
        let events = frame.events();
        {
            let mut state = frame.state();
            handle_key(&mut state, press(KeyCode::Tab));
            handle_key(&mut state, press(KeyCode::Tab));
            // already at the first item; Up cannot move the selection
            handle_key(&mut state, press(KeyCode::Up));
            state.events.close();
        }
        assert_eq!(events.next(), None);
    }
}
