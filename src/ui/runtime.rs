//! Terminal session and UI event loop
//!
//! [`spawn`] starts the UI thread for a frame. The thread owns the whole
//! terminal session: it enables raw mode, enters the alternate screen,
//! redraws the widget tree, and feeds key presses through the input
//! dispatcher until the frame is closed from the keyboard or dropped. The
//! terminal is restored before the thread exits, whatever the loop's
//! outcome, and the event stream is closed so blocked consumers wake with
//! `None`.

use crate::frame::{self, FrameState};
use crate::ui::{input, render};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long one poll waits for input before re-checking the closing flag
/// and redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the UI thread for `state`.
pub(crate) fn spawn(state: Arc<Mutex<FrameState>>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("flowtty-ui".to_string())
        .spawn(move || {
            if let Err(err) = run(&state) {
                eprintln!("flowtty: terminal session error: {}", err);
            }
            let mut state = frame::lock(&state);
            state.shown = false;
            // the window is gone; end the stream so blocked consumers wake
            state.events.close();
        })
}

/// Set up the terminal, run the event loop, and restore the terminal.
fn run(state: &Mutex<FrameState>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Redraw and poll for input until the frame asks to close.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, state: &Mutex<FrameState>) -> io::Result<()> {
    loop {
        {
            let state = frame::lock(state);
            if state.closing {
                break;
            }
            terminal.draw(|f| render::render_frame(f, &state))?;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(&mut frame::lock(state), key);
                }
            }
        }
    }

    Ok(())
}
