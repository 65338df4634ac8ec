//! Event queue bridging UI callbacks to application logic
//!
//! User interactions are delivered to the application as opaque string
//! tokens: a button press enqueues the button's registered name, a combo box
//! selection change enqueues the name with a `Selected` suffix. The queue is
//! an unbounded FIFO over [`std::sync::mpsc`]: producers on the UI thread
//! never block, the single consumer blocks until a token arrives, and rapid
//! repeated interactions are delivered once each, in production order.
//!
//! The consumer side is [`EventSource::next`], which returns `None` once the
//! stream has ended (the window was closed and its frame dropped). `None` is
//! the only end-of-stream signal; an empty string is an ordinary token.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Suffix appended to a combo box name to form its selection-change token.
pub(crate) const SELECTED_SUFFIX: &str = "Selected";

/// Token enqueued when the combo box `name` changes selection.
pub(crate) fn selection_token(name: &str) -> String {
    format!("{name}{SELECTED_SUFFIX}")
}

/// Create a connected producer/consumer pair for one frame's event queue.
pub(crate) fn channel() -> (EventSink, EventSource) {
    let (tx, rx) = mpsc::channel();
    (
        EventSink { tx: Some(tx) },
        EventSource {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Producer half, owned by the frame state and shared by every callback
/// site. Emitting never blocks and never fails observably.
#[derive(Debug)]
pub(crate) struct EventSink {
    tx: Option<Sender<String>>,
}

impl EventSink {
    pub(crate) fn emit(&self, token: impl Into<String>) {
        if let Some(tx) = &self.tx {
            // send only fails once every consumer handle is gone
            let _ = tx.send(token.into());
        }
    }

    /// End the stream. Tokens already queued remain readable; once drained,
    /// consumers see `None`.
    pub(crate) fn close(&mut self) {
        self.tx = None;
    }
}

/// Blocking consumer handle returned by `Frame::events`.
///
/// Cloned handles read from the same underlying queue, not independent
/// copies of it: a token taken through one handle is gone for all of them.
#[derive(Debug, Clone)]
pub struct EventSource {
    rx: Arc<Mutex<Receiver<String>>>,
}

impl EventSource {
    /// Remove and return the oldest queued token, blocking while the queue
    /// is empty. Returns `None` when the stream has ended.
    pub fn next(&self) -> Option<String> {
        let rx = match self.rx.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rx.recv().ok()
    }
}
