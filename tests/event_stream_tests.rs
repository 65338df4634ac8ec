// Integration tests for the event stream: token formats, FIFO delivery,
// blocking behavior, and end of stream.

use flowtty::Frame;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn test_click_delivers_the_button_name_once() {
    let mut frame = Frame::new();
    frame.add_button("Save", "save").expect("register save");
    frame.click("save").expect("save exists");

    let events = frame.events();
    assert_eq!(events.next(), Some("save".to_string()));

    // a second read must block: mirror it through a channel and watch the
    // timeout, then end the stream to let the reader thread finish
    let (mirror_tx, mirror_rx) = mpsc::channel();
    let reader = thread::spawn(move || {
        let _ = mirror_tx.send(events.next());
    });
    assert!(mirror_rx.recv_timeout(Duration::from_millis(200)).is_err());

    drop(frame);
    assert_eq!(
        mirror_rx.recv_timeout(Duration::from_secs(1)),
        Ok(None),
        "dropping the frame should end the stream"
    );
    reader.join().expect("reader thread");
}

#[test]
fn test_two_quick_clicks_deliver_two_tokens() {
    let mut frame = Frame::new();
    frame.add_button("Save", "save").expect("register save");
    frame.click("save").expect("first click");
    frame.click("save").expect("second click");

    let events = frame.events();
    assert_eq!(events.next(), Some("save".to_string()));
    assert_eq!(events.next(), Some("save".to_string()));
}

#[test]
fn test_tokens_are_delivered_in_click_order() {
    let mut frame = Frame::new();
    frame.add_button("A", "a").expect("register a");
    frame.add_button("B", "b").expect("register b");
    frame.click("a").expect("click a");
    frame.click("b").expect("click b");
    frame.click("a").expect("click a again");

    let events = frame.events();
    assert_eq!(events.next(), Some("a".to_string()));
    assert_eq!(events.next(), Some("b".to_string()));
    assert_eq!(events.next(), Some("a".to_string()));
}

#[test]
fn test_selection_change_delivers_suffixed_token_and_updates_query() {
    let mut frame = Frame::new();
    frame.add_combo_box(&["x", "y"], "sel").expect("combo box");
    frame.select_combo_item("y", "sel").expect("y exists");

    let events = frame.events();
    assert_eq!(events.next(), Some("selSelected".to_string()));
    assert_eq!(
        frame.selected_combo_item("sel").expect("sel exists"),
        Some("y".to_string())
    );
}

#[test]
fn test_event_handles_read_from_one_shared_queue() {
    let mut frame = Frame::new();
    frame.add_button("A", "a").expect("register a");
    frame.add_button("B", "b").expect("register b");

    let first = frame.events();
    let second = frame.events();

    frame.click("a").expect("click a");
    frame.click("b").expect("click b");

    // a token taken through one handle is gone for the other
    assert_eq!(first.next(), Some("a".to_string()));
    assert_eq!(second.next(), Some("b".to_string()));
}

#[test]
fn test_clicking_an_unregistered_button_is_an_error() {
    let mut frame = Frame::new();
    assert!(frame.click("ghost").is_err());
}

#[test]
fn test_queued_tokens_survive_the_frame() {
    let mut frame = Frame::new();
    frame.add_button("Save", "save").expect("register save");
    frame.click("save").expect("save exists");

    let events = frame.events();
    drop(frame);

    // the queued token is still delivered, then the stream ends
    assert_eq!(events.next(), Some("save".to_string()));
    assert_eq!(events.next(), None);
}

#[test]
fn test_interactions_before_show_are_queued() {
    let mut frame = Frame::new();
    frame.add_button("Save", "save").expect("register save");
    frame.add_combo_box(&["x", "y"], "sel").expect("combo box");

    frame.click("save").expect("click before show");
    frame.select_combo_item("y", "sel").expect("select before show");

    let events = frame.events();
    assert_eq!(events.next(), Some("save".to_string()));
    assert_eq!(events.next(), Some("selSelected".to_string()));
}
