// flowtty demo: a cellular-automaton control panel driven entirely through
// the facade's event stream.

use flowtty::Frame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut frame = Frame::new();
    frame.set_title("flowtty demo").set_size(80, 24);
    frame
        .add_button("Start", "start")?
        .add_button("Stop", "stop")?
        .add_label("stopped", "status")?
        .add_combo_box(&["blinker", "glider", "toad"], "pattern")?
        .add_automaton("blinker")?
        .add_automaton("glider")?
        .add_automaton("toad")?;
    frame.show()?;

    // The window is now live on its own thread; from here on the demo only
    // reacts to tokens. The stream ends when the user closes the window.
    let events = frame.events();
    while let Some(event) = events.next() {
        match event.as_str() {
            "start" => {
                if let Some(pattern) = frame.selected_combo_item("pattern")? {
                    frame.show_automaton(&pattern)?;
                    frame.set_label_text(&format!("running {}", pattern), "status")?;
                }
            }
            "stop" => {
                frame.set_label_text("stopped", "status")?;
            }
            "patternSelected" => {
                if let Some(pattern) = frame.selected_combo_item("pattern")? {
                    frame.set_label_text(&format!("selected {}", pattern), "status")?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
