#![forbid(unsafe_code)]

//! Demo: build a dialog, show it, poke it, and print each frame as text.
//!
//! There is no real terminal session here; frames render into an in-memory
//! buffer and are dumped to stdout so the whole flow stays scriptable.

use std::time::Duration;

use curtain_core::geometry::{Insets, Rect};
use curtain_dialog::{
    BarOrientation, ButtonSpec, Customizer, DialogBuilder, DialogHandle, Slot, Widget,
};
use curtain_render::cell::PackedRgba;
use curtain_render::frame::Frame;

const SCREEN: Rect = Rect::new(0, 0, 56, 16);

fn present(label: &str, handle: &DialogHandle) {
    let mut frame = Frame::new(SCREEN.width, SCREEN.height);
    handle.render(SCREEN, &mut frame);
    println!("--- {label} ---");
    print!("{}", frame.buffer.to_text());
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut dialog = DialogBuilder::new()
        .title("Title")
        .message("This is message text.")
        .cancelable(true)
        .dialog_icon(None)
        .dismiss_on_press(true)
        .insets(Insets::new(1, 1))
        .left_button("Great", |_| println!("Left button clicked!"))
        .button(Slot::Right, ButtonSpec::new("Cool!"))
        .customize(Customizer::new().title(|title| {
            title.style = title.style.fg(PackedRgba::rgb(130, 170, 255));
            Ok(())
        }))
        .on_dismiss(|| println!("(dialog dismissed)"))
        .show();

    present("shown", &dialog);

    // Live update while showing: the text swap lands immediately.
    dialog.set_message("Updated while visible.");
    present("message swapped", &dialog);

    dialog.press(Slot::Left);

    // A second dialog with a vertical button bar, to watch a slot reveal.
    let mut picker = DialogBuilder::new()
        .title("Choose")
        .message("Pick an action.")
        .bar_orientation(BarOrientation::Vertical)
        .dismiss_on_press(false)
        .left_button("Install", |slot| println!("pressed slot {}", slot.id()))
        .central_button("Skip", |slot| println!("pressed slot {}", slot.id()))
        .show();

    present("picker shown", &picker);

    // Reveal a third button mid-show and step the animation.
    picker.set_button(Slot::Right, ButtonSpec::new("Details").with_icon("info"));
    for step in 1..=3 {
        picker.tick(Duration::from_millis(100));
        let metrics = picker.button_view(Slot::Right).metrics;
        println!(
            "tick {step}: details button occupies {} row(s)",
            metrics.total_rows()
        );
    }
    present("after reveal", &picker);

    picker.press(Slot::Central);
    picker.dismiss();
}
