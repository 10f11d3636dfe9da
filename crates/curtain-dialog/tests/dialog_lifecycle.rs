#![forbid(unsafe_code)]

//! Integration tests: materialization, lifecycle listeners, click routing,
//! customization hook ordering, and window geometry.

use std::cell::RefCell;
use std::rc::Rc;

use curtain_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use curtain_core::geometry::{Insets, Rect};
use curtain_dialog::{
    BarOrientation, ButtonSpec, Customizer, DialogBuilder, DialogError, DialogEvent, Gravity,
    Slot, Widget, WindowMode,
};
use curtain_render::frame::{Frame, HitRegion};

fn log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn empty_title_and_message_are_absent_not_blank() {
    let handle = DialogBuilder::new().title("").message("").show();
    assert!(!handle.title_view().visible);
    assert!(!handle.message_view().visible);

    let handle = DialogBuilder::new().title("T").message("M").show();
    assert!(handle.title_view().visible);
    assert_eq!(handle.title_view().text, "T");
    assert!(handle.message_view().visible);
}

#[test]
fn slot_presence_follows_spec_text() {
    let handle = DialogBuilder::new()
        .left_button("OK", |_| {})
        .button(Slot::Central, ButtonSpec::new(""))
        .show();
    assert!(handle.slot_transition(Slot::Left).target_present());
    assert!(!handle.slot_transition(Slot::Central).target_present());
    assert!(!handle.slot_transition(Slot::Right).target_present());
    assert!(handle.button_view(Slot::Left).visible);
    assert!(!handle.button_view(Slot::Central).visible);
}

#[test]
fn show_fires_listener_once_and_is_noop_when_showing() {
    let events = log();
    let shows = events.clone();
    let mut handle = DialogBuilder::new()
        .title("T")
        .on_show(move || shows.borrow_mut().push("show".into()))
        .show();
    assert!(handle.is_showing());
    assert_eq!(events.borrow().len(), 1);

    handle.show();
    handle.show();
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn press_invokes_callback_before_dismiss() {
    let events = log();
    let pressed = events.clone();
    let dismissed = events.clone();
    let mut handle = DialogBuilder::new()
        .left_button("Go", move |slot| {
            pressed.borrow_mut().push(format!("press:{}", slot.id()))
        })
        .on_dismiss(move || dismissed.borrow_mut().push("dismiss".into()))
        .show();

    let event = handle.press(Slot::Left);
    assert_eq!(event, Some(DialogEvent::ButtonPressed(Slot::Left)));
    assert!(!handle.is_showing());
    assert_eq!(*events.borrow(), vec!["press:0", "dismiss"]);
}

#[test]
fn press_without_dismiss_on_press_keeps_dialog_open() {
    let events = log();
    let pressed = events.clone();
    let mut handle = DialogBuilder::new()
        .dismiss_on_press(false)
        .right_button("Stay", move |_| pressed.borrow_mut().push("press".into()))
        .show();

    handle.press(Slot::Right);
    handle.press(Slot::Right);
    assert!(handle.is_showing());
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn press_on_absent_slot_does_nothing() {
    let mut handle = DialogBuilder::new().title("T").show();
    assert_eq!(handle.press(Slot::Central), None);
    assert!(handle.is_showing());
}

#[test]
fn cancel_fires_cancel_then_dismiss() {
    let events = log();
    let cancels = events.clone();
    let dismisses = events.clone();
    let mut handle = DialogBuilder::new()
        .on_cancel(move || cancels.borrow_mut().push("cancel".into()))
        .on_dismiss(move || dismisses.borrow_mut().push("dismiss".into()))
        .show();

    handle.cancel();
    assert_eq!(*events.borrow(), vec!["cancel", "dismiss"]);
}

#[test]
fn plain_dismiss_skips_cancel_listener() {
    let events = log();
    let cancels = events.clone();
    let dismisses = events.clone();
    let mut handle = DialogBuilder::new()
        .on_cancel(move || cancels.borrow_mut().push("cancel".into()))
        .on_dismiss(move || dismisses.borrow_mut().push("dismiss".into()))
        .show();

    handle.dismiss();
    assert_eq!(*events.borrow(), vec!["dismiss"]);
}

#[test]
fn escape_cancels_only_when_cancelable() {
    let mut handle = DialogBuilder::new().cancelable(false).show();
    let escape = Event::Key(KeyEvent::press(KeyCode::Escape));
    assert_eq!(handle.handle_event(&escape, None), None);
    assert!(handle.is_showing());

    let mut handle = DialogBuilder::new().cancelable(true).show();
    assert_eq!(
        handle.handle_event(&escape, None),
        Some(DialogEvent::Cancelled)
    );
    assert!(!handle.is_showing());
}

#[test]
fn hooks_run_in_fixed_order() {
    let order = log();
    let t = order.clone();
    let m = order.clone();
    let b = order.clone();
    let i = order.clone();
    let bg = order.clone();
    let w = order.clone();

    let customizer = Customizer::new()
        .title(move |_| {
            t.borrow_mut().push("title".into());
            Ok(())
        })
        .message(move |_| {
            m.borrow_mut().push("message".into());
            Ok(())
        })
        .buttons(move |_, slot| {
            b.borrow_mut().push(format!("button:{}", slot.id()));
            Ok(())
        })
        .icon(move |_| {
            i.borrow_mut().push("icon".into());
            Ok(())
        })
        .background(move |_| {
            bg.borrow_mut().push("background".into());
            Ok(())
        })
        .window(move |_| {
            w.borrow_mut().push("window".into());
            Ok(())
        });

    let _handle = DialogBuilder::new()
        .title("T")
        .message("M")
        .customize(customizer)
        .show();

    // Buttons are customized left, right, central.
    assert_eq!(
        *order.borrow(),
        vec![
            "title",
            "message",
            "button:0",
            "button:2",
            "button:1",
            "icon",
            "background",
            "window",
        ]
    );
}

#[test]
fn failing_hook_does_not_block_later_hooks_or_display() {
    let order = log();
    let m = order.clone();
    let w = order.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let observed = seen.clone();

    let customizer = Customizer::new()
        .message(move |_| {
            m.borrow_mut().push("message".into());
            Err("styling bug".into())
        })
        .window(move |_| {
            w.borrow_mut().push("window".into());
            Ok(())
        });

    let handle = DialogBuilder::new()
        .message("M")
        .customize(customizer)
        .error_observer(move |err| observed.borrow_mut().push(err.clone()))
        .show();

    assert!(handle.is_showing());
    assert_eq!(*order.borrow(), vec!["message", "window"]);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(matches!(
        &seen[0],
        DialogError::Customize { message, .. } if message == "styling bug"
    ));
}

#[test]
fn hooks_can_mutate_views() {
    let customizer = Customizer::new().title(|title| {
        title.text.push('!');
        Ok(())
    });
    let handle = DialogBuilder::new()
        .title("Hey")
        .customize(customizer)
        .show();
    assert_eq!(handle.title_view().text, "Hey!");
}

#[test]
fn unresolvable_icon_falls_back_to_unset() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let observed = seen.clone();
    let handle = DialogBuilder::new()
        .title("T")
        .dialog_icon(Some("no-such-icon".into()))
        .error_observer(move |err| observed.borrow_mut().push(err.clone()))
        .show();

    assert!(handle.is_showing());
    assert!(!handle.icon_view().visible);
    assert_eq!(
        *seen.borrow(),
        vec![DialogError::IconResolve {
            id: "no-such-icon".into()
        }]
    );
}

#[test]
fn known_icon_is_resolved_and_shown() {
    let handle = DialogBuilder::new()
        .title("T")
        .dialog_icon(Some("warning".into()))
        .show();
    assert!(handle.icon_view().visible);
    assert_eq!(handle.icon_view().glyph.map(|g| g.symbol), Some('⚠'));
}

#[test]
fn fullscreen_card_fills_screen() {
    let handle = DialogBuilder::new()
        .title("T")
        .window_mode(WindowMode::Fullscreen)
        .insets(Insets::new(1, 2))
        .show();
    let screen = Rect::new(0, 0, 80, 24);
    assert_eq!(handle.card_rect(screen), screen);
    assert_eq!(handle.window_rect(screen), screen);
}

#[test]
fn normal_card_is_bounded_by_screen_minus_insets() {
    let handle = DialogBuilder::new()
        .title("T")
        .message("A dialog message that wraps across some rows of the card.")
        .insets(Insets::new(1, 2))
        .show();
    let screen = Rect::new(0, 0, 80, 24);
    let win = handle.window_rect(screen);
    assert_eq!(win, Rect::new(0, 1, 80, 21));

    let card = handle.card_rect(screen);
    assert!(!card.is_empty());
    assert!(card.width < screen.width);
    assert!(card.y >= win.y && card.bottom() <= win.bottom());
    assert!(card.x >= win.x && card.right() <= win.right());
}

#[test]
fn gravity_moves_the_card() {
    let screen = Rect::new(0, 0, 60, 20);
    let top = DialogBuilder::new()
        .title("T")
        .gravity(Gravity::Top)
        .show();
    let bottom = DialogBuilder::new()
        .title("T")
        .gravity(Gravity::Bottom)
        .show();
    assert!(top.card_rect(screen).y < bottom.card_rect(screen).y);
    assert_eq!(bottom.card_rect(screen).bottom(), screen.bottom());
}

#[test]
fn mouse_click_on_button_routes_through_hit_grid() {
    let events = log();
    let pressed = events.clone();
    let mut handle = DialogBuilder::new()
        .title("Pick")
        .left_button("Yes", move |_| pressed.borrow_mut().push("yes".into()))
        .right_button("No", |_| {})
        .show();

    let screen = Rect::new(0, 0, 60, 20);
    let mut frame = Frame::with_hit_grid(60, 20);
    handle.render(screen, &mut frame);

    // Find a cell owned by the left button (hit data 0).
    let mut target = None;
    for y in 0..20 {
        for x in 0..60 {
            if let Some((_, HitRegion::Button, 0)) = frame.hit_test(x, y) {
                target = Some((x, y));
            }
        }
    }
    let (x, y) = target.expect("left button registered a hit region");

    let click = Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        x,
        y,
    ));
    let hit = frame.hit_test(x, y);
    let result = handle.handle_event(&click, hit);
    assert_eq!(result, Some(DialogEvent::ButtonPressed(Slot::Left)));
    assert_eq!(*events.borrow(), vec!["yes"]);
    assert!(!handle.is_showing());
}

#[test]
fn backdrop_click_cancels_when_cancelable() {
    let mut handle = DialogBuilder::new().title("T").show();
    let screen = Rect::new(0, 0, 60, 20);
    let mut frame = Frame::with_hit_grid(60, 20);
    handle.render(screen, &mut frame);

    // The screen corner lies on the backdrop, outside the card.
    let hit = frame.hit_test(0, 0);
    assert!(matches!(hit, Some((_, HitRegion::Backdrop, _))));

    let click = Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        0,
        0,
    ));
    assert_eq!(
        handle.handle_event(&click, hit),
        Some(DialogEvent::Cancelled)
    );
}

#[test]
fn card_click_does_not_dismiss() {
    let mut handle = DialogBuilder::new().title("T").show();
    let screen = Rect::new(0, 0, 60, 20);
    let mut frame = Frame::with_hit_grid(60, 20);
    handle.render(screen, &mut frame);

    let card = handle.card_rect(screen);
    let (x, y) = (card.x + 1, card.y);
    let hit = frame.hit_test(x, y);
    assert!(matches!(hit, Some((_, HitRegion::Content, _))));

    let click = Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        x,
        y,
    ));
    assert_eq!(handle.handle_event(&click, hit), None);
    assert!(handle.is_showing());
}

#[test]
fn rendered_frame_contains_texts() {
    let mut frame = Frame::new(60, 20);
    let handle = DialogBuilder::new()
        .title("Update")
        .message("Ready to install")
        .left_button("Later", |_| {})
        .right_button("Now", |_| {})
        .show();
    handle.render(Rect::new(0, 0, 60, 20), &mut frame);
    let text = frame.buffer.to_text();
    assert!(text.contains("Update"), "missing title in:\n{text}");
    assert!(text.contains("Ready to install"), "missing message in:\n{text}");
    assert!(text.contains("[ Later ]"), "missing left button in:\n{text}");
    assert!(text.contains("[ Now ]"), "missing right button in:\n{text}");
}

#[test]
fn dismissed_dialog_renders_nothing() {
    let mut handle = DialogBuilder::new().title("Gone").show();
    handle.dismiss();
    let mut frame = Frame::new(40, 12);
    handle.render(Rect::new(0, 0, 40, 12), &mut frame);
    assert_eq!(frame.buffer.to_text().trim(), "");
}

#[cfg(feature = "linkify")]
#[test]
fn linkified_message_records_url_spans() {
    let handle = DialogBuilder::new()
        .message("docs at https://example.com/guide today")
        .linkify_message(true)
        .show();
    let view = handle.message_view();
    assert_eq!(view.links.len(), 1);
    assert_eq!(view.links[0].text(&view.text), "https://example.com/guide");

    let plain = DialogBuilder::new()
        .message("docs at https://example.com/guide today")
        .show();
    assert!(plain.message_view().links.is_empty());
}

#[test]
fn vertical_bar_renders_stacked_buttons() {
    let handle = DialogBuilder::new()
        .title("Pick one")
        .bar_orientation(BarOrientation::Vertical)
        .left_button("First", |_| {})
        .central_button("Second", |_| {})
        .show();
    let mut frame = Frame::new(50, 20);
    handle.render(Rect::new(0, 0, 50, 20), &mut frame);
    let text = frame.buffer.to_text();
    let first_row = text.lines().position(|l| l.contains("First"));
    let second_row = text.lines().position(|l| l.contains("Second"));
    assert!(first_row.is_some() && second_row.is_some(), "buttons in:\n{text}");
    assert!(first_row < second_row);
}

struct Badge;

impl Widget for Badge {
    fn render(&self, area: Rect, frame: &mut Frame) {
        for (i, c) in "badge".chars().enumerate() {
            frame
                .buffer
                .set(area.x + i as u16, area.y, curtain_render::cell::Cell::from_char(c));
        }
    }
}

#[test]
fn content_widget_renders_inside_card() {
    let handle = DialogBuilder::new()
        .title("With content")
        .content(Badge, 2)
        .show();
    let mut frame = Frame::new(50, 20);
    handle.render(Rect::new(0, 0, 50, 20), &mut frame);
    assert!(frame.buffer.to_text().contains("badge"));
}
