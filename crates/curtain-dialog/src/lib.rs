#![forbid(unsafe_code)]

//! Modal dialog overlay for curtain.
//!
//! A dialog is assembled by a fluent [`DialogBuilder`], which accumulates an
//! immutable [`DialogConfig`] value, and materialized into a [`DialogHandle`]
//! by `show()`. The handle owns the live sub-views (title, message, icon,
//! three button slots, background panel, window) and exposes the same setters
//! as the builder; on the handle they push changes into the materialized
//! overlay immediately, including animated reveal/conceal of button slots in
//! the vertical bar arrangement.
//!
//! Caller styling goes through a [`Customizer`]: a record of optional
//! callbacks invoked once per (re)build in a fixed order. Hook and icon
//! failures never abort the build; they are logged and forwarded to an
//! optional error observer.

pub mod builder;
pub mod config;
pub mod customize;
pub mod error;
pub mod handle;
pub mod icon;
pub mod links;
pub mod overlay;
pub mod slot;
pub mod views;

pub use builder::{DialogBuilder, PressCallback};
pub use config::{BarOrientation, ButtonSpec, DialogConfig, PaddingDu, Slot};
pub use customize::{Customizer, HookResult};
pub use error::{CustomizeError, DialogError, ErrorObserver, HookStage};
pub use handle::{DialogEvent, DialogHandle};
pub use icon::{Glyph, GlyphTable, IconId, IconResolver};
pub use links::LinkSpan;
pub use overlay::{Backdrop, Gravity, SizeConstraints, WindowMode, WindowView};
pub use slot::{Easing, SlotMetrics, SlotPhase, SlotTransition, TRANSITION_DURATION};
pub use views::{BackgroundPanel, ButtonView, IconView, MessageView, TitleView};

use curtain_core::geometry::Rect;
use curtain_render::buffer::Buffer;
use curtain_render::cell::Cell;
use curtain_render::frame::Frame;
use curtain_style::Style;

/// A `Widget` is a renderable component.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Helper to apply a style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs |= attrs;
    }
}

/// Apply a style to all cells in an area, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span at a position, stopping at `max_x` (exclusive).
///
/// Returns the x position after the last drawn character.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            frame.buffer.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Display width of a string in cells.
pub(crate) fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    UnicodeWidthStr::width(s)
}

/// Greedy word wrap. Returns byte ranges into `text`, one per row.
///
/// Ranges let the renderer map per-byte spans (links) onto wrapped rows.
pub(crate) fn wrap_ranges(text: &str, width: usize) -> Vec<(usize, usize)> {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    let mut out = Vec::new();
    if width == 0 {
        return out;
    }

    let mut offset = 0usize;
    for line in text.split('\n') {
        let line_start = offset;
        offset += line.len() + 1;
        if line.is_empty() {
            out.push((line_start, line_start));
            continue;
        }

        let mut row_start = 0usize;
        let mut col = 0usize;
        let mut break_at: Option<usize> = None;
        for (idx, grapheme) in line.grapheme_indices(true) {
            let w = UnicodeWidthStr::width(grapheme);
            if grapheme == " " {
                break_at = Some(idx);
            }
            if col + w > width && col > 0 {
                let split = match break_at {
                    Some(b) if b > row_start => b,
                    _ => idx,
                };
                out.push((line_start + row_start, line_start + split));
                row_start = if line[split..].starts_with(' ') {
                    split + 1
                } else {
                    split
                };
                // When the split lands on the current grapheme (a consumed
                // space), the new row starts after it.
                col = if row_start <= idx {
                    UnicodeWidthStr::width(&line[row_start..idx]) + w
                } else {
                    0
                };
                break_at = None;
            } else {
                col += w;
            }
        }
        out.push((line_start + row_start, line_start + line.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use curtain_render::cell::PackedRgba;

    #[test]
    fn apply_style_sets_fields() {
        let mut cell = Cell::default();
        apply_style(&mut cell, Style::new().fg(PackedRgba::rgb(255, 0, 0)).bold());
        assert_eq!(cell.fg, PackedRgba::rgb(255, 0, 0));
        assert!(cell.attrs.contains(curtain_render::cell::StyleFlags::BOLD));
    }

    #[test]
    fn set_style_area_preserves_content() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('A'));
        set_style_area(
            &mut buf,
            Rect::new(0, 0, 3, 1),
            Style::new().bg(PackedRgba::rgb(1, 2, 3)),
        );
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.content, 'A');
        assert_eq!(cell.bg, PackedRgba::rgb(1, 2, 3));
    }

    #[test]
    fn draw_text_span_clips_at_max_x() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 0, 0, "ABCDEF", Style::default(), 3);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.get(2, 0).unwrap().content, 'C');
        assert_eq!(frame.buffer.get(3, 0).unwrap().content, ' ');
    }

    #[test]
    fn display_width_counts_cells() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn wrap_breaks_on_words() {
        let text = "lorem ipsum dolor";
        let rows = wrap_ranges(text, 11);
        let lines: Vec<&str> = rows.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(lines, ["lorem ipsum", "dolor"]);
    }

    #[test]
    fn wrap_respects_newlines() {
        let text = "a\nb";
        let rows = wrap_ranges(text, 10);
        let lines: Vec<&str> = rows.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn wrap_splits_long_words_hard() {
        let text = "abcdefgh";
        let rows = wrap_ranges(text, 3);
        let lines: Vec<&str> = rows.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(lines, ["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_zero_width_is_empty() {
        assert!(wrap_ranges("anything", 0).is_empty());
    }
}
