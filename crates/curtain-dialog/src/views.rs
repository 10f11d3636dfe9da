#![forbid(unsafe_code)]

//! Materialized sub-views of a showing dialog.
//!
//! These are the objects the customization hooks receive and the read-back
//! accessors return. They are plain state; the handle keeps them in sync
//! with the configuration and the renderer draws from them every frame.

use curtain_core::geometry::Sides;
use curtain_style::Style;

use crate::config::Slot;
use crate::icon::Glyph;
use crate::links::LinkSpan;
use crate::slot::SlotMetrics;

/// The title element. Hidden entirely when the configured title is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub text: String,
    pub visible: bool,
    pub single_line: bool,
    pub style: Style,
}

impl Default for TitleView {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            single_line: false,
            style: Style::new().bold(),
        }
    }
}

/// The message element, with detected link spans.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub text: String,
    pub visible: bool,
    pub single_line: bool,
    pub style: Style,
    pub link_style: Style,
    pub links: Vec<LinkSpan>,
}

impl Default for MessageView {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            single_line: false,
            style: Style::new(),
            link_style: Style::new().underline(),
            links: Vec::new(),
        }
    }
}

/// The dialog icon shown next to the title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconView {
    pub glyph: Option<Glyph>,
    pub visible: bool,
    pub style: Style,
}

/// One button slot's view.
///
/// `natural` holds the metrics of the fully shown view; `metrics` the
/// current (possibly mid-transition) values the renderer uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub slot: Slot,
    pub label: String,
    pub glyph: Option<Glyph>,
    pub glyph_style: Style,
    pub visible: bool,
    pub style: Style,
    pub natural: SlotMetrics,
    pub metrics: SlotMetrics,
}

impl ButtonView {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            label: String::new(),
            glyph: None,
            glyph_style: Style::new(),
            visible: false,
            style: Style::new().bold(),
            natural: SlotMetrics::ZERO,
            metrics: SlotMetrics::ZERO,
        }
    }

    /// Label prefixed by the glyph, as rendered.
    pub fn display_label(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{} {}", glyph.symbol, self.label),
            None => self.label.clone(),
        }
    }
}

/// The card surface behind the dialog content.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundPanel {
    pub padding: Sides,
    pub style: Style,
    pub border: bool,
}

impl Default for BackgroundPanel {
    fn default() -> Self {
        Self {
            padding: Sides::default(),
            style: Style::new(),
            border: true,
        }
    }
}
