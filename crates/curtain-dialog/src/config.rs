#![forbid(unsafe_code)]

//! Dialog configuration values.
//!
//! `DialogConfig` is a plain value: everything in it derives `Clone` and
//! `PartialEq`. Click callbacks, lifecycle listeners, and customization
//! hooks are held separately by the builder and the handle.

use curtain_core::geometry::{Insets, Sides};
use curtain_core::metrics::Metrics;

use crate::icon::IconId;
use crate::overlay::{Backdrop, Gravity, SizeConstraints, WindowMode};

/// One of the three fixed button positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Left,
    Central,
    Right,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Central, Slot::Right];

    /// Stable identifier: left 0, central 1, right 2.
    pub const fn id(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Central => 1,
            Self::Right => 2,
        }
    }

    pub const fn index(self) -> usize {
        self.id() as usize
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Left),
            1 => Some(Self::Central),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

/// Arrangement of the button bar.
///
/// Slot visibility changes animate only in the `Vertical` arrangement; the
/// `Horizontal` bar flips visibility instantly. This asymmetry is a known,
/// deliberate limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Desired content of a button slot.
///
/// A slot renders as present only when a spec is set and its label is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonSpec {
    pub label: String,
    pub icon: Option<IconId>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_present(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Card content padding in dialog units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddingDu {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Default for PaddingDu {
    fn default() -> Self {
        Self::uniform(8)
    }
}

impl PaddingDu {
    pub const fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Convert to cell paddings.
    pub fn to_sides(self, metrics: &Metrics) -> Sides {
        Sides::new(
            metrics.cells(self.left),
            metrics.cells(self.top),
            metrics.cells(self.right),
            metrics.cells(self.bottom),
        )
    }
}

/// The complete dialog configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    pub title: String,
    pub message: String,
    pub icon: Option<IconId>,
    pub buttons: [Option<ButtonSpec>; 3],
    pub cancelable: bool,
    pub dismiss_on_press: bool,
    pub linkify_message: bool,
    pub title_single_line: bool,
    pub message_single_line: bool,
    pub padding: PaddingDu,
    pub gravity: Gravity,
    pub bar_orientation: BarOrientation,
    pub icon_auto_color: bool,
    pub mode: WindowMode,
    pub insets: Insets,
    pub backdrop: Backdrop,
    pub constraints: SizeConstraints,
    /// Rows reserved for the embedded content widget.
    pub content_rows: u16,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            icon: None,
            buttons: [None, None, None],
            cancelable: true,
            dismiss_on_press: true,
            linkify_message: false,
            title_single_line: false,
            message_single_line: false,
            padding: PaddingDu::default(),
            gravity: Gravity::Center,
            bar_orientation: BarOrientation::Horizontal,
            icon_auto_color: true,
            mode: WindowMode::Normal,
            insets: Insets::ZERO,
            backdrop: Backdrop::default(),
            constraints: SizeConstraints::new().min_width(24).max_width(60),
            content_rows: 0,
        }
    }
}

impl DialogConfig {
    pub fn button(&self, slot: Slot) -> Option<&ButtonSpec> {
        self.buttons[slot.index()].as_ref()
    }

    pub fn set_button(&mut self, slot: Slot, spec: Option<ButtonSpec>) {
        self.buttons[slot.index()] = spec;
    }

    /// Whether the slot's target state is Present: a spec is set and its
    /// label is non-empty.
    pub fn slot_present(&self, slot: Slot) -> bool {
        self.button(slot).is_some_and(ButtonSpec::is_present)
    }
}
