#![forbid(unsafe_code)]

//! Overlay window geometry: backdrop, gravity, window modes, size limits.
//!
//! The overlay renders in two layers: a tinted backdrop across the window
//! area, then the dialog card positioned inside it. In `Normal` mode the
//! window area is the screen minus the host's vertical insets and the card
//! wraps its content; in `Fullscreen` mode the card fills the entire screen.

use curtain_core::geometry::{Insets, Rect, Sides, Size};
use curtain_render::cell::PackedRgba;
use curtain_render::frame::HitRegion;

/// Hit region tag for the overlay backdrop.
pub const HIT_BACKDROP: HitRegion = HitRegion::Backdrop;
/// Hit region tag for the dialog card.
pub const HIT_CARD: HitRegion = HitRegion::Content;
/// Hit region tag for a dialog button; the hit data carries the slot id.
pub const HIT_BUTTON: HitRegion = HitRegion::Button;

/// Vertical placement of the card within the window area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gravity {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Window sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowMode {
    /// Screen minus insets; the card wraps its content.
    #[default]
    Normal,
    /// The card fills the whole screen.
    Fullscreen,
}

/// Backdrop tint behind the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub color: PackedRgba,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            color: PackedRgba::BLACK,
            opacity: 0.6,
        }
    }
}

impl Backdrop {
    pub fn new(color: PackedRgba, opacity: f32) -> Self {
        Self { color, opacity }
    }

    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Min/max bounds applied to the card in `Normal` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizeConstraints {
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
}

impl SizeConstraints {
    pub const fn new() -> Self {
        Self {
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    pub fn min_width(mut self, value: u16) -> Self {
        self.min_width = Some(value);
        self
    }

    pub fn max_width(mut self, value: u16) -> Self {
        self.max_width = Some(value);
        self
    }

    pub fn min_height(mut self, value: u16) -> Self {
        self.min_height = Some(value);
        self
    }

    pub fn max_height(mut self, value: u16) -> Self {
        self.max_height = Some(value);
        self
    }

    /// Fit a desired content size into these bounds, never exceeding
    /// `available`.
    pub fn fit(self, desired: Size, available: Size) -> Size {
        let mut width = desired.width;
        let mut height = desired.height;

        if let Some(max) = self.max_width {
            width = width.min(max);
        }
        if let Some(max) = self.max_height {
            height = height.min(max);
        }
        if let Some(min) = self.min_width {
            width = width.max(min);
        }
        if let Some(min) = self.min_height {
            height = height.max(min);
        }

        Size::new(width.min(available.width), height.min(available.height))
    }
}

/// The materialized window sub-view.
///
/// Exposed to the window customization hook; mutations take effect on the
/// next render because all geometry is resolved per-frame from the screen
/// rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowView {
    pub mode: WindowMode,
    pub gravity: Gravity,
    pub insets: Insets,
    pub backdrop: Backdrop,
    pub constraints: SizeConstraints,
}

impl WindowView {
    pub fn new(
        mode: WindowMode,
        gravity: Gravity,
        insets: Insets,
        backdrop: Backdrop,
        constraints: SizeConstraints,
    ) -> Self {
        Self {
            mode,
            gravity,
            insets,
            backdrop,
            constraints,
        }
    }

    /// The overlay window area for a given screen.
    pub fn window_rect(&self, screen: Rect) -> Rect {
        match self.mode {
            WindowMode::Fullscreen => screen,
            WindowMode::Normal => {
                screen.inner(Sides::new(0, self.insets.top, 0, self.insets.bottom))
            }
        }
    }

    /// The card area for a given screen and desired content size.
    ///
    /// Always clamped within the window area.
    pub fn card_rect(&self, screen: Rect, content: Size) -> Rect {
        let win = self.window_rect(screen);
        if win.is_empty() {
            return Rect::new(win.x, win.y, 0, 0);
        }
        if self.mode == WindowMode::Fullscreen {
            return win;
        }

        let size = self.constraints.fit(content, win.size());
        if size.width == 0 || size.height == 0 {
            return Rect::new(win.x, win.y, 0, 0);
        }

        let x = win.x + (win.width - size.width) / 2;
        let y = match self.gravity {
            Gravity::Top => win.y,
            Gravity::Center => win.y + (win.height - size.height) / 2,
            Gravity::Bottom => win.bottom() - size.height,
        };
        Rect::new(x, y, size.width, size.height)
    }
}
