#![forbid(unsafe_code)]

//! Optional-field styles that cascade.
//!
//! A `Style` leaves unset fields as `None` so styles can be layered:
//! `merge` fills gaps from a fallback, `patch` overrides in place.

use curtain_render::cell::{PackedRgba, StyleFlags};

/// Foreground, background, and attribute flags; each optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    pub fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    fn add_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_else(StyleFlags::empty) | flag);
        self
    }

    pub fn bold(self) -> Self {
        self.add_flag(StyleFlags::BOLD)
    }

    pub fn italic(self) -> Self {
        self.add_flag(StyleFlags::ITALIC)
    }

    pub fn underline(self) -> Self {
        self.add_flag(StyleFlags::UNDERLINE)
    }

    pub fn reverse(self) -> Self {
        self.add_flag(StyleFlags::REVERSE)
    }

    pub fn dim(self) -> Self {
        self.add_flag(StyleFlags::DIM)
    }

    /// Fill this style's unset fields from `fallback`.
    ///
    /// Set attribute flags from both sides are combined.
    pub fn merge(&self, fallback: &Style) -> Style {
        let attrs = match (self.attrs, fallback.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs,
        }
    }

    /// Override this style's fields with `other`'s set fields.
    pub fn patch(&mut self, other: &Style) {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        if other.attrs.is_some() {
            self.attrs = other.attrs;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }
}
