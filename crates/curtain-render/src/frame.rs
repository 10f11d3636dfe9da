#![forbid(unsafe_code)]

//! A frame: the per-present render target.
//!
//! A frame wraps a cell buffer, cursor state, and an optional hit grid. The
//! hit grid records which interactive region owns each cell so the event loop
//! can route mouse clicks back to widgets. Later registrations overwrite
//! earlier ones; the topmost overlay wins hit testing.

use crate::buffer::Buffer;
use curtain_core::geometry::Rect;

/// Identifies the widget instance that registered a hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitId(pub u64);

impl HitId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Which part of a widget a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    Content,
    Backdrop,
    Button,
    Custom(u16),
}

/// Free-form payload attached to a hit region (e.g. a button index).
pub type HitData = u64;

#[derive(Debug, Clone)]
struct HitGrid {
    width: u16,
    cells: Vec<Option<(HitId, HitRegion, HitData)>>,
}

impl HitGrid {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}

/// The per-present render target.
#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: Buffer,
    pub cursor_position: Option<(u16, u16)>,
    pub cursor_visible: bool,
    hits: Option<HitGrid>,
}

impl Frame {
    /// Create a frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor_position: None,
            cursor_visible: false,
            hits: None,
        }
    }

    /// Create a frame with a hit grid for mouse routing.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            hits: Some(HitGrid::new(width, height)),
            ..Self::new(width, height)
        }
    }

    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Register a hit region over an area. No-op without a hit grid.
    pub fn register_hit(&mut self, area: Rect, id: HitId, region: HitRegion, data: HitData) {
        let clipped = area.intersection(self.buffer.area());
        let Some(grid) = self.hits.as_mut() else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                let i = grid.index(x, y);
                grid.cells[i] = Some((id, region, data));
            }
        }
    }

    /// Look up the hit region owning a cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        let grid = self.hits.as_ref()?;
        if x >= self.buffer.width() || y >= self.buffer.height() {
            return None;
        }
        grid.cells[grid.index(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_without_grid_never_hits() {
        let mut frame = Frame::new(10, 4);
        frame.register_hit(Rect::new(0, 0, 10, 4), HitId::new(1), HitRegion::Content, 0);
        assert_eq!(frame.hit_test(1, 1), None);
    }

    #[test]
    fn register_and_test() {
        let mut frame = Frame::with_hit_grid(10, 4);
        frame.register_hit(Rect::new(2, 1, 3, 2), HitId::new(7), HitRegion::Button, 42);
        assert_eq!(
            frame.hit_test(3, 2),
            Some((HitId::new(7), HitRegion::Button, 42))
        );
        assert_eq!(frame.hit_test(0, 0), None);
    }

    #[test]
    fn later_registration_wins() {
        let mut frame = Frame::with_hit_grid(8, 8);
        frame.register_hit(Rect::new(0, 0, 8, 8), HitId::new(1), HitRegion::Backdrop, 0);
        frame.register_hit(Rect::new(2, 2, 4, 4), HitId::new(1), HitRegion::Content, 0);
        assert_eq!(
            frame.hit_test(3, 3),
            Some((HitId::new(1), HitRegion::Content, 0))
        );
        assert_eq!(
            frame.hit_test(0, 0),
            Some((HitId::new(1), HitRegion::Backdrop, 0))
        );
    }

    #[test]
    fn hit_outside_bounds_is_none() {
        let frame = Frame::with_hit_grid(4, 4);
        assert_eq!(frame.hit_test(9, 9), None);
    }
}
