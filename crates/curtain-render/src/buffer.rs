#![forbid(unsafe_code)]

//! A bounds-safe grid of cells.
//!
//! Writes outside the buffer are ignored; widgets never need to pre-clip.

use crate::cell::Cell;
use curtain_core::geometry::Rect;

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The buffer's full area as a rect at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill an area with a cell, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Render the buffer's characters as lines of text.
    ///
    /// Trailing spaces per row are trimmed. Styling is not represented.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let mut row = String::new();
            for x in 0..self.width {
                row.push(self.get(x, y).map_or(' ', |c| c.content));
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut buf = Buffer::new(4, 2);
        buf.set(1, 1, Cell::from_char('A'));
        assert_eq!(buf.get(1, 1).unwrap().content, 'A');
        assert_eq!(buf.get(0, 0).unwrap().content, ' ');
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('A'));
        assert!(buf.get(5, 5).is_none());
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(3, 3);
        buf.fill(Rect::new(1, 1, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.get(1, 1).unwrap().content, '#');
        assert_eq!(buf.get(2, 2).unwrap().content, '#');
        assert_eq!(buf.get(0, 0).unwrap().content, ' ');
    }

    #[test]
    fn to_text_trims_trailing_spaces() {
        let mut buf = Buffer::new(5, 2);
        buf.set(0, 0, Cell::from_char('h'));
        buf.set(1, 0, Cell::from_char('i'));
        assert_eq!(buf.to_text(), "hi\n\n");
    }
}
