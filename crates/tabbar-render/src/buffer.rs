#![forbid(unsafe_code)]

//! Cell grid storage.
//!
//! Cells are stored in row-major order: `index = y * width + x`. Writes
//! outside the grid are dropped silently, so drawing code never has to clip.

use tabbar_core::{Color, Rect, Size};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::TRANSPARENT,
        }
    }
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

/// A 2D grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with `fill`. Zero-sized buffers are allowed.
    pub fn new(size: Size, fill: Cell) -> Self {
        Self {
            width: size.width,
            height: size.height,
            cells: vec![fill; size.area()],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(Size::new(self.width, self.height))
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Fill a rectangular region with the given cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at `(x, y)`, never past `max_width` columns.
    ///
    /// Text is cut at grapheme boundaries; a wide grapheme that would
    /// straddle the limit is dropped. Returns the number of columns used.
    pub fn set_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Color,
        bg: Color,
    ) -> u16 {
        let mut used: u16 = 0;
        for grapheme in text.graphemes(true) {
            let w = grapheme.width() as u16;
            if w == 0 {
                continue;
            }
            if used.saturating_add(w) > max_width {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(x.saturating_add(used), y, Cell::new(ch, fg, bg));
            // Continuation columns of wide graphemes stay blank.
            for extra in 1..w {
                self.set(x.saturating_add(used + extra), y, Cell::new(' ', fg, bg));
            }
            used += w;
        }
        used
    }

    /// Raw access to the cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The characters of one row as a string with trailing spaces trimmed.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let line: String = self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect();
        line.trim_end().to_string()
    }

    /// All rows joined with `\n`, for snapshots and plain-text export.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Display width of `text` in columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    text.width()
}
