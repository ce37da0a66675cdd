#![forbid(unsafe_code)]

//! Hit testing: map canvas cells back to what was drawn there.

use tabbar_core::{Rect, RowId, Size};

/// What a canvas cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// Nothing clickable (labels, margins, axis header rows).
    #[default]
    None,
    /// Bar area of the bar at this index, outside any segment.
    Background(u32),
    /// The segment at this scene-wide index.
    Segment(u32),
}

/// Hit testing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitRegion>,
}

impl HitGrid {
    /// Create an empty grid.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            cells: vec![HitRegion::None; size.area()],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a region. Later registrations overwrite earlier ones.
    pub fn register(&mut self, rect: Rect, region: HitRegion) {
        // Use usize to avoid overflow for large coordinates
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize);
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize);
        if rect.x as usize >= x_end || rect.y as usize >= y_end {
            return;
        }

        for y in rect.y as usize..y_end {
            let row_start = y * self.width as usize;
            self.cells[row_start + rect.x as usize..row_start + x_end].fill(region);
        }
    }

    /// Region at `(x, y)`; outside the grid is [`HitRegion::None`].
    #[inline]
    pub fn hit_test(&self, x: u16, y: u16) -> HitRegion {
        self.index(x, y)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitRegion::None);
    }
}

/// A resolved pointer target, tagged with the render pass that drew it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A segment, identified by its row.
    Segment { generation: u64, identity: RowId },
    /// The bar area around the segments.
    Background { generation: u64 },
}

impl ClickTarget {
    /// Render pass the target was drawn by.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Segment { generation, .. } | Self::Background { generation } => *generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_hit() {
        let mut grid = HitGrid::new(Size::new(20, 5));
        grid.register(Rect::new(5, 1, 10, 1), HitRegion::Background(0));
        grid.register(Rect::new(7, 1, 3, 1), HitRegion::Segment(4));

        assert_eq!(grid.hit_test(5, 1), HitRegion::Background(0));
        assert_eq!(grid.hit_test(7, 1), HitRegion::Segment(4));
        assert_eq!(grid.hit_test(9, 1), HitRegion::Segment(4));
        assert_eq!(grid.hit_test(10, 1), HitRegion::Background(0));
        assert_eq!(grid.hit_test(15, 1), HitRegion::None);
        assert_eq!(grid.hit_test(5, 0), HitRegion::None);
    }

    #[test]
    fn out_of_bounds_is_none() {
        let mut grid = HitGrid::new(Size::new(4, 4));
        grid.register(Rect::new(2, 2, 100, 100), HitRegion::Segment(0));
        assert_eq!(grid.hit_test(3, 3), HitRegion::Segment(0));
        assert_eq!(grid.hit_test(4, 3), HitRegion::None);
        assert_eq!(grid.hit_test(u16::MAX, u16::MAX), HitRegion::None);
    }

    #[test]
    fn clear_resets() {
        let mut grid = HitGrid::new(Size::new(4, 1));
        grid.register(Rect::new(0, 0, 4, 1), HitRegion::Background(1));
        grid.clear();
        assert_eq!(grid.hit_test(0, 0), HitRegion::None);
    }

    #[test]
    fn target_generation() {
        let seg = ClickTarget::Segment {
            generation: 3,
            identity: RowId::from("a"),
        };
        assert_eq!(seg.generation(), 3);
        assert_eq!(ClickTarget::Background { generation: 9 }.generation(), 9);
    }
}
