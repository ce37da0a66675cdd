#![forbid(unsafe_code)]

//! Cell rasterizer: draw a [`Scene`] into a character canvas.
//!
//! The canvas is a table. Each bar row gets a label column sized to the
//! widest label, optional right-aligned value and percentage columns, and a
//! bar area that takes whatever width is left. The normalized track maps
//! onto the bar area; segment edges are rounded from their fractional
//! positions so neighbouring segments share an edge and never leave gaps.
//!
//! Every drawn cell is registered in a [`HitGrid`], so the canvas can turn a
//! pointer position back into a [`ClickTarget`].

use tabbar_core::{Rect, RowId, Size};

use crate::buffer::{Buffer, Cell, display_width};
use crate::hit::{ClickTarget, HitGrid, HitRegion};
use crate::scene::{AxisLine, Scene, SegmentShape};

/// Character set used for bars and axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy)]
struct Glyphs {
    segment: char,
    axis: char,
    axis_header: char,
    axis_footer: char,
}

impl GlyphMode {
    const fn glyphs(self) -> Glyphs {
        match self {
            Self::Unicode => Glyphs {
                segment: '█',
                axis: '│',
                axis_header: '┬',
                axis_footer: '┴',
            },
            Self::Ascii => Glyphs {
                segment: '#',
                axis: '|',
                axis_header: '|',
                axis_footer: '|',
            },
        }
    }
}

/// A rasterized scene with its hit grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: Buffer,
    hits: HitGrid,
    generation: u64,
    identities: Vec<RowId>,
    bar_area: Rect,
}

impl Canvas {
    /// The drawn cells.
    #[inline]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Render pass this canvas was drawn from.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Region covered by bar areas (all bar rows, bar columns only).
    #[inline]
    pub fn bar_area(&self) -> Rect {
        self.bar_area
    }

    /// Raw region at a position.
    #[inline]
    pub fn region_at(&self, x: u16, y: u16) -> HitRegion {
        self.hits.hit_test(x, y)
    }

    /// Resolve a pointer position to what was drawn there.
    ///
    /// Labels, value cells, and axis marker rows are not targets.
    #[must_use]
    pub fn target_at(&self, x: u16, y: u16) -> Option<ClickTarget> {
        match self.hits.hit_test(x, y) {
            HitRegion::Segment(index) => {
                self.identities
                    .get(index as usize)
                    .map(|identity| ClickTarget::Segment {
                        generation: self.generation,
                        identity: identity.clone(),
                    })
            }
            HitRegion::Background(_) => Some(ClickTarget::Background {
                generation: self.generation,
            }),
            HitRegion::None => None,
        }
    }

    /// Plain-text rendering of the canvas.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.buffer.to_text()
    }
}

/// Column positions for one canvas.
#[derive(Debug, Clone, Copy)]
struct Columns {
    label_w: u16,
    value_x: u16,
    value_w: u16,
    pct_x: u16,
    pct_w: u16,
    bar_x: u16,
    bar_w: u16,
}

/// Draws scenes into [`Canvas`]es.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    glyph_mode: GlyphMode,
    column_gap: u16,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            glyph_mode: GlyphMode::Unicode,
            column_gap: 1,
        }
    }

    pub fn glyph_mode(mut self, mode: GlyphMode) -> Self {
        self.glyph_mode = mode;
        self
    }

    /// Blank columns between the text columns and the bar area.
    pub fn column_gap(mut self, gap: u16) -> Self {
        self.column_gap = gap;
        self
    }

    fn columns(&self, scene: &Scene, width: u16) -> Columns {
        // Labels may take at most a third of the width.
        let label_w = widest(scene.rows.iter().map(|r| r.label.as_str())).min(width / 3);
        let value_w = if scene.show_value {
            widest(scene.rows.iter().filter_map(|r| r.value.as_deref()))
        } else {
            0
        };
        let pct_w = if scene.show_percentage {
            widest(scene.rows.iter().filter_map(|r| r.percentage.as_deref()))
        } else {
            0
        };

        let gap = self.column_gap;
        let mut x = label_w.saturating_add(gap);
        let value_x = x;
        if value_w > 0 {
            x = x.saturating_add(value_w).saturating_add(gap);
        }
        let pct_x = x;
        if pct_w > 0 {
            x = x.saturating_add(pct_w).saturating_add(gap);
        }
        let bar_x = x.min(width);

        Columns {
            label_w,
            value_x,
            value_w,
            pct_x,
            pct_w,
            bar_x,
            bar_w: width - bar_x,
        }
    }

    /// Draw `scene` into a canvas of `size` cells.
    pub fn rasterize(&self, scene: &Scene, size: Size) -> Canvas {
        let glyphs = self.glyph_mode.glyphs();
        let theme = scene.theme;
        let blank = Cell::new(' ', theme.foreground, theme.background);
        let mut buffer = Buffer::new(size, blank);
        let mut hits = HitGrid::new(size);
        let cols = self.columns(scene, size.width);

        let header_rows = u16::from(scene.header_axis.is_some());
        let footer_rows = u16::from(scene.footer_axis.is_some());
        let bar_count = scene.rows.len().min(u16::MAX as usize) as u16;
        let available = size
            .height
            .saturating_sub(header_rows)
            .saturating_sub(footer_rows);
        let bar_h = if bar_count == 0 {
            0
        } else {
            (available / bar_count).max(1)
        };
        let inset = (f64::from(bar_h) * SegmentShape::VERTICAL_INSET).floor() as u16;

        let track_col = |fraction: f64| -> u16 {
            let f = if fraction.is_finite() {
                fraction.clamp(0.0, 1.0)
            } else {
                0.0
            };
            ((f * f64::from(cols.bar_w)).round() as u16).min(cols.bar_w)
        };
        let axis_x = |axis: &AxisLine| -> Option<u16> {
            (cols.bar_w > 0)
                .then(|| cols.bar_x + track_col(axis.offset).min(cols.bar_w - 1))
        };

        if let Some(axis) = &scene.header_axis
            && let Some(x) = axis_x(axis)
        {
            buffer.set(x, 0, Cell::new(glyphs.axis_header, axis.color, theme.background));
        }

        let mut segment_index: u32 = 0;
        for (i, row) in scene.rows.iter().enumerate() {
            let top = header_rows.saturating_add((i as u16).saturating_mul(bar_h));
            let text_y = top + (bar_h - 1) / 2;

            buffer.set_string(0, text_y, &row.label, cols.label_w, theme.foreground, theme.background);
            if let Some(value) = &row.value {
                right_align(&mut buffer, cols.value_x, cols.value_w, text_y, value, blank);
            }
            if let Some(pct) = &row.percentage {
                right_align(&mut buffer, cols.pct_x, cols.pct_w, text_y, pct, blank);
            }

            let bar_rect = Rect::new(cols.bar_x, top, cols.bar_w, bar_h);
            hits.register(bar_rect, HitRegion::Background(i as u32));

            let seg_top = top + inset;
            let seg_h = bar_h - 2 * inset;
            for seg in &row.segments {
                let x0 = track_col(seg.offset);
                let x1 = track_col(seg.end());
                if x1 > x0 {
                    let rect = Rect::new(cols.bar_x + x0, seg_top, x1 - x0, seg_h);
                    buffer.fill(rect, Cell::new(glyphs.segment, seg.color, theme.background));
                    hits.register(rect, HitRegion::Segment(segment_index));
                }
                segment_index += 1;
            }

            if let Some(axis) = &row.axis
                && let Some(x) = axis_x(axis)
            {
                for y in top..top.saturating_add(bar_h) {
                    if let Some(cell) = buffer.get_mut(x, y) {
                        // Keep the segment color visible behind the rule.
                        let behind = if cell.ch == glyphs.segment {
                            cell.fg
                        } else {
                            cell.bg
                        };
                        *cell = Cell::new(glyphs.axis, axis.color, behind);
                    }
                }
            }
        }

        let bars_bottom = header_rows.saturating_add(bar_count.saturating_mul(bar_h));
        if let Some(axis) = &scene.footer_axis
            && let Some(x) = axis_x(axis)
        {
            buffer.set(
                x,
                bars_bottom,
                Cell::new(glyphs.axis_footer, axis.color, theme.background),
            );
        }

        tabbar_core::trace!(
            generation = scene.generation,
            bars = bar_count,
            bar_h,
            bar_w = cols.bar_w,
            "rasterized scene"
        );

        Canvas {
            buffer,
            hits,
            generation: scene.generation,
            identities: scene.segments().map(|s| s.identity.clone()).collect(),
            bar_area: Rect::new(cols.bar_x, header_rows, cols.bar_w, bars_bottom - header_rows),
        }
    }
}

fn widest<'a>(texts: impl Iterator<Item = &'a str>) -> u16 {
    texts
        .map(display_width)
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

fn right_align(buffer: &mut Buffer, x: u16, width: u16, y: u16, text: &str, blank: Cell) {
    let w = (display_width(text).min(width as usize)) as u16;
    let start = x.saturating_add(width - w);
    buffer.set_string(start, y, text, width, blank.fg, blank.bg);
}
