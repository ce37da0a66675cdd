#![forbid(unsafe_code)]

//! Scene builder: an abstract, backend-independent description of the chart.
//!
//! A [`Scene`] is a pure function of the laid-out chart, the host theme, and
//! a [`SceneConfig`]. It owns everything it needs (labels, identities,
//! colors), so it can outlive the rows it was built from and be handed to any
//! drawing backend: the bundled [`Rasterizer`](crate::raster::Rasterizer), an
//! SVG writer, or a host DOM.
//!
//! Layout of one scene, top to bottom:
//!
//! ```text
//!                          ┬            header axis marker (negative data only)
//! label   value   pct  ████│██████      one row per group
//! label   value   pct    ██│███
//!                          ┴            footer axis marker
//! ```

use tabbar_core::{Color, RowId};
use tabbar_layout::{ChartLayout, Sign, format_net};

/// Host theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Text and axis color.
    pub foreground: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

/// Which optional parts of the scene to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    /// Draw the zero axis when some stack is negative.
    pub show_axis: bool,
    /// Emit a value cell per row.
    pub show_value: bool,
    /// Emit a percentage cell per row.
    pub show_percentage: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_value: true,
            show_percentage: true,
        }
    }
}

/// One drawable segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentShape {
    /// Identity of the originating row.
    pub identity: RowId,
    pub color: Color,
    /// Left edge on the normalized track.
    pub offset: f64,
    /// Extent on the normalized track.
    pub width: f64,
    pub sign: Sign,
    /// Host-formatted value, for tooltips.
    pub text: String,
}

impl SegmentShape {
    /// Fraction of the bar height left empty above and below a segment.
    pub const VERTICAL_INSET: f64 = 0.1;

    /// Right edge on the normalized track.
    #[inline]
    #[must_use]
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }
}

/// A vertical reference line at the zero point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    /// Position on the normalized track.
    pub offset: f64,
    pub color: Color,
}

/// One table row: label cells plus its bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    /// Bar total, when the value column is shown.
    pub value: Option<String>,
    /// Share of the grand total, when the percentage column is shown.
    pub percentage: Option<String>,
    /// Segments in stacking order.
    pub segments: Vec<SegmentShape>,
    /// Zero axis overlaid on this bar.
    pub axis: Option<AxisLine>,
}

/// The full drawable description of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Render pass that produced this scene.
    pub generation: u64,
    pub theme: Theme,
    pub show_value: bool,
    pub show_percentage: bool,
    pub header_axis: Option<AxisLine>,
    pub rows: Vec<BarRow>,
    pub footer_axis: Option<AxisLine>,
}

impl Scene {
    /// A scene with no rows.
    #[must_use]
    pub fn empty(generation: u64, theme: Theme, config: &SceneConfig) -> Self {
        Self {
            generation,
            theme,
            show_value: config.show_value,
            show_percentage: config.show_percentage,
            header_axis: None,
            rows: Vec::new(),
            footer_axis: None,
        }
    }

    /// Whether a zero axis is drawn.
    #[inline]
    #[must_use]
    pub fn has_axis(&self) -> bool {
        self.header_axis.is_some()
    }

    /// Every segment in row order; the position is the segment's index.
    pub fn segments(&self) -> impl Iterator<Item = &SegmentShape> {
        self.rows.iter().flat_map(|row| row.segments.iter())
    }

    /// Total number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.rows.iter().map(|row| row.segments.len()).sum()
    }
}

/// Build the scene for one pass.
pub fn build_scene(
    chart: &ChartLayout<'_>,
    theme: &Theme,
    config: &SceneConfig,
    generation: u64,
) -> Scene {
    let axis = config
        .show_axis
        .then(|| chart.zero_offset())
        .flatten()
        .map(|offset| AxisLine {
            offset,
            color: theme.foreground,
        });

    let rows = chart
        .bars
        .iter()
        .map(|bar| BarRow {
            label: bar.label.to_string(),
            value: config.show_value.then(|| format_net(bar.net())),
            percentage: config
                .show_percentage
                .then(|| bar.percentage.to_string()),
            segments: bar
                .segments
                .iter()
                .map(|seg| SegmentShape {
                    identity: seg.row.identity.clone(),
                    color: seg.row.color,
                    offset: seg.offset,
                    width: seg.width,
                    sign: seg.sign,
                    text: seg.row.formatted_value.clone(),
                })
                .collect(),
            axis,
        })
        .collect();

    Scene {
        generation,
        theme: *theme,
        show_value: config.show_value,
        show_percentage: config.show_percentage,
        header_axis: axis,
        rows,
        footer_axis: axis,
    }
}
