#![forbid(unsafe_code)]

//! Layout stage: place every row as a segment on one shared normalized track.
//!
//! The track spans `[min_negative_sum, max_positive_sum]` mapped onto
//! `[0, 1]`. Positive segments of a bar stack rightward from the zero point
//! and non-positive segments stack leftward from it, so every bar shares the
//! same zero axis regardless of how its signs interleave.

use tabbar_core::Row;

use crate::aggregate::{Aggregates, GroupAggregate, aggregate, layout_value};
use crate::format::Percentage;
use crate::group::{Group, group_rows};

/// Stacking direction of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

/// The shared horizontal scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min_negative_sum: f64,
    pub max_positive_sum: f64,
}

impl Scale {
    /// Total extent; zero only when every value is zero.
    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_positive_sum - self.min_negative_sum
    }

    /// Whether the scale has no extent.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range() <= 0.0
    }

    /// Map a distance in value units onto the normalized track.
    ///
    /// A degenerate or overflowed scale maps everything to `0`, as does a
    /// non-finite distance.
    #[inline]
    #[must_use]
    pub fn fraction(&self, distance: f64) -> f64 {
        let range = self.range();
        if range > 0.0 && range.is_finite() && distance.is_finite() {
            distance / range
        } else {
            0.0
        }
    }

    /// Position of the zero axis, present only when some stack goes negative.
    #[must_use]
    pub fn zero_offset(&self) -> Option<f64> {
        (self.min_negative_sum < 0.0).then(|| self.fraction(self.min_negative_sum.abs()))
    }
}

/// One row placed on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub row: &'a Row,
    /// Left edge in `[0, 1]`.
    pub offset: f64,
    /// Extent in `[0, 1]`.
    pub width: f64,
    pub sign: Sign,
}

impl Segment<'_> {
    /// Right edge in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }
}

/// A laid-out bar: one group with its segments.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar<'a> {
    pub label: &'a str,
    pub aggregate: GroupAggregate,
    /// Segments in stacking order, parallel to the group's rows.
    pub segments: Vec<Segment<'a>>,
    pub percentage: Percentage,
}

impl StackedBar<'_> {
    /// The bar's displayed total.
    #[inline]
    #[must_use]
    pub fn net(&self) -> f64 {
        self.aggregate.net()
    }
}

/// Output of the full grouping → aggregation → layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout<'a> {
    pub bars: Vec<StackedBar<'a>>,
    pub scale: Scale,
    pub grand_total: f64,
}

impl ChartLayout<'_> {
    /// Zero axis position, if any stack extends below zero.
    #[inline]
    #[must_use]
    pub fn zero_offset(&self) -> Option<f64> {
        self.scale.zero_offset()
    }

    /// Total number of segments across all bars.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.segments.len()).sum()
    }

    /// Iterate every segment in bar order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<'_>> {
        self.bars.iter().flat_map(|bar| bar.segments.iter())
    }
}

/// Place a group's rows on the shared scale.
pub fn stack_group<'a>(group: &Group<'a>, scale: &Scale) -> Vec<Segment<'a>> {
    let zero = scale.min_negative_sum.abs();
    let mut pos_acc = 0.0_f64;
    let mut neg_acc = 0.0_f64;

    group
        .rows
        .iter()
        .map(|&row| {
            let value = layout_value(row);
            let (offset, sign) = if row.is_positive() {
                let offset = scale.fraction(pos_acc - scale.min_negative_sum);
                pos_acc += value;
                (offset, Sign::Positive)
            } else {
                let offset = scale.fraction(zero + neg_acc + value);
                neg_acc += value;
                (offset, Sign::Negative)
            };
            Segment {
                row,
                offset,
                width: scale.fraction(value.abs()),
                sign,
            }
        })
        .collect()
}

/// Run grouping, aggregation, and layout over one pass's rows.
pub fn layout(rows: &[Row]) -> ChartLayout<'_> {
    let groups = group_rows(rows);
    let Aggregates {
        groups: aggregates,
        max_positive_sum,
        min_negative_sum,
        grand_total,
    } = aggregate(&groups);
    let scale = Scale {
        min_negative_sum,
        max_positive_sum,
    };

    if scale.is_degenerate() && !rows.is_empty() {
        tabbar_core::debug!(rows = rows.len(), "degenerate scale; all segments zero width");
    }

    let bars = groups
        .iter()
        .zip(aggregates)
        .map(|(group, aggregate)| StackedBar {
            label: group.label,
            segments: stack_group(group, &scale),
            percentage: Percentage::of(aggregate.net(), grand_total),
            aggregate,
        })
        .collect();

    ChartLayout {
        bars,
        scale,
        grand_total,
    }
}
