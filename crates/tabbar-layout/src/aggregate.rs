#![forbid(unsafe_code)]

//! Aggregation stage: per-group sign sums and the shared scale extremes.

use tabbar_core::Row;

use crate::group::Group;

/// Value used for sums and geometry.
///
/// Non-finite host values contribute nothing, so a single bad cell cannot
/// poison the shared scale.
#[inline]
pub(crate) fn layout_value(row: &Row) -> f64 {
    if row.value.is_finite() { row.value } else { 0.0 }
}

/// Sign split of one group's values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupAggregate {
    /// Sum of values `> 0`.
    pub positive_sum: f64,
    /// Sum of values `<= 0`.
    pub negative_sum: f64,
}

impl GroupAggregate {
    /// Accumulate a group's rows in stacking order.
    pub fn of(rows: &[&Row]) -> Self {
        let mut agg = Self::default();
        for row in rows {
            let value = layout_value(row);
            if row.is_positive() {
                agg.positive_sum += value;
            } else {
                agg.negative_sum += value;
            }
        }
        agg
    }

    /// The group's displayed total.
    #[inline]
    #[must_use]
    pub fn net(&self) -> f64 {
        self.positive_sum + self.negative_sum
    }
}

/// Aggregates for every group plus the global extremes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    /// One entry per group, parallel to the grouping output.
    pub groups: Vec<GroupAggregate>,
    /// Largest positive stack; never below zero.
    pub max_positive_sum: f64,
    /// Most negative stack; never above zero.
    pub min_negative_sum: f64,
    /// Sum of every row's value, used for percentages only.
    pub grand_total: f64,
}

impl Aggregates {
    /// Total extent of the shared scale.
    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_positive_sum - self.min_negative_sum
    }

    /// Whether any stack extends below zero.
    #[inline]
    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.min_negative_sum < 0.0
    }
}

/// Compute the per-group sums and the global scale extremes.
///
/// Both extremes start at zero so an all-positive or all-negative dataset is
/// still anchored at the origin.
pub fn aggregate(groups: &[Group<'_>]) -> Aggregates {
    let mut out = Aggregates {
        groups: Vec::with_capacity(groups.len()),
        ..Aggregates::default()
    };

    for group in groups {
        let agg = GroupAggregate::of(&group.rows);
        if agg.positive_sum > out.max_positive_sum {
            out.max_positive_sum = agg.positive_sum;
        }
        if agg.negative_sum < out.min_negative_sum {
            out.min_negative_sum = agg.negative_sum;
        }
        out.grand_total += group.rows.iter().map(|row| layout_value(row)).sum::<f64>();
        out.groups.push(agg);
    }

    out
}
