#![forbid(unsafe_code)]

//! Text for the value and percentage columns.

use std::fmt;

/// A bar's share of the grand total, rounded to a whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Percentage(pub i64);

impl Percentage {
    /// `net / grand_total * 100`, rounded half up.
    ///
    /// A zero or non-finite base yields `0%`.
    #[must_use]
    pub fn of(net: f64, grand_total: f64) -> Self {
        if grand_total == 0.0 || !grand_total.is_finite() || !net.is_finite() {
            tabbar_core::trace!(net, grand_total, "percentage base unusable; reporting 0%");
            return Self(0);
        }
        let pct = net / grand_total * 100.0;
        if !pct.is_finite() {
            return Self(0);
        }
        // Half up, so -2.5 becomes -2 and 2.5 becomes 3.
        Self((pct + 0.5).floor() as i64)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Shortest decimal text for a bar total (`2`, `2.5`, `-0.25`).
#[must_use]
pub fn format_net(net: f64) -> String {
    if net == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    net.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(Percentage::of(1.0, 3.0), Percentage(33));
        assert_eq!(Percentage::of(2.0, 3.0), Percentage(67));
        assert_eq!(Percentage::of(1.0, 7.0), Percentage(14));
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(Percentage::of(1.0, 8.0), Percentage(13));
        assert_eq!(Percentage::of(-1.0, 8.0), Percentage(-12));
    }

    #[test]
    fn zero_base_is_zero_percent() {
        assert_eq!(Percentage::of(5.0, 0.0).to_string(), "0%");
        assert_eq!(Percentage::of(0.0, 0.0).to_string(), "0%");
        assert_eq!(Percentage::of(f64::NAN, 3.0).to_string(), "0%");
    }

    #[test]
    fn percent_can_exceed_hundred_with_mixed_signs() {
        // Grand total 2, bar net 5 → 250%.
        assert_eq!(Percentage::of(5.0, 2.0).to_string(), "250%");
        assert_eq!(Percentage::of(-3.0, 2.0).to_string(), "-150%");
    }

    #[test]
    fn net_text() {
        assert_eq!(format_net(2.0), "2");
        assert_eq!(format_net(2.5), "2.5");
        assert_eq!(format_net(-0.25), "-0.25");
        assert_eq!(format_net(-0.0), "0");
    }
}
