#![forbid(unsafe_code)]

//! The row model: one record handed over by the host data view.

use std::fmt;

use crate::color::Color;

/// Opaque, equality-comparable row identity.
///
/// Rendered segments carry the identity of their row so a click can be
/// resolved back to the record. The engine never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One data record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Formatted category label; the grouping key.
    pub category: String,
    /// Signed measure.
    pub value: f64,
    /// Host-formatted text for `value`.
    pub formatted_value: String,
    /// Segment fill color.
    pub color: Color,
    /// Stable identity used to recover the row from a rendered segment.
    pub identity: RowId,
}

impl Row {
    /// Create a row. The formatted value defaults to the shortest decimal
    /// form of `value`; override it with [`Row::formatted`].
    pub fn new(
        category: impl Into<String>,
        value: f64,
        color: Color,
        identity: impl Into<RowId>,
    ) -> Self {
        Self {
            category: category.into(),
            value,
            formatted_value: value.to_string(),
            color,
            identity: identity.into(),
        }
    }

    /// Replace the formatted value text.
    #[must_use]
    pub fn formatted(mut self, text: impl Into<String>) -> Self {
        self.formatted_value = text.into();
        self
    }

    /// Whether this row stacks in the positive direction.
    ///
    /// Zero counts as non-positive and stacks with the negatives; so do
    /// non-finite values, which lay out as zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_positive() {
        let row = Row::new("X", 0.0, Color::BLACK, "r0");
        assert!(!row.is_positive());
        assert!(Row::new("X", 0.5, Color::BLACK, "r1").is_positive());
        assert!(!Row::new("X", -0.5, Color::BLACK, "r2").is_positive());
    }

    #[test]
    fn non_finite_values_are_not_positive() {
        assert!(!Row::new("X", f64::INFINITY, Color::BLACK, "r").is_positive());
        assert!(!Row::new("X", f64::NAN, Color::BLACK, "r").is_positive());
        assert!(!Row::new("X", f64::NEG_INFINITY, Color::BLACK, "r").is_positive());
    }

    #[test]
    fn default_formatted_value() {
        assert_eq!(Row::new("X", 2.5, Color::BLACK, "a").formatted_value, "2.5");
        assert_eq!(Row::new("X", 3.0, Color::BLACK, "a").formatted_value, "3");
        let row = Row::new("X", 1200.0, Color::BLACK, "a").formatted("1.2K");
        assert_eq!(row.formatted_value, "1.2K");
    }

    #[test]
    fn identity_equality() {
        assert_eq!(RowId::from("a"), RowId::new(String::from("a")));
        assert_ne!(RowId::from("a"), RowId::from("b"));
        assert_eq!(RowId::from("id-7").to_string(), "id-7");
    }
}
