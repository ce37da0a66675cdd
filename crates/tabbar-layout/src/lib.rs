#![forbid(unsafe_code)]

//! Stacked-bar layout.
//!
//! The pipeline runs in three stages, each a pure function of its input:
//!
//! - [`group_rows`] partitions rows by category (first-seen order).
//! - [`aggregate`] splits each group into positive and non-positive sums and
//!   finds the global extremes that define one shared scale.
//! - [`layout`] places every row as a [`Segment`] on the normalized `[0, 1]`
//!   track and computes each bar's [`Percentage`].
//!
//! ```
//! use tabbar_core::{Color, Row};
//! use tabbar_layout::layout;
//!
//! let rows = vec![
//!     Row::new("X", 5.0, Color::BLACK, "x"),
//!     Row::new("Y", -3.0, Color::BLACK, "y"),
//! ];
//! let chart = layout(&rows);
//! assert_eq!(chart.zero_offset(), Some(0.375));
//! ```
//!
//! Nothing here is cached: a new pass recomputes everything from the rows.

pub mod aggregate;
pub mod format;
pub mod group;
pub mod stack;

pub use aggregate::{Aggregates, GroupAggregate, aggregate};
pub use format::{Percentage, format_net};
pub use group::{Group, group_rows};
pub use stack::{ChartLayout, Scale, Segment, Sign, StackedBar, layout, stack_group};
