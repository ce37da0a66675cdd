#![forbid(unsafe_code)]

//! Grouping stage: partition rows into per-category stacks.

use std::collections::HashMap;

use tabbar_core::Row;

/// All rows sharing one category label, in encounter order.
///
/// The order of `rows` is the visual stacking order of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub label: &'a str,
    pub rows: Vec<&'a Row>,
}

impl<'a> Group<'a> {
    fn new(label: &'a str) -> Self {
        Self {
            label,
            rows: Vec::new(),
        }
    }
}

/// Partition `rows` by category.
///
/// Groups appear in the order their category is first seen; within a group
/// rows keep their relative order. Every row lands in exactly one group.
pub fn group_rows(rows: &[Row]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.category.as_str()).or_insert_with(|| {
            groups.push(Group::new(row.category.as_str()));
            groups.len() - 1
        });
        groups[slot].rows.push(row);
    }

    groups
}
