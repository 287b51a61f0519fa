// crates/domain/src/numbering/table.rs
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::RangeDefinition;

/// Ordered sequence of range definitions. Order is significant: lookups scan
/// rows in table order and the first containing row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberingTable {
    records: Vec<RangeDefinition>,
}

impl NumberingTable {
    pub fn new(records: Vec<RangeDefinition>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows from `start` to the end; empty when `start` is past the end.
    pub fn slice_from(&self, start: usize) -> &[RangeDefinition] {
        self.records.get(start..).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeDefinition> {
        self.records.iter()
    }

    /// Number of rows whose bounds parse.
    pub fn usable_len(&self) -> usize {
        self.records.iter().filter(|r| !r.is_malformed()).count()
    }
}

impl Index<usize> for NumberingTable {
    type Output = RangeDefinition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl FromIterator<RangeDefinition> for NumberingTable {
    fn from_iter<I: IntoIterator<Item = RangeDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NumberingTable {
    type Item = &'a RangeDefinition;
    type IntoIter = std::slice::Iter<'a, RangeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
