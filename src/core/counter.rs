//! Frequency table shared by every statistic in the crate

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// String-keyed occurrence counter.
///
/// Missing labels read as zero. Labels are kept sorted so that the table
/// serializes to the same JSON regardless of the order counts arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Count for `label`, zero when it was never written.
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Whether `label` has an entry, even a zero one.
    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    pub fn increment(&mut self, label: impl Into<String>) {
        self.increment_by(label, 1);
    }

    pub fn increment_by(&mut self, label: impl Into<String>, n: u64) {
        *self.counts.entry(label.into()).or_insert(0) += n;
    }

    /// Make sure `label` is present without changing its count.
    pub fn touch(&mut self, label: impl Into<String>) {
        self.increment_by(label, 0);
    }

    /// Overwrite the count for `label`.
    pub fn set(&mut self, label: impl Into<String>, n: u64) {
        self.counts.insert(label.into(), n);
    }

    /// Sum of the counts whose label starts with `prefix`.
    pub fn sum_prefixed(&self, prefix: &str) -> u64 {
        self.counts
            .range(prefix.to_string()..)
            .take_while(|(label, _)| label.starts_with(prefix))
            .map(|(_, n)| n)
            .sum()
    }

    /// Add every count of `other` into this table.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (label, n) in other.iter() {
            self.increment_by(label, n);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, n)| (label.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
