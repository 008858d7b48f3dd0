//! Repeating substring scan
//!
//! Counts every substring of length `1..=n/2` at every start offset, keeps
//! the ones seen more than once, and orders them longest first.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// A substring together with how many positions it starts at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub pattern: String,
    pub count: usize,
}

impl PatternRecord {
    pub fn new(pattern: impl Into<String>, count: usize) -> Self {
        Self { pattern: pattern.into(), count }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Occurrence counts in first-seen order
#[derive(Debug, Default)]
struct OrderedCounter<'a> {
    entries: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> OrderedCounter<'a> {
    fn bump(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_entries(self) -> Vec<(&'a str, usize)> {
        self.entries
    }
}

/// Find every substring that occurs at two or more (possibly overlapping)
/// positions in `text`
///
/// Records are sorted by descending pattern length; equal lengths keep scan
/// order, i.e. by earliest start offset.
pub fn find_repeating_patterns(text: &str) -> Vec<PatternRecord> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut counter = OrderedCounter::default();
    for len in 1..=n / 2 {
        for start in 0..=n - len {
            counter.bump(&text[bounds[start]..bounds[start + len]]);
        }
    }
    tracing::debug!(chars = n, distinct = counter.len(), "substring scan complete");

    let mut records: Vec<PatternRecord> = counter
        .into_entries()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(pattern, count)| PatternRecord::new(pattern, count))
        .collect();
    // Stable: ties stay in scan order
    records.sort_by_key(|r| Reverse(r.len()));
    records
}
