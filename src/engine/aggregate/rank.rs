use serde::Serialize;

use crate::engine::aggregate::group_count::GroupCounts;
use crate::engine::errors::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

/// Keys ordered by count descending, ties broken by ascending key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    pub fn from_counts(counts: GroupCounts) -> Self {
        let mut entries: Vec<RankedEntry> = counts
            .into_inner()
            .into_iter()
            .map(|(key, count)| RankedEntry { key, count })
            .collect();
        // keys are unique, so this is a total order and the unstable sort
        // is deterministic
        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// First `n` entries (fewer if the ranking is shorter).
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Highest ranked entry, or `EmptyResult` when nothing was counted.
    pub fn first(&self) -> Result<&RankedEntry, EngineError> {
        self.entries
            .first()
            .ok_or_else(|| EngineError::EmptyResult("ranking has no entries".to_string()))
    }

    /// Every entry sharing the maximal count, in ascending key order.
    pub fn tied_for_max(&self) -> &[RankedEntry] {
        let Some(max) = self.entries.first().map(|e| e.count) else {
            return &[];
        };
        let end = self
            .entries
            .iter()
            .position(|e| e.count != max)
            .unwrap_or(self.entries.len());
        &self.entries[..end]
    }

    pub fn to_pairs(&self) -> Vec<(String, u64)> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<GroupCounts> for Ranking {
    fn from(counts: GroupCounts) -> Self {
        Ranking::from_counts(counts)
    }
}
