use std::collections::HashMap;

use ahash::RandomState as AHashRandomState;
use tracing::debug;

use crate::engine::aggregate::rank::Ranking;
use crate::engine::context::EngineContext;
use crate::engine::filter::Predicate;
use crate::engine::types::{FlightField, FlightRecord};

/// Per-key occurrence counts. Keys are only ever inserted from observed
/// values, so every stored count is at least 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupCounts {
    counts: HashMap<String, u64, AHashRandomState>,
}

impl GroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: &str, n: u64) {
        if n == 0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(key) {
            *count += n;
        } else {
            self.counts.insert(key.to_string(), n);
        }
    }

    /// Key-wise addition; commutative and associative.
    pub fn merge(&mut self, other: &GroupCounts) {
        for (k, v) in &other.counts {
            self.add_n(k, *v);
        }
    }

    /// Merges an owned partial, reusing the larger map as the accumulator.
    pub fn merged(mut self, mut other: GroupCounts) -> GroupCounts {
        if other.counts.len() > self.counts.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (k, v) in other.counts {
            *self.counts.entry(k).or_insert(0) += v;
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_map(self) -> HashMap<String, u64> {
        self.counts.into_iter().collect()
    }

    pub fn into_ranking(self) -> Ranking {
        Ranking::from_counts(self)
    }

    pub(crate) fn into_inner(self) -> HashMap<String, u64, AHashRandomState> {
        self.counts
    }
}

impl<S: AsRef<str>> FromIterator<S> for GroupCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = GroupCounts::new();
        for key in iter {
            counts.add(key.as_ref());
        }
        counts
    }
}

/// Groups records by one field and counts each distinct value.
#[derive(Debug, Clone)]
pub struct GroupByCounter {
    key: FlightField,
    filter: Predicate,
}

impl GroupByCounter {
    pub fn new(key: FlightField) -> Self {
        Self {
            key,
            filter: Predicate::Always,
        }
    }

    /// Only records matching `filter` are counted.
    pub fn with_filter(mut self, filter: Predicate) -> Self {
        self.filter = filter;
        self
    }

    pub fn key(&self) -> FlightField {
        self.key
    }

    /// Sequential fold over one partition. Records whose key is absent or
    /// empty are skipped.
    pub fn count_partition(&self, records: &[FlightRecord]) -> GroupCounts {
        let mut counts = GroupCounts::new();
        for record in records {
            if !self.filter.evaluate(record) {
                continue;
            }
            if let Some(key) = record.field(self.key) {
                counts.add(key);
            }
        }
        counts
    }

    /// Counts every partition independently and merges the partials.
    pub fn count(&self, ctx: &EngineContext, records: &[FlightRecord]) -> GroupCounts {
        let counts = ctx.fold_partitions(
            records,
            |part| self.count_partition(part),
            GroupCounts::merged,
        );
        debug!(
            "Counted {} records by {} into {} groups",
            records.len(),
            self.key.name(),
            counts.len()
        );
        counts
    }
}

/// Merges per-partition partials into one mapping.
pub fn merge_partials<I>(partials: I) -> GroupCounts
where
    I: IntoIterator<Item = GroupCounts>,
{
    partials
        .into_iter()
        .fold(GroupCounts::new(), GroupCounts::merged)
}
