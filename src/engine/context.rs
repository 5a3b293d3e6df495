use rayon::prelude::*;

use crate::engine::types::FlightRecord;
use crate::shared::config::EngineConfig;

/// Execution context handed to every engine operation.
///
/// Holds the number of partitions the input is split into. Each partition
/// is folded independently on the rayon pool and the partial results are
/// merged in partition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineContext {
    partitions: usize,
}

impl EngineContext {
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    /// Single partition, folds on the calling thread.
    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        match config.partitions {
            0 => Self::default(),
            n => Self::new(n),
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Number of records per partition for an input of `len` records.
    pub fn partition_size(&self, len: usize) -> usize {
        len.div_ceil(self.partitions).max(1)
    }

    /// Folds each partition with `local` and combines the partials with
    /// `merge`. `merge` must be associative; partials are combined in
    /// input order, so order-sensitive merges (e.g. `Vec::extend`) keep it.
    pub fn fold_partitions<'a, T, L, M>(&self, records: &'a [FlightRecord], local: L, merge: M) -> T
    where
        T: Send + Default,
        L: Fn(&'a [FlightRecord]) -> T + Sync + Send,
        M: Fn(T, T) -> T + Sync + Send,
    {
        if self.partitions == 1 || records.len() <= 1 {
            return local(records);
        }
        records
            .par_chunks(self.partition_size(records.len()))
            .map(local)
            .reduce(T::default, merge)
    }

    /// Fallible variant of [`fold_partitions`](Self::fold_partitions); the
    /// first error observed is returned.
    pub fn try_fold_partitions<'a, T, E, L, M>(
        &self,
        records: &'a [FlightRecord],
        local: L,
        merge: M,
    ) -> Result<T, E>
    where
        T: Send + Default,
        E: Send,
        L: Fn(&'a [FlightRecord]) -> Result<T, E> + Sync + Send,
        M: Fn(T, T) -> T + Sync + Send,
    {
        if self.partitions == 1 || records.len() <= 1 {
            return local(records);
        }
        records
            .par_chunks(self.partition_size(records.len()))
            .map(local)
            .try_reduce(T::default, |a, b| Ok(merge(a, b)))
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}
