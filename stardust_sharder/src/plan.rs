use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use hashbrown::HashMap;
use observability_deps::tracing::debug;

use crate::{PartitionError, SeriesHasher};

/// Assignments of series to workers for several worker counts at once, as
/// needed to split one input file into per-worker files for every scenario
/// of a benchmark in a single pass.
///
/// Each series is hashed once per worker count the first time it is seen.
#[derive(Debug)]
pub struct SplitPlan {
    hasher: SeriesHasher,
    worker_counts: Vec<NonZeroUsize>,
    assignments: HashMap<String, Box<[usize]>>,
}

impl SplitPlan {
    /// Plan for every worker count in `2..=max_workers`, the scenarios of a
    /// scaling benchmark.
    pub fn scaling(hasher: SeriesHasher, max_workers: usize) -> Result<Self, PartitionError> {
        if max_workers < 2 {
            return Err(PartitionError::InvalidPlan { max_workers });
        }
        Ok(Self::new(hasher, (2..=max_workers).filter_map(NonZeroUsize::new)))
    }

    /// Plan for exactly `workers` workers.
    pub fn single(hasher: SeriesHasher, workers: usize) -> Result<Self, PartitionError> {
        let workers = NonZeroUsize::new(workers).ok_or(PartitionError::ZeroShardCount)?;
        Ok(Self::new(hasher, [workers]))
    }

    fn new(hasher: SeriesHasher, worker_counts: impl IntoIterator<Item = NonZeroUsize>) -> Self {
        let worker_counts = worker_counts.into_iter().collect::<Vec<_>>();
        debug!(?hasher, ?worker_counts, "created split plan");
        Self {
            hasher,
            worker_counts,
            assignments: HashMap::new(),
        }
    }

    pub fn worker_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.worker_counts.iter().map(|n| n.get())
    }

    /// The worker index of `series_key` under each planned worker count, in
    /// the order of [`Self::worker_counts`].
    pub fn assign<S>(&mut self, series_key: &[S]) -> &[usize]
    where
        S: AsRef<str>,
    {
        let key = series_key
            .iter()
            .map(|part| part.as_ref())
            .collect::<Vec<_>>()
            .join(self.hasher.separator());

        let hasher = &self.hasher;
        let worker_counts = &self.worker_counts;
        self.assignments.entry(key).or_insert_with_key(|key| {
            worker_counts
                .iter()
                .map(|&n| hasher.shard(&[key.as_str()], n))
                .collect()
        })
    }

    /// `(worker_count, worker_index)` pairs for `series_key`.
    pub fn assignments<S>(&mut self, series_key: &[S]) -> Vec<(usize, usize)>
    where
        S: AsRef<str>,
    {
        let counts = self.worker_counts.clone();
        counts
            .into_iter()
            .map(NonZeroUsize::get)
            .zip(self.assign(series_key).iter().copied())
            .collect()
    }

    /// Number of distinct series seen so far.
    pub fn series_count(&self) -> usize {
        self.assignments.len()
    }

    /// Location of the file holding the rows of worker `worker_index` (zero
    /// based) out of `worker_count`, e.g. `4_workers/4_workers_worker_1.tsv`.
    pub fn output_path(dir: &Path, worker_count: usize, worker_index: usize) -> PathBuf {
        dir.join(format!("{worker_count}_workers")).join(format!(
            "{worker_count}_workers_worker_{}.tsv",
            worker_index + 1
        ))
    }
}
