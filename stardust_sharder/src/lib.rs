//! Deterministic assignment of telemetry rows to shards and workers.
//!
//! Independent worker processes never coordinate: each one recomputes the
//! assignment of every row and keeps only its own share, so the assignment
//! must be a pure function of the row. Two schemes are supported:
//!
//! * hashing the series key (device and interface, joined by `|` unless
//!   another separator is configured), which keeps every row of a series on
//!   the same worker;
//! * dealing out rows by index (`i mod N`), for input without a usable series
//!   key.

use std::num::NonZeroUsize;

use thiserror::Error;

mod checksum;
mod jumphash;
mod plan;
mod row_modulo;
mod series;

pub use checksum::{Checksum, Reduction, SERIES_KEY_SEPARATOR, SeriesHasher};
pub use jumphash::jump_hash;
pub use plan::SplitPlan;
pub use row_modulo::row_modulo;
pub use series::{DEFAULT_SERIES_COLUMNS, SeriesKeyExtractor};

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("shard count must be greater than zero")]
    ZeroShardCount,

    #[error("worker {worker} is out of range for {shard_count} workers")]
    WorkerOutOfRange { worker: usize, shard_count: usize },

    #[error("a split plan needs at least 2 workers, got {max_workers}")]
    InvalidPlan { max_workers: usize },

    #[error("series column '{name}' is not present in the header")]
    MissingSeriesColumn { name: String },

    #[error("at least one series column is required")]
    NoSeriesColumns,
}

/// How [`partition`] assigns a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionStrategy {
    /// Hash the series key.
    Hash(SeriesHasher),
    /// Assign by position of the row in the input.
    RowModulo { row_index: usize },
}

/// Assign a row, identified by its `series_key`, to one of `shard_count`
/// shards.
///
/// The result is in `[0, shard_count)` and is identical across calls,
/// processes and runs for the same inputs.
pub fn partition<S>(
    series_key: &[S],
    shard_count: usize,
    strategy: &PartitionStrategy,
) -> Result<usize, PartitionError>
where
    S: AsRef<str>,
{
    let shard_count = NonZeroUsize::new(shard_count).ok_or(PartitionError::ZeroShardCount)?;
    Ok(match strategy {
        PartitionStrategy::Hash(hasher) => hasher.shard(series_key, shard_count),
        PartitionStrategy::RowModulo { row_index } => row_modulo(*row_index, shard_count),
    })
}

/// The assignment scheme of a [`Partitioner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardScheme {
    Hash(SeriesHasher),
    RowModulo,
}

/// A validated shard count and scheme, applied to many rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioner {
    scheme: ShardScheme,
    shard_count: NonZeroUsize,
}

impl Partitioner {
    pub fn new(scheme: ShardScheme, shard_count: usize) -> Result<Self, PartitionError> {
        let shard_count = NonZeroUsize::new(shard_count).ok_or(PartitionError::ZeroShardCount)?;
        Ok(Self {
            scheme,
            shard_count,
        })
    }

    pub fn scheme(&self) -> &ShardScheme {
        &self.scheme
    }

    pub fn shard_count(&self) -> usize {
        self.shard_count.get()
    }

    /// Shard of the row at `row_index` with `series_key`. The key is ignored
    /// by [`ShardScheme::RowModulo`].
    pub fn assign<S>(&self, series_key: &[S], row_index: usize) -> usize
    where
        S: AsRef<str>,
    {
        match &self.scheme {
            ShardScheme::Hash(hasher) => hasher.shard(series_key, self.shard_count),
            ShardScheme::RowModulo => row_modulo(row_index, self.shard_count),
        }
    }

    /// Whether `worker` is responsible for the row.
    pub fn owns<S>(&self, worker: usize, series_key: &[S], row_index: usize) -> bool
    where
        S: AsRef<str>,
    {
        self.assign(series_key, row_index) == worker
    }

    /// Whether assignment needs the series key of a row.
    pub fn needs_series_key(&self) -> bool {
        matches!(self.scheme, ShardScheme::Hash(_))
    }
}

/// The share of the input belonging to one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFilter {
    partitioner: Partitioner,
    worker: usize,
}

impl WorkerFilter {
    /// Select the rows of `worker` (zero based) under `partitioner`.
    pub fn new(partitioner: Partitioner, worker: usize) -> Result<Self, PartitionError> {
        if worker >= partitioner.shard_count() {
            return Err(PartitionError::WorkerOutOfRange {
                worker,
                shard_count: partitioner.shard_count(),
            });
        }
        Ok(Self {
            partitioner,
            worker,
        })
    }

    pub fn partitioner(&self) -> &Partitioner {
        &self.partitioner
    }

    pub fn worker(&self) -> usize {
        self.worker
    }

    pub fn accepts<S>(&self, series_key: &[S], row_index: usize) -> bool
    where
        S: AsRef<str>,
    {
        self.partitioner.owns(self.worker, series_key, row_index)
    }
}
