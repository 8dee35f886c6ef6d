//! CLI handling for splitting the input between parallel loader processes.

use stardust_sharder::{
    Checksum, Partitioner, Reduction, SERIES_KEY_SEPARATOR, SeriesHasher, ShardScheme,
    WorkerFilter,
};

use crate::ConfigError;

/// Which share of the input this process loads.
///
/// Without `--worker-num` and `--total-workers` the process loads every row.
#[derive(Debug, clap::Parser, Clone)]
pub struct ShardConfig {
    /// Zero based number of this worker.
    #[clap(long = "worker-num", env = "STARDUST_WORKER_NUM", action)]
    pub worker_num: Option<usize>,

    /// Number of workers loading the same input.
    #[clap(long = "total-workers", env = "STARDUST_TOTAL_WORKERS", action)]
    pub total_workers: Option<usize>,

    /// How rows are assigned to workers.
    #[clap(
        long = "shard-strategy",
        env = "STARDUST_SHARD_STRATEGY",
        default_value = "row-modulo",
        action
    )]
    pub strategy: ShardStrategy,

    /// Checksum of the series key for `--shard-strategy series-hash`.
    #[clap(
        long = "series-checksum",
        env = "STARDUST_SERIES_CHECKSUM",
        default_value = "adler32",
        action
    )]
    pub series_checksum: SeriesChecksum,

    /// Reduction of the checksum to a worker for
    /// `--shard-strategy series-hash`.
    #[clap(
        long = "series-reduction",
        env = "STARDUST_SERIES_REDUCTION",
        default_value = "modulo",
        action
    )]
    pub series_reduction: SeriesReduction,

    /// Separator joining the series columns before they are checksummed.
    #[clap(
        long = "series-separator",
        env = "STARDUST_SERIES_SEPARATOR",
        default_value = SERIES_KEY_SEPARATOR,
        action
    )]
    pub series_separator: String,

    /// Columns forming the series key, comma separated.
    #[clap(
        long = "series-columns",
        env = "STARDUST_SERIES_COLUMNS",
        default_value = "meta.device,meta.name",
        value_delimiter = ',',
        action
    )]
    pub series_columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ShardStrategy {
    /// Row `i` goes to worker `i mod N`.
    #[default]
    RowModulo,
    /// All rows of a series go to the same worker.
    SeriesHash,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SeriesChecksum {
    #[default]
    Adler32,
    Crc32,
    Siphash13,
    Md5,
}

impl From<SeriesChecksum> for Checksum {
    fn from(value: SeriesChecksum) -> Self {
        match value {
            SeriesChecksum::Adler32 => Self::Adler32,
            SeriesChecksum::Crc32 => Self::Crc32,
            SeriesChecksum::Siphash13 => Self::SipHash13,
            SeriesChecksum::Md5 => Self::Md5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SeriesReduction {
    #[default]
    Modulo,
    JumpHash,
}

impl From<SeriesReduction> for Reduction {
    fn from(value: SeriesReduction) -> Self {
        match value {
            SeriesReduction::Modulo => Self::Modulo,
            SeriesReduction::JumpHash => Self::JumpHash,
        }
    }
}

impl ShardConfig {
    pub fn scheme(&self) -> ShardScheme {
        match self.strategy {
            ShardStrategy::RowModulo => ShardScheme::RowModulo,
            ShardStrategy::SeriesHash => ShardScheme::Hash(
                SeriesHasher::new(self.series_checksum.into(), self.series_reduction.into())
                    .with_separator(self.series_separator.as_str()),
            ),
        }
    }

    /// The rows of this worker, or `None` to load every row.
    ///
    /// Worker number and worker count must be given together, and the worker
    /// number must be below the count.
    pub fn worker_filter(&self) -> Result<Option<WorkerFilter>, ConfigError> {
        match (self.worker_num, self.total_workers) {
            (None, None) => Ok(None),
            (Some(worker), Some(total)) => {
                let partitioner = Partitioner::new(self.scheme(), total)?;
                Ok(Some(WorkerFilter::new(partitioner, worker)?))
            }
            _ => Err(ConfigError::IncompleteWorkerSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use stardust_sharder::{DEFAULT_SERIES_COLUMNS, PartitionError};

    #[test]
    fn test_all_rows_by_default() {
        let config = ShardConfig::try_parse_from(["loader"]).unwrap();
        assert!(config.worker_filter().unwrap().is_none());
        assert_eq!(config.scheme(), ShardScheme::RowModulo);
        assert_eq!(config.series_columns, DEFAULT_SERIES_COLUMNS);
    }

    #[test]
    fn test_series_hash_worker() {
        let config = ShardConfig::try_parse_from([
            "loader",
            "--worker-num",
            "1",
            "--total-workers",
            "4",
            "--shard-strategy",
            "series-hash",
            "--series-reduction",
            "jump-hash",
        ])
        .unwrap();

        let filter = config.worker_filter().unwrap().unwrap();
        assert_eq!(filter.worker(), 1);
        assert_eq!(filter.partitioner().shard_count(), 4);
        assert_eq!(
            filter.partitioner().scheme(),
            &ShardScheme::Hash(SeriesHasher::new(Checksum::Adler32, Reduction::JumpHash))
        );
        // r1|eth0 jump hashes to bucket 1 of 4
        assert!(filter.accepts(&["r1", "eth0"], 0));
    }

    #[test]
    fn test_md5_series_hash() {
        let config = ShardConfig::try_parse_from([
            "loader",
            "--worker-num",
            "4",
            "--total-workers",
            "7",
            "--shard-strategy",
            "series-hash",
            "--series-checksum",
            "md5",
            "--series-separator",
            "::",
        ])
        .unwrap();
        assert_eq!(config.series_separator, "::");

        let filter = config.worker_filter().unwrap().unwrap();
        assert_eq!(
            filter.partitioner().scheme(),
            &ShardScheme::Hash(
                SeriesHasher::new(Checksum::Md5, Reduction::Modulo).with_separator("::")
            )
        );
        // md5("r1::eth0") mod 7 == 4, md5("r2::eth0") mod 7 == 5
        assert!(filter.accepts(&["r1", "eth0"], 0));
        assert!(!filter.accepts(&["r2", "eth0"], 0));
    }

    #[test]
    fn test_series_columns() {
        let config =
            ShardConfig::try_parse_from(["loader", "--series-columns", "meta.device,meta.ifindex"])
                .unwrap();
        assert_eq!(config.series_columns, ["meta.device", "meta.ifindex"]);
    }

    #[test]
    fn test_invalid_worker_selection() {
        let config = ShardConfig::try_parse_from(["loader", "--worker-num", "0"]).unwrap();
        assert!(matches!(
            config.worker_filter(),
            Err(ConfigError::IncompleteWorkerSelection)
        ));

        let config =
            ShardConfig::try_parse_from(["loader", "--worker-num", "4", "--total-workers", "4"])
                .unwrap();
        assert!(matches!(
            config.worker_filter(),
            Err(ConfigError::Partition(PartitionError::WorkerOutOfRange { .. }))
        ));

        let config =
            ShardConfig::try_parse_from(["loader", "--worker-num", "0", "--total-workers", "0"])
                .unwrap();
        assert!(matches!(
            config.worker_filter(),
            Err(ConfigError::Partition(PartitionError::ZeroShardCount))
        ));
    }
}
