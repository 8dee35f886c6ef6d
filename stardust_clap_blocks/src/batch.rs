//! CLI handling for the portion of the input to load and its batching.

use std::num::NonZeroUsize;

#[derive(Debug, clap::Parser, Clone, Copy)]
pub struct BatchConfig {
    /// Number of rows per bulk write.
    #[clap(
        long = "batch-size",
        env = "STARDUST_BATCH_SIZE",
        default_value = "50000",
        action
    )]
    pub batch_size: NonZeroUsize,

    /// Data lines to skip before loading.
    #[clap(long = "offset", env = "STARDUST_OFFSET", default_value = "0", action)]
    pub offset: usize,

    /// Maximum number of rows to load.
    #[clap(long = "limit", env = "STARDUST_LIMIT", action)]
    pub limit: Option<usize>,
}
