//! Command line and environment configuration shared by the Stardust loader
//! tools.
//!
//! Each block is a [`clap::Parser`] meant to be `#[clap(flatten)]`ed into a
//! tool's own argument struct, and converts into the option types of the
//! library crates.

use std::path::PathBuf;

use stardust_schema::SchemaError;
use stardust_sharder::PartitionError;
use thiserror::Error;

pub mod assembler;
pub mod batch;
pub mod schema;
pub mod shard;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read schema file {path:?}: {source}")]
    ReadSchemaFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error("--worker-num and --total-workers must be given together")]
    IncompleteWorkerSelection,
}
