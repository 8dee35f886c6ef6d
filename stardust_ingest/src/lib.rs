//! Reading Stardust TSV exports into batches of assembled records.
//!
//! The pieces are used in sequence by a loader process:
//!
//! 1. [`TsvReader`] reads the header and the data lines, applying the row
//!    offset, limit and, for parallel loaders, the worker's share of rows;
//! 2. a bound [`stardust_assembler::RecordAssembler`] turns rows into records;
//! 3. [`Batcher`] groups the outcomes into batches of a fixed size;
//! 4. a [`BatchSink`] stores each batch, and [`BenchmarkReport`] records how
//!    long each write took.
//!
//! [`IngestDriver`] runs the whole sequence.

use std::io;

use stardust_schema::SchemaError;
use stardust_sharder::PartitionError;
use thiserror::Error;

mod batch;
mod driver;
mod report;
mod tsv;

pub use batch::{Batch, BatchStats, Batcher};
pub use driver::{BatchSink, IngestDriver, JsonLinesSink, SinkError};
pub use report::{BatchResult, BenchmarkReport, REPORT_COLUMNS, RunSummary};
pub use tsv::{TsvReader, TsvRow};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("input has no header line")]
    EmptyHeader,

    #[error(transparent)]
    Assemble(#[from] stardust_assembler::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error("error writing report: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = IngestError> = std::result::Result<T, E>;
