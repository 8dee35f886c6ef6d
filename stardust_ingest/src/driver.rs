use std::{
    fmt::Debug,
    io::{BufRead, Write},
    num::NonZeroUsize,
    time::Instant,
};

use observability_deps::tracing::{debug, info, warn};
use stardust_assembler::{DocumentLayout, RecordAssembler};
use thiserror::Error;

use crate::{
    Result,
    batch::{Batch, Batcher},
    report::{BatchResult, BenchmarkReport},
    tsv::TsvReader,
};

/// A failed bulk write.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    pub message: String,
    /// Records the sink did store before failing.
    pub inserted: usize,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            inserted: 0,
        }
    }

    pub fn with_inserted(self, inserted: usize) -> Self {
        Self { inserted, ..self }
    }
}

/// Destination of assembled batches.
pub trait BatchSink: Debug {
    /// Store `batch`, returning the number of records stored. A sink that
    /// stores only part of a batch reports the smaller count.
    fn write_batch(&mut self, batch: &Batch) -> Result<usize, SinkError>;
}

/// Writes every record as one JSON document per line.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
    layout: DocumentLayout,
}

impl<W> JsonLinesSink<W>
where
    W: Write + Debug,
{
    pub fn new(writer: W, layout: DocumentLayout) -> Self {
        Self { writer, layout }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> BatchSink for JsonLinesSink<W>
where
    W: Write + Debug,
{
    fn write_batch(&mut self, batch: &Batch) -> Result<usize, SinkError> {
        for (inserted, record) in batch.records.iter().enumerate() {
            let document = record.to_document(&self.layout);
            serde_json::to_writer(&mut self.writer, &document)
                .map_err(|e| SinkError::new(e.to_string()).with_inserted(inserted))?;
            self.writer
                .write_all(b"\n")
                .map_err(|e| SinkError::new(e.to_string()).with_inserted(inserted))?;
        }
        self.writer
            .flush()
            .map_err(|e| SinkError::new(e.to_string()).with_inserted(batch.records.len()))?;
        Ok(batch.records.len())
    }
}

/// Reads rows, assembles them and hands full batches to a sink.
#[derive(Debug)]
pub struct IngestDriver {
    assembler: RecordAssembler,
    batch_size: NonZeroUsize,
    file: String,
}

impl IngestDriver {
    /// `file` names the input in the report.
    pub fn new(
        assembler: RecordAssembler,
        batch_size: NonZeroUsize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            assembler,
            batch_size,
            file: file.into(),
        }
    }

    pub fn assembler(&self) -> &RecordAssembler {
        &self.assembler
    }

    /// Ingest every row of `reader` into `sink`.
    ///
    /// Rejected rows are logged and counted; an error that is not row level,
    /// or a failure to read the input, aborts the run. Sink failures are
    /// recorded in the report and do not stop the run.
    pub fn run<R, K>(&self, reader: TsvReader<R>, sink: &mut K) -> Result<BenchmarkReport>
    where
        R: BufRead,
        K: BatchSink + ?Sized,
    {
        let mut report = BenchmarkReport::new(self.file.clone());
        let mut batcher = Batcher::new(self.batch_size);

        for row in reader {
            let row = row?;
            let full = match self.assembler.assemble(&row.fields) {
                Ok(record) => {
                    if !record.warnings.is_empty() {
                        debug!(
                            row = row.index,
                            degraded = record.degraded_fields(),
                            "measurement values stored as null"
                        );
                    }
                    batcher.push_record(record)
                }
                Err(e) if e.is_row_level() => {
                    warn!(row = row.index, error = %e, "rejected row");
                    batcher.push_rejected()
                }
                Err(e) => return Err(e.into()),
            };

            if let Some(batch) = full {
                report.push(self.write(&batch, sink));
            }
        }

        if let Some(batch) = batcher.finish() {
            report.push(self.write(&batch, sink));
        }

        if let Some(summary) = report.summary() {
            info!(
                file = %self.file,
                batches = summary.batches,
                attempted = summary.docs_attempted,
                inserted = summary.docs_inserted,
                total_seconds = summary.total_seconds,
                "ingest complete"
            );
        }

        Ok(report)
    }

    fn write<K>(&self, batch: &Batch, sink: &mut K) -> BatchResult
    where
        K: BatchSink + ?Sized,
    {
        let stats = batch.stats;
        let (inserted, time_seconds, error) = if batch.records.is_empty() {
            (0, 0.0, None)
        } else {
            let start = Instant::now();
            let outcome = sink.write_batch(batch);
            let elapsed = start.elapsed().as_secs_f64();
            match outcome {
                Ok(inserted) => (inserted, elapsed, None),
                Err(e) => {
                    warn!(
                        batch = stats.number,
                        error = %e,
                        inserted = e.inserted,
                        "batch write failed"
                    );
                    (e.inserted, elapsed, Some(e.message))
                }
            }
        };

        info!(
            batch = stats.number,
            attempted = stats.attempted,
            parsed = stats.parsed,
            inserted,
            degraded_fields = stats.degraded_fields,
            time_seconds,
            "batch written"
        );

        BatchResult {
            file: self.file.clone(),
            batch_number: stats.number,
            batch_start_wall_time: batch.started_at,
            docs_attempted_batch: stats.attempted,
            docs_parsed_batch: stats.parsed,
            docs_inserted_batch: inserted,
            degraded_fields_batch: stats.degraded_fields,
            time_seconds,
            error,
        }
    }
}
