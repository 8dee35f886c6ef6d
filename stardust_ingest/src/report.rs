use std::{fs::File, io::Write, path::Path};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;

/// Columns of the per-batch benchmark results file.
pub const REPORT_COLUMNS: &[&str] = &[
    "file",
    "batch_number",
    "batch_start_wall_time",
    "docs_attempted_batch",
    "docs_parsed_batch",
    "docs_inserted_batch",
    "degraded_fields_batch",
    "time_seconds",
    "error",
];

/// One line of the results file. Field order matches [`REPORT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub file: String,
    pub batch_number: usize,
    pub batch_start_wall_time: DateTime<Utc>,
    pub docs_attempted_batch: usize,
    pub docs_parsed_batch: usize,
    pub docs_inserted_batch: usize,
    pub degraded_fields_batch: usize,
    /// Seconds spent in the sink for this batch.
    pub time_seconds: f64,
    pub error: Option<String>,
}

/// Totals over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub batches: usize,
    pub failed_batches: usize,
    pub docs_attempted: usize,
    pub docs_parsed: usize,
    pub docs_inserted: usize,
    pub degraded_fields: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub median_seconds: f64,
    pub min_seconds: f64,
    pub max_seconds: f64,
}

/// Per-batch results of ingesting one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    file: String,
    results: Vec<BatchResult>,
}

impl BenchmarkReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            results: Vec::new(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn push(&mut self, result: BatchResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[BatchResult] {
        &self.results
    }

    /// Totals and batch latency statistics, or `None` if no batch was
    /// written.
    pub fn summary(&self) -> Option<RunSummary> {
        if self.results.is_empty() {
            return None;
        }

        let mut times = self
            .results
            .iter()
            .map(|r| r.time_seconds)
            .collect::<Vec<_>>();
        times.sort_by(f64::total_cmp);

        let n = times.len();
        let total_seconds = times.iter().sum::<f64>();
        let median_seconds = if n % 2 == 1 {
            times[n / 2]
        } else {
            (times[n / 2 - 1] + times[n / 2]) / 2.0
        };

        Some(RunSummary {
            batches: n,
            failed_batches: self.results.iter().filter(|r| r.error.is_some()).count(),
            docs_attempted: self.results.iter().map(|r| r.docs_attempted_batch).sum(),
            docs_parsed: self.results.iter().map(|r| r.docs_parsed_batch).sum(),
            docs_inserted: self.results.iter().map(|r| r.docs_inserted_batch).sum(),
            degraded_fields: self.results.iter().map(|r| r.degraded_fields_batch).sum(),
            total_seconds,
            mean_seconds: total_seconds / n as f64,
            median_seconds,
            min_seconds: times[0],
            max_seconds: times[n - 1],
        })
    }

    /// Write the header and one line per batch as CSV.
    pub fn write_csv<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(REPORT_COLUMNS)?;
        for result in &self.results {
            writer.serialize(result)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}
