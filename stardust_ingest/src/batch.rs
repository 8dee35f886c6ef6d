use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use stardust_assembler::AssembledRecord;

/// Row accounting of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// One based batch number.
    pub number: usize,
    /// Rows read for this batch.
    pub attempted: usize,
    /// Rows assembled into records.
    pub parsed: usize,
    /// Rows rejected by the assembler.
    pub rejected: usize,
    /// Measurement fields stored as null after failing coercion.
    pub degraded_fields: usize,
}

/// Records ready for one bulk write.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub stats: BatchStats,
    /// Wall clock time the first row of the batch was read.
    pub started_at: DateTime<Utc>,
    pub records: Vec<AssembledRecord>,
}

/// Groups row outcomes into batches of a fixed number of attempted rows.
///
/// Rejected rows count towards the batch size so that batch boundaries fall
/// on the same input lines whatever the rejection rate.
#[derive(Debug)]
pub struct Batcher {
    batch_size: NonZeroUsize,
    completed: usize,
    current: Option<Batch>,
}

impl Batcher {
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self {
            batch_size,
            completed: 0,
            current: None,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Add an assembled record, returning the batch it completes.
    pub fn push_record(&mut self, record: AssembledRecord) -> Option<Batch> {
        let batch = self.current();
        batch.stats.attempted += 1;
        batch.stats.parsed += 1;
        batch.stats.degraded_fields += record.degraded_fields();
        batch.records.push(record);
        self.take_full()
    }

    /// Count a rejected row, returning the batch it completes.
    pub fn push_rejected(&mut self) -> Option<Batch> {
        let batch = self.current();
        batch.stats.attempted += 1;
        batch.stats.rejected += 1;
        self.take_full()
    }

    /// The partially filled batch, if any rows were added since the last
    /// complete one.
    pub fn finish(&mut self) -> Option<Batch> {
        self.current.take()
    }

    fn current(&mut self) -> &mut Batch {
        let number = self.completed + 1;
        let capacity = self.batch_size.get();
        self.current.get_or_insert_with(|| Batch {
            stats: BatchStats {
                number,
                ..Default::default()
            },
            started_at: Utc::now(),
            records: Vec::with_capacity(capacity),
        })
    }

    fn take_full(&mut self) -> Option<Batch> {
        let full = self
            .current
            .as_ref()
            .is_some_and(|b| b.stats.attempted >= self.batch_size.get());
        if full {
            self.completed += 1;
            self.current.take()
        } else {
            None
        }
    }
}
