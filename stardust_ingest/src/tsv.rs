use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use stardust_sharder::{SeriesKeyExtractor, WorkerFilter};

use crate::{IngestError, Result};

/// One data line of a TSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    /// Zero based position of the line among the data lines of the file.
    /// Blank lines are not counted.
    pub index: usize,
    pub fields: Vec<String>,
}

#[derive(Debug)]
struct RowSelection {
    filter: WorkerFilter,
    series: Option<SeriesKeyExtractor>,
}

impl RowSelection {
    fn accepts(&self, fields: &[String], index: usize) -> bool {
        match &self.series {
            Some(series) => {
                let key = series
                    .from_row(fields)
                    .unwrap_or_else(|| vec![""; series.source_names().len()]);
                self.filter.accepts(&key, index)
            }
            None => self.filter.accepts::<&str>(&[], index),
        }
    }
}

/// Reads a header line and then data lines of tab separated values.
///
/// Header names are stripped of surrounding whitespace; data values are
/// returned as they appear, minus the line terminator.
#[derive(Debug)]
pub struct TsvReader<R> {
    lines: Lines<R>,
    header: Vec<String>,
    offset: usize,
    limit: Option<usize>,
    selection: Option<RowSelection>,
    next_index: usize,
    yielded: usize,
}

impl TsvReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R> TsvReader<R>
where
    R: BufRead,
{
    /// Consume the header line of `reader`.
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?
                .split('\t')
                .map(|name| name.trim().to_string())
                .collect::<Vec<_>>(),
            None => return Err(IngestError::EmptyHeader),
        };
        if header.iter().all(String::is_empty) {
            return Err(IngestError::EmptyHeader);
        }

        Ok(Self {
            lines,
            header,
            offset: 0,
            limit: None,
            selection: None,
            next_index: 0,
            yielded: 0,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Skip the first `offset` data lines.
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// Stop after yielding `limit` rows.
    pub fn with_limit(self, limit: Option<usize>) -> Self {
        Self { limit, ..self }
    }

    /// Yield only the rows `filter` accepts. Hash based filters read the
    /// series key from `series_columns`.
    pub fn with_worker<N>(self, filter: WorkerFilter, series_columns: &[N]) -> Result<Self>
    where
        N: AsRef<str>,
    {
        let series = if filter.partitioner().needs_series_key() {
            Some(SeriesKeyExtractor::bind(series_columns, &self.header)?)
        } else {
            None
        };

        Ok(Self {
            selection: Some(RowSelection { filter, series }),
            ..self
        })
    }
}

impl<R> Iterator for TsvReader<R>
where
    R: BufRead,
{
    type Item = Result<TsvRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.limit.is_some_and(|limit| self.yielded >= limit) {
                return None;
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.is_empty() {
                continue;
            }

            let index = self.next_index;
            self.next_index += 1;
            if index < self.offset {
                continue;
            }

            let fields = line.split('\t').map(String::from).collect::<Vec<_>>();
            if let Some(selection) = &self.selection
                && !selection.accepts(&fields, index)
            {
                continue;
            }

            self.yielded += 1;
            return Some(Ok(TsvRow { index, fields }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stardust_sharder::{Partitioner, SeriesHasher, ShardScheme};

    const INPUT: &str = "@timestamp\t meta.device\tmeta.name \r\n\
        t0\tr1\teth0\r\n\
        t1\tr1\teth1\n\
        \n\
        t2\tr2\teth0\n\
        t3\tr1\teth0\n\
        t4\tr2\t\n";

    fn rows(reader: TsvReader<&[u8]>) -> Vec<(usize, String)> {
        reader
            .map(|row| {
                let row = row.unwrap();
                (row.index, row.fields[0].clone())
            })
            .collect()
    }

    #[test]
    fn test_header_and_rows() {
        let reader = TsvReader::new(INPUT.as_bytes()).unwrap();
        assert_eq!(reader.header(), ["@timestamp", "meta.device", "meta.name"]);

        let all = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].fields, ["t0", "r1", "eth0"]);
        assert_eq!(all[4].fields, ["t4", "r2", ""]);
        assert_eq!(
            all.iter().map(|r| r.index).collect::<Vec<_>>(),
            [0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_offset_and_limit() {
        let reader = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_offset(1)
            .with_limit(Some(2));
        assert_eq!(rows(reader), [(1, "t1".to_string()), (2, "t2".to_string())]);

        let reader = TsvReader::new(INPUT.as_bytes()).unwrap().with_limit(Some(0));
        assert!(rows(reader).is_empty());
    }

    #[test]
    fn test_row_modulo_stride() {
        let partitioner = Partitioner::new(ShardScheme::RowModulo, 2).unwrap();
        let none: [&str; 0] = [];

        let even = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_worker(WorkerFilter::new(partitioner.clone(), 0).unwrap(), &none)
            .unwrap();
        assert_eq!(
            rows(even),
            [(0, "t0".to_string()), (2, "t2".to_string()), (4, "t4".to_string())]
        );

        let odd = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_offset(2)
            .with_worker(WorkerFilter::new(partitioner, 1).unwrap(), &none)
            .unwrap();
        assert_eq!(rows(odd), [(3, "t3".to_string())]);
    }

    #[test]
    fn test_series_hash_filter() {
        let partitioner = Partitioner::new(ShardScheme::Hash(SeriesHasher::default()), 4).unwrap();
        let columns = ["meta.device", "meta.name"];

        // Adler-32 assigns r1|eth0 and r2| to worker 1 of 4, r1|eth1 and r2|eth0 to 2
        let worker_1 = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_worker(WorkerFilter::new(partitioner.clone(), 1).unwrap(), &columns)
            .unwrap();
        assert_eq!(
            rows(worker_1),
            [(0, "t0".to_string()), (3, "t3".to_string()), (4, "t4".to_string())]
        );

        let worker_2 = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_worker(WorkerFilter::new(partitioner, 2).unwrap(), &columns)
            .unwrap();
        assert_eq!(rows(worker_2), [(1, "t1".to_string()), (2, "t2".to_string())]);
    }

    #[test]
    fn test_series_column_missing() {
        let partitioner = Partitioner::new(ShardScheme::Hash(SeriesHasher::default()), 4).unwrap();
        let err = TsvReader::new(INPUT.as_bytes())
            .unwrap()
            .with_worker(WorkerFilter::new(partitioner, 0).unwrap(), &["meta.ifindex"])
            .unwrap_err();
        assert!(matches!(err, IngestError::Partition(_)), "{err}");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            TsvReader::new("".as_bytes()),
            Err(IngestError::EmptyHeader)
        ));
        assert!(matches!(
            TsvReader::new("\t \n".as_bytes()),
            Err(IngestError::EmptyHeader)
        ));
    }
}
