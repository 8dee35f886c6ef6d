use serde_json::Value;
use stardust_assembler::{AssembledRecord, FieldValue};
use stardust_schema::{FieldGroup, SchemaDescriptor};

use crate::PartitionError;

/// Source columns naming a series, in the order used by the network
/// telemetry feeds.
pub const DEFAULT_SERIES_COLUMNS: &[&str] = &["meta.device", "meta.name"];

/// Pulls the series key out of raw rows or assembled records.
///
/// A missing or empty key part is hashed as an empty string, so every row has
/// a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesKeyExtractor {
    source_names: Vec<String>,
    offsets: Vec<usize>,
}

impl SeriesKeyExtractor {
    /// Locate each of `source_names` in `header`. Header names are compared
    /// after stripping surrounding whitespace.
    pub fn bind<N, S>(source_names: &[N], header: &[S]) -> Result<Self, PartitionError>
    where
        N: AsRef<str>,
        S: AsRef<str>,
    {
        if source_names.is_empty() {
            return Err(PartitionError::NoSeriesColumns);
        }

        let offsets = source_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                header
                    .iter()
                    .position(|column| column.as_ref().trim() == name)
                    .ok_or_else(|| PartitionError::MissingSeriesColumn {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source_names: source_names
                .iter()
                .map(|n| n.as_ref().to_string())
                .collect(),
            offsets,
        })
    }

    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }

    /// The series key of a raw row bound to the same header.
    ///
    /// Returns `None` if the row is too short to hold every key column.
    pub fn from_row<'a, S>(&self, row: &'a [S]) -> Option<Vec<&'a str>>
    where
        S: AsRef<str>,
    {
        self.offsets
            .iter()
            .map(|&offset| row.get(offset).map(|v| v.as_ref()))
            .collect()
    }

    /// The series key of a record assembled with `schema`.
    ///
    /// Key parts are read from the metadata document or the string top-level
    /// columns the key columns were placed in.
    pub fn from_record<'a>(
        &self,
        record: &'a AssembledRecord,
        schema: &SchemaDescriptor,
    ) -> Vec<&'a str> {
        self.source_names
            .iter()
            .map(|name| {
                let Some(field) = schema.field(name) else {
                    return "";
                };
                let target = field.target_path.as_str();
                match field.group {
                    FieldGroup::Metadata => record
                        .metadata_value(target)
                        .and_then(Value::as_str)
                        .unwrap_or_default(),
                    FieldGroup::TopLevel => match record.top_level.get(target) {
                        Some(Some(FieldValue::String(s))) => s.as_str(),
                        _ => "",
                    },
                    _ => "",
                }
            })
            .collect()
    }
}
