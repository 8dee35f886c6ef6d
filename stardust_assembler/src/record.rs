use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use stardust_schema::{FieldGroup, SchemaDescriptor};

use crate::{
    path::{flatten, get_path},
    timestamp::format_timestamp,
};

/// A typed scalar of a flat column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Timestamp(DateTime<Utc>),
    F64(f64),
    I64(i64),
    String(String),
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Timestamp(ts) => Self::String(format_timestamp(ts)),
            // non-finite values have no JSON form and become null
            FieldValue::F64(v) => Self::from(*v),
            FieldValue::I64(v) => Self::from(*v),
            FieldValue::String(v) => Self::String(v.clone()),
        }
    }
}

/// A field that failed numeric coercion and was stored as null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Source name of the degraded field.
    pub field: String,
    /// The raw value that could not be coerced.
    pub value: String,
}

/// One assembled row.
///
/// Owned by the caller; the assembler keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledRecord {
    /// The coerced timestamp, present whenever the schema declares one.
    pub timestamp: Option<DateTime<Utc>>,
    /// Nested metadata document with string leaves, keys in sorted order.
    pub metadata: Map<String, Value>,
    /// Measurements in schema order. `None` is a null measurement.
    pub measurements: IndexMap<String, Option<f64>>,
    /// Flat top-level columns in schema order.
    pub top_level: IndexMap<String, Option<FieldValue>>,
    /// Field-level degradations of this row.
    pub warnings: Vec<FieldWarning>,
}

impl AssembledRecord {
    /// Number of fields stored as null because their value failed coercion.
    pub fn degraded_fields(&self) -> usize {
        self.warnings.len()
    }

    pub fn metadata_value(&self, path: &str) -> Option<&Value> {
        get_path(&self.metadata, path)
    }

    /// Metadata leaves keyed by dotted path.
    pub fn flatten_metadata(&self) -> Vec<(String, &Value)> {
        flatten(&self.metadata)
    }

    /// Render the record as a nested JSON document.
    pub fn to_document(&self, layout: &DocumentLayout) -> Map<String, Value> {
        let mut doc = Map::new();

        if let Some(ts) = &self.timestamp {
            doc.insert(layout.time_field.clone(), Value::String(format_timestamp(ts)));
        }

        match &layout.metadata_field {
            Some(name) => {
                doc.insert(name.clone(), Value::Object(self.metadata.clone()));
            }
            None => doc.extend(self.metadata.clone()),
        }

        let measurements = self
            .measurements
            .iter()
            .map(|(name, value)| (name.clone(), value.map_or(Value::Null, Value::from)));
        match &layout.measurements_field {
            Some(name) => {
                doc.insert(name.clone(), Value::Object(measurements.collect()));
            }
            None => doc.extend(measurements),
        }

        doc.extend(self.top_level.iter().map(|(name, value)| {
            (name.clone(), value.as_ref().map_or(Value::Null, Value::from))
        }));

        doc
    }

    /// One value per non-discarded field of `schema`, in schema order, named
    /// by [`SchemaDescriptor::column_names`].
    ///
    /// `schema` must be the descriptor this record was assembled with. Fields
    /// sharing a target path all report the value that was written last.
    pub fn column_values(&self, schema: &SchemaDescriptor) -> Vec<Option<FieldValue>> {
        schema
            .fields()
            .iter()
            .filter_map(|field| {
                let target = field.target_path.as_str();
                let value = match field.group {
                    FieldGroup::Discard => return None,
                    FieldGroup::Timestamp => self.timestamp.map(FieldValue::Timestamp),
                    FieldGroup::Measurement => self
                        .measurements
                        .get(target)
                        .copied()
                        .flatten()
                        .map(FieldValue::F64),
                    FieldGroup::Metadata => self
                        .metadata_value(target)
                        .and_then(Value::as_str)
                        .map(|s| FieldValue::String(s.to_string())),
                    FieldGroup::TopLevel => self.top_level.get(target).cloned().flatten(),
                };
                Some(value)
            })
            .collect()
    }
}

/// Placement of the record parts in a nested document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Key of the RFC 3339 timestamp.
    pub time_field: String,
    /// Key of the nested metadata document, or `None` to merge metadata into
    /// the root.
    pub metadata_field: Option<String>,
    /// Key of the measurement object, or `None` to merge measurements into
    /// the root.
    pub measurements_field: Option<String>,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            time_field: "timestamp".to_string(),
            metadata_field: Some("metadata".to_string()),
            measurements_field: None,
        }
    }
}
