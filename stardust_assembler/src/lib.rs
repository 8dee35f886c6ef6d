//! Assembly of wide, flat telemetry rows into nested and typed records.
//!
//! A [`RecordAssembler`] binds a [`SchemaDescriptor`] to the header of an
//! input file once, validating that every declared column is present, and
//! then converts each raw row into an [`AssembledRecord`]:
//!
//! * the timestamp column is coerced to a UTC instant;
//! * metadata columns are set as strings into a nested document at their
//!   dotted target path (see [`path`]);
//! * measurement columns become nullable `f64`s, a value that fails to parse
//!   is stored as null and reported as a [`FieldWarning`];
//! * top-level columns are coerced to their declared [`ValueType`];
//! * discarded columns are ignored.
//!
//! An empty string and an absent value are the same thing: no value.

use std::sync::Arc;

use hashbrown::HashMap;
use observability_deps::tracing::debug;
use serde_json::{Map, Value};
use stardust_schema::{FieldGroup, FieldSpec, SchemaDescriptor, ValueType};
use thiserror::Error;

pub mod path;
mod record;
pub mod timestamp;

pub use path::PathConflict;
pub use record::{AssembledRecord, DocumentLayout, FieldValue, FieldWarning};
pub use timestamp::{TimestampError, parse_timestamp};

#[derive(Debug, Error)]
pub enum Error {
    #[error("schema field '{name}' is not present in the header")]
    MissingColumn { name: String },

    #[error("row has {actual} columns but the header has {expected}")]
    RowShape { expected: usize, actual: usize },

    #[error("field '{field}': {source}")]
    InvalidTimestamp {
        field: String,
        source: TimestampError,
    },

    #[error("field '{field}': '{value}' is not a valid {value_type}")]
    InvalidValue {
        field: String,
        value: String,
        value_type: ValueType,
    },

    #[error("required fields missing: {}", .fields.join(", "))]
    RequiredFieldMissing { fields: Vec<String> },

    #[error("field '{field}': {source}")]
    PathConflict {
        field: String,
        source: PathConflict,
    },
}

impl Error {
    /// Whether this error rejects a single row, as opposed to the whole run.
    pub fn is_row_level(&self) -> bool {
        !matches!(self, Self::MissingColumn { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Treatment of empty metadata and top-level values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// Leave the key out.
    #[default]
    Omit,
    /// Store an explicit null.
    Null,
    /// Store an empty string. Typed top-level columns store null instead.
    EmptyString,
}

/// Behaviour when a metadata path runs into an existing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathConflictPolicy {
    /// Overwrite it, see [`path::set_path`].
    #[default]
    Overwrite,
    /// Reject the row with [`Error::PathConflict`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblerOptions {
    pub metadata_nulls: NullPolicy,
    /// Strip surrounding whitespace from values before use. Header names are
    /// always stripped.
    pub trim_values: bool,
    pub path_conflicts: PathConflictPolicy,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    /// Index into the schema fields.
    field: usize,
    /// Column of the field in the header.
    offset: usize,
    required: bool,
}

/// A [`SchemaDescriptor`] bound to the column layout of one header.
///
/// Binding is done once per input file; [`Self::assemble`] is then called for
/// every row. The assembler is immutable and may be shared across threads.
#[derive(Debug)]
pub struct RecordAssembler {
    schema: Arc<SchemaDescriptor>,
    options: AssemblerOptions,
    bindings: Vec<Binding>,
    header_len: usize,
}

impl RecordAssembler {
    /// Resolve the column of every field of `schema` in `header`.
    ///
    /// Fails with [`Error::MissingColumn`] if any field, discarded or not, is
    /// absent from the header. Header names are compared after stripping
    /// surrounding whitespace; when a name repeats the first column wins.
    pub fn bind<S>(
        header: &[S],
        schema: Arc<SchemaDescriptor>,
        options: AssemblerOptions,
    ) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let bindings = bind_columns(header, &schema)?;
        debug!(
            header_columns = header.len(),
            bound_fields = bindings.len(),
            required = schema.required().len(),
            "bound schema to header"
        );

        Ok(Self {
            schema,
            options,
            bindings,
            header_len: header.len(),
        })
    }

    pub fn schema(&self) -> &Arc<SchemaDescriptor> {
        &self.schema
    }

    pub fn options(&self) -> AssemblerOptions {
        self.options
    }

    /// Number of columns in the bound header.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Assemble one row.
    ///
    /// Columns beyond the header are ignored. Nothing is returned for a
    /// rejected row.
    pub fn assemble<S>(&self, row: &[S]) -> Result<AssembledRecord>
    where
        S: AsRef<str>,
    {
        assemble_row(
            &self.schema,
            &self.bindings,
            self.header_len,
            self.options,
            row,
        )
    }
}

/// Bind and assemble a single row.
///
/// Prefer [`RecordAssembler`] when assembling more than one row against the
/// same header.
pub fn assemble<R, H>(
    row: &[R],
    header: &[H],
    schema: &SchemaDescriptor,
    options: AssemblerOptions,
) -> Result<AssembledRecord>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let bindings = bind_columns(header, schema)?;
    assemble_row(schema, &bindings, header.len(), options, row)
}

fn bind_columns<S>(header: &[S], schema: &SchemaDescriptor) -> Result<Vec<Binding>>
where
    S: AsRef<str>,
{
    let mut offsets: HashMap<&str, usize> = HashMap::with_capacity(header.len());
    for (offset, name) in header.iter().enumerate() {
        offsets.entry(name.as_ref().trim()).or_insert(offset);
    }

    let mut bindings = Vec::with_capacity(schema.len());
    for (idx, field) in schema.fields().iter().enumerate() {
        let offset = *offsets
            .get(field.source_name.as_str())
            .ok_or_else(|| Error::MissingColumn {
                name: field.source_name.clone(),
            })?;
        if field.group == FieldGroup::Discard {
            continue;
        }
        bindings.push(Binding {
            field: idx,
            offset,
            required: schema.is_required(&field.source_name),
        });
    }
    Ok(bindings)
}

fn assemble_row<S>(
    schema: &SchemaDescriptor,
    bindings: &[Binding],
    header_len: usize,
    options: AssemblerOptions,
    row: &[S],
) -> Result<AssembledRecord>
where
    S: AsRef<str>,
{
    if row.len() < header_len {
        return Err(Error::RowShape {
            expected: header_len,
            actual: row.len(),
        });
    }

    let mut record = AssembledRecord::default();
    let mut missing = Vec::new();

    for binding in bindings {
        let field = &schema.fields()[binding.field];
        let raw = row[binding.offset].as_ref();
        let raw = if options.trim_values { raw.trim() } else { raw };
        let value = (!raw.is_empty()).then_some(raw);

        let produced = match field.group {
            FieldGroup::Timestamp => match value {
                Some(raw) => {
                    let ts = parse_timestamp(raw).map_err(|source| Error::InvalidTimestamp {
                        field: field.source_name.clone(),
                        source,
                    })?;
                    record.timestamp = Some(ts);
                    true
                }
                None => false,
            },
            FieldGroup::Measurement => {
                let parsed = value.and_then(|raw| match raw.parse::<f64>() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        debug!(
                            field = %field.source_name,
                            value = raw,
                            "measurement stored as null"
                        );
                        record.warnings.push(FieldWarning {
                            field: field.source_name.clone(),
                            value: raw.to_string(),
                        });
                        None
                    }
                });
                record
                    .measurements
                    .insert(field.target_path.clone(), parsed);
                parsed.is_some()
            }
            FieldGroup::Metadata => {
                place_metadata(&mut record.metadata, field, value, options)?;
                value.is_some()
            }
            FieldGroup::TopLevel => {
                let typed = value.map(|raw| coerce(field, raw)).transpose()?;
                let produced = typed.is_some();
                match (typed, options.metadata_nulls) {
                    (Some(v), _) => {
                        record.top_level.insert(field.target_path.clone(), Some(v));
                    }
                    (None, NullPolicy::Omit) => {}
                    (None, NullPolicy::Null) => {
                        record.top_level.insert(field.target_path.clone(), None);
                    }
                    (None, NullPolicy::EmptyString) => {
                        let empty = (field.value_type == ValueType::String)
                            .then(|| FieldValue::String(String::new()));
                        record.top_level.insert(field.target_path.clone(), empty);
                    }
                }
                produced
            }
            FieldGroup::Discard => continue,
        };

        // the timestamp is always required
        if !produced && (binding.required || field.group == FieldGroup::Timestamp) {
            missing.push(field.source_name.clone());
        }
    }

    if !missing.is_empty() {
        return Err(Error::RequiredFieldMissing { fields: missing });
    }
    Ok(record)
}

fn place_metadata(
    metadata: &mut Map<String, Value>,
    field: &FieldSpec,
    value: Option<&str>,
    options: AssemblerOptions,
) -> Result<()> {
    let value = match (value, options.metadata_nulls) {
        (Some(v), _) => Value::String(v.to_string()),
        (None, NullPolicy::Omit) => return Ok(()),
        (None, NullPolicy::Null) => Value::Null,
        (None, NullPolicy::EmptyString) => Value::String(String::new()),
    };

    match options.path_conflicts {
        PathConflictPolicy::Overwrite => {
            path::set_path(metadata, &field.target_path, value);
            Ok(())
        }
        PathConflictPolicy::Reject => path::try_set_path(metadata, &field.target_path, value)
            .map_err(|source| Error::PathConflict {
                field: field.source_name.clone(),
                source,
            }),
    }
}

fn coerce(field: &FieldSpec, raw: &str) -> Result<FieldValue> {
    let value = match field.value_type {
        ValueType::String => Some(FieldValue::String(raw.to_string())),
        ValueType::Integer => raw.parse().ok().map(FieldValue::I64),
        ValueType::Float => raw.parse().ok().map(FieldValue::F64),
    };
    value.ok_or_else(|| Error::InvalidValue {
        field: field.source_name.clone(),
        value: raw.to_string(),
        value_type: field.value_type,
    })
}
