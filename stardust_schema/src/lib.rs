//! Declarative mapping from wide, flat telemetry columns to assembled records.
//!
//! A [`SchemaDescriptor`] states, for every source column of a Stardust TSV
//! feed, where its value lands in the assembled record: the record timestamp,
//! the nested metadata document, the flat measurement mapping, a flat
//! top-level column, or nowhere at all.
//!
//! Descriptors are built once per run, either from a fixed table (see
//! [`formats`]), from a JSON file ([`SchemaDescriptor::from_json`]) or by
//! inspecting the header of the input file ([`derive_schema`]), and are
//! immutable thereafter.

use std::fmt::Display;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod derive;
pub mod formats;

pub use derive::{MeasurementNaming, SchemaPolicy, UnknownColumnPolicy, derive_schema};

/// Errors constructing a [`SchemaDescriptor`].
///
/// All of these are schema-level: they abort the run rather than a single row.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("required field '{name}' is not declared in the schema")]
    UnknownRequiredField { name: String },

    #[error("required field '{name}' is discarded and can never hold a value")]
    RequiredFieldDiscarded { name: String },

    #[error("source field '{name}' is declared more than once")]
    DuplicateSourceName { name: String },

    #[error("only one timestamp field is allowed, found '{first}' and '{second}'")]
    MultipleTimestampFields { first: String, second: String },

    #[error("required column '{name}' is not present in the header")]
    RequiredColumnMissing { name: String },

    #[error("header contains no column names")]
    EmptyHeader,

    #[error("invalid schema descriptor json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where an assembled value is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    /// The single record timestamp, coerced to UTC.
    Timestamp,
    /// A string leaf in the nested metadata document.
    Metadata,
    /// A nullable floating point measurement.
    Measurement,
    /// A flat column, coerced per its [`ValueType`].
    TopLevel,
    /// Read and dropped.
    Discard,
}

/// Scalar type of a [`FieldGroup::TopLevel`] column.
///
/// Ignored by every other group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    #[default]
    String,
    Integer,
    Float,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// Placement of one source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name as it appears in the TSV header, e.g. `meta.device_info.os`.
    pub source_name: String,
    /// Dotted path within the target group, e.g. `device_info.os`.
    pub target_path: String,
    pub group: FieldGroup,
    #[serde(default)]
    pub value_type: ValueType,
}

impl FieldSpec {
    pub fn new(
        source_name: impl Into<String>,
        target_path: impl Into<String>,
        group: FieldGroup,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            target_path: target_path.into(),
            group,
            value_type: ValueType::default(),
        }
    }

    /// Set the [`ValueType`] used to coerce a top-level column.
    pub fn with_value_type(self, value_type: ValueType) -> Self {
        Self { value_type, ..self }
    }
}

/// An immutable, validated set of [`FieldSpec`]s plus the names of the source
/// fields every row must populate.
///
/// Two fields in the same group may share a `target_path`; the one declared
/// later overwrites the earlier value when a record is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorSpec", into = "DescriptorSpec")]
pub struct SchemaDescriptor {
    fields: Vec<FieldSpec>,
    required: Vec<String>,
    by_source_name: HashMap<String, usize>,
}

impl SchemaDescriptor {
    /// Validate `fields` and `required` into a descriptor.
    pub fn new(
        fields: impl IntoIterator<Item = FieldSpec>,
        required: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, SchemaError> {
        let fields = fields.into_iter().collect::<Vec<_>>();

        let mut by_source_name = HashMap::with_capacity(fields.len());
        let mut timestamp: Option<&str> = None;
        for (idx, field) in fields.iter().enumerate() {
            if by_source_name
                .insert(field.source_name.clone(), idx)
                .is_some()
            {
                return Err(SchemaError::DuplicateSourceName {
                    name: field.source_name.clone(),
                });
            }
            if field.group == FieldGroup::Timestamp {
                if let Some(first) = timestamp {
                    return Err(SchemaError::MultipleTimestampFields {
                        first: first.to_string(),
                        second: field.source_name.clone(),
                    });
                }
                timestamp = Some(&field.source_name);
            }
        }

        let mut required_names: Vec<String> = Vec::new();
        for name in required {
            let name = name.into();
            match by_source_name.get(&name) {
                None => return Err(SchemaError::UnknownRequiredField { name }),
                Some(&idx) if fields[idx].group == FieldGroup::Discard => {
                    return Err(SchemaError::RequiredFieldDiscarded { name });
                }
                Some(_) => {}
            }
            if !required_names.contains(&name) {
                required_names.push(name);
            }
        }

        Ok(Self {
            fields,
            required: required_names,
            by_source_name,
        })
    }

    /// Load a descriptor from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Source names that must yield a non-null value in every row.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn is_required(&self, source_name: &str) -> bool {
        self.required.iter().any(|r| r == source_name)
    }

    /// Map from source name to the index of its field in [`Self::fields`].
    pub fn fields_by_source_name(&self) -> &HashMap<String, usize> {
        &self.by_source_name
    }

    /// Look up the field declared for `source_name`.
    pub fn field(&self, source_name: &str) -> Option<&FieldSpec> {
        self.by_source_name
            .get(source_name)
            .map(|&idx| &self.fields[idx])
    }

    pub fn timestamp_field(&self) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.group == FieldGroup::Timestamp)
    }

    /// Fields placed in `group`, in declaration order.
    pub fn fields_in(&self, group: FieldGroup) -> impl Iterator<Item = &FieldSpec> + '_ {
        self.fields.iter().filter(move |f| f.group == group)
    }

    /// Target names of every non-discarded field, in declaration order.
    ///
    /// These name the values of a flat column tuple produced from a record
    /// assembled with this descriptor.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.group != FieldGroup::Discard)
            .map(|f| f.target_path.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The serialized form of a [`SchemaDescriptor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DescriptorSpec {
    fields: Vec<FieldSpec>,
    #[serde(default)]
    required: Vec<String>,
}

impl TryFrom<DescriptorSpec> for SchemaDescriptor {
    type Error = SchemaError;

    fn try_from(spec: DescriptorSpec) -> Result<Self, Self::Error> {
        Self::new(spec.fields, spec.required)
    }
}

impl From<SchemaDescriptor> for DescriptorSpec {
    fn from(descriptor: SchemaDescriptor) -> Self {
        Self {
            fields: descriptor.fields,
            required: descriptor.required,
        }
    }
}
