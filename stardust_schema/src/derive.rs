use std::collections::{BTreeMap, BTreeSet};

use observability_deps::tracing::debug;

use crate::{FieldGroup, FieldSpec, SchemaDescriptor, SchemaError};

/// Placement of header columns that match none of the naming conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownColumnPolicy {
    /// Keep as a flat string column.
    #[default]
    TopLevel,
    /// Nest under the metadata document using the column name as its path.
    Metadata,
    /// Drop the column.
    Discard,
}

/// How measurement column names become measurement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasurementNaming {
    /// `values.in_bits.delta` becomes `in_bits.delta`.
    #[default]
    StripPrefix,
    /// `values.in_bits.delta` becomes `values_in_bits_delta`.
    Underscore,
}

/// The naming conventions used by [`derive_schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPolicy {
    /// Column holding the record timestamp.
    pub timestamp_column: String,
    /// Target name of the timestamp column in column tuples.
    pub timestamp_target: String,
    pub measurement_prefix: String,
    pub metadata_prefix: String,
    pub measurement_naming: MeasurementNaming,
    pub unknown_columns: UnknownColumnPolicy,
    /// Columns dropped regardless of their name.
    pub discard: BTreeSet<String>,
    /// Explicit source name to target path mappings, applied before the prefix
    /// conventions.
    pub renames: BTreeMap<String, String>,
    /// Source columns every row must populate. A required column missing from
    /// the header fails derivation.
    pub required: Vec<String>,
}

impl Default for SchemaPolicy {
    fn default() -> Self {
        Self {
            timestamp_column: "@timestamp".to_string(),
            timestamp_target: "timestamp".to_string(),
            measurement_prefix: "values.".to_string(),
            metadata_prefix: "meta.".to_string(),
            measurement_naming: MeasurementNaming::default(),
            unknown_columns: UnknownColumnPolicy::default(),
            discard: [
                "@collect_time_min",
                "@exit_time",
                "@processing_time",
                "@start_time",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            renames: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

impl SchemaPolicy {
    /// The series identifier convention of the document and column stores:
    /// the timestamp, device and interface name are required and the interface
    /// name is stored as `interfaceName`.
    pub fn series_identifiers() -> Self {
        Self {
            renames: [("meta.name".to_string(), "interfaceName".to_string())]
                .into_iter()
                .collect(),
            required: ["@timestamp", "meta.device", "meta.name"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..Default::default()
        }
    }

    fn classify(&self, column: &str) -> FieldSpec {
        if column == self.timestamp_column {
            return FieldSpec::new(column, self.timestamp_target.as_str(), FieldGroup::Timestamp);
        }
        if self.discard.contains(column) {
            return FieldSpec::new(column, column, FieldGroup::Discard);
        }

        let renamed = self.renames.get(column);

        if let Some(stripped) = column.strip_prefix(self.measurement_prefix.as_str()) {
            let target = match (renamed, self.measurement_naming) {
                (Some(target), _) => target.clone(),
                (None, MeasurementNaming::StripPrefix) => stripped.to_string(),
                (None, MeasurementNaming::Underscore) => column.replace('.', "_"),
            };
            return FieldSpec::new(column, target, FieldGroup::Measurement);
        }

        if let Some(stripped) = column.strip_prefix(self.metadata_prefix.as_str()) {
            let target = renamed.map_or(stripped, String::as_str);
            return FieldSpec::new(column, target, FieldGroup::Metadata);
        }

        let target = renamed.map_or(column, String::as_str);
        match self.unknown_columns {
            UnknownColumnPolicy::TopLevel => FieldSpec::new(column, target, FieldGroup::TopLevel),
            UnknownColumnPolicy::Metadata => FieldSpec::new(column, target, FieldGroup::Metadata),
            UnknownColumnPolicy::Discard => FieldSpec::new(column, target, FieldGroup::Discard),
        }
    }
}

/// Derive a [`SchemaDescriptor`] from the column names of a TSV header.
///
/// Header names are stripped of surrounding whitespace and empty names are
/// skipped. Every remaining column is placed by `policy`: the timestamp
/// column, then the discard set, then the measurement and metadata prefixes,
/// and finally [`SchemaPolicy::unknown_columns`].
pub fn derive_schema<S>(
    header: &[S],
    policy: &SchemaPolicy,
) -> Result<SchemaDescriptor, SchemaError>
where
    S: AsRef<str>,
{
    let columns = header
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>();
    if columns.is_empty() {
        return Err(SchemaError::EmptyHeader);
    }

    if let Some(name) = policy
        .required
        .iter()
        .find(|r| !columns.contains(&r.as_str()))
    {
        return Err(SchemaError::RequiredColumnMissing { name: name.clone() });
    }

    let fields = columns
        .iter()
        .map(|column| policy.classify(column))
        .collect::<Vec<_>>();

    let schema = SchemaDescriptor::new(fields, policy.required.iter().cloned())?;
    debug!(
        columns = schema.len(),
        measurements = schema.fields_in(FieldGroup::Measurement).count(),
        metadata = schema.fields_in(FieldGroup::Metadata).count(),
        top_level = schema.fields_in(FieldGroup::TopLevel).count(),
        discarded = schema.fields_in(FieldGroup::Discard).count(),
        "derived schema from header"
    );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn placements(schema: &SchemaDescriptor) -> Vec<(&str, &str, FieldGroup)> {
        schema
            .fields()
            .iter()
            .map(|f| (f.source_name.as_str(), f.target_path.as_str(), f.group))
            .collect()
    }

    #[test_log::test]
    fn test_prefix_conventions() {
        let header = [
            "@timestamp",
            "meta.device",
            "meta.device_info.location.lat",
            "values.in_bits.delta",
            "@exit_time",
            "collector",
        ];
        let schema = derive_schema(&header, &SchemaPolicy::default()).unwrap();

        assert_eq!(
            placements(&schema),
            [
                ("@timestamp", "timestamp", FieldGroup::Timestamp),
                ("meta.device", "device", FieldGroup::Metadata),
                (
                    "meta.device_info.location.lat",
                    "device_info.location.lat",
                    FieldGroup::Metadata
                ),
                ("values.in_bits.delta", "in_bits.delta", FieldGroup::Measurement),
                ("@exit_time", "@exit_time", FieldGroup::Discard),
                ("collector", "collector", FieldGroup::TopLevel),
            ]
        );
        assert!(schema.required().is_empty());
    }

    #[test]
    fn test_header_names_are_stripped() {
        let header = [" @timestamp", "meta.name \r", "", "values.x\t"];
        let schema = derive_schema(&header, &SchemaPolicy::default()).unwrap();

        assert_eq!(
            placements(&schema),
            [
                ("@timestamp", "timestamp", FieldGroup::Timestamp),
                ("meta.name", "name", FieldGroup::Metadata),
                ("values.x", "x", FieldGroup::Measurement),
            ]
        );
    }

    #[test]
    fn test_unknown_column_policy() {
        let header = ["@timestamp", "collector"];

        for (policy, group) in [
            (UnknownColumnPolicy::TopLevel, FieldGroup::TopLevel),
            (UnknownColumnPolicy::Metadata, FieldGroup::Metadata),
            (UnknownColumnPolicy::Discard, FieldGroup::Discard),
        ] {
            let policy = SchemaPolicy {
                unknown_columns: policy,
                ..Default::default()
            };
            let schema = derive_schema(&header, &policy).unwrap();
            assert_eq!(schema.field("collector").map(|f| f.group), Some(group));
        }
    }

    #[test]
    fn test_underscore_measurement_naming() {
        let policy = SchemaPolicy {
            measurement_naming: MeasurementNaming::Underscore,
            ..Default::default()
        };
        let header = ["values.queue3.sap_in_fwd_inprof_bits.delta"];
        let schema = derive_schema(&header, &policy).unwrap();

        assert_eq!(
            schema.fields()[0].target_path,
            "values_queue3_sap_in_fwd_inprof_bits_delta"
        );
    }

    #[test]
    fn test_series_identifier_preset() {
        let header = ["@timestamp", "meta.device", "meta.name", "values.in_bits.delta"];
        let schema = derive_schema(&header, &SchemaPolicy::series_identifiers()).unwrap();

        assert_eq!(
            schema.field("meta.name").map(|f| f.target_path.as_str()),
            Some("interfaceName")
        );
        assert_eq!(schema.required(), ["@timestamp", "meta.device", "meta.name"]);
    }

    #[test]
    fn test_required_column_missing_from_header() {
        let err = derive_schema(
            &["@timestamp", "meta.device"],
            &SchemaPolicy::series_identifiers(),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "required column 'meta.name' is not present in the header"
        );
    }

    #[test]
    fn test_required_discarded_column_is_rejected() {
        let policy = SchemaPolicy {
            required: vec!["@exit_time".to_string()],
            ..Default::default()
        };
        let err = derive_schema(&["@timestamp", "@exit_time"], &policy).unwrap_err();
        assert!(matches!(err, SchemaError::RequiredFieldDiscarded { .. }), "{err}");
    }

    #[test]
    fn test_duplicate_header_column() {
        let err = derive_schema(&["meta.a", "meta.a"], &SchemaPolicy::default()).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateSourceName { .. }), "{err}");
    }

    #[test]
    fn test_empty_header() {
        let header: [&str; 2] = ["", " "];
        let err = derive_schema(&header, &SchemaPolicy::default()).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyHeader));
    }
}
