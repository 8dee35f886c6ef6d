//! CLI handling for the schema of the input file.

use std::{fs, path::PathBuf};

use observability_deps::tracing::info;
use stardust_schema::{
    MeasurementNaming, SchemaDescriptor, SchemaPolicy, UnknownColumnPolicy, derive_schema,
};

use crate::ConfigError;

/// Where the field layout of the input comes from.
///
/// Either a JSON schema file, or the naming conventions applied to the header
/// of the input.
#[derive(Debug, clap::Parser, Clone)]
pub struct SchemaConfig {
    /// Read the schema from a JSON file instead of deriving it from the
    /// header. The remaining schema options are ignored when this is set.
    #[clap(long = "schema-file", env = "STARDUST_SCHEMA_FILE", action)]
    pub schema_file: Option<PathBuf>,

    /// Naming convention for the series identifier columns.
    #[clap(
        long = "schema-convention",
        env = "STARDUST_SCHEMA_CONVENTION",
        default_value = "plain",
        action
    )]
    pub convention: SchemaConvention,

    /// Column holding the record timestamp.
    #[clap(
        long = "timestamp-column",
        env = "STARDUST_TIMESTAMP_COLUMN",
        default_value = "@timestamp",
        action
    )]
    pub timestamp_column: String,

    /// Placement of columns with neither the `values.` nor the `meta.` prefix.
    #[clap(
        long = "unknown-columns",
        env = "STARDUST_UNKNOWN_COLUMNS",
        default_value = "top-level",
        action
    )]
    pub unknown_columns: UnknownColumns,

    /// How `values.` columns are named in the record.
    #[clap(
        long = "measurement-naming",
        env = "STARDUST_MEASUREMENT_NAMING",
        default_value = "strip-prefix",
        action
    )]
    pub measurement_naming: Naming,

    /// Additional columns to drop, comma separated.
    #[clap(
        long = "discard",
        env = "STARDUST_DISCARD",
        value_delimiter = ',',
        action
    )]
    pub discard: Vec<String>,

    /// Additional columns every row must populate, comma separated.
    #[clap(
        long = "required",
        env = "STARDUST_REQUIRED",
        value_delimiter = ',',
        action
    )]
    pub required: Vec<String>,

    /// Store a column at an explicit target path.
    ///
    /// # Example
    /// ```text
    /// --rename meta.name=interfaceName --rename meta.ifindex=if.index
    /// ```
    #[clap(
        long = "rename",
        env = "STARDUST_RENAME",
        value_delimiter = ',',
        value_parser = parse_rename,
        action
    )]
    pub renames: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaConvention {
    /// `meta.name` becomes `name`; only the timestamp is required.
    #[default]
    Plain,
    /// `meta.name` becomes `interfaceName`; timestamp, device and interface
    /// name are required.
    SeriesIdentifiers,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnknownColumns {
    #[default]
    TopLevel,
    Metadata,
    Discard,
}

impl From<UnknownColumns> for UnknownColumnPolicy {
    fn from(value: UnknownColumns) -> Self {
        match value {
            UnknownColumns::TopLevel => Self::TopLevel,
            UnknownColumns::Metadata => Self::Metadata,
            UnknownColumns::Discard => Self::Discard,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Naming {
    #[default]
    StripPrefix,
    Underscore,
}

impl From<Naming> for MeasurementNaming {
    fn from(value: Naming) -> Self {
        match value {
            Naming::StripPrefix => Self::StripPrefix,
            Naming::Underscore => Self::Underscore,
        }
    }
}

impl SchemaConfig {
    /// The naming conventions selected by the options.
    pub fn policy(&self) -> SchemaPolicy {
        let mut policy = match self.convention {
            SchemaConvention::Plain => SchemaPolicy::default(),
            SchemaConvention::SeriesIdentifiers => SchemaPolicy::series_identifiers(),
        };

        // the preset requires the timestamp column under its default name
        for name in &mut policy.required {
            if *name == policy.timestamp_column {
                name.clone_from(&self.timestamp_column);
            }
        }
        policy.timestamp_column = self.timestamp_column.clone();
        policy.unknown_columns = self.unknown_columns.into();
        policy.measurement_naming = self.measurement_naming.into();
        policy.discard.extend(self.discard.iter().cloned());
        policy.renames.extend(self.renames.iter().cloned());
        for name in &self.required {
            if !policy.required.contains(name) {
                policy.required.push(name.clone());
            }
        }

        policy
    }

    /// Load the schema file, or derive the schema from `header`.
    pub fn load<S>(&self, header: &[S]) -> Result<SchemaDescriptor, ConfigError>
    where
        S: AsRef<str>,
    {
        match &self.schema_file {
            Some(path) => {
                let json =
                    fs::read_to_string(path).map_err(|source| ConfigError::ReadSchemaFile {
                        path: path.clone(),
                        source,
                    })?;
                let schema = SchemaDescriptor::from_json(&json)?;
                info!(path = %path.display(), fields = schema.len(), "loaded schema file");
                Ok(schema)
            }
            None => Ok(derive_schema(header, &self.policy())?),
        }
    }
}

fn parse_rename(
    s: &str,
) -> Result<(String, String), Box<dyn std::error::Error + Send + Sync + 'static>> {
    match s.trim().split_once('=') {
        Some((source, target)) if !source.trim().is_empty() && !target.trim().is_empty() => {
            Ok((source.trim().to_owned(), target.trim().to_owned()))
        }
        _ => Err(format!("Invalid rename - expected 'SOURCE=TARGET' got '{s}'").into()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use stardust_schema::FieldGroup;

    const HEADER: [&str; 5] = [
        "@timestamp",
        "meta.device",
        "meta.name",
        "values.in_bits.delta",
        "host",
    ];

    #[test]
    fn test_defaults() {
        let config = SchemaConfig::try_parse_from(["loader"]).unwrap();
        assert_eq!(config.policy(), SchemaPolicy::default());
    }

    #[test]
    fn test_policy_options() {
        let config = SchemaConfig::try_parse_from([
            "loader",
            "--schema-convention",
            "series-identifiers",
            "--unknown-columns",
            "discard",
            "--measurement-naming",
            "underscore",
            "--rename",
            "meta.device=router",
            "--required",
            "values.in_bits.delta",
        ])
        .unwrap();

        let schema = config.load(&HEADER).unwrap();
        let target = |name: &str| schema.field(name).map(|f| f.target_path.clone());
        assert_eq!(target("meta.device").as_deref(), Some("router"));
        assert_eq!(target("meta.name").as_deref(), Some("interfaceName"));
        assert_eq!(
            target("values.in_bits.delta").as_deref(),
            Some("values_in_bits_delta")
        );
        assert_eq!(
            schema.field("host").map(|f| f.group),
            Some(FieldGroup::Discard)
        );
        assert!(schema.is_required("meta.device"));
        assert!(schema.is_required("values.in_bits.delta"));
    }

    #[test]
    fn test_custom_timestamp_column() {
        let config = SchemaConfig::try_parse_from([
            "loader",
            "--schema-convention",
            "series-identifiers",
            "--timestamp-column",
            "@collect_time",
        ])
        .unwrap();
        let policy = config.policy();
        assert_eq!(policy.timestamp_column, "@collect_time");
        assert_eq!(
            policy.required,
            ["@collect_time", "meta.device", "meta.name"]
        );
    }

    #[test]
    fn test_required_column_missing_from_header() {
        let config =
            SchemaConfig::try_parse_from(["loader", "--required", "meta.ifindex"]).unwrap();
        assert!(matches!(
            config.load(&HEADER),
            Err(ConfigError::Schema(_))
        ));
    }

    #[test]
    fn test_invalid_rename() {
        assert!(SchemaConfig::try_parse_from(["loader", "--rename", "meta.name"]).is_err());
        assert!(SchemaConfig::try_parse_from(["loader", "--rename", "=name"]).is_err());
    }

    #[test_log::test]
    fn test_schema_file() {
        let derived = derive_schema(&HEADER, &SchemaPolicy::series_identifiers()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(derived.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let path = file.path().to_str().unwrap();
        let config = SchemaConfig::try_parse_from(["loader", "--schema-file", path]).unwrap();
        // header is ignored when a schema file is given
        let empty: [&str; 0] = [];
        assert_eq!(config.load(&empty).unwrap(), derived);

        let config =
            SchemaConfig::try_parse_from(["loader", "--schema-file", "/nonexistent/schema.json"])
                .unwrap();
        assert!(matches!(
            config.load(&HEADER),
            Err(ConfigError::ReadSchemaFile { .. })
        ));
    }
}
