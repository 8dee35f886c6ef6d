//! CLI handling for record assembly options.

use stardust_assembler::{AssemblerOptions, NullPolicy, PathConflictPolicy};

#[derive(Debug, clap::Parser, Clone, Copy)]
pub struct AssemblerConfig {
    /// What to store for an empty metadata or top-level value.
    #[clap(
        long = "metadata-nulls",
        env = "STARDUST_METADATA_NULLS",
        default_value = "omit",
        action
    )]
    pub metadata_nulls: MetadataNulls,

    /// Strip surrounding whitespace from every value.
    #[clap(long = "trim-values", env = "STARDUST_TRIM_VALUES", action)]
    pub trim_values: bool,

    /// Reject a row whose metadata paths collide instead of overwriting the
    /// earlier value.
    #[clap(long = "strict-paths", env = "STARDUST_STRICT_PATHS", action)]
    pub strict_paths: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MetadataNulls {
    /// Leave the key out.
    #[default]
    Omit,
    /// Store null.
    Null,
    /// Store an empty string.
    EmptyString,
}

impl From<MetadataNulls> for NullPolicy {
    fn from(value: MetadataNulls) -> Self {
        match value {
            MetadataNulls::Omit => Self::Omit,
            MetadataNulls::Null => Self::Null,
            MetadataNulls::EmptyString => Self::EmptyString,
        }
    }
}

impl From<AssemblerConfig> for AssemblerOptions {
    fn from(config: AssemblerConfig) -> Self {
        Self {
            metadata_nulls: config.metadata_nulls.into(),
            trim_values: config.trim_values,
            path_conflicts: if config.strict_paths {
                PathConflictPolicy::Reject
            } else {
                PathConflictPolicy::Overwrite
            },
        }
    }
}
