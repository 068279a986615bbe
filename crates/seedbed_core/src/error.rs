//! Error types for the core module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised before scaffolding starts.
///
/// Failures while scaffolding (a directory that cannot be created, a
/// `git init` that exits non-zero) are not errors: they are logged and
/// reported as step outcomes.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unsupported config format for {0} (expected .toml, .yaml or .yml)")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
