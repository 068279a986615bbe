//! Defaults file for scaffolding runs.
//!
//! A config file can pre-set toggles, a dependency list and the external
//! tools to call. Command-line flags are applied on top of it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::project::{ProjectSpec, Toggles};

/// External programs the scaffolder calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Version-control binary, invoked as `<git> init <root>`
    pub git: String,
    /// Interpreter, invoked as `<python> -m venv <root>/venv`
    pub python: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            python: default_python().to_string(),
        }
    }
}

fn default_python() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Contents of a `seedbed.toml` / `seedbed.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub toggles: Toggles,
    pub dependencies: Vec<String>,
    pub tools: ToolConfig,
}

impl ScaffoldConfig {
    /// Load a config file; the format follows the extension.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        debug!("Reading config from {:?}", path);

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parse: fn(&str) -> CoreResult<Self> = match extension.as_str() {
            "toml" => Self::from_toml,
            "yaml" | "yml" => Self::from_yaml,
            _ => return Err(CoreError::UnsupportedConfigFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    pub fn from_toml(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the project spec for `name` from these defaults.
    pub fn project(&self, name: impl Into<String>) -> CoreResult<ProjectSpec> {
        Ok(ProjectSpec::new(name)?
            .with_toggles(self.toggles)
            .with_dependencies(self.dependencies.iter().cloned()))
    }
}
