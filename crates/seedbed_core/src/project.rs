//! Project specification: the immutable input of one scaffolding run.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Optional directories a project can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Docs,
    Tests,
    Data,
    Notebooks,
    Scripts,
}

impl Feature {
    /// All optional directories, in planning order.
    pub const ALL: [Feature; 5] = [
        Feature::Docs,
        Feature::Tests,
        Feature::Data,
        Feature::Notebooks,
        Feature::Scripts,
    ];

    /// Directory name under the project root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Feature::Docs => "docs",
            Feature::Tests => "tests",
            Feature::Data => "data",
            Feature::Notebooks => "notebooks",
            Feature::Scripts => "scripts",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Boolean toggles; every one defaults to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub docs: bool,
    pub tests: bool,
    pub notebooks: bool,
    pub data: bool,
    pub scripts: bool,
    pub init_vcs: bool,
    pub setup_env: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            docs: true,
            tests: true,
            notebooks: true,
            data: true,
            scripts: true,
            init_vcs: true,
            setup_env: true,
        }
    }
}

impl Toggles {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Docs => self.docs,
            Feature::Tests => self.tests,
            Feature::Data => self.data,
            Feature::Notebooks => self.notebooks,
            Feature::Scripts => self.scripts,
        }
    }

    pub fn disable(&mut self, feature: Feature) {
        match feature {
            Feature::Docs => self.docs = false,
            Feature::Tests => self.tests = false,
            Feature::Data => self.data = false,
            Feature::Notebooks => self.notebooks = false,
            Feature::Scripts => self.scripts = false,
        }
    }

    /// Enabled optional directories, in planning order.
    pub fn enabled_features(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.is_enabled(*f))
    }
}

/// Input configuration for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    name: String,
    toggles: Toggles,
    dependencies: Vec<String>,
}

impl ProjectSpec {
    /// Create a spec with every toggle enabled and no dependencies.
    ///
    /// The name must be a single path segment.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            toggles: Toggles::default(),
            dependencies: Vec::new(),
        })
    }

    pub fn with_toggles(mut self, toggles: Toggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn without(mut self, feature: Feature) -> Self {
        self.toggles.disable(feature);
        self
    }

    pub fn without_vcs(mut self) -> Self {
        self.toggles.init_vcs = false;
        self
    }

    pub fn without_env(mut self) -> Self {
        self.toggles.setup_env = false;
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.toggles.is_enabled(feature)
    }

    /// Whether the name can also be imported as a Python package.
    pub fn is_python_identifier(&self) -> bool {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map(|re| re.is_match(&self.name))
            .unwrap_or(false)
    }
}

fn validate_name(name: &str) -> CoreResult<()> {
    let invalid = |reason: &str| CoreError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name cannot be a relative directory reference"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name must be a single path segment"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let spec = ProjectSpec::new("demo").unwrap();
        assert_eq!(spec.name(), "demo");
        assert_eq!(spec.toggles(), &Toggles::default());
        assert!(spec.toggles().init_vcs);
        assert!(spec.toggles().setup_env);
        assert!(spec.dependencies().is_empty());
        assert_eq!(spec.toggles().enabled_features().count(), 5);
    }

    #[test]
    fn test_builder_disables_features() {
        let spec = ProjectSpec::new("demo")
            .unwrap()
            .without(Feature::Tests)
            .without(Feature::Notebooks)
            .without_vcs()
            .with_dependencies(["requests", "numpy"]);

        assert!(!spec.is_enabled(Feature::Tests));
        assert!(!spec.is_enabled(Feature::Notebooks));
        assert!(spec.is_enabled(Feature::Docs));
        assert!(!spec.toggles().init_vcs);
        assert!(spec.toggles().setup_env);
        assert_eq!(spec.dependencies(), ["requests", "numpy"]);
    }

    #[test]
    fn test_rejects_bad_names() {
        for name in ["", "   ", ".", "..", "a/b", "a\\b", "../escape"] {
            assert!(
                matches!(ProjectSpec::new(name), Err(CoreError::InvalidProjectName { .. })),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn test_python_identifier_check() {
        assert!(ProjectSpec::new("demo_app").unwrap().is_python_identifier());
        assert!(ProjectSpec::new("_private").unwrap().is_python_identifier());
        assert!(!ProjectSpec::new("my-project").unwrap().is_python_identifier());
        assert!(!ProjectSpec::new("1st").unwrap().is_python_identifier());
    }
}
