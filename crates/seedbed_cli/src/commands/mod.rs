//! CLI argument definitions.
//!
//! Every optional part of a project is on by default; each `--disable-*`
//! flag turns one off. Flags are applied on top of the `--config` file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use seedbed_core::{CoreResult, Feature, ProjectSpec, ScaffoldConfig, Toggles, ToolConfig};

pub mod scaffold;

/// seedbed - Python project scaffolding
#[derive(Parser, Debug)]
#[command(name = "seedbed")]
#[command(version, about = "seedbed - Python project scaffolding")]
#[command(long_about = r#"
seedbed creates a Python project skeleton: source package, docs, tests,
data, notebooks and scripts directories, boilerplate files (README, LICENSE,
.env, setup.py, requirements.txt), a git repository and a virtual
environment with the requested dependencies installed.

Failures in individual steps are logged and do not stop later steps.

EXIT CODES:
  0 - Success (including partial success)
  1 - General error
  2 - Invalid arguments
"#)]
pub struct Cli {
    /// Name of the project; also used as the package name
    pub name: String,

    /// Do not create docs/
    #[arg(long)]
    pub disable_docs: bool,

    /// Do not create tests/
    #[arg(long)]
    pub disable_tests: bool,

    /// Do not create notebooks/
    #[arg(long)]
    pub disable_notebooks: bool,

    /// Do not create data/
    #[arg(long)]
    pub disable_data: bool,

    /// Do not create scripts/
    #[arg(long)]
    pub disable_scripts: bool,

    /// Do not run git init
    #[arg(long)]
    pub disable_vcs_init: bool,

    /// Do not create the virtual environment
    #[arg(long)]
    pub disable_env_setup: bool,

    /// Dependencies to install into the virtual environment
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub dependencies: Option<Vec<String>>,

    /// Defaults file (.toml, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to create the project in (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Version-control binary
    #[arg(long, env = "SEEDBED_GIT", value_name = "PROG")]
    pub git: Option<String>,

    /// Python interpreter used to create the virtual environment
    #[arg(long, env = "SEEDBED_PYTHON", value_name = "PROG")]
    pub python: Option<String>,

    /// Print what would be created and run, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Format of the final summary on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Format of log lines on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Config toggles with the disable flags applied.
    pub fn toggles(&self, base: Toggles) -> Toggles {
        let mut toggles = base;
        let disabled = [
            (self.disable_docs, Feature::Docs),
            (self.disable_tests, Feature::Tests),
            (self.disable_notebooks, Feature::Notebooks),
            (self.disable_data, Feature::Data),
            (self.disable_scripts, Feature::Scripts),
        ];
        for (flag, feature) in disabled {
            if flag {
                toggles.disable(feature);
            }
        }
        if self.disable_vcs_init {
            toggles.init_vcs = false;
        }
        if self.disable_env_setup {
            toggles.setup_env = false;
        }
        toggles
    }

    /// Config tools with `--git` / `--python` applied.
    pub fn tools(&self, base: &ToolConfig) -> ToolConfig {
        ToolConfig {
            git: self.git.clone().unwrap_or_else(|| base.git.clone()),
            python: self.python.clone().unwrap_or_else(|| base.python.clone()),
        }
    }

    pub fn project_spec(&self, config: &ScaffoldConfig) -> CoreResult<ProjectSpec> {
        let dependencies = self
            .dependencies
            .clone()
            .unwrap_or_else(|| config.dependencies.clone());

        Ok(ProjectSpec::new(self.name.clone())?
            .with_toggles(self.toggles(config.toggles))
            .with_dependencies(dependencies))
    }
}
