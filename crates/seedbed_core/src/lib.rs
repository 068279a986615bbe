//! # seedbed_core
//!
//! Project scaffolding pipeline for seedbed.
//!
//! Given a [`ProjectSpec`], the [`Scaffolder`] creates the directory
//! skeleton, seeds boilerplate files, initializes a git repository,
//! creates a Python virtual environment and installs the requested
//! dependencies into it.
//!
//! # Architecture
//!
//! - **Planner**: directories to create, derived from the toggles
//! - **Seeder**: `(path, content)` pairs for the boilerplate files
//! - **VCS**: `git init` plus a static `.gitignore`
//! - **Environment**: `python -m venv`, then `pip install`
//! - **Log**: structured records, injected into every step
//!
//! External tools are reached only through a
//! [`CommandRunner`](seedbed_runner::CommandRunner).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use seedbed_core::{Feature, ProjectSpec, Scaffolder};
//! use seedbed_runner::ProcessRunner;
//!
//! # async fn example() -> seedbed_core::CoreResult<()> {
//! let spec = ProjectSpec::new("demo")?
//!     .without(Feature::Notebooks)
//!     .with_dependencies(["requests"]);
//!
//! let report = Scaffolder::new(Arc::new(ProcessRunner::new()))
//!     .base_dir("/tmp")
//!     .run(&spec)
//!     .await;
//!
//! println!("{} files written", report.files.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod log;
pub mod planner;
pub mod project;
pub mod report;
pub mod scaffolder;
pub mod seeder;
pub mod vcs;

pub use config::{ScaffoldConfig, ToolConfig};
pub use environment::{EnvironmentProvisioner, VENV_DIR};
pub use error::{CoreError, CoreResult};
pub use log::{LogEntry, LogLevel, ScaffoldLog};
pub use planner::{create_directories, plan_directories};
pub use project::{Feature, ProjectSpec, Toggles};
pub use report::{ScaffoldPlan, ScaffoldReport, StepOutcome};
pub use scaffolder::Scaffolder;
pub use seeder::{plan_files, write_files, FileEntry, MANIFEST_FILE};
pub use vcs::{VcsInitializer, IGNORE_FILE};
