//! Virtual environment creation and dependency installation.

use std::fs;
use std::path::{Path, PathBuf};

use seedbed_runner::{format_command, CommandRunner};

use crate::log::ScaffoldLog;
use crate::report::StepOutcome;
use crate::seeder::MANIFEST_FILE;

/// Directory of the isolated environment under the project root.
pub const VENV_DIR: &str = "venv";

/// Creates `{root}/venv` and installs packages into it.
#[derive(Debug, Clone)]
pub struct EnvironmentProvisioner {
    python: String,
}

impl EnvironmentProvisioner {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn venv_path(root: &Path) -> PathBuf {
        root.join(VENV_DIR)
    }

    /// The environment's own installer binary.
    pub fn installer_path(root: &Path) -> PathBuf {
        let venv = Self::venv_path(root);
        if cfg!(windows) {
            venv.join("Scripts").join("pip.exe")
        } else {
            venv.join("bin").join("pip")
        }
    }

    /// `<python> -m venv <root>/venv`
    pub fn create_command(&self, root: &Path) -> Vec<String> {
        vec![
            self.python.clone(),
            "-m".to_string(),
            "venv".to_string(),
            Self::venv_path(root).to_string_lossy().into_owned(),
        ]
    }

    /// `<root>/venv/bin/pip install <deps...>`
    pub fn install_command(root: &Path, dependencies: &[String]) -> Vec<String> {
        let mut argv = vec![
            Self::installer_path(root).to_string_lossy().into_owned(),
            "install".to_string(),
        ];
        argv.extend(dependencies.iter().cloned());
        argv
    }

    /// Materialize the environment.
    pub async fn create(
        &self,
        runner: &dyn CommandRunner,
        root: &Path,
        log: &mut ScaffoldLog,
    ) -> StepOutcome {
        let argv = self.create_command(root);
        log.debug(format!("Running {}", format_command(&argv)));

        match runner.run(&argv).await {
            Ok(output) if output.success() => {
                log.info(format!(
                    "Created virtual environment at {}",
                    Self::venv_path(root).display()
                ));
                StepOutcome::Succeeded
            }
            Ok(output) => {
                let reason = output.failure_reason();
                log.error(format!("Error creating virtual environment: {}", reason));
                StepOutcome::Failed(reason)
            }
            Err(e) => {
                log.error(format!("Error creating virtual environment: {}", e));
                StepOutcome::Failed(e.to_string())
            }
        }
    }

    /// Install `dependencies` with the environment's installer.
    ///
    /// The manifest is overwritten with one name per line only when the
    /// installer reports success; otherwise it is left untouched.
    pub async fn install(
        &self,
        runner: &dyn CommandRunner,
        root: &Path,
        dependencies: &[String],
        log: &mut ScaffoldLog,
    ) -> StepOutcome {
        if dependencies.is_empty() {
            return StepOutcome::Skipped("no dependencies requested".to_string());
        }

        let argv = Self::install_command(root, dependencies);
        log.debug(format!("Running {}", format_command(&argv)));

        let output = match runner.run(&argv).await {
            Ok(output) => output,
            Err(e) => {
                log.error(format!("Error installing dependencies: {}", e));
                return StepOutcome::Failed(e.to_string());
            }
        };

        if !output.success() {
            let reason = output.failure_reason();
            log.error(format!("Error installing dependencies: {}", reason));
            return StepOutcome::Failed(reason);
        }

        log.info(format!("Installed dependencies: {}", dependencies.join(", ")));

        let manifest = root.join(MANIFEST_FILE);
        match fs::write(&manifest, dependencies.join("\n")) {
            Ok(()) => {
                log.info(format!("Updated {}", manifest.display()));
                StepOutcome::Succeeded
            }
            Err(e) => {
                log.error(format!("Error writing {}: {}", manifest.display(), e));
                StepOutcome::Failed(e.to_string())
            }
        }
    }
}
