//! Version-control initialization.
//!
//! Best-effort: a failing `git init` is logged and the ignore file is not
//! written, but the pipeline carries on.

use std::fs;
use std::path::Path;

use seedbed_runner::{format_command, CommandRunner};

use crate::log::ScaffoldLog;
use crate::report::StepOutcome;

/// Name of the ignore file written at the project root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Initializes a repository at the project root.
#[derive(Debug, Clone)]
pub struct VcsInitializer {
    program: String,
}

impl VcsInitializer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `<git> init <root>`
    pub fn init_command(&self, root: &Path) -> Vec<String> {
        vec![
            self.program.clone(),
            "init".to_string(),
            root.to_string_lossy().into_owned(),
        ]
    }

    /// Run `git init` once, then write the ignore file if it succeeded.
    pub async fn initialize(
        &self,
        runner: &dyn CommandRunner,
        root: &Path,
        log: &mut ScaffoldLog,
    ) -> StepOutcome {
        let argv = self.init_command(root);
        log.debug(format!("Running {}", format_command(&argv)));

        let output = match runner.run(&argv).await {
            Ok(output) => output,
            Err(e) => {
                log.error(format!("Error initializing git repository: {}", e));
                return StepOutcome::Failed(e.to_string());
            }
        };

        if !output.success() {
            let reason = output.failure_reason();
            log.error(format!("Error initializing git repository: {}", reason));
            return StepOutcome::Failed(reason);
        }

        log.info(format!("Initialized git repository in {}", root.display()));

        let ignore_path = root.join(IGNORE_FILE);
        match fs::write(&ignore_path, seedbed_templates::gitignore()) {
            Ok(()) => {
                log.info(format!("Created file: {}", ignore_path.display()));
                StepOutcome::Succeeded
            }
            Err(e) => {
                log.error(format!("Error creating file {}: {}", ignore_path.display(), e));
                StepOutcome::Failed(e.to_string())
            }
        }
    }
}

impl Default for VcsInitializer {
    fn default() -> Self {
        Self::new("git")
    }
}
