//! The scaffolding pipeline.
//!
//! One fixed order: plan directories, create them, plan files, write them,
//! initialize version control, create the environment, install
//! dependencies. Each step runs to completion before the next starts and
//! nothing is rolled back when a later step fails.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use seedbed_runner::CommandRunner;
use uuid::Uuid;

use crate::config::ToolConfig;
use crate::environment::EnvironmentProvisioner;
use crate::log::ScaffoldLog;
use crate::planner::{create_directories, plan_directories};
use crate::project::ProjectSpec;
use crate::report::{ScaffoldPlan, ScaffoldReport, StepOutcome};
use crate::seeder::{plan_files, write_files};
use crate::vcs::VcsInitializer;

/// Builds project skeletons under a base directory.
pub struct Scaffolder {
    runner: Arc<dyn CommandRunner>,
    base_dir: PathBuf,
    vcs: VcsInitializer,
    environment: EnvironmentProvisioner,
}

impl Scaffolder {
    /// Scaffold into the current working directory with the default tools.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        let tools = ToolConfig::default();
        Self {
            runner,
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            vcs: VcsInitializer::new(tools.git),
            environment: EnvironmentProvisioner::new(tools.python),
        }
    }

    /// Directory the project root is created in. Relative paths are
    /// resolved against the current working directory.
    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        self.base_dir = std::path::absolute(&base_dir).unwrap_or(base_dir);
        self
    }

    pub fn tools(mut self, tools: &ToolConfig) -> Self {
        self.vcs = VcsInitializer::new(tools.git.clone());
        self.environment = EnvironmentProvisioner::new(tools.python.clone());
        self
    }

    pub fn project_root(&self, spec: &ProjectSpec) -> PathBuf {
        self.base_dir.join(spec.name())
    }

    /// Everything [`run`](Self::run) would do, without doing it.
    pub fn plan(&self, spec: &ProjectSpec) -> ScaffoldPlan {
        let root = self.project_root(spec);
        let toggles = spec.toggles();

        let mut commands = Vec::new();
        if toggles.init_vcs {
            commands.push(self.vcs.init_command(&root));
        }
        if toggles.setup_env {
            commands.push(self.environment.create_command(&root));
            if !spec.dependencies().is_empty() {
                commands.push(EnvironmentProvisioner::install_command(&root, spec.dependencies()));
            }
        }

        ScaffoldPlan {
            project: spec.name().to_string(),
            root,
            directories: plan_directories(spec),
            files: plan_files(spec).into_iter().map(|f| f.path).collect(),
            commands,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Never fails: filesystem and external-tool problems are logged and
    /// show up in the report, and later steps still run.
    pub async fn run(&self, spec: &ProjectSpec) -> ScaffoldReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let root = self.project_root(spec);
        let mut log = ScaffoldLog::new();

        log.info(format!("Scaffolding project '{}' at {}", spec.name(), root.display()));
        if !spec.is_python_identifier() {
            log.warn(format!(
                "'{}' is not a valid Python identifier; the package under src/ will not be importable",
                spec.name()
            ));
        }

        log.enter("directories");
        let directories = create_directories(&self.base_dir, &plan_directories(spec), &mut log);

        log.enter("files");
        let files = write_files(&self.base_dir, &plan_files(spec), &mut log);

        log.enter("vcs");
        let vcs = if spec.toggles().init_vcs {
            self.vcs.initialize(self.runner.as_ref(), &root, &mut log).await
        } else {
            StepOutcome::Skipped("disabled".to_string())
        };

        log.enter("environment");
        let environment = if spec.toggles().setup_env {
            self.environment.create(self.runner.as_ref(), &root, &mut log).await
        } else {
            StepOutcome::Skipped("disabled".to_string())
        };

        log.enter("install");
        let install = self.install(spec, &root, &environment, &mut log).await;

        ScaffoldReport {
            run_id,
            project: spec.name().to_string(),
            root,
            started_at,
            finished_at: Utc::now(),
            directories,
            files,
            vcs,
            environment,
            install,
            logs: log.into_entries(),
        }
    }

    async fn install(
        &self,
        spec: &ProjectSpec,
        root: &Path,
        environment: &StepOutcome,
        log: &mut ScaffoldLog,
    ) -> StepOutcome {
        if spec.dependencies().is_empty() {
            return StepOutcome::Skipped("no dependencies requested".to_string());
        }

        match environment {
            StepOutcome::Succeeded => {
                self.environment
                    .install(self.runner.as_ref(), root, spec.dependencies(), log)
                    .await
            }
            StepOutcome::Skipped(_) => {
                log.warn("Dependencies were requested but environment setup is disabled; skipping install");
                StepOutcome::Skipped("environment setup disabled".to_string())
            }
            StepOutcome::Failed(_) => {
                log.warn("Skipping dependency install because the environment could not be created");
                StepOutcome::Skipped("environment creation failed".to_string())
            }
        }
    }
}
