//! Scaffold command - create a project from the parsed arguments.

use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use seedbed_core::{ScaffoldConfig, ScaffoldPlan, ScaffoldReport, Scaffolder, StepOutcome};
use seedbed_runner::{format_command, ProcessRunner};

use super::{Cli, OutputFormat};

pub async fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ScaffoldConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScaffoldConfig::default(),
    };

    let spec = cli.project_spec(&config)?;
    let tools = cli.tools(&config.tools);
    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    debug!("Using git={} python={}", tools.git, tools.python);

    let scaffolder = Scaffolder::new(Arc::new(ProcessRunner::new()))
        .base_dir(&base_dir)
        .tools(&tools);

    if cli.dry_run {
        let plan = scaffolder.plan(&spec);
        return print_plan(&plan, cli.output);
    }

    info!("Creating project: {}", spec.name());
    let report = scaffolder.run(&spec).await;
    print_report(&report, cli.output)
}

fn print_plan(plan: &ScaffoldPlan, output: OutputFormat) -> Result<()> {
    print!("{}", render_plan(plan, output)?);
    Ok(())
}

fn print_report(report: &ScaffoldReport, output: OutputFormat) -> Result<()> {
    print!("{}", render_report(report, output)?);
    Ok(())
}

fn render_plan(plan: &ScaffoldPlan, output: OutputFormat) -> Result<String> {
    let mut out = String::new();
    if output == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(plan).context("Failed to serialize plan")?)?;
        return Ok(out);
    }

    writeln!(out, "Dry run for '{}' at {}", plan.project, plan.root.display())?;
    writeln!(out)?;
    writeln!(out, "Directories:")?;
    for directory in &plan.directories {
        writeln!(out, "  📁 {}", directory)?;
    }
    writeln!(out, "Files:")?;
    for file in &plan.files {
        writeln!(out, "  📄 {}", file)?;
    }
    if !plan.commands.is_empty() {
        writeln!(out, "Commands:")?;
        for argv in &plan.commands {
            writeln!(out, "  $ {}", format_command(argv))?;
        }
    }

    Ok(out)
}

fn render_report(report: &ScaffoldReport, output: OutputFormat) -> Result<String> {
    let mut out = String::new();
    if output == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(report).context("Failed to serialize report")?)?;
        return Ok(out);
    }

    let errors = report.errors().count();
    if errors == 0 {
        writeln!(out, "✅ Project '{}' created successfully!", report.project)?;
    } else {
        writeln!(
            out,
            "⚠️  Project '{}' created with {} error(s); see the log above.",
            report.project, errors
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Location: {}", report.root.display())?;
    writeln!(out, "  directories  {}", report.directories.len())?;
    writeln!(out, "  files        {}", report.files.len())?;
    writeln!(out, "  git          {}", describe(&report.vcs))?;
    writeln!(out, "  venv         {}", describe(&report.environment))?;
    writeln!(out, "  install      {}", describe(&report.install))?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  cd {}", display_name(&report.root))?;
    if report.environment.is_success() {
        if cfg!(windows) {
            writeln!(out, "  venv\\Scripts\\activate")?;
        } else {
            writeln!(out, "  source venv/bin/activate")?;
        }
    }

    Ok(out)
}

fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Succeeded => outcome.label().to_string(),
        StepOutcome::Failed(reason) | StepOutcome::Skipped(reason) => {
            format!("{} ({})", outcome.label(), reason)
        }
    }
}

fn display_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use seedbed_core::ProjectSpec;
    use seedbed_runner::{MockResponse, MockRunner};
    use tempfile::tempdir;

    #[test]
    fn test_describe_includes_reason() {
        assert_eq!(describe(&StepOutcome::Succeeded), "succeeded");
        assert_eq!(
            describe(&StepOutcome::Skipped("disabled".to_string())),
            "skipped (disabled)"
        );
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["seedbed", "demo", "--dry-run", "--base-dir", base.as_str()]).unwrap();

        execute(cli).await.unwrap();

        assert!(!dir.path().join("demo").exists());
    }

    #[tokio::test]
    async fn test_without_external_steps_writes_layout() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "seedbed",
            "demo",
            "--disable-vcs-init",
            "--disable-env-setup",
            "--disable-data",
            "--base-dir",
            base.as_str(),
        ])
        .unwrap();

        execute(cli).await.unwrap();

        assert!(dir.path().join("demo/src/demo/__init__.py").is_file());
        assert!(dir.path().join("demo/setup.py").is_file());
        assert!(!dir.path().join("demo/data").exists());
        assert!(!dir.path().join("demo/.gitignore").exists());
        assert!(!dir.path().join("demo/venv").exists());
    }

    async fn report_for(base: &Path) -> ScaffoldReport {
        let runner = MockRunner::new().respond_to("git", MockResponse::failure(128, "fatal: not a git repository"));
        let spec = ProjectSpec::new("demo").unwrap().without_env();
        Scaffolder::new(Arc::new(runner)).base_dir(base).run(&spec).await
    }

    #[tokio::test]
    async fn test_json_report_summary() {
        let dir = tempdir().unwrap();
        let report = report_for(dir.path()).await;

        let rendered = render_report(&report, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["project"], "demo");
        assert_eq!(json["root"], dir.path().join("demo").to_str().unwrap());
        assert_eq!(json["vcs"]["status"], "failed");
        assert!(json["vcs"]["reason"].as_str().unwrap().contains("128"));
        assert_eq!(json["environment"]["status"], "skipped");
        assert!(!json["files"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_text_report_counts_errors() {
        let dir = tempdir().unwrap();
        let report = report_for(dir.path()).await;

        let rendered = render_report(&report, OutputFormat::Text).unwrap();

        assert!(rendered.contains("created with 1 error(s)"));
        assert!(rendered.contains("cd demo"));
        assert!(!rendered.contains("activate"));
    }

    #[tokio::test]
    async fn test_missing_config_is_error() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("missing.toml").to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["seedbed", "demo", "--config", config.as_str()]).unwrap();

        let err = execute(cli).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
