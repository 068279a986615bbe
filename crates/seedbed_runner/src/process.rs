//! Process-backed command runner.
//!
//! Spawns the program on the host with the caller's working directory and
//! environment, captures both output streams and waits for exit.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandOutput, CommandRunner};

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Check if a program can be spawned at all.
    pub async fn is_program_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, argv: &[String]) -> RunnerResult<CommandOutput> {
        let (program, args) = argv.split_first().ok_or(RunnerError::EmptyCommand)?;

        debug!("Executing: {}", format_command(argv));
        let started = Instant::now();

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| RunnerError::SpawnFailed {
                program: program.clone(),
                source,
            })?;

        let duration_ms = started.elapsed().as_millis() as u64;
        let exit_code = output.status.code().unwrap_or(-1);
        debug!("{} exited with {} after {}ms", program, exit_code, duration_ms);

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms,
        })
    }
}

/// Render an argument vector as a shell-like line for logs.
pub fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(' ') || arg.contains('=') {
                format!("'{}'", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_command_quotes_spaces() {
        assert_eq!(
            format_command(&argv(&["git", "init", "/tmp/my project"])),
            "git init '/tmp/my project'"
        );
        assert_eq!(format_command(&argv(&["pip", "install", "a==1.0"])), "pip install 'a==1.0'");
    }

    #[tokio::test]
    async fn test_empty_command_is_rejected() {
        let result = ProcessRunner::new().run(&[]).await;
        assert!(matches!(result, Err(RunnerError::EmptyCommand)));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let result = ProcessRunner::new()
            .run(&argv(&["seedbed-definitely-not-a-real-binary"]))
            .await;
        match result {
            Err(RunnerError::SpawnFailed { program, .. }) => {
                assert_eq!(program, "seedbed-definitely-not-a-real-binary");
            }
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }
}
