//! Command runner trait and types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RunnerResult;

/// Result of running one external command to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Exit code, or -1 when the process was terminated by a signal
    pub exit_code: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl CommandOutput {
    /// Check if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Get combined output (stdout + stderr).
    pub fn combined_output(&self) -> String {
        if self.stdout.is_empty() {
            self.stderr.clone()
        } else if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }

    /// Short, single-line reason suitable for a failure log record.
    pub fn failure_reason(&self) -> String {
        let output = self.combined_output();
        let detail = output.trim();
        if detail.is_empty() {
            format!("exit code {}", self.exit_code)
        } else {
            format!("exit code {}: {}", self.exit_code, detail)
        }
    }
}

/// Capability to run an external program and wait for it.
///
/// `argv[0]` is the program, the rest are its arguments. Implementations
/// block the caller's flow until the child exits; no timeout is applied.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, argv: &[String]) -> RunnerResult<CommandOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(exit_code: i32, stdout: &str, stderr: &str) -> CommandOutput {
        CommandOutput {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration_ms: 0,
        }
    }

    #[test]
    fn test_success_is_exit_zero() {
        assert!(output(0, "", "").success());
        assert!(!output(1, "", "").success());
        assert!(!output(-1, "", "").success());
    }

    #[test]
    fn test_combined_output() {
        assert_eq!(output(0, "out", "").combined_output(), "out");
        assert_eq!(output(0, "", "err").combined_output(), "err");
        assert_eq!(output(0, "out", "err").combined_output(), "out\nerr");
    }

    #[test]
    fn test_failure_reason() {
        assert_eq!(output(128, "", "").failure_reason(), "exit code 128");
        assert_eq!(
            output(1, "", "fatal: not allowed\n").failure_reason(),
            "exit code 1: fatal: not allowed"
        );
    }
}
