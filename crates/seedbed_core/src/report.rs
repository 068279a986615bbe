//! Run plan and run report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log::{LogEntry, LogLevel};

/// Outcome of one external-tool step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
    Skipped(String),
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Succeeded => "succeeded",
            StepOutcome::Failed(_) => "failed",
            StepOutcome::Skipped(_) => "skipped",
        }
    }
}

/// What a run would do, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldPlan {
    pub project: String,
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    /// Every external command, in execution order
    pub commands: Vec<Vec<String>>,
}

/// What a run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub project: String,
    pub root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub vcs: StepOutcome,
    pub environment: StepOutcome,
    pub install: StepOutcome,
    pub logs: Vec<LogEntry>,
}

impl ScaffoldReport {
    /// True if any step logged an error. Partial success is still a
    /// normal return.
    pub fn has_failures(&self) -> bool {
        self.logs.iter().any(|e| e.level == LogLevel::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().filter(|e| e.level == LogLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&StepOutcome::Succeeded).unwrap(),
            r#"{"status":"succeeded"}"#
        );
        assert_eq!(
            serde_json::to_string(&StepOutcome::Failed("exit code 1".into())).unwrap(),
            r#"{"status":"failed","reason":"exit code 1"}"#
        );
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(StepOutcome::Succeeded.is_success());
        assert!(StepOutcome::Failed("x".into()).is_failure());
        assert!(!StepOutcome::Skipped("x".into()).is_failure());
        assert_eq!(StepOutcome::Skipped("x".into()).label(), "skipped");
    }
}
