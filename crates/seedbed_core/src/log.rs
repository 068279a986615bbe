//! Structured run log.
//!
//! Every scaffolding operation takes a `&mut ScaffoldLog`. Records are kept
//! in memory for the run report and forwarded to `tracing` as they happen.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(s)
    }
}

/// A single log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    /// Pipeline step that emitted the record
    pub step: Option<String>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.message
        )
    }
}

/// Collects log records for one run.
#[derive(Debug, Default)]
pub struct ScaffoldLog {
    entries: Vec<LogEntry>,
    step: Option<String>,
}

impl ScaffoldLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag subsequent records with `step`.
    pub fn enter(&mut self, step: &str) {
        self.step = Some(step.to_string());
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Debug, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Warn, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Error, message.into());
    }

    fn record(&mut self, level: LogLevel, message: String) {
        let step = self.step.as_deref().unwrap_or("-");
        match level {
            LogLevel::Debug => debug!(step, "{}", message),
            LogLevel::Info => info!(step, "{}", message),
            LogLevel::Warn => warn!(step, "{}", message),
            LogLevel::Error => error!(step, "{}", message),
        }

        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            level,
            message,
            step: self.step.clone(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Records at `level` or above.
    pub fn at_least(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level >= level)
    }

    pub fn has_errors(&self) -> bool {
        self.at_least(LogLevel::Error).next().is_some()
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}
