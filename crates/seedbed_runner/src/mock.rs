//! Mock command runner for testing.
//!
//! Records every argument vector it receives and answers with predefined
//! responses, so scaffolding steps can be verified without spawning
//! `git`, `python` or `pip`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandOutput, CommandRunner};

/// Predefined mock response for a command.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl MockResponse {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
            duration_ms: 10,
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            duration_ms: 10,
        }
    }

    fn into_output(self) -> CommandOutput {
        CommandOutput {
            exit_code: self.exit_code,
            stdout: self.stdout,
            stderr: self.stderr,
            duration_ms: self.duration_ms,
        }
    }
}

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    pub program: String,
    pub args: Vec<String>,
}

impl CapturedCall {
    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program.clone()];
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Mock command runner for testing.
///
/// Responses are looked up by program first (see
/// [`MockRunner::respond_to`]), then taken from the sequential queue
/// (cycled), and default to a plain success.
#[derive(Clone, Default)]
pub struct MockRunner {
    /// Responses keyed by program name.
    program_responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    /// Sequential responses for any program.
    responses: Arc<RwLock<Vec<MockResponse>>>,
    /// Index of next sequential response to return.
    response_index: Arc<AtomicUsize>,
    /// Captured calls for verification.
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
    /// Programs that should fail to spawn.
    unspawnable: Arc<RwLock<Vec<String>>>,
}

impl MockRunner {
    /// Create a new mock runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mock response for the next unmatched call.
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.write().push(response);
        self
    }

    /// Set multiple sequential responses.
    pub fn with_responses(self, responses: Vec<MockResponse>) -> Self {
        *self.responses.write() = responses;
        self
    }

    /// Always answer calls to `program` with `response`.
    ///
    /// `program` matches either the full `argv[0]` or its file name, so
    /// `"pip"` matches `/tmp/demo/venv/bin/pip`.
    pub fn respond_to(self, program: impl Into<String>, response: MockResponse) -> Self {
        self.program_responses.write().insert(program.into(), response);
        self
    }

    /// Make calls to `program` fail as if the binary did not exist.
    pub fn fail_to_spawn(self, program: impl Into<String>) -> Self {
        self.unspawnable.write().push(program.into());
        self
    }

    /// Clear all captured calls.
    pub fn clear_calls(&self) {
        self.captured_calls.write().clear();
    }

    /// Get all captured calls.
    pub fn get_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    /// Check if a program was invoked.
    pub fn was_called(&self, program: &str) -> bool {
        self.captured_calls
            .read()
            .iter()
            .any(|c| program_matches(&c.program, program))
    }

    /// Get calls to a specific program.
    pub fn get_program_calls(&self, program: &str) -> Vec<CapturedCall> {
        self.captured_calls
            .read()
            .iter()
            .filter(|c| program_matches(&c.program, program))
            .cloned()
            .collect()
    }

    /// Get the next response for `program`.
    fn next_response(&self, program: &str) -> MockResponse {
        if let Some(response) = self
            .program_responses
            .read()
            .iter()
            .find(|(key, _)| program_matches(program, key))
            .map(|(_, response)| response.clone())
        {
            return response;
        }

        let responses = self.responses.read();
        if responses.is_empty() {
            return MockResponse::success("");
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses
            .get(index % responses.len())
            .cloned()
            .unwrap_or_else(|| MockResponse::success(""))
    }
}

fn program_matches(program: &str, key: &str) -> bool {
    if program == key {
        return true;
    }
    std::path::Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy() == key)
        .unwrap_or(false)
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, argv: &[String]) -> RunnerResult<CommandOutput> {
        let (program, args) = argv.split_first().ok_or(RunnerError::EmptyCommand)?;

        self.captured_calls.write().push(CapturedCall {
            program: program.clone(),
            args: args.to_vec(),
        });

        if self
            .unspawnable
            .read()
            .iter()
            .any(|p| program_matches(program, p))
        {
            return Err(RunnerError::SpawnFailed {
                program: program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "simulated missing binary"),
            });
        }

        Ok(self.next_response(program).into_output())
    }
}
