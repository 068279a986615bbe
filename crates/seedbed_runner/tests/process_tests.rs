//! Integration tests for the process-backed runner.
//!
//! These spawn `sh`, so they only run on Unix hosts.

#![cfg(unix)]

use seedbed_runner::{CommandRunner, ProcessRunner};

fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn test_captures_stdout_and_exit_code() {
    let runner = ProcessRunner::new();
    let output = runner.run(&sh("echo hello")).await.unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.trim(), "hello");
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn test_non_zero_exit_is_not_an_error() {
    let runner = ProcessRunner::new();
    let output = runner.run(&sh("echo broken >&2; exit 3")).await.unwrap();

    assert!(!output.success());
    assert_eq!(output.exit_code, 3);
    assert_eq!(output.stderr.trim(), "broken");
    assert_eq!(output.failure_reason(), "exit code 3: broken");
}

#[tokio::test]
async fn test_signal_termination_maps_to_minus_one() {
    let runner = ProcessRunner::new();
    let output = runner.run(&sh("kill -9 $$")).await.unwrap();

    assert_eq!(output.exit_code, -1);
}

#[tokio::test]
async fn test_missing_program_is_not_available() {
    assert!(!ProcessRunner::is_program_available("seedbed-definitely-not-a-real-binary").await);
}
