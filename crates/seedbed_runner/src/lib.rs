//! # seedbed_runner
//!
//! External command execution for seedbed.
//!
//! The scaffolder never spawns processes directly. Every call into the
//! version-control tool, the interpreter or the package installer goes
//! through a [`CommandRunner`], so tests can swap in a [`MockRunner`] and
//! assert on the exact argument vectors.
//!
//! # Example
//!
//! ```rust,no_run
//! use seedbed_runner::{CommandRunner, ProcessRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runner = ProcessRunner::new();
//!     let argv = vec!["git".to_string(), "--version".to_string()];
//!
//!     let output = runner.run(&argv).await?;
//!     println!("Exit code: {}", output.exit_code);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod process;
pub mod runner;

pub use error::{RunnerError, RunnerResult};
pub use mock::{CapturedCall, MockResponse, MockRunner};
pub use process::{format_command, ProcessRunner};
pub use runner::{CommandOutput, CommandRunner};
