//! # seedbed_templates
//!
//! Boilerplate file contents for seedbed projects.
//!
//! Every generator here is a pure function of at most the project name:
//! no I/O, no clock, no environment lookups. Calling one twice with the
//! same input yields byte-identical text.
//!
//! ```rust
//! use seedbed_templates::{license, readme};
//!
//! let text = readme("demo");
//! assert!(text.starts_with("# demo\n"));
//! assert!(license().starts_with("MIT License"));
//! ```

pub mod content;
pub mod gitignore;

pub use content::{env_template, license, package_init, readme, setup_script};
pub use gitignore::gitignore;
