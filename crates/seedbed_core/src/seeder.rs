//! Boilerplate file planning and writing.
//!
//! [`write_files`] expects the output of
//! [`plan_directories`](crate::planner::plan_directories) to already exist
//! on disk; the [`Scaffolder`](crate::Scaffolder) pipeline guarantees that
//! ordering.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::log::ScaffoldLog;
use crate::project::{Feature, ProjectSpec};

/// Name of the dependency manifest at the project root.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// A file to seed: path relative to the scaffold base, and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Files for `spec`, in write order.
pub fn plan_files(spec: &ProjectSpec) -> Vec<FileEntry> {
    let name = spec.name();

    let mut files = vec![
        FileEntry::new(
            format!("{name}/src/{name}/__init__.py"),
            seedbed_templates::package_init(),
        ),
        FileEntry::new(format!("{name}/README.md"), seedbed_templates::readme(name)),
        FileEntry::new(format!("{name}/LICENSE"), seedbed_templates::license()),
        FileEntry::new(format!("{name}/{MANIFEST_FILE}"), ""),
        FileEntry::new(format!("{name}/.env"), seedbed_templates::env_template()),
        FileEntry::new(format!("{name}/setup.py"), seedbed_templates::setup_script()),
    ];

    // Package markers for the optional directories that hold Python code.
    for feature in [Feature::Scripts, Feature::Tests] {
        if spec.is_enabled(feature) {
            files.push(FileEntry::new(
                format!("{name}/{}/__init__.py", feature.dir_name()),
                "",
            ));
        }
    }

    files
}

/// Write every entry under `base`, truncating existing files.
///
/// Missing parent directories are created. The first failure is logged
/// and stops the batch; files written before it stay on disk. Returns the
/// paths that were written.
pub fn write_files(base: &Path, files: &[FileEntry], log: &mut ScaffoldLog) -> Vec<String> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        match write_file(base, file) {
            Ok(()) => {
                log.info(format!("Created file: {}", file.path));
                written.push(file.path.clone());
            }
            Err(e) => {
                log.error(format!("Error creating file {}: {}", file.path, e));
                break;
            }
        }
    }

    written
}

fn write_file(base: &Path, file: &FileEntry) -> std::io::Result<()> {
    let path = base.join(&file.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &file.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn paths(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_plan_with_all_toggles() {
        let files = plan_files(&ProjectSpec::new("demo").unwrap());
        assert_eq!(
            paths(&files),
            vec![
                "demo/src/demo/__init__.py",
                "demo/README.md",
                "demo/LICENSE",
                "demo/requirements.txt",
                "demo/.env",
                "demo/setup.py",
                "demo/scripts/__init__.py",
                "demo/tests/__init__.py",
            ]
        );
    }

    #[test]
    fn test_plan_skips_disabled_packages() {
        let spec = ProjectSpec::new("demo")
            .unwrap()
            .without(Feature::Tests)
            .without(Feature::Scripts);
        let files = plan_files(&spec);
        assert_eq!(files.len(), 6);
        assert!(!paths(&files).iter().any(|p| p.ends_with("tests/__init__.py")));
    }

    #[test]
    fn test_manifest_placeholder_is_empty() {
        let files = plan_files(&ProjectSpec::new("demo").unwrap());
        let manifest = files.iter().find(|f| f.path == "demo/requirements.txt").unwrap();
        assert!(manifest.content.is_empty());
    }

    #[test]
    fn test_write_truncates_existing_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("demo")).unwrap();
        fs::write(dir.path().join("demo/README.md"), "old content that is much longer").unwrap();

        let mut log = ScaffoldLog::new();
        let files = vec![FileEntry::new("demo/README.md", "new")];
        assert_eq!(write_files(dir.path(), &files, &mut log), vec!["demo/README.md"]);
        assert_eq!(fs::read_to_string(dir.path().join("demo/README.md")).unwrap(), "new");
    }

    #[test]
    fn test_write_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        // "demo/blocker" is a file, so nothing can be written beneath it.
        fs::create_dir_all(dir.path().join("demo")).unwrap();
        fs::write(dir.path().join("demo/blocker"), "").unwrap();

        let files = vec![
            FileEntry::new("demo/a.txt", "a"),
            FileEntry::new("demo/blocker/b.txt", "b"),
            FileEntry::new("demo/c.txt", "c"),
        ];
        let mut log = ScaffoldLog::new();
        let written = write_files(dir.path(), &files, &mut log);

        assert_eq!(written, vec!["demo/a.txt"]);
        assert!(log.has_errors());
        assert!(dir.path().join("demo/a.txt").exists());
        assert!(!dir.path().join("demo/c.txt").exists());
    }
}
