//! Directory planning and creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::log::ScaffoldLog;
use crate::project::ProjectSpec;

/// Relative directory paths for `spec`, in creation order.
///
/// Always starts with the project root (`{name}/`) and the inner package
/// (`{name}/src/{name}`), followed by one entry per enabled optional
/// directory.
pub fn plan_directories(spec: &ProjectSpec) -> Vec<String> {
    let name = spec.name();
    let mut directories = vec![format!("{name}/"), format!("{name}/src/{name}")];

    for feature in spec.toggles().enabled_features() {
        directories.push(format!("{name}/{}", feature.dir_name()));
    }

    directories
}

/// Create every planned directory under `base`.
///
/// Existing directories count as created. The first failure is logged and
/// stops the batch; directories created before it stay on disk. Returns
/// the entries that exist after the call.
pub fn create_directories(base: &Path, directories: &[String], log: &mut ScaffoldLog) -> Vec<String> {
    let mut created = Vec::with_capacity(directories.len());

    for directory in directories {
        let path: PathBuf = base.join(directory);
        match fs::create_dir_all(&path) {
            Ok(()) => {
                log.info(format!("Created directory: {}", directory));
                created.push(directory.clone());
            }
            Err(e) => {
                log.error(format!("Error creating directory {}: {}", directory, e));
                break;
            }
        }
    }

    created
}
