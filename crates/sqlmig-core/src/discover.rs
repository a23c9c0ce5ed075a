//! Migration directory scanning.
//!
//! The engine never writes to the migration directory; discovery is
//! read-only.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use crate::version::is_up_file;

/// List the up-files in a migration directory.
///
/// Only regular files whose name ends in `.up.sql` are returned; dot
/// entries, subdirectories, and other files are skipped. No ordering is
/// guaranteed; callers sort.
pub fn list_up_files(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    if !dir.is_dir() {
        return Err(CoreError::MigrationPathNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_up_file(&name) {
            files.push(MigrationFile::new(name));
        }
    }

    log::debug!("discovered {} up-files in {}", files.len(), dir.display());
    Ok(files)
}

/// Read the full text of a migration script.
///
/// A missing file is a distinct error so a failed step reports the exact
/// path the operator needs to restore.
pub fn read_script(dir: &Path, name: &str) -> CoreResult<String> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(CoreError::ScriptNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;
