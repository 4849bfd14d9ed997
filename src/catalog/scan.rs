//! Recursive discovery of `.json` catalog files.

use std::path::{Path, PathBuf};

use crate::catalog::error::CatalogError;

/// What: List every `.json` file below `root`, recursively.
///
/// Inputs:
/// - `root`: Directory to walk.
///
/// Output:
/// - Sorted list of full paths, or an empty list when `root` does not exist.
///
/// # Errors
/// - Returns `CatalogError::Io` when `root` exists but cannot be listed.
///
/// Details:
/// - The extension match is case-insensitive (`Messages.JSON` counts).
/// - Unreadable subdirectories are skipped with a warning.
/// - Symlinked directories are followed. The walk keeps no visited set, so a
///   symlink cycle below `root` does not terminate.
pub fn list_json_files(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !root.is_dir() {
        tracing::debug!(dir = %root.display(), "[Scan] Directory does not exist");
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(root).map_err(|e| CatalogError::io(root, e))?;

    let mut found = Vec::new();
    let mut pending: Vec<PathBuf> = Vec::new();
    collect_level(entries, &mut found, &mut pending);

    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            tracing::warn!(dir = %dir.display(), "[Scan] Skipping unreadable directory");
            continue;
        };
        collect_level(entries, &mut found, &mut pending);
    }

    found.sort();
    tracing::debug!(
        dir = %root.display(),
        count = found.len(),
        "[Scan] Found catalog files"
    );
    Ok(found)
}

/// What: Sort one directory listing into catalog files and subdirectories.
fn collect_level(entries: std::fs::ReadDir, found: &mut Vec<PathBuf>, pending: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            pending.push(path);
        } else if path.is_file() && has_json_extension(&path) {
            found.push(path);
        }
    }
}

/// What: Case-insensitive `.json` suffix check on the file name.
fn has_json_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| {
            n.len() > ".json".len() && n.to_ascii_lowercase().ends_with(".json")
        })
}
