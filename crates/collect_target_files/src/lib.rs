// crates/collect_target_files/src/lib.rs

use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Hidden entries (leading `.`) are pruned at every depth. The root
/// itself is exempt so the tool still works when invoked under a
/// dot-named directory.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Recursively enumerates the files under `root`, skipping hidden
/// entries at every depth. Only leaf files are returned, as
/// fully-qualified paths, sorted per directory so reruns are
/// reproducible.
///
/// # Errors
///
/// Returns `NotFound` naming the path when `root` is not an existing
/// directory; any traversal error aborts the enumeration.
pub fn collect_target_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", root.display()),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
