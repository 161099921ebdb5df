// crates/sync_markers/src/lib.rs

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use collect_target_files::collect_target_files;
use extract_block::extract_blocks;
use marker_tokens::fetch_pattern;
use splice_block::splice_blocks;

mod config;
pub use config::SyncConfig;

/// Runs the full synchronization pipeline: load the canonical source,
/// extract one block per configured marker, enumerate the target
/// files, splice, and write back the files whose content changed.
///
/// Fails fast: a missing canonical source aborts before any target
/// directory is scanned, a missing target directory aborts before any
/// file is rewritten, and any per-file read/write error aborts the
/// whole run.
pub fn run(config: &SyncConfig) -> Result<()> {
    // 1. Load the canonical source.
    if !config.source_file.is_file() {
        bail!("{} does not exist", config.source_file.display());
    }
    let source_content = fs::read_to_string(&config.source_file)
        .with_context(|| format!("Failed to read {}", config.source_file.display()))?;

    // 2. Extract one block per configured marker. Markers missing from
    // the canonical source are simply not substituted downstream.
    for marker in &config.markers {
        println!("Fetching: {}", fetch_pattern(marker));
    }
    let blocks = extract_blocks(&source_content, &config.markers);
    if config.verbose {
        log::debug!(
            "{} of {} marker(s) present in {}",
            blocks.len(),
            config.markers.len(),
            config.source_file.display()
        );
    }

    // 3. Enumerate target files. Every configured root is checked for
    // existence here, before any file is rewritten.
    let mut target_files: Vec<PathBuf> = Vec::new();
    for dir in &config.target_dirs {
        let files = collect_target_files(dir)
            .with_context(|| format!("Failed to scan target directory {}", dir.display()))?;
        target_files.extend(files);
    }

    // 4. Splice and write back. The complete new content is computed
    // before the file is touched, and untouched files keep their
    // timestamps.
    let mut modified_count = 0usize;
    for file in &target_files {
        let contents = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let new_contents = splice_blocks(&contents, &blocks);

        if new_contents != contents {
            fs::write(file, &new_contents)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            modified_count += 1;
            println!("Processing {}... modified!", file.display());
        } else {
            println!("Processing {}... not modified!", file.display());
        }
    }

    if config.verbose {
        log::debug!(
            "Processed {} file(s), {} modified",
            target_files.len(),
            modified_count
        );
    }

    Ok(())
}
