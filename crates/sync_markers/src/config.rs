// crates/sync_markers/src/config.rs

use std::path::PathBuf;

/// Immutable runtime configuration assembled once from the CLI.
/// Every pipeline step reads from this value; nothing mutates it.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Marker names to synchronize, in substitution order.
    pub markers: Vec<String>,
    /// Root directories scanned for target files.
    pub target_dirs: Vec<PathBuf>,
    /// Canonical source file holding the marker blocks.
    pub source_file: PathBuf,
    /// Enable verbose logging.
    pub verbose: bool,
}
