// crates/marker_tokens/src/lib.rs

//! Delimiter vocabulary shared across the marker-sync tool-chain.
//!
//! A marker named `NAME` is delimited in text by the literal tokens
//! `#NAME_START#` and `#NAME_END#`; the block between them may span
//! newlines.

/// Returns the literal start token for `marker`, e.g. `#LOCKFILE_START#`.
pub fn start_token(marker: &str) -> String {
    format!("#{}_START#", marker)
}

/// Returns the literal end token for `marker`, e.g. `#LOCKFILE_END#`.
pub fn end_token(marker: &str) -> String {
    format!("#{}_END#", marker)
}

/// The pattern echoed when a block is fetched from the canonical
/// source, e.g. `#LOCKFILE_START#(.*)#LOCKFILE_END#`.
pub fn fetch_pattern(marker: &str) -> String {
    format!("{}(.*){}", start_token(marker), end_token(marker))
}
