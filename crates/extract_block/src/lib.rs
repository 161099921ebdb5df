// crates/extract_block/src/lib.rs

use marker_tokens::{end_token, start_token};

/// Extracts the block associated with `marker` from the canonical
/// content. The block is the substring strictly between the first
/// `#<MARKER>_START#` token and the first `#<MARKER>_END#` token at or
/// after it.
///
/// Fallback behavior, kept for compatibility with existing canonical
/// files: a missing start token makes the block begin at offset 0; a
/// missing end token makes it extend to the end of the text. Only when
/// neither token occurs is no block recorded.
///
/// # Arguments
///
/// * `content` - The full canonical source text.
/// * `marker` - The marker name, without delimiters.
///
/// # Returns
///
/// The block content, or `None` when the marker does not occur at all.
pub fn extract_block(content: &str, marker: &str) -> Option<String> {
    let start_tok = start_token(marker);
    let end_tok = end_token(marker);

    let start_pos = content.find(&start_tok);
    let block_start = start_pos.map(|pos| pos + start_tok.len()).unwrap_or(0);
    let end_pos = content[block_start..]
        .find(&end_tok)
        .map(|pos| block_start + pos);
    let block_end = end_pos.unwrap_or(content.len());

    if start_pos.is_none() && end_pos.is_none() {
        return None;
    }
    Some(content[block_start..block_end].to_string())
}

/// Extracts one block per marker, preserving the configured marker
/// order. Markers without a block in `content` are silently omitted,
/// so downstream splicing skips them.
pub fn extract_blocks(content: &str, markers: &[String]) -> Vec<(String, String)> {
    markers
        .iter()
        .filter_map(|marker| {
            extract_block(content, marker).map(|block| (marker.clone(), block))
        })
        .collect()
}
