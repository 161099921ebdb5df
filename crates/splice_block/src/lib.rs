// crates/splice_block/src/lib.rs

use marker_tokens::{end_token, start_token};

/// Replaces the text strictly between `needle_start` and `needle_end`
/// with `replacement`, leaving both needles in place.
///
/// Uses the same fallback rules as extraction: a missing start needle
/// means the region begins at offset 0, a missing end needle means it
/// extends to the end of the text.
///
/// # Arguments
///
/// * `content` - The current file content.
/// * `needle_start` - Literal token opening the region.
/// * `needle_end` - Literal token closing the region.
/// * `replacement` - Text spliced into the region.
pub fn replace_between(
    content: &str,
    needle_start: &str,
    needle_end: &str,
    replacement: &str,
) -> String {
    let start = content
        .find(needle_start)
        .map(|pos| pos + needle_start.len())
        .unwrap_or(0);
    let end = content[start..]
        .find(needle_end)
        .map(|pos| start + pos)
        .unwrap_or(content.len());

    let mut result = String::with_capacity(content.len() - (end - start) + replacement.len());
    result.push_str(&content[..start]);
    result.push_str(replacement);
    result.push_str(&content[end..]);
    result
}

/// Splices each extracted `(marker, block)` pair into `content`, in
/// order. A marker whose start token is absent from the current
/// content is skipped. Substitutions accumulate within the pass, so a
/// file carrying several distinct markers has every region updated.
///
/// Idempotent: once a region holds the canonical block, splicing again
/// returns the content unchanged.
pub fn splice_blocks(content: &str, blocks: &[(String, String)]) -> String {
    let mut current = content.to_string();
    for (marker, block) in blocks {
        let start_tok = start_token(marker);
        if !current.contains(&start_tok) {
            continue;
        }
        current = replace_between(&current, &start_tok, &end_token(marker), block);
    }
    current
}
