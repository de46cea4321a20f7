//! Text normalization.
//!
//! The only transformation applied up front: collapse `\r\n` line endings to
//! `\n` and replace tab characters with single spaces. Nothing else — no case
//! folding, no whitespace collapsing — because downstream extractors handle
//! case-insensitivity themselves and several heuristics depend on the original
//! line shapes (leading bullets, capitalization, line lengths).

/// Canonicalize line endings and tabs. Total; cannot fail.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\t', " ")
}

/// Trimmed, non-blank lines of a section body, in document order.
///
/// Every record parser iterates sections through this so blank lines never
/// reach a boundary heuristic.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
