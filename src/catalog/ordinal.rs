//! Ordinal labels for serialized catalog entries.
//!
//! Entries are written sorted by identifier, each prefixed with a 1-based
//! positional counter: the rank in decimal, left-zero-padded to the width
//! of the total entry count, with every digit rendered as its superscript
//! glyph. The substitution is cosmetic and fully reversible.

/// Superscript glyph for each decimal digit 0-9.
pub const DIGIT_GLYPHS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Renders the label for the entry at `rank` (1-based) out of `total`.
pub fn label(rank: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{rank:0width$}")
        .chars()
        .map(|c| DIGIT_GLYPHS[(c as u8 - b'0') as usize])
        .collect()
}

/// Strips a leading run of ordinal glyphs from a persisted identifier.
pub fn strip(id: &str) -> &str {
    id.trim_start_matches(|c| DIGIT_GLYPHS.contains(&c))
}

/// Decodes a rendered label back to its numeric rank.
pub fn decode(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut rank = 0usize;
    for c in label.chars() {
        let digit = DIGIT_GLYPHS.iter().position(|&g| g == c)?;
        rank = rank * 10 + digit;
    }
    Some(rank)
}
