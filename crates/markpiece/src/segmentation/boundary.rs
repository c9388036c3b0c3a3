//! # Boundary Marker Substitution
//!
//! Word boundaries are preserved through merging by rewriting every
//! non-leading space as a reserved marker character before character-level
//! encoding, and rewriting markers back to spaces after decoding.

/// The reserved word-boundary marker: stands in for a non-leading space.
pub const BOUNDARY_MARKER: char = 'Ġ';

/// Rewrite spaces as boundary markers.
///
/// A space is kept literal only when it is the very first character of the
/// original full text; every other space becomes [`BOUNDARY_MARKER`]. When
/// the input is a mid-text segment, `at_text_start` must be `false` so that
/// its leading space is marked like any other.
///
/// ## Arguments
/// * `text` - The text (or text segment) to rewrite.
/// * `at_text_start` - Whether `text` begins at position 0 of the full text.
///
/// ## Returns
/// The rewritten string.
pub fn mark_boundaries(
    text: &str,
    at_text_start: bool,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut first = at_text_start;
    for ch in text.chars() {
        if ch == ' ' && !first {
            out.push(BOUNDARY_MARKER);
        } else {
            out.push(ch);
        }
        first = false;
    }
    out
}

/// Rewrite every boundary marker back to a literal space.
pub fn unmark_boundaries(text: &str) -> String {
    text.replace(BOUNDARY_MARKER, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_boundaries() {
        assert_eq!(mark_boundaries("a b c", true), "aĠbĠc");
        assert_eq!(mark_boundaries(" a b", true), " aĠb");
        assert_eq!(mark_boundaries(" a b", false), "ĠaĠb");
        assert_eq!(mark_boundaries("", true), "");
        assert_eq!(mark_boundaries("  ", true), " Ġ");
    }

    #[test]
    fn test_unmark_boundaries() {
        assert_eq!(unmark_boundaries("aĠbĠc"), "a b c");
        assert_eq!(unmark_boundaries(" aĠb"), " a b");
        assert_eq!(unmark_boundaries("plain"), "plain");
    }

    #[test]
    fn test_round_trip() {
        for text in ["hello world", " leading", "no-spaces", "a  b"] {
            assert_eq!(unmark_boundaries(&mark_boundaries(text, true)), text);
        }
    }
}
