//! Detector — sentinel prefix check deciding whether a line opts in.

use super::SENTINEL;

/// Return whether a raw line opts into semi-structured parsing.
///
/// True iff the line is at least two bytes long and starts with `!<`.
/// Shorter lines and lines with any other prefix take the plain path;
/// neither case is an error. Pure predicate, no allocation.
pub fn opts_in(line: &[u8]) -> bool {
    line.starts_with(SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_detected() {
        assert!(opts_in(b"!<3 tag key=val>message"));
        assert!(opts_in(b"!<anything"));
    }

    #[test]
    fn test_bare_sentinel_detected() {
        // Exactly two bytes still opts in; the parser decides it is
        // malformed afterwards.
        assert!(opts_in(b"!<"));
    }

    #[test]
    fn test_short_lines_are_plain() {
        assert!(!opts_in(b""));
        assert!(!opts_in(b"!"));
        assert!(!opts_in(b"<"));
    }

    #[test]
    fn test_plain_lines_are_plain() {
        assert!(!opts_in(b"hello world"));
        assert!(!opts_in(b"<!reversed"));
        assert!(!opts_in(b" !<leading space"));
    }

    #[test]
    fn test_non_utf8_prefix_is_plain() {
        assert!(!opts_in(b"\xFF\xFE!<"));
    }
}
