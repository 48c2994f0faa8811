//! Display width of Rust `char` and `str` values
//!
//! Strings are not NUL terminated, so U+0000 inside a `str` counts as zero cells
//! rather than ending the measurement.

use crate::types::WidthPolicy;

/// Cell width of Rust text values.
///
/// Methods return `None` when the value contains a control character or DEL.
pub trait CellWidth {
    /// Width under the standard policy
    fn cell_width(&self) -> Option<usize>;

    /// Width under the legacy double-byte policy
    fn cell_width_legacy(&self) -> Option<usize>;
}

impl CellWidth for char {
    fn cell_width(&self) -> Option<usize> {
        WidthPolicy::Standard.classify(u32::from(*self)).cells()
    }

    fn cell_width_legacy(&self) -> Option<usize> {
        WidthPolicy::LegacyDbcs.classify(u32::from(*self)).cells()
    }
}

impl CellWidth for str {
    fn cell_width(&self) -> Option<usize> {
        policy_width(self, WidthPolicy::Standard)
    }

    fn cell_width_legacy(&self) -> Option<usize> {
        policy_width(self, WidthPolicy::LegacyDbcs)
    }
}

fn policy_width(s: &str, policy: WidthPolicy) -> Option<usize> {
    s.chars().map(|c| policy.classify(u32::from(c)).cells()).sum()
}

/// Return the display width of a string, accounting for combining and
/// double-width characters.
pub fn str_width(s: &str) -> Option<usize> {
    s.cell_width()
}

/// Return the display width of a string converted from a legacy double-byte
/// code page.
pub fn str_width_legacy(s: &str) -> Option<usize> {
    s.cell_width_legacy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width() {
        assert_eq!('A'.cell_width(), Some(1));
        assert_eq!('中'.cell_width(), Some(2));
        assert_eq!('\u{0301}'.cell_width(), Some(0));
        assert_eq!('\t'.cell_width(), None);
        assert_eq!('α'.cell_width_legacy(), Some(2));
    }

    #[test]
    fn test_str_width() {
        assert_eq!(str_width("hello"), Some(5));
        assert_eq!(str_width("日本語"), Some(6));
        assert_eq!(str_width("e\u{0301}"), Some(1));
        assert_eq!(str_width(""), Some(0));
        assert_eq!(str_width("tab\there"), None);
    }

    #[test]
    fn test_nul_inside_str_is_zero() {
        assert_eq!(str_width("a\0b"), Some(2));
    }

    #[test]
    fn test_str_width_legacy() {
        assert_eq!(str_width_legacy("abc"), Some(3));
        assert_eq!(str_width_legacy("αβγ"), Some(6));
        assert_eq!(str_width_legacy("₩1"), Some(2));
        assert_eq!(str_width_legacy("\u{1b}[0m"), None);
    }

    #[test]
    fn test_hangul_conjoining_jamo() {
        // KIYEOK + A + KIYEOK as conjoining jamo: one syllable block
        assert_eq!(str_width("\u{1100}\u{1161}\u{11A8}"), Some(2));
    }
}
