//! Per-character cell width classification
//!
//! Widths follow these rules, earlier rules winning:
//!
//! - NUL (U+0000) has width 0.
//! - Other C0/C1 control characters and DEL are non-printable (-1).
//! - Everything else below U+0300 has width 1, including SOFT HYPHEN (U+00AD)
//!   even though it is a format character.
//! - Non-spacing and enclosing marks (Mn, Me), format characters (Cf) and
//!   ZERO WIDTH SPACE (U+200B) have width 0.
//! - Hangul Jamo medial vowels and final consonants (U+1160..=U+11FF) have width 0.
//! - East Asian Wide (W) and Fullwidth (F) characters have width 2.
//! - All remaining characters have width 1.

use crate::search::contains;
use crate::tables::{COMBINING, WIDE};

/// Anything below this is handled without a table search
const FAST_PATH_LIMIT: u32 = 0x0300;

/// First wide character; nothing below it is double width
const FIRST_WIDE: u32 = 0x1100;

/// Hangul Jamo medial vowels and final consonants
const JAMO_MEDIAL_FINAL: (u32, u32) = (0x1160, 0x11FF);

/// Legacy double-byte promotion band, `first..last` (exclusive end)
const LEGACY_BAND: (u32, u32) = (0x00A1, 0xFF61);

/// WON SIGN, kept narrow under the legacy policy
const WON_SIGN: u32 = 0x20A9;

/// Cell width of a code point: -1 (non-printable), 0, 1 or 2
pub fn classify_width(ucs: u32) -> i32 {
    if ucs < FAST_PATH_LIMIT {
        if ucs == 0 {
            return 0;
        }
        if ucs < 0x20 || (0x7F..0xA0).contains(&ucs) {
            return -1;
        }
        return 1;
    }

    if contains(ucs, COMBINING) {
        return 0;
    }

    if ucs < FIRST_WIDE {
        return 1;
    }

    if (JAMO_MEDIAL_FINAL.0..=JAMO_MEDIAL_FINAL.1).contains(&ucs) {
        return 0;
    }

    1 + i32::from(contains(ucs, WIDE))
}

/// Cell width of a code point from text converted out of a legacy double-byte
/// code page.
///
/// Every printable narrow character outside the ASCII-compatible range is
/// promoted to two cells. This is not an East Asian Width classification and
/// should only be used for that kind of converted text.
pub fn classify_width_legacy(ucs: u32) -> i32 {
    let w = classify_width(ucs);
    if w == 1 && (LEGACY_BAND.0..LEGACY_BAND.1).contains(&ucs) && ucs != WON_SIGN {
        2
    } else {
        w
    }
}
