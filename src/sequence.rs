//! Total width of code point sequences
//!
//! A sequence ends at its first NUL, at `max_len` elements, or at the end of the
//! slice, whichever comes first. A single non-printable element invalidates the
//! whole measurement.

use crate::error::WidthError;
use crate::types::{MeasureOptions, WidthPolicy};

/// Elements examined by a scan: everything before the terminator, capped at `max_len`
pub(crate) fn scanned(pwcs: &[u32], max_len: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
    pwcs.iter()
        .copied()
        .take(max_len)
        .take_while(|&ucs| ucs != 0)
        .enumerate()
}

fn measure_raw(pwcs: &[u32], max_len: usize, policy: WidthPolicy) -> i32 {
    let mut width = 0;
    for (_, ucs) in scanned(pwcs, max_len) {
        let w = policy.raw_width(ucs);
        if w < 0 {
            return -1;
        }
        width += w;
    }
    width
}

/// Total cell width of `pwcs`, or -1 if any examined element is non-printable
pub fn measure_sequence(pwcs: &[u32], max_len: usize) -> i32 {
    measure_raw(pwcs, max_len, WidthPolicy::Standard)
}

/// Same as [`measure_sequence`] under the legacy double-byte policy
pub fn measure_sequence_legacy(pwcs: &[u32], max_len: usize) -> i32 {
    measure_raw(pwcs, max_len, WidthPolicy::LegacyDbcs)
}

/// Total cell width of `pwcs`, reporting the first non-printable element as an error
pub fn measure(pwcs: &[u32], options: MeasureOptions) -> Result<usize, WidthError> {
    let max_len = options.max_len.unwrap_or(usize::MAX);
    let mut width = 0;
    for (position, ucs) in scanned(pwcs, max_len) {
        match options.policy.classify(ucs).cells() {
            Some(cells) => width += cells,
            None => {
                return Err(WidthError::NonPrintable {
                    position,
                    code_point: ucs,
                })
            }
        }
    }
    Ok(width)
}
