//! Plain-text width breakdown of a code point sequence

use std::fmt::Write;

use crate::sequence::{measure, scanned};
use crate::types::{MeasureOptions, Width};

/// Render one line per examined code point followed by the total.
///
/// Each line shows the code point, its raw width (-1 for non-printable) and the
/// glyph for printable characters that occupy at least one cell. Elements after a
/// NUL terminator or beyond `max_len` are not listed.
pub fn render_width_report(pwcs: &[u32], options: MeasureOptions) -> String {
    let max_len = options.max_len.unwrap_or(usize::MAX);
    let mut out = String::new();

    for (_, ucs) in scanned(pwcs, max_len) {
        let width = options.policy.classify(ucs);
        let glyph = match width {
            Width::NonPrintable => "(control)".to_string(),
            Width::Zero => String::new(),
            Width::Narrow | Width::Wide => match char::from_u32(ucs) {
                Some(c) => c.to_string(),
                None => "(invalid)".to_string(),
            },
        };
        let line = format!("U+{:04X}{:>4}  {}", ucs, width.as_raw(), glyph);
        let _ = writeln!(out, "{}", line.trim_end());
    }

    match measure(pwcs, options) {
        Ok(total) => {
            let _ = write!(out, "total: {}", total);
        }
        Err(err) => {
            let _ = write!(out, "total: {}", err);
        }
    }
    out
}
