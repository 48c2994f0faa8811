//! Binary search over sorted interval tables

use crate::tables::Interval;

/// Check whether `ucs` falls inside any interval of `table`.
///
/// `table` must be sorted ascending with no overlapping intervals. Code points
/// outside the table's overall span are rejected before searching.
pub fn contains(ucs: u32, table: &[Interval]) -> bool {
    let (Some(head), Some(tail)) = (table.first(), table.last()) else {
        return false;
    };
    if ucs < head.first || ucs > tail.last {
        return false;
    }

    // Half-open index bounds: `max` is one past the last candidate
    let mut min = 0;
    let mut max = table.len();
    while min < max {
        let mid = min + (max - min) / 2;
        let iv = &table[mid];
        if ucs > iv.last {
            min = mid + 1;
        } else if ucs < iv.first {
            max = mid;
        } else {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{COMBINING, WIDE};

    const SMALL: &[Interval] = &[
        Interval::new(10, 20),
        Interval::new(30, 30),
        Interval::new(40, 50),
    ];

    #[test]
    fn test_empty_table() {
        assert!(!contains(0, &[]));
        assert!(!contains(42, &[]));
    }

    #[test]
    fn test_out_of_span_rejected() {
        assert!(!contains(9, SMALL));
        assert!(!contains(51, SMALL));
        assert!(!contains(u32::MAX, SMALL));
    }

    #[test]
    fn test_interval_edges() {
        assert!(contains(10, SMALL));
        assert!(contains(20, SMALL));
        assert!(contains(30, SMALL));
        assert!(contains(40, SMALL));
        assert!(contains(50, SMALL));
    }

    #[test]
    fn test_gaps_between_intervals() {
        assert!(!contains(21, SMALL));
        assert!(!contains(29, SMALL));
        assert!(!contains(31, SMALL));
        assert!(!contains(39, SMALL));
    }

    #[test]
    fn test_single_interval_table() {
        let table = [Interval::new(5, 5)];
        assert!(contains(5, &table));
        assert!(!contains(4, &table));
        assert!(!contains(6, &table));
    }

    #[test]
    fn test_agrees_with_linear_scan() {
        for table in [COMBINING, WIDE] {
            for ucs in (0..0x40000).chain(0xE0000..0xE0200) {
                let linear = table.iter().any(|iv| iv.contains(ucs));
                assert_eq!(contains(ucs, table), linear, "mismatch at U+{:04X}", ucs);
            }
        }
    }

    #[test]
    fn test_every_boundary_found() {
        for table in [COMBINING, WIDE] {
            for iv in table {
                assert!(contains(iv.first, table));
                assert!(contains(iv.last, table));
            }
        }
    }
}
