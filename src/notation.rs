//! Parser for code point notation
//!
//! Accepts `U+XXXX` and `0xXXXX` code points (case-insensitive prefix) and
//! inclusive ranges written `U+XXXX..U+YYYY`, separated by whitespace or commas.

use winnow::ascii::Caseless;
use winnow::combinator::{alt, opt, preceded};
use winnow::token::take_while;
use winnow::ModalResult;
use winnow::Parser;

use crate::error::WidthError;

/// Largest valid Unicode code point
const MAX_CODE_POINT: u32 = 0x10FFFF;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

// ===== Winnow parsers =====

/// Parse up to eight hex digits
fn w_hex(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=8, |c: char| c.is_ascii_hexdigit())
        .try_map(|digits: &str| u32::from_str_radix(digits, 16))
        .parse_next(input)
}

/// Parse a single code point: U+XXXX or 0xXXXX
fn w_code_point(input: &mut &str) -> ModalResult<u32> {
    preceded(alt((Caseless("U+"), Caseless("0x"))), w_hex).parse_next(input)
}

/// Parse a code point or an inclusive range
fn w_item(input: &mut &str) -> ModalResult<(u32, Option<u32>)> {
    let start = w_code_point.parse_next(input)?;
    let end = opt(preceded("..", w_code_point)).parse_next(input)?;
    Ok((start, end))
}

fn check_code_point(value: u32) -> Result<u32, WidthError> {
    if value > MAX_CODE_POINT {
        return Err(WidthError::InvalidCodePoint(value));
    }
    Ok(value)
}

/// Parse a list of code points and ranges into a flat sequence
///
/// # Returns
/// * `Ok(Vec<u32>)` - Code points in input order, ranges expanded
/// * `Err(WidthError)` - Empty input, malformed notation or out-of-range value
pub fn parse_code_points(input: &str) -> Result<Vec<u32>, WidthError> {
    if input.trim().is_empty() {
        return Err(WidthError::EmptyInput);
    }

    let mut code_points = Vec::new();
    let mut rest = input.trim_start_matches(is_separator);

    while !rest.is_empty() {
        let column = input.len() - rest.len() + 1;
        let token = rest.split(is_separator).next().unwrap_or_default();

        let mut cursor = rest;
        let (start, end) = w_item(&mut cursor).map_err(|_| WidthError::ParseError {
            column,
            message: format!("Expected code point, found '{}'", token),
            suggestion: Some("Write code points like 'U+4E00' or '0x4E00'".to_string()),
        })?;

        // Item must be followed by a separator or end of input
        if let Some(c) = cursor.chars().next() {
            if !is_separator(c) {
                return Err(WidthError::ParseError {
                    column: input.len() - cursor.len() + 1,
                    message: format!("Unexpected character '{}' in '{}'", c, token),
                    suggestion: Some("Separate code points with spaces or commas".to_string()),
                });
            }
        }

        let start = check_code_point(start)?;
        match end {
            Some(end) => {
                let end = check_code_point(end)?;
                if end < start {
                    return Err(WidthError::InvalidCodePoint(end));
                }
                code_points.extend(start..=end);
            }
            None => code_points.push(start),
        }

        rest = cursor.trim_start_matches(is_separator);
    }

    Ok(code_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        assert_eq!(parse_code_points("U+4E00").unwrap(), vec![0x4E00]);
        assert_eq!(parse_code_points("u+0041").unwrap(), vec![0x41]);
        assert_eq!(parse_code_points("0x7f").unwrap(), vec![0x7F]);
        assert_eq!(parse_code_points("0X1F600").unwrap(), vec![0x1F600]);
    }

    #[test]
    fn test_parse_list_with_separators() {
        let parsed = parse_code_points("  U+0041, U+4E00\n0x0300 ,U+0000  ").unwrap();
        assert_eq!(parsed, vec![0x41, 0x4E00, 0x300, 0]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_code_points("U+1160..U+1163").unwrap(),
            vec![0x1160, 0x1161, 0x1162, 0x1163]
        );
        assert_eq!(parse_code_points("0x41..0x41").unwrap(), vec![0x41]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_code_points(""), Err(WidthError::EmptyInput)));
        assert!(matches!(
            parse_code_points("  \n "),
            Err(WidthError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_missing_prefix() {
        let err = parse_code_points("U+0041 4E00").unwrap_err();
        assert_eq!(
            err,
            WidthError::ParseError {
                column: 8,
                message: "Expected code point, found '4E00'".to_string(),
                suggestion: Some("Write code points like 'U+4E00' or '0x4E00'".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = parse_code_points("U+004G").unwrap_err();
        assert!(matches!(err, WidthError::ParseError { column: 6, .. }));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            parse_code_points("U+110000"),
            Err(WidthError::InvalidCodePoint(0x110000))
        );
        assert_eq!(
            parse_code_points("U+0045..U+0041"),
            Err(WidthError::InvalidCodePoint(0x41))
        );
    }

    #[test]
    fn test_parse_too_many_digits() {
        assert!(matches!(
            parse_code_points("U+123456789"),
            Err(WidthError::ParseError { .. })
        ));
    }
}
