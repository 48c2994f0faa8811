use std::fmt;

/// Errors that can occur while parsing or measuring code points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// Empty input provided
    EmptyInput,
    /// Malformed code point notation at a 1-based column
    ParseError {
        column: usize,
        message: String,
        suggestion: Option<String>,
    },
    /// Value outside the Unicode code space, or a descending range
    InvalidCodePoint(u32),
    /// A control character or DEL was found while measuring
    NonPrintable { position: usize, code_point: u32 },
}

impl fmt::Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthError::EmptyInput => write!(f, "Empty input"),
            WidthError::ParseError {
                column,
                message,
                suggestion,
            } => {
                write!(f, "Column {}: {}", column, message)?;
                if let Some(sug) = suggestion {
                    write!(f, " (Suggestion: {})", sug)?;
                }
                Ok(())
            }
            WidthError::InvalidCodePoint(value) => {
                write!(f, "Invalid code point: 0x{:X}", value)
            }
            WidthError::NonPrintable {
                position,
                code_point,
            } => write!(
                f,
                "Non-printable character U+{:04X} at position {}",
                code_point, position
            ),
        }
    }
}

impl std::error::Error for WidthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_error() {
        let err = WidthError::ParseError {
            column: 3,
            message: "Expected hex digits".to_string(),
            suggestion: Some("Write code points like 'U+4E00'".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Column 3: Expected hex digits (Suggestion: Write code points like 'U+4E00')"
        );
    }

    #[test]
    fn test_display_non_printable() {
        let err = WidthError::NonPrintable {
            position: 1,
            code_point: 0x7F,
        };
        assert_eq!(err.to_string(), "Non-printable character U+007F at position 1");
        assert_eq!(
            WidthError::InvalidCodePoint(0x110000).to_string(),
            "Invalid code point: 0x110000"
        );
        assert_eq!(WidthError::EmptyInput.to_string(), "Empty input");
    }
}
