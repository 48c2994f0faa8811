//! cellwidth - Terminal cell width of Unicode code points
//!
//! Classifies how many fixed-width terminal cells a code point occupies:
//! `-1` for control characters, `0` for combining and format characters, `1` for
//! ordinary characters and `2` for East Asian Wide and Fullwidth characters.
//!
//! # Single Code Point Example
//! ```
//! use cellwidth::classify_width;
//!
//! assert_eq!(classify_width('A' as u32), 1);
//! assert_eq!(classify_width(0x4E00), 2);
//! assert_eq!(classify_width(0x0300), 0);
//! assert_eq!(classify_width(0x7F), -1);
//! ```
//!
//! # Sequence Example
//! ```
//! use cellwidth::measure_sequence;
//!
//! assert_eq!(measure_sequence(&[0x0041, 0x4E00, 0], 10), 3);
//! assert_eq!(measure_sequence(&[0x0041, 0x7F, 0x4E00, 0], 10), -1);
//! ```
//!
//! # Legacy Double-Byte Text Example
//! ```
//! use cellwidth::{classify_width, classify_width_legacy};
//!
//! // GREEK CAPITAL LETTER ALPHA is narrow, unless it came from a DBCS code page
//! assert_eq!(classify_width(0x0391), 1);
//! assert_eq!(classify_width_legacy(0x0391), 2);
//! ```
//!
//! # String Example
//! ```
//! use cellwidth::{CellWidth, str_width};
//!
//! assert_eq!(str_width("日本語"), Some(6));
//! assert_eq!('中'.cell_width(), Some(2));
//! assert_eq!("tab\there".cell_width(), None);
//! ```
//!
//! # Notation and Report Example
//! ```
//! use cellwidth::{measure, parse_code_points, MeasureOptions};
//!
//! let code_points = parse_code_points("U+0041 U+4E00 U+0300").unwrap();
//! assert_eq!(measure(&code_points, MeasureOptions::default()), Ok(3));
//! ```

mod error;
mod notation;
mod report;
mod search;
mod sequence;
mod tables;
mod text;
mod types;
mod width;

pub use error::WidthError;
pub use notation::parse_code_points;
pub use report::render_width_report;
pub use search::contains;
pub use sequence::{measure, measure_sequence, measure_sequence_legacy};
pub use tables::{Interval, COMBINING, WIDE};
pub use text::{str_width, str_width_legacy, CellWidth};
pub use types::{MeasureOptions, Width, WidthPolicy};
pub use width::{classify_width, classify_width_legacy};
