use crate::width::{classify_width, classify_width_legacy};

/// Cell width of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// C0/C1 control or DEL, no cell advance defined
    NonPrintable,
    /// Combining, format or NUL
    Zero,
    /// One cell
    Narrow,
    /// Two cells
    Wide,
}

impl Width {
    /// Convert from the raw `-1..=2` form returned by the classifier functions
    pub fn from_raw(raw: i32) -> Option<Width> {
        match raw {
            -1 => Some(Width::NonPrintable),
            0 => Some(Width::Zero),
            1 => Some(Width::Narrow),
            2 => Some(Width::Wide),
            _ => None,
        }
    }

    /// Raw form: -1 for non-printable, otherwise the number of cells
    pub fn as_raw(self) -> i32 {
        match self {
            Width::NonPrintable => -1,
            Width::Zero => 0,
            Width::Narrow => 1,
            Width::Wide => 2,
        }
    }

    /// Number of cells, or `None` for non-printable characters
    pub fn cells(self) -> Option<usize> {
        match self {
            Width::NonPrintable => None,
            Width::Zero => Some(0),
            Width::Narrow => Some(1),
            Width::Wide => Some(2),
        }
    }

    /// Check if this is a printable width
    pub fn is_printable(&self) -> bool {
        !matches!(self, Width::NonPrintable)
    }
}

/// Which per-character classification to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// Unicode East Asian Width based classification
    #[default]
    Standard,
    /// Text converted from a legacy double-byte code page: printable characters
    /// outside the ASCII-compatible range take two cells
    LegacyDbcs,
}

impl WidthPolicy {
    /// Raw width (`-1..=2`) of `ucs` under this policy
    pub fn raw_width(self, ucs: u32) -> i32 {
        match self {
            WidthPolicy::Standard => classify_width(ucs),
            WidthPolicy::LegacyDbcs => classify_width_legacy(ucs),
        }
    }

    /// Typed width of `ucs` under this policy
    pub fn classify(self, ucs: u32) -> Width {
        match self.raw_width(ucs) {
            -1 => Width::NonPrintable,
            0 => Width::Zero,
            1 => Width::Narrow,
            _ => Width::Wide,
        }
    }
}

/// Options for measuring a sequence of code points
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureOptions {
    /// Classification policy
    pub policy: WidthPolicy,
    /// Maximum number of elements to examine (`None` = whole sequence)
    pub max_len: Option<usize>,
}

impl MeasureOptions {
    /// Options for the legacy double-byte policy with no length bound
    pub fn legacy() -> Self {
        Self {
            policy: WidthPolicy::LegacyDbcs,
            max_len: None,
        }
    }

    /// Same options with a length bound
    pub fn with_max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }
}
