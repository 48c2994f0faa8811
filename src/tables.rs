//! Static interval tables of zero-width and double-width code points
//!
//! Both tables are derived from Unicode 8.0.0 and must stay verbatim: boundaries
//! are not merged or corrected, and every table is strictly ascending with no
//! overlapping intervals.

/// A closed range of code points, `first..=last`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: u32,
    pub last: u32,
}

impl Interval {
    /// Create a new interval covering `first..=last`
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Check if a code point lies inside this interval
    pub fn contains(&self, ucs: u32) -> bool {
        self.first <= ucs && ucs <= self.last
    }
}

/// Non-spacing characters: general categories Mn, Me and Cf, plus ZERO WIDTH SPACE
/// (U+200B).
///
/// U+00AD (SOFT HYPHEN) is listed here but the classifier's fast path
/// reports it as width 1 before this table is consulted.
pub static COMBINING: &[Interval] = &[
    Interval::new(0x00AD, 0x00AD),
    Interval::new(0x0300, 0x036F),
    Interval::new(0x0483, 0x0489),
    Interval::new(0x0591, 0x05BD),
    Interval::new(0x05BF, 0x05BF),
    Interval::new(0x05C1, 0x05C2),
    Interval::new(0x05C4, 0x05C5),
    Interval::new(0x05C7, 0x05C7),
    Interval::new(0x0600, 0x0605),
    Interval::new(0x0610, 0x061A),
    Interval::new(0x061C, 0x061C),
    Interval::new(0x064B, 0x065F),
    Interval::new(0x0670, 0x0670),
    Interval::new(0x06D6, 0x06DD),
    Interval::new(0x06DF, 0x06E4),
    Interval::new(0x06E7, 0x06E8),
    Interval::new(0x06EA, 0x06ED),
    Interval::new(0x070F, 0x070F),
    Interval::new(0x0711, 0x0711),
    Interval::new(0x0730, 0x074A),
    Interval::new(0x07A6, 0x07B0),
    Interval::new(0x07EB, 0x07F3),
    Interval::new(0x0816, 0x0819),
    Interval::new(0x081B, 0x0823),
    Interval::new(0x0825, 0x0827),
    Interval::new(0x0829, 0x082D),
    Interval::new(0x0859, 0x085B),
    Interval::new(0x08E3, 0x0902),
    Interval::new(0x093A, 0x093A),
    Interval::new(0x093C, 0x093C),
    Interval::new(0x0941, 0x0948),
    Interval::new(0x094D, 0x094D),
    Interval::new(0x0951, 0x0957),
    Interval::new(0x0962, 0x0963),
    Interval::new(0x0981, 0x0981),
    Interval::new(0x09BC, 0x09BC),
    Interval::new(0x09C1, 0x09C4),
    Interval::new(0x09CD, 0x09CD),
    Interval::new(0x09E2, 0x09E3),
    Interval::new(0x0A01, 0x0A02),
    Interval::new(0x0A3C, 0x0A3C),
    Interval::new(0x0A41, 0x0A42),
    Interval::new(0x0A47, 0x0A48),
    Interval::new(0x0A4B, 0x0A4D),
    Interval::new(0x0A51, 0x0A51),
    Interval::new(0x0A70, 0x0A71),
    Interval::new(0x0A75, 0x0A75),
    Interval::new(0x0A81, 0x0A82),
    Interval::new(0x0ABC, 0x0ABC),
    Interval::new(0x0AC1, 0x0AC5),
    Interval::new(0x0AC7, 0x0AC8),
    Interval::new(0x0ACD, 0x0ACD),
    Interval::new(0x0AE2, 0x0AE3),
    Interval::new(0x0B01, 0x0B01),
    Interval::new(0x0B3C, 0x0B3C),
    Interval::new(0x0B3F, 0x0B3F),
    Interval::new(0x0B41, 0x0B44),
    Interval::new(0x0B4D, 0x0B4D),
    Interval::new(0x0B56, 0x0B56),
    Interval::new(0x0B62, 0x0B63),
    Interval::new(0x0B82, 0x0B82),
    Interval::new(0x0BC0, 0x0BC0),
    Interval::new(0x0BCD, 0x0BCD),
    Interval::new(0x0C00, 0x0C00),
    Interval::new(0x0C3E, 0x0C40),
    Interval::new(0x0C46, 0x0C48),
    Interval::new(0x0C4A, 0x0C4D),
    Interval::new(0x0C55, 0x0C56),
    Interval::new(0x0C62, 0x0C63),
    Interval::new(0x0C81, 0x0C81),
    Interval::new(0x0CBC, 0x0CBC),
    Interval::new(0x0CBF, 0x0CBF),
    Interval::new(0x0CC6, 0x0CC6),
    Interval::new(0x0CCC, 0x0CCD),
    Interval::new(0x0CE2, 0x0CE3),
    Interval::new(0x0D01, 0x0D01),
    Interval::new(0x0D41, 0x0D44),
    Interval::new(0x0D4D, 0x0D4D),
    Interval::new(0x0D62, 0x0D63),
    Interval::new(0x0DCA, 0x0DCA),
    Interval::new(0x0DD2, 0x0DD4),
    Interval::new(0x0DD6, 0x0DD6),
    Interval::new(0x0E31, 0x0E31),
    Interval::new(0x0E34, 0x0E3A),
    Interval::new(0x0E47, 0x0E4E),
    Interval::new(0x0EB1, 0x0EB1),
    Interval::new(0x0EB4, 0x0EB9),
    Interval::new(0x0EBB, 0x0EBC),
    Interval::new(0x0EC8, 0x0ECD),
    Interval::new(0x0F18, 0x0F19),
    Interval::new(0x0F35, 0x0F35),
    Interval::new(0x0F37, 0x0F37),
    Interval::new(0x0F39, 0x0F39),
    Interval::new(0x0F71, 0x0F7E),
    Interval::new(0x0F80, 0x0F84),
    Interval::new(0x0F86, 0x0F87),
    Interval::new(0x0F8D, 0x0F97),
    Interval::new(0x0F99, 0x0FBC),
    Interval::new(0x0FC6, 0x0FC6),
    Interval::new(0x102D, 0x1030),
    Interval::new(0x1032, 0x1037),
    Interval::new(0x1039, 0x103A),
    Interval::new(0x103D, 0x103E),
    Interval::new(0x1058, 0x1059),
    Interval::new(0x105E, 0x1060),
    Interval::new(0x1071, 0x1074),
    Interval::new(0x1082, 0x1082),
    Interval::new(0x1085, 0x1086),
    Interval::new(0x108D, 0x108D),
    Interval::new(0x109D, 0x109D),
    Interval::new(0x135D, 0x135F),
    Interval::new(0x1712, 0x1714),
    Interval::new(0x1732, 0x1734),
    Interval::new(0x1752, 0x1753),
    Interval::new(0x1772, 0x1773),
    Interval::new(0x17B4, 0x17B5),
    Interval::new(0x17B7, 0x17BD),
    Interval::new(0x17C6, 0x17C6),
    Interval::new(0x17C9, 0x17D3),
    Interval::new(0x17DD, 0x17DD),
    Interval::new(0x180B, 0x180E),
    Interval::new(0x18A9, 0x18A9),
    Interval::new(0x1920, 0x1922),
    Interval::new(0x1927, 0x1928),
    Interval::new(0x1932, 0x1932),
    Interval::new(0x1939, 0x193B),
    Interval::new(0x1A17, 0x1A18),
    Interval::new(0x1A1B, 0x1A1B),
    Interval::new(0x1A56, 0x1A56),
    Interval::new(0x1A58, 0x1A5E),
    Interval::new(0x1A60, 0x1A60),
    Interval::new(0x1A62, 0x1A62),
    Interval::new(0x1A65, 0x1A6C),
    Interval::new(0x1A73, 0x1A7C),
    Interval::new(0x1A7F, 0x1A7F),
    Interval::new(0x1AB0, 0x1ABE),
    Interval::new(0x1B00, 0x1B03),
    Interval::new(0x1B34, 0x1B34),
    Interval::new(0x1B36, 0x1B3A),
    Interval::new(0x1B3C, 0x1B3C),
    Interval::new(0x1B42, 0x1B42),
    Interval::new(0x1B6B, 0x1B73),
    Interval::new(0x1B80, 0x1B81),
    Interval::new(0x1BA2, 0x1BA5),
    Interval::new(0x1BA8, 0x1BA9),
    Interval::new(0x1BAB, 0x1BAD),
    Interval::new(0x1BE6, 0x1BE6),
    Interval::new(0x1BE8, 0x1BE9),
    Interval::new(0x1BED, 0x1BED),
    Interval::new(0x1BEF, 0x1BF1),
    Interval::new(0x1C2C, 0x1C33),
    Interval::new(0x1C36, 0x1C37),
    Interval::new(0x1CD0, 0x1CD2),
    Interval::new(0x1CD4, 0x1CE0),
    Interval::new(0x1CE2, 0x1CE8),
    Interval::new(0x1CED, 0x1CED),
    Interval::new(0x1CF4, 0x1CF4),
    Interval::new(0x1CF8, 0x1CF9),
    Interval::new(0x1DC0, 0x1DF5),
    Interval::new(0x1DFC, 0x1DFF),
    Interval::new(0x200B, 0x200F),
    Interval::new(0x202A, 0x202E),
    Interval::new(0x2060, 0x2064),
    Interval::new(0x2066, 0x206F),
    Interval::new(0x20D0, 0x20F0),
    Interval::new(0x2CEF, 0x2CF1),
    Interval::new(0x2D7F, 0x2D7F),
    Interval::new(0x2DE0, 0x2DFF),
    Interval::new(0x302A, 0x302D),
    Interval::new(0x3099, 0x309A),
    Interval::new(0xA66F, 0xA672),
    Interval::new(0xA674, 0xA67D),
    Interval::new(0xA69E, 0xA69F),
    Interval::new(0xA6F0, 0xA6F1),
    Interval::new(0xA802, 0xA802),
    Interval::new(0xA806, 0xA806),
    Interval::new(0xA80B, 0xA80B),
    Interval::new(0xA825, 0xA826),
    Interval::new(0xA8C4, 0xA8C4),
    Interval::new(0xA8E0, 0xA8F1),
    Interval::new(0xA926, 0xA92D),
    Interval::new(0xA947, 0xA951),
    Interval::new(0xA980, 0xA982),
    Interval::new(0xA9B3, 0xA9B3),
    Interval::new(0xA9B6, 0xA9B9),
    Interval::new(0xA9BC, 0xA9BC),
    Interval::new(0xA9E5, 0xA9E5),
    Interval::new(0xAA29, 0xAA2E),
    Interval::new(0xAA31, 0xAA32),
    Interval::new(0xAA35, 0xAA36),
    Interval::new(0xAA43, 0xAA43),
    Interval::new(0xAA4C, 0xAA4C),
    Interval::new(0xAA7C, 0xAA7C),
    Interval::new(0xAAB0, 0xAAB0),
    Interval::new(0xAAB2, 0xAAB4),
    Interval::new(0xAAB7, 0xAAB8),
    Interval::new(0xAABE, 0xAABF),
    Interval::new(0xAAC1, 0xAAC1),
    Interval::new(0xAAEC, 0xAAED),
    Interval::new(0xAAF6, 0xAAF6),
    Interval::new(0xABE5, 0xABE5),
    Interval::new(0xABE8, 0xABE8),
    Interval::new(0xABED, 0xABED),
    Interval::new(0xFB1E, 0xFB1E),
    Interval::new(0xFE00, 0xFE0F),
    Interval::new(0xFE20, 0xFE2F),
    Interval::new(0xFEFF, 0xFEFF),
    Interval::new(0xFFF9, 0xFFFB),
    Interval::new(0x101FD, 0x101FD),
    Interval::new(0x102E0, 0x102E0),
    Interval::new(0x10376, 0x1037A),
    Interval::new(0x10A01, 0x10A03),
    Interval::new(0x10A05, 0x10A06),
    Interval::new(0x10A0C, 0x10A0F),
    Interval::new(0x10A38, 0x10A3A),
    Interval::new(0x10A3F, 0x10A3F),
    Interval::new(0x10AE5, 0x10AE6),
    Interval::new(0x11001, 0x11001),
    Interval::new(0x11038, 0x11046),
    Interval::new(0x1107F, 0x11081),
    Interval::new(0x110B3, 0x110B6),
    Interval::new(0x110B9, 0x110BA),
    Interval::new(0x110BD, 0x110BD),
    Interval::new(0x11100, 0x11102),
    Interval::new(0x11127, 0x1112B),
    Interval::new(0x1112D, 0x11134),
    Interval::new(0x11173, 0x11173),
    Interval::new(0x11180, 0x11181),
    Interval::new(0x111B6, 0x111BE),
    Interval::new(0x111CA, 0x111CC),
    Interval::new(0x1122F, 0x11231),
    Interval::new(0x11234, 0x11234),
    Interval::new(0x11236, 0x11237),
    Interval::new(0x112DF, 0x112DF),
    Interval::new(0x112E3, 0x112EA),
    Interval::new(0x11300, 0x11301),
    Interval::new(0x1133C, 0x1133C),
    Interval::new(0x11340, 0x11340),
    Interval::new(0x11366, 0x1136C),
    Interval::new(0x11370, 0x11374),
    Interval::new(0x114B3, 0x114B8),
    Interval::new(0x114BA, 0x114BA),
    Interval::new(0x114BF, 0x114C0),
    Interval::new(0x114C2, 0x114C3),
    Interval::new(0x115B2, 0x115B5),
    Interval::new(0x115BC, 0x115BD),
    Interval::new(0x115BF, 0x115C0),
    Interval::new(0x115DC, 0x115DD),
    Interval::new(0x11633, 0x1163A),
    Interval::new(0x1163D, 0x1163D),
    Interval::new(0x1163F, 0x11640),
    Interval::new(0x116AB, 0x116AB),
    Interval::new(0x116AD, 0x116AD),
    Interval::new(0x116B0, 0x116B5),
    Interval::new(0x116B7, 0x116B7),
    Interval::new(0x1171D, 0x1171F),
    Interval::new(0x11722, 0x11725),
    Interval::new(0x11727, 0x1172B),
    Interval::new(0x16AF0, 0x16AF4),
    Interval::new(0x16B30, 0x16B36),
    Interval::new(0x16F8F, 0x16F92),
    Interval::new(0x1BC9D, 0x1BC9E),
    Interval::new(0x1BCA0, 0x1BCA3),
    Interval::new(0x1D167, 0x1D169),
    Interval::new(0x1D173, 0x1D182),
    Interval::new(0x1D185, 0x1D18B),
    Interval::new(0x1D1AA, 0x1D1AD),
    Interval::new(0x1D242, 0x1D244),
    Interval::new(0x1DA00, 0x1DA36),
    Interval::new(0x1DA3B, 0x1DA6C),
    Interval::new(0x1DA75, 0x1DA75),
    Interval::new(0x1DA84, 0x1DA84),
    Interval::new(0x1DA9B, 0x1DA9F),
    Interval::new(0x1DAA1, 0x1DAAF),
    Interval::new(0x1E8D0, 0x1E8D6),
    Interval::new(0xE0001, 0xE0001),
    Interval::new(0xE0020, 0xE007F),
    Interval::new(0xE0100, 0xE01EF),
];

/// East Asian Wide (W) and Fullwidth (F) characters.
pub static WIDE: &[Interval] = &[
    Interval::new(0x1100, 0x115F),
    Interval::new(0x2329, 0x232A),
    Interval::new(0x2E80, 0x2E99),
    Interval::new(0x2E9B, 0x2EF3),
    Interval::new(0x2F00, 0x2FD5),
    Interval::new(0x2FF0, 0x2FFB),
    Interval::new(0x3000, 0x303E),
    Interval::new(0x3041, 0x3096),
    Interval::new(0x3099, 0x30FF),
    Interval::new(0x3105, 0x312D),
    Interval::new(0x3131, 0x318E),
    Interval::new(0x3190, 0x31BA),
    Interval::new(0x31C0, 0x31E3),
    Interval::new(0x31F0, 0x321E),
    Interval::new(0x3220, 0x3247),
    Interval::new(0x3250, 0x32FE),
    Interval::new(0x3300, 0x4DBF),
    Interval::new(0x4E00, 0xA48C),
    Interval::new(0xA490, 0xA4C6),
    Interval::new(0xA960, 0xA97C),
    Interval::new(0xAC00, 0xD7A3),
    Interval::new(0xF900, 0xFAFF),
    Interval::new(0xFE10, 0xFE19),
    Interval::new(0xFE30, 0xFE52),
    Interval::new(0xFE54, 0xFE66),
    Interval::new(0xFE68, 0xFE6B),
    Interval::new(0xFF01, 0xFF60),
    Interval::new(0xFFE0, 0xFFE6),
    Interval::new(0x1B000, 0x1B001),
    Interval::new(0x1F200, 0x1F202),
    Interval::new(0x1F210, 0x1F23A),
    Interval::new(0x1F240, 0x1F248),
    Interval::new(0x1F250, 0x1F251),
    Interval::new(0x20000, 0x2FFFD),
    Interval::new(0x30000, 0x3FFFD),
];
