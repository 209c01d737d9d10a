//! Seven-segment decode.
//!
//! Each decimal digit maps to a 7-bit pattern through the constant
//! [`LOOKUP`] table. Bit 0 is segment `a`, bit 6 is segment `g`:
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```
//!
//! The entries for 0 and 8 are identical, so 8 lights the same segments
//! as 0.
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::segments::{is_segment_lit, segments_for, Segment};
//!
//! assert_eq!(segments_for(1).bits(), 0b0000110);
//! assert!(is_segment_lit(Segment::B, 1));
//! assert!(!is_segment_lit(Segment::A, 1));
//! ```

/// Number of segments per digit.
pub const SEGMENT_COUNT: usize = 7;

/// Segment patterns for digits 0 through 9 (bit 0 = `a`, bit 6 = `g`).
pub const LOOKUP: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b0111111, // 8
    0b1101111, // 9
];

/// One segment of a seven-segment digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Segment {
    /// Top.
    A,
    /// Upper right.
    B,
    /// Lower right.
    C,
    /// Bottom.
    D,
    /// Lower left.
    E,
    /// Upper left.
    F,
    /// Middle.
    G,
}

impl Segment {
    /// All segments in bit order `a` through `g`.
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Bit index of the segment within a pattern.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask of the segment.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.index()
    }

    /// Segment for a bit index, or `None` if `index >= 7`.
    pub const fn from_index(index: usize) -> Option<Segment> {
        if index < SEGMENT_COUNT {
            Some(Segment::ALL[index])
        } else {
            None
        }
    }
}

/// The set of lit segments of one digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Pattern with every segment dark.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// Raw 7-bit value (bit 0 = `a`).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `segment` is lit.
    #[inline]
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }

    /// Lit state of every segment in order `a` through `g`.
    pub fn to_array(self) -> [bool; SEGMENT_COUNT] {
        Segment::ALL.map(|segment| self.is_lit(segment))
    }

    /// Number of lit segments.
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Segment pattern for `digit`.
///
/// # Panics
///
/// Panics if `digit > 9`. The converter never produces such a digit.
#[inline]
pub fn segments_for(digit: u8) -> SegmentPattern {
    assert!(digit <= 9, "digit {} is not a decimal digit", digit);
    SegmentPattern(LOOKUP[usize::from(digit)])
}

/// Returns true if `segment` is lit when showing `digit`.
///
/// # Panics
///
/// Panics if `digit > 9`.
#[inline]
pub fn is_segment_lit(segment: Segment, digit: u8) -> bool {
    segments_for(digit).is_lit(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_literal_patterns() {
        let expected = [
            0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101,
            0b0000111, 0b0111111, 0b1101111,
        ];
        for (digit, bits) in expected.iter().enumerate() {
            assert_eq!(segments_for(digit as u8).bits(), *bits, "digit {}", digit);
        }
    }

    #[test]
    fn eight_renders_like_zero() {
        assert_eq!(segments_for(8), segments_for(0));
        assert!(!is_segment_lit(Segment::G, 8));
    }

    #[test]
    fn is_segment_lit_matches_shifted_mask() {
        for digit in 0..=9u8 {
            for i in 0..SEGMENT_COUNT {
                let segment = Segment::from_index(i).unwrap();
                let expected = (1u8 << i) & LOOKUP[digit as usize] != 0;
                assert_eq!(is_segment_lit(segment, digit), expected);
            }
        }
    }

    #[test]
    fn one_lights_only_b_and_c() {
        assert_eq!(
            segments_for(1).to_array(),
            [false, true, true, false, false, false, false]
        );
    }

    #[test]
    fn lit_counts() {
        assert_eq!(segments_for(1).lit_count(), 2);
        assert_eq!(segments_for(7).lit_count(), 3);
        assert_eq!(segments_for(6).lit_count(), 6);
        assert_eq!(SegmentPattern::BLANK.lit_count(), 0);
    }

    #[test]
    fn segment_indexes_are_bit_order() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
        }
        assert_eq!(Segment::from_index(7), None);
    }

    #[test]
    #[should_panic(expected = "not a decimal digit")]
    fn digit_ten_panics() {
        segments_for(10);
    }
}
