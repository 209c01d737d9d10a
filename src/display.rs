//! The renderer side: observed output bits to lit segments.
//!
//! [`DisplayState`] keeps a private copy of the 12 output bits as they were
//! last observed on the wires. Rendering decodes those bits back into digits
//! and looks the digits up in the segment table. It never recomputes the
//! conversion and never mutates state, so it can run as often as the host
//! repaints.
//!
//! A bit that has not been observed yet makes its digit read as 0, so a
//! freshly created display shows "000".
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::display::DisplayState;
//! use seven_by_three::pins::DigitPosition;
//! use seven_by_three::segments::segments_for;
//!
//! let display = DisplayState::new();
//! assert_eq!(display.to_text().as_str(), "000");
//! assert_eq!(display.frame().pattern(DigitPosition::Hundreds), segments_for(0));
//! ```

use heapless::String as HString;

use crate::bcd::BcdDigits;
use crate::config::{DisplayConfig, Rgb};
use crate::encoder::OutputBits;
use crate::packing::decode_nibble;
use crate::pins::{DigitPosition, DIGIT_COUNT, NIBBLE_BITS, OUTPUT_COUNT};
use crate::segments::{segments_for, Segment, SegmentPattern, SEGMENT_COUNT};
use crate::traits::{OutputBus, SegmentRenderer};

/// Lit segments of all three digits, with the fills to draw them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayFrame {
    patterns: [SegmentPattern; DIGIT_COUNT],
    on_color: Rgb,
    off_color: Rgb,
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self {
            patterns: [SegmentPattern::BLANK; DIGIT_COUNT],
            on_color: Rgb::RED,
            off_color: Rgb::DARK_GRAY,
        }
    }
}

impl DisplayFrame {
    /// Frame showing `digits` in the default colors.
    ///
    /// # Panics
    ///
    /// Panics if any digit is above 9.
    pub fn from_digits(digits: &BcdDigits) -> Self {
        Self {
            patterns: digits.to_array().map(segments_for),
            ..Self::default()
        }
    }

    /// Takes the segment fills from `config`.
    pub fn with_colors(mut self, config: &DisplayConfig) -> Self {
        self.on_color = config.on_color;
        self.off_color = config.off_color;
        self
    }

    /// Fill of `segment` of the digit at `position`.
    pub fn color(&self, position: DigitPosition, segment: Segment) -> Rgb {
        if self.is_lit(position, segment) {
            self.on_color
        } else {
            self.off_color
        }
    }

    /// Fill of a lit segment.
    pub fn on_color(&self) -> Rgb {
        self.on_color
    }

    /// Fill of a dark segment.
    pub fn off_color(&self) -> Rgb {
        self.off_color
    }

    /// Pattern of the digit at `position`.
    #[inline]
    pub fn pattern(&self, position: DigitPosition) -> SegmentPattern {
        self.patterns[position.index()]
    }

    /// Returns true if `segment` of the digit at `position` is lit.
    #[inline]
    pub fn is_lit(&self, position: DigitPosition, segment: Segment) -> bool {
        self.pattern(position).is_lit(segment)
    }

    /// Patterns in output order: ones, tens, hundreds.
    pub fn patterns(&self) -> &[SegmentPattern; DIGIT_COUNT] {
        &self.patterns
    }
}

/// Cached view of the output wires, used for rendering.
#[derive(Clone, Debug)]
pub struct DisplayState {
    observed: [Option<u64>; OUTPUT_COUNT],
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Creates a display that has not observed anything yet.
    pub const fn new() -> Self {
        Self {
            observed: [None; OUTPUT_COUNT],
        }
    }

    /// Copies all 12 observable output values from the bus.
    pub fn observe<O: OutputBus>(&mut self, outputs: &O) {
        for (index, slot) in self.observed.iter_mut().enumerate() {
            *slot = outputs.read(index);
        }
    }

    /// Takes the output bits directly, without going through a bus.
    pub fn observe_bits(&mut self, bits: &OutputBits) {
        for (index, slot) in self.observed.iter_mut().enumerate() {
            *slot = bits.get(index);
        }
    }

    /// Forgets everything observed; the display goes back to "000".
    pub fn reset(&mut self) {
        self.observed = [None; OUTPUT_COUNT];
    }

    /// Digit currently shown at `position`.
    pub fn digit(&self, position: DigitPosition) -> u8 {
        let start = position.offset();
        let mut nibble = [None; NIBBLE_BITS];
        nibble.copy_from_slice(&self.observed[start..start + NIBBLE_BITS]);
        decode_nibble(&nibble)
    }

    /// All three digits currently shown.
    pub fn digits(&self) -> BcdDigits {
        BcdDigits {
            ones: self.digit(DigitPosition::Ones),
            tens: self.digit(DigitPosition::Tens),
            hundreds: self.digit(DigitPosition::Hundreds),
        }
    }

    /// Lit state of each segment at `position`, in order `a` through `g`.
    pub fn segments(&self, position: DigitPosition) -> [bool; SEGMENT_COUNT] {
        segments_for(self.digit(position)).to_array()
    }

    /// Frame for the digits currently shown, in the default colors.
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::from_digits(&self.digits())
    }

    /// Draws the current frame with the fills from `config`.
    pub fn render<R: SegmentRenderer>(
        &self,
        renderer: &mut R,
        config: &DisplayConfig,
    ) -> Result<(), R::Error> {
        renderer.render(&self.frame().with_colors(config))
    }

    /// The three digits as text, most significant first.
    pub fn to_text(&self) -> HString<DIGIT_COUNT> {
        let mut text = HString::new();
        for position in DigitPosition::ALL.iter().rev() {
            // Digits are at most 15 when decoded from 4 bits
            let c = char::from_digit(u32::from(self.digit(*position)), 16).unwrap_or('?');
            // Capacity is exactly one char per digit
            let pushed = text.push(c);
            debug_assert!(pushed.is_ok());
        }
        text
    }
}
