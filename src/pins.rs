//! Pin contract of the display component.
//!
//! The component has 8 single-bit inputs and 12 single-bit outputs. Inputs
//! are indexed LSB-first (`b1` is bit 0). Outputs are three consecutive
//! 4-bit groups in the order ones, tens, hundreds, each LSB-first:
//!
//! ```text
//! index:  0  1  2  3 | 4  5  6  7 | 8  9  10 11
//! name:   o1 o2 o3 o4| t1 t2 t3 t4| h1 h2 h3 h4
//! ```
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::pins::{DigitPosition, OUTPUT_PINS};
//!
//! let index = DigitPosition::Tens.output_index(2);
//! assert_eq!(index, 6);
//! assert_eq!(OUTPUT_PINS[index].name, "t3");
//! ```

/// Number of binary input lines.
pub const INPUT_COUNT: usize = 8;

/// Number of bits in one BCD digit.
pub const NIBBLE_BITS: usize = 4;

/// Number of decimal digit positions on the display.
pub const DIGIT_COUNT: usize = 3;

/// Number of output lines (three nibbles).
pub const OUTPUT_COUNT: usize = NIBBLE_BITS * DIGIT_COUNT;

/// One of the three decimal positions of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DigitPosition {
    /// Least significant decimal digit.
    Ones,
    /// Middle decimal digit.
    Tens,
    /// Most significant decimal digit.
    Hundreds,
}

impl DigitPosition {
    /// All positions in output order.
    pub const ALL: [DigitPosition; DIGIT_COUNT] = [
        DigitPosition::Ones,
        DigitPosition::Tens,
        DigitPosition::Hundreds,
    ];

    /// Position in output order (ones = 0).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            DigitPosition::Ones => 0,
            DigitPosition::Tens => 1,
            DigitPosition::Hundreds => 2,
        }
    }

    /// Index of the first output line of this digit's nibble.
    #[inline]
    pub const fn offset(self) -> usize {
        self.index() * NIBBLE_BITS
    }

    /// Output line index carrying `bit` (0 = LSB) of this digit.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 4`.
    #[inline]
    pub const fn output_index(self, bit: usize) -> usize {
        assert!(bit < NIBBLE_BITS, "BCD bit index out of range");
        self.offset() + bit
    }

    /// Returns the position as a lowercase string.
    pub const fn as_str(self) -> &'static str {
        match self {
            DigitPosition::Ones => "ones",
            DigitPosition::Tens => "tens",
            DigitPosition::Hundreds => "hundreds",
        }
    }
}

/// Name and help text of a single pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinDescription {
    /// Short pin label shown next to the pin.
    pub name: &'static str,
    /// Longer help text.
    pub description: &'static str,
}

const fn pin(name: &'static str, description: &'static str) -> PinDescription {
    PinDescription { name, description }
}

/// Input pins, index 0 (least significant) through 7.
pub const INPUT_PINS: [PinDescription; INPUT_COUNT] = [
    pin("b1", "first bit"),
    pin("b2", "second bit"),
    pin("b3", "third bit"),
    pin("b4", "fourth bit"),
    pin("b5", "fifth bit"),
    pin("b6", "sixth bit"),
    pin("b7", "seventh bit"),
    pin("b8", "eighth bit"),
];

/// Output pins in output order.
pub const OUTPUT_PINS: [PinDescription; OUTPUT_COUNT] = [
    pin("o1", "bit number 0 in ones' bcd"),
    pin("o2", "bit number 1 in ones' bcd"),
    pin("o3", "bit number 2 in ones' bcd"),
    pin("o4", "bit number 3 in ones' bcd"),
    pin("t1", "bit number 0 in tens' bcd"),
    pin("t2", "bit number 1 in tens' bcd"),
    pin("t3", "bit number 2 in tens' bcd"),
    pin("t4", "bit number 3 in tens' bcd"),
    pin("h1", "bit number 0 in hundreds' bcd"),
    pin("h2", "bit number 1 in hundreds' bcd"),
    pin("h3", "bit number 2 in hundreds' bcd"),
    pin("h4", "bit number 3 in hundreds' bcd"),
];

/// How the component presents itself in a host's component library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentDescription {
    /// Display name.
    pub name: &'static str,
    /// Library folder the component is listed under.
    pub library_path: &'static str,
    /// Short help text.
    pub description: &'static str,
}

/// Library entry for the three-digit display.
pub const COMPONENT: ComponentDescription = ComponentDescription {
    name: "8-bit Display",
    library_path: "8-bit Display/",
    description: "An 8 bit decimal display",
};
