//! Binary to decimal digit conversion.
//!
//! [`convert`] splits an unsigned value into its ones, tens and hundreds
//! digits by repeated division by ten. Only three digits are kept, so values
//! above 999 lose their upper digits. An 8-bit source never exceeds 255.
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::bcd::convert;
//!
//! let digits = convert(255);
//! assert_eq!((digits.ones, digits.tens, digits.hundreds), (5, 5, 2));
//! assert_eq!(digits.value(), 255);
//! ```

use crate::pins::{DigitPosition, DIGIT_COUNT};

/// The three decimal digits of a value, each in `0..=9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BcdDigits {
    /// Least significant digit.
    pub ones: u8,
    /// Middle digit.
    pub tens: u8,
    /// Most significant digit.
    pub hundreds: u8,
}

impl BcdDigits {
    /// Digits of zero.
    pub const ZERO: BcdDigits = BcdDigits {
        ones: 0,
        tens: 0,
        hundreds: 0,
    };

    /// Returns the digit at `position`.
    #[inline]
    pub const fn get(&self, position: DigitPosition) -> u8 {
        match position {
            DigitPosition::Ones => self.ones,
            DigitPosition::Tens => self.tens,
            DigitPosition::Hundreds => self.hundreds,
        }
    }

    /// Digits in output order: ones, tens, hundreds.
    #[inline]
    pub const fn to_array(&self) -> [u8; DIGIT_COUNT] {
        [self.ones, self.tens, self.hundreds]
    }

    /// Recombines the digits into the value they represent.
    pub fn value(&self) -> u16 {
        u16::from(self.ones) + 10 * u16::from(self.tens) + 100 * u16::from(self.hundreds)
    }
}

/// Splits `value` into ones, tens and hundreds.
///
/// Values above 999 keep only their low three decimal digits.
pub fn convert(value: u64) -> BcdDigits {
    let mut rest = value;
    let ones = (rest % 10) as u8;
    rest /= 10;
    let tens = (rest % 10) as u8;
    rest /= 10;
    let hundreds = (rest % 10) as u8;

    BcdDigits {
        ones,
        tens,
        hundreds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // convert
    // =========================================================================

    #[test]
    fn zero_is_all_zero_digits() {
        assert_eq!(convert(0), BcdDigits::ZERO);
    }

    #[test]
    fn max_byte() {
        let digits = convert(255);
        assert_eq!(digits.ones, 5);
        assert_eq!(digits.tens, 5);
        assert_eq!(digits.hundreds, 2);
    }

    #[test]
    fn every_byte_recombines_to_itself() {
        for v in 0..=255u64 {
            let d = convert(v);
            assert!(d.ones <= 9 && d.tens <= 9 && d.hundreds <= 9, "v={}", v);
            assert_eq!(
                u64::from(d.ones) + 10 * u64::from(d.tens) + 100 * u64::from(d.hundreds),
                v
            );
        }
    }

    #[test]
    fn single_and_double_digit_values() {
        assert_eq!(convert(7).to_array(), [7, 0, 0]);
        assert_eq!(convert(42).to_array(), [2, 4, 0]);
        assert_eq!(convert(100).to_array(), [0, 0, 1]);
    }

    #[test]
    fn overflow_above_999_is_dropped() {
        assert_eq!(convert(1234).to_array(), [4, 3, 2]);
        assert_eq!(convert(1000), BcdDigits::ZERO);
    }

    #[test]
    fn convert_is_idempotent() {
        for v in [0u64, 9, 10, 99, 128, 200, 255] {
            assert_eq!(convert(v), convert(v));
        }
    }

    // =========================================================================
    // BcdDigits
    // =========================================================================

    #[test]
    fn get_by_position() {
        let d = convert(137);
        assert_eq!(d.get(DigitPosition::Ones), 7);
        assert_eq!(d.get(DigitPosition::Tens), 3);
        assert_eq!(d.get(DigitPosition::Hundreds), 1);
    }

    #[test]
    fn value_recombines() {
        assert_eq!(convert(209).value(), 209);
        assert_eq!(BcdDigits::default().value(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digits_serialize() {
        let json = serde_json::to_string(&convert(42)).unwrap();
        assert_eq!(json, r#"{"ones":2,"tens":4,"hundreds":0}"#);
    }
}
