//! LSB-first bit packing at the component boundary.
//!
//! Inputs arrive as eight separate lines and digits leave as separate output
//! lines, so values are split into and reassembled from individual bits here.
//! Only bit 0 of each line is significant.

use crate::pins::{INPUT_COUNT, NIBBLE_BITS};

/// Reassembles the input value from the eight input lines (index 0 = LSB).
pub fn pack_inputs(lines: &[u64; INPUT_COUNT]) -> u64 {
    lines
        .iter()
        .enumerate()
        .fold(0, |acc, (i, line)| acc | ((line & 1) << i))
}

/// Splits a digit into four output bits, LSB first.
pub fn encode_nibble(digit: u8) -> [u64; NIBBLE_BITS] {
    let mut bits = [0; NIBBLE_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = u64::from((digit >> i) & 1);
    }
    bits
}

/// Reassembles a digit from four observed bits, LSB first.
///
/// Returns 0 if any bit has not been observed yet.
pub fn decode_nibble(bits: &[Option<u64>; NIBBLE_BITS]) -> u8 {
    let mut digit = 0;
    for (i, bit) in bits.iter().enumerate() {
        match bit {
            Some(value) => digit |= ((value & 1) as u8) << i,
            None => return 0,
        }
    }
    digit
}
