//! The evaluation node: 8 binary inputs to 12 BCD output bits.
//!
//! [`BcdEncoder`] follows the usual two-phase cycle of a combinational node
//! in an event-driven simulator:
//!
//! 1. [`read_inputs`](BcdEncoder::read_inputs) runs when an input changes. It
//!    reads all eight lines, converts the value and computes every output bit
//!    into a private buffer.
//! 2. [`write_outputs`](BcdEncoder::write_outputs) publishes that buffer.
//!
//! Outputs are never written while the inputs are being read, so no partial
//! result is observable.
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::{BcdEncoder, DisplayConfig};
//! use seven_by_three::hal::{MockInputs, MockOutputs};
//! use seven_by_three::traits::OutputBus;
//!
//! let mut encoder = BcdEncoder::new(DisplayConfig::default()).unwrap();
//! let mut inputs = MockInputs::new();
//! let mut outputs = MockOutputs::new();
//!
//! encoder.connect(&inputs).unwrap();
//! inputs.set_value(42);
//! encoder.read_inputs(&inputs).unwrap();
//! encoder.write_outputs(&mut outputs).unwrap();
//!
//! // ones = 2 -> o2 set
//! assert_eq!(outputs.read(1), Some(1));
//! // tens = 4 -> t3 set
//! assert_eq!(outputs.read(6), Some(1));
//! ```

use log::{debug, trace, warn};

use crate::bcd::{convert, BcdDigits};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::packing::{encode_nibble, pack_inputs};
use crate::pins::{DigitPosition, INPUT_COUNT, NIBBLE_BITS, OUTPUT_COUNT};
use crate::traits::{InputBus, OutputBus};

/// The twelve output bits of one evaluation, in output order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputBits([u64; OUTPUT_COUNT]);

impl OutputBits {
    /// Packs each digit into its nibble.
    pub fn from_digits(digits: &BcdDigits) -> Self {
        let mut bits = [0; OUTPUT_COUNT];
        for position in DigitPosition::ALL {
            let nibble = encode_nibble(digits.get(position));
            let start = position.offset();
            bits[start..start + NIBBLE_BITS].copy_from_slice(&nibble);
        }
        Self(bits)
    }

    /// Value of output line `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied()
    }

    /// The four bits of one digit, LSB first.
    pub fn nibble(&self, position: DigitPosition) -> [u64; NIBBLE_BITS] {
        let start = position.offset();
        let mut nibble = [0; NIBBLE_BITS];
        nibble.copy_from_slice(&self.0[start..start + NIBBLE_BITS]);
        nibble
    }

    /// All output bits in output order.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

/// Converts the 8 input lines into three BCD nibbles.
///
/// Each instance owns its last computed digits and output bits; nothing is
/// shared between instances.
#[derive(Clone, Debug)]
pub struct BcdEncoder {
    bits: u8,
    digits: BcdDigits,
    outputs: OutputBits,
}

impl BcdEncoder {
    /// Create an encoder for lines of the configured width.
    pub fn new(config: DisplayConfig) -> Result<Self> {
        config.validate()?;
        debug!("bcd encoder created with {}-bit lines", config.bits);
        Ok(Self {
            bits: config.bits,
            digits: BcdDigits::ZERO,
            outputs: OutputBits::default(),
        })
    }

    /// Checks the wiring: all 8 lines present with the configured width.
    pub fn connect<I: InputBus>(&self, inputs: &I) -> Result<()> {
        for pin in 0..INPUT_COUNT {
            let found = match inputs.bits(pin) {
                Some(found) if pin < inputs.len() => found,
                _ => {
                    warn!("input b{} is not connected", pin + 1);
                    return Err(Error::MissingInput { pin });
                }
            };
            if found != self.bits {
                warn!(
                    "input b{} has {} bits, expected {}",
                    pin + 1,
                    found,
                    self.bits
                );
                return Err(Error::BitWidthMismatch {
                    pin,
                    expected: self.bits,
                    found,
                });
            }
        }
        debug!("bcd encoder connected to {} inputs", INPUT_COUNT);
        Ok(())
    }

    /// Reads all inputs and computes the output bits.
    ///
    /// Call whenever an input changes. Nothing is written to the outputs
    /// here; call [`write_outputs`](Self::write_outputs) afterwards.
    pub fn read_inputs<I: InputBus>(&mut self, inputs: &I) -> Result<BcdDigits> {
        let mut lines = [0u64; INPUT_COUNT];
        for (pin, line) in lines.iter_mut().enumerate() {
            *line = inputs.value(pin).ok_or(Error::InputUnavailable { pin })?;
        }

        let value = pack_inputs(&lines);
        let digits = convert(value);
        self.digits = digits;
        self.outputs = OutputBits::from_digits(&digits);

        trace!(
            "inputs {} -> digits {}{}{}",
            value,
            digits.hundreds,
            digits.tens,
            digits.ones
        );
        Ok(digits)
    }

    /// Publishes the output bits computed by the last
    /// [`read_inputs`](Self::read_inputs).
    ///
    /// Stops at the first failed write. Lines before it already carry the
    /// new bits and later lines keep their old values, so the output bus
    /// may show a mix of two results until this is called again.
    pub fn write_outputs<O: OutputBus>(
        &self,
        outputs: &mut O,
    ) -> core::result::Result<(), O::Error> {
        for (index, bit) in self.outputs.as_slice().iter().enumerate() {
            outputs.write(index, *bit)?;
        }
        Ok(())
    }

    /// Digits of the last evaluation.
    pub fn digits(&self) -> BcdDigits {
        self.digits
    }

    /// Output bits of the last evaluation.
    pub fn outputs(&self) -> &OutputBits {
        &self.outputs
    }

    /// Configured data width of the lines.
    pub fn bits(&self) -> u8 {
        self.bits
    }
}
