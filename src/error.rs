//! Error type for wiring and evaluating the encoder.
//!
//! Only conditions a host can actually trigger are represented here. An
//! out-of-range digit reaching the segment decoder is an internal invariant
//! violation and panics instead (see [`crate::segments::segments_for`]).

use core::convert::Infallible;
use core::fmt;

/// A specialized `Result` where the error is this crate's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while configuring, wiring, or evaluating the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The configured data width is outside `1..=64`.
    InvalidBitWidth(u8),

    /// An input line is not wired to anything.
    MissingInput {
        /// Index of the input line (0 = least significant bit).
        pin: usize,
    },

    /// A wired input line does not have the configured data width.
    BitWidthMismatch {
        /// Index of the input line (0 = least significant bit).
        pin: usize,
        /// Width the display was configured with.
        expected: u8,
        /// Width reported by the connected line.
        found: u8,
    },

    /// An input line had no value when the inputs were read.
    InputUnavailable {
        /// Index of the input line (0 = least significant bit).
        pin: usize,
    },

    /// Writing to the output bus failed.
    Bus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBitWidth(bits) => {
                write!(f, "invalid bit width {} (expected 1..=64)", bits)
            }
            Error::MissingInput { pin } => write!(f, "input b{} is not connected", pin + 1),
            Error::BitWidthMismatch {
                pin,
                expected,
                found,
            } => write!(
                f,
                "input b{} has {} bits, expected {}",
                pin + 1,
                found,
                expected
            ),
            Error::InputUnavailable { pin } => write!(f, "input b{} has no value", pin + 1),
            Error::Bus => write!(f, "error writing to output bus"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Error::Bus
    }
}

impl From<()> for Error {
    fn from(_: ()) -> Self {
        Error::Bus
    }
}
