//! # seven-by-three
//!
//! An 8-bit binary to decimal display block for logic simulators: eight
//! input bits become three BCD digits (ones, tens, hundreds) on twelve output
//! bits, and each digit is shown on a seven-segment display.
//!
//! ## Features
//!
//! - **Exact conversion**: repeated division by ten, no lossy arithmetic
//! - **Fixed decode table**: one constant 7-bit pattern per digit
//! - **Host seams**: traits for input lines, output lines and rendering
//! - **`no_std` core**: the conversion, decode and state need no allocator
//!
//! ## Architecture
//!
//! - `bcd` - Binary to ones/tens/hundreds conversion
//! - `segments` - Digit to seven-segment pattern lookup
//! - `packing` - LSB-first bit packing at the pin boundary
//! - `encoder` - Evaluation node computing the 12 output bits
//! - `display` - Render state decoded from the observed outputs
//! - `component` - Adapter wiring both halves to the host callbacks
//! - `traits` - Host seams (buses, renderer)
//! - `hal` - Concrete implementations (mocks, terminal renderer)
//!
//! ## Example
//!
//! ```rust
//! use seven_by_three::{
//!     DisplayConfig, SevenByThree,
//!     hal::{MockInputs, MockOutputs},
//!     pins::DigitPosition,
//!     segments::Segment,
//! };
//!
//! let mut display = SevenByThree::new(DisplayConfig::default()).unwrap();
//! let mut inputs = MockInputs::new();
//! let mut outputs = MockOutputs::new();
//! display.connect(&inputs).unwrap();
//!
//! // Drive the input lines and evaluate
//! inputs.set_value(201);
//! display.step(&inputs, &mut outputs).unwrap();
//!
//! // Query the segments the renderer would light
//! let frame = display.display().frame();
//! assert!(frame.is_lit(DigitPosition::Ones, Segment::B));
//! assert!(!frame.is_lit(DigitPosition::Ones, Segment::A));
//! assert_eq!(display.display().to_text().as_str(), "201");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Binary to BCD digit conversion.
pub mod bcd;
/// Host component adapter.
pub mod component;
/// Display configuration.
pub mod config;
/// Render state decoded from the output lines.
pub mod display;
/// Evaluation node computing the output bits.
pub mod encoder;
/// Error type.
pub mod error;
/// Trait implementations: mocks and a terminal renderer.
pub mod hal;
/// LSB-first bit packing.
pub mod packing;
/// Pin contract.
pub mod pins;
/// Seven-segment decode table.
pub mod segments;
/// Host seam traits.
pub mod traits;

// Re-exports for convenience
pub use bcd::{convert, BcdDigits};
pub use component::SevenByThree;
pub use config::{DisplayConfig, Rgb};
pub use display::{DisplayFrame, DisplayState};
pub use encoder::{BcdEncoder, OutputBits};
pub use error::{Error, Result};
pub use pins::DigitPosition;
pub use segments::{is_segment_lit, segments_for, Segment, SegmentPattern, LOOKUP};
pub use traits::{InputBus, OutputBus, SegmentRenderer};
