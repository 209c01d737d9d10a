//! Mock implementations for testing without a host simulator.
//!
//! This module provides test doubles for the bus and render traits,
//! enabling development and testing on desktop without a simulator.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockInputs`] | [`InputBus`] | Eight settable input lines |
//! | [`MockOutputs`] | [`OutputBus`] | Records written output values |
//! | [`MockRenderer`] | [`SegmentRenderer`] | Tracks rendered frames |
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::{DisplayConfig, SevenByThree};
//! use seven_by_three::hal::{MockInputs, MockOutputs, MockRenderer};
//!
//! let mut display = SevenByThree::new(DisplayConfig::default()).unwrap();
//! let mut inputs = MockInputs::new();
//! let mut outputs = MockOutputs::new();
//! let mut renderer = MockRenderer::new();
//!
//! inputs.set_value(128);
//! display.step(&inputs, &mut outputs).unwrap();
//! display.render(&mut renderer).unwrap();
//!
//! assert_eq!(display.display().to_text().as_str(), "128");
//! assert_eq!(renderer.render_count, 1);
//! ```
//!
//! [`InputBus`]: crate::traits::InputBus
//! [`OutputBus`]: crate::traits::OutputBus
//! [`SegmentRenderer`]: crate::traits::SegmentRenderer

extern crate alloc;
use alloc::vec::Vec;

use crate::display::DisplayFrame;
use crate::pins::{INPUT_COUNT, OUTPUT_COUNT};
use crate::traits::{InputBus, OutputBus, SegmentRenderer};

// ============================================================================
// Bus Mocks
// ============================================================================

/// Mock input lines for testing.
///
/// All eight lines start wired, 1 bit wide, and low. Drive them together with
/// [`set_value`](Self::set_value) or one at a time with
/// [`set_line`](Self::set_line).
///
/// # Example
///
/// ```rust
/// use seven_by_three::hal::MockInputs;
/// use seven_by_three::traits::InputBus;
///
/// let mut inputs = MockInputs::new();
/// inputs.set_value(0b1000_0001);
///
/// assert_eq!(inputs.value(0), Some(1));
/// assert_eq!(inputs.value(7), Some(1));
/// assert_eq!(inputs.value(3), Some(0));
///
/// inputs.disconnect(3);
/// assert_eq!(inputs.bits(3), None);
/// ```
#[derive(Debug, Clone)]
pub struct MockInputs {
    /// Width of each line, `None` if unwired.
    pub widths: [Option<u8>; INPUT_COUNT],
    /// Value of each line, `None` if it has none.
    pub values: [Option<u64>; INPUT_COUNT],
}

impl MockInputs {
    /// Creates eight wired 1-bit lines, all low.
    pub fn new() -> Self {
        Self {
            widths: [Some(1); INPUT_COUNT],
            values: [Some(0); INPUT_COUNT],
        }
    }

    /// Sets the width of every line.
    pub fn with_bits(mut self, bits: u8) -> Self {
        self.widths = [Some(bits); INPUT_COUNT];
        self
    }

    /// Drives all eight lines from `value`, LSB on line 0.
    pub fn set_value(&mut self, value: u64) {
        for (i, line) in self.values.iter_mut().enumerate() {
            *line = Some((value >> i) & 1);
        }
    }

    /// Drives one line.
    pub fn set_line(&mut self, index: usize, value: u64) {
        self.values[index] = Some(value);
    }

    /// Sets the width of one line.
    pub fn set_line_bits(&mut self, index: usize, bits: u8) {
        self.widths[index] = Some(bits);
    }

    /// Removes the value of one line, leaving it wired.
    pub fn clear_line(&mut self, index: usize) {
        self.values[index] = None;
    }

    /// Unwires one line.
    pub fn disconnect(&mut self, index: usize) {
        self.widths[index] = None;
        self.values[index] = None;
    }
}

impl Default for MockInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBus for MockInputs {
    fn len(&self) -> usize {
        INPUT_COUNT
    }

    fn bits(&self, index: usize) -> Option<u8> {
        self.widths.get(index).copied().flatten()
    }

    fn value(&self, index: usize) -> Option<u64> {
        self.values.get(index).copied().flatten()
    }
}

/// Mock output lines for testing.
///
/// Records every write. Lines that were never written read as `None`.
///
/// # Example
///
/// ```rust
/// use seven_by_three::hal::MockOutputs;
/// use seven_by_three::traits::OutputBus;
///
/// let mut outputs = MockOutputs::new();
/// assert_eq!(outputs.read(0), None);
///
/// outputs.write(0, 1).unwrap();
/// assert_eq!(outputs.read(0), Some(1));
/// assert_eq!(outputs.write_count, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockOutputs {
    /// Last value written to each line.
    pub values: [Option<u64>; OUTPUT_COUNT],
    /// Number of times `write` was called.
    pub write_count: usize,
    /// When set, every write fails.
    pub fail_writes: bool,
    /// When set, writes fail once this many have succeeded.
    pub fail_after: Option<usize>,
}

impl MockOutputs {
    /// Creates twelve unwritten output lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail.
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Accepts `writes` writes, then fails the rest.
    pub fn failing_after(mut self, writes: usize) -> Self {
        self.fail_after = Some(writes);
        self
    }
}

impl OutputBus for MockOutputs {
    type Error = ();

    fn write(&mut self, index: usize, value: u64) -> Result<(), ()> {
        if self.fail_writes || self.fail_after.map_or(false, |n| self.write_count >= n) {
            return Err(());
        }
        let slot = self.values.get_mut(index).ok_or(())?;
        *slot = Some(value);
        self.write_count += 1;
        Ok(())
    }

    fn read(&self, index: usize) -> Option<u64> {
        self.values.get(index).copied().flatten()
    }
}

// ============================================================================
// Render Mock
// ============================================================================

/// Mock renderer for testing.
///
/// Keeps every frame it was asked to draw.
///
/// # Example
///
/// ```rust
/// use seven_by_three::hal::MockRenderer;
/// use seven_by_three::traits::SegmentRenderer;
///
/// let mut renderer = MockRenderer::new();
/// renderer.init().unwrap();
/// assert!(renderer.initialized);
/// assert_eq!(renderer.render_count, 0);
/// ```
#[derive(Debug, Default)]
pub struct MockRenderer {
    /// The last frame that was rendered.
    pub last_frame: Option<DisplayFrame>,
    /// Every rendered frame, oldest first.
    pub frames: Vec<DisplayFrame>,
    /// Number of times render() was called.
    pub render_count: usize,
    /// Whether init() was called.
    pub initialized: bool,
}

impl MockRenderer {
    /// Creates a new mock renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SegmentRenderer for MockRenderer {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.last_frame = None;
        Ok(())
    }

    fn render(&mut self, frame: &DisplayFrame) -> Result<(), ()> {
        self.last_frame = Some(*frame);
        self.frames.push(*frame);
        self.render_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
