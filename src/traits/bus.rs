//! Signal bus traits connecting the component to a host simulator.
//!
//! A host exposes the wires around the component through these traits. The
//! component never owns the wires: it reads inputs from an [`InputBus`] when
//! notified of a change, and publishes its outputs to an [`OutputBus`].
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`InputBus`] | The 8 binary input lines |
//! | [`OutputBus`] | The 12 BCD output lines |
//!
//! For tests and desktop use, see the mocks in [`crate::hal::mock`].
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::hal::MockInputs;
//! use seven_by_three::traits::InputBus;
//!
//! let mut inputs = MockInputs::new();
//! inputs.set_value(5);
//! assert_eq!(inputs.value(0), Some(1));
//! assert_eq!(inputs.value(1), Some(0));
//! assert_eq!(inputs.value(2), Some(1));
//! ```

/// Read side of the input wires.
///
/// Lines are indexed LSB-first: line 0 carries the least significant bit.
pub trait InputBus {
    /// Number of lines the host provides.
    fn len(&self) -> usize;

    /// Returns true if the host provides no lines.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Data width of line `index`, or `None` if nothing is wired to it.
    fn bits(&self, index: usize) -> Option<u8>;

    /// Current value of line `index`, or `None` if it has no value.
    fn value(&self, index: usize) -> Option<u64>;
}

/// The output wires.
///
/// Writes come from the evaluation step; reads are what an observer (the
/// renderer side) sees on the wire.
pub trait OutputBus {
    /// Error type for output operations.
    type Error;

    /// Drive output line `index` with `value`.
    fn write(&mut self, index: usize, value: u64) -> Result<(), Self::Error>;

    /// Observable value of output line `index`, or `None` before the first
    /// write.
    fn read(&self, index: usize) -> Option<u64>;
}
