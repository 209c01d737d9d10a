//! Rendering abstraction for the three seven-segment digits.
//!
//! This module defines the [`SegmentRenderer`] trait. A renderer receives a
//! [`DisplayFrame`] holding the lit segments of each digit and their fill
//! colors, and decides how to show them (vector shapes in a simulator, text
//! in a terminal).

use crate::display::DisplayFrame;

/// Rendering trait for a three-digit seven-segment display.
///
/// # Example
///
/// ```ignore
/// use seven_by_three::traits::SegmentRenderer;
/// use seven_by_three::display::DisplayFrame;
///
/// struct MyCanvas { /* ... */ }
///
/// impl SegmentRenderer for MyCanvas {
///     type Error = ();
///
///     fn init(&mut self) -> Result<(), ()> { Ok(()) }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn render(&mut self, frame: &DisplayFrame) -> Result<(), ()> {
///         // Fill each segment polygon with the on or off color
///         Ok(())
///     }
/// }
/// ```
pub trait SegmentRenderer {
    /// Error type for render operations.
    type Error;

    /// Prepares the output surface.
    ///
    /// The owner of the renderer calls this once before the first frame;
    /// [`SevenByThree::render`](crate::SevenByThree::render) does not.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Clears the output surface.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draws one frame.
    ///
    /// May be called more often than the inputs change; every call must show
    /// the frame it is given.
    fn render(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error>;
}
