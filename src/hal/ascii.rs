//! Terminal renderer drawing the digits with `_` and `|`.
//!
//! Each digit is a 3x3 cell, hundreds on the left:
//!
//! ```text
//!  _   _   _
//!  _|  _| |_
//! |_   _|  _|
//! ```

use core::fmt::{self, Write};

use heapless::String as HString;

use crate::display::DisplayFrame;
use crate::pins::{DigitPosition, DIGIT_COUNT};
use crate::segments::{Segment, SegmentPattern};
use crate::traits::SegmentRenderer;

/// Character width of one rendered row.
pub const ROW_WIDTH: usize = DIGIT_COUNT * 3 + (DIGIT_COUNT - 1);

/// Number of rendered rows.
pub const ROW_COUNT: usize = 3;

type Row = HString<ROW_WIDTH>;

/// Renders frames as three rows of text.
///
/// Plain text has no fill, so the frame colors are not drawn; a dark
/// segment is a blank.
///
/// # Example
///
/// ```rust
/// use seven_by_three::display::DisplayFrame;
/// use seven_by_three::hal::AsciiRenderer;
/// use seven_by_three::traits::SegmentRenderer;
/// use seven_by_three::bcd::convert;
///
/// let mut renderer = AsciiRenderer::new();
/// renderer.render(&DisplayFrame::from_digits(&convert(17))).unwrap();
///
/// assert_eq!(renderer.rows()[1], "| |   |   |");
/// ```
#[derive(Debug, Default, Clone)]
pub struct AsciiRenderer {
    rows: [Row; ROW_COUNT],
}

impl AsciiRenderer {
    /// Creates a renderer with empty rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered rows, top first.
    pub fn rows(&self) -> [&str; ROW_COUNT] {
        [
            self.rows[0].as_str(),
            self.rows[1].as_str(),
            self.rows[2].as_str(),
        ]
    }
}

fn mark(pattern: SegmentPattern, segment: Segment, on: char) -> char {
    if pattern.is_lit(segment) {
        on
    } else {
        ' '
    }
}

/// The three characters of `row` for one digit.
fn cell(pattern: SegmentPattern, row: usize) -> [char; 3] {
    match row {
        0 => [' ', mark(pattern, Segment::A, '_'), ' '],
        1 => [
            mark(pattern, Segment::F, '|'),
            mark(pattern, Segment::G, '_'),
            mark(pattern, Segment::B, '|'),
        ],
        _ => [
            mark(pattern, Segment::E, '|'),
            mark(pattern, Segment::D, '_'),
            mark(pattern, Segment::C, '|'),
        ],
    }
}

impl SegmentRenderer for AsciiRenderer {
    type Error = fmt::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.clear()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        for row in self.rows.iter_mut() {
            row.clear();
        }
        Ok(())
    }

    fn render(&mut self, frame: &DisplayFrame) -> Result<(), Self::Error> {
        self.clear()?;
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (i, position) in DigitPosition::ALL.iter().rev().enumerate() {
                if i > 0 {
                    row.write_char(' ')?;
                }
                for c in cell(frame.pattern(*position), r) {
                    row.write_char(c)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
