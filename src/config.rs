//! Display configuration.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::config::{DisplayConfig, Rgb};
//!
//! // Use defaults
//! let config = DisplayConfig::default();
//! assert_eq!(config.bits, 1);
//!
//! // Or customize
//! let config = DisplayConfig::default()
//!     .with_bits(1)
//!     .with_on_color(Rgb::new(0, 255, 0))
//!     .with_label("Counter");
//! assert!(config.validate().is_ok());
//! ```

use heapless::String as HString;

use crate::error::{Error, Result};

/// Maximum length of the display label.
pub const MAX_LABEL: usize = 32;

/// Widest data width a line may carry.
pub const MAX_BITS: u8 = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_LABEL>;

/// Create a ShortString from a &str, truncating on a UTF-8 boundary if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    let take = s.len().min(MAX_LABEL);
    let valid_end = s
        .char_indices()
        .take_while(|(i, c)| i + c.len_utf8() <= take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Colors
// ============================================================================

/// An RGB fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Builds a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default color of a lit segment.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    /// Color of a dark segment.
    pub const DARK_GRAY: Rgb = Rgb::new(169, 169, 169);
}

// ============================================================================
// Display Config
// ============================================================================

/// Configuration of one display instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Data width of every input and output line.
    pub bits: u8,
    /// Fill of a lit segment.
    pub on_color: Rgb,
    /// Fill of a dark segment.
    pub off_color: Rgb,
    /// Label shown in the host's component library.
    pub label: ShortString,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bits: 1,
            on_color: Rgb::RED,
            off_color: Rgb::DARK_GRAY,
            label: short_string(crate::pins::COMPONENT.name),
        }
    }
}

impl DisplayConfig {
    /// Set the data width
    pub fn with_bits(mut self, bits: u8) -> Self {
        self.bits = bits;
        self
    }

    /// Set the lit segment color
    pub fn with_on_color(mut self, color: Rgb) -> Self {
        self.on_color = color;
        self
    }

    /// Set the dark segment color
    pub fn with_off_color(mut self, color: Rgb) -> Self {
        self.off_color = color;
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = short_string(label);
        self
    }

    /// Fill color for a segment in the given state.
    pub fn color_for(&self, lit: bool) -> Rgb {
        if lit {
            self.on_color
        } else {
            self.off_color
        }
    }

    /// Checks that the data width is usable.
    pub fn validate(&self) -> Result<()> {
        if self.bits == 0 || self.bits > MAX_BITS {
            return Err(Error::InvalidBitWidth(self.bits));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
