//! Concrete implementations of the traits in [`crate::traits`].
//!
//! # Available Implementations
//!
//! - `mock`: Test doubles for the buses and the renderer
//! - `ascii`: Terminal renderer used by the command-line demo

pub mod ascii;
pub mod mock;

pub use ascii::AsciiRenderer;
pub use mock::*;
