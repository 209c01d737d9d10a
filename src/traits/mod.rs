//! Trait definitions for the host seams.
//!
//! # Submodules
//!
//! - `bus`: input and output signal lines
//! - `render`: seven-segment rendering
//!
//! The component only talks to its surroundings through these traits, so the
//! same encoder and display state run inside any simulator, a terminal
//! program, or the test suite.

pub mod bus;
pub mod render;

pub use bus::*;
pub use render::*;
