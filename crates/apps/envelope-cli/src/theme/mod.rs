//! Theme system for the envelope terminal output.
//!
//! A single palette is built in; `color = false` in the config swaps it for
//! the monochrome theme.

pub mod theme;

pub use theme::Theme;
