// UI module for envelope-cli
//
// Terminal layout primitives shared by every handler. Colors come from the
// active `Theme`; handlers never print styled text directly.

pub mod layout;

pub use layout::{Layout, LayoutBuilder};
