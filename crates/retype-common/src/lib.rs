//! Common types shared by the retype crates.
//!
//! - Zero-based `Position` coordinates
//! - `LineMap` for offset -> (line, character) conversion

// Position types and the line-break index
pub mod position;
pub use position::{LineMap, Position};
