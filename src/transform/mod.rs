//! Map-to-map transforms applied before rendering.
//!
//! Both transforms take their input by reference and return a fresh map;
//! caller-owned maps are never mutated.

mod merge;
mod shuffle;

pub use merge::merge;
pub use shuffle::shuffle;
