//! Rendering module for repix.
//!
//! Picks a canvas size and scale factor for a pixel map, composites it into
//! an RGB raster, and encodes the result as PNG.

mod bounds;
mod compositor;
mod png;

pub use bounds::{compute_bounds, compute_scale_factor, Bounds};
pub use compositor::Compositor;
pub use png::{encode_png, write_png};
