//! repix - Pixel map renderer
//!
//! A library for turning sparse `"x,y" -> [r, g, b]` pixel maps into
//! scaled-up raster images, with optional colour overrides, colour
//! shuffling and a cursor overlay.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod transform;
pub mod types;

pub use config::{Config, RenderOptions};
pub use error::{RepixError, Result};
pub use parser::{parse_modifications, parse_pixel_map, to_json};
pub use pipeline::{BatchOutcome, RenderRequest, Rendered, Renderer, Summary};
pub use render::{compute_bounds, compute_scale_factor, encode_png, write_png, Bounds, Compositor};
pub use transform::{merge, shuffle};
pub use types::{Colour, Coordinate, Cursor, Direction, ModificationSet, PixelMap};
