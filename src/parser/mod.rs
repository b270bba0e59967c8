//! Parsers for repix input documents.
//!
//! Pixel maps are JSON objects with a single required field:
//!
//! ```json
//! { "pixels": { "0,0": [255, 0, 0], "3,4": [0, 0, 255] } }
//! ```
//!
//! Keys are `"x,y"` coordinates of non-negative integers and values are
//! `[r, g, b]` arrays of integers in `0..=255`.
//!
//! # Usage
//!
//! ```ignore
//! use repix::parser::parse_pixel_map;
//!
//! let bytes = std::fs::read("punk.json")?;
//! let map = parse_pixel_map(&bytes)?;
//! println!("{} pixels", map.len());
//! ```

mod pixels;

pub use pixels::{parse_modifications, parse_pixel_map, to_json};
