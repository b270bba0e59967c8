//! Core domain types for repix.
//!
//! - `Coordinate` - logical pixel position, encoded as `"x,y"`
//! - `Colour` - RGB colour values
//! - `PixelMap` - sparse coordinate to colour mapping
//! - `ModificationSet` - caller-owned overrides layered on a map
//! - `Cursor` - editing cursor drawn as a render-time overlay

mod colour;
mod coord;
mod cursor;
mod modifications;
mod pixel_map;

pub use colour::Colour;
pub use coord::Coordinate;
pub use cursor::{Cursor, Direction};
pub use modifications::ModificationSet;
pub use pixel_map::PixelMap;
