//! Canvas bounds and scale factor selection.

use crate::error::{RepixError, Result};
use crate::types::{Coordinate, PixelMap};

/// Logical canvas size: one past the largest x and y in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Whether a coordinate lies inside `[0, width) x [0, height)`.
    pub fn contains(self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }
}

/// Compute the logical canvas size of a map.
///
/// Fails with [`RepixError::EmptyMap`] when the map has no entries, and with
/// [`RepixError::OutOfRange`] when a coordinate sits at `u32::MAX`, where
/// `max + 1` has no representation.
pub fn compute_bounds(map: &PixelMap) -> Result<Bounds> {
    let mut coords = map.coordinates();
    let first = coords.next().ok_or(RepixError::EmptyMap)?;

    let (max_x, max_y) = coords.fold((first.x, first.y), |(mx, my), c| (mx.max(c.x), my.max(c.y)));

    match (max_x.checked_add(1), max_y.checked_add(1)) {
        (Some(width), Some(height)) => Ok(Bounds { width, height }),
        _ => {
            let coordinate = map
                .coordinates()
                .find(|c| c.x == u32::MAX || c.y == u32::MAX)
                .unwrap_or(Coordinate::new(max_x, max_y));
            Err(RepixError::OutOfRange { coordinate })
        }
    }
}

/// Largest integer magnification that keeps both sides within `max_dimension`.
///
/// A canvas side wider than `max_dimension` would need a factor of zero;
/// that is reported as [`RepixError::ScaleTooSmall`].
pub fn compute_scale_factor(width: u32, height: u32, max_dimension: u32) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(RepixError::EmptyMap);
    }

    let scale = (max_dimension / width).min(max_dimension / height);
    if scale == 0 {
        return Err(RepixError::ScaleTooSmall {
            width,
            height,
            max_dimension,
        });
    }

    Ok(scale)
}
