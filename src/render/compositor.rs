//! Raster compositing.
//!
//! Paints each logical pixel as a `scale x scale` block on a black canvas,
//! then optionally draws a hollow cursor marker over one block.

use image::{Rgb, RgbImage};

use crate::config::RenderOptions;
use crate::error::{RepixError, Result};
use crate::types::{Coordinate, PixelMap};

use super::bounds::compute_bounds;

/// Draws pixel maps into RGB rasters.
pub struct Compositor {
    options: RenderOptions,
}

impl Compositor {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `map` at an integer `scale`.
    ///
    /// The canvas covers the map's bounds; gaps stay black. A `cursor`
    /// outside the bounds is ignored.
    pub fn render(&self, map: &PixelMap, scale: u32, cursor: Option<Coordinate>) -> Result<RgbImage> {
        let bounds = compute_bounds(map)?;

        let (width, height) = match (bounds.width.checked_mul(scale), bounds.height.checked_mul(scale)) {
            (Some(w), Some(h)) if scale > 0 => (w, h),
            _ => {
                return Err(RepixError::ScaleTooSmall {
                    width: bounds.width,
                    height: bounds.height,
                    max_dimension: self.options.max_dimension,
                })
            }
        };

        let mut img = RgbImage::new(width, height);

        for (coord, colour) in map.iter() {
            let rgb = Rgb(colour.to_rgb());
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(coord.x * scale + sx, coord.y * scale + sy, rgb);
                }
            }
        }

        if let Some(pos) = cursor.filter(|&c| bounds.contains(c)) {
            self.draw_cursor(&mut img, pos, scale);
        }

        Ok(img)
    }

    /// Paint the border band of the block at `pos`, leaving the interior.
    fn draw_cursor(&self, img: &mut RgbImage, pos: Coordinate, scale: u32) {
        let thickness = self.options.border_thickness(scale);
        let far = scale.saturating_sub(thickness);
        let rgb = Rgb(self.options.cursor_colour.to_rgb());

        let origin_x = u64::from(pos.x) * u64::from(scale);
        let origin_y = u64::from(pos.y) * u64::from(scale);

        for dy in 0..scale {
            for dx in 0..scale {
                let on_border = dx < thickness || dx >= far || dy < thickness || dy >= far;
                if !on_border {
                    continue;
                }

                let px = origin_x + u64::from(dx);
                let py = origin_y + u64::from(dy);
                if px < u64::from(img.width()) && py < u64::from(img.height()) {
                    img.put_pixel(px as u32, py as u32, rgb);
                }
            }
        }
    }
}
