//! The render pipeline.
//!
//! raw bytes -> parse -> merge modifications -> optional shuffle ->
//! bounds and scale -> composite.
//!
//! The pipeline holds no state between calls. Modifications and the cursor
//! are owned by the caller and passed in on every call.

use image::RgbImage;
use rand::Rng;
use serde::Serialize;

use crate::config::RenderOptions;
use crate::error::Result;
use crate::parser::parse_pixel_map;
use crate::render::{compute_bounds, compute_scale_factor, encode_png, Bounds, Compositor};
use crate::transform::{merge, shuffle};
use crate::types::{Coordinate, ModificationSet, PixelMap};

/// Per-call inputs besides the document itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Redistribute colours across coordinates after merging.
    pub shuffled: bool,
    pub modifications: &'a ModificationSet,
    /// Drawn unless it sits on a modified coordinate.
    pub cursor: Option<Coordinate>,
}

impl<'a> RenderRequest<'a> {
    /// A pristine render: no shuffle, no cursor.
    pub fn new(modifications: &'a ModificationSet) -> Self {
        Self {
            shuffled: false,
            modifications,
            cursor: None,
        }
    }

    pub fn shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }

    pub fn with_cursor(mut self, cursor: Option<Coordinate>) -> Self {
        self.cursor = cursor;
        self
    }
}

/// A finished raster.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub image: RgbImage,
    /// Logical canvas size before scaling.
    pub bounds: Bounds,
    pub scale: u32,
}

impl Rendered {
    /// Final `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Summary of what a render would produce, without compositing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pixels: usize,
    pub colours: usize,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub final_width: u32,
    pub final_height: u32,
}

/// Outcome of one item in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Caller-supplied identifier, usually a file name.
    pub name: String,
    pub result: Result<Rendered>,
}

/// Runs the pipeline with a fixed set of options.
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a raw pixel document.
    pub fn render<R: Rng + ?Sized>(
        &self,
        raw: &[u8],
        request: &RenderRequest<'_>,
        rng: &mut R,
    ) -> Result<Rendered> {
        let base = parse_pixel_map(raw)?;
        self.render_map(&base, request, rng)
    }

    /// Render an already parsed map.
    pub fn render_map<R: Rng + ?Sized>(
        &self,
        base: &PixelMap,
        request: &RenderRequest<'_>,
        rng: &mut R,
    ) -> Result<Rendered> {
        let mut map = merge(base, request.modifications);
        if request.shuffled {
            map = shuffle(&map, rng);
        }

        let bounds = compute_bounds(&map)?;
        let scale = compute_scale_factor(bounds.width, bounds.height, self.options.max_dimension)?;

        let cursor = request
            .cursor
            .filter(|&c| !request.modifications.contains(c));

        let image = Compositor::new(self.options).render(&map, scale, cursor)?;

        Ok(Rendered {
            image,
            bounds,
            scale,
        })
    }

    /// Render several documents with the same request.
    ///
    /// Each item succeeds or fails on its own.
    pub fn render_batch<R, I>(&self, inputs: I, request: &RenderRequest<'_>, rng: &mut R) -> Vec<BatchOutcome>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        inputs
            .into_iter()
            .map(|(name, raw)| BatchOutcome {
                result: self.render(&raw, request, &mut *rng),
                name,
            })
            .collect()
    }

    /// Describe the canvas a document would render to.
    pub fn summarize(&self, raw: &[u8], modifications: &ModificationSet) -> Result<Summary> {
        let map = merge(&parse_pixel_map(raw)?, modifications);
        let bounds = compute_bounds(&map)?;
        let scale = compute_scale_factor(bounds.width, bounds.height, self.options.max_dimension)?;

        Ok(Summary {
            pixels: map.len(),
            colours: map.distinct_colours(),
            width: bounds.width,
            height: bounds.height,
            scale,
            final_width: bounds.width * scale,
            final_height: bounds.height * scale,
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
