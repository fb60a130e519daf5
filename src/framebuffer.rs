//! RGBA pixel buffer for previewing rasterized points.
//!
//! The buffer is row-major with row 0 at the top. Lattice coordinates are
//! y-up (as on a `gluOrtho2D(0, w, 0, h)` canvas), so plotting flips rows:
//! a [`Bounds`] window picks which lattice region lands in the buffer.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::Bounds;

/// Largest preview edge accepted by [`Framebuffer::from_points`].
pub const MAX_PREVIEW_EDGE: u32 = 8192;

/// Packed RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel, no padding.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(80, 60).unwrap();
    /// assert_eq!(fb.width(), 80);
    /// assert_eq!(fb.height(), 60);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Build a preview sized to the points' bounds plus `padding`, cleared to
    /// `background`, with every point plotted in `foreground`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for an empty sequence or a
    /// preview edge larger than [`MAX_PREVIEW_EDGE`].
    pub fn from_points(
        points: &[Point],
        padding: u32,
        foreground: Rgba,
        background: Rgba,
    ) -> Result<Self> {
        let window = crate::raster::bounds(points)
            .ok_or(Error::InvalidDimensions { width: 0, height: 0 })?
            .expand(padding.min(MAX_PREVIEW_EDGE) as i32);
        let (width, height) = (window.width(), window.height());
        if width > MAX_PREVIEW_EDGE || height > MAX_PREVIEW_EDGE {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut fb = Self::new(width, height)?;
        fb.clear(background);
        fb.plot_points(points, window, foreground);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw pixel data (tightly packed RGBA).
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Plot lattice points, with `window.min` at the bottom-left pixel.
    ///
    /// Points outside the window or the buffer are skipped.
    pub fn plot_points(&mut self, points: &[Point], window: Bounds, color: Rgba) {
        for &p in points {
            if let Some((x, y)) = self.lattice_to_pixel(p, window) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Pixel holding lattice point `p` for the given window, if visible.
    #[must_use]
    pub fn lattice_to_pixel(&self, p: Point, window: Bounds) -> Option<(u32, u32)> {
        if !window.contains(p) {
            return None;
        }
        let x = p.x.abs_diff(window.min.x);
        let y = window.max.y.abs_diff(p.y);
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Count pixels equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|c| *c == rgba).count()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
