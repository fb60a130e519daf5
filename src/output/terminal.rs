//! Terminal output encoder for point previews.
//!
//! Each character cell covers a block of pixels. Blocks are reduced with a
//! max rather than an average so isolated single-pixel points stay visible
//! when a preview is shrunk to fit the terminal.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Space characters with ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    max_width: u32,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder: ASCII, at most 80 columns.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), max_width: 80, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the widest output in characters. Narrower framebuffers render 1:1.
    #[must_use]
    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Invert the output (dark on light vs light on dark).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a framebuffer to a string, one line per row of cells.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let block = fb.width().div_ceil(self.max_width).max(1);
        let cols = fb.width().div_ceil(block);
        let rows = fb.height().div_ceil(block);

        let mut output = String::with_capacity((cols as usize + 1) * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                let (luma, color) = self.brightest_in_block(fb, col * block, row * block, block);
                match self.mode {
                    TerminalMode::Ascii => output.push(Self::ASCII_RAMP[Self::luma_to_index(luma)]),
                    TerminalMode::AnsiTrueColor => {
                        let _ = write!(output, "\x1b[48;2;{};{};{}m ", color.r, color.g, color.b);
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }
        output
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }

    /// Brightest pixel (after inversion) of the `block`-sized square at `(x0, y0)`.
    fn brightest_in_block(&self, fb: &Framebuffer, x0: u32, y0: u32, block: u32) -> (f32, Rgba) {
        let mut best = (0.0_f32, Rgba::BLACK);
        for y in y0..(y0 + block).min(fb.height()) {
            for x in x0..(x0 + block).min(fb.width()) {
                let Some(mut pixel) = fb.get_pixel(x, y) else { continue };
                if self.invert {
                    pixel = Rgba::new(255 - pixel.r, 255 - pixel.g, 255 - pixel.b, pixel.a);
                }
                let luma = pixel.luminance();
                if luma > best.0 {
                    best = (luma, pixel);
                }
            }
        }
        best
    }

    /// Convert luminance (0.0-1.0) to ASCII ramp index.
    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::raster::midpoint_line;

    #[test]
    fn test_ascii_one_to_one() {
        let points = midpoint_line(Point::new(0, 0), Point::new(4, 2));
        let fb = Framebuffer::from_points(&points, 0, Rgba::WHITE, Rgba::BLACK)
            .expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().render(&fb);
        // Row 0 is the top of the lattice window (y = 2).
        assert_eq!(output, "   @@\n @@  \n@    \n");
    }

    #[test]
    fn test_ascii_render_black() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);

        let output = TerminalEncoder::new().render(&fb);
        assert!(output.chars().all(|ch| ch == ' ' || ch == '\n'));
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn test_downscale_keeps_isolated_point() {
        let mut fb = Framebuffer::new(400, 40).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        fb.set_pixel(201, 17, Rgba::WHITE);

        let output = TerminalEncoder::new().max_width(40).render(&fb);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 40));
        assert_eq!(output.matches('@').count(), 1);
        assert_eq!(lines[1].chars().nth(20), Some('@'));
    }

    #[test]
    fn test_invert_mode() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().invert(true).render(&fb);
        assert!(output.chars().all(|ch| ch == ' ' || ch == '\n'));
    }

    #[test]
    fn test_ansi_true_color_contains_escapes() {
        let mut fb = Framebuffer::new(4, 4).expect("framebuffer creation should succeed");
        fb.clear(Rgba::YELLOW);

        let output = TerminalEncoder::new().mode(TerminalMode::AnsiTrueColor).render(&fb);
        assert!(output.contains("48;2;255;255;0"));
        assert!(output.contains("\x1b[0m"));
    }
}
