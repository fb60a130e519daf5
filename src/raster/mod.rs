//! Rasterization of lines and circles onto the integer lattice.
//!
//! Every entry point is a pure function returning a fresh `Vec<Point>`;
//! there is no shared state, so calls may run concurrently.
//!
//! # Algorithms
//!
//! - **DDA Line**: real-valued increments rounded per sample
//! - **Bresenham's Line**: integer decision variable, shallow rightward segments only
//! - **Midpoint Line**: octant-normalized, any direction
//! - **Midpoint Circle**: one octant walked, mirrored eight ways
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2), 100-106.

mod circle;
mod line;
mod octant;
mod sequence;

pub use circle::{circle_points, midpoint_circle};
pub use line::{
    bresenham_shallow_rightward, dda_line, dda_line_f, midpoint_line, rasterize_line,
    LineAlgorithm, MAX_DDA_STEPS,
};
pub use octant::Octant;
pub use sequence::{
    bounds, is_eight_connected, retain_half_plane, unique_points, Bounds, HalfPlane,
};

use crate::error::Result;
use crate::geometry::{Circle, LineSegment, Point};

/// Shapes that rasterize to a sequence of lattice points.
pub trait Rasterize {
    /// Rasterize with the shape's default algorithm.
    fn rasterize(&self) -> Result<Vec<Point>>;
}

impl Rasterize for LineSegment {
    /// Octant-normalized midpoint; never fails.
    fn rasterize(&self) -> Result<Vec<Point>> {
        Ok(midpoint_line(self.start, self.end))
    }
}

impl LineSegment {
    /// Rasterize with an explicit strategy.
    ///
    /// # Errors
    ///
    /// See [`LineAlgorithm::rasterize`].
    pub fn rasterize_with(&self, algorithm: LineAlgorithm) -> Result<Vec<Point>> {
        algorithm.rasterize(self.start, self.end)
    }
}

impl Rasterize for Circle {
    fn rasterize(&self) -> Result<Vec<Point>> {
        midpoint_circle(self.center, self.radius)
    }
}
