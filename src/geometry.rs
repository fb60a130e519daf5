//! Geometric primitives consumed by the rasterizers.
//!
//! [`Point`] is the integer lattice point every rasterizer emits. [`PointF`]
//! carries real-valued input for the DDA and for fractional circle centres.

use std::ops::{Add, Sub};

/// A lattice point with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the number of 8-connected steps between two points.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D point with real coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Truncate toward zero onto the lattice.
    #[must_use]
    pub fn truncate(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Round to the nearest lattice point, ties to even.
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(self.x.round_ties_even() as i32, self.y.round_ties_even() as i32)
    }

    /// True when both coordinates round into the `i32` range.
    #[must_use]
    pub fn fits_lattice(self) -> bool {
        let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
        range.contains(&self.x.round_ties_even()) && range.contains(&self.y.round_ties_even())
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A line segment between two lattice points. May be degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// True when both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `(dx, dy)` from start to end.
    #[must_use]
    pub fn delta(&self) -> (i32, i32) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }
}

/// A circle on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Centre point.
    pub center: Point,
    /// Radius in pixels. Negative values are rejected at rasterization time.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from a fractional centre, truncated toward zero.
    #[must_use]
    pub fn from_fractional(center: PointF, radius: i32) -> Self {
        Self::new(center.truncate(), radius)
    }
}
