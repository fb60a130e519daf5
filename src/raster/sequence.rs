//! Utilities over rasterized point sequences.
//!
//! Rasterizers never clip or deduplicate; consumers that want half arcs, a
//! point set, or a bounding box post-process the sequence here.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// A closed half-plane bounded by an axis-parallel line through a pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HalfPlane {
    /// `y >= pivot.y`
    Upper,
    /// `y <= pivot.y`
    Lower,
    /// `x <= pivot.x`
    Left,
    /// `x >= pivot.x`
    Right,
}

impl HalfPlane {
    /// Whether `p` lies in this half-plane (boundary included).
    #[must_use]
    pub fn contains(self, pivot: Point, p: Point) -> bool {
        match self {
            Self::Upper => p.y >= pivot.y,
            Self::Lower => p.y <= pivot.y,
            Self::Left => p.x <= pivot.x,
            Self::Right => p.x >= pivot.x,
        }
    }
}

impl FromStr for HalfPlane {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "top" => Ok(Self::Upper),
            "lower" | "bottom" => Ok(Self::Lower),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::UnknownHalfPlane(other.to_string())),
        }
    }
}

/// Keep the points lying in `half` relative to `pivot`, preserving order.
///
/// The usual pivot is a circle's centre, giving a half circle.
#[must_use]
pub fn retain_half_plane(points: &[Point], pivot: Point, half: HalfPlane) -> Vec<Point> {
    points.iter().copied().filter(|&p| half.contains(pivot, p)).collect()
}

/// Drop repeated points, keeping the first occurrence of each.
#[must_use]
pub fn unique_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// Inclusive axis-aligned bounds of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Smallest x and y.
    pub min: Point,
    /// Largest x and y.
    pub max: Point,
}

impl Bounds {
    /// Number of columns covered, saturating at `u32::MAX`.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows covered, saturating at `u32::MAX`.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Grow by `margin` on every side, clamped to the `i32` lattice.
    #[must_use]
    pub fn expand(self, margin: i32) -> Self {
        Self {
            min: Point::new(self.min.x.saturating_sub(margin), self.min.y.saturating_sub(margin)),
            max: Point::new(self.max.x.saturating_add(margin), self.max.y.saturating_add(margin)),
        }
    }

    /// Whether `p` lies inside (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// Bounds of `points`, or `None` when empty.
#[must_use]
pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let first = *points.first()?;
    Some(points.iter().fold(Bounds { min: first, max: first }, |b, p| Bounds {
        min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
        max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
    }))
}

/// True when every consecutive pair is exactly one 8-connected step apart.
///
/// Sequences of zero or one point are trivially connected.
#[must_use]
pub fn is_eight_connected(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].chebyshev(w[1]) == 1)
}
