//! Line rasterization.
//!
//! Three interchangeable strategies produce the ordered lattice path of a
//! segment, walking from `p0` toward `p1` along the dominant axis:
//!
//! - **DDA**: real-valued increments, rounded per sample (ties to even).
//! - **Bresenham, shallow rightward**: the textbook single-octant integer
//!   rule. Only defined for `p1.x > p0.x`; `y` never decreases and never
//!   advances more than once per column.
//! - **Midpoint, octant-normalized**: classifies the octant, rasterizes in
//!   octant 0 with an integer decision variable and maps back. Correct for
//!   every direction; the default.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{Point, PointF};
use crate::raster::octant::Octant;

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Digital differential analyzer with real accumulation.
    #[cfg_attr(feature = "serde", serde(rename = "dda"))]
    Dda,
    /// Integer Bresenham restricted to rightward segments.
    #[cfg_attr(feature = "serde", serde(rename = "bresenham"))]
    BresenhamShallowRightward,
    /// Octant-normalized midpoint; safe for any direction.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "midpoint"))]
    MidpointOctant,
}

impl LineAlgorithm {
    /// Short name used in configuration files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "dda",
            Self::BresenhamShallowRightward => "bresenham",
            Self::MidpointOctant => "midpoint",
        }
    }

    /// Rasterize `p0 → p1` with this strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BresenhamDomain`] when the restricted Bresenham
    /// strategy is asked for a non-rightward segment.
    pub fn rasterize(self, p0: Point, p1: Point) -> Result<Vec<Point>> {
        match self {
            Self::Dda => Ok(dda_line(p0, p1)),
            Self::BresenhamShallowRightward => bresenham_shallow_rightward(p0, p1),
            Self::MidpointOctant => Ok(midpoint_line(p0, p1)),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dda" => Ok(Self::Dda),
            "bresenham" | "bresenham-shallow-rightward" => Ok(Self::BresenhamShallowRightward),
            "midpoint" | "midpoint-octant" => Ok(Self::MidpointOctant),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Rasterize the segment `p0 → p1` with the chosen strategy.
///
/// # Errors
///
/// See [`LineAlgorithm::rasterize`].
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::{rasterize_line, LineAlgorithm};
///
/// let points = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::MidpointOctant)?;
/// assert_eq!(points.first(), Some(&Point::new(0, 0)));
/// assert_eq!(points.last(), Some(&Point::new(5, 2)));
/// # Ok::<(), trueno_raster::Error>(())
/// ```
pub fn rasterize_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Result<Vec<Point>> {
    algorithm.rasterize(p0, p1)
}

// ============================================================================
// DDA
// ============================================================================

/// DDA over integer endpoints.
///
/// Emits `max(|dx|, |dy|) + 1` samples, `p0` first and `p1` last.
#[must_use]
pub fn dda_line(p0: Point, p1: Point) -> Vec<Point> {
    dda_walk(PointF::from(p0), PointF::from(p1))
}

/// DDA over real endpoints.
///
/// The step count is `round(max(|dx|, |dy|))`; when it is zero the rounded
/// start point is returned alone. Coordinates accumulate in `f64` and are
/// rounded to nearest, ties to even, at every sample, so error grows with
/// length.
///
/// # Errors
///
/// - [`Error::NonFiniteCoordinate`] for NaN or infinite input.
/// - [`Error::CoordinateOutOfRange`] when an endpoint rounds outside `i32`.
/// - [`Error::TooManySteps`] when the step count exceeds [`MAX_DDA_STEPS`].
pub fn dda_line_f(start: PointF, end: PointF) -> Result<Vec<Point>> {
    for p in [start, end] {
        if !p.is_finite() {
            debug!("dda rejected non-finite endpoint ({}, {})", p.x, p.y);
            return Err(Error::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        if !p.fits_lattice() {
            debug!("dda rejected out-of-range endpoint ({}, {})", p.x, p.y);
            return Err(Error::CoordinateOutOfRange { x: p.x, y: p.y });
        }
    }
    let steps = dda_steps(start, end);
    if steps > f64::from(MAX_DDA_STEPS) {
        debug!("dda rejected {steps} steps");
        return Err(Error::TooManySteps { steps, limit: MAX_DDA_STEPS });
    }
    Ok(dda_walk(start, end))
}

/// Largest step count [`dda_line_f`] accepts.
pub const MAX_DDA_STEPS: u32 = i32::MAX.unsigned_abs();

fn dda_steps(start: PointF, end: PointF) -> f64 {
    (end.x - start.x).abs().max((end.y - start.y).abs()).round_ties_even()
}

fn dda_walk(start: PointF, end: PointF) -> Vec<Point> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dda_steps(start, end);

    if steps < 1.0 {
        return vec![start.round()];
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;
    let count = steps as usize + 1;

    let mut points = Vec::with_capacity(count);
    let mut x = start.x;
    let mut y = start.y;
    for _ in 0..count {
        points.push(PointF::new(x, y).round());
        x += x_inc;
        y += y_inc;
    }

    trace!("dda: {} samples, increment ({x_inc}, {y_inc})", points.len());
    points
}

// ============================================================================
// Bresenham (shallow, rightward)
// ============================================================================

/// Textbook Bresenham restricted to rightward segments.
///
/// Decision rule `d = dy - dx/2`, evaluated here doubled (`2dy - dx`) so it
/// stays integral without changing any sign test. Each step moves east; it
/// also moves north when `d >= 0`, then `d += dy - dx`, otherwise `d += dy`.
///
/// The rule is only exact for octant 0. For steep or descending segments it
/// still terminates at `x = p1.x` but `y` will not reach `p1.y`; that is the
/// documented behavior of this variant, not something it corrects.
///
/// # Errors
///
/// Returns [`Error::BresenhamDomain`] when `p1.x <= p0.x` and `p0 != p1`.
pub fn bresenham_shallow_rightward(p0: Point, p1: Point) -> Result<Vec<Point>> {
    if p0 == p1 {
        return Ok(vec![p0]);
    }
    if p1.x <= p0.x {
        debug!("bresenham rejected non-rightward segment {p0:?} -> {p1:?}");
        return Err(Error::BresenhamDomain { x0: p0.x, x1: p1.x });
    }

    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);

    let mut d = 2 * dy - dx;
    let east = 2 * dy;
    let north_east = 2 * (dy - dx);

    let mut points = Vec::with_capacity(dx as usize + 1);
    let (mut x, mut y) = (p0.x, p0.y);
    points.push(p0);

    while x < p1.x {
        x += 1;
        if d < 0 {
            d += east;
        } else {
            d += north_east;
            y += 1;
        }
        points.push(Point::new(x, y));
    }

    trace!("bresenham: {} points", points.len());
    Ok(points)
}

// ============================================================================
// Midpoint (octant-normalized)
// ============================================================================

/// Octant-normalized midpoint line.
///
/// The first point is `p0`, the last is `p1`, and consecutive points are
/// 8-connected. Emits `max(|dx|, |dy|) + 1` points.
#[must_use]
pub fn midpoint_line(p0: Point, p1: Point) -> Vec<Point> {
    let octant = Octant::classify(p0, p1);
    let start = octant.to_canonical(p0);
    let end = octant.to_canonical(p1);

    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    let mut d = 2 * dy - dx;
    let east = 2 * dy;
    let north_east = 2 * (dy - dx);

    let mut points = Vec::with_capacity(dx as usize + 1);
    let mut p = start;
    points.push(octant.from_canonical(p));

    while p.x < end.x {
        if d < 0 {
            d += east;
        } else {
            d += north_east;
            p.y += 1;
        }
        p.x += 1;
        points.push(octant.from_canonical(p));
    }

    trace!("midpoint: octant {}, {} points", octant.index(), points.len());
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_midpoint_octant_zero_trace() {
        let points = midpoint_line(Point::new(0, 0), Point::new(5, 2));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
    }

    #[test]
    fn test_midpoint_reversed_direction_hits_both_endpoints() {
        let points = midpoint_line(Point::new(5, 2), Point::new(0, 0));
        assert_eq!(points.first(), Some(&Point::new(5, 2)));
        assert_eq!(points.last(), Some(&Point::new(0, 0)));
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_midpoint_endpoints_all_octants() {
        let p0 = Point::new(10, -4);
        for (dx, dy) in [(7, 3), (3, 7), (-3, 7), (-7, 3), (-7, -3), (-3, -7), (3, -7), (7, -3)] {
            let p1 = Point::new(p0.x + dx, p0.y + dy);
            let points = midpoint_line(p0, p1);
            assert_eq!(points.first(), Some(&p0), "start for ({dx}, {dy})");
            assert_eq!(points.last(), Some(&p1), "end for ({dx}, {dy})");
            assert_eq!(points.len(), 8);
        }
    }

    #[test]
    fn test_midpoint_vertical_and_horizontal() {
        assert_eq!(
            midpoint_line(Point::new(240, 420), Point::new(240, 417)),
            pts(&[(240, 420), (240, 419), (240, 418), (240, 417)])
        );
        assert_eq!(
            midpoint_line(Point::new(-1, 3), Point::new(-4, 3)),
            pts(&[(-1, 3), (-2, 3), (-3, 3), (-4, 3)])
        );
    }

    #[test]
    fn test_midpoint_diagonal() {
        assert_eq!(
            midpoint_line(Point::new(0, 0), Point::new(-3, -3)),
            pts(&[(0, 0), (-1, -1), (-2, -2), (-3, -3)])
        );
    }

    #[test]
    fn test_midpoint_degenerate() {
        assert_eq!(midpoint_line(Point::new(7, 7), Point::new(7, 7)), pts(&[(7, 7)]));
    }

    #[test]
    fn test_dda_degenerate() {
        assert_eq!(dda_line(Point::new(3, 3), Point::new(3, 3)), pts(&[(3, 3)]));
    }

    #[test]
    fn test_dda_sample_count_and_endpoints() {
        let points = dda_line(Point::new(100, 100), Point::new(220, 230));
        assert_eq!(points.len(), 131);
        assert_eq!(points.first(), Some(&Point::new(100, 100)));
        assert_eq!(points.last(), Some(&Point::new(220, 230)));
    }

    #[test]
    fn test_dda_steep_negative() {
        let points = dda_line(Point::new(0, 0), Point::new(-2, -4));
        assert_eq!(points, pts(&[(0, 0), (0, -1), (-1, -2), (-2, -3), (-2, -4)]));
    }

    #[test]
    fn test_dda_half_samples_round_to_even() {
        assert_eq!(
            dda_line(Point::new(0, 0), Point::new(4, 1)),
            pts(&[(0, 0), (1, 0), (2, 0), (3, 1), (4, 1)])
        );
        assert_eq!(dda_line(Point::new(0, 0), Point::new(2, -1)), pts(&[(0, 0), (1, 0), (2, -1)]));
    }

    #[test]
    fn test_dda_rejects_huge_input() {
        let err = dda_line_f(PointF::new(0.0, 0.0), PointF::new(1e300, 0.0)).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { .. }));

        let err = dda_line_f(PointF::new(-2e9, 0.0), PointF::new(2e9, 5.0)).unwrap_err();
        assert!(matches!(err, Error::TooManySteps { limit: MAX_DDA_STEPS, .. }));
    }

    #[test]
    fn test_dda_fractional_input() {
        let points = dda_line_f(PointF::new(0.2, 0.0), PointF::new(3.2, 1.5)).unwrap();
        assert_eq!(points.first(), Some(&Point::new(0, 0)));
        assert_eq!(points.last(), Some(&Point::new(3, 2)));
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_dda_fractional_short_segment_is_single_point() {
        let points = dda_line_f(PointF::new(1.6, 2.2), PointF::new(1.9, 2.4)).unwrap();
        assert_eq!(points, pts(&[(2, 2)]));
    }

    #[test]
    fn test_dda_rejects_nan() {
        let err = dda_line_f(PointF::new(f64::NAN, 0.0), PointF::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { .. }));
    }

    #[test]
    fn test_bresenham_octant_zero_matches_midpoint() {
        let p0 = Point::new(2, 3);
        let p1 = Point::new(19, 9);
        assert_eq!(bresenham_shallow_rightward(p0, p1).unwrap(), midpoint_line(p0, p1));
    }

    #[test]
    fn test_bresenham_steep_does_not_reach_end() {
        let points =
            bresenham_shallow_rightward(Point::new(100, 100), Point::new(220, 230)).unwrap();
        assert_eq!(points.len(), 121);
        assert_eq!(points.last(), Some(&Point::new(220, 220)));
    }

    #[test]
    fn test_bresenham_descending_stays_flat() {
        let points = bresenham_shallow_rightward(Point::new(0, 0), Point::new(5, -2)).unwrap();
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_bresenham_rejects_leftward_and_vertical() {
        let err = bresenham_shallow_rightward(Point::new(5, 0), Point::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::BresenhamDomain { x0: 5, x1: 0 }));
        let err = bresenham_shallow_rightward(Point::new(5, 0), Point::new(5, 9)).unwrap_err();
        assert!(matches!(err, Error::BresenhamDomain { .. }));
    }

    #[test]
    fn test_bresenham_degenerate() {
        let points = bresenham_shallow_rightward(Point::new(4, 4), Point::new(4, 4)).unwrap();
        assert_eq!(points, pts(&[(4, 4)]));
    }

    #[test]
    fn test_rasterize_line_dispatch() {
        let p0 = Point::new(0, 0);
        let p1 = Point::new(5, 2);
        assert_eq!(rasterize_line(p0, p1, LineAlgorithm::Dda).unwrap().len(), 6);
        assert_eq!(
            rasterize_line(p0, p1, LineAlgorithm::BresenhamShallowRightward).unwrap(),
            rasterize_line(p0, p1, LineAlgorithm::default()).unwrap()
        );
        assert!(rasterize_line(p1, p0, LineAlgorithm::BresenhamShallowRightward).is_err());
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        for algorithm in [
            LineAlgorithm::Dda,
            LineAlgorithm::BresenhamShallowRightward,
            LineAlgorithm::MidpointOctant,
        ] {
            assert_eq!(algorithm.to_string().parse::<LineAlgorithm>().unwrap(), algorithm);
        }
        assert_eq!(" Midpoint ".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::MidpointOctant);
        assert!(matches!("wu".parse::<LineAlgorithm>(), Err(Error::UnknownAlgorithm(_))));
    }
}
