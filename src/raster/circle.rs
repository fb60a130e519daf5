//! Midpoint circle rasterization with 8-way symmetry.
//!
//! One octant (from the top of the circle, `x` growing, until `x > y`) is
//! walked with an integer decision variable; every step is mirrored into the
//! other seven octants. The output is a trace, not a set: where mirrored
//! images coincide (on the axes and the diagonal) the point repeats.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// The eight images of the octant offset `(x, y)` around `center`.
///
/// Order: `(x, y)`, `(y, x)`, `(y, -x)`, `(x, -y)`, `(-x, -y)`, `(-y, -x)`,
/// `(-y, x)`, `(-x, y)`.
///
/// The caller keeps `center ± max(|x|, |y|)` inside `i32`;
/// [`midpoint_circle`] checks this once before its loop.
#[must_use]
pub fn circle_points(center: Point, x: i32, y: i32) -> [Point; 8] {
    let Point { x: cx, y: cy } = center;
    [
        Point::new(cx + x, cy + y),
        Point::new(cx + y, cy + x),
        Point::new(cx + y, cy - x),
        Point::new(cx + x, cy - y),
        Point::new(cx - x, cy - y),
        Point::new(cx - y, cy - x),
        Point::new(cx - y, cy + x),
        Point::new(cx - x, cy + y),
    ]
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Starts at `(0, radius)` with `d = 1 - radius`. While `x <= y`: if `d < 0`
/// step east (`d += 2x + 3`), otherwise step south-east
/// (`d += 2x - 2y + 5`, `y -= 1`); `x += 1`. The seed and every stepped
/// position contribute their eight symmetric images, so the result holds
/// `8 * (steps + 1)` points. A zero radius yields `[center]`.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`] when `radius < 0`, and
/// [`Error::CircleOutOfRange`] when `center ± radius` leaves `i32` on
/// either axis.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::midpoint_circle;
///
/// let points = midpoint_circle(Point::new(0, 0), 5)?;
/// assert!(points.contains(&Point::new(3, 4)));
/// assert!(points.contains(&Point::new(-5, 0)));
/// # Ok::<(), trueno_raster::Error>(())
/// ```
pub fn midpoint_circle(center: Point, radius: i32) -> Result<Vec<Point>> {
    if radius < 0 {
        debug!("circle rejected negative radius {radius}");
        return Err(Error::NegativeRadius { radius });
    }
    if radius == 0 {
        return Ok(vec![center]);
    }
    let fits = |v: i32| v.checked_add(radius).is_some() && v.checked_sub(radius).is_some();
    if !(fits(center.x) && fits(center.y)) {
        debug!("circle rejected {center:?} radius {radius}: outside i32");
        return Err(Error::CircleOutOfRange { cx: center.x, cy: center.y, radius });
    }

    // One step per column of the octant, plus the seed and the diagonal crossing.
    let columns = (f64::from(radius) * std::f64::consts::FRAC_1_SQRT_2) as usize + 3;
    let mut points = Vec::with_capacity(columns * 8);

    let mut x: i32 = 0;
    let mut y: i32 = radius;
    let mut d: i64 = 1 - i64::from(radius);
    points.extend_from_slice(&circle_points(center, x, y));

    while x <= y {
        if d < 0 {
            d += 2 * i64::from(x) + 3;
        } else {
            d += 2 * i64::from(x) - 2 * i64::from(y) + 5;
            y -= 1;
        }
        x += 1;
        points.extend_from_slice(&circle_points(center, x, y));
    }

    trace!("circle: radius {radius}, {} points", points.len());
    Ok(points)
}
