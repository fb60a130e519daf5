//! Octant classification and canonical-octant transforms.
//!
//! Any line direction is mapped onto octant 0 (`dx >= dy >= 0`) by a
//! reflection/swap, rasterized there, and mapped back. Each octant owns a
//! pair of 2x2 integer matrices; the pair are exact inverses.

use crate::geometry::Point;

/// Integer 2x2 matrix `[[xx, xy], [yx, yy]]` applied as a column vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transform {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Transform {
    const fn new(xx: i32, xy: i32, yx: i32, yy: i32) -> Self {
        Self { xx, xy, yx, yy }
    }

    #[inline]
    fn apply(self, p: Point) -> Point {
        Point::new(self.xx * p.x + self.xy * p.y, self.yx * p.x + self.yy * p.y)
    }
}

/// `(to_canonical, from_canonical)` per octant, indexed by `Octant as usize`.
const TRANSFORMS: [(Transform, Transform); 8] = [
    // 0: (x, y)
    (Transform::new(1, 0, 0, 1), Transform::new(1, 0, 0, 1)),
    // 1: (y, x)
    (Transform::new(0, 1, 1, 0), Transform::new(0, 1, 1, 0)),
    // 2: (y, -x) / (-y, x)
    (Transform::new(0, 1, -1, 0), Transform::new(0, -1, 1, 0)),
    // 3: (-x, y)
    (Transform::new(-1, 0, 0, 1), Transform::new(-1, 0, 0, 1)),
    // 4: (-x, -y)
    (Transform::new(-1, 0, 0, -1), Transform::new(-1, 0, 0, -1)),
    // 5: (-y, -x)
    (Transform::new(0, -1, -1, 0), Transform::new(0, -1, -1, 0)),
    // 6: (-y, x) / (y, -x)
    (Transform::new(0, -1, 1, 0), Transform::new(0, 1, -1, 0)),
    // 7: (x, -y)
    (Transform::new(1, 0, 0, -1), Transform::new(1, 0, 0, -1)),
];

/// One of the eight direction sectors of a line.
///
/// Numbered counter-clockwise from the positive x axis:
///
/// | Octant | Signs | Slope |
/// |---|---|---|
/// | 0 | dx ≥ 0, dy ≥ 0 | shallow |
/// | 1 | dx ≥ 0, dy ≥ 0 | steep |
/// | 2 | dx < 0, dy ≥ 0 | steep |
/// | 3 | dx < 0, dy ≥ 0 | shallow |
/// | 4 | dx < 0, dy < 0 | shallow |
/// | 5 | dx < 0, dy < 0 | steep |
/// | 6 | dx ≥ 0, dy < 0 | steep |
/// | 7 | dx ≥ 0, dy < 0 | shallow |
///
/// "Shallow" means `|dx| >= |dy|`, so 45° diagonals and zero-length lines
/// are shallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Octant {
    /// East-north-east.
    Zero = 0,
    /// North-north-east.
    One = 1,
    /// North-north-west.
    Two = 2,
    /// West-north-west.
    Three = 3,
    /// West-south-west.
    Four = 4,
    /// South-south-west.
    Five = 5,
    /// South-south-east.
    Six = 6,
    /// East-south-east.
    Seven = 7,
}

impl Octant {
    /// All octants in index order.
    pub const ALL: [Self; 8] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
    ];

    /// Classify the direction from `p0` to `p1`.
    #[must_use]
    pub fn classify(p0: Point, p1: Point) -> Self {
        let dx = i64::from(p1.x) - i64::from(p0.x);
        let dy = i64::from(p1.y) - i64::from(p0.y);
        Self::from_delta(dx, dy)
    }

    /// Classify a direction vector.
    #[must_use]
    pub fn from_delta(dx: i64, dy: i64) -> Self {
        let shallow = dx.abs() >= dy.abs();
        match (dx >= 0, dy >= 0, shallow) {
            (true, true, true) => Self::Zero,
            (true, true, false) => Self::One,
            (false, true, false) => Self::Two,
            (false, true, true) => Self::Three,
            (false, false, true) => Self::Four,
            (false, false, false) => Self::Five,
            (true, false, false) => Self::Six,
            (true, false, true) => Self::Seven,
        }
    }

    /// Octant from its index (0..=7).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Index of this octant (0..=7).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Map a point from this octant into octant 0.
    #[must_use]
    pub fn to_canonical(self, p: Point) -> Point {
        TRANSFORMS[self as usize].0.apply(p)
    }

    /// Map a point from octant 0 back into this octant.
    #[must_use]
    pub fn from_canonical(self, p: Point) -> Point {
        TRANSFORMS[self as usize].1.apply(p)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_from_canonical_inverts_to_canonical(
            index in 0u8..8,
            x in -100_000i32..100_000,
            y in -100_000i32..100_000,
        ) {
            let octant = Octant::from_index(index).expect("index in range");
            let p = Point::new(x, y);
            prop_assert_eq!(octant.from_canonical(octant.to_canonical(p)), p);
        }

        #[test]
        fn prop_classified_delta_is_canonical(
            dx in -10_000i32..10_000,
            dy in -10_000i32..10_000,
        ) {
            let octant = Octant::classify(Point::ORIGIN, Point::new(dx, dy));
            let c = octant.to_canonical(Point::new(dx, dy));
            prop_assert!(c.x >= c.y);
            prop_assert!(c.y >= 0);
        }
    }
}
