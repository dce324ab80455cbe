// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ControlPoints, ControlPolygon, Point};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The first control point a following smooth cubic (`S`) would use.
    #[inline]
    pub fn reflected_control(&self) -> Point {
        self.p3.reflect(self.p2)
    }
}

impl ControlPolygon for CubicBez {
    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }

    fn control_points(&self) -> ControlPoints {
        [self.p0, self.p1, self.p2, self.p3].into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ControlPolygon, CubicBez, Point};

    #[test]
    fn cubicbez_points() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        assert_eq!(
            c.control_points().as_slice(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0)
            ]
        );
        assert_eq!(c.reflected_control(), Point::new(1.0, -1.0));
    }
}
