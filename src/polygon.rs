// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygons, and flattening paths into them.

use alloc::vec::Vec;
use core::ops::Deref;

use crate::{ControlPolygon, Path, Point};

/// An ordered list of points with no two consecutive points equal.
///
/// One polygon is produced per contour of the input path data. It is not
/// closed explicitly: the last point repeats the first only when the path
/// data itself returned there.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// Create an empty polygon.
    pub fn new() -> Polygon {
        Polygon::default()
    }

    /// Push a point, unless it equals the last point.
    ///
    /// Returns `true` if the point was added.
    pub fn push(&mut self, pt: Point) -> bool {
        if self.0.last() == Some(&pt) {
            return false;
        }
        self.0.push(pt);
        true
    }

    /// The points of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consume the polygon, returning its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// The points of this polygon as `(x, y)` tuples.
    pub fn to_tuples(&self) -> Vec<(f64, f64)> {
        self.0.iter().map(|&p| p.into()).collect()
    }

    /// Returns `true` if the polygon ends where it began.
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Polygon {
    type Item = Point;
    type IntoIter = alloc::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Vec<Point> {
        polygon.0
    }
}

impl From<Polygon> for Vec<(f64, f64)> {
    fn from(polygon: Polygon) -> Vec<(f64, f64)> {
        polygon.to_tuples()
    }
}

impl Extend<Point> for Polygon {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for pt in iter {
            self.push(pt);
        }
    }
}

impl FromIterator<Point> for Polygon {
    /// Collects points, collapsing consecutive duplicates.
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Polygon {
        let mut polygon = Polygon::new();
        polygon.extend(iter);
        polygon
    }
}

/// Collapse runs of identical consecutive points.
///
/// Equality is exact; points that differ in the last bit are both kept.
/// Non-adjacent repeats are kept as well.
///
/// ```
/// use svgpoly::{dedup_points, Point};
///
/// let pts = [(0., 0.), (1., 1.), (1., 1.), (0., 0.)].map(Point::from);
/// let polygon = dedup_points(pts);
/// assert_eq!(polygon.to_tuples(), vec![(0., 0.), (1., 1.), (0., 0.)]);
/// ```
pub fn dedup_points(points: impl IntoIterator<Item = Point>) -> Polygon {
    points.into_iter().collect()
}

/// Flatten a path into a polygon.
///
/// The control points of every segment are concatenated in order, and a point
/// is dropped when it is identical to the one emitted just before it. That
/// folds the shared endpoint of consecutive segments into one point, and a
/// close-path line that comes back to the contour start adds nothing when the
/// pen is already there.
///
/// A path with no segments flattens to its start point alone.
pub fn flatten(path: &Path) -> Polygon {
    if path.is_empty() {
        return dedup_points([path.start()]);
    }
    path.segments()
        .iter()
        .flat_map(|seg| seg.control_points())
        .collect()
}
