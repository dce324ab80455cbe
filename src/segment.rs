// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved path segments and their control points.

use arrayvec::ArrayVec;

use crate::{CubicBez, Line, Point, QuadBez, SvgArc};

/// The maximum number of control points of any segment (a cubic has four).
pub const MAX_CONTROL_POINTS: usize = 4;

/// The defining points of a segment, in order.
pub type ControlPoints = ArrayVec<Point, MAX_CONTROL_POINTS>;

/// A segment described by the points that define it.
///
/// Every segment type in this crate has a start and an end, and possibly
/// some interior shaping points. The returned list is always in the fixed
/// order start, controls, end.
pub trait ControlPolygon {
    /// The start point.
    fn start(&self) -> Point;

    /// The end point.
    fn end(&self) -> Point;

    /// The canonical list of defining points of this segment.
    fn control_points(&self) -> ControlPoints;
}

/// A segment of a resolved path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A straight line. Close-path commands also resolve to lines.
    Line(Line),
    /// A quadratic Bézier curve.
    Quad(QuadBez),
    /// A cubic Bézier curve.
    Cubic(CubicBez),
    /// An elliptical arc.
    Arc(SvgArc),
}

impl Segment {
    /// The kind of this segment, without its geometry.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Line(_) => SegmentKind::Line,
            Segment::Quad(_) => SegmentKind::QuadraticCurve,
            Segment::Cubic(_) => SegmentKind::CubicCurve,
            Segment::Arc(_) => SegmentKind::Arc,
        }
    }
}

/// The kind tag of a [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SegmentKind {
    Line,
    CubicCurve,
    QuadraticCurve,
    Arc,
}

impl ControlPolygon for Segment {
    fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.start(),
            Segment::Quad(quad) => quad.start(),
            Segment::Cubic(cubic) => cubic.start(),
            Segment::Arc(arc) => arc.start(),
        }
    }

    fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.end(),
            Segment::Quad(quad) => quad.end(),
            Segment::Cubic(cubic) => cubic.end(),
            Segment::Arc(arc) => arc.end(),
        }
    }

    fn control_points(&self) -> ControlPoints {
        match self {
            Segment::Line(line) => line.control_points(),
            Segment::Quad(quad) => quad.control_points(),
            Segment::Cubic(cubic) => cubic.control_points(),
            Segment::Arc(arc) => arc.control_points(),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Segment {
        Segment::Line(line)
    }
}

impl From<QuadBez> for Segment {
    fn from(quad: QuadBez) -> Segment {
        Segment::Quad(quad)
    }
}

impl From<CubicBez> for Segment {
    fn from(cubic: CubicBez) -> Segment {
        Segment::Cubic(cubic)
    }
}

impl From<SvgArc> for Segment {
    fn from(arc: SvgArc) -> Segment {
        Segment::Arc(arc)
    }
}

/// Returns the ordered defining points of a segment.
///
/// * line: `[start, end]`
/// * quadratic: `[start, control, end]`
/// * cubic: `[start, control1, control2, end]`
/// * arc: `[start, end]`; the curvature is not approximated.
///
/// ```
/// use svgpoly::{control_points, CubicBez, Point, Segment};
///
/// let seg = Segment::Cubic(CubicBez::new((0., 0.), (1., 2.), (3., 2.), (4., 0.)));
/// let pts = control_points(&seg);
/// assert_eq!(pts.len(), 4);
/// assert_eq!(pts[2], Point::new(3., 2.));
/// ```
#[inline]
pub fn control_points(segment: &Segment) -> ControlPoints {
    segment.control_points()
}
