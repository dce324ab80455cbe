// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG elliptical arcs.

use crate::{ControlPoints, ControlPolygon, Point, Vec2};

/// An SVG elliptical arc segment, in endpoint parameterization.
///
/// Only the endpoints take part in polygon output. The remaining fields are
/// kept so that the segment still describes the arc that was drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the arc is rotated, in degrees as written in path data.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
}

impl ControlPolygon for SvgArc {
    #[inline]
    fn start(&self) -> Point {
        self.from
    }

    #[inline]
    fn end(&self) -> Point {
        self.to
    }

    /// Arcs are approximated by their two endpoints; no tessellation.
    fn control_points(&self) -> ControlPoints {
        [self.from, self.to].into_iter().collect()
    }
}
