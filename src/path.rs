// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved paths: one contour's worth of contiguous segments.

use alloc::vec::Vec;

use crate::{flatten, ControlPolygon, Point, Polygon, Segment};

/// A single contour of resolved segments, in absolute coordinates.
///
/// A path begins at its start point (the point given by the move command
/// that opened it) and every segment starts where the previous one ended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    segments: Vec<Segment>,
    closed: bool,
}

impl Path {
    /// Create an empty path beginning at `start`.
    pub fn new(start: Point) -> Path {
        Path {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Create a path from a list of segments.
    ///
    /// Returns `None` if the segments are not contiguous, that is if some
    /// segment does not start exactly where the previous one (or `start`,
    /// for the first) ends.
    pub fn from_segments(start: Point, segments: Vec<Segment>) -> Option<Path> {
        let mut last = start;
        for seg in &segments {
            if seg.start() != last {
                return None;
            }
            last = seg.end();
        }
        Some(Path {
            start,
            segments,
            closed: false,
        })
    }

    /// Append a segment. The segment must start at the current end point.
    pub(crate) fn push(&mut self, segment: Segment) {
        debug_assert!(
            segment.start() == self.end(),
            "segment {segment:?} does not continue path ending at {:?}",
            self.end()
        );
        self.segments.push(segment);
        self.closed = false;
    }

    pub(crate) fn set_closed(&mut self) {
        self.closed = true;
    }

    /// The point at which this path begins.
    ///
    /// This is also the start of the first segment, if there is one.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The final pen position.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |seg| seg.end())
    }

    /// The segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path draws nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if the last command of this path was a close-path.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Flatten this path into a polygon. See [`flatten`].
    pub fn to_polygon(&self) -> Polygon {
        flatten(self)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
