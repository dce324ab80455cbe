// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion options.

/// Where the relative move that opens a contour is measured from.
///
/// The first contour of a path string is always measured from `(0, 0)`.
/// For later contours the two choices only differ when the previous contour
/// was left open: a closed contour ends where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContourOrigin {
    /// The start of the previous contour's first segment, which is the point
    /// its move command went to. This is what the map tooling this crate
    /// replaces did, and is the default.
    #[default]
    Start,
    /// The final pen position of the previous contour, as an SVG renderer
    /// would use.
    End,
}

/// Which move commands begin a new contour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContourSplit {
    /// Only relative moves (`m`) begin a contour, so a string has one more
    /// contour than it has `m` commands after its first command.
    ///
    /// An absolute move (`M`) after the first command stays in the current
    /// contour: it is joined to the previous pen position by a line, and
    /// its point follows the previous points in the polygon. This is the
    /// default.
    #[default]
    RelativeMove,
    /// Every move, `M` or `m`, begins a contour. No contour ever contains a
    /// joining line.
    AnyMove,
}

/// Options for converting path data into polygons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertOptions {
    /// See [`ContourOrigin`].
    pub origin: ContourOrigin,
    /// See [`ContourSplit`].
    pub split: ContourSplit,
}

impl ConvertOptions {
    /// Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for setting the contour origin.
    #[must_use]
    pub fn with_origin(mut self, origin: ContourOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Builder method for choosing which moves begin a contour.
    #[must_use]
    pub fn with_split(mut self, split: ContourSplit) -> Self {
        self.split = split;
        self
    }
}
