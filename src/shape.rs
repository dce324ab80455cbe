// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting drawable elements supplied by a document loader.
//!
//! Reading markup is left to the caller. A loader hands over one
//! [`ShapeRecord`] per drawable element, and gets back polygons tagged with
//! the same identifier and label, in the same order.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::{
    svg_path_to_polygon_with, svg_path_to_polygons_with, ConvertError, ConvertOptions, Polygon,
};

/// A drawable element's identifier, optional label and path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeRecord<'a> {
    /// The element identifier, such as an `id` attribute.
    pub id: &'a str,
    /// A human-readable label, such as an `inkscape:label` attribute.
    pub label: Option<&'a str>,
    /// The path data string.
    pub path_data: &'a str,
}

impl<'a> ShapeRecord<'a> {
    /// Create a record without a label.
    pub fn new(id: &'a str, path_data: &'a str) -> Self {
        ShapeRecord {
            id,
            label: None,
            path_data,
        }
    }

    /// Builder method for setting the label.
    #[must_use]
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Convert this shape's path data into polygons.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Parse`] if the path data is malformed.
    pub fn to_polygons(&self, options: &ConvertOptions) -> Result<Vec<Polygon>, ConvertError> {
        Ok(svg_path_to_polygons_with(self.path_data, options)?)
    }

    /// Convert this shape's path data, which must be a single contour.
    ///
    /// # Errors
    ///
    /// See [`svg_path_to_polygon`](crate::svg_path_to_polygon).
    pub fn to_polygon(&self, options: &ConvertOptions) -> Result<Polygon, ConvertError> {
        svg_path_to_polygon_with(self.path_data, options)
    }
}

/// The polygons converted from one [`ShapeRecord`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapePolygons {
    /// The element identifier.
    pub id: String,
    /// The element label, if it had one.
    pub label: Option<String>,
    /// One polygon per contour.
    pub polygons: Vec<Polygon>,
}

/// A shape failed to convert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    /// The identifier of the shape at fault.
    pub id: String,
    /// What went wrong.
    pub error: ConvertError,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape \"{}\": {}", self.id, self.error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Convert a batch of shapes, preserving their order.
///
/// Conversion stops at the first shape that fails; whether to skip it and
/// carry on is the caller's decision, by converting records one at a time.
///
/// ```
/// use svgpoly::{convert_shapes, ConvertOptions, ShapeRecord};
///
/// let records = [
///     ShapeRecord::new("MA", "m 0 0 10 0 0 10 z m 20 20 5 0 0 5 z"),
///     ShapeRecord::new("25021", "M 1 1 L 2 2").with_label("Norfolk, MA"),
/// ];
/// let shapes = convert_shapes(records, &ConvertOptions::default()).unwrap();
/// assert_eq!(shapes[0].polygons.len(), 2);
/// assert_eq!(shapes[1].label.as_deref(), Some("Norfolk, MA"));
/// ```
///
/// # Errors
///
/// Returns a [`ShapeError`] naming the first shape that failed.
pub fn convert_shapes<'a>(
    records: impl IntoIterator<Item = ShapeRecord<'a>>,
    options: &ConvertOptions,
) -> Result<Vec<ShapePolygons>, ShapeError> {
    records
        .into_iter()
        .map(|record| -> Result<ShapePolygons, ShapeError> {
            let polygons = record.to_polygons(options).map_err(|error| ShapeError {
                id: record.id.to_string(),
                error,
            })?;
            debug!("shape {:?}: {} polygon(s)", record.id, polygons.len());
            Ok(ShapePolygons {
                id: record.id.to_string(),
                label: record.label.map(ToString::to_string),
                polygons,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        convert_shapes, ContourCountError, ConvertError, ConvertOptions, ParseErrorKind, Point,
        ShapeRecord,
    };

    #[test]
    fn order_is_preserved() {
        let records = ["c", "a", "b"].map(|id| ShapeRecord::new(id, "M 0 0 L 1 1"));
        let shapes = convert_shapes(records, &ConvertOptions::default()).unwrap();
        let ids: Vec<&str> = shapes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(shapes.iter().all(|s| s.label.is_none()));
    }

    #[test]
    fn failure_names_the_shape() {
        let records = [
            ShapeRecord::new("ok", "M 0 0 L 1 1"),
            ShapeRecord::new("bad", "M 0 0 K 1 1"),
        ];
        let e = convert_shapes(records, &ConvertOptions::default()).unwrap_err();
        assert_eq!(e.id, "bad");
        match &e.error {
            ConvertError::Parse(p) => assert_eq!(p.kind(), &ParseErrorKind::UnknownCommand('K')),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(e.to_string().starts_with("shape \"bad\": "));
    }

    #[test]
    fn single_contour_records() {
        let opts = ConvertOptions::default();
        let county = ShapeRecord::new("25021", "m 5 5 1 0 0 1 z").with_label("Norfolk, MA");
        let polygon = county.to_polygon(&opts).unwrap();
        assert_eq!(polygon.first(), Some(&Point::new(5., 5.)));
        assert!(polygon.is_closed());

        let state = ShapeRecord::new("MA", "m 0 0 1 0 z m 5 5 1 0 z");
        assert_eq!(state.to_polygons(&opts).unwrap().len(), 2);
        assert_eq!(
            state.to_polygon(&opts).unwrap_err(),
            ConvertError::ContourCount(ContourCountError {
                expected: 1,
                found: 2
            })
        );
    }
}
