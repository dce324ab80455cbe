// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn SVG path data into polygons.
//!
//! The svgpoly library converts the path data of vector drawings (the `d`
//! attribute of an SVG `<path>`) into plain lists of points, one list per
//! contour. It was written to extract state and county boundaries from map
//! artwork, so that downstream code only deals in coordinates.
//!
//! The conversion does not tessellate curves. Each segment contributes its
//! defining points: the endpoints of lines and arcs, and the endpoints plus
//! control points of Bézier curves. Consecutive identical points are merged.
//!
//! # Examples
//!
//! ```
//! use svgpoly::{svg_path_to_polygons, Point};
//!
//! // Two triangles; the second move is relative to where the first began.
//! let polygons = svg_path_to_polygons("m 0 0 10 0 0 10 z m 20 0 10 0 0 10 z").unwrap();
//! assert_eq!(polygons.len(), 2);
//! assert_eq!(polygons[1][0], Point::new(20.0, 0.0));
//! assert!(polygons.iter().all(|p| p.is_closed()));
//! ```
//!
//! Working at the level of resolved segments:
//!
//! ```
//! use svgpoly::{control_points, split_contours, Segment};
//!
//! let paths = split_contours("M 0 0 Q 5 10 10 0 A 5 5 0 0 1 20 0").unwrap();
//! let segments = paths[0].segments();
//! assert!(matches!(segments[0], Segment::Quad(_)));
//! // Arcs are reduced to their endpoints.
//! assert_eq!(control_points(&segments[1]).len(), 2);
//! ```
//!
//! # Features
//!
//! The `std` feature is enabled by default. Without it the crate is
//! `no_std`, still using `alloc`, and the error types do not implement
//! `std::error::Error`. The `serde` feature adds `Serialize` and
//! `Deserialize` to the geometry types, polygons and options.
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade
//! at `debug` and `trace` level; no logger is installed by this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod arc;
mod convert;
mod cubicbez;
mod error;
mod line;
mod options;
mod path;
mod point;
mod polygon;
mod quadbez;
mod segment;
mod shape;
mod svg;
mod vec2;

pub use crate::arc::*;
pub use crate::convert::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::options::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::quadbez::*;
pub use crate::segment::*;
pub use crate::shape::*;
pub use crate::svg::*;
pub use crate::vec2::*;
