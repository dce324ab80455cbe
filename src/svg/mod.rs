// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data.
//!
//! Path data is handled in three stages: the [`Lexer`] turns a string into
//! [`Command`]s, [`split_contours`] cuts the command stream before every
//! move, and [`resolve`] folds each run through a [`PenState`] to produce a
//! [`Path`](crate::Path) in absolute coordinates.

mod lexer;
mod resolve;
mod split;

pub use self::lexer::{Command, Lexer};
pub use self::resolve::{parse, resolve, PenState};
pub use self::split::{split_contours, split_contours_with};
