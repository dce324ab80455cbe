// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting path data into contours.

use alloc::vec::Vec;

use log::debug;

use crate::{
    resolve, Command, ContourOrigin, ContourSplit, ConvertOptions, Lexer, ParseError, Path, Point,
};

impl ContourSplit {
    fn starts_contour(self, cmd: &Command) -> bool {
        match self {
            ContourSplit::RelativeMove => cmd.is_move() && cmd.is_relative(),
            ContourSplit::AnyMove => cmd.is_move(),
        }
    }
}

/// Iterate over runs of commands, each beginning at a command that starts a
/// contour.
///
/// The first run may start with some other command, if the data does.
fn contour_runs(commands: &[Command], split: ContourSplit) -> impl Iterator<Item = &[Command]> {
    let mut rest = commands;
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest[1..]
            .iter()
            .position(|cmd| split.starts_contour(cmd))
            .map_or(rest.len(), |ix| ix + 1);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

/// Split path data into one resolved path per contour, with default options.
///
/// See [`split_contours_with`].
///
/// # Errors
///
/// Returns the first [`ParseError`] in the data; no contours are returned
/// in that case.
pub fn split_contours(data: &str) -> Result<Vec<Path>, ParseError> {
    split_contours_with(data, &ConvertOptions::default())
}

/// Split path data into one resolved path per contour.
///
/// The data is tokenized once and the command stream is cut before each
/// move selected by [`ConvertOptions::split`]. By default that is every
/// relative move (`m`), so the number of contours is one more than the
/// number of `m` commands after the first command; an absolute move inside a
/// contour is joined to it by a line. A move with no coordinates, standing
/// alone, makes no contour.
///
/// The leading relative move of each contour after the first is measured
/// from the previous contour as selected by [`ConvertOptions::origin`].
///
/// ```
/// use svgpoly::{split_contours, Point};
///
/// let paths = split_contours("m 10 20 30 40 z m 100 200 10 20").unwrap();
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[1].start(), Point::new(110., 220.));
/// ```
///
/// # Errors
///
/// Returns the first [`ParseError`] in the data; no contours are returned
/// in that case.
pub fn split_contours_with(data: &str, options: &ConvertOptions) -> Result<Vec<Path>, ParseError> {
    let commands = Lexer::new(data).collect::<Result<Vec<_>, _>>()?;
    let mut paths = Vec::new();
    let mut origin = Point::ORIGIN;
    for run in contour_runs(&commands, options.split) {
        if run.len() == 1 && run[0].is_bare_move() {
            debug!("dropping empty contour at offset {}", run[0].offset());
            continue;
        }
        let path = resolve(run, origin);
        debug!(
            "contour {} at offset {}: {} segment(s) from {:?} to {:?}",
            paths.len(),
            run[0].offset(),
            path.len(),
            path.start(),
            path.end()
        );
        origin = match options.origin {
            ContourOrigin::Start => path.start(),
            ContourOrigin::End => path.end(),
        };
        paths.push(path);
    }
    Ok(paths)
}
