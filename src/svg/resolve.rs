// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving commands into absolute segments.

use alloc::vec::Vec;

use log::trace;

use crate::{
    Command, ControlPolygon, CubicBez, Lexer, Line, ParseError, Path, Point, QuadBez, Segment,
    SvgArc, Vec2,
};

/// The pen state carried from one command to the next.
///
/// Resolution is a fold over the command stream: each call to
/// [`step`](PenState::step) consumes a state and returns the next one,
/// together with the segment the command drew, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    /// The current point.
    pub current: Point,
    /// Where the current subpath began; close-path returns here.
    pub subpath_start: Point,
    /// The segment drawn by the previous command, used to infer the first
    /// control point of smooth curves.
    pub last_segment: Option<Segment>,
}

impl PenState {
    /// A pen resting at `origin`, which is also the subpath start.
    pub fn new(origin: Point) -> PenState {
        PenState {
            current: origin,
            subpath_start: origin,
            last_segment: None,
        }
    }

    fn resolve(&self, cmd: &Command, pt: Point) -> Point {
        if cmd.is_relative() {
            self.current + pt.to_vec2()
        } else {
            pt
        }
    }

    /// Apply one command.
    ///
    /// Moves update the current point and the subpath start and draw
    /// nothing. Close-path draws a line back to the subpath start, even if
    /// the pen is already there.
    #[must_use]
    pub fn step(self, cmd: &Command) -> (PenState, Option<Segment>) {
        let p0 = self.current;
        let segment = match cmd.letter().to_ascii_uppercase() {
            'M' => {
                if cmd.is_bare_move() {
                    return (self, None);
                }
                let to = self.resolve(cmd, cmd.pair(0));
                let next = PenState::new(to);
                return (next, None);
            }
            'Z' => Segment::Line(Line::new(p0, self.subpath_start)),
            'L' => Segment::Line(Line::new(p0, self.resolve(cmd, cmd.pair(0)))),
            'H' => {
                let x = cmd.args()[0];
                let x = if cmd.is_relative() { p0.x + x } else { x };
                Segment::Line(Line::new(p0, Point::new(x, p0.y)))
            }
            'V' => {
                let y = cmd.args()[0];
                let y = if cmd.is_relative() { p0.y + y } else { y };
                Segment::Line(Line::new(p0, Point::new(p0.x, y)))
            }
            'C' => Segment::Cubic(CubicBez::new(
                p0,
                self.resolve(cmd, cmd.pair(0)),
                self.resolve(cmd, cmd.pair(1)),
                self.resolve(cmd, cmd.pair(2)),
            )),
            'S' => {
                let p1 = match self.last_segment {
                    Some(Segment::Cubic(prev)) => prev.reflected_control(),
                    _ => p0,
                };
                Segment::Cubic(CubicBez::new(
                    p0,
                    p1,
                    self.resolve(cmd, cmd.pair(0)),
                    self.resolve(cmd, cmd.pair(1)),
                ))
            }
            'Q' => Segment::Quad(QuadBez::new(
                p0,
                self.resolve(cmd, cmd.pair(0)),
                self.resolve(cmd, cmd.pair(1)),
            )),
            'T' => {
                let p1 = match self.last_segment {
                    Some(Segment::Quad(prev)) => prev.reflected_control(),
                    _ => p0,
                };
                Segment::Quad(QuadBez::new(p0, p1, self.resolve(cmd, cmd.pair(0))))
            }
            'A' => {
                let args = cmd.args();
                let to = self.resolve(cmd, Point::new(args[5], args[6]));
                Segment::Arc(SvgArc {
                    from: p0,
                    to,
                    radii: Vec2::new(args[0], args[1]),
                    x_rotation: args[2],
                    large_arc: args[3] != 0.0,
                    sweep: args[4] != 0.0,
                })
            }
            // The lexer only produces the letters above.
            _ => return (self, None),
        };
        let next = PenState {
            current: segment.end(),
            subpath_start: self.subpath_start,
            last_segment: Some(segment),
        };
        (next, Some(segment))
    }
}

/// Resolve the commands of one contour into a path.
///
/// Coordinates of a leading relative move are taken from `origin`; if the
/// commands do not start with a move, the path starts at `origin`.
///
/// A later move keeps the path in one piece: it is joined to the previous
/// pen position by a line, and starts a new subpath for close-path.
pub fn resolve(commands: &[Command], origin: Point) -> Path {
    let mut state = PenState::new(origin);
    let mut commands = commands.iter().peekable();
    if let Some(cmd) = commands.next_if(|cmd| cmd.is_move()) {
        state = state.step(cmd).0;
    }
    let mut path = Path::new(state.current);
    for cmd in commands {
        let (next, segment) = state.step(cmd);
        let segment = match segment {
            Some(segment) => Some(segment),
            None if cmd.is_move() && !cmd.is_bare_move() => {
                Some(Segment::Line(Line::new(state.current, next.current)))
            }
            None => None,
        };
        trace!("{} at {}: {:?}", cmd.letter(), cmd.offset(), segment);
        if let Some(segment) = segment {
            path.push(segment);
        }
        if cmd.is_close() {
            path.set_closed();
        }
        state = next;
    }
    path
}

/// Parse path data describing a single contour.
///
/// Relative coordinates of a leading move are measured from `(0, 0)`.
///
/// ```
/// use svgpoly::{parse, Point};
///
/// let path = parse("m 10 20 c 0 10 10 10 10 0 z").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.end(), Point::new(10., 20.));
/// assert!(path.is_closed());
/// ```
///
/// Moves after the first command are joined by lines, as in [`resolve`].
/// Use [`split_contours`](crate::split_contours) for path data with several
/// contours.
///
/// # Errors
///
/// Any [`ParseError`] from the path data.
pub fn parse(data: &str) -> Result<Path, ParseError> {
    let commands = Lexer::new(data).collect::<Result<Vec<_>, _>>()?;
    Ok(resolve(&commands, Point::ORIGIN))
}
