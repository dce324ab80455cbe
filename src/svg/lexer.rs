// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokenizing path data into a flat command stream.

use alloc::string::{String, ToString};

use smallvec::SmallVec;

use crate::{ParseError, ParseErrorKind, Point};

/// Argument storage for one command. Arcs have the most, at seven.
type Args = SmallVec<[f64; 7]>;

/// A single path command with its arguments.
///
/// Implicitly repeated argument groups are split into separate commands by
/// the lexer, so every command here carries exactly one group (except a move
/// with no arguments at all, see [`Command::is_bare_move`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    letter: u8,
    offset: usize,
    args: Args,
}

impl Command {
    /// The command letter. Lowercase letters are relative.
    ///
    /// For implicitly repeated commands this is the repeated letter, which
    /// for a move is the matching line command.
    #[inline]
    pub fn letter(&self) -> char {
        self.letter as char
    }

    /// The byte offset of the command in the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The numeric arguments. Arc flags are stored as `0.0` or `1.0`.
    #[inline]
    pub fn args(&self) -> &[f64] {
        &self.args
    }

    /// Are the coordinates of this command relative to the current point?
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }

    /// Is this a move command (`M` or `m`)?
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self.letter, b'M' | b'm')
    }

    /// Is this a move command that was given no coordinates?
    #[inline]
    pub fn is_bare_move(&self) -> bool {
        self.is_move() && self.args.is_empty()
    }

    /// Is this a close-path command?
    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self.letter, b'Z' | b'z')
    }

    /// The `i`th coordinate pair, as given (not resolved).
    #[inline]
    pub(crate) fn pair(&self, i: usize) -> Point {
        Point::new(self.args[2 * i], self.args[2 * i + 1])
    }
}

/// The number of arguments taken by a command letter, or `None` if the
/// letter is not a path command.
fn arity(cmd: u8) -> Option<usize> {
    match cmd.to_ascii_uppercase() {
        b'Z' => Some(0),
        b'H' | b'V' => Some(1),
        b'M' | b'L' | b'T' => Some(2),
        b'S' | b'Q' => Some(4),
        b'C' => Some(6),
        b'A' => Some(7),
        _ => None,
    }
}

fn is_number_start(c: u8) -> bool {
    c == b'-' || c == b'+' || c == b'.' || c.is_ascii_digit()
}

fn is_ws(c: u8) -> bool {
    c == b' ' || c == 9 || c == 10 || c == 12 || c == 13
}

/// Splits path data into [`Command`]s.
///
/// The lexer is an iterator of `Result<Command, ParseError>`. It stops after
/// the first error.
///
/// ```
/// use svgpoly::Lexer;
///
/// let cmds = Lexer::new("m1,2 3,4z").collect::<Result<Vec<_>, _>>().unwrap();
/// let letters: String = cmds.iter().map(|c| c.letter()).collect();
/// assert_eq!(letters, "mlz");
/// assert_eq!(cmds[1].args(), &[3.0, 4.0]);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    data: &'a str,
    ix: usize,
    last_cmd: u8,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the given path data.
    pub fn new(data: &'a str) -> Lexer<'a> {
        Lexer {
            data,
            ix: 0,
            last_cmd: 0,
            failed: false,
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !is_ws(c) {
                break;
            }
            self.ix += 1;
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(c) = self.get_byte() {
            if !c.is_ascii_digit() {
                self.unget();
                break;
            }
            count += 1;
        }
        count
    }

    /// The text of the token starting at `start`, for error reporting.
    fn token_at(&self, start: usize) -> String {
        let rest = &self.data[start..];
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_ascii_whitespace() || c == ',' || c.is_ascii_alphabetic())
            .map_or(rest.len(), |(i, _)| i);
        rest[..end].to_string()
    }

    fn error_at(&mut self, kind: ParseErrorKind, offset: usize) -> ParseError {
        self.failed = true;
        ParseError::new(kind, offset)
    }

    fn get_number(&mut self) -> Result<f64, ParseError> {
        self.skip_ws();
        let start = self.ix;
        let c = match self.get_byte() {
            Some(c) => c,
            None => return Err(self.error_at(ParseErrorKind::UnexpectedEof, start)),
        };
        if !(c == b'-' || c == b'+') {
            self.unget();
        }
        let mut digit_count = self.skip_digits();
        if self.peek_byte() == Some(b'.') {
            self.ix += 1;
            digit_count += self.skip_digits();
        }
        if digit_count == 0 {
            let token = self.token_at(start);
            return Err(self.error_at(ParseErrorKind::InvalidNumber(token), start));
        }
        if let Some(b'e' | b'E') = self.peek_byte() {
            // Only an exponent if digits follow; otherwise leave the letter.
            let mark = self.ix;
            self.ix += 1;
            if let Some(b'-' | b'+') = self.peek_byte() {
                self.ix += 1;
            }
            if self.skip_digits() == 0 {
                self.ix = mark;
            }
        }
        let value = self.data[start..self.ix].parse().map_err(|_| {
            let token = self.data[start..self.ix].to_string();
            self.error_at(ParseErrorKind::InvalidNumber(token), start)
        })?;
        self.opt_comma();
        Ok(value)
    }

    fn get_flag(&mut self) -> Result<f64, ParseError> {
        self.skip_ws();
        let start = self.ix;
        match self.get_byte() {
            Some(b'0') => {}
            Some(b'1') => {
                self.opt_comma();
                return Ok(1.0);
            }
            Some(_) => {
                let c = self.data[start..].chars().next().unwrap_or_default();
                return Err(self.error_at(ParseErrorKind::InvalidFlag(c), start));
            }
            None => return Err(self.error_at(ParseErrorKind::UnexpectedEof, start)),
        }
        self.opt_comma();
        Ok(0.0)
    }

    fn get_args(&mut self, cmd: u8, n: usize) -> Result<Args, ParseError> {
        let is_arc = cmd.eq_ignore_ascii_case(&b'A');
        let mut args = Args::new();
        for i in 0..n {
            let arg = if is_arc && (i == 3 || i == 4) {
                self.get_flag()?
            } else {
                self.get_number()?
            };
            args.push(arg);
        }
        Ok(args)
    }

    fn next_cmd(&mut self) -> Option<Result<Command, ParseError>> {
        self.skip_ws();
        let offset = self.ix;
        let c = self.peek_byte()?;
        let letter = if c.is_ascii_alphabetic() {
            self.ix += 1;
            if arity(c).is_none() {
                return Some(Err(self.error_at(ParseErrorKind::UnknownCommand(c as char), offset)));
            }
            if matches!(c, b'M' | b'm') {
                self.skip_ws();
                if !self.peek_byte().map_or(false, is_number_start) {
                    self.last_cmd = c;
                    return Some(Ok(Command {
                        letter: c,
                        offset,
                        args: Args::new(),
                    }));
                }
            }
            c
        } else if is_number_start(c) {
            match self.last_cmd {
                // Numbers before any command begin a relative move.
                0 => b'm',
                b'Z' | b'z' => {
                    return Some(Err(self.error_at(ParseErrorKind::UnexpectedNumber, offset)))
                }
                // A move is only a move once; further pairs are lines.
                b'M' => b'L',
                b'm' => b'l',
                last => last,
            }
        } else {
            let token = self.token_at(offset);
            return Some(Err(self.error_at(ParseErrorKind::InvalidNumber(token), offset)));
        };
        let n = arity(letter).unwrap_or(0);
        let args = match self.get_args(letter, n) {
            Ok(args) => args,
            Err(e) => return Some(Err(e)),
        };
        self.last_cmd = letter;
        Some(Ok(Command {
            letter,
            offset,
            args,
        }))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.next_cmd()
    }
}
