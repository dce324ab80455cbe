// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;
use core::fmt;

/// An error which can be returned when parsing SVG path data.
///
/// The offset is the byte position in the input of the token at fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

/// The reason parsing failed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Encountered an unknown command letter.
    UnknownCommand(char),
    /// A number was expected, but this token is not one.
    InvalidNumber(String),
    /// An arc flag must be `0` or `1`.
    InvalidFlag(char),
    /// The input string ended while still expecting arguments.
    UnexpectedEof,
    /// Numbers were found where the command takes no arguments.
    UnexpectedNumber,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError { kind, offset }
    }

    /// What went wrong.
    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The byte offset of the offending token.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownCommand(letter) => {
                write!(f, "Unknown command \"{letter}\"")?;
            }
            ParseErrorKind::InvalidNumber(token) => {
                write!(f, "Unable to parse a number from \"{token}\"")?;
            }
            ParseErrorKind::InvalidFlag(c) => write!(f, "Invalid arc flag \"{c}\"")?,
            ParseErrorKind::UnexpectedEof => write!(f, "Unexpected EOF")?,
            ParseErrorKind::UnexpectedNumber => write!(f, "Unexpected number")?,
        }
        write!(f, " at offset {}", self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// The path data did not decompose into the expected number of contours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContourCountError {
    /// The number of contours the caller required.
    pub expected: usize,
    /// The number of contours the path data produced.
    pub found: usize,
}

impl fmt::Display for ContourCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} contour(s), found {}",
            self.expected, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContourCountError {}

/// An error from a conversion that also checks the shape of its result.
///
/// `Parse` means the input is bad; `ContourCount` means the input is fine
/// but not of the shape the caller asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// The path data could not be parsed.
    Parse(ParseError),
    /// The path data parsed, but into the wrong number of contours.
    ContourCount(ContourCountError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(e) => write!(f, "invalid path data: {e}"),
            ConvertError::ContourCount(e) => write!(f, "unexpected path structure: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Parse(e) => Some(e),
            ConvertError::ContourCount(e) => Some(e),
        }
    }
}

impl From<ParseError> for ConvertError {
    fn from(e: ParseError) -> ConvertError {
        ConvertError::Parse(e)
    }
}

impl From<ContourCountError> for ConvertError {
    fn from(e: ContourCountError) -> ConvertError {
        ConvertError::ContourCount(e)
    }
}
