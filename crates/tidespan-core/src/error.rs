// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Errors
//!
//! Failure cases of interval construction, transformation, and rendering.
//! Fallible operations return `Result` with one of these types; the
//! relation predicates themselves are total and never error.

use std::error::Error;
use std::fmt;

/// The specific way a start/end boundary pair fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryViolation {
    /// The start position lies chronologically after the end position.
    StartAfterEnd,
    /// Both boundaries are finite, open, and at the same point, which
    /// denotes no span at all.
    OpenZeroWidth,
    /// Both boundaries are infinite on the same side.
    InfiniteEqual,
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryViolation::StartAfterEnd => {
                write!(f, "start boundary lies after end boundary")
            }
            BoundaryViolation::OpenZeroWidth => {
                write!(f, "open boundaries at the same point span nothing")
            }
            BoundaryViolation::InfiniteEqual => {
                write!(f, "start and end boundaries are infinite on the same side")
            }
        }
    }
}

/// Errors raised by interval construction and transformation.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::error::{BoundaryViolation, IntervalError};
/// let err = IntervalError::InvalidBoundaries(BoundaryViolation::StartAfterEnd);
/// assert_eq!(
///     err.to_string(),
///     "invalid interval boundaries: start boundary lies after end boundary"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// The requested boundary pair does not form a valid interval.
    InvalidBoundaries(BoundaryViolation),
    /// The operation needs a finite boundary but was given an infinite one.
    UnsupportedAtInfinity,
    /// Canonicalization needs a neighbouring point the axis cannot supply.
    CannotCanonicalize,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::InvalidBoundaries(violation) => {
                write!(f, "invalid interval boundaries: {}", violation)
            }
            IntervalError::UnsupportedAtInfinity => {
                write!(f, "operation is not defined on an infinite boundary")
            }
            IntervalError::CannotCanonicalize => {
                write!(f, "axis cannot step to the point required for the canonical form")
            }
        }
    }
}

impl Error for IntervalError {}

/// Errors raised while rendering an interval into a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintError {
    /// The interval has no canonical form on its axis, so the requested
    /// representation cannot be produced.
    CannotCanonicalize,
    /// The underlying sink rejected a write.
    Sink(fmt::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::CannotCanonicalize => {
                write!(f, "interval has no canonical form to render")
            }
            PrintError::Sink(_) => write!(f, "failed to write to the output sink"),
        }
    }
}

impl Error for PrintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrintError::Sink(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<fmt::Error> for PrintError {
    fn from(err: fmt::Error) -> Self {
        PrintError::Sink(err)
    }
}

impl From<IntervalError> for PrintError {
    fn from(_: IntervalError) -> Self {
        PrintError::CannotCanonicalize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            IntervalError::InvalidBoundaries(BoundaryViolation::OpenZeroWidth).to_string(),
            "invalid interval boundaries: open boundaries at the same point span nothing"
        );
        assert_eq!(
            IntervalError::UnsupportedAtInfinity.to_string(),
            "operation is not defined on an infinite boundary"
        );
        assert_eq!(
            PrintError::CannotCanonicalize.to_string(),
            "interval has no canonical form to render"
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(PrintError::from(fmt::Error), PrintError::Sink(fmt::Error));
        assert_eq!(
            PrintError::from(IntervalError::CannotCanonicalize),
            PrintError::CannotCanonicalize
        );
        assert_eq!(
            PrintError::from(IntervalError::UnsupportedAtInfinity),
            PrintError::CannotCanonicalize
        );
    }

    #[test]
    fn test_source_chain() {
        let err = PrintError::Sink(fmt::Error);
        assert!(err.source().is_some());
        assert!(PrintError::CannotCanonicalize.source().is_none());
    }
}
