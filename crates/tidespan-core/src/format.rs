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

//! # Interval Rendering
//!
//! Turns intervals into text. Points are rendered through a caller-supplied
//! [`PointPrinter`], so the engine never needs to know what a point looks
//! like.
//!
//! Three forms are supported:
//!
//! - The structural `Display` form shows the raw boundaries with bracket
//!   notation, e.g. `[1/10)`.
//! - Pattern printing substitutes the canonical start and end points into a
//!   literal pattern such as `{0}/{1}`.
//! - Technical printing renders `start`, a separator, and `end` with a
//!   configurable [`BracketPolicy`] deciding whether bracket notation is
//!   emitted at all.

use crate::axis::{Temporal, TimeAxis};
use crate::boundary::Boundary;
use crate::error::PrintError;
use crate::interval::Interval;
use smallvec::SmallVec;
use std::fmt;
use std::fmt::Write as _;

/// Symbol rendered for the unbounded past.
pub const INFINITE_PAST_SYMBOL: &str = "-\u{221E}";

/// Symbol rendered for the unbounded future.
pub const INFINITE_FUTURE_SYMBOL: &str = "+\u{221E}";

/// The default pattern used by [`Interval::print`]: start and end separated
/// by a solidus.
pub const DEFAULT_INTERVAL_PATTERN: &str = "{0}/{1}";

/// Renders a single point into a text sink.
pub trait PointPrinter<T> {
    /// Writes `point` to `sink`.
    fn print<W: fmt::Write>(&self, point: &T, sink: &mut W) -> fmt::Result;
}

/// A [`PointPrinter`] that delegates to the point's `Display`
/// implementation.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::format::{DisplayPrinter, PointPrinter};
/// let mut out = String::new();
/// DisplayPrinter.print(&42, &mut out).unwrap();
/// assert_eq!(out, "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct DisplayPrinter;

impl<T> PointPrinter<T> for DisplayPrinter
where
    T: fmt::Display,
{
    #[inline]
    fn print<W: fmt::Write>(&self, point: &T, sink: &mut W) -> fmt::Result {
        write!(sink, "{}", point)
    }
}

/// Decides whether technical printing emits bracket notation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BracketPolicy {
    /// Always emit brackets.
    ShowAlways,
    /// Never emit brackets; the interval is canonicalized before printing.
    ShowNever,
    /// Emit brackets only if the interval deviates from the canonical
    /// convention of its axis.
    ShowWhenNonStandard,
}

impl BracketPolicy {
    /// Returns `true` if `interval` should be rendered with brackets under
    /// this policy.
    ///
    /// The canonical convention is a closed finite start together with a
    /// closed finite end on a calendrical axis or an open finite end on a
    /// chronometric one; everything else is non-standard.
    pub fn display<T, A>(&self, interval: &Interval<T, A>) -> bool
    where
        T: Temporal + Clone,
        A: TimeAxis<T> + Clone,
    {
        match self {
            BracketPolicy::ShowAlways => true,
            BracketPolicy::ShowNever => false,
            BracketPolicy::ShowWhenNonStandard => {
                if !interval.is_finite() || interval.start().is_open() {
                    return true;
                }
                if interval.axis().is_calendrical() {
                    interval.end().is_open()
                } else {
                    interval.end().is_closed()
                }
            }
        }
    }
}

enum PatternSegment<'a> {
    Literal(&'a str),
    Start,
    End,
}

fn parse_pattern(pattern: &str) -> SmallVec<[PatternSegment<'_>; 3]> {
    let mut segments = SmallVec::new();
    let bytes = pattern.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{'
            && i + 2 < bytes.len()
            && bytes[i + 2] == b'}'
            && (bytes[i + 1] == b'0' || bytes[i + 1] == b'1')
        {
            if literal_start < i {
                segments.push(PatternSegment::Literal(&pattern[literal_start..i]));
            }
            segments.push(if bytes[i + 1] == b'0' {
                PatternSegment::Start
            } else {
                PatternSegment::End
            });
            i += 3;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    if literal_start < pattern.len() {
        segments.push(PatternSegment::Literal(&pattern[literal_start..]));
    }
    segments
}

fn left_bracket<T>(start: &Boundary<T>) -> char {
    if start.is_infinite() || start.is_open() {
        '('
    } else {
        '['
    }
}

fn right_bracket<T>(end: &Boundary<T>) -> char {
    if end.is_infinite() || end.is_open() {
        ')'
    } else {
        ']'
    }
}

fn print_boundary<T, P, W>(
    boundary: &Boundary<T>,
    infinity_symbol: &str,
    printer: &P,
    sink: &mut W,
) -> Result<(), PrintError>
where
    P: PointPrinter<T>,
    W: fmt::Write,
{
    match boundary.temporal() {
        Some(point) => printer.print(point, sink)?,
        None => sink.write_str(infinity_symbol)?,
    }
    Ok(())
}

impl<T, A> Interval<T, A>
where
    T: Temporal + Clone,
    A: TimeAxis<T> + Clone,
{
    /// Renders the canonical form of this interval with the default
    /// `{0}/{1}` pattern.
    ///
    /// # Errors
    ///
    /// Fails if the interval cannot be canonicalized on its axis.
    pub fn print<P>(&self, printer: &P) -> Result<String, PrintError>
    where
        P: PointPrinter<T>,
    {
        let mut out = String::new();
        self.print_pattern(printer, DEFAULT_INTERVAL_PATTERN, &mut out)?;
        Ok(out)
    }

    /// Renders the canonical form of this interval into `sink`, replacing
    /// every `{0}` in `pattern` with the start point and every `{1}` with
    /// the end point. All other pattern text is copied verbatim. Infinite
    /// boundaries render as the infinity symbols.
    ///
    /// # Errors
    ///
    /// Fails if the interval cannot be canonicalized or the sink rejects a
    /// write.
    pub fn print_pattern<P, W>(
        &self,
        printer: &P,
        pattern: &str,
        sink: &mut W,
    ) -> Result<(), PrintError>
    where
        P: PointPrinter<T>,
        W: fmt::Write,
    {
        let canonical = self.to_canonical()?;
        for segment in parse_pattern(pattern) {
            match segment {
                PatternSegment::Literal(text) => sink.write_str(text)?,
                PatternSegment::Start => print_boundary(
                    canonical.start(),
                    INFINITE_PAST_SYMBOL,
                    printer,
                    sink,
                )?,
                PatternSegment::End => print_boundary(
                    canonical.end(),
                    INFINITE_FUTURE_SYMBOL,
                    printer,
                    sink,
                )?,
            }
        }
        Ok(())
    }

    /// Renders this interval as `start`, `separator`, `end` with separate
    /// printers for both sides.
    ///
    /// If `policy` decides in favour of brackets the raw boundaries are
    /// rendered with bracket notation; otherwise the canonical form is
    /// rendered without brackets. The policy judges the interval as given,
    /// before any canonicalization.
    ///
    /// # Errors
    ///
    /// Fails if a bracket-free rendering needs a canonical form that does
    /// not exist, or the sink rejects a write.
    pub fn print_technical<PS, PE, W>(
        &self,
        start_printer: &PS,
        separator: char,
        end_printer: &PE,
        policy: BracketPolicy,
        sink: &mut W,
    ) -> Result<(), PrintError>
    where
        PS: PointPrinter<T>,
        PE: PointPrinter<T>,
        W: fmt::Write,
    {
        if policy.display(self) {
            sink.write_char(left_bracket(self.start()))?;
            print_boundary(self.start(), INFINITE_PAST_SYMBOL, start_printer, sink)?;
            sink.write_char(separator)?;
            print_boundary(self.end(), INFINITE_FUTURE_SYMBOL, end_printer, sink)?;
            sink.write_char(right_bracket(self.end()))?;
        } else {
            let canonical = self.to_canonical()?;
            print_boundary(canonical.start(), INFINITE_PAST_SYMBOL, start_printer, sink)?;
            sink.write_char(separator)?;
            print_boundary(canonical.end(), INFINITE_FUTURE_SYMBOL, end_printer, sink)?;
        }
        Ok(())
    }

    /// Convenience wrapper around [`Interval::print_technical`] using a
    /// single printer, a solidus separator, and a fresh string sink.
    pub fn print_with_policy<P>(
        &self,
        printer: &P,
        policy: BracketPolicy,
    ) -> Result<String, PrintError>
    where
        P: PointPrinter<T>,
    {
        let mut out = String::new();
        self.print_technical(printer, '/', printer, policy, &mut out)?;
        Ok(out)
    }
}

/// The structural form: raw boundaries with bracket notation, infinite
/// sides rendered with the infinity symbols.
impl<T, A> fmt::Display for Interval<T, A>
where
    T: Temporal + Clone + fmt::Display,
    A: TimeAxis<T> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(left_bracket(self.start()))?;
        match self.start().temporal() {
            Some(point) => write!(f, "{}", point)?,
            None => f.write_str(INFINITE_PAST_SYMBOL)?,
        }
        f.write_char('/')?;
        match self.end().temporal() {
            Some(point) => write!(f, "{}", point)?,
            None => f.write_str(INFINITE_FUTURE_SYMBOL)?,
        }
        f.write_char(right_bracket(self.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{d, t, DayLine, TickLine};

    #[test]
    fn test_display_shows_raw_boundaries() {
        assert_eq!(d(1, 10).to_string(), "[1/10)");
        let closed =
            Interval::between(DayLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        assert_eq!(closed.to_string(), "[1/9]");
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert_eq!(tail.to_string(), "[0/+\u{221E})");
        let head =
            Interval::between(DayLine, Boundary::infinite_past(), Boundary::open(5)).unwrap();
        assert_eq!(head.to_string(), "(-\u{221E}/5)");
    }

    #[test]
    fn test_print_default_pattern() {
        // Calendrical canonical form closes the end.
        assert_eq!(d(1, 10).print(&DisplayPrinter).unwrap(), "1/9");
        // Chronometric canonical form keeps the end open.
        assert_eq!(t(1, 10).print(&DisplayPrinter).unwrap(), "1/10");
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert_eq!(tail.print(&DisplayPrinter).unwrap(), "0/+\u{221E}");
    }

    #[test]
    fn test_print_custom_pattern() {
        let mut out = String::new();
        d(1, 10)
            .print_pattern(&DisplayPrinter, "from {0} to {1}", &mut out)
            .unwrap();
        assert_eq!(out, "from 1 to 9");

        out.clear();
        d(1, 10)
            .print_pattern(&DisplayPrinter, "{1} <- {0}", &mut out)
            .unwrap();
        assert_eq!(out, "9 <- 1");

        // Unknown placeholders pass through as literal text.
        out.clear();
        d(1, 10)
            .print_pattern(&DisplayPrinter, "{2}{0}", &mut out)
            .unwrap();
        assert_eq!(out, "{2}1");
    }

    #[test]
    fn test_print_pattern_fails_without_canonical_form() {
        let span = Interval::between(
            DayLine,
            Boundary::open(i32::MAX),
            Boundary::infinite_future(),
        )
        .unwrap();
        let mut out = String::new();
        assert_eq!(
            span.print_pattern(&DisplayPrinter, "{0}/{1}", &mut out),
            Err(PrintError::CannotCanonicalize)
        );
    }

    #[test]
    fn test_bracket_policy() {
        let standard =
            Interval::between(DayLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        assert!(!BracketPolicy::ShowWhenNonStandard.display(&standard));
        // An open end is non-standard on a calendrical axis.
        assert!(BracketPolicy::ShowWhenNonStandard.display(&d(1, 10)));
        // An open end is the standard on a chronometric axis.
        assert!(!BracketPolicy::ShowWhenNonStandard.display(&t(1, 10)));
        let closed_ticks =
            Interval::between(TickLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        assert!(BracketPolicy::ShowWhenNonStandard.display(&closed_ticks));
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert!(BracketPolicy::ShowWhenNonStandard.display(&tail));
        assert!(BracketPolicy::ShowAlways.display(&standard));
        assert!(!BracketPolicy::ShowNever.display(&d(1, 10)));
    }

    #[test]
    fn test_print_technical() {
        let brackets = d(1, 10)
            .print_with_policy(&DisplayPrinter, BracketPolicy::ShowAlways)
            .unwrap();
        assert_eq!(brackets, "[1/10)");

        let plain = d(1, 10)
            .print_with_policy(&DisplayPrinter, BracketPolicy::ShowNever)
            .unwrap();
        assert_eq!(plain, "1/9");

        // Non-standard form keeps its raw boundaries with brackets.
        let non_standard = d(1, 10)
            .print_with_policy(&DisplayPrinter, BracketPolicy::ShowWhenNonStandard)
            .unwrap();
        assert_eq!(non_standard, "[1/10)");

        // Standard form prints without brackets.
        let standard =
            Interval::between(DayLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        let rendered = standard
            .print_with_policy(&DisplayPrinter, BracketPolicy::ShowWhenNonStandard)
            .unwrap();
        assert_eq!(rendered, "1/9");
    }

    #[test]
    fn test_print_technical_infinite_sides() {
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        let rendered = tail
            .print_with_policy(&DisplayPrinter, BracketPolicy::ShowWhenNonStandard)
            .unwrap();
        assert_eq!(rendered, "[0/+\u{221E})");
    }
}
