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

//! # Epoch Days
//!
//! A calendrical axis counting whole days since an arbitrary epoch. Days
//! are discrete: the successor of day `n` is day `n + 1`, and intervals on
//! this axis canonicalize to closed ends.

use num_traits::{CheckedAdd, CheckedSub, PrimInt};
use std::fmt;
use tidespan_core::axis::{Temporal, TimeAxis};

/// A day count since the epoch, backed by a primitive integer.
///
/// # Examples
///
/// ```rust
/// # use tidespan_axis::day::DayNumber;
/// # use tidespan_core::axis::Temporal;
/// let a = DayNumber::new(10i32);
/// let b = DayNumber::new(12i32);
/// assert!(a.is_before(&b));
/// assert_eq!(a.value(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DayNumber<T>(T)
where
    T: PrimInt;

impl<T> DayNumber<T>
where
    T: PrimInt,
{
    /// Creates a day count from a raw value.
    #[inline]
    pub fn new(value: T) -> Self {
        DayNumber(value)
    }

    /// Returns the raw day count.
    #[inline]
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T> Temporal for DayNumber<T> where T: PrimInt {}

impl<T> fmt::Display for DayNumber<T>
where
    T: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The calendrical day axis.
///
/// Stepping saturates into `None` at the limits of the backing integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct DayAxis;

impl<T> TimeAxis<DayNumber<T>> for DayAxis
where
    T: PrimInt + CheckedAdd + CheckedSub,
{
    #[inline]
    fn step_forward(&self, point: &DayNumber<T>) -> Option<DayNumber<T>> {
        point.0.checked_add(&T::one()).map(DayNumber)
    }

    #[inline]
    fn step_backwards(&self, point: &DayNumber<T>) -> Option<DayNumber<T>> {
        point.0.checked_sub(&T::one()).map(DayNumber)
    }

    #[inline]
    fn is_calendrical(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidespan_core::boundary::Boundary;
    use tidespan_core::error::IntervalError;
    use tidespan_core::format::{BracketPolicy, DisplayPrinter};
    use tidespan_core::interval::Interval;

    fn day(value: i32) -> DayNumber<i32> {
        DayNumber::new(value)
    }

    #[test]
    fn test_stepping() {
        assert_eq!(DayAxis.step_forward(&day(41)), Some(day(42)));
        assert_eq!(DayAxis.step_backwards(&day(42)), Some(day(41)));
        assert_eq!(DayAxis.step_forward(&DayNumber::new(i8::MAX)), None);
        assert_eq!(DayAxis.step_backwards(&DayNumber::new(i8::MIN)), None);
    }

    #[test]
    fn test_canonical_closes_end() {
        let span = Interval::between(
            DayAxis,
            Boundary::closed(day(1)),
            Boundary::open(day(10)),
        )
        .unwrap();
        let canonical = span.to_canonical().unwrap();
        assert_eq!(canonical.end(), &Boundary::closed(day(9)));
    }

    #[test]
    fn test_canonicalize_fails_at_width_limit() {
        let span = Interval::between(
            DayAxis,
            Boundary::open(DayNumber::new(i8::MAX)),
            Boundary::infinite_future(),
        )
        .unwrap();
        assert_eq!(
            span.to_canonical().unwrap_err(),
            IntervalError::CannotCanonicalize
        );
    }

    #[test]
    fn test_relations_on_day_axis() {
        let january = Interval::between(
            DayAxis,
            Boundary::closed(day(0)),
            Boundary::open(day(31)),
        )
        .unwrap();
        let february = Interval::between(
            DayAxis,
            Boundary::closed(day(31)),
            Boundary::open(day(59)),
        )
        .unwrap();
        assert!(january.meets(&february));
        assert!(january.is_before(&february));
        assert!(!january.intersects(&february));
        assert!(january.abuts(&february));
    }

    #[test]
    fn test_printing() {
        let span = Interval::between(
            DayAxis,
            Boundary::closed(day(1)),
            Boundary::open(day(10)),
        )
        .unwrap();
        assert_eq!(span.print(&DisplayPrinter).unwrap(), "1/9");
        assert_eq!(
            span.print_with_policy(&DisplayPrinter, BracketPolicy::ShowAlways)
                .unwrap(),
            "[1/10)"
        );
        assert_eq!(span.to_string(), "[1/10)");
    }
}
