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

//! Shared test fixtures: a discrete day line and a dense tick line over
//! plain `i32` points, plus shorthand constructors for the common
//! closed-start/open-end case.

use crate::axis::TimeAxis;
use crate::boundary::Boundary;
use crate::interval::Interval;

/// A calendrical axis counting days as `i32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct DayLine;

impl TimeAxis<i32> for DayLine {
    fn step_forward(&self, point: &i32) -> Option<i32> {
        point.checked_add(1)
    }

    fn step_backwards(&self, point: &i32) -> Option<i32> {
        point.checked_sub(1)
    }

    fn is_calendrical(&self) -> bool {
        true
    }
}

/// A chronometric axis counting ticks as `i32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct TickLine;

impl TimeAxis<i32> for TickLine {
    fn step_forward(&self, point: &i32) -> Option<i32> {
        point.checked_add(1)
    }

    fn step_backwards(&self, point: &i32) -> Option<i32> {
        point.checked_sub(1)
    }

    fn is_calendrical(&self) -> bool {
        false
    }
}

/// Closed-start/open-end day interval `[start, end)`.
pub(crate) fn d(start: i32, end: i32) -> Interval<i32, DayLine> {
    Interval::between(DayLine, Boundary::closed(start), Boundary::open(end)).unwrap()
}

/// Closed-start/open-end tick interval `[start, end)`.
pub(crate) fn t(start: i32, end: i32) -> Interval<i32, TickLine> {
    Interval::between(TickLine, Boundary::closed(start), Boundary::open(end)).unwrap()
}
