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

//! # Intervals
//!
//! The central entity: a span between two boundaries on a timeline. An
//! interval is constructed through the validating [`Interval::between`]
//! constructor and is immutable afterwards; every mutator returns a new
//! interval and revalidates it.
//!
//! The relation predicates (Allen's interval algebra and its derived
//! queries) live in the `relation` submodule and are implemented directly
//! on `Interval`.

mod relation;

use crate::axis::{Temporal, TimeAxis};
use crate::boundary::{self, Boundary, IntervalEdge};
use crate::error::{BoundaryViolation, IntervalError};

/// A temporal span between a start boundary and an end boundary.
///
/// The start may be finite or the unbounded past; the end may be finite or
/// the unbounded future. Validation guarantees that the start position never
/// lies after the end position, so every constructed interval is
/// well-formed (though it may still be empty, see [`Interval::is_empty`]).
///
/// The axis value is carried inside the interval. It is expected to be a
/// small, cheaply clonable capability (typically a zero-sized type).
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::axis::TimeAxis;
/// # use tidespan_core::boundary::Boundary;
/// # use tidespan_core::interval::Interval;
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// struct Days;
///
/// impl TimeAxis<i32> for Days {
///     fn step_forward(&self, point: &i32) -> Option<i32> {
///         point.checked_add(1)
///     }
///     fn step_backwards(&self, point: &i32) -> Option<i32> {
///         point.checked_sub(1)
///     }
///     fn is_calendrical(&self) -> bool {
///         true
///     }
/// }
///
/// let span = Interval::between(Days, Boundary::closed(1), Boundary::open(10)).unwrap();
/// assert!(span.contains_point(&1));
/// assert!(span.contains_point(&9));
/// assert!(!span.contains_point(&10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval<T, A>
where
    T: Temporal + Clone,
    A: TimeAxis<T> + Clone,
{
    start: Boundary<T>,
    end: Boundary<T>,
    axis: A,
}

impl<T, A> Interval<T, A>
where
    T: Temporal + Clone,
    A: TimeAxis<T> + Clone,
{
    /// Creates an interval from a start and end boundary on `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBoundaries`] if the start position
    /// lies after the end position, if both boundaries are infinite on the
    /// same side, or if both are open at the same finite point.
    pub fn between(axis: A, start: Boundary<T>, end: Boundary<T>) -> Result<Self, IntervalError> {
        if boundary::chronologically_after(&start, &end) {
            return Err(IntervalError::InvalidBoundaries(
                BoundaryViolation::StartAfterEnd,
            ));
        }
        if start.is_infinite()
            && end.is_infinite()
            && boundary::chronologically_simultaneous(&start, &end)
        {
            return Err(IntervalError::InvalidBoundaries(
                BoundaryViolation::InfiniteEqual,
            ));
        }
        if start.is_open() && end.is_open() && boundary::chronologically_simultaneous(&start, &end)
        {
            return Err(IntervalError::InvalidBoundaries(
                BoundaryViolation::OpenZeroWidth,
            ));
        }
        Ok(Interval { start, end, axis })
    }

    /// Returns the start boundary.
    #[inline]
    pub fn start(&self) -> &Boundary<T> {
        &self.start
    }

    /// Returns the end boundary.
    #[inline]
    pub fn end(&self) -> &Boundary<T> {
        &self.end
    }

    /// Returns the axis this interval lives on.
    #[inline]
    pub fn axis(&self) -> &A {
        &self.axis
    }

    /// Returns `true` if both boundaries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.start.is_infinite() && !self.end.is_infinite()
    }

    /// Returns `true` if the interval contains no point at all.
    ///
    /// Only a finite interval can be empty. On every axis a closed-start
    /// interval whose open end coincides with its start is empty; the
    /// open-start cases additionally consult the axis, because an open
    /// start only begins to cover points at the successor of its boundary
    /// point.
    pub fn is_empty(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        let (s, e) = match (self.start.temporal(), self.end.temporal()) {
            (Some(s), Some(e)) => (s, e),
            _ => return false,
        };
        if self.start.is_open() {
            if self.end.is_closed() {
                return s.is_simultaneous(e);
            }
            // Open start and open end: empty iff the successor of the
            // start point already reaches the end point.
            return match self.step_forward(s) {
                Some(next) => next.is_simultaneous(e),
                None => false,
            };
        }
        self.end.is_open() && s.is_simultaneous(e)
    }

    /// Returns `true` if `point` lies inside this interval.
    ///
    /// Infinite boundaries never exclude a point on their side. For finite
    /// boundaries the edge kind decides whether the boundary point itself
    /// counts.
    pub fn contains_point(&self, point: &T) -> bool {
        let after_start = match &self.start {
            Boundary::InfinitePast => true,
            Boundary::Open(s) => s.is_before(point),
            Boundary::Closed(s) => !s.is_after(point),
            Boundary::InfiniteFuture => false,
        };
        if !after_start {
            return false;
        }
        match &self.end {
            Boundary::InfiniteFuture => true,
            Boundary::Open(e) => point.is_before(e),
            Boundary::Closed(e) => !point.is_after(e),
            Boundary::InfinitePast => false,
        }
    }

    /// Returns `true` if this interval contains every point of `other`.
    ///
    /// Only a finite `other` can be contained; an interval with any
    /// infinite boundary is never reported as contained. An empty `other`
    /// is contained if its anchor point satisfies the start condition.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if !other.is_finite() {
            return false;
        }
        let start_b = match other.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        let start_a = self.closed_finite_start();
        if let Some(sa) = &start_a {
            if sa.is_after(&start_b) {
                return false;
            }
        }
        let end_a = match self.end.temporal() {
            Some(e) => e.clone(),
            None => return true,
        };

        // Degenerate other: open end coinciding with the normalized start.
        let degenerate = match other.end.temporal() {
            Some(eb) => other.end.is_open() && start_b.is_simultaneous(eb),
            None => false,
        };
        if degenerate {
            let effective_end = if self.end.is_open() {
                match self.step_backwards(&end_a) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_a
            };
            return !start_b.is_after(&effective_end);
        }

        let end_b = match other.end.temporal() {
            Some(e) => e.clone(),
            None => return false,
        };

        if self.axis.is_calendrical() {
            // Normalize both ends backwards to closed form.
            let ea = if self.end.is_open() {
                match self.step_backwards(&end_a) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_a
            };
            let eb = if other.end.is_open() {
                match self.step_backwards(&end_b) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_b
            };
            !ea.is_before(&eb)
        } else {
            // Normalize both ends forwards to open form. A closed end that
            // cannot step forward sits at the timeline maximum and covers
            // everything reachable.
            let ea = if self.end.is_closed() {
                self.step_forward(&end_a)
            } else {
                Some(end_a)
            };
            let eb = if other.end.is_closed() {
                self.step_forward(&end_b)
            } else {
                Some(end_b)
            };
            match (ea, eb) {
                (None, _) => true,
                (_, None) => false,
                (Some(ea), Some(eb)) => !ea.is_before(&eb),
            }
        }
    }

    /// Returns the canonical form of this interval.
    ///
    /// Finite starts become closed; finite ends become closed on a
    /// calendrical axis and open on a chronometric one. Infinite boundaries
    /// are kept as they are. An already canonical interval is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::CannotCanonicalize`] if a required
    /// neighbouring point does not exist on the axis, or
    /// [`IntervalError::InvalidBoundaries`] if normalization produces a
    /// boundary pair that no longer forms a valid interval.
    pub fn to_canonical(&self) -> Result<Self, IntervalError> {
        let mut changed = false;

        let start = match &self.start {
            Boundary::Open(s) => {
                let next = self
                    .step_forward(s)
                    .ok_or(IntervalError::CannotCanonicalize)?;
                changed = true;
                Boundary::Closed(next)
            }
            other => other.clone(),
        };

        let end = if self.axis.is_calendrical() {
            match &self.end {
                Boundary::Open(e) => {
                    let prev = self
                        .step_backwards(e)
                        .ok_or(IntervalError::CannotCanonicalize)?;
                    changed = true;
                    Boundary::Closed(prev)
                }
                other => other.clone(),
            }
        } else {
            match &self.end {
                Boundary::Closed(e) => {
                    let next = self
                        .step_forward(e)
                        .ok_or(IntervalError::CannotCanonicalize)?;
                    changed = true;
                    Boundary::Open(next)
                }
                other => other.clone(),
            }
        };

        if changed {
            Interval::between(self.axis.clone(), start, end)
        } else {
            Ok(self.clone())
        }
    }

    /// Returns a copy of this interval anchored at a new start position,
    /// preserving the edge kind of the current start.
    ///
    /// An infinite start is replaced by an open boundary at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBoundaries`] if the moved boundary
    /// no longer forms a valid interval with the current end.
    pub fn with_start(&self, point: T) -> Result<Self, IntervalError> {
        let edge = self.start.edge().unwrap_or(IntervalEdge::Open);
        Interval::between(self.axis.clone(), Boundary::of(edge, point), self.end.clone())
    }

    /// Returns a copy of this interval ending at a new position, preserving
    /// the edge kind of the current end.
    ///
    /// An infinite end is replaced by an open boundary at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBoundaries`] if the moved boundary
    /// no longer forms a valid interval with the current start.
    pub fn with_end(&self, point: T) -> Result<Self, IntervalError> {
        let edge = self.end.edge().unwrap_or(IntervalEdge::Open);
        Interval::between(self.axis.clone(), self.start.clone(), Boundary::of(edge, point))
    }

    /// Returns a copy of this interval with the end point excluded.
    ///
    /// The end point stays where it is; only the edge kind changes. An
    /// infinite end is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidBoundaries`] if excluding the end
    /// point leaves an invalid boundary pair (an open/open pair of zero
    /// width).
    pub fn with_open_end(&self) -> Result<Self, IntervalError> {
        let end = match &self.end {
            Boundary::Open(e) | Boundary::Closed(e) => Boundary::Open(e.clone()),
            infinite => infinite.clone(),
        };
        Interval::between(self.axis.clone(), self.start.clone(), end)
    }

    /// Returns a copy of this interval with the end point included.
    ///
    /// The end point stays where it is; only the edge kind changes.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedAtInfinity`] for an infinite
    /// end, which has no point to include.
    pub fn with_closed_end(&self) -> Result<Self, IntervalError> {
        match &self.end {
            Boundary::Open(e) | Boundary::Closed(e) => Interval::between(
                self.axis.clone(),
                self.start.clone(),
                Boundary::Closed(e.clone()),
            ),
            _ => Err(IntervalError::UnsupportedAtInfinity),
        }
    }

    /// Collapses this interval to an empty interval anchored at its
    /// normalized start point.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedAtInfinity`] for an infinite
    /// start and [`IntervalError::CannotCanonicalize`] if an open start has
    /// no successor to anchor at.
    pub fn collapse(&self) -> Result<Self, IntervalError> {
        if self.start.is_infinite() {
            return Err(IntervalError::UnsupportedAtInfinity);
        }
        let anchor = self
            .closed_finite_start()
            .ok_or(IntervalError::CannotCanonicalize)?;
        Interval::between(
            self.axis.clone(),
            Boundary::Closed(anchor.clone()),
            Boundary::Open(anchor),
        )
    }

    /// Returns the start position re-expressed as a closed point, or `None`
    /// if the start is infinite or an open start has no successor.
    pub(crate) fn closed_finite_start(&self) -> Option<T> {
        match &self.start {
            Boundary::Closed(s) => Some(s.clone()),
            Boundary::Open(s) => self.step_forward(s),
            _ => None,
        }
    }

    /// Returns the finite start point expressed with a closed edge.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedAtInfinity`] for an infinite
    /// start. `Ok(None)` means the open start sits at the timeline maximum
    /// and has no closed equivalent.
    pub fn temporal_of_closed_start(&self) -> Result<Option<T>, IntervalError> {
        match &self.start {
            Boundary::InfinitePast | Boundary::InfiniteFuture => {
                Err(IntervalError::UnsupportedAtInfinity)
            }
            Boundary::Closed(s) => Ok(Some(s.clone())),
            Boundary::Open(s) => Ok(self.step_forward(s)),
        }
    }

    /// Returns the finite end point expressed with an open edge.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnsupportedAtInfinity`] for an infinite
    /// end. `Ok(None)` means the closed end sits at the timeline maximum
    /// and has no open equivalent.
    pub fn temporal_of_open_end(&self) -> Result<Option<T>, IntervalError> {
        match &self.end {
            Boundary::InfinitePast | Boundary::InfiniteFuture => {
                Err(IntervalError::UnsupportedAtInfinity)
            }
            Boundary::Open(e) => Ok(Some(e.clone())),
            Boundary::Closed(e) => Ok(self.step_forward(e)),
        }
    }

    #[inline]
    pub(crate) fn step_forward(&self, point: &T) -> Option<T> {
        self.axis.step_forward(point)
    }

    #[inline]
    pub(crate) fn step_backwards(&self, point: &T) -> Option<T> {
        self.axis.step_backwards(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{d, t, DayLine, TickLine};

    #[test]
    fn test_between_rejects_reversed_boundaries() {
        let err = Interval::between(DayLine, Boundary::closed(10), Boundary::closed(5));
        assert_eq!(
            err.unwrap_err(),
            IntervalError::InvalidBoundaries(BoundaryViolation::StartAfterEnd)
        );
    }

    #[test]
    fn test_between_rejects_equal_infinities() {
        let err = Interval::<i32, DayLine>::between(
            DayLine,
            Boundary::infinite_past(),
            Boundary::infinite_past(),
        );
        assert_eq!(
            err.unwrap_err(),
            IntervalError::InvalidBoundaries(BoundaryViolation::InfiniteEqual)
        );
    }

    #[test]
    fn test_between_rejects_open_zero_width() {
        let err = Interval::between(DayLine, Boundary::open(4), Boundary::open(4));
        assert_eq!(
            err.unwrap_err(),
            IntervalError::InvalidBoundaries(BoundaryViolation::OpenZeroWidth)
        );
    }

    #[test]
    fn test_between_accepts_full_line() {
        let all = Interval::<i32, DayLine>::between(
            DayLine,
            Boundary::infinite_past(),
            Boundary::infinite_future(),
        )
        .unwrap();
        assert!(!all.is_finite());
        assert!(!all.is_empty());
        assert!(all.contains_point(&i32::MIN));
        assert!(all.contains_point(&i32::MAX));
    }

    #[test]
    fn test_is_empty() {
        assert!(!d(1, 10).is_empty());
        // Closed start coinciding with open end.
        let collapsed =
            Interval::between(DayLine, Boundary::closed(5), Boundary::open(5)).unwrap();
        assert!(collapsed.is_empty());
        // Open start whose successor is the open end.
        let squeezed = Interval::between(DayLine, Boundary::open(5), Boundary::open(6)).unwrap();
        assert!(squeezed.is_empty());
        // Open start with closed end at the same point.
        let pinched =
            Interval::between(DayLine, Boundary::open(5), Boundary::closed(5)).unwrap();
        assert!(pinched.is_empty());
        // A closed/closed point interval holds exactly one point.
        let unit = Interval::between(DayLine, Boundary::closed(5), Boundary::closed(5)).unwrap();
        assert!(!unit.is_empty());
    }

    #[test]
    fn test_contains_point() {
        let span = d(1, 10);
        assert!(span.contains_point(&1));
        assert!(span.contains_point(&9));
        assert!(!span.contains_point(&10));
        assert!(!span.contains_point(&0));

        let tail = Interval::between(DayLine, Boundary::open(1), Boundary::infinite_future())
            .unwrap();
        assert!(!tail.contains_point(&1));
        assert!(tail.contains_point(&2));
        assert!(tail.contains_point(&i32::MAX));
    }

    #[test]
    fn test_contains_interval_calendrical() {
        assert!(d(1, 10).contains_interval(&d(1, 10)));
        assert!(d(1, 10).contains_interval(&d(2, 9)));
        assert!(!d(1, 10).contains_interval(&d(0, 9)));
        assert!(!d(1, 10).contains_interval(&d(2, 11)));

        // Closed end covers one more day than the open end at the same point.
        let closed = Interval::between(DayLine, Boundary::closed(1), Boundary::closed(10)).unwrap();
        assert!(closed.contains_interval(&d(1, 11)));
        assert!(!d(1, 10).contains_interval(&closed));
    }

    #[test]
    fn test_contains_interval_chronometric() {
        assert!(t(1, 10).contains_interval(&t(1, 10)));
        assert!(t(1, 10).contains_interval(&t(3, 7)));
        assert!(!t(1, 10).contains_interval(&t(3, 11)));

        let closed = Interval::between(TickLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        // [1,9] and [1,10) cover the same ticks.
        assert!(closed.contains_interval(&t(1, 10)));
        assert!(t(1, 10).contains_interval(&closed));
    }

    #[test]
    fn test_contains_interval_infinite_cases() {
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert!(tail.contains_interval(&d(5, 100)));
        assert!(!d(0, 100).contains_interval(&tail));
        assert!(!tail.contains_interval(&tail));

        // An infinite start imposes no constraint, the end still decides.
        let head =
            Interval::between(DayLine, Boundary::infinite_past(), Boundary::open(50)).unwrap();
        assert!(head.contains_interval(&d(10, 40)));
        assert!(!head.contains_interval(&d(10, 60)));
    }

    #[test]
    fn test_contains_interval_empty_other() {
        let collapsed = d(5, 100).collapse().unwrap();
        assert!(d(1, 10).contains_interval(&collapsed));
        assert!(!d(6, 10).contains_interval(&collapsed));
        // The anchor of an empty interval must still satisfy the end side.
        let at_end = d(1, 5).collapse().unwrap();
        assert!(!d(1, 2).contains_interval(&Interval::between(
            DayLine,
            Boundary::closed(5),
            Boundary::open(5)
        )
        .unwrap()));
        assert!(d(1, 6).contains_interval(&at_end));
    }

    #[test]
    fn test_to_canonical_calendrical() {
        let canonical = d(1, 10).to_canonical().unwrap();
        assert_eq!(canonical.start(), &Boundary::closed(1));
        assert_eq!(canonical.end(), &Boundary::closed(9));
        // Already canonical intervals come back unchanged.
        assert_eq!(canonical.to_canonical().unwrap(), canonical);
    }

    #[test]
    fn test_to_canonical_chronometric() {
        let closed = Interval::between(TickLine, Boundary::closed(1), Boundary::closed(9)).unwrap();
        let canonical = closed.to_canonical().unwrap();
        assert_eq!(canonical.start(), &Boundary::closed(1));
        assert_eq!(canonical.end(), &Boundary::open(10));
        assert_eq!(t(1, 10).to_canonical().unwrap(), t(1, 10));
    }

    #[test]
    fn test_to_canonical_open_start() {
        let span = Interval::between(DayLine, Boundary::open(0), Boundary::open(10)).unwrap();
        let canonical = span.to_canonical().unwrap();
        assert_eq!(canonical.start(), &Boundary::closed(1));
        assert_eq!(canonical.end(), &Boundary::closed(9));
    }

    #[test]
    fn test_to_canonical_at_domain_edge() {
        let span = Interval::between(
            DayLine,
            Boundary::open(i32::MAX),
            Boundary::infinite_future(),
        )
        .unwrap();
        assert_eq!(
            span.to_canonical().unwrap_err(),
            IntervalError::CannotCanonicalize
        );
    }

    #[test]
    fn test_with_start_preserves_edge() {
        let moved = d(1, 10).with_start(3).unwrap();
        assert_eq!(moved.start(), &Boundary::closed(3));
        assert_eq!(moved.end(), &Boundary::open(10));

        let from_infinite =
            Interval::between(DayLine, Boundary::infinite_past(), Boundary::open(10))
                .unwrap()
                .with_start(2)
                .unwrap();
        assert_eq!(from_infinite.start(), &Boundary::open(2));
    }

    #[test]
    fn test_with_end_revalidates() {
        let err = d(5, 10).with_end(1);
        assert_eq!(
            err.unwrap_err(),
            IntervalError::InvalidBoundaries(BoundaryViolation::StartAfterEnd)
        );
        let moved = d(5, 10).with_end(20).unwrap();
        assert_eq!(moved.end(), &Boundary::open(20));
    }

    #[test]
    fn test_open_closed_end_round_trip() {
        // The edge kind flips, the end point stays put.
        let closed = d(1, 10).with_closed_end().unwrap();
        assert_eq!(closed.end(), &Boundary::closed(10));
        let reopened = closed.with_open_end().unwrap();
        assert_eq!(reopened, d(1, 10));
        // Infinite ends pass through with_open_end untouched.
        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert_eq!(tail.with_open_end().unwrap(), tail);
        assert_eq!(
            tail.with_closed_end().unwrap_err(),
            IntervalError::UnsupportedAtInfinity
        );
        // Opening the end of a pinched open/closed interval leaves nothing.
        let pinched =
            Interval::between(DayLine, Boundary::open(5), Boundary::closed(5)).unwrap();
        assert_eq!(
            pinched.with_open_end().unwrap_err(),
            IntervalError::InvalidBoundaries(BoundaryViolation::OpenZeroWidth)
        );
    }

    #[test]
    fn test_collapse() {
        let collapsed = d(4, 9).collapse().unwrap();
        assert!(collapsed.is_empty());
        assert_eq!(collapsed.start(), &Boundary::closed(4));
        assert_eq!(collapsed.end(), &Boundary::open(4));

        let open_start = Interval::between(DayLine, Boundary::open(4), Boundary::open(9)).unwrap();
        let collapsed = open_start.collapse().unwrap();
        assert_eq!(collapsed.start(), &Boundary::closed(5));

        let from_past =
            Interval::between(DayLine, Boundary::infinite_past(), Boundary::open(9)).unwrap();
        assert_eq!(
            from_past.collapse().unwrap_err(),
            IntervalError::UnsupportedAtInfinity
        );
    }

    #[test]
    fn test_temporal_accessors() {
        let span = Interval::between(DayLine, Boundary::open(1), Boundary::closed(9)).unwrap();
        assert_eq!(span.temporal_of_closed_start().unwrap(), Some(2));
        assert_eq!(span.temporal_of_open_end().unwrap(), Some(10));

        let tail =
            Interval::between(DayLine, Boundary::closed(0), Boundary::infinite_future()).unwrap();
        assert_eq!(
            tail.temporal_of_open_end().unwrap_err(),
            IntervalError::UnsupportedAtInfinity
        );

        let at_max =
            Interval::between(DayLine, Boundary::closed(0), Boundary::closed(i32::MAX)).unwrap();
        assert_eq!(at_max.temporal_of_open_end().unwrap(), None);
    }
}
