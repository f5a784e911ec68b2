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

//! # Interval Boundaries
//!
//! A `Boundary` describes one edge of an interval. It is either infinite
//! (unbounded past for a start edge, unbounded future for an end edge) or a
//! finite point that is excluded (`Open`) or included (`Closed`) from the
//! span.
//!
//! Finiteness and openness are orthogonal: an infinite boundary carries no
//! point and is neither open nor closed in the edge-exclusion sense, so
//! `is_open` and `is_closed` both report `false` for it. Callers that care
//! about the distinction check `is_infinite` first.

use crate::axis::Temporal;

/// The edge kind of a finite boundary: whether the boundary point itself
/// belongs to the interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IntervalEdge {
    /// The boundary point is excluded from the interval.
    Open,
    /// The boundary point is included in the interval.
    Closed,
}

/// One edge of an interval: infinite, finite-open, or finite-closed.
///
/// Boundaries are immutable values compared structurally: same finiteness,
/// same edge kind, and same point.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::boundary::Boundary;
/// let start = Boundary::closed(10);
/// let end = Boundary::open(20);
///
/// assert!(start.is_closed() && !start.is_infinite());
/// assert!(end.is_open());
/// assert_eq!(end.temporal(), Some(&20));
///
/// let past: Boundary<i32> = Boundary::infinite_past();
/// assert!(past.is_infinite());
/// assert!(!past.is_open() && !past.is_closed());
/// assert_eq!(past.temporal(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Boundary<T> {
    /// The unbounded past; only meaningful as a start edge.
    InfinitePast,
    /// The unbounded future; only meaningful as an end edge.
    InfiniteFuture,
    /// A finite edge excluding its point.
    Open(T),
    /// A finite edge including its point.
    Closed(T),
}

impl<T> Boundary<T> {
    /// Creates a finite boundary excluding `point`.
    #[inline]
    pub const fn open(point: T) -> Self {
        Boundary::Open(point)
    }

    /// Creates a finite boundary including `point`.
    #[inline]
    pub const fn closed(point: T) -> Self {
        Boundary::Closed(point)
    }

    /// Creates the unbounded-past boundary.
    #[inline]
    pub const fn infinite_past() -> Self {
        Boundary::InfinitePast
    }

    /// Creates the unbounded-future boundary.
    #[inline]
    pub const fn infinite_future() -> Self {
        Boundary::InfiniteFuture
    }

    /// Creates a finite boundary at `point` with the given edge kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::boundary::{Boundary, IntervalEdge};
    /// assert_eq!(Boundary::of(IntervalEdge::Open, 5), Boundary::open(5));
    /// assert_eq!(Boundary::of(IntervalEdge::Closed, 5), Boundary::closed(5));
    /// ```
    #[inline]
    pub fn of(edge: IntervalEdge, point: T) -> Self {
        match edge {
            IntervalEdge::Open => Boundary::Open(point),
            IntervalEdge::Closed => Boundary::Closed(point),
        }
    }

    /// Returns `true` if this boundary is unbounded.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Boundary::InfinitePast | Boundary::InfiniteFuture)
    }

    /// Returns `true` if this boundary is finite and excludes its point.
    ///
    /// Infinite boundaries report `false`; check `is_infinite` first when
    /// the distinction matters.
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Boundary::Open(_))
    }

    /// Returns `true` if this boundary is finite and includes its point.
    ///
    /// Infinite boundaries report `false`; check `is_infinite` first when
    /// the distinction matters.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Boundary::Closed(_))
    }

    /// Returns the boundary point, or `None` for an infinite boundary.
    #[inline]
    pub const fn temporal(&self) -> Option<&T> {
        match self {
            Boundary::Open(t) | Boundary::Closed(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the edge kind of a finite boundary, or `None` for an
    /// infinite one.
    #[inline]
    pub const fn edge(&self) -> Option<IntervalEdge> {
        match self {
            Boundary::Open(_) => Some(IntervalEdge::Open),
            Boundary::Closed(_) => Some(IntervalEdge::Closed),
            _ => None,
        }
    }
}

/// Chronological ordering of two boundary positions, ignoring edge kinds.
///
/// The unbounded past precedes every position and the unbounded future
/// follows every position.
pub(crate) fn chronologically_after<T>(a: &Boundary<T>, b: &Boundary<T>) -> bool
where
    T: Temporal,
{
    match (a, b) {
        (Boundary::InfinitePast, _) | (_, Boundary::InfiniteFuture) => false,
        (Boundary::InfiniteFuture, _) | (_, Boundary::InfinitePast) => true,
        _ => match (a.temporal(), b.temporal()) {
            (Some(ta), Some(tb)) => ta.is_after(tb),
            _ => false,
        },
    }
}

/// Chronological coincidence of two boundary positions, ignoring edge kinds.
pub(crate) fn chronologically_simultaneous<T>(a: &Boundary<T>, b: &Boundary<T>) -> bool
where
    T: Temporal,
{
    match (a, b) {
        (Boundary::InfinitePast, Boundary::InfinitePast)
        | (Boundary::InfiniteFuture, Boundary::InfiniteFuture) => true,
        _ => match (a.temporal(), b.temporal()) {
            (Some(ta), Some(tb)) => ta.is_simultaneous(tb),
            _ => false,
        },
    }
}
