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

//! # Axis Capabilities
//!
//! The two contracts the interval engine consumes from the surrounding
//! system: point ordering (`Temporal`) and timeline stepping (`TimeAxis`).
//!
//! The engine itself never constructs points. Everything it does reduces to
//! comparing two points and, where an open boundary has to be re-expressed
//! as a closed one (or vice versa), asking the axis for the discrete
//! successor or predecessor of a point.

/// A point on a timeline, totally ordered against other points of its type.
///
/// The three query methods mirror the vocabulary of the interval relations
/// and default to the `Ord`/`Eq` implementations; point types opt in with an
/// empty `impl` block. All primitive integer types implement this trait so
/// that plain numbers can serve as points in tests and simple domains.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::axis::Temporal;
/// assert!(3i32.is_before(&5));
/// assert!(5i32.is_after(&3));
/// assert!(4i32.is_simultaneous(&4));
/// ```
pub trait Temporal: Ord {
    /// Returns `true` if this point lies strictly before `other`.
    #[inline]
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns `true` if this point lies strictly after `other`.
    #[inline]
    fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns `true` if this point and `other` denote the same instant.
    #[inline]
    fn is_simultaneous(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_temporal_for {
    ($($t:ty),* $(,)?) => {
        $(impl Temporal for $t {})*
    };
}

impl_temporal_for!(i8, i16, i32, i64, i128, isize);
impl_temporal_for!(u8, u16, u32, u64, u128, usize);

/// A timeline over a point type `T`.
///
/// The axis supplies discrete stepping (the successor and predecessor of a
/// point) and the domain kind. Stepping returns `None` at the domain
/// extremes (no successor past the maximum representable point, no
/// predecessor before the minimum); the engine treats that as "the timeline
/// is exhausted here", never as an error by itself.
///
/// A *calendrical* axis is discrete: its natural unit (a day, say) cannot be
/// subdivided, and the canonical form of an interval on it prefers closed
/// ends. A *chronometric* axis is dense: time between two points can always
/// be imagined, stepping moves by the smallest representable increment, and
/// the canonical form prefers half-open ends. The flag controls which way
/// finite ends are normalized before relations compare them.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::axis::TimeAxis;
/// #[derive(Clone, Copy)]
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
/// assert_eq!(Days.step_forward(&41), Some(42));
/// assert_eq!(Days.step_forward(&i32::MAX), None);
/// ```
pub trait TimeAxis<T>
where
    T: Temporal,
{
    /// Returns the successor of `point` on this timeline, or `None` if the
    /// timeline has no point after it.
    fn step_forward(&self, point: &T) -> Option<T>;

    /// Returns the predecessor of `point` on this timeline, or `None` if
    /// the timeline has no point before it.
    fn step_backwards(&self, point: &T) -> Option<T>;

    /// Returns `true` for discrete, date-like timelines and `false` for
    /// dense, time-like ones.
    fn is_calendrical(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_temporal() {
        assert!(1i64.is_before(&2));
        assert!(!2i64.is_before(&2));
        assert!(9u8.is_after(&3));
        assert!(7i32.is_simultaneous(&7));
        assert!(!7i32.is_simultaneous(&8));
    }
}
