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

//! # Tick Instants
//!
//! A chronometric axis counting ticks of the smallest representable
//! resolution. The axis is treated as dense: between any two distinct
//! instants more time can be imagined, so intervals on it canonicalize to
//! open ends and stepping moves by exactly one tick.

use num_traits::{CheckedAdd, CheckedSub, PrimInt};
use std::fmt;
use tidespan_core::axis::{Temporal, TimeAxis};

/// A tick count since the epoch, backed by a primitive integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TickInstant<T>(T)
where
    T: PrimInt;

impl<T> TickInstant<T>
where
    T: PrimInt,
{
    /// Creates a tick instant from a raw value.
    #[inline]
    pub fn new(value: T) -> Self {
        TickInstant(value)
    }

    /// Returns the raw tick count.
    #[inline]
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T> Temporal for TickInstant<T> where T: PrimInt {}

impl<T> fmt::Display for TickInstant<T>
where
    T: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The chronometric tick axis.
///
/// Stepping saturates into `None` at the limits of the backing integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TickAxis;

impl<T> TimeAxis<TickInstant<T>> for TickAxis
where
    T: PrimInt + CheckedAdd + CheckedSub,
{
    #[inline]
    fn step_forward(&self, point: &TickInstant<T>) -> Option<TickInstant<T>> {
        point.0.checked_add(&T::one()).map(TickInstant)
    }

    #[inline]
    fn step_backwards(&self, point: &TickInstant<T>) -> Option<TickInstant<T>> {
        point.0.checked_sub(&T::one()).map(TickInstant)
    }

    #[inline]
    fn is_calendrical(&self) -> bool {
        false
    }
}
