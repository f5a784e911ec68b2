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

//! # Tidespan Core
//!
//! A generic temporal interval algebra. Given any totally ordered point type
//! and a timeline capability that can step between neighbouring points, this
//! crate models half-bounded and fully-bounded spans and answers structural
//! questions about how two spans relate to each other (Allen's interval
//! algebra), plus derived operations such as emptiness, containment,
//! canonicalization, collapse, boundary mutation, and formatted rendering.
//!
//! ## Modules
//!
//! - `axis`: The capability seams. `Temporal` is the point-ordering contract
//!   and `TimeAxis` is the timeline contract (discrete successor/predecessor
//!   stepping plus the calendrical/chronometric domain flag).
//! - `boundary`: The `Boundary` value type describing one edge of an
//!   interval: finite-open, finite-closed, or infinite.
//! - `interval`: The `Interval` entity with its validating smart
//!   constructor, emptiness and containment queries, canonicalization,
//!   boundary mutators, and the thirteen Allen relations.
//! - `format`: Rendering of intervals through caller-supplied point
//!   printers: structural form, pattern substitution, and the technical
//!   `start/end` form with a configurable bracket policy.
//! - `error`: Error types for construction, infinite-boundary misuse,
//!   canonicalization failure, and rendering.
//!
//! ## Design
//!
//! Every entity in this crate is an immutable value. All operations are pure
//! functions of the two boundaries plus the axis capability; transformations
//! return new intervals and never mutate the receiver. The hard part of the
//! domain is that open vs. closed edges, finite vs. infinite edges, and
//! discrete ("calendrical") vs. dense ("chronometric") timelines all change
//! the meaning of "adjacent", "equal", and "contains". The relation logic
//! here keeps all of these consistent by normalizing finite ends to the
//! domain-idiomatic convention before comparing (backward/closed on
//! calendrical axes, forward/open on chronometric axes).

pub mod axis;
pub mod boundary;
pub mod error;
pub mod format;
pub mod interval;

#[cfg(test)]
pub(crate) mod testkit;
