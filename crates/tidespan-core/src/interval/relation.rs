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

//! # Interval Relations
//!
//! Allen's thirteen interval relations plus the derived queries `intersects`
//! and `abuts`, implemented on [`Interval`].
//!
//! All predicates are total: they return `false` instead of erroring when a
//! boundary cannot be normalized on the axis (an open boundary at a domain
//! extreme has no closed equivalent, so no definite chronological statement
//! about it can be made). Before comparing, finite ends are re-expressed in
//! the domain-idiomatic convention: stepped backwards to closed form on a
//! calendrical axis, stepped forwards to open form on a chronometric one.
//! Starts are always compared in closed form.
//!
//! The six asymmetric relations come in converse pairs (`precedes` and
//! `preceded_by`, `meets` and `met_by`, and so on); each converse simply
//! delegates with the operands swapped.

use super::Interval;
use crate::axis::{Temporal, TimeAxis};

impl<T, A> Interval<T, A>
where
    T: Temporal + Clone,
    A: TimeAxis<T> + Clone,
{
    /// Returns `true` if every point of this interval lies strictly before
    /// `point`.
    pub fn is_before_point(&self, point: &T) -> bool {
        let end_a = match self.end().temporal() {
            Some(e) => e,
            None => return false,
        };
        if self.end().is_open() {
            !end_a.is_after(point)
        } else {
            end_a.is_before(point)
        }
    }

    /// Returns `true` if every point of this interval lies strictly after
    /// `point`.
    pub fn is_after_point(&self, point: &T) -> bool {
        if self.start().is_infinite() {
            return false;
        }
        match self.closed_finite_start() {
            Some(s) => s.is_after(point),
            None => false,
        }
    }

    /// Returns `true` if this interval lies entirely before `other`.
    ///
    /// Equivalent to `precedes(other) || meets(other)`.
    pub fn is_before(&self, other: &Self) -> bool {
        if other.start().is_infinite() || self.end().is_infinite() {
            return false;
        }
        let start_b = match other.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        let end_a = match self.end().temporal() {
            Some(e) => e,
            None => return false,
        };
        if self.end().is_open() {
            !end_a.is_after(&start_b)
        } else {
            end_a.is_before(&start_b)
        }
    }

    /// Returns `true` if this interval lies entirely after `other`.
    ///
    /// Equivalent to `preceded_by(other) || met_by(other)`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        other.is_before(self)
    }

    /// Allen relation: this interval ends before `other` starts and a gap
    /// lies between.
    pub fn precedes(&self, other: &Self) -> bool {
        if other.start().is_infinite() || self.end().is_infinite() {
            return false;
        }
        let raw = match self.end().temporal() {
            Some(e) => e.clone(),
            None => return false,
        };
        let end_a = if self.end().is_closed() {
            match self.step_forward(&raw) {
                Some(e) => e,
                None => return false,
            }
        } else {
            raw
        };
        match other.closed_finite_start() {
            Some(start_b) => end_a.is_before(&start_b),
            None => false,
        }
    }

    /// Allen relation: converse of [`Interval::precedes`].
    #[inline]
    pub fn preceded_by(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    /// Allen relation: this interval ends exactly where `other` starts,
    /// with no gap and no overlap.
    pub fn meets(&self, other: &Self) -> bool {
        if other.start().is_infinite() || self.end().is_infinite() {
            return false;
        }
        let raw = match self.end().temporal() {
            Some(e) => e.clone(),
            None => return false,
        };
        let end_a = if self.end().is_closed() {
            match self.step_forward(&raw) {
                Some(e) => e,
                None => return false,
            }
        } else {
            raw
        };
        let start_b = match other.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        if !end_a.is_simultaneous(&start_b) {
            return false;
        }
        // Two empty intervals at the same anchor touch nothing.
        match (self.closed_finite_start(), other.end().temporal()) {
            (Some(start_a), Some(end_b)) => start_a.is_before(end_b),
            _ => true,
        }
    }

    /// Allen relation: converse of [`Interval::meets`].
    #[inline]
    pub fn met_by(&self, other: &Self) -> bool {
        other.meets(self)
    }

    /// Allen relation: this interval starts before `other` starts, the two
    /// share points, and this interval ends before `other` ends.
    pub fn overlaps(&self, other: &Self) -> bool {
        if other.start().is_infinite() || self.end().is_infinite() {
            return false;
        }
        let start_b = match other.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        if let Some(start_a) = self.closed_finite_start() {
            if !start_a.is_before(&start_b) {
                return false;
            }
        }
        let end_a_raw = match self.end().temporal() {
            Some(e) => e.clone(),
            None => return false,
        };
        let end_b_raw = other.end().temporal().cloned();

        if self.axis().is_calendrical() {
            let end_a = if self.end().is_open() {
                match self.step_backwards(&end_a_raw) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_a_raw
            };
            if end_a.is_before(&start_b) {
                return false;
            }
            let end_b_raw = match end_b_raw {
                Some(e) => e,
                None => return true,
            };
            let end_b = if other.end().is_open() {
                self.step_backwards(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            match end_b {
                Some(eb) => end_a.is_before(&eb),
                None => true,
            }
        } else {
            let end_a = if self.end().is_closed() {
                match self.step_forward(&end_a_raw) {
                    Some(e) => e,
                    None => return end_b_raw.is_none(),
                }
            } else {
                end_a_raw
            };
            if !end_a.is_after(&start_b) {
                return false;
            }
            let end_b = match end_b_raw {
                None => None,
                Some(eb) => {
                    if other.end().is_closed() {
                        self.step_forward(&eb)
                    } else {
                        Some(eb)
                    }
                }
            };
            match end_b {
                Some(eb) => end_a.is_before(&eb),
                None => true,
            }
        }
    }

    /// Allen relation: converse of [`Interval::overlaps`].
    #[inline]
    pub fn overlapped_by(&self, other: &Self) -> bool {
        other.overlaps(self)
    }

    /// Allen relation: this interval ends exactly where `other` ends and
    /// starts strictly after it.
    pub fn finishes(&self, other: &Self) -> bool {
        if self.start().is_infinite() {
            return false;
        }
        let start_a = match self.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        let start_b = other.closed_finite_start();
        let end_a_raw = self.end().temporal().cloned();
        let end_b_raw = other.end().temporal().cloned();

        let empty = self.end().is_open()
            && matches!(&end_a_raw, Some(e) if start_a.is_simultaneous(e));
        if empty {
            return false;
        }
        if let Some(sb) = &start_b {
            if !sb.is_before(&start_a) {
                return false;
            }
        }

        let end_b_raw = match end_b_raw {
            Some(e) => e,
            None => return end_a_raw.is_none(),
        };
        let end_a_raw = match end_a_raw {
            Some(e) => e,
            None => return false,
        };

        if self.axis().is_calendrical() {
            let end_a = if self.end().is_open() {
                self.step_backwards(&end_a_raw)
            } else {
                Some(end_a_raw)
            };
            let end_b = if other.end().is_open() {
                self.step_backwards(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            match (end_a, end_b) {
                (Some(ea), Some(eb)) => !start_a.is_after(&eb) && ea.is_simultaneous(&eb),
                _ => false,
            }
        } else {
            let end_a = if self.end().is_closed() {
                self.step_forward(&end_a_raw)
            } else {
                Some(end_a_raw)
            };
            let end_b = if other.end().is_closed() {
                self.step_forward(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            if let Some(eb) = &end_b {
                if !start_a.is_before(eb) {
                    return false;
                }
            }
            match (end_a, end_b) {
                (None, None) => true,
                (Some(ea), Some(eb)) => ea.is_simultaneous(&eb),
                _ => false,
            }
        }
    }

    /// Allen relation: converse of [`Interval::finishes`].
    #[inline]
    pub fn finished_by(&self, other: &Self) -> bool {
        other.finishes(self)
    }

    /// Allen relation: this interval starts exactly where `other` starts
    /// and ends strictly before it.
    pub fn starts(&self, other: &Self) -> bool {
        if self.end().is_infinite() {
            return false;
        }
        let start_a = self.closed_finite_start();
        let start_b = other.closed_finite_start();
        match (&start_a, &start_b) {
            (None, Some(_)) | (Some(_), None) => return false,
            (Some(sa), Some(sb)) => {
                if !sa.is_simultaneous(sb) {
                    return false;
                }
            }
            (None, None) => {}
        }

        let end_a_raw = match self.end().temporal() {
            Some(e) => e.clone(),
            None => return false,
        };
        if self.end().is_open() {
            if let Some(sa) = &start_a {
                if sa.is_simultaneous(&end_a_raw) {
                    // Empty starting anchor is a prefix of anything that
                    // begins there.
                    return true;
                }
            }
        }

        let end_b_raw = match other.end().temporal() {
            Some(e) => e.clone(),
            None => {
                if self.end().is_closed() {
                    return true;
                }
                return match &start_b {
                    None => self.step_backwards(&end_a_raw).is_some(),
                    Some(sb) => end_a_raw.is_after(sb),
                };
            }
        };

        let end_a = if self.axis().is_calendrical() {
            let ea = if self.end().is_open() {
                self.step_backwards(&end_a_raw)
            } else {
                Some(end_a_raw)
            };
            let eb = if other.end().is_open() {
                self.step_backwards(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            match (ea, eb) {
                (Some(ea), Some(eb)) if ea.is_before(&eb) => ea,
                _ => return false,
            }
        } else {
            let ea = if self.end().is_closed() {
                match self.step_forward(&end_a_raw) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_a_raw
            };
            let eb = if other.end().is_closed() {
                self.step_forward(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            if let Some(eb) = eb {
                if !ea.is_before(&eb) {
                    return false;
                }
            }
            ea
        };

        if self.end().is_closed() {
            return true;
        }
        match &start_b {
            None => self.step_backwards(&end_a).is_some(),
            Some(sb) => end_a.is_after(sb),
        }
    }

    /// Allen relation: converse of [`Interval::starts`].
    #[inline]
    pub fn started_by(&self, other: &Self) -> bool {
        other.starts(self)
    }

    /// Allen relation: this interval starts strictly before `other` starts
    /// and ends strictly after it ends.
    ///
    /// In contrast to [`Interval::contains_interval`] equal boundaries do
    /// not count.
    pub fn encloses(&self, other: &Self) -> bool {
        if !other.is_finite() {
            return false;
        }
        let start_b = match other.closed_finite_start() {
            Some(s) => s,
            None => return false,
        };
        if let Some(start_a) = self.closed_finite_start() {
            if !start_a.is_before(&start_b) {
                return false;
            }
        }
        let end_a_raw = match self.end().temporal() {
            Some(e) => e.clone(),
            None => return true,
        };
        let end_b_raw = match other.end().temporal() {
            Some(e) => e.clone(),
            None => return false,
        };

        // Degenerate other: an empty interval is enclosed if its anchor
        // lies on or before the effective end.
        if other.end().is_open() && start_b.is_simultaneous(&end_b_raw) {
            let end_a = if self.end().is_open() {
                match self.step_backwards(&end_a_raw) {
                    Some(e) => e,
                    None => return false,
                }
            } else {
                end_a_raw
            };
            return !start_b.is_after(&end_a);
        }

        if self.axis().is_calendrical() {
            let end_a = if self.end().is_open() {
                self.step_backwards(&end_a_raw)
            } else {
                Some(end_a_raw)
            };
            let end_b = if other.end().is_open() {
                self.step_backwards(&end_b_raw)
            } else {
                Some(end_b_raw)
            };
            match (end_a, end_b) {
                (Some(ea), Some(eb)) => ea.is_after(&eb),
                _ => false,
            }
        } else {
            let end_a = if self.end().is_closed() {
                self.step_forward(&end_a_raw)
            } else {
                Some(end_a_raw)
            };
            let end_b = match if other.end().is_closed() {
                self.step_forward(&end_b_raw)
            } else {
                Some(end_b_raw)
            } {
                Some(e) => e,
                None => return false,
            };
            match end_a {
                None => true,
                Some(ea) => ea.is_after(&end_b),
            }
        }
    }

    /// Allen relation: converse of [`Interval::encloses`].
    #[inline]
    pub fn enclosed_by(&self, other: &Self) -> bool {
        other.encloses(self)
    }

    /// Allen relation: this interval covers exactly the same points as
    /// `other`, regardless of how the boundaries are expressed.
    pub fn equivalent_to(&self, other: &Self) -> bool {
        match (self.closed_finite_start(), other.closed_finite_start()) {
            (None, Some(_)) | (Some(_), None) => return false,
            (Some(sa), Some(sb)) => {
                if !sa.is_simultaneous(&sb) {
                    return false;
                }
            }
            (None, None) => {}
        }

        let (end_a_raw, end_b_raw) = match (self.end().temporal(), other.end().temporal()) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a.clone(), b.clone()),
            _ => return false,
        };

        let (end_a, end_b) = if self.axis().is_calendrical() {
            (
                if self.end().is_open() {
                    self.step_backwards(&end_a_raw)
                } else {
                    Some(end_a_raw)
                },
                if other.end().is_open() {
                    self.step_backwards(&end_b_raw)
                } else {
                    Some(end_b_raw)
                },
            )
        } else {
            (
                if self.end().is_closed() {
                    self.step_forward(&end_a_raw)
                } else {
                    Some(end_a_raw)
                },
                if other.end().is_closed() {
                    self.step_forward(&end_b_raw)
                } else {
                    Some(end_b_raw)
                },
            )
        };

        match (end_a, end_b) {
            (None, None) => true,
            (Some(ea), Some(eb)) => ea.is_simultaneous(&eb),
            _ => false,
        }
    }

    /// Returns `true` if this interval and `other` share at least one
    /// point. Empty intervals never intersect anything.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(self.is_before(other) || self.is_after(other))
    }

    /// Returns `true` if this interval touches `other` with neither a gap
    /// nor a shared point.
    ///
    /// Equivalent to `meets(other) || met_by(other)`.
    #[inline]
    pub fn abuts(&self, other: &Self) -> bool {
        self.meets(other) || self.met_by(other)
    }
}
