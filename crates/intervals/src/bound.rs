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

//! Interval bounds.
//!
//! A [`Bound`] is either a finite integer or [`Bound::Unbounded`]. The meaning
//! of `Unbounded` depends on where it is used: in the lower slot of an
//! interval it stands for negative infinity, in the upper slot for positive
//! infinity. `Bound` therefore has no `PartialOrd`/`Ord`; comparisons go
//! through the positional helpers used by the interval module.

use num_traits::PrimInt;
use std::cmp::Ordering;

/// A limit of an interval: either a finite integer value or no limit at all.
///
/// `Bound` is `Copy`, so storing it in an interval always stores an
/// independent value.
///
/// # Examples
///
/// ```rust
/// # use intervals::Bound;
///
/// let b = Bound::finite(5i64);
/// assert!(b.is_finite());
/// assert_eq!(b.value(), Some(5));
///
/// let u: Bound<i64> = Bound::Unbounded;
/// assert!(u.is_unbounded());
/// assert_eq!(u.value(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Bound<T = i64>
where
    T: PrimInt,
{
    /// A finite, inclusive limit.
    Finite(T),
    /// No limit. Negative infinity as a lower bound, positive infinity as an
    /// upper bound.
    Unbounded,
}

impl<T> Bound<T>
where
    T: PrimInt,
{
    /// The unbounded marker.
    pub const UNBOUNDED: Self = Bound::Unbounded;

    /// Creates a finite bound wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Bound;
    ///
    /// assert_eq!(Bound::finite(-3i64), Bound::Finite(-3));
    /// ```
    #[inline]
    pub const fn finite(value: T) -> Self {
        Bound::Finite(value)
    }

    /// Returns an independent copy of this bound.
    ///
    /// Finite bounds keep their value, the unbounded marker stays unbounded.
    /// This is the same as `*self`; it exists for call sites that want the
    /// copy to be visible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Bound;
    ///
    /// let a = Bound::finite(7i64);
    /// assert_eq!(a.copied(), a);
    /// assert_eq!(Bound::<i64>::UNBOUNDED.copied(), Bound::Unbounded);
    /// ```
    #[inline]
    pub fn copied(&self) -> Self {
        *self
    }

    /// Returns `true` if the bound holds a finite value.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// Returns `true` if the bound is the unbounded marker.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Returns the finite value, or `None` if the bound is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Bound;
    ///
    /// assert_eq!(Bound::finite(4i64).value(), Some(4));
    /// assert_eq!(Bound::<i64>::Unbounded.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<T> {
        match *self {
            Bound::Finite(v) => Some(v),
            Bound::Unbounded => None,
        }
    }

    /// Creates a bound from an `Option`, mapping `None` to the unbounded marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Bound;
    ///
    /// assert_eq!(Bound::from_option(Some(1i64)), Bound::Finite(1));
    /// assert_eq!(Bound::<i64>::from_option(None), Bound::Unbounded);
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Bound::Finite(v),
            None => Bound::Unbounded,
        }
    }

    /// Converts the bound into an `Option`, mapping the unbounded marker to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value()
    }

    /// Returns the finite value, or `default` if the bound is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Bound;
    ///
    /// assert_eq!(Bound::finite(8i64).unwrap_or(0), 8);
    /// assert_eq!(Bound::<i64>::Unbounded.unwrap_or(i64::MIN), i64::MIN);
    /// ```
    #[inline]
    pub fn unwrap_or(&self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Compares two bounds that both occupy the lower slot of an interval.
    ///
    /// The unbounded marker is negative infinity here and sorts before every
    /// finite value.
    #[inline]
    pub(crate) fn cmp_as_lower(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
            (Bound::Unbounded, Bound::Finite(_)) => Ordering::Less,
            (Bound::Finite(_), Bound::Unbounded) => Ordering::Greater,
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
        }
    }

    /// Compares two bounds that both occupy the upper slot of an interval.
    ///
    /// The unbounded marker is positive infinity here and sorts after every
    /// finite value.
    #[inline]
    pub(crate) fn cmp_as_upper(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
            (Bound::Unbounded, Bound::Finite(_)) => Ordering::Greater,
            (Bound::Finite(_), Bound::Unbounded) => Ordering::Less,
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
        }
    }

    /// The tighter of two lower bounds, i.e. the numerically larger one.
    #[inline]
    pub(crate) fn max_lower(self, other: Self) -> Self {
        match self.cmp_as_lower(&other) {
            Ordering::Less => other,
            Ordering::Equal | Ordering::Greater => self,
        }
    }

    /// The tighter of two upper bounds, i.e. the numerically smaller one.
    #[inline]
    pub(crate) fn min_upper(self, other: Self) -> Self {
        match self.cmp_as_upper(&other) {
            Ordering::Greater => other,
            Ordering::Equal | Ordering::Less => self,
        }
    }
}

impl<T> From<T> for Bound<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(value: T) -> Self {
        Bound::Finite(value)
    }
}

impl<T> From<Option<T>> for Bound<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        Bound::from_option(value)
    }
}

impl<T> From<Bound<T>> for Option<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(bound: Bound<T>) -> Self {
        bound.into_option()
    }
}
