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

//! Closed integer intervals with optionally unbounded ends.
//!
//! An [`Interval`] is either the distinguished empty interval or a closed range
//! `[lower, upper]` whose ends are [`Bound`]s. An unbounded lower end stands for
//! negative infinity and an unbounded upper end for positive infinity, so
//! half-infinite and doubly-infinite ranges are first-class values.
//!
//! All operations are total. Constructing a range whose finite lower end lies
//! above its finite upper end does not fail; it yields [`Interval::EMPTY`].
//!
//! Intersection uses one rule for every combination of finite and unbounded
//! ends: the result starts at the greater of the two lower bounds and stops at
//! the lesser of the two upper bounds.

use crate::bound::Bound;
use num_traits::PrimInt;
use std::{
    hash::{Hash, Hasher},
    ops::{BitAnd, BitAndAssign, RangeFrom, RangeFull, RangeInclusive, RangeToInclusive},
};

/// A closed interval `[lower, upper]` over the integers, or the empty interval.
///
/// Both finite ends are inclusive. Fields are private: every non-empty value
/// satisfies `lower <= upper` whenever both ends are finite, and all empty
/// values compare equal.
///
/// # Examples
///
/// ```rust
/// # use intervals::{Bound, Interval};
///
/// let a = Interval::new(Bound::finite(0i64), Bound::finite(2));
/// let b = Interval::new(Bound::finite(1i64), Bound::finite(3));
/// assert!(a.overlaps(b));
/// assert_eq!(a.intersect(b), Interval::closed(1, 2));
///
/// let inverted = Interval::new(Bound::finite(1i64), Bound::finite(0));
/// assert_eq!(inverted, Interval::EMPTY);
/// ```
#[derive(Clone, Copy)]
pub struct Interval<T = i64>
where
    T: PrimInt,
{
    lower: Bound<T>,
    upper: Bound<T>,
    empty: bool,
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// The empty interval. It contains no points and overlaps nothing.
    pub const EMPTY: Self = Self {
        lower: Bound::Unbounded,
        upper: Bound::Unbounded,
        empty: true,
    };

    /// The interval `(-inf, inf)` containing every integer.
    ///
    /// This is the identity element of [`Interval::intersect`].
    pub const UNBOUNDED: Self = Self {
        lower: Bound::Unbounded,
        upper: Bound::Unbounded,
        empty: false,
    };

    /// Creates the interval `[lower, upper]`.
    ///
    /// If both bounds are finite and `lower > upper`, the result is
    /// [`Interval::EMPTY`]. Inverted ranges are normalized, never rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::{Bound, Interval};
    ///
    /// let iv = Interval::new(Bound::Unbounded, Bound::finite(0i64));
    /// assert_eq!(iv.to_string(), "(-inf, 0)");
    ///
    /// assert!(Interval::new(Bound::finite(5i64), Bound::finite(4)).is_empty());
    /// ```
    #[inline]
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        if !Self::is_ordered(&lower, &upper) {
            log::trace!(
                "inverted {} bounds normalized to the empty interval",
                std::any::type_name::<T>()
            );
            return Self::EMPTY;
        }
        Self::new_unchecked(lower, upper)
    }

    /// Creates a non-empty interval without normalizing inverted bounds.
    ///
    /// The caller must ensure the bounds are ordered; this is checked with a
    /// `debug_assert!` only.
    #[inline]
    fn new_unchecked(lower: Bound<T>, upper: Bound<T>) -> Self {
        debug_assert!(
            Self::is_ordered(&lower, &upper),
            "Invalid interval: lower bound must be less than or equal to upper bound"
        );
        Self {
            lower,
            upper,
            empty: false,
        }
    }

    #[inline]
    fn is_ordered(lower: &Bound<T>, upper: &Bound<T>) -> bool {
        match (lower, upper) {
            (Bound::Finite(lo), Bound::Finite(hi)) => lo <= hi,
            _ => true,
        }
    }

    /// Creates the finite interval `[lower, upper]`, normalizing to empty if
    /// `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// assert_eq!(Interval::closed(0i64, 10).to_string(), "(0, 10)");
    /// assert_eq!(Interval::closed(10i64, 0), Interval::EMPTY);
    /// ```
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Finite(lower), Bound::Finite(upper))
    }

    /// Creates the single-point interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self::new_unchecked(Bound::Finite(value), Bound::Finite(value))
    }

    /// Creates the interval `[lower, inf)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// assert_eq!(Interval::at_least(3i64).to_string(), "(3, inf)");
    /// ```
    #[inline]
    pub fn at_least(lower: T) -> Self {
        Self::new_unchecked(Bound::Finite(lower), Bound::Unbounded)
    }

    /// Creates the interval `(-inf, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// assert_eq!(Interval::at_most(-1i64).to_string(), "(-inf, -1)");
    /// ```
    #[inline]
    pub fn at_most(upper: T) -> Self {
        Self::new_unchecked(Bound::Unbounded, Bound::Finite(upper))
    }

    /// Returns the lower bound, or `None` for the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::{Bound, Interval};
    ///
    /// assert_eq!(Interval::closed(1i64, 2).lower(), Some(Bound::Finite(1)));
    /// assert_eq!(Interval::<i64>::UNBOUNDED.lower(), Some(Bound::Unbounded));
    /// assert_eq!(Interval::<i64>::EMPTY.lower(), None);
    /// ```
    #[inline]
    pub fn lower(&self) -> Option<Bound<T>> {
        if self.empty { None } else { Some(self.lower) }
    }

    /// Returns the upper bound, or `None` for the empty interval.
    #[inline]
    pub fn upper(&self) -> Option<Bound<T>> {
        if self.empty { None } else { Some(self.upper) }
    }

    /// Returns `true` if this is the empty interval.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns `true` if both ends are unbounded, i.e. the interval is `(-inf, inf)`.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        !self.empty && self.lower.is_unbounded() && self.upper.is_unbounded()
    }

    /// Returns `true` if the interval is non-empty and both ends are finite.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        !self.empty && self.lower.is_finite() && self.upper.is_finite()
    }

    /// Returns `true` if the two intervals share at least one integer point.
    ///
    /// The empty interval overlaps nothing, not even another empty interval or
    /// `(-inf, inf)`. The relation is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// let a = Interval::at_least(0i64);
    /// assert!(!a.overlaps(Interval::at_most(-1)));
    /// assert!(a.overlaps(Interval::at_most(0)));
    /// assert!(!Interval::<i64>::UNBOUNDED.overlaps(Interval::EMPTY));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        if self.empty || other.empty {
            return false;
        }

        // `other` lies entirely before `self`.
        if matches!(
            (other.upper, self.lower),
            (Bound::Finite(other_upper), Bound::Finite(self_lower)) if other_upper < self_lower
        ) {
            return false;
        }

        // `other` lies entirely after `self`.
        if matches!(
            (other.lower, self.upper),
            (Bound::Finite(other_lower), Bound::Finite(self_upper)) if other_lower > self_upper
        ) {
            return false;
        }

        true
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns [`Interval::EMPTY`] if the intervals do not overlap. Otherwise the
    /// result runs from the greater lower bound to the lesser upper bound, where
    /// an unbounded lower end loses to any finite one and likewise for upper ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// let a = Interval::closed(0i64, 10);
    /// assert_eq!(a.intersect(Interval::closed(-1, 11)), a);
    /// assert_eq!(a.intersect(Interval::UNBOUNDED), a);
    /// assert_eq!(
    ///     Interval::at_most(0i64).intersect(Interval::at_least(1)),
    ///     Interval::EMPTY
    /// );
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Self {
        if !self.overlaps(other) {
            return Self::EMPTY;
        }

        Self::new_unchecked(
            self.lower.max_lower(other.lower),
            self.upper.min_upper(other.upper),
        )
    }

    /// Returns `true` if `value` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// let iv = Interval::closed(0i64, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// assert!(Interval::at_most(0i64).contains(i64::MIN));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.overlaps(Self::point(value))
    }

    /// Returns `true` if every point of `other` is also a point of `self`.
    ///
    /// The empty interval is contained in every interval, and contains only
    /// itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervals::Interval;
    ///
    /// let outer = Interval::at_least(0i64);
    /// assert!(outer.contains_interval(Interval::closed(2, 8)));
    /// assert!(!outer.contains_interval(Interval::closed(-1, 8)));
    /// assert!(outer.contains_interval(Interval::EMPTY));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        if other.empty {
            return true;
        }
        if self.empty {
            return false;
        }
        self.lower.cmp_as_lower(&other.lower).is_le()
            && self.upper.cmp_as_upper(&other.upper).is_ge()
    }
}

impl<T> PartialEq for Interval<T>
where
    T: PrimInt,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.empty, other.empty) {
            (true, true) => true,
            (false, false) => self.lower == other.lower && self.upper == other.upper,
            _ => false,
        }
    }
}

impl<T> Eq for Interval<T> where T: PrimInt {}

impl<T> Hash for Interval<T>
where
    T: PrimInt + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.empty.hash(state);
        if !self.empty {
            self.lower.hash(state);
            self.upper.hash(state);
        }
    }
}

impl<T> BitAnd for Interval<T>
where
    T: PrimInt,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T> BitAndAssign for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersect(rhs);
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty {
            return write!(f, "Interval::Empty");
        }
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

/// Renders `(empty)` or `(L, U)`, with `-inf`/`inf` for unbounded ends.
///
/// The parentheses are a rendering convention: both finite ends are inclusive.
impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty {
            return write!(f, "(empty)");
        }

        write!(f, "(")?;
        match self.lower {
            Bound::Finite(v) => write!(f, "{v}")?,
            Bound::Unbounded => write!(f, "-inf")?,
        }
        write!(f, ", ")?;
        match self.upper {
            Bound::Finite(v) => write!(f, "{v}")?,
            Bound::Unbounded => write!(f, "inf")?,
        }
        write!(f, ")")
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<RangeFrom<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fin(v: i64) -> Bound<i64> {
        Bound::Finite(v)
    }

    const INF: Bound<i64> = Bound::Unbounded;

    fn iv(lower: Bound<i64>, upper: Bound<i64>) -> Interval<i64> {
        Interval::new(lower, upper)
    }

    #[test]
    fn test_construction_valid() {
        let a = iv(fin(0), fin(10));
        assert!(!a.is_empty());
        assert_eq!(a.lower(), Some(fin(0)));
        assert_eq!(a.upper(), Some(fin(10)));
        assert!(a.is_bounded());
        assert!(!a.is_unbounded());
    }

    #[test]
    fn test_construction_inverted_is_empty() {
        assert_eq!(iv(fin(1), fin(0)), Interval::EMPTY);
        assert!(iv(fin(i64::MAX), fin(i64::MIN)).is_empty());
    }

    #[test]
    fn test_construction_single_point() {
        let p = iv(fin(5), fin(5));
        assert!(!p.is_empty());
        assert_eq!(p, Interval::point(5));
    }

    #[test]
    fn test_construction_half_and_fully_unbounded() {
        let all = iv(INF, INF);
        assert_eq!(all, Interval::UNBOUNDED);
        assert!(all.is_unbounded());
        assert!(!all.is_bounded());

        assert_eq!(iv(fin(0), INF), Interval::at_least(0));
        assert_eq!(iv(INF, fin(0)), Interval::at_most(0));
    }

    #[test]
    fn test_construction_copies_bounds() {
        let mut lower = fin(0);
        let a = iv(lower, INF);
        lower = fin(100);
        assert_eq!(a.lower(), Some(fin(0)));
        assert_eq!(lower, fin(100));
    }

    #[test]
    fn test_empty_equality_ignores_fields() {
        let via_normalization = iv(fin(3), fin(-3));
        let via_default: Interval<i64> = Interval::default();
        assert_eq!(via_normalization, Interval::EMPTY);
        assert_eq!(via_default, Interval::EMPTY);
        assert_ne!(Interval::<i64>::EMPTY, Interval::UNBOUNDED);
        assert_eq!(Interval::<i64>::EMPTY.lower(), None);
        assert_eq!(Interval::<i64>::EMPTY.upper(), None);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(iv(fin(1), fin(0)));
        set.insert(Interval::EMPTY);
        set.insert(iv(fin(0), fin(1)));
        set.insert(Interval::closed(0, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(INF, fin(0)).to_string(), "(-inf, 0)");
        assert_eq!(Interval::<i64>::EMPTY.to_string(), "(empty)");
        assert_eq!(iv(INF, INF).to_string(), "(-inf, inf)");
        assert_eq!(iv(fin(-5), INF).to_string(), "(-5, inf)");
        assert_eq!(iv(fin(-5), fin(7)).to_string(), "(-5, 7)");
        assert_eq!(
            iv(fin(i64::MIN), fin(i64::MAX)).to_string(),
            "(-9223372036854775808, 9223372036854775807)"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Interval::<i64>::EMPTY), "Interval::Empty");
        assert_eq!(
            format!("{:?}", iv(INF, fin(2))),
            "Interval { lower: Unbounded, upper: Finite(2) }"
        );
    }

    #[test]
    fn test_overlaps_unbounded() {
        let a = iv(INF, INF);
        assert!(a.overlaps(iv(INF, INF)));
        assert!(!a.overlaps(Interval::EMPTY));
        assert!(!Interval::EMPTY.overlaps(a));
        assert!(!Interval::<i64>::EMPTY.overlaps(Interval::EMPTY));
        assert!(a.overlaps(iv(fin(1), fin(2))));
    }

    #[test]
    fn test_overlaps_half_unbounded() {
        let a = iv(fin(0), INF);
        assert!(a.overlaps(iv(INF, INF)));
        assert!(a.overlaps(iv(fin(0), INF)));
        assert!(a.overlaps(iv(fin(1), INF)));
        assert!(a.overlaps(iv(INF, fin(0))));
        assert!(a.overlaps(iv(fin(0), fin(1))));
        assert!(!a.overlaps(iv(INF, fin(-1))));
    }

    #[test]
    fn test_overlaps_point() {
        let a = iv(fin(0), fin(0));
        assert!(a.overlaps(iv(INF, INF)));
        assert!(a.overlaps(iv(fin(0), INF)));
        assert!(a.overlaps(iv(INF, fin(0))));
        assert!(a.overlaps(iv(fin(0), fin(0))));
        assert!(a.overlaps(iv(fin(0), fin(1))));
        assert!(!a.overlaps(iv(INF, fin(-1))));
        assert!(!a.overlaps(iv(fin(1), INF)));
    }

    #[test]
    fn test_overlaps_finite() {
        let a = iv(fin(0), fin(10));
        assert!(a.overlaps(iv(INF, INF)));
        assert!(!a.overlaps(iv(INF, fin(-1))));
        assert!(!a.overlaps(iv(fin(11), INF)));
        // Closed ends: touching counts as overlapping.
        assert!(a.overlaps(iv(fin(10), fin(10))));
        assert!(a.overlaps(iv(fin(0), fin(0))));
        assert!(a.overlaps(iv(fin(-1), fin(11))));
        assert!(a.overlaps(iv(fin(1), fin(5))));
        assert!(a.overlaps(iv(fin(-1), fin(1))));
        assert!(a.overlaps(iv(fin(5), fin(11))));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let samples = [
            Interval::EMPTY,
            iv(INF, INF),
            iv(INF, fin(0)),
            iv(fin(0), INF),
            iv(fin(0), fin(10)),
            iv(fin(11), fin(12)),
            iv(fin(-3), fin(-1)),
        ];
        for a in samples {
            for b in samples {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
            }
        }
    }

    /// Each row reads `first & second = expected` in the display notation.
    const INTERSECTIONS: &[(&str, &str, &str)] = &[
        ("(empty)", "(-inf, inf)", "(empty)"),
        ("(-inf, inf)", "(empty)", "(empty)"),
        ("(-inf, inf)", "(-inf, inf)", "(-inf, inf)"),
        ("(-inf, inf)", "(-inf, 0)", "(-inf, 0)"),
        ("(-inf, inf)", "(0, 0)", "(0, 0)"),
        ("(-inf, inf)", "(0, 10)", "(0, 10)"),
        ("(-inf, 0)", "(-inf, inf)", "(-inf, 0)"),
        ("(-inf, 0)", "(-inf, -1)", "(-inf, -1)"),
        ("(-inf, 0)", "(-inf, 0)", "(-inf, 0)"),
        ("(-inf, 0)", "(-inf, 1)", "(-inf, 0)"),
        ("(-inf, 0)", "(-1, inf)", "(-1, 0)"),
        ("(-inf, 0)", "(0, inf)", "(0, 0)"),
        ("(-inf, 0)", "(1, inf)", "(empty)"),
        ("(-inf, 0)", "(1, 1)", "(empty)"),
        ("(-inf, 0)", "(1, 2)", "(empty)"),
        ("(-inf, 0)", "(0, 0)", "(0, 0)"),
        ("(-inf, 0)", "(-1, -1)", "(-1, -1)"),
        ("(-inf, 0)", "(-1, 0)", "(-1, 0)"),
        ("(-inf, 0)", "(-1, 1)", "(-1, 0)"),
        ("(0, inf)", "(-inf, inf)", "(0, inf)"),
        ("(0, inf)", "(-inf, -1)", "(empty)"),
        ("(0, inf)", "(-inf, 0)", "(0, 0)"),
        ("(0, inf)", "(-inf, 1)", "(0, 1)"),
        ("(0, inf)", "(-1, inf)", "(0, inf)"),
        ("(0, inf)", "(0, inf)", "(0, inf)"),
        ("(0, inf)", "(1, inf)", "(1, inf)"),
        ("(0, inf)", "(1, 1)", "(1, 1)"),
        ("(0, inf)", "(1, 2)", "(1, 2)"),
        ("(0, inf)", "(0, 0)", "(0, 0)"),
        ("(0, inf)", "(-1, -1)", "(empty)"),
        ("(0, inf)", "(-1, 0)", "(0, 0)"),
        ("(0, inf)", "(-1, 1)", "(0, 1)"),
        ("(0, 0)", "(-inf, inf)", "(0, 0)"),
        ("(0, 0)", "(-inf, -1)", "(empty)"),
        ("(0, 0)", "(-inf, 0)", "(0, 0)"),
        ("(0, 0)", "(-inf, 1)", "(0, 0)"),
        ("(0, 0)", "(-1, inf)", "(0, 0)"),
        ("(0, 0)", "(0, inf)", "(0, 0)"),
        ("(0, 0)", "(1, inf)", "(empty)"),
        ("(0, 0)", "(0, 0)", "(0, 0)"),
        ("(0, 0)", "(-1, 1)", "(0, 0)"),
        ("(0, 0)", "(-2, -1)", "(empty)"),
        ("(0, 0)", "(0, 1)", "(0, 0)"),
        ("(0, 0)", "(1, 2)", "(empty)"),
        ("(0, 2)", "(-inf, inf)", "(0, 2)"),
        ("(0, 2)", "(-inf, -1)", "(empty)"),
        ("(0, 2)", "(-inf, 0)", "(0, 0)"),
        ("(0, 2)", "(-inf, 1)", "(0, 1)"),
        ("(0, 2)", "(-inf, 3)", "(0, 2)"),
        ("(0, 2)", "(-1, inf)", "(0, 2)"),
        ("(0, 2)", "(0, inf)", "(0, 2)"),
        ("(0, 2)", "(1, inf)", "(1, 2)"),
        ("(0, 2)", "(3, inf)", "(empty)"),
        ("(0, 2)", "(0, 0)", "(0, 0)"),
        ("(0, 2)", "(1, 1)", "(1, 1)"),
        ("(0, 2)", "(0, 1)", "(0, 1)"),
        ("(0, 2)", "(1, 3)", "(1, 2)"),
        ("(0, 2)", "(-2, -1)", "(empty)"),
        ("(0, 2)", "(-1, 2)", "(0, 2)"),
        ("(0, 2)", "(-1, 1)", "(0, 1)"),
        ("(0, 2)", "(3, 4)", "(empty)"),
    ];

    #[test]
    fn test_intersection_table() {
        for (idx, (first, second, expected)) in INTERSECTIONS.iter().enumerate() {
            let a: Interval<i64> = first.parse().unwrap();
            let b: Interval<i64> = second.parse().unwrap();
            let expected: Interval<i64> = expected.parse().unwrap();

            assert_eq!(
                a.intersect(b),
                expected,
                "row {idx}: {first} & {second}, got {}",
                a.intersect(b)
            );
            // The table only lists one operand order; the other must agree.
            assert_eq!(b.intersect(a), expected, "row {idx} swapped");
            assert_eq!(a & b, expected, "row {idx} via operator");
        }
    }

    #[test]
    fn test_intersection_scenarios() {
        assert!(!iv(INF, INF).overlaps(Interval::EMPTY));
        assert!(!iv(fin(0), INF).overlaps(iv(INF, fin(-1))));
        assert_eq!(
            iv(fin(0), fin(10)).intersect(iv(fin(-1), fin(11))),
            iv(fin(0), fin(10))
        );
        assert_eq!(iv(INF, fin(0)).intersect(iv(fin(1), INF)), Interval::EMPTY);
        assert_eq!(
            iv(fin(0), fin(2)).intersect(iv(fin(1), fin(3))),
            iv(fin(1), fin(2))
        );
    }

    #[test]
    fn test_intersection_with_unbounded_is_identity() {
        let a = iv(fin(0), fin(1));
        assert_eq!(a.intersect(iv(INF, INF)), a);
        assert_eq!(iv(INF, INF).intersect(a), a);
        assert_eq!(iv(INF, INF).intersect(iv(INF, INF)), Interval::UNBOUNDED);
    }

    #[test]
    fn test_intersection_ties() {
        // Equal lower bounds, both finite and both unbounded.
        assert_eq!(
            iv(fin(3), fin(9)).intersect(iv(fin(3), fin(5))),
            iv(fin(3), fin(5))
        );
        assert_eq!(iv(INF, fin(9)).intersect(iv(INF, fin(5))), iv(INF, fin(5)));
        // Equal upper bounds.
        assert_eq!(
            iv(fin(1), fin(9)).intersect(iv(fin(4), fin(9))),
            iv(fin(4), fin(9))
        );
        assert_eq!(iv(fin(1), INF).intersect(iv(fin(4), INF)), iv(fin(4), INF));
    }

    #[test]
    fn test_intersection_result_is_independent_of_inputs() {
        let mut a = iv(fin(0), fin(10));
        let b = iv(fin(5), INF);
        let r = a.intersect(b);
        a = iv(fin(100), fin(200));
        assert_eq!(r, iv(fin(5), fin(10)));
        assert_eq!(a, iv(fin(100), fin(200)));
    }

    #[test]
    fn test_intersection_extreme_values() {
        let a = iv(fin(i64::MIN), fin(i64::MAX));
        assert_eq!(a.intersect(Interval::UNBOUNDED), a);
        assert_eq!(
            Interval::at_most(i64::MIN).intersect(Interval::at_least(i64::MIN)),
            Interval::point(i64::MIN)
        );
        assert_eq!(
            Interval::at_most(i64::MIN).intersect(Interval::at_least(i64::MIN + 1)),
            Interval::EMPTY
        );
    }

    #[test]
    fn test_bitand_assign() {
        let mut a = iv(fin(0), INF);
        a &= iv(INF, fin(4));
        assert_eq!(a, iv(fin(0), fin(4)));
        a &= iv(fin(5), fin(6));
        assert_eq!(a, Interval::EMPTY);
    }

    #[test]
    fn test_contains_point() {
        let a = iv(fin(0), fin(10));
        assert!(a.contains(0));
        assert!(a.contains(5));
        assert!(a.contains(10));
        assert!(!a.contains(-1));
        assert!(!a.contains(11));

        assert!(iv(INF, INF).contains(i64::MAX));
        assert!(iv(INF, fin(0)).contains(i64::MIN));
        assert!(!iv(INF, fin(0)).contains(1));
        assert!(!Interval::<i64>::EMPTY.contains(0));
    }

    #[test]
    fn test_contains_interval() {
        let main = iv(fin(0), fin(10));
        assert!(main.contains_interval(iv(fin(0), fin(10))));
        assert!(main.contains_interval(iv(fin(2), fin(8))));
        assert!(!main.contains_interval(iv(fin(-1), fin(5))));
        assert!(!main.contains_interval(iv(fin(5), INF)));
        assert!(main.contains_interval(Interval::EMPTY));

        let all = iv(INF, INF);
        assert!(all.contains_interval(main));
        assert!(all.contains_interval(all));
        assert!(!main.contains_interval(all));
        assert!(!Interval::EMPTY.contains_interval(main));
        assert!(Interval::<i64>::EMPTY.contains_interval(Interval::EMPTY));
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Interval::from(0i64..=10), iv(fin(0), fin(10)));
        assert_eq!(Interval::from(10i64..=0), Interval::EMPTY);
        assert_eq!(Interval::from(3i64..), iv(fin(3), INF));
        assert_eq!(Interval::from(..=3i64), iv(INF, fin(3)));
        assert_eq!(Interval::<i64>::from(..), Interval::UNBOUNDED);
    }

    #[test]
    fn test_other_integer_widths() {
        let a = Interval::closed(10u8, 200);
        let b = Interval::at_least(150u8);
        assert_eq!(a.intersect(b), Interval::closed(150, 200));
        assert_eq!(a.to_string(), "(10, 200)");

        let c = Interval::closed(-5i32, -1);
        assert!(!c.overlaps(Interval::at_least(0)));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Interval<i64>>();
        assert_send_sync::<Bound<i64>>();
    }
}
