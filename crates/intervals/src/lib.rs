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
//! Closed intervals over the integers whose ends may be unbounded, with
//! overlap testing and intersection. The crate is a small value-type library:
//! no I/O, no shared state, and every core operation is total.
//!
//! ## Modules
//!
//! - `bound`: [`Bound`], a finite integer or the unbounded marker. Whether
//!   "unbounded" means negative or positive infinity depends on the slot the
//!   bound occupies.
//! - `interval`: [`Interval`], a closed range `[lower, upper]` or the
//!   distinguished empty interval. Construction normalizes inverted ranges to
//!   [`Interval::EMPTY`]; queries cover overlap, intersection (also as `&`),
//!   point and interval containment, and conversions from `std::ops` ranges.
//! - `parse`: `FromStr` for intervals and bounds, accepting the `Display`
//!   notation `(L, U)` / `(empty)` with `-inf` and `inf` for unbounded ends.
//!
//! With the `serde` feature, intervals serialize as their display string.
//!
//! ## Example
//!
//! ```rust
//! use intervals::{Bound, Interval};
//!
//! let a = Interval::new(Bound::Unbounded, Bound::finite(10i64));
//! let b: Interval = "(0, inf)".parse().unwrap();
//!
//! assert!(a.overlaps(b));
//! assert_eq!((a & b).to_string(), "(0, 10)");
//! assert_eq!(a & Interval::EMPTY, Interval::EMPTY);
//! ```

pub mod bound;
pub mod interval;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_support;

pub use bound::Bound;
pub use interval::Interval;
pub use parse::{ParseBoundError, ParseIntervalError};
