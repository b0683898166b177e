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

//! Parsing intervals and bounds from text.
//!
//! The accepted notation is the one produced by `Display`: `(empty)` or
//! `(L, U)` where `L` is `-inf` or an integer and `U` is `inf` or an integer.
//! Square brackets are accepted as well, so `[0, 10]` and `(0, 10)` denote the
//! same closed interval; delimiters never change the meaning. Whitespace around
//! tokens is ignored. Inverted finite bounds parse successfully and normalize
//! to the empty interval, exactly as [`Interval::new`] does.

use crate::{bound::Bound, interval::Interval};
use num_traits::PrimInt;
use std::{fmt::Display, str::FromStr};

const EMPTY_LITERAL: &str = "empty";
const NEG_INFINITY: &str = "-inf";
const POS_INFINITY: &str = "inf";
const POS_INFINITY_SIGNED: &str = "+inf";

/// Details about a bound token that is not a valid integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoundError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl Display for ParseBoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse bound '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseBoundError {}

/// The error type for parsing an [`Interval`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntervalError {
    /// The input contained nothing but whitespace.
    Blank,
    /// The input is not enclosed in `(`/`[` and `)`/`]`.
    MissingDelimiters,
    /// No `,` separates the lower and the upper bound.
    MissingSeparator,
    /// An infinity appeared on the wrong side, e.g. `inf` as a lower bound.
    MisplacedInfinity {
        /// The offending token.
        found: String,
    },
    /// A bound is neither an infinity nor a valid integer.
    InvalidBound(ParseBoundError),
}

impl Display for ParseIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "Cannot parse an interval from blank input"),
            Self::MissingDelimiters => {
                write!(f, "Interval must be enclosed in '(' or '[' and ')' or ']'")
            }
            Self::MissingSeparator => write!(f, "Interval bounds must be separated by ','"),
            Self::MisplacedInfinity { found } => {
                write!(f, "Infinity '{found}' is not allowed on this side of an interval")
            }
            Self::InvalidBound(e) => write!(f, "Invalid bound: {e}"),
        }
    }
}

impl std::error::Error for ParseIntervalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBound(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBoundError> for ParseIntervalError {
    fn from(e: ParseBoundError) -> Self {
        Self::InvalidBound(e)
    }
}

/// Parses a finite bound. Infinities are positional and therefore only
/// understood by the interval parser.
///
/// # Examples
///
/// ```rust
/// # use intervals::Bound;
///
/// let b: Bound<i64> = "-12".parse().unwrap();
/// assert_eq!(b, Bound::Finite(-12));
/// assert!("inf".parse::<Bound<i64>>().is_err());
/// ```
impl<T> FromStr for Bound<T>
where
    T: PrimInt + FromStr,
{
    type Err = ParseBoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_finite(s.trim())
    }
}

/// Parses the `Display` notation back into an interval.
///
/// # Examples
///
/// ```rust
/// # use intervals::Interval;
///
/// let iv: Interval<i64> = "(-inf, 0)".parse().unwrap();
/// assert_eq!(iv, Interval::at_most(0));
///
/// let iv: Interval<i64> = "[0, 10]".parse().unwrap();
/// assert_eq!(iv, Interval::closed(0, 10));
///
/// let iv: Interval<i64> = "(empty)".parse().unwrap();
/// assert!(iv.is_empty());
/// ```
impl<T> FromStr for Interval<T>
where
    T: PrimInt + FromStr,
{
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
            .inspect_err(|e| log::debug!("failed to parse interval from {s:?}: {e}"))
    }
}

fn parse_interval<T>(s: &str) -> Result<Interval<T>, ParseIntervalError>
where
    T: PrimInt + FromStr,
{
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseIntervalError::Blank);
    }
    if s == EMPTY_LITERAL {
        return Ok(Interval::EMPTY);
    }

    let inner = s
        .strip_prefix(|c: char| c == '(' || c == '[')
        .and_then(|rest| rest.strip_suffix(|c: char| c == ')' || c == ']'))
        .ok_or(ParseIntervalError::MissingDelimiters)?
        .trim();
    if inner == EMPTY_LITERAL {
        return Ok(Interval::EMPTY);
    }

    let (lower, upper) = inner
        .split_once(',')
        .ok_or(ParseIntervalError::MissingSeparator)?;

    let lower = parse_lower(lower.trim())?;
    let upper = parse_upper(upper.trim())?;
    Ok(Interval::new(lower, upper))
}

fn parse_lower<T>(token: &str) -> Result<Bound<T>, ParseIntervalError>
where
    T: PrimInt + FromStr,
{
    match token {
        NEG_INFINITY => Ok(Bound::Unbounded),
        POS_INFINITY | POS_INFINITY_SIGNED => Err(ParseIntervalError::MisplacedInfinity {
            found: token.to_string(),
        }),
        _ => Ok(parse_finite(token)?),
    }
}

fn parse_upper<T>(token: &str) -> Result<Bound<T>, ParseIntervalError>
where
    T: PrimInt + FromStr,
{
    match token {
        POS_INFINITY | POS_INFINITY_SIGNED => Ok(Bound::Unbounded),
        NEG_INFINITY => Err(ParseIntervalError::MisplacedInfinity {
            found: token.to_string(),
        }),
        _ => Ok(parse_finite(token)?),
    }
}

fn parse_finite<T>(token: &str) -> Result<Bound<T>, ParseBoundError>
where
    T: PrimInt + FromStr,
{
    token
        .parse::<T>()
        .map(Bound::Finite)
        .map_err(|_| ParseBoundError {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        })
}
