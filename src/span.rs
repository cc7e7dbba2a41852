//! Inclusive index spans with Python-style negative indices.
//!
//! A negative index counts from the end of the array: `-1` is the last
//! element, `-len` the first. Normalization adds the array length to negative
//! indices and leaves non-negative ones untouched; the resulting pair must then
//! satisfy `0 <= from <= to < len`.

use core::ops::RangeInclusive;

use crate::error::ArrayError;

/// Converts a possibly negative index into its position relative to the start.
///
/// The result may still be out of bounds; [`Span::normalize`] performs the
/// bounds check.
#[inline]
pub fn normalize_index(len: usize, index: isize) -> isize {
    if index < 0 {
        len as isize + index
    } else {
        index
    }
}

/// An inclusive `[from, to]` index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub from: isize,
    pub to: isize,
}

impl Span {
    /// The whole array: `[0, -1]`.
    pub const FULL: Span = Span { from: 0, to: -1 };

    pub const fn new(from: isize, to: isize) -> Self {
        Self { from, to }
    }

    /// A span covering the single element at `index`.
    pub const fn at(index: isize) -> Self {
        Self {
            from: index,
            to: index,
        }
    }

    /// Resolves the span against an array of length `len`.
    ///
    /// Fails with [`ArrayError::IndexOutOfRange`] when either normalized bound
    /// falls outside `[0, len - 1]` or when `from > to`. An empty array has no
    /// valid span.
    pub fn normalize(self, len: usize) -> Result<RangeInclusive<usize>, ArrayError> {
        let from = normalize_index(len, self.from);
        let to = normalize_index(len, self.to);
        let in_bounds = |i: isize| i >= 0 && (i as usize) < len;

        if !in_bounds(from) || !in_bounds(to) || from > to {
            return Err(ArrayError::IndexOutOfRange {
                from: self.from,
                to: self.to,
                len,
            });
        }
        Ok(from as usize..=to as usize)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<(isize, isize)> for Span {
    fn from((from, to): (isize, isize)) -> Self {
        Self { from, to }
    }
}
