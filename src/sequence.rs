//! Copy-out operations: extraction, appending, concatenation and cloning.
//!
//! None of these touch their inputs; each returns a freshly allocated vector.

use crate::error::ArrayError;
use crate::span::Span;

/// Copies the inclusive sub-range `span` out of `src`.
///
/// Negative indices count from the end, so `Span::FULL` copies everything and
/// `Span::at(-1)` copies only the last element.
///
/// # Examples
/// ```
/// use array_ops::{extract, Span};
///
/// let bits = [0, 0, 0, 1, 1, 0, 1, 1];
/// assert_eq!(extract(&bits, Span::new(2, 5)).unwrap(), [0, 1, 1, 0]);
/// assert_eq!(extract(&bits, Span::at(-1)).unwrap(), [1]);
/// assert!(extract(&bits, Span::new(5, 2)).is_err());
/// ```
pub fn extract<T: Clone>(src: &[T], span: Span) -> Result<Vec<T>, ArrayError> {
    let range = span.normalize(src.len())?;
    Ok(src[range].to_vec())
}

/// Returns a copy of `src` with `item` added at the end.
pub fn append<T: Clone>(src: &[T], item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(src.len() + 1);
    out.extend_from_slice(src);
    out.push(item);
    out
}

/// Returns `a` followed by `b`.
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Returns an independent copy of `src`.
pub fn clone<T: Clone>(src: &[T]) -> Vec<T> {
    src.to_vec()
}
