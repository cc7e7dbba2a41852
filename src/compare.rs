//! Element-wise comparison of two sub-ranges.

use crate::error::ArrayError;
use crate::span::Span;

/// Decides whether two elements count as equal.
///
/// Any closure `Fn(&T, &T) -> bool` is a comparator.
pub trait Comparator<T: ?Sized> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// The default comparator: `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEq;

impl<T: PartialEq + ?Sized> Comparator<T> for ValueEq {
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Compares `a[span_a]` with `b[span_b]` using `PartialEq`.
///
/// See [`compare_by`].
pub fn compare<T: PartialEq>(
    a: &[T],
    span_a: Span,
    b: &[T],
    span_b: Span,
) -> Result<bool, ArrayError> {
    compare_by(a, span_a, b, span_b, &ValueEq)
}

/// Compares `a[span_a]` with `b[span_b]` using `cmp`.
///
/// Both spans are normalized first, and an invalid span on either side is an
/// error even if the other side would already make the ranges unequal.
/// Returns `true` only if the two ranges have the same length and every pair of
/// elements at matching positions is equal under `cmp`.
///
/// # Examples
/// ```
/// use array_ops::{compare_by, Span};
///
/// let a = ["Alpha", "beta"];
/// let b = ["ALPHA", "BETA"];
/// let ignore_case = |x: &&str, y: &&str| x.eq_ignore_ascii_case(y);
/// assert!(compare_by(&a, Span::FULL, &b, Span::FULL, &ignore_case).unwrap());
/// ```
pub fn compare_by<T, C>(
    a: &[T],
    span_a: Span,
    b: &[T],
    span_b: Span,
    cmp: &C,
) -> Result<bool, ArrayError>
where
    C: Comparator<T> + ?Sized,
{
    let ra = span_a.normalize(a.len())?;
    let rb = span_b.normalize(b.len())?;

    let (lhs, rhs) = (&a[ra], &b[rb]);
    if lhs.len() != rhs.len() {
        return Ok(false);
    }
    Ok(lhs.iter().zip(rhs).all(|(x, y)| cmp.equal(x, y)))
}
