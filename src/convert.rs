//! Conversions between fixed arrays, vectors and deques.
//!
//! Every conversion takes an [`Order`]. `Order::Forward` keeps element `i` at
//! index `i`; `Order::Reverse` moves it to `len - 1 - i`. Using the same order
//! on both legs of a round trip gives back the original container.

use std::collections::VecDeque;

use crate::deque::AnyDeque;
use crate::error::ArrayError;

/// Index mapping applied by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Element `i` stays at index `i`.
    #[default]
    Forward,
    /// Element `i` moves to index `len - 1 - i`.
    Reverse,
}

impl Order {
    /// Target index of source element `i` in a container of length `len`.
    ///
    /// Requires `i < len`.
    #[inline]
    pub(crate) fn map(self, i: usize, len: usize) -> usize {
        match self {
            Order::Forward => i,
            Order::Reverse => len - 1 - i,
        }
    }
}

/// Copies a fixed array into a new vector of the same width.
pub fn from_fixed<T: Clone, const N: usize>(fixed: &[T; N], order: Order) -> Vec<T> {
    ordered(fixed, order)
}

/// Copies a slice into a fixed array of width `N`.
///
/// Fails with [`ArrayError::SizeMismatch`] if `src.len() != N`.
pub fn to_fixed<T: Clone, const N: usize>(
    src: &[T],
    order: Order,
) -> Result<[T; N], ArrayError> {
    if src.len() != N {
        return Err(ArrayError::SizeMismatch {
            expected: N,
            actual: src.len(),
        });
    }
    // The mapping is its own inverse, so reading through it fills the target.
    Ok(core::array::from_fn(|i| src[order.map(i, N)].clone()))
}

/// Copies any deque into a new vector, front to back (or back to front).
pub fn from_deque<T: Clone, Q: AnyDeque<T>>(q: &Q, order: Order) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(q.len());
    out.extend(q.iter().cloned());
    if order == Order::Reverse {
        out.reverse();
    }
    out
}

/// Copies a slice into a new `VecDeque`.
///
/// Reverse order is built by prepending each element.
pub fn to_deque<T: Clone>(src: &[T], order: Order) -> VecDeque<T> {
    let mut q = VecDeque::with_capacity(src.len());
    for item in src {
        match order {
            Order::Forward => q.push_back(item.clone()),
            Order::Reverse => q.push_front(item.clone()),
        }
    }
    q
}

/// Copies a slice into a fixed-capacity `heapless::Deque`.
///
/// Fails with [`ArrayError::CapacityExceeded`] if `src.len() > N`; the length
/// is checked up front so no partially filled deque is produced.
#[cfg(feature = "heapless")]
pub fn to_bounded_deque<T: Clone, const N: usize>(
    src: &[T],
    order: Order,
) -> Result<heapless::Deque<T, N>, ArrayError> {
    if src.len() > N {
        return Err(ArrayError::CapacityExceeded {
            capacity: N,
            actual: src.len(),
        });
    }
    let mut q = heapless::Deque::new();
    for item in src {
        let pushed = match order {
            Order::Forward => q.push_back(item.clone()),
            Order::Reverse => q.push_front(item.clone()),
        };
        if pushed.is_err() {
            unreachable!("Logic Error: deque capacity checked before filling");
        }
    }
    Ok(q)
}

/// Copies a slice into a fixed-capacity `heapless::Vec`.
///
/// Fails with [`ArrayError::CapacityExceeded`] if `src.len() > N`.
#[cfg(feature = "heapless")]
pub fn to_bounded_vec<T: Clone, const N: usize>(
    src: &[T],
    order: Order,
) -> Result<heapless::Vec<T, N>, ArrayError> {
    if src.len() > N {
        return Err(ArrayError::CapacityExceeded {
            capacity: N,
            actual: src.len(),
        });
    }
    let mut v = heapless::Vec::new();
    for i in 0..src.len() {
        if v.push(src[order.map(i, src.len())].clone()).is_err() {
            unreachable!("Logic Error: vec capacity checked before filling");
        }
    }
    Ok(v)
}

/// Overwrites every element with a copy of `val`. The length is unchanged.
pub fn init<T: Clone>(dst: &mut [T], val: T) {
    dst.fill(val);
}

pub(crate) fn ordered<T: Clone>(src: &[T], order: Order) -> Vec<T> {
    match order {
        Order::Forward => src.to_vec(),
        Order::Reverse => src.iter().rev().cloned().collect(),
    }
}
