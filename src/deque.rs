//! Read access over double-ended queue backends.

use std::collections::VecDeque;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An abstraction over double-ended queue types used as conversion sources.
///
/// Implemented by `VecDeque<T>` (heap) and, with the `heapless` feature,
/// `heapless::Deque<T, N>` (fixed capacity) so that [`from_deque`] can read
/// either without knowing which backend it was handed.
///
/// [`from_deque`]: crate::from_deque
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Iterates front to back.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        VecDeque::iter(self)
    }
}

#[cfg(feature = "heapless")]
impl<T, const N: usize> AnyDeque<T> for heapless::Deque<T, N> {
    fn len(&self) -> usize {
        self.len()
    }
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        heapless::Deque::iter(self)
    }
}
