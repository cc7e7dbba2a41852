//! # Array Ops
//!
//! Stateless, generic helpers for moving elements between fixed-size arrays, vectors and
//! double-ended queues, and for slicing, interleaving and comparing them.
//!
//! Every operation copies elements by value (`T: Clone`) into a freshly allocated container
//! whose length is fully determined by its inputs. Only [`init`] and [`reverse`] mutate their
//! argument, and they take `&mut [T]` to do it.
//!
//! ## Key Features
//!
//! * **Ordered conversions:** `[T; N]`, `Vec<T>` and `VecDeque<T>` convert into each other in
//!   forward or reverse [`Order`]. Converting into `[T; N]` checks the width.
//! * **Even/odd interleaving:** [`split`] and [`merge`] separate and re-join alternating
//!   elements, with an explicit [`MergeTail`] policy for unequal lengths.
//! * **Negative indices:** [`Span`] pairs are inclusive and count from the end when negative,
//!   so `Span::new(0, -1)` is the whole array.
//! * **Pluggable strategies:** [`compare_by`] takes any [`Comparator`] and [`to_string_with`]
//!   any [`Formatter`]; closures work for both.
//! * **Fixed-capacity targets:** with the `heapless` feature (on by default), `heapless::Deque`
//!   is accepted as a source and [`to_bounded_deque`] / [`to_bounded_vec`] fill capacity-bounded
//!   containers.
//!
//! ## Examples
//!
//! ### Conversions
//!
//! ```rust
//! use array_ops::{from_fixed, to_fixed, Order};
//!
//! let v = from_fixed(&[1, 2, 3], Order::Reverse);
//! assert_eq!(v, vec![3, 2, 1]);
//!
//! let back: [i32; 3] = to_fixed(&v, Order::Reverse).unwrap();
//! assert_eq!(back, [1, 2, 3]);
//!
//! // Width mismatch is an error, not a panic.
//! assert!(to_fixed::<i32, 4>(&v, Order::Forward).is_err());
//! ```
//!
//! ### Split / Merge
//!
//! ```rust
//! use array_ops::{merge, split, MergeTail};
//!
//! let (even, odd) = split(&['a', 'x', 'b', 'y', 'c']);
//! assert_eq!(even, ['a', 'b', 'c']);
//! assert_eq!(odd, ['x', 'y']);
//!
//! assert_eq!(merge(&even, &odd, MergeTail::Truncate), ['a', 'x', 'b', 'y']);
//! assert_eq!(merge(&even, &odd, MergeTail::Append), ['a', 'x', 'b', 'y', 'c']);
//! ```
//!
//! ### Extract / Compare
//!
//! ```rust
//! use array_ops::{compare, extract, reversed, Span};
//!
//! let bits = [0u8, 0, 0, 1, 1, 0, 1, 1];
//! assert_eq!(extract(&bits, Span::new(2, 5)).unwrap(), [0, 1, 1, 0]);
//!
//! let rev = reversed(&bits);
//! assert!(compare(&bits, Span::new(2, 5), &rev, Span::new(2, 5)).unwrap());
//! ```

// --- Module Declarations ---

pub mod compare;
pub mod convert;
pub mod deque;
pub mod error;
pub mod format;
pub mod sequence;
pub mod span;
pub mod transform;

// --- Re-exports ---

pub use compare::{compare, compare_by, Comparator, ValueEq};
#[cfg(feature = "heapless")]
pub use convert::{to_bounded_deque, to_bounded_vec};
pub use convert::{from_deque, from_fixed, init, to_deque, to_fixed, Order};
pub use deque::AnyDeque;
pub use error::ArrayError;
pub use format::{to_string, to_string_with, DisplayFormatter, Formatter, HexFormatter};
pub use sequence::{append, clone, concat, extract};
pub use span::{normalize_index, Span};
pub use transform::{merge, reverse, reversed, split, split_padded, MergeTail};
