//! Error type shared by every fallible array operation.

use std::fmt;

/// Errors returned by conversions and index-based operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A fixed-size target was requested from a source of a different length.
    SizeMismatch {
        /// Width of the fixed-size target.
        expected: usize,
        /// Length of the source.
        actual: usize,
    },
    /// An inclusive index pair is invalid once negative indices are normalized.
    IndexOutOfRange {
        /// Start index as supplied by the caller.
        from: isize,
        /// End index as supplied by the caller.
        to: isize,
        /// Length of the array the span was applied to.
        len: usize,
    },
    /// A capacity-bounded target cannot hold every source element.
    CapacityExceeded {
        /// Capacity of the target.
        capacity: usize,
        /// Length of the source.
        actual: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} elements, got {actual}")
            }
            Self::IndexOutOfRange { from, to, len } => {
                write!(f, "index range [{from}, {to}] out of range for length {len}")
            }
            Self::CapacityExceeded { capacity, actual } => {
                write!(f, "{actual} elements exceed capacity {capacity}")
            }
        }
    }
}

impl std::error::Error for ArrayError {}
