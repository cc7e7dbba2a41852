//! Reversal and even/odd interleaving.

/// What [`merge`] does with the elements of the longer input that have no
/// partner in the shorter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeTail {
    /// Keep the unpaired tail after the interleaved prefix.
    #[default]
    Append,
    /// Drop the unpaired tail; the output is `2 * min(len0, len1)` long.
    Truncate,
}

/// Reverses `dst` in place: element `i` swaps with element `len - 1 - i`.
pub fn reverse<T>(dst: &mut [T]) {
    dst.reverse();
}

/// Returns a reversed copy of `src`, leaving `src` untouched.
pub fn reversed<T: Clone>(src: &[T]) -> Vec<T> {
    src.iter().rev().cloned().collect()
}

/// Splits `src` into its even-position and odd-position elements.
///
/// For an odd length the first half is one element longer.
///
/// # Examples
/// ```
/// let (even, odd) = array_ops::split(&[0, 1, 2, 3, 4]);
/// assert_eq!(even, [0, 2, 4]);
/// assert_eq!(odd, [1, 3]);
/// ```
pub fn split<T: Clone>(src: &[T]) -> (Vec<T>, Vec<T>) {
    let mut even = Vec::with_capacity(src.len().div_ceil(2));
    let mut odd = Vec::with_capacity(src.len() / 2);
    for pair in src.chunks(2) {
        even.push(pair[0].clone());
        if let Some(b) = pair.get(1) {
            odd.push(b.clone());
        }
    }
    (even, odd)
}

/// Like [`split`], but pads the odd half with `placeholder` so both halves
/// have `ceil(len / 2)` elements.
///
/// `placeholder` is only used when `src` has odd length.
pub fn split_padded<T: Clone>(src: &[T], placeholder: T) -> (Vec<T>, Vec<T>) {
    let (even, mut odd) = split(src);
    if odd.len() < even.len() {
        odd.push(placeholder);
    }
    (even, odd)
}

/// Interleaves `a` and `b`: `a[0], b[0], a[1], b[1], ...`.
///
/// When the lengths differ, `tail` decides the fate of the longer input's
/// remaining elements (those from index `min(a.len(), b.len())` onward). With
/// [`MergeTail::Append`] they follow the interleaved prefix in their original
/// order, whichever input is longer.
pub fn merge<T: Clone>(a: &[T], b: &[T], tail: MergeTail) -> Vec<T> {
    let paired = a.len().min(b.len());
    let rest: &[T] = match tail {
        MergeTail::Truncate => &[],
        MergeTail::Append if a.len() > paired => &a[paired..],
        MergeTail::Append => &b[paired..],
    };

    let mut out = Vec::with_capacity(2 * paired + rest.len());
    for (x, y) in a.iter().zip(b) {
        out.push(x.clone());
        out.push(y.clone());
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_reverse_in_place() {
        let mut v = vec![1, 2, 3, 4, 5];
        reverse(&mut v);
        assert_eq!(v, vec![5, 4, 3, 2, 1]);

        let mut even = vec!['a', 'b'];
        reverse(&mut even);
        assert_eq!(even, vec!['b', 'a']);

        let mut empty: Vec<u8> = vec![];
        reverse(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_transform_reversed_copy_leaves_source() {
        let src = [0u8, 0, 0, 1, 1, 0, 1, 1];
        assert_eq!(reversed(&src), vec![1, 1, 0, 1, 1, 0, 0, 0]);
        assert_eq!(src, [0, 0, 0, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn test_transform_split_even_length() {
        let (even, odd) = split(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(even, vec![0, 2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn test_transform_split_odd_length() {
        let (even, odd) = split(&[0, 1, 2, 3, 4]);
        assert_eq!(even, vec![0, 2, 4]);
        assert_eq!(odd, vec![1, 3]);
    }

    #[test]
    fn test_transform_split_padded() {
        let (even, odd) = split_padded(&[0, 1, 2, 3, 4], -1);
        assert_eq!(even, vec![0, 2, 4]);
        assert_eq!(odd, vec![1, 3, -1]);

        // Even lengths never see the placeholder.
        let (even, odd) = split_padded(&[0, 1, 2, 3], -1);
        assert_eq!(even, vec![0, 2]);
        assert_eq!(odd, vec![1, 3]);
    }

    #[test]
    fn test_transform_split_tiny_inputs() {
        let (even, odd) = split::<i32>(&[]);
        assert!(even.is_empty() && odd.is_empty());

        let (even, odd) = split_padded(&[9], 0);
        assert_eq!((even, odd), (vec![9], vec![0]));
    }

    #[test]
    fn test_transform_merge_equal_lengths() {
        let out = merge(&[0, 2, 4], &[1, 3, 5], MergeTail::Truncate);
        assert_eq!(out, vec![0, 1, 2, 3, 4, 5]);
        let out = merge(&[0, 2, 4], &[1, 3, 5], MergeTail::Append);
        assert_eq!(out, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_transform_merge_truncate() {
        let out = merge(&['a', 'b', 'c'], &['x', 'y'], MergeTail::Truncate);
        assert_eq!(out, vec!['a', 'x', 'b', 'y']);

        let out = merge(&['a'], &['x', 'y', 'z'], MergeTail::Truncate);
        assert_eq!(out, vec!['a', 'x']);
    }

    #[test]
    fn test_transform_merge_append_first_longer() {
        let out = merge(&['a', 'b', 'c', 'd'], &['x', 'y'], MergeTail::Append);
        assert_eq!(out, vec!['a', 'x', 'b', 'y', 'c', 'd']);
    }

    #[test]
    fn test_transform_merge_append_second_longer() {
        let out = merge(&['a'], &['x', 'y', 'z'], MergeTail::Append);
        assert_eq!(out, vec!['a', 'x', 'y', 'z']);
    }

    #[test]
    fn test_transform_merge_with_empty_side() {
        assert_eq!(merge(&[], &[1, 2], MergeTail::Append), vec![1, 2]);
        assert_eq!(merge(&[1, 2], &[], MergeTail::Append), vec![1, 2]);
        assert!(merge(&[1, 2], &[], MergeTail::Truncate).is_empty());
    }

    #[test]
    fn test_transform_split_then_merge_restores_odd_length() {
        let src = [10, 11, 12, 13, 14, 15, 16];
        let (even, odd) = split(&src);
        assert_eq!(merge(&even, &odd, MergeTail::Append), src.to_vec());
    }
}
