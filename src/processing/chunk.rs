//! Fixed-size chunking.
//!
//! Edge cases, checked in this order:
//!
//! 1. `size <= 0`: a single chunk holding the whole input (even an empty one).
//! 2. Empty input: no chunks.
//! 3. `len <= size`: a single chunk holding the whole input.
//! 4. Otherwise consecutive chunks of `size` elements; the last holds the remainder.

/// Splits `elems` into owned chunks of `size` elements.
///
/// ```rust
/// use seq_transforms::processing::chunk;
///
/// let out = chunk(&["a", "b", "c", "d", "e", "f", "g"], 3);
/// assert_eq!(out, vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g"]]);
/// ```
pub fn chunk<T: Clone>(elems: &[T], size: isize) -> Vec<Vec<T>> {
    chunk_slices(elems, size)
        .into_iter()
        .map(<[T]>::to_vec)
        .collect()
}

/// Same policy as [`chunk()`], but returns borrowed sub-slices of `elems` instead of copies.
pub fn chunk_slices<T>(elems: &[T], size: isize) -> Vec<&[T]> {
    let total = elems.len();
    let size = match usize::try_from(size) {
        Ok(n) if n > 0 => n,
        _ => return vec![elems],
    };
    if total == 0 {
        return Vec::new();
    }
    if total <= size {
        return vec![elems];
    }
    elems.chunks(size).collect()
}

#[cfg(test)]
mod tests {
    use super::{chunk, chunk_slices};

    const LETTERS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

    #[test]
    fn chunk_leaves_short_remainder_last() {
        assert_eq!(
            chunk(&LETTERS, 3),
            vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g"]]
        );
    }

    #[test]
    fn chunk_with_exact_multiple_has_no_remainder() {
        let input = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        assert_eq!(
            chunk(&input, 3),
            vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g", "h", "i"]]
        );
    }

    #[test]
    fn non_positive_size_returns_whole_input_as_one_chunk() {
        assert_eq!(chunk(&LETTERS, 0), vec![LETTERS.to_vec()]);
        assert_eq!(chunk(&LETTERS, -4), vec![LETTERS.to_vec()]);
    }

    #[test]
    fn non_positive_size_wins_over_empty_input() {
        let empty: [i32; 0] = [];
        assert_eq!(chunk(&empty, 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn empty_input_with_positive_size_has_no_chunks() {
        let empty: [i32; 0] = [];
        assert!(chunk(&empty, 3).is_empty());
    }

    #[test]
    fn chunk_slices_borrow_from_input() {
        let input = LETTERS;
        let out = chunk_slices(&input, 5);
        assert_eq!(out.len(), 2);
        assert!(std::ptr::eq(out[0].as_ptr(), input.as_ptr()));
        assert_eq!(out[1], &["f", "g"]);
    }
}
