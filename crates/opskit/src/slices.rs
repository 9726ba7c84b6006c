//! Slice and vector helpers.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

/// Take `num` elements starting at a random offset, wrapping around.
///
/// `num == 0` or `num >= len` returns a full copy. Relative order is
/// preserved (modulo the wrap point); this is a cheap sampler, not a
/// shuffle.
pub fn random_slice<T: Clone>(items: &[T], num: usize) -> Vec<T> {
    if num == 0 || num >= items.len() {
        return items.to_vec();
    }

    let mut rng = rand::thread_rng();
    let start = rng.gen_range(0..items.len());
    (0..num)
        .map(|offset| items[(start + offset) % items.len()].clone())
        .collect()
}

/// Remove one element by index, counting from the end when negative.
///
/// Returns whether an element was removed; out-of-range indices are a
/// no-op.
pub fn splice_one<T>(items: &mut Vec<T>, index: isize) -> bool {
    let index = if index < 0 {
        match items.len().checked_sub(index.unsigned_abs()) {
            Some(resolved) => resolved,
            None => return false,
        }
    } else {
        index as usize
    };

    if index >= items.len() {
        return false;
    }
    items.remove(index);
    true
}

/// Order-preserving dedup of a slice.
pub fn dedupe<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_slice_full_copy() {
        let items = vec![1, 2, 3];
        assert_eq!(random_slice(&items, 0), items);
        assert_eq!(random_slice(&items, 3), items);
        assert_eq!(random_slice(&items, 10), items);
    }

    #[test]
    fn test_random_slice_length_and_membership() {
        let items: Vec<i32> = (0..10).collect();
        let sample = random_slice(&items, 4);
        assert_eq!(sample.len(), 4);
        assert!(sample.iter().all(|v| items.contains(v)));
    }

    #[test]
    fn test_random_slice_wraps_without_repeats() {
        let items: Vec<i32> = (0..5).collect();
        let sample = random_slice(&items, 5 - 1);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn test_splice_one_positive_index() {
        let mut items = vec!['a', 'b', 'c'];
        assert!(splice_one(&mut items, 1));
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn test_splice_one_negative_index() {
        let mut items = vec![1, 2, 3, 4];
        assert!(splice_one(&mut items, -1));
        assert_eq!(items, vec![1, 2, 3]);
        assert!(splice_one(&mut items, -3));
        assert_eq!(items, vec![2, 3]);
    }

    #[test]
    fn test_splice_one_out_of_range() {
        let mut items = vec![1, 2];
        assert!(!splice_one(&mut items, 5));
        assert!(!splice_one(&mut items, -5));
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let items = vec!["b", "a", "b", "c", "a"];
        assert_eq!(dedupe(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedupe_empty() {
        let items: Vec<u8> = Vec::new();
        assert!(dedupe(&items).is_empty());
    }
}
