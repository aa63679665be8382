//! Operations that rearrange or resize a sequence.
//!
//! The in-place variants take the owned sequence and hand back the same
//! allocation, so callers that keep using the returned value observe the
//! mutation. The `_copy` variants leave their input untouched.

use rand::Rng;

use crate::callback::Comparator;
use crate::random::random_with;
use crate::seq::Seq;

/// Sorts in place with a stable sort.
///
/// Elements the comparator considers equal keep their relative order.
/// Without a comparator the sequence is returned as it came in.
pub fn sort_by<T>(mut seq: Seq<T>, cmp: Option<Comparator<'_, T>>) -> Seq<T> {
    if let Some(cmp) = cmp {
        seq.sort_by(|left, right| cmp(left, right));
    }
    seq
}

/// Removes the element at `position`, clamped into `[0, len - 1]`.
///
/// Out-of-range positions are not an error: a non-empty sequence always
/// loses exactly one element.
pub fn remove<T>(mut seq: Seq<T>, position: isize) -> Seq<T> {
    if seq.is_empty() {
        return seq;
    }
    let index = clamp(position, seq.len() - 1);
    seq.remove(index);
    seq
}

/// Inserts `target` at `position`, clamped into `[0, len]`.
///
/// Positions at or past the end append.
pub fn insert<T>(mut seq: Seq<T>, target: T, position: isize) -> Seq<T> {
    let index = clamp(position, seq.len());
    seq.insert(index, target);
    seq
}

/// Appends the elements of `next` to `seq`.
///
/// An absent `seq` yields an empty sequence (`next` is dropped, not
/// returned). An absent `next` leaves `seq` unchanged.
pub fn concat<T: Clone>(seq: Option<Seq<T>>, next: Option<&[T]>) -> Seq<T> {
    let Some(mut seq) = seq else {
        return Seq::new();
    };
    if let Some(next) = next {
        seq.extend_from_slice(next);
    }
    seq
}

/// Shuffles in place using the thread-local random source.
pub fn shuffle<T>(seq: Seq<T>) -> Seq<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Shuffles in place using `rng`.
///
/// Fisher-Yates walking upward: position `i` swaps with a uniformly chosen
/// position in `[0, i]`.
pub fn shuffle_with<T, R: Rng + ?Sized>(mut seq: Seq<T>, rng: &mut R) -> Seq<T> {
    for i in 0..seq.len() {
        let j = random_with(rng, 0.0, i as f64) as usize;
        seq.swap(i, j);
    }
    seq
}

/// Returns a shuffled copy, leaving `seq` untouched.
pub fn shuffled_copy<T: Clone>(seq: &[T]) -> Seq<T> {
    shuffle(seq.to_vec())
}

/// Returns a copy shuffled with `rng`.
pub fn shuffled_copy_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Seq<T> {
    shuffle_with(seq.to_vec(), rng)
}

/// Reverses in place.
pub fn reverse<T>(mut seq: Seq<T>) -> Seq<T> {
    seq.reverse();
    seq
}

/// Returns a reversed copy, leaving `seq` untouched.
pub fn reversed_copy<T: Clone>(seq: &[T]) -> Seq<T> {
    reverse(seq.to_vec())
}

fn clamp(position: isize, max: usize) -> usize {
    usize::try_from(position).map_or(0, |index| index.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{equals_not_strict, equals_strict};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cmp::Ordering;

    fn int_cmp(l: &i64, r: &i64) -> Ordering {
        l.cmp(r)
    }

    fn sample() -> Vec<i64> {
        vec![2, 4, 6, 7, 8, 10, 120, 10, 2, 17]
    }

    #[test]
    fn sort_by_orders_values() {
        let seq: Vec<i64> = vec![4, 3, 43, 2, 3, -92, 102, 2, 0];
        assert_eq!(
            sort_by(seq, Some(&int_cmp)),
            vec![-92, 0, 2, 2, 3, 3, 4, 43, 102]
        );
    }

    #[test]
    fn sort_by_is_stable() {
        let by_key = |l: &(i64, char), r: &(i64, char)| l.0.cmp(&r.0);
        let seq = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];

        assert_eq!(
            sort_by(seq, Some(&by_key)),
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn sort_by_without_comparator_keeps_order() {
        assert_eq!(sort_by(sample(), None), sample());
        assert!(sort_by(Vec::<i64>::new(), Some(&int_cmp)).is_empty());
    }

    #[test]
    fn sort_by_reuses_allocation() {
        let seq = sample();
        let ptr = seq.as_ptr();
        let sorted = sort_by(seq, Some(&int_cmp));
        assert_eq!(sorted.as_ptr(), ptr);
    }

    #[test]
    fn remove_clamps_position() {
        assert_eq!(remove(vec![3, 34, 23, 333, -12], 123), vec![3, 34, 23, 333]);
        assert_eq!(remove(sample(), 2), vec![2, 4, 7, 8, 10, 120, 10, 2, 17]);
        assert_eq!(remove(vec![4, 7, 8], -1), vec![7, 8]);
        assert!(remove(Vec::<i64>::new(), -1).is_empty());
        assert!(remove(vec![1], 0).is_empty());
    }

    #[test]
    fn insert_clamps_position() {
        let seq = vec![2, 4, 6, 7, 8, 10];
        let inserted = insert(seq, 20, 1);
        assert_eq!(inserted, vec![2, 20, 4, 6, 7, 8, 10]);

        let first = insert(inserted, 92, -1);
        assert_eq!(first, vec![92, 2, 20, 4, 6, 7, 8, 10]);

        let last = insert(first, 22, 30);
        assert_eq!(last, vec![92, 2, 20, 4, 6, 7, 8, 10, 22]);
    }

    #[test]
    fn insert_into_empty() {
        assert_eq!(insert(Vec::new(), 0, 192), vec![0]);
        assert_eq!(insert(Vec::new(), 5, -3), vec![5]);
    }

    #[test]
    fn concat_appends() {
        let next: Vec<i64> = vec![777, 1992];
        assert_eq!(
            concat(Some(vec![2, 4, 6]), Some(&next)),
            vec![2, 4, 6, 777, 1992]
        );
        assert_eq!(concat(Some(vec![2, 4, 6]), None), vec![2, 4, 6]);
        assert_eq!(concat(Some(Vec::new()), Some(&next)), next);
    }

    #[test]
    fn concat_onto_absent_is_empty() {
        let next: Vec<i64> = vec![777, 1992];
        assert!(concat(None, Some(&next)).is_empty());
        assert!(concat::<i64>(None, None).is_empty());
    }

    #[test]
    fn shuffle_with_seed_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(2024);
        let shuffled = shuffle_with(sample(), &mut rng);

        assert_eq!(shuffled.len(), sample().len());
        assert!(equals_not_strict(&shuffled, &sample(), Some(&int_cmp)));
    }

    #[test]
    fn shuffle_with_seed_is_reproducible() {
        let a = shuffle_with(sample(), &mut StdRng::seed_from_u64(9));
        let b = shuffle_with(sample(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_reorders_with_high_probability() {
        let seq: Vec<i64> = (0..20).collect();
        let shuffled = shuffle(seq.clone());

        assert!(equals_not_strict(&shuffled, &seq, Some(&int_cmp)));
        // 20! orderings; the identity comes back with negligible odds.
        assert!(!equals_strict(&shuffled, &seq, Some(&int_cmp)));
    }

    #[test]
    fn shuffled_copy_leaves_input() {
        let seq = sample();
        let copy = shuffled_copy_with(&seq, &mut StdRng::seed_from_u64(1));

        assert_eq!(seq, sample());
        assert!(equals_not_strict(&copy, &seq, Some(&int_cmp)));
        assert!(shuffled_copy::<i64>(&[]).is_empty());
        assert!(shuffle(Vec::<i64>::new()).is_empty());
    }

    #[test]
    fn reverse_and_reversed_copy() {
        let expected = vec![17, 2, 10, 120, 10, 8, 7, 6, 4, 2];
        let seq = sample();

        assert_eq!(reversed_copy(&seq), expected);
        assert_eq!(seq, sample());
        assert_eq!(reverse(seq), expected);
        assert!(reverse(Vec::<i64>::new()).is_empty());
        assert!(reversed_copy::<i64>(&[]).is_empty());
    }
}
