//! Searching: predicates, comparator lookups and extremes.
//!
//! "Not found" is always `None` (or `false` for the boolean checks). A
//! missing predicate or comparator counts as "not found" rather than an
//! error.

use crate::callback::{equals, Comparator, Predicate};
use crate::ordering::{extreme, sorted_position, Extreme};

/// Returns the first element that passes `predicate`.
pub fn find<'a, T>(seq: &'a [T], predicate: Option<Predicate<'_, T>>) -> Option<&'a T> {
    find_index(seq, predicate).map(|index| &seq[index])
}

/// Returns the last element that passes `predicate`.
pub fn find_last<'a, T>(seq: &'a [T], predicate: Option<Predicate<'_, T>>) -> Option<&'a T> {
    find_last_index(seq, predicate).map(|index| &seq[index])
}

/// Returns the index of the first element that passes `predicate`.
pub fn find_index<T>(seq: &[T], predicate: Option<Predicate<'_, T>>) -> Option<usize> {
    let predicate = predicate?;
    (0..seq.len()).find(|&index| predicate(&seq[index], index, seq))
}

/// Returns the index of the last element that passes `predicate`.
pub fn find_last_index<T>(seq: &[T], predicate: Option<Predicate<'_, T>>) -> Option<usize> {
    let predicate = predicate?;
    (0..seq.len())
        .rev()
        .find(|&index| predicate(&seq[index], index, seq))
}

/// Returns `true` if at least one element passes `predicate`.
pub fn some<T>(seq: &[T], predicate: Option<Predicate<'_, T>>) -> bool {
    find_index(seq, predicate).is_some()
}

/// Returns `true` if every element passes `predicate`.
///
/// Unlike [`Iterator::all`], an empty sequence is `false`, as is a missing
/// predicate.
pub fn every<T>(seq: &[T], predicate: Option<Predicate<'_, T>>) -> bool {
    let Some(predicate) = predicate else {
        return false;
    };
    !seq.is_empty()
        && seq
            .iter()
            .enumerate()
            .all(|(index, value)| predicate(value, index, seq))
}

/// Returns the index of an element equal to `target`.
///
/// With `is_sorted` the slice is assumed ascending under `cmp` and searched
/// by halving; the first match met on that path is returned, which is not
/// necessarily the lowest index among duplicates. Otherwise the first equal
/// element from the front wins.
pub fn index_of<T>(
    seq: &[T],
    target: &T,
    is_sorted: bool,
    cmp: Option<Comparator<'_, T>>,
) -> Option<usize> {
    let cmp = cmp?;
    if is_sorted {
        return sorted_position(seq, target, cmp);
    }
    let matches: Predicate<'_, T> = &|value, _, _| equals(cmp, value, target);
    find_index(seq, Some(matches))
}

/// Returns the index of the last element equal to `target`.
///
/// Always a linear scan from the back.
pub fn last_index_of<T>(seq: &[T], target: &T, cmp: Option<Comparator<'_, T>>) -> Option<usize> {
    let cmp = cmp?;
    let matches: Predicate<'_, T> = &|value, _, _| equals(cmp, value, target);
    find_last_index(seq, Some(matches))
}

/// Returns `true` if some element equals `target`; see [`index_of`].
pub fn contains<T>(
    seq: &[T],
    target: &T,
    is_sorted: bool,
    cmp: Option<Comparator<'_, T>>,
) -> bool {
    index_of(seq, target, is_sorted, cmp).is_some()
}

/// Returns the smallest element under `cmp`.
///
/// `None` for an empty sequence or a missing comparator. Among equal
/// minima, the one met first by the two-ended scan is returned.
pub fn min<'a, T>(seq: &'a [T], cmp: Option<Comparator<'_, T>>) -> Option<&'a T> {
    extreme(seq, cmp?, Extreme::Min)
}

/// Returns the largest element under `cmp`; the mirror of [`min`].
pub fn max<'a, T>(seq: &'a [T], cmp: Option<Comparator<'_, T>>) -> Option<&'a T> {
    extreme(seq, cmp?, Extreme::Max)
}
