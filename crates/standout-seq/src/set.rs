//! Set-style operations and sequence equality.
//!
//! Membership is always decided by a caller-supplied comparator returning
//! [`Ordering::Equal`](std::cmp::Ordering::Equal), so elements need no `Eq`
//! or `Hash` implementation. All membership checks are linear, which makes
//! these operations quadratic in comparator calls.

use std::borrow::Cow;

use crate::callback::{equals, Comparator};
use crate::search::{contains, index_of};
use crate::seq::Seq;

/// Collects `values`, skipping any already present in the result.
fn dedup_into<T>(values: impl IntoIterator<Item = T>, cmp: Comparator<'_, T>) -> Seq<T> {
    let mut unique = Seq::new();
    for value in values {
        if !contains(&unique, &value, false, Some(cmp)) {
            unique.push(value);
        }
    }
    unique
}

/// Removes duplicates, keeping the first occurrence of each element.
///
/// Without a comparator the input is returned unchanged.
pub fn uniq<'a, T: Clone>(seq: &'a [T], cmp: Option<Comparator<'_, T>>) -> Cow<'a, [T]> {
    match cmp {
        Some(cmp) => Cow::Owned(dedup_into(seq.iter().cloned(), cmp)),
        None => Cow::Borrowed(seq),
    }
}

/// Elements of `seq` not present in `other`.
///
/// Empty when `other` is absent or the comparator is missing.
pub fn difference<T: Clone>(
    seq: &[T],
    other: Option<&[T]>,
    cmp: Option<Comparator<'_, T>>,
) -> Seq<T> {
    let (Some(other), Some(cmp)) = (other, cmp) else {
        return Seq::new();
    };
    seq.iter()
        .filter(|value| !contains(other, value, false, Some(cmp)))
        .cloned()
        .collect()
}

/// Elements of `seq` also present in `other`, de-duplicated afterwards.
///
/// Order follows `seq`. Empty when `other` is absent or the comparator is
/// missing.
pub fn intersection<T: Clone>(
    seq: &[T],
    other: Option<&[T]>,
    cmp: Option<Comparator<'_, T>>,
) -> Seq<T> {
    let (Some(other), Some(cmp)) = (other, cmp) else {
        return Seq::new();
    };
    let shared = seq
        .iter()
        .filter(|value| contains(other, value, false, Some(cmp)))
        .cloned();
    dedup_into(shared, cmp)
}

/// Unique elements of `seq` followed by `other`, first occurrences kept.
///
/// An absent `other` contributes nothing. Empty when the comparator is
/// missing, whatever the inputs.
pub fn union<T: Clone>(seq: &[T], other: Option<&[T]>, cmp: Option<Comparator<'_, T>>) -> Seq<T> {
    let Some(cmp) = cmp else {
        return Seq::new();
    };
    let joined = seq.iter().chain(other.unwrap_or_default()).cloned();
    dedup_into(joined, cmp)
}

/// Elements of `seq` not equal to `non_grata`.
///
/// Empty when the comparator is missing. When there is nothing to remove
/// (`non_grata` is `None`) the input is returned unchanged.
pub fn without<'a, T: Clone>(
    seq: &'a [T],
    non_grata: Option<&T>,
    cmp: Option<Comparator<'_, T>>,
) -> Cow<'a, [T]> {
    let Some(cmp) = cmp else {
        return Cow::Owned(Seq::new());
    };
    let Some(non_grata) = non_grata else {
        return Cow::Borrowed(seq);
    };
    Cow::Owned(
        seq.iter()
            .filter(|value| !equals(cmp, value, non_grata))
            .cloned()
            .collect(),
    )
}

/// Same length and pairwise equal at every position.
///
/// Two empty sequences are equal; a missing comparator is never equal.
pub fn equals_strict<T>(left: &[T], right: &[T], cmp: Option<Comparator<'_, T>>) -> bool {
    let Some(cmp) = cmp else {
        return false;
    };
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| equals(cmp, r, l))
}

/// Same length and `right` is a permutation of `left`.
///
/// Each element of `left` consumes one equal element from a copy of
/// `right`, so duplicate counts must match too. Two empty sequences are
/// equal; a missing comparator is never equal.
pub fn equals_not_strict<T: Clone>(
    left: &[T],
    right: &[T],
    cmp: Option<Comparator<'_, T>>,
) -> bool {
    if cmp.is_none() || left.len() != right.len() {
        return false;
    }

    let mut remaining = right.to_vec();
    for value in left {
        match index_of(&remaining, value, false, cmp) {
            Some(found) => {
                remaining.remove(found);
            }
            None => return false,
        }
    }
    true
}
