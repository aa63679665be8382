//! Per-element iteration, transformation and folding.
//!
//! Operations that may hand back their input untouched return
//! [`Cow<[T]>`](std::borrow::Cow): `Borrowed` when the function is missing and
//! the input is returned as-is, `Owned` when a new sequence was built.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::callback::{Action, Callback, Collector, KeyFn, Predicate};
use crate::seq::Seq;

/// Calls `action` on every element in forward order.
///
/// Does nothing when `action` is `None`.
pub fn each<T>(seq: &[T], action: Option<Action<'_, T>>) {
    let Some(action) = action else {
        return;
    };
    for (index, value) in seq.iter().enumerate() {
        action(value, index, seq);
    }
}

/// Builds a same-length sequence where element `i` is `callback(seq[i], i, seq)`.
///
/// Without a callback the input is returned unchanged.
pub fn map<'a, T: Clone>(seq: &'a [T], callback: Option<Callback<'_, T>>) -> Cow<'a, [T]> {
    let Some(callback) = callback else {
        return Cow::Borrowed(seq);
    };
    let mapped: Seq<T> = seq
        .iter()
        .enumerate()
        .map(|(index, value)| callback(value, index, seq))
        .collect();
    Cow::Owned(mapped)
}

/// Keeps the elements that pass `predicate`, preserving their order.
///
/// Without a predicate the input is returned unchanged.
pub fn filter<'a, T: Clone>(seq: &'a [T], predicate: Option<Predicate<'_, T>>) -> Cow<'a, [T]> {
    let Some(predicate) = predicate else {
        return Cow::Borrowed(seq);
    };
    let kept: Seq<T> = seq
        .iter()
        .enumerate()
        .filter(|(index, value)| predicate(*value, *index, seq))
        .map(|(_, value)| value.clone())
        .collect();
    Cow::Owned(kept)
}

/// Keeps the elements that fail `predicate`; the complement of [`filter`].
///
/// Without a predicate the input is returned unchanged.
pub fn reject<'a, T: Clone>(seq: &'a [T], predicate: Option<Predicate<'_, T>>) -> Cow<'a, [T]> {
    let Some(predicate) = predicate else {
        return Cow::Borrowed(seq);
    };
    let negated: Predicate<'_, T> = &|value, index, source| !predicate(value, index, source);
    filter(seq, Some(negated))
}

/// Left fold.
///
/// With an `initial` seed folding starts at index 0. Without one the first
/// element seeds the accumulator and folding starts at index 1.
///
/// The accumulator has the element type because an unseeded fold uses the
/// first element as its starting accumulator. To fold into another type,
/// `map` into it first or fold with `Iterator::fold`.
///
/// Returns `None` for an empty sequence or a missing collector, even when a
/// seed was supplied.
pub fn reduce<T: Clone>(
    seq: &[T],
    collector: Option<Collector<'_, T>>,
    initial: Option<T>,
) -> Option<T> {
    let collector = collector?;
    let first = seq.first()?;

    let (memo, start) = match initial {
        Some(seed) => (seed, 0),
        None => (first.clone(), 1),
    };

    Some(
        (start..seq.len()).fold(memo, |memo, index| {
            collector(memo, &seq[index], index, seq)
        }),
    )
}

/// Right fold, the mirror of [`reduce`].
///
/// Without an `initial` seed the last element seeds the accumulator and
/// folding continues from the second-to-last element down to index 0.
pub fn reduce_right<T: Clone>(
    seq: &[T],
    collector: Option<Collector<'_, T>>,
    initial: Option<T>,
) -> Option<T> {
    let collector = collector?;
    let last = seq.last()?;

    let (memo, end) = match initial {
        Some(seed) => (seed, seq.len()),
        None => (last.clone(), seq.len() - 1),
    };

    Some(
        (0..end)
            .rev()
            .fold(memo, |memo, index| collector(memo, &seq[index], index, seq)),
    )
}

/// Counts elements per key.
///
/// The key function returns the already-stringified key. Returns `None`
/// when nothing was computed (empty sequence or missing key function), which
/// callers can tell apart from a computed map.
pub fn count_by<T>(seq: &[T], key: Option<KeyFn<'_, T, String>>) -> Option<HashMap<String, usize>> {
    let key = key?;
    if seq.is_empty() {
        return None;
    }

    let mut counts = HashMap::new();
    for (index, value) in seq.iter().enumerate() {
        *counts.entry(key(value, index, seq)).or_insert(0) += 1;
    }
    Some(counts)
}

/// Groups elements by key, keeping each group in encounter order.
///
/// Returns an empty map for an empty sequence or a missing key function.
pub fn group_by<T: Clone, K: Eq + Hash>(
    seq: &[T],
    key: Option<KeyFn<'_, T, K>>,
) -> HashMap<K, Seq<T>> {
    let mut groups: HashMap<K, Seq<T>> = HashMap::new();
    let Some(key) = key else {
        return groups;
    };

    for (index, value) in seq.iter().enumerate() {
        groups
            .entry(key(value, index, seq))
            .or_default()
            .push(value.clone());
    }
    groups
}
