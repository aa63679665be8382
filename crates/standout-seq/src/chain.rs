//! Fluent chaining over the sequence operations.
//!
//! [`Chain`] threads a working sequence through successive calls. Methods
//! that produce a sequence replace the working sequence and make it the
//! result. Methods that produce anything else (a folded element, an index,
//! a verdict, counts or groups) store that as the result and clear the
//! working sequence, so any further sequence method sees an empty input.

use std::hash::Hash;

use log::trace;
use rand::Rng;

use crate::callback::{Action, Callback, Collector, Comparator, KeyFn, Predicate};
use crate::output::Value;
use crate::seq::Seq;
use crate::{mutate, search, set, transform};

/// Starts a chain over `seq`; `None` starts from an empty sequence.
///
/// # Example
///
/// ```
/// use standout_seq::{chain, Callback, Comparator, Predicate};
///
/// let double: Callback<i64> = &|value, _, _| value * 2;
/// let small: Predicate<i64> = &|value, _, _| *value < 10;
/// let cmp: Comparator<i64> = &|l, r| l.cmp(r);
///
/// let result = chain(vec![4, 1, 3, 8])
///     .map(Some(double))
///     .filter(Some(small))
///     .sort_by(Some(cmp))
///     .into_value();
///
/// assert_eq!(result.into_seq(), Some(vec![2, 6, 8]));
/// ```
pub fn chain<T>(seq: impl Into<Option<Seq<T>>>) -> Chain<T> {
    Chain::new(seq.into().unwrap_or_default())
}

/// A by-value builder wrapping a working sequence and the last result.
///
/// While the result is [`Value::Seq`], that sequence is also the working
/// sequence. Every other result variant means the working sequence has been
/// cleared.
///
/// `K` is the key type of a [`Value::Groups`] result. It starts as `String`
/// and takes whatever type the key function of [`group_by`](Self::group_by)
/// returns.
#[derive(Debug, Clone)]
pub struct Chain<T, K = String> {
    value: Value<T, K>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::new(Seq::new())
    }
}

impl<T> From<Seq<T>> for Chain<T> {
    fn from(seq: Seq<T>) -> Self {
        Chain::new(seq)
    }
}

impl<T> Chain<T> {
    /// Creates a chain whose working sequence and result are `seq`.
    pub fn new(seq: Seq<T>) -> Self {
        Chain {
            value: Value::Seq(seq),
        }
    }
}

impl<T, K> Chain<T, K> {
    /// Returns the working sequence, or `None` once a scalar result has
    /// cleared it.
    pub fn mid(&self) -> Option<&[T]> {
        self.value.as_seq()
    }

    /// Returns the last result. Reading it has no side effects.
    pub fn value(&self) -> &Value<T, K> {
        &self.value
    }

    /// Consumes the chain, returning the last result.
    pub fn into_value(self) -> Value<T, K> {
        self.value
    }

    fn working(&self) -> &[T] {
        self.mid().unwrap_or_default()
    }

    fn take_working(self) -> Option<Seq<T>> {
        self.value.into_seq()
    }

    fn sequence(op: &str, seq: Seq<T>) -> Self {
        trace!("chain {op}: working sequence holds {} items", seq.len());
        Chain {
            value: Value::Seq(seq),
        }
    }

    fn scalar(op: &str, value: Value<T, K>) -> Self {
        trace!(
            "chain {op}: {} result, working sequence cleared",
            value.kind()
        );
        Chain { value }
    }

    // ========================================================================
    // Side effects
    // ========================================================================

    /// Calls `action` on every working element. The state is unchanged.
    pub fn each(self, action: Option<Action<'_, T>>) -> Self {
        transform::each(self.working(), action);
        self
    }

    /// Alias for [`each`](Self::each).
    pub fn for_each(self, action: Option<Action<'_, T>>) -> Self {
        self.each(action)
    }

    // ========================================================================
    // In-place rearrangement
    // ========================================================================

    /// Sorts the working sequence with a stable sort.
    pub fn sort_by(self, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = mutate::sort_by(self.take_working().unwrap_or_default(), cmp);
        Self::sequence("sort_by", seq)
    }

    /// Removes the element at the clamped `position`.
    pub fn remove(self, position: isize) -> Self {
        let seq = mutate::remove(self.take_working().unwrap_or_default(), position);
        Self::sequence("remove", seq)
    }

    /// Inserts `target` at the clamped `position`.
    pub fn insert(self, target: T, position: isize) -> Self {
        let seq = mutate::insert(self.take_working().unwrap_or_default(), target, position);
        Self::sequence("insert", seq)
    }

    /// Shuffles the working sequence with the thread-local random source.
    pub fn shuffle(self) -> Self {
        let seq = mutate::shuffle(self.take_working().unwrap_or_default());
        Self::sequence("shuffle", seq)
    }

    /// Shuffles the working sequence with `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let seq = mutate::shuffle_with(self.take_working().unwrap_or_default(), rng);
        Self::sequence("shuffle", seq)
    }

    /// Reverses the working sequence.
    pub fn reverse(self) -> Self {
        let seq = mutate::reverse(self.take_working().unwrap_or_default());
        Self::sequence("reverse", seq)
    }

    // ========================================================================
    // Index and verdict results
    // ========================================================================

    /// Stores the index of the first element passing `predicate`.
    pub fn find_index(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let index = search::find_index(self.working(), predicate);
        Self::scalar("find_index", Value::Index(index))
    }

    /// Stores the index of the last element passing `predicate`.
    pub fn find_last_index(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let index = search::find_last_index(self.working(), predicate);
        Self::scalar("find_last_index", Value::Index(index))
    }

    /// Stores the index of an element equal to `target`.
    pub fn index_of(self, target: &T, is_sorted: bool, cmp: Option<Comparator<'_, T>>) -> Self {
        let index = search::index_of(self.working(), target, is_sorted, cmp);
        Self::scalar("index_of", Value::Index(index))
    }

    /// Stores the index of the last element equal to `target`.
    pub fn last_index_of(self, target: &T, cmp: Option<Comparator<'_, T>>) -> Self {
        let index = search::last_index_of(self.working(), target, cmp);
        Self::scalar("last_index_of", Value::Index(index))
    }

    /// Stores whether any element passes `predicate`.
    pub fn some(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let found = search::some(self.working(), predicate);
        Self::scalar("some", Value::Bool(found))
    }

    /// Alias for [`some`](Self::some).
    pub fn any(self, predicate: Option<Predicate<'_, T>>) -> Self {
        self.some(predicate)
    }

    /// Stores whether every element passes `predicate`; `false` when empty.
    pub fn every(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let all = search::every(self.working(), predicate);
        Self::scalar("every", Value::Bool(all))
    }

    /// Alias for [`every`](Self::every).
    pub fn all(self, predicate: Option<Predicate<'_, T>>) -> Self {
        self.every(predicate)
    }

    /// Stores whether some element equals `target`.
    pub fn contains(self, target: &T, is_sorted: bool, cmp: Option<Comparator<'_, T>>) -> Self {
        let found = search::contains(self.working(), target, is_sorted, cmp);
        Self::scalar("contains", Value::Bool(found))
    }

    /// Alias for [`contains`](Self::contains).
    pub fn includes(self, target: &T, is_sorted: bool, cmp: Option<Comparator<'_, T>>) -> Self {
        self.contains(target, is_sorted, cmp)
    }

    /// Stores whether the working sequence equals `other` position by position.
    pub fn equals_strict(self, other: &[T], cmp: Option<Comparator<'_, T>>) -> Self {
        let equal = set::equals_strict(self.working(), other, cmp);
        Self::scalar("equals_strict", Value::Bool(equal))
    }

    /// Stores the counts per key of the working elements.
    pub fn count_by(self, key: Option<KeyFn<'_, T, String>>) -> Self {
        let counts = transform::count_by(self.working(), key);
        Self::scalar("count_by", Value::Counts(counts))
    }
}

impl<T: Clone, K> Chain<T, K> {
    // ========================================================================
    // Sequence results
    // ========================================================================

    /// Replaces each working element with `callback`'s result.
    pub fn map(self, callback: Option<Callback<'_, T>>) -> Self {
        let seq = transform::map(self.working(), callback).into_owned();
        Self::sequence("map", seq)
    }

    /// Alias for [`map`](Self::map).
    pub fn collect(self, callback: Option<Callback<'_, T>>) -> Self {
        self.map(callback)
    }

    /// Keeps the working elements that pass `predicate`.
    pub fn filter(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let seq = transform::filter(self.working(), predicate).into_owned();
        Self::sequence("filter", seq)
    }

    /// Alias for [`filter`](Self::filter).
    pub fn select(self, predicate: Option<Predicate<'_, T>>) -> Self {
        self.filter(predicate)
    }

    /// Keeps the working elements that fail `predicate`.
    pub fn reject(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let seq = transform::reject(self.working(), predicate).into_owned();
        Self::sequence("reject", seq)
    }

    /// Removes duplicates, keeping first occurrences.
    pub fn uniq(self, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = set::uniq(self.working(), cmp).into_owned();
        Self::sequence("uniq", seq)
    }

    /// Alias for [`uniq`](Self::uniq).
    pub fn unique(self, cmp: Option<Comparator<'_, T>>) -> Self {
        self.uniq(cmp)
    }

    /// Keeps the working elements not present in `other`.
    pub fn difference(self, other: Option<&[T]>, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = set::difference(self.working(), other, cmp);
        Self::sequence("difference", seq)
    }

    /// Drops every working element equal to `non_grata`.
    pub fn without(self, non_grata: Option<&T>, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = set::without(self.working(), non_grata, cmp).into_owned();
        Self::sequence("without", seq)
    }

    /// Keeps the unique working elements also present in `other`.
    pub fn intersection(self, other: Option<&[T]>, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = set::intersection(self.working(), other, cmp);
        Self::sequence("intersection", seq)
    }

    /// Unique elements of the working sequence followed by `other`.
    pub fn union(self, other: Option<&[T]>, cmp: Option<Comparator<'_, T>>) -> Self {
        let seq = set::union(self.working(), other, cmp);
        Self::sequence("union", seq)
    }

    /// Appends `next` to the working sequence.
    ///
    /// Once a scalar result has cleared the working sequence this yields an
    /// empty sequence, not `next`.
    pub fn concat(self, next: Option<&[T]>) -> Self {
        let seq = mutate::concat(self.take_working(), next);
        Self::sequence("concat", seq)
    }

    // ========================================================================
    // Element results
    // ========================================================================

    /// Stores the left fold of the working sequence.
    pub fn reduce(self, collector: Option<Collector<'_, T>>, initial: Option<T>) -> Self {
        let folded = transform::reduce(self.working(), collector, initial);
        Self::scalar("reduce", Value::Item(folded))
    }

    /// Alias for [`reduce`](Self::reduce).
    pub fn inject(self, collector: Option<Collector<'_, T>>, initial: Option<T>) -> Self {
        self.reduce(collector, initial)
    }

    /// Alias for [`reduce`](Self::reduce).
    pub fn foldl(self, collector: Option<Collector<'_, T>>, initial: Option<T>) -> Self {
        self.reduce(collector, initial)
    }

    /// Stores the right fold of the working sequence.
    pub fn reduce_right(self, collector: Option<Collector<'_, T>>, initial: Option<T>) -> Self {
        let folded = transform::reduce_right(self.working(), collector, initial);
        Self::scalar("reduce_right", Value::Item(folded))
    }

    /// Alias for [`reduce_right`](Self::reduce_right).
    pub fn foldr(self, collector: Option<Collector<'_, T>>, initial: Option<T>) -> Self {
        self.reduce_right(collector, initial)
    }

    /// Stores the smallest working element.
    pub fn min(self, cmp: Option<Comparator<'_, T>>) -> Self {
        let found = search::min(self.working(), cmp).cloned();
        Self::scalar("min", Value::Item(found))
    }

    /// Stores the largest working element.
    pub fn max(self, cmp: Option<Comparator<'_, T>>) -> Self {
        let found = search::max(self.working(), cmp).cloned();
        Self::scalar("max", Value::Item(found))
    }

    /// Stores the first element passing `predicate`.
    pub fn find(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let found = search::find(self.working(), predicate).cloned();
        Self::scalar("find", Value::Item(found))
    }

    /// Alias for [`find`](Self::find).
    pub fn detect(self, predicate: Option<Predicate<'_, T>>) -> Self {
        self.find(predicate)
    }

    /// Stores the last element passing `predicate`.
    pub fn find_last(self, predicate: Option<Predicate<'_, T>>) -> Self {
        let found = search::find_last(self.working(), predicate).cloned();
        Self::scalar("find_last", Value::Item(found))
    }

    /// Stores whether `other` is a permutation of the working sequence.
    pub fn equals_not_strict(self, other: &[T], cmp: Option<Comparator<'_, T>>) -> Self {
        let equal = set::equals_not_strict(self.working(), other, cmp);
        Self::scalar("equals_not_strict", Value::Bool(equal))
    }

    // ========================================================================
    // Grouping
    // ========================================================================

    /// Stores the working elements grouped by the key `key` returns.
    ///
    /// The key type is free: elements that are neither `Eq` nor `Hash`
    /// can still be grouped under a string or integer label.
    pub fn group_by<G: Eq + Hash>(self, key: Option<KeyFn<'_, T, G>>) -> Chain<T, G> {
        let groups = transform::group_by(self.working(), key);
        Chain::scalar("group_by", Value::Groups(groups))
    }
}
