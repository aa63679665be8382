//! Function shapes accepted by the sequence operations.
//!
//! Every operation takes its caller-supplied function as an `Option`, so
//! `None` plays the role of a missing function. Operations never fail on a
//! missing function; each falls back to a neutral value instead (see the
//! individual operation docs).
//!
//! Per-element functions receive the element, its index and the whole
//! source slice, which allows position-aware logic:
//!
//! ```
//! use standout_seq::{map, Callback};
//!
//! let values = vec![10, 20, 30];
//! let offset: Callback<i32> = &|value, index, source| value + (source.len() - index) as i32;
//!
//! assert_eq!(map(&values, Some(offset)).into_owned(), vec![13, 22, 31]);
//! ```

use std::cmp::Ordering;

/// Side-effecting per-element function.
///
/// This is the only `FnMut` shape: actions exist to mutate captured state.
pub type Action<'f, T> = &'f mut dyn FnMut(&T, usize, &[T]);

/// Per-element transform producing a replacement element.
pub type Callback<'f, T> = &'f dyn Fn(&T, usize, &[T]) -> T;

/// Per-element test.
pub type Predicate<'f, T> = &'f dyn Fn(&T, usize, &[T]) -> bool;

/// Three-way ordering between two elements.
///
/// Also serves as the equality oracle: two elements are equal when the
/// comparator returns [`Ordering::Equal`].
pub type Comparator<'f, T> = &'f dyn Fn(&T, &T) -> Ordering;

/// Fold step combining the accumulator with one element.
///
/// The accumulator shares the element type so that an unseeded fold can
/// start from the first element.
pub type Collector<'f, T> = &'f dyn Fn(T, &T, usize, &[T]) -> T;

/// Per-element key extraction used by grouping and counting.
pub type KeyFn<'f, T, K> = &'f dyn Fn(&T, usize, &[T]) -> K;

/// Tests two elements for equality through a comparator.
pub(crate) fn equals<T>(cmp: Comparator<'_, T>, left: &T, right: &T) -> bool {
    cmp(left, right) == Ordering::Equal
}
