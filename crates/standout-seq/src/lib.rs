//! Seq - Functional operations over generic sequences.
//!
//! Seq provides the usual battery of collection operations over slices of
//! any element type, plus a fluent [`Chain`] for composing them:
//!
//! - Iteration and transformation: `each`, `map`, `filter`, `reject`
//! - Folding: `reduce`, `reduce_right`, `count_by`, `group_by`
//! - Searching: `find`, `find_index`, `index_of`, `contains`, `min`, `max`, ...
//! - Set-style operations: `uniq`, `difference`, `intersection`, `union`, `without`
//! - Rearranging: `sort_by`, `remove`, `insert`, `concat`, `shuffle`, `reverse`
//!
//! # Quick Start
//!
//! ```rust
//! use standout_seq::{chain, filter, reduce, Collector, Comparator, Predicate, Value};
//!
//! let scores = vec![12, 7, 30, 7, 18];
//!
//! let passing: Predicate<i32> = &|score, _, _| *score >= 10;
//! let total: Collector<i32> = &|memo, score, _, _| memo + score;
//! let by_value: Comparator<i32> = &|l, r| l.cmp(r);
//!
//! // Free functions take slices and leave their input alone.
//! let kept = filter(&scores, Some(passing));
//! assert_eq!(&*kept, &[12, 30, 18]);
//! assert_eq!(reduce(&kept, Some(total), None), Some(60));
//!
//! // A chain threads the working sequence through each call.
//! let top = chain(scores)
//!     .uniq(Some(by_value))
//!     .sort_by(Some(by_value))
//!     .max(Some(by_value))
//!     .into_value();
//! assert_eq!(top, Value::Item(Some(30)));
//! ```
//!
//! # Callbacks
//!
//! Every caller-supplied function is passed as an `Option` of a borrowed
//! trait object (see [`Callback`], [`Predicate`], [`Comparator`] and
//! friends). Per-element functions receive the element, its index and the
//! whole source slice. Passing `None` never fails: each operation falls back
//! to a neutral result, documented on the operation itself.
//!
//! Equality is always decided by a [`Comparator`] returning
//! `Ordering::Equal`, so element types need no `Eq` or `Hash` impls. Only
//! the key type returned by a [`KeyFn`] must be hashable.
//!
//! # Absent vs Empty
//!
//! Most operations read an absent sequence exactly like an empty one and so
//! simply take `&[T]`. The few where absence changes the answer take an
//! `Option`: [`concat`] yields nothing when its base is absent, and the set
//! operations yield nothing when the other side is absent.
//!
//! # Chaining
//!
//! A [`Chain`] result is a [`Value`]. Sequence-producing methods keep the
//! chain going; element, index, boolean, count and group results end the
//! sequence context, and any later sequence method starts from empty.

mod callback;
mod chain;
mod error;
mod mutate;
mod ordering;
mod output;
mod random;
mod search;
mod seq;
mod set;
mod transform;

// Re-export public API
pub use callback::{Action, Callback, Collector, Comparator, KeyFn, Predicate};
pub use chain::{chain, Chain};
pub use error::{Result, SeqError};
pub use mutate::{
    concat, insert, remove, reverse, reversed_copy, shuffle, shuffle_with, shuffled_copy,
    shuffled_copy_with, sort_by,
};
pub use output::Value;
pub use random::{random, random_with};
pub use search::{
    contains, every, find, find_index, find_last, find_last_index, index_of, last_index_of, max,
    min, some,
};
pub use seq::{from_sized, is_empty, Seq};
pub use set::{
    difference, equals_not_strict, equals_strict, intersection, union, uniq, without,
};
pub use transform::{count_by, each, filter, group_by, map, reduce, reduce_right, reject};
