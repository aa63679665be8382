//! Results carried by a [`Chain`](crate::Chain).
//!
//! A chain's last result is either a sequence (which doubles as the working
//! sequence for further calls) or one of the scalar shapes produced by the
//! folding, searching and grouping operations.

use std::collections::HashMap;
use std::hash::Hash;

use crate::seq::Seq;

/// The last result produced by a chain.
///
/// # Example
///
/// ```
/// use standout_seq::{chain, Comparator, Value};
///
/// let cmp: Comparator<i32> = &|l, r| l.cmp(r);
///
/// let found = chain(vec![3, 1, 2]).min(Some(cmp)).into_value();
/// assert_eq!(found, Value::Item(Some(1)));
/// assert_eq!(found.as_item(), Some(&1));
/// assert!(!found.is_seq());
/// ```
/// `K` is the key type of a `Groups` result and defaults to `String`.
#[derive(Debug, Clone)]
pub enum Value<T, K = String> {
    /// A sequence result; also the chain's working sequence.
    Seq(Seq<T>),
    /// A single element, `None` when nothing was found or folded.
    Item(Option<T>),
    /// A position, `None` when nothing matched.
    Index(Option<usize>),
    /// A boolean verdict.
    Bool(bool),
    /// Per-key counts, `None` when nothing was counted.
    Counts(Option<HashMap<String, usize>>),
    /// Elements grouped under the key their callback produced.
    Groups(HashMap<K, Seq<T>>),
}

impl<T, K> Value<T, K> {
    /// Returns `true` if this is a `Seq` value.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns `true` if this is an `Item` value, found or not.
    pub fn is_item(&self) -> bool {
        matches!(self, Value::Item(_))
    }

    /// Returns `true` if this is an `Index` value, found or not.
    pub fn is_index(&self) -> bool {
        matches!(self, Value::Index(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a `Counts` value.
    pub fn is_counts(&self) -> bool {
        matches!(self, Value::Counts(_))
    }

    /// Returns `true` if this is a `Groups` value.
    pub fn is_groups(&self) -> bool {
        matches!(self, Value::Groups(_))
    }

    /// Borrows the sequence, if this is one.
    pub fn as_seq(&self) -> Option<&[T]> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Borrows the found element, if any.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Value::Item(item) => item.as_ref(),
            _ => None,
        }
    }

    /// Extracts the found position, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Index(index) => *index,
            _ => None,
        }
    }

    /// Extracts the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrows the counts, if any were computed.
    pub fn as_counts(&self) -> Option<&HashMap<String, usize>> {
        match self {
            Value::Counts(counts) => counts.as_ref(),
            _ => None,
        }
    }

    /// Borrows the groups, if this is a grouping.
    pub fn as_groups(&self) -> Option<&HashMap<K, Seq<T>>> {
        match self {
            Value::Groups(groups) => Some(groups),
            _ => None,
        }
    }

    /// Moves the sequence out, if this is one.
    pub fn into_seq(self) -> Option<Seq<T>> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Moves the found element out, if any.
    pub fn into_item(self) -> Option<T> {
        match self {
            Value::Item(item) => item,
            _ => None,
        }
    }

    /// Returns the variant name, for diagnostics.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Seq(_) => "seq",
            Value::Item(_) => "item",
            Value::Index(_) => "index",
            Value::Bool(_) => "bool",
            Value::Counts(_) => "counts",
            Value::Groups(_) => "groups",
        }
    }
}

impl<T, K> From<Seq<T>> for Value<T, K> {
    fn from(seq: Seq<T>) -> Self {
        Value::Seq(seq)
    }
}

// HashMap equality needs K: Eq + Hash.
impl<T: PartialEq, K: Eq + Hash> PartialEq for Value<T, K> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Item(a), Value::Item(b)) => a == b,
            (Value::Index(a), Value::Index(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Counts(a), Value::Counts(b)) => a == b,
            (Value::Groups(a), Value::Groups(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, K: Eq + Hash> Eq for Value<T, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        assert!(Value::<i32>::Seq(vec![1]).is_seq());
        assert!(Value::<i32>::Item(None).is_item());
        assert!(Value::<i32>::Index(Some(2)).is_index());
        assert!(Value::<i32>::Bool(true).is_bool());
        assert!(Value::<i32>::Counts(None).is_counts());
        assert!(Value::<i32>::Groups(HashMap::new()).is_groups());
        assert!(Value::<f64, u8>::Groups(HashMap::new()).is_groups());
        assert!(!Value::<i32>::Bool(true).is_seq());
    }

    #[test]
    fn value_extraction() {
        assert_eq!(Value::<i32>::Seq(vec![1, 2]).as_seq(), Some(&[1, 2][..]));
        assert_eq!(Value::<i32>::Item(Some(4)).as_item(), Some(&4));
        assert_eq!(Value::<i32>::Item(None).as_item(), None);
        assert_eq!(Value::<i32>::Index(Some(3)).as_index(), Some(3));
        assert_eq!(Value::<i32>::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::<i32>::Index(Some(3)).as_bool(), None);
        assert_eq!(Value::<i32>::Bool(true).as_seq(), None);
    }

    #[test]
    fn value_into() {
        assert_eq!(Value::<i32>::Seq(vec![1, 2]).into_seq(), Some(vec![1, 2]));
        assert_eq!(Value::<i32>::Item(Some(7)).into_item(), Some(7));
        assert_eq!(Value::<i32>::Bool(true).into_seq(), None);
        assert_eq!(Value::<i32>::Seq(vec![7]).into_item(), None);
    }

    #[test]
    fn value_counts_and_groups() {
        let counts: HashMap<String, usize> = [("odd".to_string(), 2)].into_iter().collect();
        let value = Value::<i32>::Counts(Some(counts.clone()));
        assert_eq!(value.as_counts(), Some(&counts));
        assert_eq!(Value::<i32>::Counts(None).as_counts(), None);

        let groups: HashMap<i32, Vec<i32>> = [(1, vec![1, 1])].into_iter().collect();
        let value = Value::Groups(groups.clone());
        assert_eq!(value.as_groups(), Some(&groups));

        let labelled: HashMap<String, Vec<f64>> =
            [("small".to_string(), vec![0.5])].into_iter().collect();
        let value: Value<f64> = Value::Groups(labelled.clone());
        assert_eq!(value.as_groups(), Some(&labelled));
        assert_eq!(value, Value::Groups(labelled));
    }

    #[test]
    fn value_equality_is_per_variant() {
        assert_eq!(Value::<i32>::Seq(vec![1]), Value::from(vec![1]));
        assert_eq!(Value::<f64>::Item(Some(0.5)), Value::Item(Some(0.5)));
        assert_ne!(Value::<i32>::Index(Some(0)), Value::Item(Some(0)));
        assert_ne!(Value::<i32>::Index(None), Value::Item(None));
        assert_eq!(Value::<i32>::Bool(true).kind(), "bool");
    }
}
