//! Comparator-driven scans shared by the search operations.
//!
//! Holds the two-ended extreme scan behind `min`/`max` and the binary
//! search behind sorted `index_of`.

use std::cmp::Ordering;

use crate::callback::Comparator;

/// Which end of the ordering an extreme scan is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extreme {
    Min,
    Max,
}

impl Extreme {
    /// A candidate ordered `ordering` against the incumbent strictly beats it.
    fn prefers(self, ordering: Ordering) -> bool {
        match self {
            Extreme::Min => ordering == Ordering::Less,
            Extreme::Max => ordering == Ordering::Greater,
        }
    }
}

/// Finds the `wanted` extreme using a two-ended walk.
///
/// Pointers start at both ends and move inward. At each step the pair is
/// compared first and the better of the two (left on a tie) is then
/// compared against the running best, which starts as the first element.
/// When the pointers meet on an odd-length slice the middle element is
/// compared on its own. The running best is replaced only on a strict win,
/// so among equal elements the one examined first in this walk order is
/// returned.
///
/// A single-element slice returns its element without calling `cmp`.
pub(crate) fn extreme<'a, T>(
    seq: &'a [T],
    cmp: Comparator<'_, T>,
    wanted: Extreme,
) -> Option<&'a T> {
    let first = seq.first()?;
    if seq.len() == 1 {
        return Some(first);
    }

    let mut best = first;
    let (mut left, mut right) = (0, seq.len() - 1);

    while left <= right {
        let candidate = if left == right {
            &seq[left]
        } else if wanted.prefers(cmp(&seq[right], &seq[left])) {
            &seq[right]
        } else {
            &seq[left]
        };

        if wanted.prefers(cmp(candidate, best)) {
            best = candidate;
        }

        left += 1;
        right -= 1;
    }

    Some(best)
}

/// Binary search over a slice assumed ascending under `cmp`.
///
/// Returns the first exact match met along the halving path, which is not
/// necessarily the lowest matching index when duplicates exist.
pub(crate) fn sorted_position<T>(seq: &[T], target: &T, cmp: Comparator<'_, T>) -> Option<usize> {
    let (mut lo, mut hi) = (0, seq.len());

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&seq[mid], target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}
