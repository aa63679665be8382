//! The sequence type and helpers for building one.

use crate::error::{Result, SeqError};

/// An ordered, zero-indexed, owned sequence of opaque elements.
///
/// Operations that borrow take `&[T]`; an absent sequence is spelled as an
/// empty slice there, since every read treats the two alike. Operations
/// where absence changes the outcome take an `Option` instead.
pub type Seq<T> = Vec<T>;

/// Returns `true` if the sequence is absent or has no elements.
pub fn is_empty<T>(seq: Option<&[T]>) -> bool {
    seq.map_or(true, <[T]>::is_empty)
}

/// Builds a sequence from the first `size` items of any iterable.
///
/// A negative `size` yields an empty sequence. Asking for more items than
/// the source holds is an error rather than a partial result.
///
/// # Example
///
/// ```
/// use standout_seq::{from_sized, SeqError};
///
/// assert_eq!(from_sized(["fst", "snd"], 2), Ok(vec!["fst", "snd"]));
/// assert_eq!(from_sized(["fst", "snd"], -1), Ok(vec![]));
/// assert_eq!(
///     from_sized(["fst"], 3),
///     Err(SeqError::SizeOutOfRange { requested: 3, available: 1 })
/// );
/// ```
pub fn from_sized<I>(items: I, size: isize) -> Result<Seq<I::Item>>
where
    I: IntoIterator,
{
    let Ok(requested) = usize::try_from(size) else {
        return Ok(Seq::new());
    };

    let collected: Seq<I::Item> = items.into_iter().take(requested).collect();
    if collected.len() < requested {
        return Err(SeqError::SizeOutOfRange {
            requested,
            available: collected.len(),
        });
    }
    Ok(collected)
}
