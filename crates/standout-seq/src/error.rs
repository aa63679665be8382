//! Error types for the seq crate.

use thiserror::Error;

/// Errors that can occur when building sequences.
///
/// The operations themselves are total and never fail; only conversions
/// from foreign collections can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// More elements were requested than the source holds.
    #[error("requested {requested} elements but the source only holds {available}")]
    SizeOutOfRange { requested: usize, available: usize },
}

/// Result type for seq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
