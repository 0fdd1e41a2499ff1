//! Model mutation error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by mutations on the library's collections.
///
/// Every variant is local and recoverable: a failed operation leaves
/// the target collection untouched, and callers may no-op or surface
/// the failure as a status message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The referenced index does not exist in the target collection.
    #[error("no entry at index {index} in a collection of {len}")]
    NotFound {
        /// The index that was referenced.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },

    /// No presentation with the given id exists in the library.
    #[error("no presentation with id {id}")]
    UnknownId {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The target index is outside the valid range for a move.
    #[error("invalid target index {index} for a collection of {len}")]
    InvalidIndex {
        /// The target index that was requested.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },
}

impl ModelError {
    /// Creates a not-found error.
    #[must_use]
    pub const fn not_found(index: usize, len: usize) -> Self {
        Self::NotFound { index, len }
    }

    /// Creates an unknown-id error.
    #[must_use]
    pub const fn unknown_id(id: Uuid) -> Self {
        Self::UnknownId { id }
    }

    /// Creates an invalid-index error.
    #[must_use]
    pub const fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }
}
