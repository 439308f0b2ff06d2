//! Cross-cutting error types for Graha.
//!
//! Resolution errors (`UnknownObjectKey` lookups, `MissingPosition`, cycles)
//! live in `graha-engine`. This module covers construction and validation of
//! the inert data those lookups operate on.

use thiserror::Error;

use crate::keys::ObjectKey;

/// Errors raised while building or validating core data.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An abbreviation did not name any known graha.
    #[error("Unknown object key: {0}")]
    UnknownObjectKey(String),

    /// A snapshot already holds a position for this key.
    #[error("Duplicate position for {0}")]
    DuplicatePosition(ObjectKey),

    /// Data failed validation (range, shape, cross-field constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
