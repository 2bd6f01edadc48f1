//! Error types for the AAS wire codecs.
//!
//! Only shape mismatches and strict-mode rejections surface here; sparse but
//! well-formed input is trimmed silently under the lenient policy and never
//! produces an error.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for decode and encode operations
#[derive(Error, Debug)]
pub enum Error {
    /// A token is not the container shape the wire format requires at its
    /// position: an object for a reference, an array for an operation
    /// variable set, an object for each of the set's entries.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    /// An entry the lenient policy would drop, rejected under
    /// [`DecodePolicy::Strict`](crate::codec::DecodePolicy::Strict).
    #[error("malformed {context} entry: {detail}")]
    MalformedEntry {
        context: &'static str,
        detail: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
