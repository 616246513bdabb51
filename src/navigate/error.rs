//! Error types for path navigation.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while navigating a document tree.
///
/// The taxonomy is deliberately small: anything that merely fails to address
/// a node (missing sequence index, path past a scalar) is a silent no-op,
/// not an error.
#[derive(Debug, Error)]
pub enum NavigateError {
    /// A sequence-addressing path segment is not a base-10 integer.
    #[error("invalid sequence index '{segment}'")]
    InvalidIndex {
        segment: String,
        #[source]
        source: ParseIntError,
    },
    /// An error returned by a visitor callback, propagated unchanged.
    #[error(transparent)]
    Callback(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl NavigateError {
    /// Wraps a caller-supplied error for return from a visitor callback.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        NavigateError::Callback(err.into())
    }

    pub(crate) fn invalid_index(segment: &str, source: ParseIntError) -> Self {
        NavigateError::InvalidIndex {
            segment: segment.to_string(),
            source,
        }
    }
}
