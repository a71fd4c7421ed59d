//! Error taxonomy for dripdb
//!
//! One enum covers every failure the client surface can produce.
//! Errors always propagate synchronously from the call that caused
//! them; nothing in this crate retries or suppresses.

use thiserror::Error;

/// Result alias used across all dripdb crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by dripdb operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A collection was declared without any key attributes.
    #[error("collection '{0}' declared without key attributes")]
    InvalidSchema(String),

    /// A condition uses a predicate the backend cannot translate.
    #[error("unsupported predicate on attribute '{name}': {reason}")]
    UnsupportedPredicate {
        /// Attribute the predicate applies to.
        name: String,
        /// What made the predicate untranslatable.
        reason: String,
    },

    /// An underlying storage operation failed. Wraps the cause.
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// `next_dosage()` was called after the last page.
    #[error("no more pages in this scan")]
    NoMorePages,
}

impl Error {
    /// Wrap an arbitrary storage-level failure.
    pub fn storage(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Storage(cause.into())
    }

    /// Build an [`Error::UnsupportedPredicate`] for an attribute.
    pub fn unsupported(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedPredicate {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_wraps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Error::storage(io);
        assert!(err.to_string().starts_with("storage failure"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_message_names_attribute() {
        let err = Error::unsupported("age", "operator GT is not supported");
        assert!(err.to_string().contains("'age'"));
        assert!(err.to_string().contains("GT"));
    }
}
