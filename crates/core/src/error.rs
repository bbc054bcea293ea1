//! Error types for ownstate
//!
//! Comparison and hashing never fail. These errors cover typed access to
//! member values.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for ownstate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ownstate
#[derive(Debug, Error)]
pub enum Error {
    /// A member value had a different variant than requested
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Requested variant name
        expected: &'static str,
        /// Actual variant name
        actual: &'static str,
    },
}
