//! Error types for the parsing backend.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`UnlockError`].

use pdfunlock_core::UnlockError;
use thiserror::Error;

/// Error type for PDF backend operations.
///
/// Wraps backend-specific errors and provides conversion to [`UnlockError`]
/// for unified error handling across the library.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decryption failed for a reason other than a wrong password
    /// (unsupported handler, malformed `/Encrypt` dictionary).
    #[error("decryption failed: {0}")]
    Decrypt(String),

    /// Error serializing the document back to bytes.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] UnlockError),
}

impl From<BackendError> for UnlockError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => UnlockError::ParseError(msg),
            BackendError::Io(e) => UnlockError::IoError(e.to_string()),
            BackendError::Decrypt(msg) => UnlockError::Other(format!("decryption failed: {msg}")),
            BackendError::Serialize(msg) => UnlockError::SerializeError(msg),
            BackendError::Core(e) => e,
        }
    }
}
