//! Error types for pdfunlock-rs.
//!
//! Provides [`UnlockError`], the typed failure of a single-file unlock
//! attempt. The batch engine never propagates it past a file boundary; it is
//! folded into a [`FileOutcome`](crate::FileOutcome) instead.

use std::fmt;

/// Errors that stop the unlock of one PDF file.
#[derive(Debug, Clone, PartialEq)]
pub enum UnlockError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading or replacing the file.
    IoError(String),
    /// The decrypted document could not be written back out.
    SerializeError(String),
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// The PDF is encrypted and requires a password to open.
    PasswordRequired,
    /// The supplied password is incorrect for this encrypted PDF.
    InvalidPassword,
    /// The re-serialized document did not survive a re-open check.
    VerificationFailed(String),
    /// Any other error not covered by specific variants.
    Other(String),
}

impl UnlockError {
    /// Whether this error means the password was rejected, as opposed to the
    /// file itself being unusable.
    pub fn is_password_error(&self) -> bool {
        matches!(self, UnlockError::InvalidPassword)
    }
}

impl fmt::Display for UnlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnlockError::ParseError(msg) => write!(f, "parse error: {msg}"),
            UnlockError::IoError(msg) => write!(f, "I/O error: {msg}"),
            UnlockError::SerializeError(msg) => write!(f, "failed to write PDF: {msg}"),
            UnlockError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            UnlockError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            UnlockError::InvalidPassword => write!(f, "the supplied password is incorrect"),
            UnlockError::VerificationFailed(msg) => {
                write!(f, "decrypted output failed verification: {msg}")
            }
            UnlockError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for UnlockError {}

impl From<std::io::Error> for UnlockError {
    fn from(err: std::io::Error) -> Self {
        UnlockError::IoError(err.to_string())
    }
}
