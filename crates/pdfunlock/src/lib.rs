//! pdfunlock: Batch-remove password protection from PDF files in place.
//!
//! This is the public API facade crate for pdfunlock-rs. It re-exports types
//! from pdfunlock-core and uses pdfunlock-parse for PDF reading, decryption
//! and re-serialization.
//!
//! # Architecture
//!
//! - **pdfunlock-core**: Selection registry, outcome model, options, errors
//! - **pdfunlock-parse**: PDF backend (lopdf) for open/decrypt/save
//! - **pdfunlock** (this crate): The batch engine that ties everything together
//!
//! Unlocking is destructive: each successfully processed file is overwritten
//! with its decrypted bytes and no backup is kept.

mod engine;
mod replace;
mod worker;

pub use engine::{Unlocked, Unlocker};
pub use worker::{BatchEvent, BatchHandle, spawn_batch};

pub use pdfunlock_core::{
    BatchResult, BatchSummary, DEFAULT_DISPLAY_WIDTH, EncryptionInfo, FileOutcome, FileReport,
    FileSelection, UnlockError, UnlockOptions, display_name, is_pdf_path,
};
pub use pdfunlock_parse::{LopdfBackend, PdfBackend};

/// Read the encryption parameters of the PDF at `path` without decrypting it.
///
/// Returns `Ok(None)` for unencrypted files.
///
/// # Errors
///
/// Returns [`UnlockError`] if the file cannot be read or is not a valid PDF.
pub fn encryption_info(
    path: impl AsRef<std::path::Path>,
) -> Result<Option<EncryptionInfo>, UnlockError> {
    let bytes = std::fs::read(path.as_ref())?;
    LopdfBackend::encryption_info(&bytes).map_err(UnlockError::from)
}

/// Remove the password from every file in `paths` using default options.
///
/// Shorthand for [`Unlocker::process`] on [`Unlocker::default`].
pub fn process<P: AsRef<std::path::Path>>(paths: &[P], password: &str) -> BatchResult {
    Unlocker::default().process(paths, password)
}
