//! pdfunlock-core: Backend-independent data types for pdfunlock-rs.
//!
//! This crate provides the file selection registry, the per-file outcome
//! model, batch results, engine options, and the error type shared by the
//! parsing backend and the batch engine. It has no required dependencies.

pub mod encryption;
pub mod error;
pub mod options;
pub mod outcome;
pub mod selection;

pub use encryption::EncryptionInfo;
pub use error::UnlockError;
pub use options::UnlockOptions;
pub use outcome::{BatchResult, BatchSummary, FileOutcome, FileReport};
pub use selection::{DEFAULT_DISPLAY_WIDTH, FileSelection, display_name, is_pdf_path};
