//! pdfunlock-parse: PDF backend for loading, decrypting and re-serializing
//! documents.
//!
//! This crate defines the [`PdfBackend`] trait and its lopdf implementation.
//! It depends on pdfunlock-core for shared data types.

pub mod backend;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;
pub mod lopdf_backend;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use pdfunlock_core;
