//! Shared helpers for integration tests.
//!
//! PDFs are built in memory by `pdfunlock_parse::fixtures`; this module only
//! puts them on disk.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use pdfunlock_parse::fixtures::{
    encrypted_pdf, encrypted_pdf_with_raw_password, expected_contents, load_plain, page_content,
    page_contents, plain_page_contents, plain_pdf,
};

/// Write `bytes` to `dir/name` and return the path.
pub fn write_pdf(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("failed to write fixture");
    path
}
