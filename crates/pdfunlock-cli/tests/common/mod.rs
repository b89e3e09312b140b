//! Helpers for CLI tests: a `cmd()` builder for the `pdfunlock` binary plus
//! the in-memory PDFs from `pdfunlock_parse::fixtures`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub use pdfunlock_parse::fixtures::{
    encrypted_pdf, encrypted_pdf_with_raw_password, expected_contents, plain_page_contents,
    plain_pdf,
};

pub fn cmd() -> Command {
    Command::cargo_bin("pdfunlock").unwrap()
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_pdf(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("failed to write fixture");
    path
}

/// Whether the file at `path` still references an `/Encrypt` dictionary.
pub fn is_encrypted(path: &Path) -> bool {
    let bytes = std::fs::read(path).expect("failed to read output");
    bytes.windows(b"/Encrypt".len()).any(|w| w == b"/Encrypt")
}
