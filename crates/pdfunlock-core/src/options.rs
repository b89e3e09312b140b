//! Configuration for the unlock engine.

/// Options controlling how each file is unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockOptions {
    /// Maximum input PDF file size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Re-open the decrypted output before it replaces the original
    /// (default: true).
    ///
    /// The output must parse without a password and keep the page count of
    /// the source document.
    pub verify_output: bool,
    /// Run every step except replacing the file on disk (default: false).
    pub dry_run: bool,
}

impl Default for UnlockOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            verify_output: true,
            dry_run: false,
        }
    }
}

impl UnlockOptions {
    /// Options that check every file without writing anything.
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }
}
