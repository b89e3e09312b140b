//! The batch decryption engine.

use std::path::Path;

use pdfunlock_core::{BatchResult, FileOutcome, FileReport, UnlockError, UnlockOptions};
use pdfunlock_parse::{LopdfBackend, PdfBackend};

use crate::replace::replace_file;

/// What happened to a file that was unlocked successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlocked {
    /// Whether the file carried encryption before it was processed.
    pub was_encrypted: bool,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Whether the decrypted bytes were written back to disk
    /// (`false` for dry runs).
    pub written: bool,
}

/// Removes password protection from PDF files, one at a time.
///
/// # Example
///
/// ```ignore
/// let unlocker = Unlocker::default();
/// let result = unlocker.process(&["a.pdf", "b.pdf"], "secret");
/// for report in &result {
///     println!("{}", report.message());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unlocker {
    options: UnlockOptions,
}

impl Unlocker {
    /// Create an unlocker with the given options.
    pub fn new(options: UnlockOptions) -> Self {
        Self { options }
    }

    /// The options this unlocker runs with.
    pub fn options(&self) -> &UnlockOptions {
        &self.options
    }

    /// Remove the password from a single file and overwrite it in place.
    ///
    /// Files that are not encrypted are rewritten unchanged in content, so
    /// running this twice on the same file succeeds both times.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::InvalidPassword`] if the file is encrypted and
    /// the password is rejected. Returns another [`UnlockError`] if the file
    /// cannot be read, is not a valid PDF, exceeds
    /// [`UnlockOptions::max_input_bytes`], fails output verification, or
    /// cannot be replaced. The file on disk is unchanged in every error case.
    pub fn unlock_file(
        &self,
        path: impl AsRef<Path>,
        password: &str,
    ) -> Result<Unlocked, UnlockError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        if let Some(max_bytes) = self.options.max_input_bytes {
            if bytes.len() > max_bytes {
                return Err(UnlockError::ResourceLimitExceeded {
                    limit_name: "max_input_bytes".to_string(),
                    limit_value: max_bytes,
                    actual_value: bytes.len(),
                });
            }
        }

        let mut doc = LopdfBackend::open_with_password(&bytes, password)?;
        let was_encrypted = LopdfBackend::was_encrypted(&doc);
        let page_count = LopdfBackend::page_count(&doc);
        tracing::debug!(path = %path.display(), was_encrypted, page_count, "opened");
        check_loaded_pages(LopdfBackend::source_page_count(&doc), page_count)?;

        let output = LopdfBackend::save(&mut doc)?;
        if self.options.verify_output {
            verify_output(&output, page_count)?;
        }

        if self.options.dry_run {
            return Ok(Unlocked {
                was_encrypted,
                page_count,
                written: false,
            });
        }

        replace_file(path, &output)?;
        Ok(Unlocked {
            was_encrypted,
            page_count,
            written: true,
        })
    }

    /// Remove the password from every file in `paths`, in order.
    ///
    /// Always returns exactly one report per input path, in input order. A
    /// failure on one file is recorded in its report and never stops the
    /// rest of the batch.
    pub fn process<P: AsRef<Path>>(&self, paths: &[P], password: &str) -> BatchResult {
        self.process_with_progress(paths, password, |_, _| {})
    }

    /// Like [`process`](Self::process), calling `on_file` with the 0-based
    /// index and report of each file as soon as it is done.
    pub fn process_with_progress<P, F>(
        &self,
        paths: &[P],
        password: &str,
        mut on_file: F,
    ) -> BatchResult
    where
        P: AsRef<Path>,
        F: FnMut(usize, &FileReport),
    {
        let mut result = BatchResult::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            let report = FileReport::new(path, self.outcome_for(path, password));
            on_file(index, &report);
            result.push(report);
        }
        tracing::info!(summary = %result.summary(), "batch finished");
        result
    }

    fn outcome_for(&self, path: &Path, password: &str) -> FileOutcome {
        match self.unlock_file(path, password) {
            Ok(unlocked) => {
                tracing::info!(
                    path = %path.display(),
                    was_encrypted = unlocked.was_encrypted,
                    written = unlocked.written,
                    "password removed"
                );
                FileOutcome::Success
            }
            Err(err) => {
                let outcome = FileOutcome::from_error(&err);
                match outcome {
                    FileOutcome::WrongPassword => {
                        tracing::warn!(path = %path.display(), "incorrect password");
                    }
                    _ => tracing::error!(path = %path.display(), error = %err, "unlock failed"),
                }
                outcome
            }
        }
    }
}

/// Check that every page the source declares made it into the loaded document.
fn check_loaded_pages(declared: Option<usize>, loaded: usize) -> Result<(), UnlockError> {
    match declared {
        Some(declared) if declared != loaded => Err(UnlockError::VerificationFailed(format!(
            "source declares {declared} page(s) but {loaded} were decrypted"
        ))),
        _ => Ok(()),
    }
}

/// Check that serialized output reopens without a password and kept its pages.
fn verify_output(output: &[u8], expected_pages: usize) -> Result<(), UnlockError> {
    let reopened = LopdfBackend::open(output)
        .map_err(|e| UnlockError::VerificationFailed(UnlockError::from(e).to_string()))?;
    let actual_pages = LopdfBackend::page_count(&reopened);
    if actual_pages != expected_pages {
        return Err(UnlockError::VerificationFailed(format!(
            "page count changed from {expected_pages} to {actual_pages}"
        )));
    }
    Ok(())
}
