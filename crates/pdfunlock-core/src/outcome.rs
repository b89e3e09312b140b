//! Per-file outcomes and ordered batch results.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::UnlockError;

/// Result of attempting to remove the password from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "message", rename_all = "snake_case")
)]
pub enum FileOutcome {
    /// The file was opened and written back without encryption.
    Success,
    /// The file is encrypted and the password was rejected.
    WrongPassword,
    /// Any other failure, with a human-readable description.
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    OtherError(String),
}

impl FileOutcome {
    /// Fold a single-file error into an outcome.
    ///
    /// A rejected password is the only error callers can fix by trying again
    /// with a different password, so it is kept apart from everything else.
    pub fn from_error(err: &UnlockError) -> Self {
        if err.is_password_error() {
            FileOutcome::WrongPassword
        } else {
            FileOutcome::OtherError(err.to_string())
        }
    }

    /// Returns `true` for [`FileOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success)
    }

    /// Short machine-readable tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOutcome::Success => "success",
            FileOutcome::WrongPassword => "wrong_password",
            FileOutcome::OtherError(_) => "error",
        }
    }
}

impl<T> From<Result<T, UnlockError>> for FileOutcome {
    fn from(result: Result<T, UnlockError>) -> Self {
        match result {
            Ok(_) => FileOutcome::Success,
            Err(err) => FileOutcome::from_error(&err),
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Success => f.write_str("success"),
            FileOutcome::WrongPassword => f.write_str("incorrect password"),
            FileOutcome::OtherError(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// A path paired with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileReport {
    /// The file that was processed.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Create a report for `path`.
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    /// The message shown to the user for this file.
    pub fn message(&self) -> String {
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Success => format!("Password removed: {path}"),
            FileOutcome::WrongPassword => format!("Incorrect password for file: {path}"),
            FileOutcome::OtherError(msg) => {
                format!("An error occurred with file {path}: {msg}")
            }
        }
    }
}

/// Aggregate counts over a [`BatchResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Number of files processed.
    pub total: usize,
    /// Files that were unlocked (or already unencrypted).
    pub succeeded: usize,
    /// Files whose password was rejected.
    pub wrong_password: usize,
    /// Files that failed for any other reason.
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s): {} unlocked, {} incorrect password, {} error(s)",
            self.total, self.succeeded, self.wrong_password, self.failed
        )
    }
}

/// Ordered per-file results of one batch invocation.
///
/// Holds exactly one [`FileReport`] per input path, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchResult {
    reports: Vec<FileReport>,
}

impl BatchResult {
    /// Create an empty result with room for `capacity` reports.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Vec::with_capacity(capacity),
        }
    }

    /// Append the report for the next path.
    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Reports in input order.
    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    /// Iterate over reports in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileReport> {
        self.reports.iter()
    }

    /// Outcomes in input order.
    pub fn outcomes(&self) -> Vec<&FileOutcome> {
        self.reports.iter().map(|r| &r.outcome).collect()
    }

    /// Look up the outcome recorded for `path`.
    pub fn outcome_for(&self, path: impl AsRef<Path>) -> Option<&FileOutcome> {
        let path = path.as_ref();
        self.reports
            .iter()
            .find(|r| r.path == path)
            .map(|r| &r.outcome)
    }

    /// Number of successful files.
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Number of files whose password was rejected.
    pub fn wrong_password(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == FileOutcome::WrongPassword)
            .count()
    }

    /// Number of files that failed for other reasons.
    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::OtherError(_)))
            .count()
    }

    /// Whether every file succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_success())
    }

    /// Aggregate counts.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.len(),
            succeeded: self.succeeded(),
            wrong_password: self.wrong_password(),
            failed: self.failed(),
        }
    }

    /// Consume the result, returning the reports.
    pub fn into_reports(self) -> Vec<FileReport> {
        self.reports
    }
}

impl FromIterator<FileReport> for BatchResult {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a FileReport;
    type IntoIter = std::slice::Iter<'a, FileReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

impl IntoIterator for BatchResult {
    type Item = FileReport;
    type IntoIter = std::vec::IntoIter<FileReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}
