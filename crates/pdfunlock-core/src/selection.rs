//! The ordered, deduplicated set of files selected for a batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default width used by [`display_name`] when listing selected files.
pub const DEFAULT_DISPLAY_WIDTH: usize = 30;

/// Files selected by the user, in the order they were added.
///
/// Adding a path that is already present is a no-op, so processing order is
/// the order of first insertion.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl FileSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already selected.
    ///
    /// Returns `true` if the path was added.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.paths.push(path);
        true
    }

    /// Add `path` only if it names a PDF file (see [`is_pdf_path`]).
    ///
    /// Returns `true` if the path was added.
    pub fn add_pdf(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if !is_pdf_path(&path) {
            return false;
        }
        self.add(path)
    }

    /// Remove `path` if present. Returns `true` if it was removed.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if !self.seen.remove(path) {
            return false;
        }
        self.paths.retain(|p| p != path);
        true
    }

    /// Whether `path` is selected.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.seen.contains(path.as_ref())
    }

    /// All selected paths in insertion order.
    pub fn all(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of selected paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop every selected path.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.seen.clear();
    }
}

impl<P: Into<PathBuf>> Extend<P> for FileSelection {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for path in iter {
            self.add(path);
        }
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FileSelection {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut selection = FileSelection::new();
        selection.extend(iter);
        selection
    }
}

/// Whether `path` has a `.pdf` extension, compared case-insensitively.
pub fn is_pdf_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Shorten a path for display, keeping its last `max_len` characters.
///
/// Paths longer than `max_len` characters are rendered as `"..."` followed by
/// their tail, so the file name stays visible.
pub fn display_name(path: impl AsRef<Path>, max_len: usize) -> String {
    let full = path.as_ref().display().to_string();
    let count = full.chars().count();
    if count <= max_len {
        return full;
    }
    let tail: String = full.chars().skip(count - max_len).collect();
    format!("...{tail}")
}
