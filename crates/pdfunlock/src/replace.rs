//! In-place replacement of a file's bytes.

use std::fs;
use std::io::Write;
use std::path::Path;

use pdfunlock_core::UnlockError;

/// Atomically replace the contents of `path` with `data`.
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over `path`. Until the rename, the original file is untouched; if
/// anything fails the temporary file is removed when it is dropped. The
/// original file's permissions are carried over.
pub(crate) fn replace_file(path: &Path, data: &[u8]) -> Result<(), UnlockError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        return Err(UnlockError::IoError(format!(
            "{} is read-only",
            path.display()
        )));
    }

    let mut tmp = tempfile::Builder::new()
        .prefix(".pdfunlock-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    // Best effort: not every filesystem supports fsync.
    let _ = tmp.as_file().sync_all();
    fs::set_permissions(tmp.path(), permissions)?;

    tmp.persist(path)
        .map_err(|e| UnlockError::IoError(e.error.to_string()))?;

    // Make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"old bytes").unwrap();

        replace_file(&path, b"new bytes").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new bytes");
    }

    #[test]
    fn leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"old").unwrap();

        replace_file(&path, b"new").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        let err = replace_file(&path, b"data").unwrap_err();

        assert!(matches!(err, UnlockError::IoError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn read_only_target_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.pdf");
        fs::write(&path, b"original").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms.clone()).unwrap();

        let err = replace_file(&path, b"changed").unwrap_err();

        assert!(err.to_string().contains("read-only"));
        assert_eq!(fs::read(&path).unwrap(), b"original");

        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
    }
}
