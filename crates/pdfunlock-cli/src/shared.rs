use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use pdfunlock::{BatchResult, DEFAULT_DISPLAY_WIDTH, FileSelection, display_name, is_pdf_path};

use crate::cli::{OutputFormat, PasswordArgs};

/// Build the ordered, deduplicated selection from command-line paths.
///
/// Paths without a `.pdf` extension are skipped with a warning on stderr.
/// Returns `Err(1)` if nothing is left.
pub fn select_files(files: &[PathBuf]) -> Result<FileSelection, i32> {
    let mut selection = FileSelection::new();
    for file in files {
        if !is_pdf_path(file) {
            eprintln!("Warning: skipping non-PDF file: {}", file.display());
            continue;
        }
        selection.add(file.clone());
    }

    if selection.is_empty() {
        eprintln!("Error: no PDF files selected!");
        return Err(1);
    }
    Ok(selection)
}

/// Resolve the batch password from `--password` or `--password-stdin`.
///
/// Returns `Err(1)` if no password was given or it is empty.
pub fn resolve_password(args: &PasswordArgs) -> Result<String, i32> {
    let password = if args.password_stdin {
        read_password(io::stdin().lock()).map_err(|e| {
            eprintln!("Error: failed to read password from stdin: {e}");
            1
        })?
    } else {
        args.password.clone().unwrap_or_default()
    };

    if password.is_empty() {
        eprintln!("Error: please enter a password!");
        return Err(1);
    }
    Ok(password)
}

/// Read the first line of `reader`, without its line terminator.
fn read_password(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Warn that originals are about to be overwritten without a backup.
pub fn warn_overwrite(count: usize, quiet: bool) {
    if !quiet {
        eprintln!(
            "Warning: {count} file(s) will be overwritten in place; no backup is kept."
        );
    }
}

const PROGRESS_WIDTH: usize = 72;

/// A progress reporter that prints "Processing file N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` files.
    pub fn new(total: usize, quiet: bool) -> Self {
        Self {
            total,
            enabled: !quiet && io::stderr().is_terminal(),
        }
    }

    /// Report progress for file `current` (1-indexed).
    pub fn report(&self, current: usize, path: &Path) {
        if self.enabled {
            eprint!(
                "\r{:width$}\rProcessing file {}/{}... {}",
                "",
                current,
                self.total,
                display_name(path, DEFAULT_DISPLAY_WIDTH),
                width = PROGRESS_WIDTH,
            );
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.enabled {
            eprint!("\r{}\r", " ".repeat(PROGRESS_WIDTH));
            let _ = io::stderr().flush();
        }
    }
}

/// JSON value for one batch: per-file entries plus summary counts.
pub fn batch_to_json(result: &BatchResult) -> serde_json::Result<serde_json::Value> {
    let mut files = Vec::with_capacity(result.len());
    for report in result {
        let mut entry = serde_json::to_value(&report.outcome)?;
        entry["path"] = serde_json::Value::String(report.path.display().to_string());
        files.push(entry);
    }

    let summary = result.summary();
    Ok(serde_json::json!({
        "files": files,
        "summary": {
            "total": summary.total,
            "succeeded": summary.succeeded,
            "wrong_password": summary.wrong_password,
            "failed": summary.failed,
        },
    }))
}

/// Print a finished batch to stdout in the requested format.
pub fn print_batch(result: &BatchResult, format: &OutputFormat) -> Result<(), i32> {
    match format {
        OutputFormat::Text => {
            for report in result {
                println!("{}", report.message());
            }
            println!("{}", result.summary());
            println!("All files processed!");
        }
        OutputFormat::Json => {
            let json = batch_to_json(result)
                .and_then(|output| serde_json::to_string_pretty(&output))
                .map_err(|e| {
                    eprintln!("Error: failed to serialize JSON: {e}");
                    1
                })?;
            println!("{json}");
        }
    }
    Ok(())
}
