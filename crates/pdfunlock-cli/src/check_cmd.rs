use std::path::PathBuf;

use pdfunlock::{BatchResult, FileOutcome, UnlockOptions, Unlocker};

use crate::cli::{OutputFormat, PasswordArgs};
use crate::shared::{ProgressReporter, batch_to_json, resolve_password, select_files};

/// Same pipeline as `remove`, including output verification, but nothing is
/// written back.
pub fn run(
    files: &[PathBuf],
    password: &PasswordArgs,
    format: &OutputFormat,
    quiet: bool,
) -> Result<(), i32> {
    let selection = select_files(files)?;
    let password = resolve_password(password)?;

    let unlocker = Unlocker::new(UnlockOptions::dry_run());
    let progress = ProgressReporter::new(selection.len(), quiet);
    let result = unlocker.process_with_progress(selection.all(), &password, |index, report| {
        progress.report(index + 1, &report.path);
    });
    progress.finish();

    print_check(&result, format)
}

fn print_check(result: &BatchResult, format: &OutputFormat) -> Result<(), i32> {
    match format {
        OutputFormat::Text => {
            for report in result {
                match report.outcome {
                    FileOutcome::Success => {
                        println!("Password accepted: {}", report.path.display());
                    }
                    _ => println!("{}", report.message()),
                }
            }
            println!("{}", result.summary());
            println!("All files checked, nothing was modified.");
        }
        OutputFormat::Json => {
            let json = batch_to_json(result)
                .and_then(|mut output| {
                    output["dry_run"] = serde_json::Value::Bool(true);
                    serde_json::to_string_pretty(&output)
                })
                .map_err(|e| {
                    eprintln!("Error: failed to serialize JSON: {e}");
                    1
                })?;
            println!("{json}");
        }
    }
    Ok(())
}
