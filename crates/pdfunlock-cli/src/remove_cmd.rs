use std::path::PathBuf;

use pdfunlock::{BatchEvent, UnlockOptions, Unlocker, spawn_batch};

use crate::cli::{OutputFormat, PasswordArgs};
use crate::shared::{ProgressReporter, print_batch, resolve_password, select_files, warn_overwrite};

pub fn run(
    files: &[PathBuf],
    password: &PasswordArgs,
    format: &OutputFormat,
    no_verify: bool,
    max_input_bytes: Option<usize>,
    quiet: bool,
) -> Result<(), i32> {
    let selection = select_files(files)?;
    let password = resolve_password(password)?;

    let options = UnlockOptions {
        max_input_bytes,
        verify_output: !no_verify,
        ..UnlockOptions::default()
    };

    warn_overwrite(selection.len(), quiet);
    let progress = ProgressReporter::new(selection.len(), quiet);

    let handle = spawn_batch(Unlocker::new(options), selection.all().to_vec(), password);
    for event in handle.events() {
        if let BatchEvent::FileDone { index, report } = event {
            progress.report(index + 1, &report.path);
        }
    }
    let result = handle.wait();
    progress.finish();

    print_batch(&result, format)
}
