use std::path::PathBuf;

use pdfunlock::{EncryptionInfo, encryption_info};

use crate::cli::OutputFormat;
use crate::shared::select_files;

fn describe(info: &EncryptionInfo) -> String {
    let mut parts = vec![info.algorithm().to_string()];
    if let Some(filter) = &info.filter {
        parts.push(format!("filter {filter}"));
    }
    if let Some(revision) = info.revision {
        parts.push(format!("R{revision}"));
    }
    if let Some(bits) = info.effective_key_length() {
        parts.push(format!("{bits}-bit key"));
    }
    if let Some(p) = info.permissions {
        parts.push(format!("P={p}"));
    }
    parts.join(", ")
}

fn info_to_json(info: &EncryptionInfo) -> serde_json::Value {
    let mut value = serde_json::to_value(info).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut value {
        map.insert(
            "algorithm".to_string(),
            serde_json::Value::String(info.algorithm().to_string()),
        );
    }
    value
}

/// Print the encryption state of each file. Unreadable files are reported
/// per file and do not change the exit code.
pub fn run(files: &[PathBuf], format: &OutputFormat) -> Result<(), i32> {
    let selection = select_files(files)?;

    let mut entries: Vec<serde_json::Value> = Vec::new();
    for path in selection.all() {
        let state = encryption_info(path);
        match format {
            OutputFormat::Text => match &state {
                Ok(None) => println!("{}: not encrypted", path.display()),
                Ok(Some(info)) => println!("{}: encrypted ({})", path.display(), describe(info)),
                Err(e) => println!("{}: error: {e}", path.display()),
            },
            OutputFormat::Json => {
                let entry = match &state {
                    Ok(None) => serde_json::json!({
                        "path": path.display().to_string(),
                        "encrypted": false,
                    }),
                    Ok(Some(info)) => serde_json::json!({
                        "path": path.display().to_string(),
                        "encrypted": true,
                        "encryption": info_to_json(info),
                    }),
                    Err(e) => serde_json::json!({
                        "path": path.display().to_string(),
                        "error": e.to_string(),
                    }),
                };
                entries.push(entry);
            }
        }
    }

    if let OutputFormat::Json = format {
        let output = serde_json::json!({ "files": entries });
        let json = serde_json::to_string_pretty(&output).map_err(|e| {
            eprintln!("Error: failed to serialize JSON: {e}");
            1
        })?;
        println!("{json}");
    }
    Ok(())
}
