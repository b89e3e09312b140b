//! Serde tests for the types that leave the process as JSON.

#![cfg(feature = "serde")]

use pdfunlock_core::*;

#[test]
fn batch_result_roundtrips() {
    let batch: BatchResult = vec![
        FileReport::new("a.pdf", FileOutcome::Success),
        FileReport::new("b.pdf", FileOutcome::WrongPassword),
        FileReport::new("c.pdf", FileOutcome::OtherError("truncated file".into())),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&batch).expect("serialize failed");
    let restored: BatchResult = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(batch, restored, "round-trip mismatch for JSON: {json}");
}

#[test]
fn file_report_json_shape() {
    let report = FileReport::new("b.pdf", FileOutcome::WrongPassword);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["path"], "b.pdf");
    assert_eq!(value["outcome"]["status"], "wrong_password");
}

#[test]
fn outcome_status_matches_short_tag() {
    for outcome in [
        FileOutcome::Success,
        FileOutcome::WrongPassword,
        FileOutcome::OtherError("truncated file".into()),
    ] {
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], outcome.as_str());
    }
}

#[test]
fn other_error_serializes_as_error_with_message() {
    let value = serde_json::to_value(FileOutcome::OtherError("truncated file".into())).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["message"], "truncated file");

    let restored: FileOutcome =
        serde_json::from_str(r#"{"status":"error","message":"truncated file"}"#).unwrap();
    assert_eq!(restored, FileOutcome::OtherError("truncated file".into()));
}

#[test]
fn encryption_info_json_shape() {
    let info = EncryptionInfo {
        filter: Some("Standard".into()),
        version: Some(1),
        revision: Some(2),
        key_length: None,
        permissions: Some(-4),
    };
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["filter"], "Standard");
    assert_eq!(value["revision"], 2);
    assert!(value["key_length"].is_null());
}
