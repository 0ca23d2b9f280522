//! Tests for the pseudo-download.

use senipy::{FILE_NAME, MIME_TYPE, PAYLOAD, PseudoDownload};

#[test]
fn test_download_metadata() {
    let download = PseudoDownload::default();
    assert_eq!(download.file_name(), &"senipy-mark-1.txt");
    assert_eq!(download.mime_type(), &"text/plain");
    assert_eq!(
        download.payload(),
        &"SENIPY AI Assistant - Thank you for downloading!"
    );
    assert_eq!(download.file_name(), &FILE_NAME);
    assert_eq!(download.mime_type(), &MIME_TYPE);
}

#[test]
fn test_save_writes_payload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = PseudoDownload::default()
        .save_to(dir.path())
        .expect("Failed to save download");

    assert_eq!(path, dir.path().join(FILE_NAME));
    let contents = std::fs::read_to_string(&path).expect("Failed to read download");
    assert_eq!(contents, PAYLOAD);
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("downloads").join("senipy");

    let path = PseudoDownload::default()
        .save_to(&nested)
        .expect("Failed to save download");
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(FILE_NAME), "old").expect("Failed to seed file");

    let path = PseudoDownload::default()
        .save_to(dir.path())
        .expect("Failed to save download");
    let contents = std::fs::read_to_string(path).expect("Failed to read download");
    assert_eq!(contents, PAYLOAD);
}

#[test]
fn test_save_into_file_path_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").expect("Failed to seed file");

    let err = PseudoDownload::default()
        .save_to(&blocker)
        .expect_err("A file is not a directory");
    assert!(err.to_string().starts_with("Download error: Failed to create"));
}

#[test]
fn test_download_serializes() {
    let json = serde_json::to_value(PseudoDownload::default()).expect("Failed to serialize");
    assert_eq!(json["file_name"], FILE_NAME);
    assert_eq!(json["mime_type"], MIME_TYPE);
}
