use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};
use code_forensics::services::archive_service::ArchiveService;
use code_forensics::structs::source_file::SourceFile;

fn zip_of(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, bytes) in entries {
        if name.ends_with('/') {
            writer.add_directory(name.trim_end_matches('/'), options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(bytes).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

fn entries_of(bytes: &[u8]) -> Vec<(String, String)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            (entry.name().to_string(), content)
        })
        .collect()
}

#[test]
fn extraction_keeps_allow_listed_text_files_in_order() {
    let bytes = zip_of(&[
        ("src/", b""),
        ("src/Main.JS", b"console.log(1)"),
        ("logo.png", &[0x89, 0x50, 0x4e, 0x47]),
        ("notes.txt", b"todo"),
        ("build.lock", b"ignored"),
    ]);

    let files = ArchiveService::extract_from_bytes(&bytes).unwrap();

    assert_eq!(
        files,
        vec![SourceFile::new("src/Main.JS", "console.log(1)"), SourceFile::new("notes.txt", "todo")]
    );
}

#[test]
fn invalid_utf8_entries_are_skipped() {
    let bytes = zip_of(&[("bad.txt", &[0xff, 0xfe, 0xfd]), ("good.md", b"# ok")]);

    let files = ArchiveService::extract_from_bytes(&bytes).unwrap();
    assert_eq!(files, vec![SourceFile::new("good.md", "# ok")]);
}

#[test]
fn created_archive_round_trips_changed_files() {
    let files = vec![SourceFile::new("src/app.js", "fixed"), SourceFile::new("README.md", "# Demo")];

    let blob = ArchiveService::create_archive(&files, "fixed-proj.zip").unwrap();

    assert_eq!(blob.name, "fixed-proj.zip");
    assert_eq!(
        entries_of(&blob.bytes),
        vec![
            ("src/app.js".to_string(), "fixed".to_string()),
            ("README.md".to_string(), "# Demo".to_string()),
        ]
    );
}

#[test]
fn empty_change_set_produces_summary_archive() {
    let blob = ArchiveService::create_archive(&[], "fixed-proj.zip").unwrap();

    assert_eq!(blob.name, "summary-proj.zip");
    let entries = entries_of(&blob.bytes);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "summary.json");

    let summary: serde_json::Value = serde_json::from_str(&entries[0].1).unwrap();
    assert_eq!(summary["status"], "Completed");
    assert!(summary["message"].as_str().unwrap().contains("No code modifications were required"));
    assert!(summary["timestamp"].is_string());
}

#[tokio::test]
async fn save_and_reload_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![SourceFile::new("main.py", "print('hi')\n")];

    let blob = ArchiveService::create_archive(&files, "fixed-app.zip").unwrap();
    let saved = ArchiveService::save_archive(blob, &dir.path().join("out")).await.unwrap();

    assert_eq!(saved, dir.path().join("out").join("fixed-app.zip"));
    let reloaded = ArchiveService::extract_from_path(&saved).await.unwrap();
    assert_eq!(reloaded, files);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("out")).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[tokio::test]
async fn missing_archive_is_a_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = ArchiveService::extract_from_path(&dir.path().join("absent.zip")).await.unwrap_err();
    assert!(matches!(error, code_forensics::errors::ForensicError::FileOperation { .. }));
}
