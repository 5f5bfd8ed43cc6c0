use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};
use crate::config::constants::{is_text_file, DEFAULT_ARCHIVE_NAME, FIXED_ARCHIVE_PREFIX, SUMMARY_ARCHIVE_PREFIX, SUMMARY_FILE_NAME};
use crate::constants::prompts::NO_CHANGES_SUMMARY;
use crate::errors::{ForensicError, ForensicResult};
use crate::structs::archive_blob::ArchiveBlob;
use crate::structs::source_file::SourceFile;

#[derive(Debug, Serialize)]
struct FixSummary<'a> {
    status: &'a str,
    message: &'a str,
    timestamp: String,
}

pub struct ArchiveService;

impl ArchiveService {

    /// Extracts allow-listed text files from a zip held in memory.
    ///
    /// Entries that are not valid UTF-8 or cannot be read are skipped with a
    /// warning. When a name repeats, the later entry's content replaces the
    /// earlier one, keeping the earlier position.
    pub fn extract_from_bytes(bytes: &[u8]) -> ForensicResult<Vec<SourceFile>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ForensicError::archive_error("open archive", &e.to_string()))?;

        let mut files: Vec<SourceFile> = Vec::new();

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Could not read archive entry #{}: {}", index, e);
                    continue;
                }
            };

            let name = entry.name().to_string();
            if entry.is_dir() || !is_text_file(&name) {
                continue;
            }

            let mut content = String::new();
            if let Err(e) = entry.read_to_string(&mut content) {
                log::warn!("Could not read file {}: {}", name, e);
                continue;
            }

            match files.iter_mut().find(|file| file.name == name) {
                Some(existing) => {
                    log::warn!("Duplicate entry {} in archive, keeping the later content", name);
                    existing.content = content;
                }
                None => files.push(SourceFile::new(name, content)),
            }
        }

        log::info!("📦 Extracted {} text files from archive", files.len());
        Ok(files)
    }

    pub async fn extract_from_path(path: &Path) -> ForensicResult<Vec<SourceFile>> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ForensicError::file_error(&path.display().to_string(), "read archive", &e.to_string()))?;

        tokio::task::spawn_blocking(move || Self::extract_from_bytes(&bytes))
            .await
            .map_err(|e| ForensicError::archive_error("extract archive", &e.to_string()))?
    }

    /// Packs `files` into a zip named `suggested_name`. An empty file set
    /// produces a single `summary.json` and a `summary-` name instead.
    pub fn create_archive(files: &[SourceFile], suggested_name: &str) -> ForensicResult<ArchiveBlob> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let name = if files.is_empty() {
            let summary = FixSummary {
                status: "Completed",
                message: NO_CHANGES_SUMMARY,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };
            let summary_json = serde_json::to_string_pretty(&summary)
                .map_err(|e| ForensicError::archive_error("write summary", &e.to_string()))?;

            writer.start_file(SUMMARY_FILE_NAME, options)?;
            writer.write_all(summary_json.as_bytes())?;
            summary_archive_name(suggested_name)
        } else {
            for file in files {
                writer.start_file(file.name.as_str(), options)?;
                writer.write_all(file.content.as_bytes())?;
            }
            suggested_name.to_string()
        };

        let bytes = writer.finish()?.into_inner();
        Ok(ArchiveBlob { name, bytes })
    }

    /// Writes `blob` into `dir` through a temporary file that is removed on
    /// every failure path; returns the final path.
    pub async fn save_archive(blob: ArchiveBlob, dir: &Path) -> ForensicResult<PathBuf> {
        let dir = dir.to_path_buf();

        tokio::task::spawn_blocking(move || {
            std::fs::create_dir_all(&dir)
                .map_err(|e| ForensicError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;

            let target = dir.join(&blob.name);
            let mut temp_file = tempfile::NamedTempFile::new_in(&dir)
                .map_err(|e| ForensicError::file_error(&dir.display().to_string(), "create temporary file", &e.to_string()))?;

            temp_file
                .write_all(&blob.bytes)
                .and_then(|_| temp_file.flush())
                .map_err(|e| ForensicError::file_error(&target.display().to_string(), "write archive", &e.to_string()))?;

            temp_file
                .persist(&target)
                .map_err(|e| ForensicError::file_error(&target.display().to_string(), "persist archive", &e.error.to_string()))?;

            log::info!("💾 Saved {}", target.display());
            Ok(target)
        })
        .await
        .map_err(|e| ForensicError::archive_error("save archive", &e.to_string()))?
    }
}

/// `fixed-proj.zip` becomes `summary-proj.zip`.
pub fn summary_archive_name(suggested_name: &str) -> String {
    let renamed = suggested_name
        .replacen(FIXED_ARCHIVE_PREFIX, SUMMARY_ARCHIVE_PREFIX, 1)
        .replacen(".zip", "", 1);
    format!("{}.zip", renamed)
}

/// Download name for fixes of the archive called `original_name`.
pub fn fixed_archive_name(original_name: Option<&str>) -> String {
    match original_name {
        Some(name) if !name.trim().is_empty() => format!("{}{}", FIXED_ARCHIVE_PREFIX, name),
        _ => format!("{}{}", FIXED_ARCHIVE_PREFIX, DEFAULT_ARCHIVE_NAME),
    }
}
