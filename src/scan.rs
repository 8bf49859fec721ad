//! Directory scanner feeding the batch analyzer.
//!
//! Walks a directory tree, applies include/exclude globs, and maps each
//! surviving file to a [`FileEntry`] with a MIME type derived from its
//! on-disk extension. The classification engine stays pure; this module
//! is the only place the `analyze` command touches the filesystem.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::FileEntry;

/// MIME type for extensions the table does not know.
const MIME_FALLBACK: &str = "application/octet-stream";

/// On-disk extension (lower-cased, no dot) to MIME type, covering every
/// extension the taxonomy recognizes.
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("dwg", "image/vnd.dwg"),
    ("dxf", "image/vnd.dxf"),
    ("plt", "application/octet-stream"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("csv", "text/csv"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("txt", "text/plain"),
];

/// Guess a MIME type from a file name's extension.
pub fn mime_from_file_name(file_name: &str) -> String {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return MIME_FALLBACK.to_string(),
    };
    MIME_BY_EXTENSION
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| mime.to_string())
        .unwrap_or_else(|| MIME_FALLBACK.to_string())
}

/// The dotted, lower-cased extension of a file name, for direct
/// classification of on-disk files. Empty when the name has none.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}

/// Collect all files under `root` that pass the configured globs, sorted
/// by relative path for deterministic output.
pub fn scan_directory(config: &Config, root: &Path) -> Result<Vec<FileEntry>> {
    if !root.exists() {
        bail!("Scan root does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.scan.include_globs)?;

    let mut excludes = vec!["**/.git/**".to_string()];
    excludes.extend(config.scan.exclude_globs.clone());
    let exclude_set = build_globset(&excludes)?;

    let mut matched: Vec<(String, String)> = Vec::new();

    let walker = WalkDir::new(root).follow_links(config.scan.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        matched.push((rel_str, name));
    }

    matched.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(matched
        .into_iter()
        .map(|(_, name)| FileEntry {
            mime_type: mime_from_file_name(&name),
            name,
        })
        .collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
