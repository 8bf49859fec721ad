//! Core data types that flow through the classification pipeline.

use serde::Serialize;

/// Display name reported for files no category matched.
pub const UNKNOWN_CATEGORY: &str = "Unbekannt";

/// A file handed to the batch analyzer: its name plus the MIME type the
/// upload layer reported for it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub mime_type: String,
}

/// The engine's per-file output. Always a suggestion — the caller decides
/// whether to auto-apply it or put it in front of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub file_name: String,
    /// Category display name, or [`UNKNOWN_CATEGORY`] when nothing matched.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub confidence: u8,
}

/// Count of files that resolved to one category display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Aggregate result of analyzing a batch of files.
///
/// `categories` is an ordered sequence, not a map: entries appear in the
/// order their category was first encountered. `suggestions` preserves
/// the input order of the batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub categorized: usize,
    pub uncategorized: usize,
    pub categories: Vec<CategoryCount>,
    pub suggestions: Vec<Suggestion>,
}
