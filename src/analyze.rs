//! Batch analysis: run the full classification pipeline over a sequence
//! of files and tally the outcomes.
//!
//! A stateless pipeline over immutable configuration data — no cross-file
//! learning, no I/O. Output order is a contract: suggestions preserve the
//! input order and per-category tallies appear in first-encounter order.

use crate::classify::classify;
use crate::confidence::confidence;
use crate::models::{BatchReport, CategoryCount, FileEntry, Suggestion, UNKNOWN_CATEGORY};
use crate::subcategory::suggest_subcategory;

/// Derive a best-effort extension from a MIME type: a dot followed by
/// everything after the last `/`. `application/pdf` becomes `.pdf`;
/// subtypes that are not extensions (`text/plain` → `.plain`) simply
/// miss the extension signal downstream.
pub fn extension_from_mime(mime_type: &str) -> String {
    let subtype = mime_type.rsplit('/').next().unwrap_or(mime_type);
    format!(".{}", subtype)
}

/// Classify every file in `files` and aggregate the results.
///
/// Files without a match are counted as uncategorized and reported under
/// [`UNKNOWN_CATEGORY`] with confidence 0. Never fails: any input list,
/// including an empty one, produces a report.
pub fn analyze_files(files: &[FileEntry]) -> BatchReport {
    let mut report = BatchReport::default();

    for file in files {
        let extension = extension_from_mime(&file.mime_type);

        match classify(&file.name, &extension, None) {
            Some(category) => {
                report.categorized += 1;
                tally(&mut report, category.name);

                let subcategory = suggest_subcategory(category, &file.name);
                report.suggestions.push(Suggestion {
                    file_name: file.name.clone(),
                    category: category.name.to_string(),
                    subcategory: subcategory.map(str::to_string),
                    confidence: confidence(&file.name, &extension, category),
                });
            }
            None => {
                report.uncategorized += 1;
                report.suggestions.push(Suggestion {
                    file_name: file.name.clone(),
                    category: UNKNOWN_CATEGORY.to_string(),
                    subcategory: None,
                    confidence: 0,
                });
            }
        }
    }

    report
}

/// Increment the count for `name`, appending it on first encounter so the
/// tally keeps first-encounter order.
fn tally(report: &mut BatchReport, name: &str) {
    match report.categories.iter_mut().find(|c| c.name == name) {
        Some(entry) => entry.count += 1,
        None => report.categories.push(CategoryCount {
            name: name.to_string(),
            count: 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, mime: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn extension_from_mime_takes_subtype() {
        assert_eq!(extension_from_mime("application/pdf"), ".pdf");
        assert_eq!(extension_from_mime("image/jpeg"), ".jpeg");
        assert_eq!(extension_from_mime("text/plain"), ".plain");
        assert_eq!(extension_from_mime("pdf"), ".pdf");
    }

    #[test]
    fn mixed_batch_tallies_both_outcomes() {
        let report = analyze_files(&[
            entry("Rechnung.pdf", "application/pdf"),
            entry("notes.txt", "text/plain"),
        ]);

        assert_eq!(report.categorized, 1);
        assert_eq!(report.uncategorized, 1);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].name, "Finanzen & Abrechnung");
        assert_eq!(report.categories[0].count, 1);

        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0].file_name, "Rechnung.pdf");
        assert_eq!(report.suggestions[0].category, "Finanzen & Abrechnung");
        assert_eq!(
            report.suggestions[0].subcategory.as_deref(),
            Some("Rechnungen")
        );
        assert!(report.suggestions[0].confidence > 0);

        assert_eq!(report.suggestions[1].file_name, "notes.txt");
        assert_eq!(report.suggestions[1].category, UNKNOWN_CATEGORY);
        assert_eq!(report.suggestions[1].subcategory, None);
        assert_eq!(report.suggestions[1].confidence, 0);
    }

    #[test]
    fn suggestions_preserve_input_order() {
        let report = analyze_files(&[
            entry("zzz_unknown.bin", "application/octet-stream"),
            entry("Grundriss_EG.pdf", "application/pdf"),
            entry("aaa_unknown.bin", "application/octet-stream"),
        ]);

        let names: Vec<&str> = report
            .suggestions
            .iter()
            .map(|s| s.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["zzz_unknown.bin", "Grundriss_EG.pdf", "aaa_unknown.bin"]);
    }

    #[test]
    fn category_tally_keeps_first_encounter_order() {
        let report = analyze_files(&[
            entry("Rechnung_1.pdf", "application/pdf"),
            entry("Grundriss_EG.pdf", "application/pdf"),
            entry("Rechnung_2.pdf", "application/pdf"),
        ]);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].name, "Finanzen & Abrechnung");
        assert_eq!(report.categories[0].count, 2);
        assert_eq!(report.categories[1].name, "Planung & Genehmigung");
        assert_eq!(report.categories[1].count, 1);
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let report = analyze_files(&[]);
        assert_eq!(report.categorized, 0);
        assert_eq!(report.uncategorized, 0);
        assert!(report.categories.is_empty());
        assert!(report.suggestions.is_empty());
    }
}
