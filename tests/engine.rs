//! End-to-end tests of the classification engine: matcher, subcategory
//! suggester, confidence calculator, and batch analyzer working together,
//! plus the directory-scan path used by the CLI.

use baudoc::models::{FileEntry, UNKNOWN_CATEGORY};
use baudoc::{analyze_files, classify, confidence, suggest_subcategory};

#[test]
fn floor_plan_full_pipeline() {
    let category = classify("Grundriss_EG.pdf", ".pdf", None).expect("should classify");
    assert_eq!(category.id, "planning");
    assert_eq!(category.name, "Planung & Genehmigung");

    assert_eq!(
        suggest_subcategory(category, "Grundriss_EG.pdf"),
        Some("Baupläne & Grundrisse")
    );

    // pattern (30) + keyword (15) + extension (10) + priority (10)
    assert_eq!(confidence("Grundriss_EG.pdf", ".pdf", category), 65);
}

#[test]
fn invoice_full_pipeline() {
    let category = classify("Rechnung_2024_001.pdf", ".pdf", None).expect("should classify");
    assert_eq!(category.id, "finance");

    assert_eq!(
        suggest_subcategory(category, "Rechnung_2024_001.pdf"),
        Some("Rechnungen")
    );

    let c = confidence("Rechnung_2024_001.pdf", ".pdf", category);
    assert!(c > 0 && c <= 100);
}

#[test]
fn no_match_is_a_normal_outcome() {
    assert!(classify("random_file_xyz.txt", ".txt", None).is_none());
}

#[test]
fn batch_of_two_files_matches_expected_statistics() {
    let report = analyze_files(&[
        FileEntry {
            name: "Rechnung.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
        },
        FileEntry {
            name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
        },
    ]);

    assert_eq!(report.categorized, 1);
    assert_eq!(report.uncategorized, 1);

    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[0].name, "Finanzen & Abrechnung");
    assert_eq!(report.categories[0].count, 1);

    assert_eq!(report.suggestions.len(), 2);
    assert_eq!(report.suggestions[0].file_name, "Rechnung.pdf");
    assert_eq!(report.suggestions[1].file_name, "notes.txt");
    assert_eq!(report.suggestions[1].category, UNKNOWN_CATEGORY);
}

#[test]
fn repeated_calls_are_identical() {
    let inputs = [
        ("Grundriss_EG.pdf", ".pdf"),
        ("Rechnung_2024_001.pdf", ".pdf"),
        ("Bauvertrag.docx", ".docx"),
        ("random_file_xyz.txt", ".txt"),
    ];

    for (filename, extension) in inputs {
        let first = classify(filename, extension, None).map(|c| c.id);
        for _ in 0..5 {
            assert_eq!(classify(filename, extension, None).map(|c| c.id), first);
        }
        if let Some(category) = classify(filename, extension, None) {
            let c = confidence(filename, extension, category);
            assert_eq!(confidence(filename, extension, category), c);
        }
    }
}

#[test]
fn tie_break_is_stable_across_the_batch_path() {
    // "installation" hits a pattern in both execution and technical at
    // equal priority; the earlier-declared execution category must win,
    // in direct calls and through the batch analyzer alike.
    let direct = classify("installation.bin", ".bin", None).unwrap();
    assert_eq!(direct.id, "execution");

    let report = analyze_files(&[FileEntry {
        name: "installation.bin".to_string(),
        mime_type: "application/octet-stream".to_string(),
    }]);
    assert_eq!(report.suggestions[0].category, "Ausführung & Handwerk");
}

#[test]
fn subcategory_closure_outside_curated_tables() {
    let category = classify("Datenblatt_Pumpe_X200.pdf", ".pdf", None).unwrap();
    assert_eq!(category.id, "technical");
    assert_eq!(suggest_subcategory(category, "Datenblatt_Pumpe_X200.pdf"), None);
}

#[test]
fn scan_and_analyze_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Grundriss_EG.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(dir.path().join("Rechnung_2024_001.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(dir.path().join("random_file_xyz.txt"), b"nothing to see").unwrap();

    let config = baudoc::config::Config::default();
    let entries = baudoc::scan::scan_directory(&config, dir.path()).unwrap();
    assert_eq!(entries.len(), 3);

    let report = analyze_files(&entries);
    assert_eq!(report.categorized, 2);
    assert_eq!(report.uncategorized, 1);

    // Scan order is sorted by relative path, and suggestions follow it.
    let names: Vec<&str> = report
        .suggestions
        .iter()
        .map(|s| s.file_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Grundriss_EG.pdf", "Rechnung_2024_001.pdf", "random_file_xyz.txt"]
    );
}
