//! The document taxonomy: every category the classifier can assign.
//!
//! The registry is built once at first use and never mutated afterwards, so
//! it can be shared freely across threads. Declaration order is part of the
//! contract: [`crate::classify::classify`] scans categories in this order
//! and resolves score ties in favor of the earlier entry, so reordering the
//! table changes classification results.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A single taxonomy entry.
///
/// `patterns` are case-insensitive regular expressions tested against
/// filenames and (optionally) document content; `keywords` are plain
/// substrings tested against the lower-cased filename; `file_extensions`
/// are stored with their leading dot, lower-cased. `priority` scales all
/// of a category's match signals during scoring and must be positive.
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub patterns: Vec<Regex>,
    pub file_extensions: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub priority: u32,
}

impl Category {
    /// Whether `extension` (lower-cased, with leading dot) is one of this
    /// category's recognized file extensions.
    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_extensions.iter().any(|e| *e == extension)
    }
}

/// Compile a pattern list case-insensitively. Invalid patterns are dropped
/// rather than panicking; `registry_patterns_all_compile` pins that the
/// shipped table never loses one.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| RegexBuilder::new(p).case_insensitive(true).build().ok())
        .collect()
}

static REGISTRY: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            id: "planning",
            name: "Planung & Genehmigung",
            description: "Baupläne, Grundrisse, Genehmigungen und statische Berechnungen",
            patterns: compile(&[
                "grundriss",
                "bauplan",
                "lageplan",
                "schnitt",
                "ansicht",
                "detail",
                "genehmigung",
                "baugenehmigung",
                "bauantrag",
                "statik",
                "tragwerk",
                "energieausweis",
                "vermessung",
            ]),
            file_extensions: &[".dwg", ".dxf", ".pdf", ".plt"],
            keywords: &[
                "plan",
                "grundriss",
                "schnitt",
                "ansicht",
                "detail",
                "genehmigung",
                "statik",
                "vermessung",
            ],
            priority: 10,
        },
        Category {
            id: "contracts",
            name: "Verträge & Rechtliches",
            description: "Bauverträge, Nachträge, Versicherungen und rechtliche Dokumente",
            patterns: compile(&[
                "vertrag",
                "bauvertrag",
                "nachtrag",
                "versicherung",
                "gewährleistung",
                "mängel",
                "rüge",
                "rechtlich",
                "anwalt",
                "gericht",
            ]),
            file_extensions: &[".pdf", ".doc", ".docx"],
            keywords: &[
                "vertrag",
                "nachtrag",
                "versicherung",
                "gewährleistung",
                "mängel",
                "rechtlich",
            ],
            priority: 8,
        },
        Category {
            id: "finance",
            name: "Finanzen & Abrechnung",
            description: "Rechnungen, Kostenvoranschläge und Zahlungsbelege",
            patterns: compile(&[
                "rechnung",
                "invoice",
                "kostenvoranschlag",
                "angebot",
                "kalkulation",
                "leistungsverzeichnis",
                "zahlung",
                "beleg",
                "quittung",
                "schlussrechnung",
                "abrechnung",
                "budget",
            ]),
            file_extensions: &[".pdf", ".xls", ".xlsx", ".csv"],
            keywords: &[
                "rechnung",
                "kosten",
                "angebot",
                "kalkulation",
                "zahlung",
                "beleg",
                "abrechnung",
            ],
            priority: 9,
        },
        Category {
            id: "execution",
            name: "Ausführung & Handwerk",
            description: "Lieferscheine, Materialbelege, Abnahmeprotokolle und Prüfberichte",
            patterns: compile(&[
                "lieferschein",
                "material",
                "abnahme",
                "protokoll",
                "prüfbericht",
                "zertifikat",
                "arbeitsanweisung",
                "ausführung",
                "handwerk",
                "montage",
                "installation",
            ]),
            file_extensions: &[".pdf", ".doc", ".docx", ".jpg", ".jpeg", ".png"],
            keywords: &[
                "lieferung",
                "material",
                "abnahme",
                "protokoll",
                "prüfung",
                "zertifikat",
                "ausführung",
            ],
            priority: 7,
        },
        Category {
            id: "documentation",
            name: "Dokumentation & Medien",
            description: "Fotos, Videos, Baustellenberichte und Bestandsdokumentation",
            patterns: compile(&[
                "foto",
                "photo",
                "bild",
                "video",
                "film",
                "baustelle",
                "bericht",
                "dokumentation",
                "bestand",
                "aufmaß",
                "fortschritt",
            ]),
            file_extensions: &[
                ".jpg", ".jpeg", ".png", ".gif", ".mp4", ".mov", ".avi", ".pdf",
            ],
            keywords: &[
                "foto",
                "bild",
                "video",
                "baustelle",
                "bericht",
                "dokumentation",
                "bestand",
            ],
            priority: 6,
        },
        Category {
            id: "order_confirmations",
            name: "Auftragsbestätigungen",
            description: "Auftragsbestätigungen, Bestellbestätigungen und Leistungsbestätigungen",
            patterns: compile(&[
                "auftrag",
                "bestätigung",
                "bestellung",
                "leistung",
                "order",
                "confirmation",
            ]),
            file_extensions: &[".pdf", ".doc", ".docx"],
            keywords: &["auftrag", "bestätigung", "bestellung", "leistung", "order"],
            priority: 5,
        },
        Category {
            id: "technical",
            name: "Technische Unterlagen",
            description: "Technische Zeichnungen, Spezifikationen und Datenblätter",
            patterns: compile(&[
                "technisch",
                "zeichnung",
                "spezifikation",
                "datenblatt",
                "handbuch",
                "manual",
                "anleitung",
                "installation",
                "wartung",
            ]),
            file_extensions: &[".pdf", ".dwg", ".dxf", ".doc", ".docx"],
            keywords: &[
                "technisch",
                "zeichnung",
                "spezifikation",
                "datenblatt",
                "handbuch",
                "anleitung",
            ],
            priority: 7,
        },
    ]
});

/// All categories in declaration order.
pub fn registry() -> &'static [Category] {
    &REGISTRY
}

/// Look up a category by its identifier.
pub fn find(id: &str) -> Option<&'static Category> {
    registry().iter().find(|c| c.id == id)
}
