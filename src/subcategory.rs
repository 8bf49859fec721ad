//! Subcategory refinement for a subset of resolved categories.
//!
//! Only planning, contracts, and finance carry curated subcategory
//! tables; every other category is never refined. Entries are scanned in
//! declaration order and the first one with any keyword substring hit in
//! the lower-cased filename wins — declaration order decides, not
//! specificity. A filename containing "schlussrechnung" therefore
//! resolves to "Rechnungen" (its "rechnung" keyword is declared first)
//! and never reaches the "Schlussrechnungen" entry. That is the shipped
//! behavior and is pinned by a regression test.

use crate::taxonomy::Category;

type SubcategoryEntry = (&'static str, &'static [&'static str]);

/// Per-category subcategory tables, in declaration order.
static SUBCATEGORY_TABLES: &[(&str, &[SubcategoryEntry])] = &[
    (
        "planning",
        &[
            ("Baupläne & Grundrisse", &["grundriss", "plan", "lageplan"]),
            ("Baugenehmigungen", &["genehmigung", "bauantrag", "behörde"]),
            ("Statische Berechnungen", &["statik", "tragwerk", "berechnung"]),
            ("Energieausweise", &["energie", "ausweis", "effizienz"]),
            ("Vermessungsunterlagen", &["vermessung", "aufmaß", "kataster"]),
        ],
    ),
    (
        "contracts",
        &[
            ("Bauverträge", &["bauvertrag", "hauptvertrag", "werkvertrag"]),
            ("Nachträge", &["nachtrag", "änderung", "zusatz"]),
            ("Versicherungen", &["versicherung", "police", "haftung"]),
            ("Gewährleistungen", &["gewährleistung", "garantie", "mängel"]),
            ("Mängelrügen", &["mängel", "rüge", "beanstandung"]),
        ],
    ),
    (
        "finance",
        &[
            ("Rechnungen", &["rechnung", "invoice", "faktura"]),
            (
                "Kostenvoranschläge",
                &["kostenvoranschlag", "angebot", "kalkulation"],
            ),
            (
                "Leistungsverzeichnisse",
                &["leistungsverzeichnis", "lv", "ausschreibung"],
            ),
            (
                "Zahlungsbelege",
                &["zahlung", "beleg", "quittung", "überweisung"],
            ),
            ("Änderungsaufträge", &["änderung", "nachtrag", "zusatz"]),
            (
                "Schlussrechnungen",
                &["schlussrechnung", "endabrechnung", "final"],
            ),
        ],
    ),
];

/// Suggest a finer-grained label under an already-resolved category.
///
/// Returns `None` for categories without a curated table, and for
/// filenames that hit none of the table's keywords.
pub fn suggest_subcategory(category: &Category, filename: &str) -> Option<&'static str> {
    let (_, entries) = SUBCATEGORY_TABLES
        .iter()
        .find(|(id, _)| *id == category.id)?;

    let filename = filename.to_lowercase();
    for (label, keywords) in entries.iter() {
        if keywords.iter().any(|k| filename.contains(k)) {
            return Some(*label);
        }
    }
    None
}
