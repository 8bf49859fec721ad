//! Confidence scoring for an already-resolved category.
//!
//! Re-derives the match signals from scratch rather than reusing the
//! matcher's selection score: pattern hits weigh 30, keyword hits 15, a
//! recognized extension 10, and the category priority is added once,
//! unscaled. The sum is clamped to 100. Every term is non-negative, so
//! the result always lies in [0, 100].

use crate::taxonomy::Category;

/// How strongly filename and extension support `category`, as an integer
/// in [0, 100].
pub fn confidence(filename: &str, extension: &str, category: &Category) -> u8 {
    let filename = filename.to_lowercase();
    let extension = extension.to_lowercase();

    let mut score = 0u32;

    for pattern in &category.patterns {
        if pattern.is_match(&filename) {
            score += 30;
        }
    }

    for keyword in category.keywords {
        if filename.contains(keyword) {
            score += 15;
        }
    }

    if category.has_extension(&extension) {
        score += 10;
    }

    score += category.priority;

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    #[test]
    fn floor_plan_scores_exactly() {
        // One pattern hit (grundriss, 30), one keyword hit (grundriss,
        // 15), extension (10), priority (10).
        let planning = taxonomy::find("planning").unwrap();
        assert_eq!(confidence("Grundriss_EG.pdf", ".pdf", planning), 65);
    }

    #[test]
    fn no_signals_leaves_only_priority() {
        let finance = taxonomy::find("finance").unwrap();
        assert_eq!(confidence("unrelated.bin", ".bin", finance), 9);
    }

    #[test]
    fn heavy_matches_clamp_at_100() {
        // "rechnung" + "abrechnung" + "schlussrechnung" + "zahlung" pile
        // up pattern and keyword hits far beyond the cap.
        let finance = taxonomy::find("finance").unwrap();
        assert_eq!(
            confidence("Schlussrechnung_Abrechnung_Zahlung.pdf", ".pdf", finance),
            100
        );
    }

    #[test]
    fn adding_matching_signals_never_decreases_confidence() {
        let finance = taxonomy::find("finance").unwrap();
        let base = confidence("Rechnung.pdf", ".pdf", finance);
        let more = confidence("Rechnung_Zahlung.pdf", ".pdf", finance);
        assert!(more >= base);
    }

    #[test]
    fn result_is_in_range_for_arbitrary_inputs() {
        let samples = [
            ("", ""),
            ("Grundriss_EG.pdf", ".pdf"),
            ("Schlussrechnung_Abrechnung_Zahlung_Beleg_Quittung.pdf", ".pdf"),
            ("ünïcodé_ß.JPG", ".jpg"),
        ];
        for category in taxonomy::registry() {
            for (filename, extension) in samples {
                let c = confidence(filename, extension, category);
                assert!(c <= 100);
            }
        }
    }

    #[test]
    fn extension_case_is_normalized() {
        let planning = taxonomy::find("planning").unwrap();
        assert_eq!(
            confidence("Grundriss_EG.pdf", ".PDF", planning),
            confidence("Grundriss_EG.pdf", ".pdf", planning)
        );
    }
}
