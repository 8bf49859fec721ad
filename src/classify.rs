//! Category matcher: scores every registry entry against a candidate
//! document and picks the best.
//!
//! Scoring per category (all scaled by the category's priority):
//! pattern hit in the filename ×3, keyword substring in the filename ×2,
//! recognized extension ×1, pattern hit in the content ×2. The best score
//! is tracked with a strict greater-than while scanning in registry
//! declaration order, so the first category to reach the maximum wins any
//! tie. A total score of zero means no category applies.

use crate::taxonomy::{self, Category};

/// Classify a document by filename, extension, and optional content.
///
/// All inputs are legal, including empty strings; weak inputs simply
/// produce weak or no matches. Returns `None` when no category scores
/// above zero — an expected outcome, not an error.
pub fn classify(
    filename: &str,
    extension: &str,
    content: Option<&str>,
) -> Option<&'static Category> {
    let filename = filename.to_lowercase();
    let extension = extension.to_lowercase();
    let content = content.map(str::to_lowercase);

    let mut best: Option<(&'static Category, u32)> = None;

    for category in taxonomy::registry() {
        let score = score_category(category, &filename, &extension, content.as_deref());

        let improves = match best {
            None => score > 0,
            Some((_, top)) => score > top,
        };
        if improves {
            best = Some((category, score));
        }
    }

    best.map(|(category, _)| category)
}

/// Accumulate one category's weighted score. Inputs must already be
/// lower-cased.
fn score_category(
    category: &Category,
    filename: &str,
    extension: &str,
    content: Option<&str>,
) -> u32 {
    let mut score = 0u32;

    for pattern in &category.patterns {
        if pattern.is_match(filename) {
            score += 3 * category.priority;
        }
    }

    for keyword in category.keywords {
        if filename.contains(keyword) {
            score += 2 * category.priority;
        }
    }

    if category.has_extension(extension) {
        score += category.priority;
    }

    if let Some(content) = content {
        for pattern in &category.patterns {
            if pattern.is_match(content) {
                score += 2 * category.priority;
            }
        }
    }

    score
}
