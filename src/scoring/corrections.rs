//! Correction adjuster.
//!
//! Deltas of all active corrections are summed per category first, then each
//! adjusted score is clamped once to `[0, max(1, original)]`. Summing first
//! makes the result independent of correction order.

use crate::models::{CategoryScores, Correction};

#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub adjusted: CategoryScores,
    /// Active corrections that moved a category.
    pub applied: usize,
    /// Active corrections without a category.
    pub skipped: usize,
}

pub fn apply_corrections(scores: &CategoryScores, corrections: &[Correction]) -> Adjustment {
    let mut deltas = CategoryScores::default();
    let mut applied = 0;
    let mut skipped = 0;

    for correction in corrections.iter().filter(|c| c.active) {
        match correction.category {
            Some(category) => {
                *deltas.get_mut(category) += correction.signed_delta();
                applied += 1;
            }
            None => {
                log::warn!(
                    "Skipping {:?} correction without a category: {}",
                    correction.kind,
                    correction.description.as_deref().unwrap_or("no description")
                );
                skipped += 1;
            }
        }
    }

    let adjusted = scores.map(|category, original| {
        let upper = original.max(1.0);
        (original + deltas.get(category)).clamp(0.0, upper)
    });
    Adjustment {
        adjusted,
        applied,
        skipped,
    }
}
