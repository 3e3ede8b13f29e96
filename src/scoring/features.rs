//! Scene feature extraction.

use serde::Serialize;

use crate::detection::{LineKind, MatchSet, Scene, SceneMatcher, classify_lines};
use crate::models::{CategoryCounts, CategoryScores};

/// Everything the normalizer needs to know about one scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFeatures {
    pub scene_id: usize,
    pub word_count: usize,
    /// Surviving matches per category, unweighted.
    pub raw_counts: CategoryCounts,
    /// Counts with spoken depiction matches discounted.
    pub weighted_counts: CategoryScores,
    pub suppressed: CategoryCounts,
    pub child_mentions: usize,
    pub heroic_signals: usize,
    pub intensity_signals: usize,
}

/// Extract features and keep the matches for evidence.
pub fn extract_features(
    scene: &Scene,
    matcher: &SceneMatcher<'_>,
    dialogue_weight: f64,
) -> (SceneFeatures, MatchSet) {
    let set = matcher.scan(&scene.text);
    let kinds = classify_lines(scene.text.lines());

    let mut weighted_counts = CategoryScores::default();
    for m in &set.matches {
        let kind = kinds
            .get(m.line_number.saturating_sub(1))
            .copied()
            .unwrap_or(LineKind::Action);
        let weight = if m.category.is_depiction() && kind.is_spoken() {
            dialogue_weight
        } else {
            1.0
        };
        *weighted_counts.get_mut(m.category) += weight;
    }

    let signals = matcher.catalog().context();
    let features = SceneFeatures {
        scene_id: scene.id,
        word_count: scene.word_count(),
        raw_counts: set.counts(),
        weighted_counts,
        suppressed: set.suppressed,
        child_mentions: signals.count_child_mentions(&scene.text),
        heroic_signals: signals.count_heroic(&scene.text),
        intensity_signals: signals.count_intensifiers(&scene.text),
    };
    (features, set)
}
