//! Count to severity normalization.
//!
//! Severity grows in steps rather than linearly, so a single hit never
//! saturates a category. Critical categories climb faster; non-critical ones
//! are diluted in long scenes.

use crate::config::EngineConfig;
use crate::models::{Category, CategoryScores, PerCategory};

use super::features::SceneFeatures;

/// Scenes longer than this many words use the diluted base rate.
pub const LONG_SCENE_WORDS: usize = 100;

/// Severity for a (possibly weighted) match count.
pub fn threshold_severity(count: f64, scene_length_words: usize, critical: bool) -> f64 {
    if count < 0.01 {
        return 0.0;
    }
    if critical {
        if count < 1.0 {
            count * 0.3
        } else if count < 2.0 {
            0.3 + (count - 1.0) * 0.3
        } else {
            (0.6 + (count - 2.0) * 0.15).min(1.0)
        }
    } else {
        let base = if scene_length_words > LONG_SCENE_WORDS {
            0.15
        } else {
            0.25
        };
        if count < 1.0 {
            count * base
        } else if count < 2.0 {
            0.15 + (count - 1.0) * 0.20
        } else if count < 4.0 {
            0.35 + (count - 2.0) * 0.10
        } else {
            (0.55 + (count - 4.0) * 0.10).min(1.0)
        }
    }
}

/// Apply [`threshold_severity`] to every category.
pub fn normalize(
    counts: &CategoryScores,
    scene_length_words: usize,
    criticality: &PerCategory<bool>,
) -> CategoryScores {
    counts.map(|category, count| {
        threshold_severity(*count, scene_length_words, *criticality.get(category))
    })
}

/// Context-sensitive scene normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNormalizer {
    pub heroic_damping: f64,
    pub intensity_boost: f64,
    pub child_peril_amplifier: f64,
}

impl ScoreNormalizer {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            heroic_damping: config.heroic_damping,
            intensity_boost: config.intensity_boost,
            child_peril_amplifier: config.child_peril_amplifier,
        }
    }

    /// Severity vector of one scene.
    ///
    /// `child_risk` may exceed 1 here: with children present, the
    /// endangerment score is amplified by the scene's peril.
    pub fn normalize_scene(
        &self,
        features: &SceneFeatures,
        criticality: &PerCategory<bool>,
    ) -> CategoryScores {
        let mut counts = features.weighted_counts;
        if features.intensity_signals > 0 {
            for category in [Category::Violence, Category::Gore, Category::SexAct] {
                *counts.get_mut(category) *= self.intensity_boost;
            }
        }
        let mut scores = normalize(&counts, features.word_count, criticality);

        if features.heroic_signals > 0 {
            let damped = threshold_severity(
                counts.violence * self.heroic_damping,
                features.word_count,
                criticality.violence,
            );
            // The step curve dips at count 1, so never let damping raise the score.
            scores.violence = damped.min(scores.violence);
        }

        if features.child_mentions > 0 {
            let peril = scores.violence.max(scores.sex_act);
            let amplified = scores.child_risk * (1.0 + self.child_peril_amplifier * peril);
            scores.child_risk = amplified.max(0.5 * peril);
        }
        scores
    }
}
