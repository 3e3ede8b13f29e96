//! Scene-weighted aggregation into script scores.

use serde::Serialize;

use crate::models::{Category, CategoryScores};

/// Normalized scores of one scene and its influence on the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneScoreVector {
    pub scene_id: usize,
    pub scores: CategoryScores,
    pub weight: f64,
}

impl SceneScoreVector {
    /// Weight is `weight_floor` plus the scene's peak display severity, so
    /// intense scenes dominate quiet ones without silencing them.
    pub fn new(scene_id: usize, scores: CategoryScores, weight_floor: f64) -> Self {
        Self {
            scene_id,
            weight: weight_floor + scores.peak(),
            scores,
        }
    }
}

/// Weighted average per category. No scenes, or zero total weight, yields
/// all zeros.
pub fn aggregate(vectors: &[SceneScoreVector]) -> CategoryScores {
    let total_weight: f64 = vectors.iter().map(|v| v.weight).sum();
    if total_weight <= 0.0 {
        return CategoryScores::default();
    }
    CategoryScores::from_fn(|category: Category| {
        vectors
            .iter()
            .map(|v| v.scores.get(category) * v.weight)
            .sum::<f64>()
            / total_weight
    })
}
