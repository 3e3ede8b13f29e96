//! Analysis results.

use serde::Serialize;

use crate::detection::LineRange;

use super::correction::CorrectionSummary;
use super::rating::Rating;
use super::scores::{CategoryCounts, CategoryScores};

/// Why an input produced a neutral result instead of a real analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputIssue {
    Empty,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub scene_id: usize,
    pub heading: String,
    pub line_range: LineRange,
    /// Display-clamped severities.
    pub scores: CategoryScores,
    pub weight: f64,
    pub counts: CategoryCounts,
    pub sample_text: String,
    pub excerpts: Vec<String>,
}

/// Result of rating one script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    pub model_version: String,
    pub total_scenes: usize,
    pub total_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_issue: Option<InputIssue>,
    /// Surviving matches per category over the whole script.
    pub findings: CategoryCounts,
    /// Occurrences dropped by false-positive rules.
    pub suppressed: CategoryCounts,
    /// Mapper input. `child_risk` is not clamped.
    pub aggregated_scores: CategoryScores,
    pub display_scores: CategoryScores,
    pub predicted_rating: Rating,
    pub reasons: Vec<String>,
    pub scenes: Vec<SceneReport>,
    pub top_trigger_scenes: Vec<SceneReport>,
    pub evidence_excerpts: Vec<String>,
}

impl ScriptAnalysis {
    /// All-zero `0+` result for input that cannot be rated.
    pub fn neutral(
        script_id: Option<String>,
        model_version: String,
        total_lines: usize,
        issue: InputIssue,
        reason: String,
    ) -> Self {
        Self {
            script_id,
            model_version,
            total_scenes: 0,
            total_lines,
            input_issue: Some(issue),
            findings: CategoryCounts::default(),
            suppressed: CategoryCounts::default(),
            aggregated_scores: CategoryScores::default(),
            display_scores: CategoryScores::default(),
            predicted_rating: Rating::ZeroPlus,
            reasons: vec![reason],
            scenes: Vec::new(),
            top_trigger_scenes: Vec::new(),
            evidence_excerpts: Vec::new(),
        }
    }

    pub fn scene(&self, scene_id: usize) -> Option<&SceneReport> {
        self.scenes.iter().find(|s| s.scene_id == scene_id)
    }
}

/// Rating after reviewer corrections. The original analysis is untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedRating {
    pub original_rating: Rating,
    pub adjusted_rating: Rating,
    pub original_scores: CategoryScores,
    pub adjusted_scores: CategoryScores,
    pub reasons: Vec<String>,
    pub applied: usize,
    pub skipped: usize,
    pub rating_changed: bool,
    pub summary: CorrectionSummary,
}
