//! Reviewer corrections to detection results.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Default severity removed by a false-positive correction.
pub const DEFAULT_FALSE_POSITIVE_SEVERITY: f64 = 0.1;

/// Default severity added by a false-negative correction.
pub const DEFAULT_FALSE_NEGATIVE_SEVERITY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    /// Flagged content that is not actually problematic.
    FalsePositive,
    /// Problematic content the detector missed.
    FalseNegative,
}

/// What part of the script a correction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CorrectionTarget {
    #[default]
    Script,
    Scene {
        scene_id: usize,
    },
    /// 1-based inclusive line range.
    Lines {
        start: usize,
        end: usize,
    },
}

/// A human reviewer's correction.
///
/// Corrections never touch the original analysis; they only feed the adjusted
/// score view produced by the correction adjuster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    #[serde(rename = "type")]
    pub kind: CorrectionKind,
    #[serde(default)]
    pub category: Option<Category>,
    /// Severity magnitude. Falls back to the per-kind default when absent.
    #[serde(default)]
    pub severity: Option<f64>,
    #[serde(default)]
    pub target: CorrectionTarget,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Correction {
    pub fn false_positive(category: Category) -> Self {
        Self {
            kind: CorrectionKind::FalsePositive,
            category: Some(category),
            severity: None,
            target: CorrectionTarget::Script,
            description: None,
            active: true,
        }
    }

    pub fn false_negative(category: Category) -> Self {
        Self {
            kind: CorrectionKind::FalseNegative,
            ..Self::false_positive(category)
        }
    }

    pub fn with_severity(mut self, severity: f64) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_target(mut self, target: CorrectionTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Signed change this correction applies to its category score.
    pub fn signed_delta(&self) -> f64 {
        match self.kind {
            CorrectionKind::FalsePositive => {
                -self.severity.unwrap_or(DEFAULT_FALSE_POSITIVE_SEVERITY).abs()
            }
            CorrectionKind::FalseNegative => {
                self.severity.unwrap_or(DEFAULT_FALSE_NEGATIVE_SEVERITY).abs()
            }
        }
    }
}

/// Counts of active corrections by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionSummary {
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl CorrectionSummary {
    pub fn from_corrections(corrections: &[Correction]) -> Self {
        corrections
            .iter()
            .filter(|c| c.active)
            .fold(Self::default(), |mut acc, c| {
                match c.kind {
                    CorrectionKind::FalsePositive => acc.false_positives += 1,
                    CorrectionKind::FalseNegative => acc.false_negatives += 1,
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deltas() {
        assert_eq!(Correction::false_positive(Category::Gore).signed_delta(), -0.1);
        assert_eq!(Correction::false_negative(Category::Gore).signed_delta(), 0.2);
        assert_eq!(
            Correction::false_positive(Category::Gore)
                .with_severity(0.3)
                .signed_delta(),
            -0.3
        );
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{"type": "false_negative", "category": "drugs", "severity": 0.4}"#;
        let correction: Correction = serde_json::from_str(json).unwrap();
        assert_eq!(correction.kind, CorrectionKind::FalseNegative);
        assert_eq!(correction.category, Some(Category::Drugs));
        assert_eq!(correction.target, CorrectionTarget::Script);
        assert!(correction.active);
    }

    #[test]
    fn test_deserialize_scene_target() {
        let json = r#"{"type": "false_positive", "category": "gore",
                       "target": {"type": "scene", "scene_id": 3}, "active": false}"#;
        let correction: Correction = serde_json::from_str(json).unwrap();
        assert_eq!(correction.target, CorrectionTarget::Scene { scene_id: 3 });
        assert!(!correction.active);
    }

    #[test]
    fn test_summary_ignores_inactive() {
        let mut inactive = Correction::false_negative(Category::Nudity);
        inactive.active = false;
        let corrections = vec![
            Correction::false_positive(Category::Gore),
            Correction::false_positive(Category::Violence),
            Correction::false_negative(Category::Drugs),
            inactive,
        ];
        let summary = CorrectionSummary::from_corrections(&corrections);
        assert_eq!(summary.false_positives, 2);
        assert_eq!(summary.false_negatives, 1);
    }
}
