use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::{EngineConfig, MAX_CONTEXT_LINES};
use crate::detection::{
    LineReport, PatternCatalog, Scene, SceneMatcher, SceneSegmenter, Scenes, analyze_lines,
};
use crate::error::{EngineError, Result};
use crate::models::{
    AdjustedRating, CategoryCounts, Correction, CorrectionSummary, CorrectionTarget, InputIssue,
    PerCategory, SceneReport, ScriptAnalysis,
};
use crate::report::{CharacterStats, ParentsGuide, analyze_characters, build_parents_guide};
use crate::scoring::{
    RatingDecision, SceneFeatures, SceneScoreVector, ScoreNormalizer, aggregate, apply_corrections,
    extract_features, map_rating,
};

const SAMPLE_TEXT_CHARS: usize = 200;
const EXCERPTS_PER_SCENE: usize = 3;
const MAX_EVIDENCE_EXCERPTS: usize = 10;

/// A scene after matching and normalization.
#[derive(Debug, Clone)]
pub struct ScoredScene {
    pub scene: Scene,
    pub features: SceneFeatures,
    pub vector: SceneScoreVector,
    pub excerpts: Vec<String>,
}

impl ScoredScene {
    fn report(&self) -> SceneReport {
        SceneReport {
            scene_id: self.scene.id,
            heading: self.scene.heading.clone(),
            line_range: self.scene.line_range,
            scores: self.vector.scores.display(),
            weight: self.vector.weight,
            counts: self.features.raw_counts,
            sample_text: sample_text(&self.scene),
            excerpts: self.excerpts.clone(),
        }
    }
}

fn sample_text(scene: &Scene) -> String {
    let body = if scene.synthetic {
        scene.text.as_str()
    } else {
        scene.text.split_once('\n').map_or("", |(_, rest)| rest)
    };
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(SAMPLE_TEXT_CHARS).collect()
}

/// The rating engine.
///
/// Holds a compiled catalog and an immutable configuration. Analysis is a
/// pure function of the input text: the engine keeps no per-call state and
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    catalog: Arc<PatternCatalog>,
    config: EngineConfig,
    segmenter: SceneSegmenter,
    normalizer: ScoreNormalizer,
    criticality: PerCategory<bool>,
}

impl RatingEngine {
    /// Engine over the built-in catalog.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_catalog(Arc::new(PatternCatalog::builtin()?), config)
    }

    pub fn with_catalog(catalog: Arc<PatternCatalog>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Rating engine ready: catalog {} ({} patterns)",
            catalog.version(),
            catalog.pattern_count()
        );
        Ok(Self {
            criticality: catalog.criticality(),
            normalizer: ScoreNormalizer::from_config(&config),
            segmenter: SceneSegmenter::new(),
            catalog,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<PatternCatalog> {
        &self.catalog
    }

    pub fn model_version(&self) -> String {
        self.config
            .model_version
            .clone()
            .unwrap_or_else(|| self.catalog.version().to_string())
    }

    pub fn matcher(&self) -> SceneMatcher<'_> {
        SceneMatcher::new(&self.catalog, self.config.excerpt_window)
    }

    pub fn segment<'a>(&self, text: &'a str) -> Scenes<'a> {
        self.segmenter.segment(text)
    }

    pub fn analyze(&self, text: &str) -> ScriptAnalysis {
        self.analyze_with_id(text, None)
    }

    pub fn analyze_with_id(&self, text: &str, script_id: Option<&str>) -> ScriptAnalysis {
        let script_id = script_id.map(str::to_string);
        let total_lines = text.lines().count();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            warn!("Empty script text, returning neutral rating");
            return ScriptAnalysis::neutral(
                script_id,
                self.model_version(),
                total_lines,
                InputIssue::Empty,
                "empty script".to_string(),
            );
        }
        if trimmed.chars().count() < self.config.min_text_chars {
            warn!(
                "Script text shorter than {} characters, returning neutral rating",
                self.config.min_text_chars
            );
            return ScriptAnalysis::neutral(
                script_id,
                self.model_version(),
                total_lines,
                InputIssue::TooShort,
                format!(
                    "text shorter than {} characters",
                    self.config.min_text_chars
                ),
            );
        }

        let scenes: Vec<Scene> = self.segment(text).collect();
        let scored: Vec<ScoredScene> = scenes
            .into_par_iter()
            .map(|scene| self.score_scene(scene))
            .collect();

        let vectors: Vec<SceneScoreVector> = scored.iter().map(|s| s.vector).collect();
        let aggregated_scores = aggregate(&vectors);
        let RatingDecision { rating, reasons } = map_rating(&aggregated_scores);

        let mut findings = CategoryCounts::default();
        let mut suppressed = CategoryCounts::default();
        for s in &scored {
            findings.add(&s.features.raw_counts);
            suppressed.add(&s.features.suppressed);
        }

        let scenes: Vec<SceneReport> = scored.iter().map(ScoredScene::report).collect();
        let top_trigger_scenes = self.top_triggers(&scenes);
        let evidence_excerpts = top_trigger_scenes
            .iter()
            .flat_map(|s| s.excerpts.iter().cloned())
            .take(MAX_EVIDENCE_EXCERPTS)
            .collect();

        debug!(
            "Analysed {} scenes: rating {}, {} findings, {} suppressed",
            scenes.len(),
            rating,
            findings.total(),
            suppressed.total()
        );

        ScriptAnalysis {
            script_id,
            model_version: self.model_version(),
            total_scenes: scenes.len(),
            total_lines,
            input_issue: None,
            findings,
            suppressed,
            display_scores: aggregated_scores.display(),
            aggregated_scores,
            predicted_rating: rating,
            reasons,
            scenes,
            top_trigger_scenes,
            evidence_excerpts,
        }
    }

    /// Match and normalize a single scene.
    pub fn score_scene(&self, scene: Scene) -> ScoredScene {
        let matcher = self.matcher();
        let (features, set) = extract_features(&scene, &matcher, self.config.dialogue_weight);
        let scores = self.normalizer.normalize_scene(&features, &self.criticality);
        let vector = SceneScoreVector::new(scene.id, scores, self.config.scene_weight_floor);

        let mut by_position: Vec<_> = set.matches.iter().collect();
        by_position.sort_by_key(|m| m.span.start);
        let mut excerpts: Vec<String> = Vec::new();
        for m in by_position {
            if excerpts.len() == EXCERPTS_PER_SCENE {
                break;
            }
            if !excerpts.contains(&m.excerpt) {
                excerpts.push(m.excerpt.clone());
            }
        }

        ScoredScene {
            scene,
            features,
            vector,
            excerpts,
        }
    }

    fn top_triggers(&self, scenes: &[SceneReport]) -> Vec<SceneReport> {
        let mut ranked: Vec<&SceneReport> =
            scenes.iter().filter(|s| s.scores.peak() > 0.0).collect();
        ranked.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.scene_id.cmp(&b.scene_id))
        });
        ranked
            .into_iter()
            .take(self.config.top_trigger_scenes)
            .cloned()
            .collect()
    }

    /// Line-level findings. `context_lines` overrides the configured value.
    pub fn analyze_lines(&self, text: &str, context_lines: Option<usize>) -> LineReport {
        let mut context = context_lines.unwrap_or(self.config.context_lines);
        if context > MAX_CONTEXT_LINES {
            warn!(
                "context_lines {} exceeds {}, clamping",
                context, MAX_CONTEXT_LINES
            );
            context = MAX_CONTEXT_LINES;
        }
        analyze_lines(&self.matcher(), text, context)
    }

    pub fn analyze_characters(&self, text: &str) -> Vec<CharacterStats> {
        analyze_characters(&self.segmenter, &self.matcher(), text)
    }

    pub fn parents_guide(&self, analysis: &ScriptAnalysis, lines: &LineReport) -> ParentsGuide {
        build_parents_guide(analysis, lines)
    }

    /// Apply reviewer corrections to an analysis.
    ///
    /// Every active correction's target must exist in the analysed script.
    /// The analysis itself is never modified.
    pub fn apply_corrections(
        &self,
        analysis: &ScriptAnalysis,
        corrections: &[Correction],
    ) -> Result<AdjustedRating> {
        for correction in corrections.iter().filter(|c| c.active) {
            check_target(analysis, &correction.target)?;
        }

        let adjustment = apply_corrections(&analysis.aggregated_scores, corrections);
        let RatingDecision { rating, reasons } = map_rating(&adjustment.adjusted);
        if rating != analysis.predicted_rating {
            info!(
                "Corrections moved rating from {} to {}",
                analysis.predicted_rating, rating
            );
        }

        Ok(AdjustedRating {
            original_rating: analysis.predicted_rating,
            adjusted_rating: rating,
            original_scores: analysis.aggregated_scores,
            adjusted_scores: adjustment.adjusted,
            reasons,
            applied: adjustment.applied,
            skipped: adjustment.skipped,
            rating_changed: rating != analysis.predicted_rating,
            summary: CorrectionSummary::from_corrections(corrections),
        })
    }
}

fn check_target(analysis: &ScriptAnalysis, target: &CorrectionTarget) -> Result<()> {
    match *target {
        CorrectionTarget::Script => Ok(()),
        CorrectionTarget::Scene { scene_id } => match analysis.scene(scene_id) {
            Some(_) => Ok(()),
            None => Err(EngineError::NotFound {
                target: format!("scene {}", scene_id),
            }),
        },
        CorrectionTarget::Lines { start, end } => {
            if start >= 1 && start <= end && end <= analysis.total_lines {
                Ok(())
            } else {
                Err(EngineError::NotFound {
                    target: format!(
                        "lines {}-{} (script has {} lines)",
                        start, end, analysis.total_lines
                    ),
                })
            }
        }
    }
}
