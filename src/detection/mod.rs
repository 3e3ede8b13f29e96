//! Content detection.
//!
//! Turns raw script text into category matches:
//! 1. Scene segmentation on heading lines
//! 2. Screenplay line classification (action vs. dialogue)
//! 3. Pattern matching against the compiled catalog
//! 4. False-positive suppression on a character window around each match
//! 5. Optional line-level findings with surrounding context

mod catalog;
mod lines;
mod matcher;
mod patterns;
mod screenplay;
mod segmenter;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod matcher_test;

pub use catalog::{
    CatalogSpec, CategorySpec, CompiledPattern, ContextSignals, ContextSpec,
    DEFAULT_EXCERPT_WINDOW, Occurrence, PatternCatalog,
};
pub use lines::{
    ContextLine, LineFinding, LineReport, LineStatistics, analyze_lines, line_severity,
    rating_impact,
};
pub use matcher::{LineIndex, Match, MatchSet, SceneMatcher, excerpt_around};
pub use patterns::BUILTIN_CATALOG_VERSION;
pub use screenplay::{LineKind, classify_lines, cue_name, inline_dialogue};
pub use segmenter::{LineRange, Scene, SceneSegmenter, Scenes, is_scene_heading};
