//! Reviewer-facing reports built on top of an analysis.

mod characters;
mod parents_guide;

pub use characters::{CharacterStats, analyze_characters, top_offenders};
pub use parents_guide::{Gradation, GuideEntry, ParentsGuide, build_parents_guide};
