mod analysis;
mod category;
mod correction;
mod output;
mod rating;
mod scores;

pub use analysis::{AdjustedRating, InputIssue, SceneReport, ScriptAnalysis};
pub use category::Category;
pub use correction::{
    Correction, CorrectionKind, CorrectionSummary, CorrectionTarget,
    DEFAULT_FALSE_NEGATIVE_SEVERITY, DEFAULT_FALSE_POSITIVE_SEVERITY,
};
pub use output::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, ScriptReport};
pub use rating::Rating;
pub use scores::{CategoryCounts, CategoryScores, PerCategory};
