pub mod analysis;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod report;
pub mod scoring;

pub use analysis::{ProcessResult, RatingEngine, ReportOptions, load_corrections, process};
pub use config::EngineConfig;
pub use detection::{CatalogSpec, PatternCatalog};
pub use error::{EngineError, Result};
pub use models::{
    AdjustedRating, Category, CategoryScores, Correction, ExtraData, Header, Output, Rating,
    ScriptAnalysis,
};
