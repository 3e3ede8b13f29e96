use serde::Serialize;

use crate::detection::LineReport;
use crate::report::{CharacterStats, ParentsGuide};

use super::analysis::{AdjustedRating, ScriptAnalysis};

pub const OUTPUT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub scripts: Vec<ScriptReport>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub extra_data: ExtraData,
    pub errors: Vec<String>,
    pub output_format_version: String,
}

#[derive(Serialize, Debug)]
pub struct ExtraData {
    pub scripts_count: usize,
    pub failed_count: usize,
    pub engine_version: String,
    pub catalog_version: String,
    pub corrections_count: usize,
}

/// Everything produced for one input file.
#[derive(Serialize, Debug, Default)]
pub struct ScriptReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ScriptAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<AdjustedRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<LineReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<CharacterStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents_guide: Option<ParentsGuide>,
    pub scan_errors: Vec<String>,
}
