use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;

use crate::analysis::RatingEngine;
use crate::error::{EngineError, Result};
use crate::models::{Correction, ScriptReport};

/// What to produce for every script besides the rating itself.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub corrections: Vec<Correction>,
    pub include_lines: bool,
    pub include_characters: bool,
    pub include_parents_guide: bool,
    pub context_lines: Option<usize>,
}

#[derive(Debug)]
pub struct ProcessResult {
    pub scripts: Vec<ScriptReport>,
    pub failed_count: usize,
}

/// Rate every script in `paths`. Output order follows input order.
pub fn process(
    paths: &[PathBuf],
    engine: &RatingEngine,
    options: &ReportOptions,
    progress_bar: Arc<ProgressBar>,
) -> ProcessResult {
    let scripts: Vec<ScriptReport> = paths
        .par_iter()
        .map(|path| {
            let report = process_script(path, engine, options);
            progress_bar.inc(1);
            report
        })
        .collect();

    let failed_count = scripts.iter().filter(|s| s.analysis.is_none()).count();
    ProcessResult {
        scripts,
        failed_count,
    }
}

fn process_script(path: &Path, engine: &RatingEngine, options: &ReportOptions) -> ScriptReport {
    let mut report = ScriptReport {
        path: path.to_string_lossy().to_string(),
        ..ScriptReport::default()
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            report.scan_errors.push(
                EngineError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
                .to_string(),
            );
            return report;
        }
    };

    let script_id = path.file_stem().and_then(|s| s.to_str());
    let analysis = engine.analyze_with_id(&text, script_id);
    debug!("{:?}: {}", path, analysis.predicted_rating);

    if !options.corrections.is_empty() {
        match engine.apply_corrections(&analysis, &options.corrections) {
            Ok(adjusted) => report.adjusted = Some(adjusted),
            Err(e) => report.scan_errors.push(e.to_string()),
        }
    }

    if options.include_lines || options.include_parents_guide {
        let lines = engine.analyze_lines(&text, options.context_lines);
        if options.include_parents_guide {
            report.parents_guide = Some(engine.parents_guide(&analysis, &lines));
        }
        if options.include_lines {
            report.lines = Some(lines);
        }
    }

    if options.include_characters {
        report.characters = Some(engine.analyze_characters(&text));
    }

    report.analysis = Some(analysis);
    report
}

/// Load a JSON list of corrections.
pub fn load_corrections(path: &Path) -> Result<Vec<Correction>> {
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EngineError::Json {
        context: format!("corrections file {:?}", path),
        source,
    })
}
