use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::info;
use serde_json::to_string_pretty;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use script_rating::analysis::{
    ProcessResult, RatingEngine, ReportOptions, load_corrections, process,
};
use script_rating::cli::Cli;
use script_rating::config::EngineConfig;
use script_rating::detection::{CatalogSpec, PatternCatalog};
use script_rating::models::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let multi = init_logging();
    let start_time = Utc::now();

    let engine = build_engine(&cli)?;
    let corrections = match &cli.corrections {
        Some(path) => load_corrections(Path::new(path))
            .with_context(|| format!("Failed to load corrections from {}", path))?,
        None => Vec::new(),
    };
    let corrections_count = corrections.len();
    let options = ReportOptions {
        corrections,
        include_lines: cli.lines,
        include_characters: cli.characters,
        include_parents_guide: cli.parents_guide,
        context_lines: cli.context_lines,
    };

    let paths: Vec<PathBuf> = cli.files.iter().map(PathBuf::from).collect();
    let progress_bar = create_progress_bar(&multi, paths.len());
    let result = process(&paths, &engine, &options, Arc::clone(&progress_bar));
    progress_bar.finish_with_message("Rating complete!");
    info!(
        "Rated {} scripts ({} failed)",
        result.scripts.len(),
        result.failed_count
    );

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, result, &engine, corrections_count);
    write_output(cli.output.as_deref(), &output)?;

    if let Some(path) = &cli.output {
        println!("JSON output written to {}", path);
    }
    Ok(())
}

fn init_logging() -> MultiProgress {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).build();
    let multi = MultiProgress::new();
    if let Err(err) = LogWrapper::new(multi.clone(), logger).try_init() {
        eprintln!("Failed to initialize logging: {}", err);
    }
    multi
}

fn build_engine(cli: &Cli) -> Result<RatingEngine> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_yaml_path(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => EngineConfig::default(),
    };
    if let Some(context_lines) = cli.context_lines {
        config = config.with_context_lines(context_lines);
    }

    let spec = match &cli.catalog {
        Some(path) => CatalogSpec::from_yaml_path(Path::new(path))
            .with_context(|| format!("Failed to load pattern catalog from {}", path))?,
        None => CatalogSpec::builtin(),
    };
    let catalog = PatternCatalog::compile(spec).context("Failed to compile pattern catalog")?;

    RatingEngine::with_catalog(Arc::new(catalog), config).context("Invalid engine configuration")
}

fn create_progress_bar(multi: &MultiProgress, total_files: usize) -> Arc<ProgressBar> {
    let progress_bar = multi.add(ProgressBar::new(total_files as u64));
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scripts rated ({eta})")
            .expect("Failed to create progress bar style")
            .progress_chars("#>-"),
    );
    Arc::new(progress_bar)
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    result: ProcessResult,
    engine: &RatingEngine,
    corrections_count: usize,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        scripts_count: result.scripts.len(),
        failed_count: result.failed_count,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_version: engine.catalog().version().to_string(),
        corrections_count,
    };

    // Per-script errors, prefixed with the script path
    let errors: Vec<String> = result
        .scripts
        .iter()
        .flat_map(|script| {
            script
                .scan_errors
                .iter()
                .map(move |err| format!("{}: {}", script.path, err))
        })
        .collect();

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            errors,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        scripts: result.scripts,
    }
}

fn write_output(output_file: Option<&str>, output: &Output) -> Result<()> {
    let json_output = to_string_pretty(output).context("Failed to serialize output")?;
    match output_file {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("Failed to create {}", path))?;
            file.write_all(json_output.as_bytes())
                .with_context(|| format!("Failed to write {}", path))?;
        }
        None => println!("{}", json_output),
    }
    Ok(())
}
