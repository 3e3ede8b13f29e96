//! Engine facade and batch processing.
//!
//! `RatingEngine` wires the pipeline together:
//!
//! 1. segment the script into scenes
//! 2. match every scene against the catalog (in parallel)
//! 3. normalize scene counts into severities
//! 4. aggregate scene vectors into script scores
//! 5. map script scores to a rating with reasons
//!
//! Corrections, line findings, character statistics and the parents guide
//! are separate calls on the same engine.

mod engine;
mod process;


pub use engine::{RatingEngine, ScoredScene};
pub use process::{ProcessResult, ReportOptions, load_corrections, process};
