// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod config;
pub mod encoding;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod report;
pub mod stats;

use crate::config::{AnalysisOptions, Config};
use crate::error::Result;
use crate::report::Reporter;
use crate::stats::{ResultSet, RunResult};

/// Run the analysis pipeline: resolve the inputs, then analyze every file.
///
/// Files that fail are reported through `reporter`, recorded in
/// `RunResult::errors` and left out of the results.
///
/// # Errors
///
/// Returns [`error::EngineError::NoMatchingFiles`] when the inputs resolve to
/// nothing. Per-file failures never abort the run.
pub fn run(config: &Config, reporter: &dyn Reporter) -> Result<RunResult> {
    let files = filesystem::resolve_files(&config.resolve)?;
    log::info!("analyzing {} file(s)", files.len());
    Ok(analyze_all(&files, &config.analysis, reporter))
}

/// Analyze already-resolved files in order.
pub fn analyze_all(
    files: &[PathBuf],
    options: &AnalysisOptions,
    reporter: &dyn Reporter,
) -> RunResult {
    let mut result = RunResult {
        results: ResultSet::new(),
        errors: Vec::new(),
    };

    for path in files {
        match processor::analyze_file(path, options, reporter) {
            Ok(metrics) => result.results.insert(path.display().to_string(), metrics),
            Err(e) => {
                log::debug!("skipping {}: {e}", path.display());
                reporter.report_error(&e);
                result.errors.push((path.clone(), e));
            }
        }
    }

    result
}
