// crates/cli/src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::output::write_output;
use crate::presentation::format_results;
use file_analyzer_engine::error::EngineError;
use file_analyzer_engine::report::Reporter;
use std::io::Write;

/// Resolve, analyze, render and emit. An empty resolution is reported and
/// ends the run without output.
///
/// # Errors
/// Fails only on unexpected serialization or console I/O errors.
pub fn execute<O: Write, E: Write>(
    config: &Config,
    reporter: &dyn Reporter,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()> {
    let result = match file_analyzer_engine::run(config, reporter) {
        Ok(result) => result,
        Err(e @ EngineError::NoMatchingFiles) => {
            reporter.report_error(&e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !result.errors.is_empty() {
        log::info!(
            "{} of {} file(s) could not be analyzed",
            result.errors.len(),
            result.errors.len() + result.results.len()
        );
    }

    let rendered = format_results(&result.results, config.format)?;
    write_output(&rendered, config.output_path.as_deref(), stdout, stderr)
}
