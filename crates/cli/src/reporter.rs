// crates/cli/src/reporter.rs
use file_analyzer_engine::error::EngineError;
use file_analyzer_engine::report::Reporter;

/// Writes diagnostics to stderr so stdout carries only the results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_progress(&self, message: &str) {
        eprintln!("{message}");
    }

    fn report_error(&self, error: &EngineError) {
        eprintln!("Error: {error}");
    }
}
