use crate::error::EngineError;

/// Sink for user-facing diagnostics emitted while a run is in progress.
///
/// The engine never prints; the driver decides where messages go.
pub trait Reporter {
    /// Verbose progress note, e.g. which file is being analyzed.
    fn report_progress(&self, message: &str);
    /// A failure that is not fatal to the run.
    fn report_error(&self, error: &EngineError);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report_progress(&self, _message: &str) {}
    fn report_error(&self, _error: &EngineError) {}
}
