// crates/cli/src/output.rs
use crate::error::{AppError, Result};
use std::io::Write;
use std::path::Path;

/// Send the rendered results to `path`, or to `stdout` when there is none.
///
/// A failed file write is reported on `stderr` and the results are printed
/// to `stdout` instead; it is not an error.
///
/// # Errors
/// Only if writing to `stdout` or `stderr` fails.
pub fn write_output<O: Write, E: Write>(
    text: &str,
    path: Option<&Path>,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()> {
    let Some(path) = path else {
        writeln!(stdout, "{text}")?;
        return Ok(());
    };

    match save(path, text) {
        Ok(()) => {
            log::info!("wrote {} bytes to {}", text.len(), path.display());
            writeln!(stdout, "Results saved to '{}'", path.display())?;
        }
        Err(e) => {
            writeln!(stderr, "Error saving results: {e}")?;
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

fn save(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })
}
