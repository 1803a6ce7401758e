// crates/cli/src/presentation.rs
use crate::error::{AppError, Result};
use file_analyzer_engine::options::OutputFormat;
use file_analyzer_engine::stats::{FileMetrics, MetricValue, ResultSet};

const CSV_HEADER: [&str; 4] = ["filename", "lines", "words", "chars"];

/// Render the results as a single string, without a trailing newline.
///
/// # Errors
/// Only if serialization itself fails.
pub fn format_results(results: &ResultSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(results),
        OutputFormat::Csv => format_csv(results),
        OutputFormat::Text => Ok(format_text(results)),
    }
}

fn format_json(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

fn format_csv(results: &ResultSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (path, metrics) in results.iter() {
        writer.write_record(csv_row(path, metrics))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Csv(csv::Error::from(e.into_error())))?;
    let mut out = String::from_utf8_lossy(&bytes).into_owned();
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

fn csv_row(path: &str, metrics: &FileMetrics) -> [String; 4] {
    let cell = |v: Option<usize>| v.map(|n| n.to_string()).unwrap_or_default();
    [
        path.to_owned(),
        cell(metrics.lines),
        cell(metrics.words),
        cell(metrics.chars),
    ]
}

fn format_text(results: &ResultSet) -> String {
    let mut out = Vec::new();
    for (path, metrics) in results.iter() {
        out.push(format!("Results for '{path}':"));
        for (key, value) in metrics.entries() {
            match value {
                MetricValue::Scalar(n) => out.push(format!("  {}: {n}", capitalize(key))),
                MetricValue::Stats(stats) => {
                    out.push(format!("  {}:", capitalize(key)));
                    for (name, v) in stats.fields() {
                        out.push(format!("    {name}: {v:.2}"));
                    }
                }
            }
        }
    }
    out.join("\n")
}

/// First character upper-cased, the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
