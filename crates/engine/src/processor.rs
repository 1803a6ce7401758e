use crate::config::AnalysisOptions;
use crate::encoding::{translate_newlines, Encoding};
use crate::error::{EngineError, Result};
use crate::options::ModeSet;
use crate::report::Reporter;
use crate::stats::{FileMetrics, StatsBlock};
use std::path::Path;

/// Read and analyze a single file.
///
/// # Errors
/// [`EngineError::FileNotFound`] if `path` is not a regular file,
/// [`EngineError::UnknownEncoding`] if the configured encoding is not
/// supported, [`EngineError::FileRead`] or [`EngineError::Decode`] if its
/// content cannot be read as text in that encoding.
pub fn analyze_file(
    path: &Path,
    options: &AnalysisOptions,
    reporter: &dyn Reporter,
) -> Result<FileMetrics> {
    if !path.is_file() {
        return Err(EngineError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = read_text(path, options)?;

    if options.verbose {
        reporter.report_progress(&format!(
            "Analyzing '{}' in {} mode(s)...",
            path.display(),
            options.modes.describe()
        ));
    }

    Ok(compute_metrics(&content, &options.modes))
}

fn read_text(path: &Path, options: &AnalysisOptions) -> Result<String> {
    let encoding = resolve_encoding(path, &options.encoding)?;
    let bytes = std::fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = encoding
        .decode(&bytes)
        .map_err(|detail| EngineError::Decode {
            path: path.to_path_buf(),
            encoding,
            detail,
        })?;
    Ok(translate_newlines(&text))
}

fn resolve_encoding(path: &Path, name: &str) -> Result<Encoding> {
    if name.trim().is_empty() {
        return Ok(Encoding::default());
    }
    name.parse().map_err(|_| EngineError::UnknownEncoding {
        path: path.to_path_buf(),
        name: name.to_owned(),
    })
}

/// Compute the requested metrics over already-decoded text.
pub fn compute_metrics(content: &str, modes: &ModeSet) -> FileMetrics {
    let bytes = content.as_bytes();
    FileMetrics {
        // The final line is counted even when the content ends with '\n'.
        lines: modes.lines.then(|| bytecount::count(bytes, b'\n') + 1),
        words: modes.words.then(|| split_words(content).count()),
        chars: modes.chars.then(|| bytecount::num_chars(bytes)),
        stats: modes.stats.then(|| compute_stats(content)),
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_stats(content: &str) -> StatsBlock {
    let lines = split_lines(content);
    let words: Vec<&str> = split_words(content).collect();

    let line_chars: usize = lines.iter().map(|l| l.chars().count()).sum();
    let word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    StatsBlock {
        avg_line_length: line_chars as f64 / lines.len().max(1) as f64,
        avg_words_length: word_chars as f64 / words.len().max(1) as f64,
        empty_lines: lines
            .iter()
            .filter(|l| l.chars().all(is_whitespace))
            .count(),
    }
}

/// Unicode whitespace plus the ASCII information separators.
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn split_words(content: &str) -> impl Iterator<Item = &str> {
    content.split(is_whitespace).filter(|w| !w.is_empty())
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Physical lines without their terminators. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}
