// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::{AnalysisMode, OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_analyzer",
    version = crate::VERSION,
    about = "Analyze text files and count lines, words, or characters."
)]
pub struct Args {
    /// Path(s) to text file(s), or glob patterns
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    pub files: Vec<String>,

    /// Types of analysis to perform
    #[arg(
        long,
        value_enum,
        num_args = 1..,
        default_values_t = [AnalysisMode::Lines],
        help_heading = "Analysis"
    )]
    pub mode: Vec<AnalysisMode>,

    /// Enable verbose output
    #[arg(short, long, help_heading = "Analysis")]
    pub verbose: bool,

    /// Specify file encoding (utf-8, utf-8-sig, utf-16, utf-16-le, utf-16-be, latin-1, ascii)
    #[arg(long, value_name = "NAME", default_value = "utf-8", help_heading = "Analysis")]
    pub encoding: String,

    /// Recursively analyze directories and expand `**` in patterns
    #[arg(short, long, help_heading = "Input")]
    pub recursive: bool,

    /// Filter by file name suffix (e.g. .txt)
    #[arg(long, value_name = "SUFFIX", help_heading = "Input")]
    pub ext: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Output")]
    pub format: OutputFormat,

    /// Save results to a file
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}
