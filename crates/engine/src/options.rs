use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Lines,
    Words,
    Chars,
    /// Shorthand for lines, words and chars. Does not include stats.
    All,
    Stats,
}

impl AnalysisMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Chars => "chars",
            Self::All => "all",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Requested modes resolved into the metrics to compute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    requested: Vec<AnalysisMode>,
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub stats: bool,
}

impl ModeSet {
    pub fn new(requested: &[AnalysisMode]) -> Self {
        let has = |m: AnalysisMode| requested.contains(&m);
        let all = has(AnalysisMode::All);
        Self {
            requested: requested.to_vec(),
            lines: all || has(AnalysisMode::Lines),
            words: all || has(AnalysisMode::Words),
            chars: all || has(AnalysisMode::Chars),
            stats: has(AnalysisMode::Stats),
        }
    }

    /// The modes as the user requested them, e.g. `lines, stats`.
    pub fn describe(&self) -> String {
        self.requested
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        Self::new(&[AnalysisMode::Lines])
    }
}
