use crate::options::{AnalysisMode, ModeSet, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;

/// How input patterns are turned into concrete files.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct ResolveOptions {
    #[builder(default)]
    pub patterns: Vec<String>,
    #[builder(default)]
    pub recursive: bool,
    /// Suffix that matched file names must end with.
    #[builder(default)]
    pub ext: Option<String>,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct AnalysisOptions {
    #[builder(default)]
    pub modes: ModeSet,
    #[builder(default)]
    pub verbose: bool,
    /// Encoding name as given on the command line; empty means utf-8.
    /// Unknown names fail each file rather than the whole run.
    #[builder(default)]
    pub encoding: String,
}

impl AnalysisOptionsBuilder {
    pub fn requested_modes(&mut self, modes: &[AnalysisMode]) -> &mut Self {
        self.modes(ModeSet::new(modes))
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub resolve: ResolveOptions,
    #[builder(default)]
    pub analysis: AnalysisOptions,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}
