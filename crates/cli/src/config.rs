// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use file_analyzer_engine::config::{
    AnalysisOptions, AnalysisOptionsBuilder, Config, ConfigBuilder, ResolveOptions,
    ResolveOptionsBuilder,
};
use file_analyzer_engine::error::EngineError;
use file_analyzer_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let modes: Vec<engine_options::AnalysisMode> =
            args.mode.iter().copied().map(Into::into).collect();
        let format: engine_options::OutputFormat = args.format.into();

        let resolve = ResolveOptionsBuilder::default()
            .patterns(args.files)
            .recursive(args.recursive)
            .ext(args.ext.filter(|e| !e.is_empty()))
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        let analysis = AnalysisOptionsBuilder::default()
            .requested_modes(&modes)
            .verbose(args.verbose)
            .encoding(args.encoding)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        ConfigBuilder::default()
            .resolve(resolve)
            .analysis(analysis)
            .format(format)
            .output_path(args.output)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::AnalysisMode,
    engine_options::AnalysisMode,
    Lines,
    Words,
    Chars,
    All,
    Stats
);
map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Text,
    Json,
    Csv
);
