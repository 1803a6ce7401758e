use anyhow::Context;
use clap::Parser;
use file_analyzer_cli::app;
use file_analyzer_cli::args::Args;
use file_analyzer_cli::config::Config;
use file_analyzer_cli::reporter::ConsoleReporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args).context("invalid arguments")?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    app::execute(
        &config,
        &ConsoleReporter,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings, or info with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
