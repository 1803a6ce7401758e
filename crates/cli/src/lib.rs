// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod output;
pub mod presentation;
pub mod reporter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
