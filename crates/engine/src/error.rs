use crate::encoding::Encoding;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No matching files found.")]
    NoMatchingFiles,

    #[error("File '{}' does not exist.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{}': unknown encoding: {name}", path.display())]
    UnknownEncoding { path: PathBuf, name: String },

    #[error("Failed to decode file '{}': '{encoding}' codec can't decode {detail}", path.display())]
    Decode {
        path: PathBuf,
        encoding: Encoding,
        detail: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
