use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// The swap model name does not end in a positive integer token, e.g. `"inswapper 128"`.
    #[error("cannot read output size from swap model name {model:?}: {source}")]
    ModelNameParse {
        model: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file found, searched: {0:?}")]
    NotFound(Vec<String>),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T, E = OptionsError> = std::result::Result<T, E>;
