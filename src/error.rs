//! Server error types.

use std::net::AddrParseError;
use std::num::ParseIntError;

/// Bad value in the process environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: AddrParseError },
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
