use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raised when a rate, quantity or hours field does not hold a finite number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid {field} '{input}': please enter a valid numeric value")]
    InvalidNumericInput { field: &'static str, input: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("role ordinals exhausted; no further roles can be registered")]
    OrdinalsExhausted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("no role selected; use 'select <index>' first")]
    NoSelection,

    #[error("invalid selection '{input}'; expected a number from 1 to {len}")]
    InvalidSelection { input: String, len: usize },

    #[error("no available role numbered {number} ({len} listed)")]
    SelectionOutOfRange { number: usize, len: usize },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failures that end a CLI session.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
