use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors raised while loading, querying or persisting the CLI configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The dotted key does not address a value in the configuration.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The value written at `path` does not fit the configuration schema.
    #[error("invalid value for '{path}': {details}")]
    InvalidValue {
        /// Dotted key that was being written
        path: String,
        /// Why the schema rejected the value
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// The configuration could not be converted to TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialization(String),

    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("cannot locate the configuration directory: {0}")]
    MissingConfigDir(#[from] io::Error),
}

impl ConfigError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfigError::TomlParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
