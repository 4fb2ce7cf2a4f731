//! CLI configuration schema, file location and persistence.
//!
//! The `config` subcommand manages these settings. They are stored as TOML
//! with kebab-case keys, and unknown keys are rejected so that typos in
//! `config set` surface as errors instead of silently persisting.

mod error;
mod log_level;
mod path_ops;
mod paths;
mod store;


pub use error::ConfigError;
pub use log_level::LogLevel;
pub use paths::ConfigPaths;
pub use store::ConfigStore;

use serde::{Deserialize, Serialize};

/// Address of the config service used when none is configured.
pub const DEFAULT_SERVICE_ADDRESS: &str = "onos-config:5150";

/// Settings read by the CLI on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CliConfig {
    /// `host:port` of the config service.
    #[serde(default = "default_service_address")]
    pub service_address: String,

    /// Verbosity of diagnostics written to stderr.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Transport security settings.
    #[serde(default)]
    pub tls: TlsConfig,
}

/// Transport security settings for connections to the config service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TlsConfig {
    /// Connect without TLS.
    #[serde(default)]
    pub no_tls: bool,

    /// Skip verification of the server certificate.
    #[serde(default)]
    pub insecure: bool,

    /// Client certificate path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<String>,

    /// Client key path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            service_address: default_service_address(),
            log_level: LogLevel::default(),
            tls: TlsConfig::default(),
        }
    }
}

fn default_service_address() -> String {
    DEFAULT_SERVICE_ADDRESS.to_string()
}
