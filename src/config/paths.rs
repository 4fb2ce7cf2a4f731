use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

use super::ConfigError;

/// Utility struct for locating the CLI configuration file
///
/// Follows the XDG Base Directory specification.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Name of the directory holding the CLI configuration.
    pub const APP_DIR: &'static str = "onos";

    /// File name of the CLI configuration.
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the configuration directory path
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "onos" to the base config directory
    ///
    /// # Errors
    /// Returns `ConfigError::MissingConfigDir` if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        Self::config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
    }

    /// Resolves the configuration directory from explicit `XDG_CONFIG_HOME` and `HOME` values.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingConfigDir` if both values are `None`
    pub fn config_dir_from(
        xdg_config_home: Option<String>,
        home: Option<String>,
    ) -> Result<PathBuf, ConfigError> {
        let config_home = xdg_config_home
            .or_else(|| home.map(|home| format!("{home}/.config")))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(Self::APP_DIR))
    }

    /// Returns the path to the CLI configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::MissingConfigDir` if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
