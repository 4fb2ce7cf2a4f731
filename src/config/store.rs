use std::{
    fs,
    path::{Path, PathBuf},
};

use toml::Value;
use tracing::{debug, info, instrument};

use super::{
    CliConfig, ConfigError,
    path_ops::{navigate_path, set_value_at_path},
};

/// File-backed view of the CLI configuration.
///
/// Reads go through the typed [`CliConfig`]; writes are applied to its TOML
/// form by dotted key and accepted only if the result still deserializes.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: CliConfig,
}

impl ConfigStore {
    /// Creates a store for `path` holding the default configuration, without touching disk.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: CliConfig::default(),
        }
    }

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the defaults; it is not created.
    ///
    /// # Errors
    /// * `ConfigError::Io` - If the file exists but cannot be read
    /// * `ConfigError::TomlParse` - If the file is not a valid configuration
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No configuration file, using defaults");
            return Ok(Self::with_defaults(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;
        let config: CliConfig =
            toml::from_str(&content).map_err(|e| ConfigError::toml_parse(e, Some(path)))?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Writes the default configuration to `path` unless a file is already there.
    ///
    /// Returns `true` if the file was created.
    ///
    /// # Errors
    /// * `ConfigError::Io` - If the directory or file cannot be written
    /// * `ConfigError::Serialization` - If the defaults cannot be serialized
    #[instrument]
    pub fn init(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            debug!("Configuration file already present");
            return Ok(false);
        }

        Self::with_defaults(path).save()?;
        info!("Created default configuration");
        Ok(true)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current typed configuration.
    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Retrieves the value at a dotted key such as `tls.no-tls`.
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the key does not address a set value
    /// * `ConfigError::Serialization` - If the configuration cannot be converted to TOML
    pub fn get_by_path(&self, key: &str) -> Result<Value, ConfigError> {
        let root = self.as_toml()?;
        navigate_path(&root, key).cloned()
    }

    /// Sets the value at a dotted key in memory.
    ///
    /// The store is left unchanged when the updated document no longer matches
    /// the configuration schema. Call [`ConfigStore::save`] to persist.
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the key is malformed
    /// * `ConfigError::InvalidValue` - If the schema rejects the key or value
    pub fn set_by_path(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut root = self.as_toml()?;
        set_value_at_path(&mut root, key, value)?;

        self.config = root.try_into().map_err(|e: toml::de::Error| {
            ConfigError::InvalidValue {
                path: key.to_string(),
                details: e.message().to_string(),
            }
        })?;

        debug!(key, "Configuration value updated");
        Ok(())
    }

    /// Persists the configuration, creating parent directories as needed.
    ///
    /// # Errors
    /// * `ConfigError::Io` - If the directory or file cannot be written
    /// * `ConfigError::Serialization` - If the configuration cannot be serialized
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::io(e, parent))?;
            }
        }

        let content = toml::to_string_pretty(&self.config)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| ConfigError::io(e, &self.path))?;

        debug!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }

    fn as_toml(&self) -> Result<Value, ConfigError> {
        Value::try_from(&self.config).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}
