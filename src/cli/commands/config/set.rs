use toml::Value;
use tracing::debug;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandContext},
    config::{ConfigError, ConfigStore},
};

/// Updates a value in the CLI configuration file.
pub struct SetCommand;

impl SetCommand {
    pub(crate) fn parse_config_value(value_str: &str) -> Value {
        if let Ok(b) = value_str.parse::<bool>() {
            return Value::Boolean(b);
        }

        if let Ok(i) = value_str.parse::<i64>() {
            return Value::Integer(i);
        }

        // "nan", "inf" and "infinity" parse as f64 but are words, not numbers.
        if let Some(f) = value_str.parse::<f64>().ok().filter(|f| f.is_finite()) {
            return Value::Float(f);
        }

        Value::String(value_str.to_string())
    }
}

impl Command for SetCommand {
    fn execute(&self, context: &CommandContext, args: &[String]) -> CommandResult {
        let (Some(key), Some(value_str)) = (args.first(), args.get(1)) else {
            return Err(CliError::InvalidArguments(
                "Expected <key> and <value> arguments for 'set' command".to_string(),
            ));
        };

        let mut store = ConfigStore::load(&context.config_path)?;

        let typed = Self::parse_config_value(value_str);
        let is_string = typed.is_str();
        match store.set_by_path(key, typed) {
            Ok(()) => {}
            // A string field may legitimately hold "8080" or "true".
            Err(ConfigError::InvalidValue { .. }) if !is_string => {
                debug!(key = %key, "Typed value rejected, retrying as string");
                store.set_by_path(key, Value::String(value_str.clone()))?;
            }
            Err(e) => return Err(e.into()),
        }

        store.save()?;

        Ok(format!("Set '{key}' to '{value_str}'"))
    }
}
