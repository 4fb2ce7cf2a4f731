use crate::{
    cli::{CliError, Command, CommandResult, formatting::format_toml_value, types::CommandContext},
    config::ConfigStore,
};

/// Prints a value from the CLI configuration.
///
/// # Example Usage
///
/// ```bash
/// config config get service-address
/// config config get tls.no-tls
/// ```
pub struct GetCommand;

impl Command for GetCommand {
    /// Retrieves and formats the value at the given key.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no key argument is provided
    /// * `CliError::Config` - If the file cannot be loaded or the key is unset
    fn execute(&self, context: &CommandContext, args: &[String]) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'get' command".to_string())
        })?;

        let store = ConfigStore::load(&context.config_path)?;
        let value = store.get_by_path(key)?;

        Ok(format!("{key}: {}", format_toml_value(&value)))
    }
}
