use crate::{
    cli::{Command, CommandResult, types::CommandContext},
    config::ConfigStore,
};

/// Writes a default configuration file if none exists yet.
pub struct InitCommand;

impl Command for InitCommand {
    fn execute(&self, context: &CommandContext, _args: &[String]) -> CommandResult {
        let path = &context.config_path;

        if ConfigStore::init(path)? {
            Ok(format!("Created configuration file {}", path.display()))
        } else {
            Ok(format!("Configuration file {} already exists", path.display()))
        }
    }
}
