use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building, rendering or executing commands.
///
/// Each variant carries enough context to be shown to the user as-is.
#[derive(Error, Debug)]
pub enum CliError {
    /// Usage was requested for a node that is absent or was never properly built.
    #[error("Invalid command node: {0}")]
    InvalidNode(String),

    /// Two siblings share a name or a short description.
    ///
    /// The command tree is static, so this only fires when the registration
    /// table itself is wrong.
    #[error("Duplicate command '{key}' registered under '{parent}'")]
    DuplicateCommand {
        /// Path of the parent the duplicate was attached to
        parent: String,
        /// The repeated name or short description
        key: String,
    },

    /// A command name is not a lowercase slug.
    #[error("Invalid command name '{0}': expected lowercase letters, digits and dashes")]
    InvalidCommandName(String),

    /// A usage template lacks a mandatory element.
    #[error("Invalid usage template for '{command}': {reason}")]
    InvalidUsageTemplate {
        /// Path of the command owning the template
        command: String,
        /// What the template is missing
        reason: String,
    },

    /// A command or subcommand was not found in the tree.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments or too many arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration layer.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return the text to show the user, or a [`CliError`].
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives argument-count validation and the `Arguments:` section of usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArg {
    /// The name of the argument (e.g., "key", "value").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument, shown in usage text.
    pub value_type: ArgType,
}

impl CommandArg {
    /// A mandatory argument.
    pub fn required(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: true,
            value_type,
        }
    }

    /// An argument that may be omitted.
    pub fn optional(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            required: false,
            ..Self::required(name, description, value_type)
        }
    }
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A boolean value (true/false).
    Boolean,

    /// A dotted configuration key.
    Key,
}

impl ArgType {
    /// Lowercase label shown in usage text.
    pub fn label(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::Boolean => "bool",
            ArgType::Key => "key",
        }
    }
}

/// State handed to every command handler at execution time.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Location of the CLI configuration file.
    pub config_path: PathBuf,
}

impl CommandContext {
    /// Creates a context pointing at the given configuration file.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }
}

/// Handler attached to a runnable command node.
///
/// Handlers are shared by the immutable command tree, so they must be
/// `Send + Sync` and keep no per-invocation state.
pub trait Command: Send + Sync {
    /// Executes the command with the arguments left after subcommand lookup.
    ///
    /// The dispatcher has already checked the argument count against the
    /// node's [`CommandArg`] list.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, such as invalid argument
    /// values or configuration errors.
    fn execute(&self, context: &CommandContext, args: &[String]) -> CommandResult;
}
