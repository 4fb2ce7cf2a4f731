use std::{io::Write, sync::OnceLock};

use tracing::debug;

use super::{CliError, CommandNode, commands::TOP_LEVEL};

/// Name of the root command.
pub const ROOT_NAME: &str = "config";

/// Short description of the root command.
pub const ROOT_SHORT: &str = "ONOS configuration subsystem commands";

static ROOT: OnceLock<CommandNode> = OnceLock::new();

/// One row of the static registration table.
///
/// `attach` receives the bare node built from `name` and `short` and returns
/// it with its handler, arguments and children filled in.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    /// Command name, unique among siblings.
    pub name: &'static str,
    /// One-line summary for the parent's listing.
    pub short: &'static str,
    /// Completes the node.
    pub attach: fn(CommandNode) -> CommandNode,
}

impl Registration {
    fn build(&self) -> CommandNode {
        (self.attach)(CommandNode::new(self.name, self.short))
    }
}

/// Builds a root command with one child per registration, in table order.
///
/// # Errors
/// * `CliError::DuplicateCommand` - If two registrations share a name or short description
/// * `CliError::InvalidCommandName` - If a name is not a lowercase slug
/// * `CliError::InvalidUsageTemplate` - If a node's template is incomplete
///
/// # Example
///
/// ```
/// use config_cli::cli::{Registration, build_root};
///
/// let table = [Registration { name: "get", short: "Get things", attach: |node| node }];
/// let root = build_root("tool", "Demo tool", &table).unwrap();
/// assert_eq!(root.children()[0].path(), "tool get");
/// ```
pub fn build_root(
    name: &str,
    short: &str,
    table: &[Registration],
) -> Result<CommandNode, CliError> {
    let root = table
        .iter()
        .fold(CommandNode::new(name, short), |root, registration| {
            root.with_child(registration.build())
        });

    root.validate()?;
    debug!(command = name, children = table.len(), "Command tree built");

    Ok(root)
}

/// Returns the root command with every subcommand attached.
///
/// The tree is built on first use and shared immutably afterwards, so every
/// caller, on any thread, sees the same instance.
///
/// # Panics
/// Panics if the built-in registration table violates the tree invariants.
#[allow(clippy::panic)]
pub fn get_command() -> &'static CommandNode {
    ROOT.get_or_init(|| match build_root(ROOT_NAME, ROOT_SHORT, TOP_LEVEL) {
        Ok(root) => root,
        Err(e) => panic!("Built-in command table is invalid: {e}"),
    })
}

/// Writes the usage text of `node` to `out`.
///
/// # Errors
/// * `CliError::InvalidNode` - If `node` is `None` or has no name
/// * `CliError::Io` - If writing to `out` fails
pub fn render_usage(node: Option<&CommandNode>, out: &mut dyn Write) -> Result<(), CliError> {
    let node = node.ok_or_else(|| CliError::InvalidNode("no command node given".to_string()))?;
    node.usage(out)
}

/// Immediate children of `node` in registration order; empty for a leaf.
pub fn list_children(node: &CommandNode) -> &[CommandNode] {
    node.children()
}
