use std::io::Write;

use tracing::{debug, instrument};

use super::{
    CliError, CommandNode, get_command,
    types::{CommandArg, CommandContext},
};

const HELP_COMMAND: &str = "help";
const HELP_FLAGS: [&str; 2] = ["--help", "-h"];

/// Resolves command lines against the command tree and runs them.
///
/// Arguments are consumed as subcommand names for as long as they match a
/// child; whatever remains goes to the handler of the node reached. Nodes
/// without a handler print their usage instead. A help flag anywhere on the
/// line renders the usage of the deepest node reached.
pub struct CliService<'a> {
    root: &'a CommandNode,
    context: CommandContext,
}

impl CliService<'static> {
    /// Creates a service over the built-in command tree.
    pub fn new(context: CommandContext) -> Self {
        Self::with_root(get_command(), context)
    }
}

impl<'a> CliService<'a> {
    /// Creates a service over a custom command tree.
    pub fn with_root(root: &'a CommandNode, context: CommandContext) -> Self {
        Self { root, context }
    }

    /// The command tree this service dispatches into.
    pub fn root(&self) -> &'a CommandNode {
        self.root
    }

    /// Executes `args` (without the program name), writing all output to `out`.
    ///
    /// # Errors
    /// * `CliError::CommandNotFound` - If an argument names no subcommand of a non-runnable node
    /// * `CliError::InvalidArguments` - If the handler's argument count is not met
    /// * Any error returned by the handler or by writing to `out`
    #[instrument(skip(self, out))]
    pub fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CliError> {
        let mut node = self.root;
        let mut consumed = 0;

        for arg in args {
            if HELP_FLAGS.contains(&arg.as_str()) {
                return node.usage(out);
            }

            if arg == HELP_COMMAND && !node.children().is_empty() {
                let target = Self::resolve(node, &args[consumed + 1..])?;
                return target.usage(out);
            }

            match node.find_child(arg) {
                Some(child) => {
                    node = child;
                    consumed += 1;
                }
                None => break,
            }
        }

        let rest = &args[consumed..];
        if rest.iter().any(|arg| HELP_FLAGS.contains(&arg.as_str())) {
            return node.usage(out);
        }

        let Some(handler) = node.handler() else {
            if let Some(unknown) = rest.first() {
                return Err(CliError::CommandNotFound(format!(
                    "unknown command \"{unknown}\" for \"{}\"",
                    node.path()
                )));
            }
            return node.usage(out);
        };

        Self::validate_args(node, rest)?;
        debug!(command = node.path(), "Running command");

        let output = handler.execute(&self.context, rest)?;
        if !output.trim().is_empty() {
            writeln!(out, "{output}")?;
        }

        Ok(())
    }

    fn resolve<'n>(
        mut node: &'n CommandNode,
        path: &[String],
    ) -> Result<&'n CommandNode, CliError> {
        for name in path {
            node = node.find_child(name).ok_or_else(|| {
                CliError::CommandNotFound(format!(
                    "unknown help topic \"{name}\" for \"{}\"",
                    node.path()
                ))
            })?;
        }

        Ok(node)
    }

    fn validate_args(node: &CommandNode, args: &[String]) -> Result<(), CliError> {
        let expected: &[CommandArg] = node.args();
        let required_count = expected.iter().filter(|arg| arg.required).count();
        let total_count = expected.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at least {} arguments, got {}",
                node.path(),
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at most {} arguments, got {}",
                node.path(),
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }
}
