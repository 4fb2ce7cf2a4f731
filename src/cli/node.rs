use std::{
    borrow::Cow,
    collections::HashSet,
    fmt,
    io::Write,
    sync::{Arc, LazyLock},
};

use regex::Regex;

use super::{
    CliError, Command,
    types::CommandArg,
    usage::{self, DEFAULT_USAGE_TEMPLATE},
};

#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*$").expect("command name pattern is a valid regex")
});

/// One entry in the command tree.
///
/// Children are owned exclusively by their parent, so the tree can never
/// contain cycles. The command path of every node is kept in sync by
/// [`CommandNode::with_child`], which lets usage text show the full
/// invocation (`config config get <key>`) without parent links.
#[derive(Clone)]
pub struct CommandNode {
    name: String,
    short: String,
    path: String,
    usage_template: Cow<'static, str>,
    args: Vec<CommandArg>,
    examples: Vec<String>,
    children: Vec<CommandNode>,
    handler: Option<Arc<dyn Command>>,
}

impl CommandNode {
    /// Creates a leaf node with the default usage template and no handler.
    pub fn new(name: &str, short: &str) -> Self {
        Self {
            name: name.to_string(),
            short: short.to_string(),
            path: name.to_string(),
            usage_template: Cow::Borrowed(DEFAULT_USAGE_TEMPLATE),
            args: Vec::new(),
            examples: Vec::new(),
            children: Vec::new(),
            handler: None,
        }
    }

    /// Replaces the usage template.
    ///
    /// The template must contain `Usage:` and the `{usage}` placeholder; this is
    /// checked by [`CommandNode::validate`].
    pub fn with_usage_template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.usage_template = template.into();
        self
    }

    /// Appends a positional argument.
    pub fn with_arg(mut self, arg: CommandArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends an example invocation shown in usage text.
    pub fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    /// Makes the node runnable.
    pub fn with_handler(mut self, handler: impl Command + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Attaches a child, rewriting the command paths of its whole subtree.
    pub fn with_child(mut self, mut child: CommandNode) -> Self {
        child.rebase(&self.path);
        self.children.push(child);
        self
    }

    /// Identifier of the command, unique among its siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line summary shown in the parent's command listing.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Names from the root to this node, joined by spaces.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The template [`CommandNode::usage`] fills in.
    pub fn usage_template(&self) -> &str {
        &self.usage_template
    }

    /// Positional arguments accepted by the handler.
    pub fn args(&self) -> &[CommandArg] {
        &self.args
    }

    /// Example invocations.
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Immediate children in registration order.
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Handler run when this node is invoked, if any.
    pub fn handler(&self) -> Option<&dyn Command> {
        self.handler.as_deref()
    }

    /// Whether invoking this node runs a handler rather than printing usage.
    pub fn is_runnable(&self) -> bool {
        self.handler.is_some()
    }

    /// Looks up an immediate child by name.
    pub fn find_child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Writes the usage text for this node to `out`.
    ///
    /// # Errors
    /// * `CliError::InvalidNode` - If the node has no name
    /// * `CliError::Io` - If writing to `out` fails
    pub fn usage(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let text = usage::render(self)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Returns the usage text for this node.
    ///
    /// # Errors
    /// * `CliError::InvalidNode` - If the node has no name
    pub fn usage_string(&self) -> Result<String, CliError> {
        usage::render(self)
    }

    /// Checks the structural invariants of the subtree rooted here.
    ///
    /// # Errors
    /// * `CliError::InvalidCommandName` - If any name is not a lowercase slug
    /// * `CliError::InvalidUsageTemplate` - If a template lacks `Usage:` or `{usage}`
    /// * `CliError::DuplicateCommand` - If siblings share a name or a short description
    pub fn validate(&self) -> Result<(), CliError> {
        if !NAME_PATTERN.is_match(&self.name) {
            return Err(CliError::InvalidCommandName(self.name.clone()));
        }

        usage::check_template(self)?;

        let mut names = HashSet::new();
        let mut shorts = HashSet::new();
        for child in &self.children {
            if !names.insert(child.name.as_str()) {
                return Err(self.duplicate(&child.name));
            }
            if !shorts.insert(child.short.as_str()) {
                return Err(self.duplicate(&child.short));
            }
            child.validate()?;
        }

        Ok(())
    }

    fn duplicate(&self, key: &str) -> CliError {
        CliError::DuplicateCommand {
            parent: self.path.clone(),
            key: key.to_string(),
        }
    }

    fn rebase(&mut self, parent_path: &str) {
        self.path = format!("{parent_path} {}", self.name);
        let path = self.path.clone();
        for child in &mut self.children {
            child.rebase(&path);
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("path", &self.path)
            .field("args", &self.args)
            .field("runnable", &self.is_runnable())
            .field("children", &self.children)
            .finish()
    }
}
