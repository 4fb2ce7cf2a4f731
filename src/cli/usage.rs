//! Usage text rendering.
//!
//! A usage template is plain text with section placeholders. Every section
//! renders to an empty string when it does not apply, so a template never
//! needs conditionals.

use std::fmt::Write as _;

use super::{CliError, CommandNode};

/// Template used by nodes that do not set their own.
pub const DEFAULT_USAGE_TEMPLATE: &str =
    "Usage:{usage}{commands}{arguments}{examples}{footer}\n";

const HEADER: &str = "Usage:";
const USAGE: &str = "{usage}";
const COMMANDS: &str = "{commands}";
const ARGUMENTS: &str = "{arguments}";
const EXAMPLES: &str = "{examples}";
const FOOTER: &str = "{footer}";

const MIN_NAME_PADDING: usize = 11;

pub(super) fn check_template(node: &CommandNode) -> Result<(), CliError> {
    let template = node.usage_template();

    for required in [HEADER, USAGE] {
        if !template.contains(required) {
            return Err(CliError::InvalidUsageTemplate {
                command: node.path().to_string(),
                reason: format!("missing '{required}'"),
            });
        }
    }

    Ok(())
}

pub(super) fn render(node: &CommandNode) -> Result<String, CliError> {
    if node.name().is_empty() {
        return Err(CliError::InvalidNode(
            "command node has no name".to_string(),
        ));
    }

    let sections = [
        (USAGE, usage_lines(node)),
        (COMMANDS, command_listing(node)),
        (ARGUMENTS, argument_listing(node)),
        (EXAMPLES, example_listing(node)),
        (FOOTER, footer(node)),
    ];

    let mut text = node.usage_template().to_string();
    for (placeholder, section) in sections {
        text = text.replace(placeholder, &section);
    }

    Ok(text)
}

fn usage_lines(node: &CommandNode) -> String {
    let mut lines = String::new();

    if node.is_runnable() || node.children().is_empty() {
        let mut line = node.path().to_string();
        for arg in node.args() {
            if arg.required {
                let _ = write!(line, " <{}>", arg.name);
            } else {
                let _ = write!(line, " [{}]", arg.name);
            }
        }
        let _ = write!(lines, "\n  {line}");
    }

    if !node.children().is_empty() {
        let _ = write!(lines, "\n  {} [command]", node.path());
    }

    lines
}

fn command_listing(node: &CommandNode) -> String {
    if node.children().is_empty() {
        return String::new();
    }

    let width = node
        .children()
        .iter()
        .map(|child| child.name().len())
        .max()
        .unwrap_or_default()
        .max(MIN_NAME_PADDING);

    let mut listing = String::from("\n\nAvailable Commands:");
    for child in node.children() {
        let _ = write!(listing, "\n  {:<width$} {}", child.name(), child.short());
    }

    listing
}

fn argument_listing(node: &CommandNode) -> String {
    if node.args().is_empty() {
        return String::new();
    }

    let width = node
        .args()
        .iter()
        .map(|arg| arg.name.len())
        .max()
        .unwrap_or_default()
        .max(MIN_NAME_PADDING);

    let mut listing = String::from("\n\nArguments:");
    for arg in node.args() {
        let optional = if arg.required { "" } else { ", optional" };
        let _ = write!(
            listing,
            "\n  {:<width$} {} ({}{optional})",
            arg.name,
            arg.description,
            arg.value_type.label(),
        );
    }

    listing
}

fn example_listing(node: &CommandNode) -> String {
    if node.examples().is_empty() {
        return String::new();
    }

    let mut listing = String::from("\n\nExamples:");
    for example in node.examples() {
        let _ = write!(listing, "\n  {example}");
    }

    listing
}

fn footer(node: &CommandNode) -> String {
    if node.children().is_empty() {
        return String::new();
    }

    format!(
        "\n\nUse \"{} [command] --help\" for more information about a command.",
        node.path()
    )
}
