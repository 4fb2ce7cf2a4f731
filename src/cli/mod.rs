//! Command tree, usage rendering and dispatch.
//!
//! The tree is assembled once from a static registration table by
//! [`build_root`]; [`get_command`] exposes the built-in tree and
//! [`CliService`] walks command lines through it.

pub mod commands;
pub mod formatting;
mod node;
mod registry;
mod service;
pub mod types;
mod usage;

#[cfg(test)]
mod tests;

pub use node::CommandNode;
pub use registry::{
    ROOT_NAME, ROOT_SHORT, Registration, build_root, get_command, list_children, render_usage,
};
pub use service::CliService;
pub use types::{CliError, Command, CommandContext, CommandResult};
pub use usage::DEFAULT_USAGE_TEMPLATE;
