//! Command-line front end for the ONOS configuration subsystem.
//!
//! The crate is organised around a static command tree:
//!
//! - [`cli`] builds the tree, renders usage text and dispatches command lines
//! - [`config`] holds the CLI's own settings and their TOML file
//! - [`tracing_config`] sets up diagnostics on stderr
//!
//! # Quick Start
//!
//! ```rust
//! use config_cli::cli::{get_command, render_usage};
//!
//! let mut out = Vec::new();
//! render_usage(Some(get_command()), &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("config [command]"));
//! ```

/// Command tree, usage rendering and dispatch.
pub mod cli;

/// CLI configuration schema and persistence.
pub mod config;

/// Diagnostic logging setup.
pub mod tracing_config;

pub use cli::{CliError, CommandNode, get_command};
