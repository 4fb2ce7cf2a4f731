//! Registration table for the top-level subcommands.

pub mod config;

use super::{CommandNode, Registration};

/// Top-level subcommands, in the order they are listed in usage text.
///
/// Only `config` runs locally. The others talk to the config service, which
/// this crate does not implement; they are registered so they are
/// discoverable and print their usage when invoked.
pub const TOP_LEVEL: &[Registration] = &[
    Registration {
        name: "config",
        short: "Manage the CLI configuration",
        attach: config::attach,
    },
    Registration {
        name: "rollback",
        short: "Rolls-back a transaction",
        attach: usage_only,
    },
    Registration {
        name: "get",
        short: "Get config resources",
        attach: usage_only,
    },
    Registration {
        name: "watch",
        short: "Watch for updates to a config resource type",
        attach: usage_only,
    },
    Registration {
        name: "log",
        short: "logging api commands",
        attach: usage_only,
    },
];

fn usage_only(node: CommandNode) -> CommandNode {
    node
}
