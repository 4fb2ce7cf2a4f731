//! Commands that manage the CLI's own configuration file.
mod get;
mod init;
mod set;

pub use get::GetCommand;
pub use init::InitCommand;
pub use set::SetCommand;

use crate::cli::{
    CommandNode,
    types::{ArgType, CommandArg},
};

/// Completes the `config` node with its `init`, `get` and `set` children.
pub fn attach(node: CommandNode) -> CommandNode {
    node.with_child(
        CommandNode::new("init", "Initialize the CLI configuration")
            .with_example("config config init")
            .with_handler(InitCommand),
    )
    .with_child(
        CommandNode::new("get", "Get a CLI configuration value")
            .with_arg(CommandArg::required(
                "key",
                "Configuration key (e.g., service-address, tls.no-tls)",
                ArgType::Key,
            ))
            .with_example("config config get service-address")
            .with_example("config config get tls.insecure")
            .with_handler(GetCommand),
    )
    .with_child(
        CommandNode::new("set", "Set a CLI configuration value")
            .with_arg(CommandArg::required(
                "key",
                "Configuration key",
                ArgType::Key,
            ))
            .with_arg(CommandArg::required(
                "value",
                "New value (type is auto-detected)",
                ArgType::String,
            ))
            .with_example("config config set service-address onos-config:5150")
            .with_example("config config set tls.no-tls true")
            .with_handler(SetCommand),
    )
}
