//! Unit tests for the command tree, usage rendering and dispatch.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::f64;

use tempfile::TempDir;
use toml::Value;

use crate::cli::{
    CliError, CliService, Command, CommandContext, CommandNode, CommandResult, Registration,
    build_root,
    commands::config::SetCommand,
    formatting::format_toml_value,
    get_command, list_children, render_usage,
    types::{ArgType, CommandArg},
};

struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, _context: &CommandContext, args: &[String]) -> CommandResult {
        Ok(args.join(" "))
    }
}

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn echo_tree() -> CommandNode {
    CommandNode::new("tool", "Demo tool").with_child(
        CommandNode::new("group", "A group of commands").with_child(
            CommandNode::new("echo", "Echo arguments")
                .with_arg(CommandArg::required("first", "First word", ArgType::String))
                .with_arg(CommandArg::optional("second", "Second word", ArgType::String))
                .with_handler(EchoCommand),
        ),
    )
}

fn run(root: &CommandNode, line: &str) -> Result<String, CliError> {
    let dir = TempDir::new().unwrap();
    let service = CliService::with_root(root, CommandContext::new(dir.path().join("cfg.toml")));
    let mut out = Vec::new();
    service.execute(&args(line), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn child_paths_follow_attachment() {
    let root = echo_tree();

    let group = root.find_child("group").unwrap();
    assert_eq!(group.path(), "tool group");
    assert_eq!(group.find_child("echo").unwrap().path(), "tool group echo");
}

#[test]
fn rebasing_updates_grandchildren_attached_earlier() {
    let group = CommandNode::new("group", "Group").with_child(CommandNode::new("leaf", "Leaf"));
    let root = CommandNode::new("root", "Root").with_child(group);

    assert_eq!(root.children()[0].children()[0].path(), "root group leaf");
}

#[test]
fn leaf_has_no_children() {
    let leaf = CommandNode::new("leaf", "A leaf");

    assert!(list_children(&leaf).is_empty());
    assert!(leaf.find_child("anything").is_none());
}

#[test]
fn build_root_keeps_table_order() {
    let table = [
        Registration { name: "zeta", short: "Last letter", attach: |node| node },
        Registration { name: "alpha", short: "First letter", attach: |node| node },
    ];

    let root = build_root("tool", "Demo tool", &table).unwrap();
    let names: Vec<&str> = root.children().iter().map(CommandNode::name).collect();

    assert_eq!(names, ["zeta", "alpha"]);
}

#[test]
fn build_root_rejects_duplicate_names() {
    let table = [
        Registration { name: "get", short: "Get one", attach: |node| node },
        Registration { name: "get", short: "Get two", attach: |node| node },
    ];

    match build_root("tool", "Demo tool", &table) {
        Err(CliError::DuplicateCommand { parent, key }) => {
            assert_eq!(parent, "tool");
            assert_eq!(key, "get");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn build_root_rejects_duplicate_short_descriptions() {
    let table = [
        Registration { name: "get", short: "Fetch", attach: |node| node },
        Registration { name: "fetch", short: "Fetch", attach: |node| node },
    ];

    let err = build_root("tool", "Demo tool", &table).unwrap_err();
    assert!(matches!(err, CliError::DuplicateCommand { ref key, .. } if key == "Fetch"));
}

#[test]
fn build_root_rejects_malformed_names() {
    for name in ["Get", "", "get config", "9lives", "-dash"] {
        let table = [Registration { name, short: "Something", attach: |node| node }];

        let err = build_root("tool", "Demo tool", &table).unwrap_err();
        assert!(
            matches!(err, CliError::InvalidCommandName(_)),
            "name {name:?} gave {err:?}"
        );
    }
}

#[test]
fn duplicates_are_detected_below_the_top_level() {
    let table = [Registration {
        name: "group",
        short: "Group",
        attach: |node| {
            node.with_child(CommandNode::new("a", "Same"))
                .with_child(CommandNode::new("b", "Same"))
        },
    }];

    let err = build_root("tool", "Demo tool", &table).unwrap_err();
    assert!(matches!(err, CliError::DuplicateCommand { ref parent, .. } if parent == "tool group"));
}

#[test]
fn templates_without_usage_placeholder_are_rejected() {
    let node = CommandNode::new("tool", "Demo tool").with_usage_template("Usage: nothing here");

    let err = node.validate().unwrap_err();
    assert!(matches!(err, CliError::InvalidUsageTemplate { .. }));
}

#[test]
fn templates_without_header_are_rejected() {
    let node = CommandNode::new("tool", "Demo tool").with_usage_template("{usage}");

    assert!(matches!(
        node.validate(),
        Err(CliError::InvalidUsageTemplate { .. })
    ));
}

#[test]
fn custom_template_is_filled_in() {
    let node = CommandNode::new("tool", "Demo tool")
        .with_child(CommandNode::new("sub", "A subcommand"))
        .with_usage_template("Usage:{usage}\n--{commands}\n");

    node.validate().unwrap();
    let text = node.usage_string().unwrap();

    assert!(text.starts_with("Usage:\n  tool [command]\n--"));
    assert!(text.contains("sub"));
    assert!(!text.contains("{commands}"));
    assert!(!text.contains("more information"));
}

#[test]
fn render_usage_without_node_fails() {
    let mut out = Vec::new();

    let err = render_usage(None, &mut out).unwrap_err();

    assert!(matches!(err, CliError::InvalidNode(_)));
    assert!(out.is_empty());
}

#[test]
fn render_usage_of_unnamed_node_fails() {
    let node = CommandNode::new("", "Nameless");
    let mut out = Vec::new();

    assert!(matches!(
        render_usage(Some(&node), &mut out),
        Err(CliError::InvalidNode(_))
    ));
}

#[test]
fn usage_of_group_lists_children_and_footer() {
    let text = echo_tree().usage_string().unwrap();

    assert_eq!(
        text,
        "Usage:\n  tool [command]\n\n\
         Available Commands:\n  group       A group of commands\n\n\
         Use \"tool [command] --help\" for more information about a command.\n"
    );
}

#[test]
fn usage_of_runnable_leaf_shows_arguments() {
    let tree = echo_tree();
    let echo = tree
        .find_child("group")
        .and_then(|group| group.find_child("echo"))
        .unwrap();

    let text = echo.usage_string().unwrap();

    assert!(text.contains("tool group echo <first> [second]"));
    assert!(text.contains("Arguments:"));
    assert!(text.contains("second      Second word (string, optional)"));
    assert!(!text.contains("[command]"));
}

#[test]
fn built_in_tree_is_a_singleton() {
    assert!(std::ptr::eq(get_command(), get_command()));
}

#[test]
fn built_in_config_group_has_runnable_children() {
    let config = get_command().find_child("config").unwrap();
    let names: Vec<&str> = config.children().iter().map(CommandNode::name).collect();

    assert_eq!(names, ["init", "get", "set"]);
    assert!(config.children().iter().all(CommandNode::is_runnable));
    assert!(!config.is_runnable());
    assert_eq!(config.find_child("set").unwrap().path(), "config config set");
}

#[test]
fn remote_subcommands_are_usage_only() {
    for name in ["rollback", "get", "watch", "log"] {
        let node = get_command().find_child(name).unwrap();
        assert!(!node.is_runnable(), "{name} should not be runnable");
    }
}

#[test]
fn dispatch_runs_handler_with_remaining_args() {
    assert_eq!(run(&echo_tree(), "group echo hello").unwrap(), "hello\n");
    assert_eq!(run(&echo_tree(), "group echo hello world").unwrap(), "hello world\n");
}

#[test]
fn dispatch_checks_argument_counts() {
    let too_few = run(&echo_tree(), "group echo").unwrap_err();
    assert!(matches!(too_few, CliError::InvalidArguments(ref m) if m.contains("at least 1")));

    let too_many = run(&echo_tree(), "group echo a b c").unwrap_err();
    assert!(matches!(too_many, CliError::InvalidArguments(ref m) if m.contains("at most 2")));
}

#[test]
fn dispatch_prints_usage_for_groups() {
    let text = run(&echo_tree(), "group").unwrap();

    assert!(text.contains("tool group [command]"));
    assert!(text.contains("Echo arguments"));
}

#[test]
fn dispatch_with_no_args_prints_root_usage() {
    let text = run(&echo_tree(), "").unwrap();

    assert_eq!(text, echo_tree().usage_string().unwrap());
}

#[test]
fn dispatch_reports_unknown_commands() {
    let err = run(&echo_tree(), "group nope").unwrap_err();

    match err {
        CliError::CommandNotFound(message) => {
            assert_eq!(message, "unknown command \"nope\" for \"tool group\"");
        }
        other => panic!("expected CommandNotFound, got {other:?}"),
    }
}

#[test]
fn help_flag_renders_usage_of_current_node() {
    let text = run(&echo_tree(), "group echo --help").unwrap();
    assert!(text.contains("tool group echo <first> [second]"));

    let text = run(&echo_tree(), "-h").unwrap();
    assert!(text.contains("tool [command]"));
}

#[test]
fn help_flag_after_arguments_wins_over_handler() {
    let text = run(&echo_tree(), "group echo hello --help").unwrap();
    assert!(text.contains("tool group echo <first> [second]"));

    let text = run(&echo_tree(), "group echo a b -h").unwrap();
    assert!(text.starts_with("Usage:"));
    assert!(!text.contains("a b"));
}

#[test]
fn help_command_resolves_topics() {
    let text = run(&echo_tree(), "help group echo").unwrap();
    assert!(text.contains("tool group echo <first> [second]"));

    let err = run(&echo_tree(), "help missing").unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(ref m) if m.contains("help topic")));
}

#[test]
fn format_toml_value_scalars() {
    assert_eq!(format_toml_value(&Value::String("x".to_string())), "\"x\"");
    assert_eq!(format_toml_value(&Value::Integer(-123)), "-123");
    assert_eq!(format_toml_value(&Value::Float(-2.5)), "-2.5");
    assert_eq!(
        format_toml_value(&Value::Float(f64::consts::PI)),
        "3.141592653589793"
    );
    assert_eq!(format_toml_value(&Value::Boolean(false)), "false");
}

#[test]
fn format_toml_value_collections_show_size() {
    let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(format_toml_value(&array), "[2]");

    let mut table = toml::map::Map::new();
    table.insert("no-tls".to_string(), Value::Boolean(true));
    assert_eq!(format_toml_value(&Value::Table(table)), "{1}");
}

#[test]
fn set_value_detection_keeps_non_finite_words_as_strings() {
    for word in ["nan", "NaN", "inf", "-inf", "infinity"] {
        assert_eq!(
            SetCommand::parse_config_value(word),
            Value::String(word.to_string()),
            "{word} should stay a string"
        );
    }

    assert_eq!(SetCommand::parse_config_value("2.5"), Value::Float(2.5));
    assert_eq!(SetCommand::parse_config_value("42"), Value::Integer(42));
    assert_eq!(SetCommand::parse_config_value("true"), Value::Boolean(true));
}
