//! Formatting utilities for CLI output.
//!
//! Usage text is left unstyled so it can be captured and matched; only
//! values and terminal error messages are decorated here.

use toml::Value;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a TOML value for human-readable CLI output.
///
/// Scalars are printed in full; arrays and tables show their size.
///
/// # Examples
///
/// ```
/// use config_cli::cli::formatting::format_toml_value;
///
/// let value = toml::Value::String("onos-config:5150".to_string());
/// assert_eq!(format_toml_value(&value), "\"onos-config:5150\"");
///
/// let value = toml::Value::Boolean(true);
/// assert_eq!(format_toml_value(&value), "true");
/// ```
pub fn format_toml_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(arr) => format!("[{}]", arr.len()),
        Value::Table(table) => format!("{{{}}}", table.len()),
    }
}
