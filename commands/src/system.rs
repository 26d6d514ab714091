use std::env;

use chrono::Local;
use nlsh_interpreter::built_in_commands;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NATURAL_LANGUAGE_EXAMPLES: &[&str] = &[
    "create a folder called test and open it",
    "show me the files",
    "where am i",
    "delete myproject",
    "what's the cpu usage",
];

/// Login name from the environment, or `unknown`.
pub fn whoami() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|value| !value.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn date() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

pub fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for (keyword, command) in built_in_commands() {
        lines.push(format!("  {keyword:<8} {}", command.description()));
    }
    lines.push(String::new());
    lines.push("You can also use natural language:".to_string());
    for example in NATURAL_LANGUAGE_EXAMPLES {
        lines.push(format!("  \"{example}\""));
    }
    lines.join("\n")
}
