use std::path::Path;

use nlsh_interpreter::CommandName;
use nlsh_interpreter::Invocation;
use nlsh_interpreter::RECURSIVE_FLAG;
use tracing::debug;

use crate::fs;
use crate::monitor;
use crate::system;

/// What a front end should do after running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Output(String),
    Failure(String),
    ClearScreen,
    Exit,
}

impl CommandOutcome {
    fn from_result<E: std::fmt::Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(output) => CommandOutcome::Output(output),
            Err(err) => {
                debug!(error = %err, "command failed");
                CommandOutcome::Failure(err.to_string())
            }
        }
    }
}

/// Runs one invocation against the filesystem and monitoring backends.
///
/// `history` answers the `history` command; `process_limit` caps `ps`.
pub fn execute(
    invocation: &Invocation,
    process_limit: usize,
    history: &[String],
) -> CommandOutcome {
    let args = &invocation.args;
    let first = args.first().map(Path::new);
    match invocation.command {
        CommandName::Pwd => CommandOutcome::from_result(fs::pwd()),
        CommandName::Ls => CommandOutcome::from_result(fs::ls(first.unwrap_or(Path::new(".")))),
        CommandName::Cd => match first {
            Some(path) => CommandOutcome::from_result(fs::cd(path)),
            None => missing("cd", "path"),
        },
        CommandName::Mkdir => match first {
            Some(path) => CommandOutcome::from_result(fs::mkdir(path)),
            None => missing("mkdir", "path"),
        },
        CommandName::Rm => match args.as_slice() {
            [flag, path, ..] if flag == RECURSIVE_FLAG => {
                CommandOutcome::from_result(fs::rm(Path::new(path), true))
            }
            [path, ..] => CommandOutcome::from_result(fs::rm(Path::new(path), false)),
            [] => missing("rm", "path"),
        },
        CommandName::Cat => match first {
            Some(path) => CommandOutcome::from_result(fs::cat(path)),
            None => missing("cat", "file"),
        },
        CommandName::Echo => CommandOutcome::Output(fs::echo(args)),
        CommandName::Cpu => CommandOutcome::Output(monitor::cpu_usage()),
        CommandName::Mem => CommandOutcome::Output(monitor::memory_usage()),
        CommandName::Ps => CommandOutcome::Output(monitor::processes(process_limit)),
        CommandName::Whoami => CommandOutcome::Output(system::whoami()),
        CommandName::Date => CommandOutcome::Output(system::date()),
        CommandName::Uptime => CommandOutcome::Output(monitor::uptime()),
        CommandName::Clear => CommandOutcome::ClearScreen,
        CommandName::History => CommandOutcome::Output(format_history(history)),
        CommandName::Help => CommandOutcome::Output(system::help_text()),
        CommandName::Exit => CommandOutcome::Exit,
    }
}

fn missing(command: &str, what: &str) -> CommandOutcome {
    CommandOutcome::Failure(format!("{command}: {what} required"))
}

fn format_history(history: &[String]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{}: {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
