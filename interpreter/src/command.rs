use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Canonical commands understood by every nlsh front end.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommandName {
    // DO NOT REORDER! Help output lists commands in declaration order.
    Pwd,
    Ls,
    Cd,
    Mkdir,
    Rm,
    Cat,
    Echo,
    Cpu,
    Mem,
    Ps,
    Whoami,
    Date,
    Uptime,
    Clear,
    History,
    Help,
    #[strum(to_string = "exit", serialize = "quit")]
    Exit,
}

/// How the interpreter derives arguments once a phrase resolved to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgPolicy {
    /// Arguments in the text are ignored.
    None,
    /// A single file or folder name is required.
    Name,
    /// A name is required; existing directories are targeted recursively.
    NameWithDirectoryProbe,
}

impl CommandName {
    /// Keyword typed at the prompt to run this command directly.
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// Resolves a typed keyword (case-insensitive). `quit` is accepted for `exit`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        word.parse().ok()
    }

    pub fn arg_policy(self) -> ArgPolicy {
        match self {
            CommandName::Cd | CommandName::Mkdir | CommandName::Cat => ArgPolicy::Name,
            CommandName::Rm => ArgPolicy::NameWithDirectoryProbe,
            CommandName::Pwd
            | CommandName::Ls
            | CommandName::Echo
            | CommandName::Cpu
            | CommandName::Mem
            | CommandName::Ps
            | CommandName::Whoami
            | CommandName::Date
            | CommandName::Uptime
            | CommandName::Clear
            | CommandName::History
            | CommandName::Help
            | CommandName::Exit => ArgPolicy::None,
        }
    }

    /// User-visible description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            CommandName::Pwd => "print the current directory",
            CommandName::Ls => "list the contents of a directory",
            CommandName::Cd => "change the current directory",
            CommandName::Mkdir => "create a directory",
            CommandName::Rm => "remove a file, or a directory with -r",
            CommandName::Cat => "print the contents of a file",
            CommandName::Echo => "print the arguments",
            CommandName::Cpu => "show CPU usage",
            CommandName::Mem => "show memory usage",
            CommandName::Ps => "list the busiest processes",
            CommandName::Whoami => "print the current user",
            CommandName::Date => "print the local date and time",
            CommandName::Uptime => "show how long the system has been up",
            CommandName::Clear => "clear the screen",
            CommandName::History => "show previously entered lines",
            CommandName::Help => "show this help",
            CommandName::Exit => "leave the shell",
        }
    }
}

/// All commands paired with their keyword, in help order.
pub fn built_in_commands() -> Vec<(&'static str, CommandName)> {
    CommandName::iter().map(|c| (c.keyword(), c)).collect()
}
