use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::command::ArgPolicy;
use crate::command::CommandName;
use crate::extract::extract_name;
use crate::phrase_table::PhraseTable;
use crate::probe::DirectoryProbe;
use crate::probe::FsDirectoryProbe;
use crate::suggest::suggest;

/// Flag passed to `rm` when the target is a directory.
pub const RECURSIVE_FLAG: &str = "-r";

/// A canonical command and the arguments it should run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub command: CommandName,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(command: CommandName, args: Vec<String>) -> Self {
        Self { command, args }
    }

    pub fn bare(command: CommandName) -> Self {
        Self::new(command, Vec::new())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command.keyword())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of interpreting one line of free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedCommand {
    Single(Invocation),
    /// Several commands to run in order, e.g. create a folder and enter it.
    Multi(Vec<Invocation>),
    Unresolved,
}

impl ParsedCommand {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ParsedCommand::Unresolved)
    }

    /// Flattens the result into the invocations to run, in order.
    pub fn into_invocations(self) -> Vec<Invocation> {
        match self {
            ParsedCommand::Single(invocation) => vec![invocation],
            ParsedCommand::Multi(invocations) => invocations,
            ParsedCommand::Unresolved => Vec::new(),
        }
    }
}

/// Maps informal requests ("where am i", "delete old_logs") onto commands.
///
/// Holds no mutable state; the directory probe is the only side channel.
#[derive(Debug, Clone)]
pub struct Interpreter<'t, P = FsDirectoryProbe> {
    table: &'t PhraseTable,
    probe: P,
}

impl Interpreter<'static, FsDirectoryProbe> {
    /// Built-in phrase table, probing the real filesystem.
    pub fn new() -> Self {
        Self::with_table(PhraseTable::builtin(), FsDirectoryProbe)
    }
}

impl Default for Interpreter<'static, FsDirectoryProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, P: DirectoryProbe> Interpreter<'t, P> {
    pub fn with_table(table: &'t PhraseTable, probe: P) -> Self {
        Self { table, probe }
    }

    pub fn table(&self) -> &'t PhraseTable {
        self.table
    }

    pub fn interpret(&self, raw: &str) -> ParsedCommand {
        let text = raw.trim().to_lowercase();

        if let Some(parsed) = self.multi_step(&text) {
            return parsed;
        }

        if let Some((command, phrase)) = self.table.find_match(&text) {
            debug!(command = command.keyword(), phrase, "matched phrase");
            return self.resolve_args(command, &text);
        }

        self.prefix_fallback(&text).unwrap_or(ParsedCommand::Unresolved)
    }

    /// Commands to offer when `raw` did not resolve.
    pub fn suggest(&self, raw: &str) -> Vec<CommandName> {
        suggest(self.table, raw)
    }

    /// "create ... and open ..." becomes mkdir followed by cd. Without a name
    /// this falls through to the phrase scan rather than failing.
    fn multi_step(&self, text: &str) -> Option<ParsedCommand> {
        if !(text.contains("create") && text.contains("and open")) {
            return None;
        }
        let Some(name) = extract_name(text) else {
            trace!("create-and-open request without a name");
            return None;
        };
        debug!(name = %name, "create-and-open request");
        Some(ParsedCommand::Multi(vec![
            Invocation::new(CommandName::Mkdir, vec![name.clone()]),
            Invocation::new(CommandName::Cd, vec![name]),
        ]))
    }

    fn resolve_args(&self, command: CommandName, text: &str) -> ParsedCommand {
        match command.arg_policy() {
            ArgPolicy::None => ParsedCommand::Single(Invocation::bare(command)),
            ArgPolicy::Name => match extract_name(text) {
                Some(name) => ParsedCommand::Single(Invocation::new(command, vec![name])),
                None => ParsedCommand::Unresolved,
            },
            ArgPolicy::NameWithDirectoryProbe => match extract_name(text) {
                Some(name) => ParsedCommand::Single(self.removal(command, name)),
                None => ParsedCommand::Unresolved,
            },
        }
    }

    fn prefix_fallback(&self, text: &str) -> Option<ParsedCommand> {
        if text.starts_with("create")
            && let Some(name) = extract_name(text)
        {
            return Some(ParsedCommand::Single(Invocation::new(
                CommandName::Mkdir,
                vec![name],
            )));
        }

        if (text.starts_with("remove") || text.starts_with("delete"))
            && let Some(name) = extract_name(text)
        {
            return Some(ParsedCommand::Single(self.removal(CommandName::Rm, name)));
        }

        None
    }

    fn removal(&self, command: CommandName, name: String) -> Invocation {
        if self.probe.is_dir(&name) {
            Invocation::new(command, vec![RECURSIVE_FLAG.to_string(), name])
        } else {
            Invocation::new(command, vec![name])
        }
    }
}
