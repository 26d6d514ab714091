use once_cell::sync::Lazy;
use thiserror::Error;

use crate::command::CommandName;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseTableError {
    #[error("empty trigger phrase for `{command}`")]
    EmptyPhrase { command: &'static str },
    #[error("trigger phrase for `{command}` must be lowercase: {phrase:?}")]
    NotLowercase {
        command: &'static str,
        phrase: String,
    },
}

/// Trigger phrases for one command, in match order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    pub command: CommandName,
    pub phrases: Vec<String>,
}

impl PhraseEntry {
    pub fn new(command: CommandName, phrases: &[&str]) -> Self {
        Self {
            command,
            phrases: phrases.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Ordered mapping from command to trigger phrases.
///
/// Matching is literal substring containment and the first hit in
/// declaration order wins, so entry and phrase order are part of the
/// table's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

static BUILTIN: Lazy<PhraseTable> = Lazy::new(|| PhraseTable {
    entries: vec![
        PhraseEntry::new(
            CommandName::Pwd,
            &["where am i", "show current directory", "current path"],
        ),
        PhraseEntry::new(
            CommandName::Ls,
            &[
                "list files",
                "show files",
                "what's here",
                "list directory",
                "list contents",
            ],
        ),
        PhraseEntry::new(
            CommandName::Cd,
            &[
                "go to",
                "navigate to",
                "open folder",
                "enter directory",
                "change folder",
            ],
        ),
        PhraseEntry::new(
            CommandName::Mkdir,
            &[
                "create folder",
                "make folder",
                "create directory",
                "make directory",
            ],
        ),
        PhraseEntry::new(CommandName::Rm, &["delete", "remove", "erase", "trash"]),
        PhraseEntry::new(CommandName::Cat, &["show file", "read file", "view file"]),
        PhraseEntry::new(CommandName::Echo, &["say", "print", "write text"]),
        PhraseEntry::new(
            CommandName::Cpu,
            &["show cpu usage", "cpu usage", "processor usage"],
        ),
        PhraseEntry::new(
            CommandName::Mem,
            &["show memory usage", "memory usage", "ram usage"],
        ),
        PhraseEntry::new(
            CommandName::Ps,
            &[
                "show processes",
                "list processes",
                "running processes",
                "tasks",
            ],
        ),
        PhraseEntry::new(
            CommandName::Whoami,
            &["who am i", "current user", "show user"],
        ),
        PhraseEntry::new(
            CommandName::Date,
            &["show date", "what's the time", "time now"],
        ),
        PhraseEntry::new(CommandName::Clear, &["clear screen", "reset screen"]),
        PhraseEntry::new(CommandName::Help, &["help", "show help", "what can you do"]),
        PhraseEntry::new(CommandName::Exit, &["exit", "quit", "close terminal"]),
    ],
});

impl PhraseTable {
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self, PhraseTableError> {
        for entry in &entries {
            for phrase in &entry.phrases {
                if phrase.is_empty() {
                    return Err(PhraseTableError::EmptyPhrase {
                        command: entry.command.keyword(),
                    });
                }
                if phrase.chars().any(char::is_uppercase) {
                    return Err(PhraseTableError::NotLowercase {
                        command: entry.command.keyword(),
                        phrase: phrase.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with nlsh.
    pub fn builtin() -> &'static PhraseTable {
        &BUILTIN
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    /// Iterates `(command, phrase)` pairs in match order.
    pub fn pairs(&self) -> impl Iterator<Item = (CommandName, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .phrases
                .iter()
                .map(move |phrase| (entry.command, phrase.as_str()))
        })
    }

    /// First command with a phrase contained anywhere in `text`.
    pub fn find_match(&self, text: &str) -> Option<(CommandName, &str)> {
        self.pairs().find(|(_, phrase)| text.contains(phrase))
    }
}
