//! Natural-language front door for nlsh.
//!
//! Free-form requests such as "where am i" or "create a folder called docs
//! and open it" are matched against a fixed phrase table and turned into the
//! same [`Invocation`]s a user would get by typing the canonical command.

mod command;
mod extract;
mod interpreter;
mod phrase_table;
mod probe;
mod suggest;

pub use command::ArgPolicy;
pub use command::CommandName;
pub use command::built_in_commands;
pub use extract::extract_name;
pub use interpreter::Interpreter;
pub use interpreter::Invocation;
pub use interpreter::ParsedCommand;
pub use interpreter::RECURSIVE_FLAG;
pub use phrase_table::PhraseEntry;
pub use phrase_table::PhraseTable;
pub use phrase_table::PhraseTableError;
pub use probe::DirectoryProbe;
pub use probe::FsDirectoryProbe;
pub use suggest::suggest;
