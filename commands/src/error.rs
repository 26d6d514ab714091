use std::io;
use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsError>;

/// Filesystem failures, displayed the way a shell would print them.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{}", describe(.command, .path, "No such file or directory"))]
    NotFound { command: &'static str, path: String },
    #[error("{}", describe(.command, .path, "Not a directory"))]
    NotADirectory { command: &'static str, path: String },
    #[error("{command}: {path}: Is a directory")]
    IsADirectory { command: &'static str, path: String },
    #[error("rm: '{path}' is a directory (use rm -r to remove directories)")]
    DirectoryNeedsRecursive { path: String },
    #[error("{command}: cannot create directory '{path}': File exists")]
    AlreadyExists { command: &'static str, path: String },
    #[error("{command}: permission denied: {path}")]
    PermissionDenied { command: &'static str, path: String },
    #[error("{command}: error: {source}")]
    Io {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

/// `cd`, `ls` and `rm` phrase a bad path their own way; the rest use
/// `cmd: path: reason`.
fn describe(command: &str, path: &str, reason: &str) -> String {
    match command {
        "cd" => format!("cd: {}: {path}", reason.to_lowercase()),
        "ls" => format!("ls: cannot access '{path}': {reason}"),
        "rm" => format!("rm: cannot remove '{path}': {reason}"),
        _ => format!("{command}: {path}: {reason}"),
    }
}

impl FsError {
    /// Maps an I/O failure on `path` to the matching shell-style error.
    pub(crate) fn from_io(command: &'static str, path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { command, path },
            io::ErrorKind::NotADirectory => FsError::NotADirectory { command, path },
            io::ErrorKind::IsADirectory => FsError::IsADirectory { command, path },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { command, path },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { command, path },
            _ => FsError::Io { command, source },
        }
    }
}
