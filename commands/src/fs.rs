use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FsError;
use crate::error::Result;

pub fn pwd() -> Result<String> {
    env::current_dir()
        .map(|cwd| cwd.display().to_string())
        .map_err(|source| FsError::Io {
            command: "pwd",
            source,
        })
}

/// Sorted directory listing with directories marked by a trailing `/`.
pub fn ls(path: &Path) -> Result<String> {
    let entries = fs::read_dir(path).map_err(|err| FsError::from_io("ls", path, err))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| FsError::from_io("ls", path, err))?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() {
            name.push('/');
        }
        names.push(name);
    }

    if names.is_empty() {
        return Ok("(empty)".to_string());
    }
    names.sort();
    Ok(names.join("\n"))
}

/// Changes the process working directory and reports where it landed.
pub fn cd(path: &Path) -> Result<String> {
    env::set_current_dir(path).map_err(|err| FsError::from_io("cd", path, err))?;
    let cwd = pwd()?;
    debug!(cwd = %cwd, "changed directory");
    Ok(format!("Changed directory to {cwd}"))
}

/// Creates `path` along with any missing parents; an existing path is an error.
pub fn mkdir(path: &Path) -> Result<String> {
    if path.exists() {
        return Err(FsError::AlreadyExists {
            command: "mkdir",
            path: path.display().to_string(),
        });
    }
    fs::create_dir_all(path).map_err(|err| FsError::from_io("mkdir", path, err))?;
    Ok(format!("Directory '{}' created.", path.display()))
}

/// Removes a file or symlink, or a directory tree when `recursive` is set.
pub fn rm(path: &Path, recursive: bool) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|err| FsError::from_io("rm", path, err))?;

    if !metadata.is_dir() {
        fs::remove_file(path).map_err(|err| FsError::from_io("rm", path, err))?;
        return Ok(format!("Removed file '{}'", path.display()));
    }

    if !recursive {
        return Err(FsError::DirectoryNeedsRecursive {
            path: path.display().to_string(),
        });
    }
    fs::remove_dir_all(path).map_err(|err| FsError::from_io("rm", path, err))?;
    Ok(format!("Removed directory '{}' (recursive)", path.display()))
}

/// File contents with invalid UTF-8 replaced.
pub fn cat(path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(FsError::IsADirectory {
            command: "cat",
            path: path.display().to_string(),
        });
    }
    let bytes = fs::read(path).map_err(|err| FsError::from_io("cat", path, err))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn echo(args: &[String]) -> String {
    args.join(" ")
}
