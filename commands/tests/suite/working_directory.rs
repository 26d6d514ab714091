use std::env;
use std::path::PathBuf;

use anyhow::Result;
use nlsh_commands::FsError;
use nlsh_commands::fs;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::TempDir;

/// Restores the process working directory when dropped.
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &TempDir) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir.path())?;
        Ok(Self(previous))
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial(cwd)]
fn cd_moves_the_process_and_pwd_follows() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::create_dir(dir.path().join("docs"))?;
    let _guard = CwdGuard::enter(&dir)?;

    let message = fs::cd("docs".as_ref())?;
    let cwd = env::current_dir()?;
    assert_eq!(message, format!("Changed directory to {}", cwd.display()));
    assert_eq!(fs::pwd()?, cwd.display().to_string());
    assert!(cwd.ends_with("docs"));
    Ok(())
}

#[test]
#[serial(cwd)]
fn cd_into_a_file_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("notes.txt"), "x")?;
    let _guard = CwdGuard::enter(&dir)?;

    let err = fs::cd("notes.txt".as_ref()).expect_err("cd into file");
    assert!(matches!(err, FsError::NotADirectory { .. }), "{err:?}");
    assert_eq!(err.to_string(), "cd: not a directory: notes.txt");
    Ok(())
}

#[test]
#[serial(cwd)]
fn cd_to_a_missing_directory_leaves_cwd_alone() -> Result<()> {
    let dir = TempDir::new()?;
    let _guard = CwdGuard::enter(&dir)?;
    let before = env::current_dir()?;

    let err = fs::cd("nowhere".as_ref()).expect_err("missing dir");
    assert_eq!(err.to_string(), "cd: no such file or directory: nowhere");
    assert_eq!(env::current_dir()?, before);
    Ok(())
}
