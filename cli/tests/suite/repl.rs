use std::fs;

use anyhow::Result;
use predicates::str::contains;
use tempfile::TempDir;

fn nlsh_command(home: &TempDir) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("nlsh")?;
    cmd.env("NLSH_HOME", home.path())
        .env_remove("RUST_LOG")
        .args(["--color", "never"]);
    Ok(cmd)
}

#[test]
fn console_runs_commands_and_says_goodbye() -> Result<()> {
    let home = TempDir::new()?;
    let work = TempDir::new()?;
    nlsh_command(&home)?
        .current_dir(work.path())
        .write_stdin("create a folder called test and open it\nwhere am i\nexit\n")
        .assert()
        .success()
        .stdout(contains("→ Executing: mkdir test"))
        .stdout(contains("→ Executing: cd test"))
        .stdout(contains("Directory 'test' created."))
        .stdout(contains("Goodbye!"));
    assert!(work.path().join("test").is_dir());
    Ok(())
}

#[test]
fn console_exits_cleanly_at_end_of_input() -> Result<()> {
    let home = TempDir::new()?;
    nlsh_command(&home)?
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Goodbye!"));
    Ok(())
}

#[test]
fn config_can_turn_off_natural_language() -> Result<()> {
    let home = TempDir::new()?;
    fs::write(
        home.path().join("config.toml"),
        "[shell]\nnatural_language = false\n",
    )?;
    nlsh_command(&home)?
        .write_stdin("where am i\n")
        .assert()
        .success()
        .stdout(contains("where am i: command not found"));
    Ok(())
}

#[test]
fn broken_config_is_fatal() -> Result<()> {
    let home = TempDir::new()?;
    fs::write(home.path().join("config.toml"), "[shell\n")?;
    nlsh_command(&home)?
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("failed to parse"));
    Ok(())
}
