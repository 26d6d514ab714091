use anyhow::Result;
use predicates::str::contains;
use pretty_assertions::assert_eq;
use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

fn nlsh_command(home: &TempDir) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("nlsh")?;
    cmd.env("NLSH_HOME", home.path()).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn interpret_prints_the_parsed_command() -> Result<()> {
    let home = TempDir::new()?;
    let output = nlsh_command(&home)?
        .args(["interpret", "where", "am", "i"])
        .output()?;
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        report,
        json!({
            "input": "where am i",
            "parsed": { "single": { "command": "pwd", "args": [] } },
            "suggestions": [],
        })
    );
    Ok(())
}

#[test]
fn interpret_expands_create_and_open() -> Result<()> {
    let home = TempDir::new()?;
    let output = nlsh_command(&home)?
        .args(["interpret", "create a folder called test and open it"])
        .output()?;

    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        report["parsed"],
        json!({ "multi": [
            { "command": "mkdir", "args": ["test"] },
            { "command": "cd", "args": ["test"] },
        ]})
    );
    Ok(())
}

#[test]
fn interpret_pretty_spans_lines() -> Result<()> {
    let home = TempDir::new()?;
    nlsh_command(&home)?
        .args(["interpret", "--pretty", "asdfgh"])
        .assert()
        .success()
        .stdout(contains("\n  \"parsed\": \"unresolved\""));
    Ok(())
}

#[test]
fn interpret_requires_text() -> Result<()> {
    let home = TempDir::new()?;
    nlsh_command(&home)?.arg("interpret").assert().failure();
    Ok(())
}
