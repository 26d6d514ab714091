use std::fs;

use nlsh_interpreter::CommandName;
use nlsh_interpreter::DirectoryProbe;
use nlsh_interpreter::FsDirectoryProbe;
use nlsh_interpreter::Interpreter;
use nlsh_interpreter::Invocation;
use nlsh_interpreter::ParsedCommand;
use nlsh_interpreter::PhraseTable;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn fs_probe_distinguishes_directories_from_files() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    let dir = root.path().join("project");
    let file = root.path().join("notes.txt");
    fs::create_dir(&dir)?;
    fs::write(&file, "hello")?;

    let probe = FsDirectoryProbe;
    assert!(probe.is_dir(&dir.to_string_lossy()));
    assert!(!probe.is_dir(&file.to_string_lossy()));
    assert!(!probe.is_dir(&root.path().join("missing").to_string_lossy()));
    Ok(())
}

#[test]
fn removal_follows_filesystem_state() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    let base = root.path().to_path_buf();
    let interpreter =
        Interpreter::with_table(PhraseTable::builtin(), |name: &str| base.join(name).is_dir());

    assert_eq!(
        interpreter.interpret("delete myproject"),
        ParsedCommand::Single(Invocation::new(
            CommandName::Rm,
            vec!["myproject".to_string()]
        ))
    );

    fs::create_dir(root.path().join("myproject"))?;
    assert_eq!(
        interpreter.interpret("delete myproject"),
        ParsedCommand::Single(Invocation::new(
            CommandName::Rm,
            vec!["-r".to_string(), "myproject".to_string()]
        ))
    );
    Ok(())
}
