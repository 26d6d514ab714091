use std::env;

use anyhow::Result;
use nlsh_commands::CommandOutcome;
use nlsh_commands::Resolution;
use nlsh_commands::Shell;
use nlsh_commands::ShellSettings;
use nlsh_interpreter::CommandName;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::TempDir;

fn run_line(shell: &mut Shell, line: &str) -> Vec<CommandOutcome> {
    shell.record(line);
    match shell.resolve(line) {
        Some(Resolution::Literal(invocation)) => vec![shell.execute(&invocation)],
        Some(Resolution::Interpreted(invocations)) => invocations
            .iter()
            .map(|invocation| shell.execute(invocation))
            .collect(),
        Some(Resolution::Unresolved { .. }) | None => Vec::new(),
    }
}

#[test]
#[serial(cwd)]
fn create_and_open_then_clean_up() -> Result<()> {
    let dir = TempDir::new()?;
    let previous = env::current_dir()?;
    env::set_current_dir(dir.path())?;

    let mut shell = Shell::new(ShellSettings::default());
    let outcomes = run_line(&mut shell, "create a folder called test and open it");
    let inside = env::current_dir()?;
    assert_eq!(
        outcomes,
        vec![
            CommandOutcome::Output("Directory 'test' created.".to_string()),
            CommandOutcome::Output(format!("Changed directory to {}", inside.display())),
        ]
    );
    assert!(inside.ends_with("test"));

    env::set_current_dir(dir.path())?;
    std::fs::write(dir.path().join("notes.txt"), "hello")?;
    assert_eq!(
        run_line(&mut shell, "show file notes.txt"),
        vec![CommandOutcome::Output("hello".to_string())]
    );

    // The probe sees `test` is a directory, so the removal is recursive.
    assert_eq!(
        shell.resolve("delete test"),
        Some(Resolution::Interpreted(vec![nlsh_interpreter::Invocation::new(
            CommandName::Rm,
            vec!["-r".to_string(), "test".to_string()],
        )]))
    );
    run_line(&mut shell, "delete test");
    assert!(!dir.path().join("test").exists());

    assert_eq!(
        run_line(&mut shell, "history"),
        vec![CommandOutcome::Output(
            [
                "1: create a folder called test and open it",
                "2: show file notes.txt",
                "3: delete test",
                "4: history",
            ]
            .join("\n")
        )]
    );

    env::set_current_dir(previous)?;
    Ok(())
}

#[test]
fn unresolved_lines_offer_suggestions() {
    let shell = Shell::new(ShellSettings {
        max_suggestions: 2,
        ..ShellSettings::default()
    });
    assert_eq!(
        shell.resolve("erase"),
        Some(Resolution::Unresolved {
            suggestions: vec![CommandName::Rm]
        })
    );
    assert_eq!(
        shell.resolve("xyzzy plugh"),
        Some(Resolution::Unresolved {
            suggestions: Vec::new()
        })
    );
}
