use std::io;
use std::io::BufRead;
use std::io::Write;

use nlsh_commands::CommandOutcome;
use nlsh_commands::Resolution;
use nlsh_commands::Shell;
use nlsh_interpreter::CommandName;
use nlsh_interpreter::DirectoryProbe;
use nlsh_interpreter::Invocation;
use nlsh_interpreter::RECURSIVE_FLAG;
use owo_colors::OwoColorize;
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Applies ANSI colors only when the terminal wants them.
#[derive(Debug, Clone, Copy)]
struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(self, text: &str, style: fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }

    fn cyan(self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    fn green(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    fn yellow(self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    fn red(self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn magenta(self, text: &str) -> String {
        self.paint(text, |t| t.magenta().to_string())
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive read-eval-print loop over any line source.
pub struct Console<P, R, W> {
    shell: Shell<P>,
    input: R,
    output: W,
    palette: Palette,
}

impl<P: DirectoryProbe, R: BufRead, W: Write> Console<P, R, W> {
    pub fn new(shell: Shell<P>, input: R, output: W, color: bool) -> Self {
        Self {
            shell,
            input,
            output,
            palette: Palette { enabled: color },
        }
    }

    /// Runs until `exit`, `quit`, or end of input.
    pub fn run(mut self) -> io::Result<()> {
        self.banner()?;
        loop {
            let prompt = format!("{} > ", current_dir_display());
            write!(self.output, "{}", self.palette.cyan(&prompt))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.palette.green("Goodbye!"))?;
                return Ok(());
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            self.shell.record(line);
            if let Flow::Exit = self.handle_line(line)? {
                return Ok(());
            }
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.palette.green("=== nlsh ==="))?;
        if self.shell.settings().natural_language {
            writeln!(self.output, "You can type commands OR natural language.")?;
        }
        writeln!(
            self.output,
            "Type 'help' to see available commands. Type 'exit' to quit.\n"
        )
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match self.shell.resolve(line) {
            None => Ok(Flow::Continue),
            Some(Resolution::Literal(invocation)) => self.run_invocation(&invocation),
            Some(Resolution::Interpreted(invocations)) => {
                for invocation in &invocations {
                    let banner = format!("→ Executing: {invocation}");
                    writeln!(self.output, "{}", self.palette.magenta(&banner))?;
                    if let Flow::Exit = self.run_invocation(invocation)? {
                        return Ok(Flow::Exit);
                    }
                }
                Ok(Flow::Continue)
            }
            Some(Resolution::Unresolved { suggestions }) => {
                if !self.shell.settings().natural_language {
                    let message = format!("{line}: command not found");
                    writeln!(self.output, "{}", self.palette.red(&message))?;
                    return Ok(Flow::Continue);
                }
                let message = format!("Sorry, I didn't understand '{line}'.");
                writeln!(self.output, "{}", self.palette.yellow(&message))?;
                if !suggestions.is_empty() {
                    let keywords: Vec<&str> =
                        suggestions.iter().map(|command| command.keyword()).collect();
                    let hint = format!("Try: {}", keywords.join(", "));
                    writeln!(self.output, "{}", self.palette.cyan(&hint))?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn run_invocation(&mut self, invocation: &Invocation) -> io::Result<Flow> {
        if let Some(target) = recursive_removal_target(invocation)
            && self.shell.settings().confirm_recursive_remove
            && !self.confirm(&format!("Delete '{target}'? (y/n): "))?
        {
            debug!(path = target, "recursive removal declined");
            return Ok(Flow::Continue);
        }

        match self.shell.execute(invocation) {
            CommandOutcome::Output(text) => {
                if !text.is_empty() {
                    writeln!(self.output, "{text}")?;
                }
            }
            CommandOutcome::Failure(message) => {
                writeln!(self.output, "{}", self.palette.red(&message))?;
            }
            CommandOutcome::ClearScreen => {
                write!(self.output, "{CLEAR_SCREEN}")?;
                self.output.flush()?;
            }
            CommandOutcome::Exit => {
                writeln!(self.output, "{}", self.palette.green("Goodbye!"))?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", self.palette.yellow(question))?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn recursive_removal_target(invocation: &Invocation) -> Option<&str> {
    if invocation.command != CommandName::Rm {
        return None;
    }
    match invocation.args.as_slice() {
        [flag, target, ..] if flag == RECURSIVE_FLAG => Some(target.as_str()),
        _ => None,
    }
}

fn current_dir_display() -> String {
    std::env::current_dir()
        .map(|cwd| cwd.display().to_string())
        .unwrap_or_else(|_| "?".to_string())
}
