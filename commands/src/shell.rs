use nlsh_interpreter::CommandName;
use nlsh_interpreter::DirectoryProbe;
use nlsh_interpreter::FsDirectoryProbe;
use nlsh_interpreter::Interpreter;
use nlsh_interpreter::Invocation;
use tracing::debug;

use crate::dispatch::CommandOutcome;
use crate::dispatch::execute;
use crate::literal::parse_literal;

/// Knobs shared by the console and HTTP front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// Fall back to the phrase interpreter for non-command input.
    pub natural_language: bool,
    /// Ask before a recursive `rm` on the console.
    pub confirm_recursive_remove: bool,
    /// Rows shown by `ps`.
    pub process_limit: usize,
    /// Suggestions shown after an unresolved request.
    pub max_suggestions: usize,
    /// Lines kept for `history`.
    pub history_size: usize,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            natural_language: true,
            confirm_recursive_remove: true,
            process_limit: 10,
            max_suggestions: 3,
            history_size: 1000,
        }
    }
}

/// How an input line maps onto commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The line started with a command keyword.
    Literal(Invocation),
    /// The interpreter translated the line into one or more commands.
    Interpreted(Vec<Invocation>),
    Unresolved { suggestions: Vec<CommandName> },
}

/// Per-session state: the interpreter, settings, and entered lines.
pub struct Shell<P = FsDirectoryProbe> {
    interpreter: Interpreter<'static, P>,
    settings: ShellSettings,
    history: Vec<String>,
}

impl Shell<FsDirectoryProbe> {
    pub fn new(settings: ShellSettings) -> Self {
        Self::with_interpreter(Interpreter::new(), settings)
    }
}

impl<P: DirectoryProbe> Shell<P> {
    pub fn with_interpreter(interpreter: Interpreter<'static, P>, settings: ShellSettings) -> Self {
        Self {
            interpreter,
            settings,
            history: Vec::new(),
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Appends a line to the history, dropping the oldest past the limit.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.settings.history_size == 0 {
            return;
        }
        self.history.push(line.to_string());
        let overflow = self.history.len().saturating_sub(self.settings.history_size);
        self.history.drain(..overflow);
    }

    /// Resolves a line; blank input yields `None`.
    pub fn resolve(&self, line: &str) -> Option<Resolution> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(invocation) = parse_literal(line) {
            return Some(Resolution::Literal(invocation));
        }

        if !self.settings.natural_language {
            return Some(Resolution::Unresolved {
                suggestions: Vec::new(),
            });
        }

        let parsed = self.interpreter.interpret(line);
        debug!(input = line, ?parsed, "interpreted input");
        if parsed.is_resolved() {
            return Some(Resolution::Interpreted(parsed.into_invocations()));
        }

        let mut suggestions = self.interpreter.suggest(line);
        suggestions.truncate(self.settings.max_suggestions);
        Some(Resolution::Unresolved { suggestions })
    }

    pub fn execute(&self, invocation: &Invocation) -> CommandOutcome {
        execute(invocation, self.settings.process_limit, &self.history)
    }
}
