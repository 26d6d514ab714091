use nlsh_interpreter::CommandName;
use nlsh_interpreter::DirectoryProbe;
use nlsh_interpreter::Interpreter;
use nlsh_interpreter::ParsedCommand;
use serde::Serialize;

/// What the interpreter made of a request, as printed by `nlsh interpret`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretReport {
    pub input: String,
    pub parsed: ParsedCommand,
    /// Empty unless `parsed` is unresolved.
    pub suggestions: Vec<CommandName>,
}

pub fn interpret_report<P: DirectoryProbe>(
    interpreter: &Interpreter<'_, P>,
    input: &str,
) -> InterpretReport {
    let parsed = interpreter.interpret(input);
    let suggestions = if parsed.is_resolved() {
        Vec::new()
    } else {
        interpreter.suggest(input)
    };
    InterpretReport {
        input: input.to_string(),
        parsed,
        suggestions,
    }
}
