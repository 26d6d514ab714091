use nlsh_interpreter::CommandName;
use nlsh_interpreter::Invocation;

/// Parses a line typed as a plain command (`ls src`, `rm -r build`).
///
/// Returns `None` when the first word is not a known keyword, leaving the
/// line to the natural-language interpreter. Arguments keep their case.
pub fn parse_literal(line: &str) -> Option<Invocation> {
    let mut parts = line.split_whitespace();
    let command = CommandName::from_keyword(parts.next()?)?;
    Some(Invocation::new(command, parts.map(str::to_string).collect()))
}
