use crate::command::CommandName;
use crate::phrase_table::PhraseTable;

/// Commands worth offering after `text` failed to resolve.
///
/// A command qualifies when any whitespace token of `text` occurs inside one
/// of its phrases. Each command appears once, in table order.
pub fn suggest(table: &PhraseTable, text: &str) -> Vec<CommandName> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut suggestions: Vec<CommandName> = Vec::new();
    for (command, phrase) in table.pairs() {
        if suggestions.contains(&command) {
            continue;
        }
        if tokens.iter().any(|token| phrase.contains(token)) {
            suggestions.push(command);
        }
    }
    suggestions
}
