/// Words that explicitly introduce a name ("a folder called X").
const NAMING_MARKERS: &[&str] = &["called", "named"];

/// Words that introduce a name by its kind ("open folder X").
const TARGET_NOUNS: &[&str] = &["folder", "directory", "file"];

/// Picks the file or folder name out of a free-form request.
///
/// The token after `called`/`named` wins; failing that, the token after
/// `folder`/`directory`/`file`. Each group is scanned left to right. With no
/// keyword, the last token is used when there is more than one.
///
/// A marker later in the text beats a noun earlier in it, so "open folder
/// named x" yields `x` and "create a file called notes.txt" yields
/// `notes.txt`, where a single first-keyword-wins scan would return the
/// marker word itself.
pub fn extract_name(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if let Some(name) =
        token_after(&tokens, NAMING_MARKERS).or_else(|| token_after(&tokens, TARGET_NOUNS))
    {
        return Some(name.to_string());
    }

    match tokens.as_slice() {
        [_, .., last] => Some((*last).to_string()),
        _ => None,
    }
}

fn token_after<'a>(tokens: &[&'a str], keywords: &[&str]) -> Option<&'a str> {
    tokens
        .windows(2)
        .find(|pair| keywords.iter().any(|keyword| *keyword == pair[0]))
        .map(|pair| pair[1])
}
