//! Line classification: sentinel, blank, or free text.

use crate::constants::SENTINELS;

/// What a single line of user input asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// `quit` / `exit` in any case.
    Quit,
    /// Empty or whitespace-only; re-prompt.
    Blank,
    /// Anything else, forwarded to every agent unchanged.
    Text(&'a str),
}

/// Drop the trailing `\n` or `\r\n` that `read_line` keeps.
pub fn strip_line_ending(raw: &str) -> &str {
    raw.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(raw)
}

/// Classify a line that has already had its line ending removed.
///
/// The sentinel check runs before the blank check and compares the whole
/// line, so `" quit"` is free text.
pub fn classify(line: &str) -> Input<'_> {
    let lowered = line.to_lowercase();
    if SENTINELS.contains(&lowered.as_str()) {
        return Input::Quit;
    }
    if line.trim().is_empty() {
        return Input::Blank;
    }
    Input::Text(line)
}
