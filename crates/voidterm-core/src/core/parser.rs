//! Input line parser.
//!
//! Lines are split on single spaces after trimming. There is no quoting, so
//! repeated spaces produce empty words; commands that re-join their arguments
//! (`echo`, `grep`) keep the original spacing that way.

/// A command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse a raw input line. Returns `None` for blank input.
pub fn parse_line(input: &str) -> Option<ParsedCommand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut words = trimmed.split(' ').map(str::to_string);
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}
