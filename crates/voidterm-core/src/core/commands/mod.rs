//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute` for running one input line against a session
//!
//! # Architecture
//!
//! A line is split into words by the parser, turned into a `Command`
//! by `Command::parse`, and run by `execute_command`. The result's lines
//! are appended to the transcript and its effect (if any) is queued for
//! the host.

mod execute;
mod filters;
mod result;

pub use execute::execute_command;
pub use filters::grep_lines;
pub use result::CommandResult;

use std::fmt;

use crate::core::parser::parse_line;
use crate::core::{TerminalSession, VirtualFs};
use crate::error::CommandError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; resolution and validation happen during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Request to the text-generation collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum AiRequest {
    Init,
    Chat(String),
}

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Ls(Option<PathArg>),
    /// Change directory; no argument means home
    Cd(PathArg),
    Pwd,
    Cat(PathArg),
    Clear,
    Tree(Option<PathArg>),
    Echo(String),
    Grep {
        pattern: String,
        path: PathArg,
    },
    Touch(Vec<PathArg>),
    Mkdir(Vec<PathArg>),
    Rm(Vec<PathArg>),
    Mv {
        src: PathArg,
        dst: PathArg,
    },
    Cp {
        src: PathArg,
        dst: PathArg,
    },
    /// Raw speed argument, validated on execution
    Warp(Option<String>),
    Glitch,
    Void,
    Pulse,
    Snake,
    Ai(Option<AiRequest>),
    Margo,
    Help,
    /// Recognized command with bad arguments
    Invalid(CommandError),
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively; arguments are kept as typed.
    /// Empty arguments (from repeated spaces) count as missing operands.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let operands: Vec<PathArg> = args
            .iter()
            .filter(|a| !a.is_empty())
            .map(PathArg::new)
            .collect();
        let first = args.first().filter(|a| !a.is_empty());

        match name.to_lowercase().as_str() {
            "ls" => Self::Ls(first.map(PathArg::new)),
            "cd" => Self::Cd(first.map(PathArg::new).unwrap_or_else(|| PathArg::new("~"))),
            "pwd" => Self::Pwd,
            "cat" => match first {
                Some(file) => Self::Cat(PathArg::new(file)),
                None => Self::Invalid(CommandError::usage("cat: missing file operand")),
            },
            "clear" => Self::Clear,
            "tree" => Self::Tree(first.map(PathArg::new)),
            "echo" => Self::Echo(args.join(" ")),
            "grep" => {
                let path = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
                match first {
                    Some(pattern) if !path.is_empty() => Self::Grep {
                        pattern: pattern.clone(),
                        path: PathArg::new(path),
                    },
                    _ => Self::Invalid(CommandError::usage("grep: missing operands")),
                }
            }
            "touch" if operands.is_empty() => {
                Self::Invalid(CommandError::usage("touch: missing file operand"))
            }
            "touch" => Self::Touch(operands),
            "mkdir" if operands.is_empty() => {
                Self::Invalid(CommandError::usage("mkdir: missing operand"))
            }
            "mkdir" => Self::Mkdir(operands),
            "rm" if operands.is_empty() => Self::Invalid(CommandError::usage("rm: missing operand")),
            "rm" => Self::Rm(operands),
            "mv" => match Self::two_operands("mv", operands) {
                Ok((src, dst)) => Self::Mv { src, dst },
                Err(err) => Self::Invalid(err),
            },
            "cp" => match Self::two_operands("cp", operands) {
                Ok((src, dst)) => Self::Cp { src, dst },
                Err(err) => Self::Invalid(err),
            },
            "warp" => Self::Warp(first.cloned()),
            "glitch" => Self::Glitch,
            "void" => Self::Void,
            "pulse" => Self::Pulse,
            "snake" => Self::Snake,
            "ai" => match args.first().map(String::as_str) {
                Some("init") => Self::Ai(Some(AiRequest::Init)),
                Some(_) => Self::Ai(Some(AiRequest::Chat(args.join(" ")))),
                None => Self::Ai(None),
            },
            "margo" => Self::Margo,
            "help" => Self::Help,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Split `SOURCE DEST` operands for `mv` and `cp`.
    fn two_operands(
        cmd: &str,
        operands: Vec<PathArg>,
    ) -> Result<(PathArg, PathArg), CommandError> {
        let mut iter = operands.into_iter();
        match (iter.next(), iter.next()) {
            (Some(src), Some(dst)) => Ok((src, dst)),
            (Some(src), None) => Err(CommandError::usage(format!(
                "{}: missing destination file operand after '{}'",
                cmd, src
            ))),
            _ => Err(CommandError::usage(format!("{}: missing file operand", cmd))),
        }
    }
}

// =============================================================================
// Line Execution
// =============================================================================

/// Run one input line against the session.
///
/// Output lines are appended to the transcript and any effect is queued.
/// Blank lines do nothing. Errors never escape: each becomes one line.
pub fn execute(line: &str, session: &mut TerminalSession, fs: &mut VirtualFs) {
    let Some(parsed) = parse_line(line) else {
        return;
    };

    let cmd = Command::parse(&parsed.name, &parsed.args);
    let result = execute_command(cmd, session, fs);
    session.apply(result);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(Command::parse("ls", &[]), Command::Ls(None));
        assert!(matches!(
            Command::parse("ls", &args(&["projects"])),
            Command::Ls(Some(ref p)) if p == "projects"
        ));
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(
            Command::parse("cd", &[]),
            Command::Cd(ref p) if p == "~"
        ));
        assert!(matches!(
            Command::parse("cd", &args(&[""])),
            Command::Cd(ref p) if p == "~"
        ));
        assert!(matches!(
            Command::parse("cd", &args(&["/hidden"])),
            Command::Cd(ref p) if p == "/hidden"
        ));
    }

    #[test]
    fn test_parse_cat_missing_file() {
        assert_eq!(
            Command::parse("cat", &[]),
            Command::Invalid(CommandError::usage("cat: missing file operand"))
        );
    }

    #[test]
    fn test_parse_echo_keeps_spacing() {
        assert_eq!(
            Command::parse("echo", &args(&["a", "", "b"])),
            Command::Echo("a  b".to_string())
        );
        assert_eq!(Command::parse("echo", &[]), Command::Echo(String::new()));
    }

    #[test]
    fn test_parse_grep() {
        assert!(matches!(
            Command::parse("grep", &args(&["pets", "projects/startup_ideas.txt"])),
            Command::Grep { ref pattern, ref path }
                if pattern == "pets" && path == "projects/startup_ideas.txt"
        ));
        assert_eq!(
            Command::parse("grep", &args(&["pets"])),
            Command::Invalid(CommandError::usage("grep: missing operands"))
        );
        assert_eq!(
            Command::parse("grep", &[]),
            Command::Invalid(CommandError::usage("grep: missing operands"))
        );
    }

    #[test]
    fn test_parse_file_commands() {
        assert!(matches!(
            Command::parse("touch", &args(&["a", "b"])),
            Command::Touch(ref ops) if ops.len() == 2
        ));
        assert!(matches!(Command::parse("mkdir", &[]), Command::Invalid(_)));
        assert!(matches!(Command::parse("rm", &args(&[""])), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_mv_cp_operands() {
        assert!(matches!(
            Command::parse("mv", &args(&["a", "b"])),
            Command::Mv { ref src, ref dst } if src == "a" && dst == "b"
        ));
        assert_eq!(
            Command::parse("mv", &args(&["a"])),
            Command::Invalid(CommandError::usage(
                "mv: missing destination file operand after 'a'"
            ))
        );
        assert_eq!(
            Command::parse("cp", &[]),
            Command::Invalid(CommandError::usage("cp: missing file operand"))
        );
    }

    #[test]
    fn test_parse_ai() {
        assert_eq!(Command::parse("ai", &[]), Command::Ai(None));
        assert_eq!(
            Command::parse("ai", &args(&["init"])),
            Command::Ai(Some(AiRequest::Init))
        );
        assert_eq!(
            Command::parse("ai", &args(&["hello", "there"])),
            Command::Ai(Some(AiRequest::Chat("hello there".to_string())))
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse("LS", &[]), Command::Ls(None));
        assert_eq!(Command::parse("HELP", &[]), Command::Help);
        assert_eq!(Command::parse("CleAr", &[]), Command::Clear);
    }

    #[test]
    fn test_parse_arguments_keep_case() {
        assert!(matches!(
            Command::parse("CAT", &args(&["Welcome.TXT"])),
            Command::Cat(ref p) if p == "Welcome.TXT"
        ));
    }

    #[test]
    fn test_parse_unknown_is_lowercased() {
        assert_eq!(
            Command::parse("FooBar", &[]),
            Command::Unknown("foobar".to_string())
        );
    }
}
