//! Command execution result type.

use crate::error::CommandError;
use crate::models::Effect;

/// Result of executing a command.
///
/// Commands produce output lines and can optionally request a host effect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Lines to append to the transcript
    pub output: Vec<String>,
    /// Optional request for the host (e.g., start the snake game)
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<String>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result with a single output line.
    pub fn line(line: impl Into<String>) -> Self {
        Self::output(vec![line.into()])
    }

    /// Attach an effect request.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        Self::line(err.to_string())
    }
}
