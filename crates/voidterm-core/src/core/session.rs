//! Terminal session state.
//!
//! One [`TerminalSession`] exists per page load. It owns everything the user
//! can change except the filesystem, which is passed alongside it.

use crate::config::{HOME_DIR, PROMPT_PREFIX};
use crate::core::autocomplete::{self, TabCycle};
use crate::core::commands::{self, CommandResult};
use crate::core::VirtualFs;
use crate::models::{Effect, InputEvent};

/// Mutable state of one terminal interaction.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    /// `"~"` at the root, otherwise an absolute path like `"/projects"`.
    pub(crate) current_directory: String,
    pub(crate) input_buffer: String,
    /// Output lines, oldest first. Only `clear` removes lines.
    transcript: Vec<String>,
    pub(crate) completion: TabCycle,
    /// Effect requests waiting for the host.
    pending_effects: Vec<Effect>,
}

impl TerminalSession {
    /// Create a session at the home directory with an empty transcript.
    pub fn new() -> Self {
        Self {
            current_directory: HOME_DIR.to_string(),
            input_buffer: String::new(),
            transcript: Vec::new(),
            completion: TabCycle::default(),
            pending_effects: Vec::new(),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply one keystroke.
    pub fn handle(&mut self, event: InputEvent, fs: &mut VirtualFs) {
        match event {
            InputEvent::Char(c) => {
                self.input_buffer.push(c);
                self.completion.clear();
            }
            InputEvent::Backspace => {
                self.input_buffer.pop();
                self.completion.clear();
            }
            InputEvent::Submit => self.submit(fs),
            InputEvent::Complete => autocomplete::complete(self, fs),
        }
    }

    /// Echo the buffered line, run it, and reset the input.
    pub fn submit(&mut self, fs: &mut VirtualFs) {
        let line = std::mem::take(&mut self.input_buffer);
        self.completion.clear();
        self.transcript.push(format!("{}{}", PROMPT_PREFIX, line));
        commands::execute(&line, self, fs);
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Append the output of a command and queue its effect.
    pub(crate) fn apply(&mut self, result: CommandResult) {
        self.transcript.extend(result.output);
        if let Some(effect) = result.effect {
            self.pending_effects.push(effect);
        }
    }

    /// Append lines produced outside a command (AI replies, game summaries).
    ///
    /// Lines land in the order deliveries are made, each exactly once.
    pub fn deliver<S: Into<String>>(&mut self, lines: impl IntoIterator<Item = S>) {
        self.transcript.extend(lines.into_iter().map(Into::into));
    }

    pub(crate) fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    pub(crate) fn set_current_directory(&mut self, dir: String) {
        self.current_directory = dir;
    }

    /// Drain queued effect requests, oldest first.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_effects)
    }

    // =========================================================================
    // Read-only Accessors
    // =========================================================================

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The last `n` transcript lines (all of them if fewer).
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.transcript.len().saturating_sub(n);
        &self.transcript[start..]
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn current_directory(&self) -> &str {
        &self.current_directory
    }

    pub fn completion(&self) -> &TabCycle {
        &self.completion
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}
