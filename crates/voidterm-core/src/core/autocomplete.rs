//! Tab completion for command names and directory entries.
//!
//! The first Tab press computes a candidate list; each press (including the
//! first) replaces the last word of the input with the next candidate,
//! cycling forever. Any other keystroke drops the list.
//!
//! - No space in the input: command names starting with the input
//! - Otherwise: entries of the current directory starting with the last
//!   word, directories suffixed with `/`
//!
//! Candidates keep the order of their source (command table order, or
//! directory insertion order). They are never sorted.

use crate::config::COMPLETION_COMMANDS;
use crate::core::{TerminalSession, VirtualFs, path};

// ============================================================================
// Cycle State
// ============================================================================

/// Candidate list and cursor for Tab cycling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabCycle {
    candidates: Vec<String>,
    cursor: usize,
}

impl TabCycle {
    /// Check if currently in Tab cycling mode (has candidates).
    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Clear all Tab cycling state.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
    }

    /// Set up the cycle with new candidates.
    pub fn start(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.cursor = 0;
    }

    /// Return the candidate under the cursor and advance, wrapping around.
    pub fn advance(&mut self) -> Option<&str> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.candidates.len();
        self.candidates.get(index).map(String::as_str)
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Handle a Tab press on the session.
pub fn complete(session: &mut TerminalSession, fs: &VirtualFs) {
    if !session.completion.is_active() {
        let candidates = candidates_for(&session.input_buffer, &session.current_directory, fs);
        session.completion.start(candidates);
    }

    if let Some(candidate) = session.completion.advance() {
        session.input_buffer = replace_last_word(&session.input_buffer, candidate);
    }
}

/// Compute completion candidates for an input line.
pub fn candidates_for(input: &str, current_directory: &str, fs: &VirtualFs) -> Vec<String> {
    match input.rsplit_once(' ') {
        None => complete_command(input),
        Some((_, last)) => complete_path(last, current_directory, fs),
    }
}

// ============================================================================
// Candidate Sources
// ============================================================================

/// Command names starting with `partial` (case-sensitive).
fn complete_command(partial: &str) -> Vec<String> {
    COMPLETION_COMMANDS
        .iter()
        .filter(|cmd| cmd.starts_with(partial))
        .map(|cmd| cmd.to_string())
        .collect()
}

/// Entries of the current directory starting with `partial`.
fn complete_path(partial: &str, current_directory: &str, fs: &VirtualFs) -> Vec<String> {
    let dir = path::resolve(current_directory, current_directory);
    let Some(entries) = fs.lookup(&dir).ok().and_then(|node| node.entries()) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|(name, _)| name.starts_with(partial))
        .map(|(name, node)| {
            if node.is_directory() {
                format!("{}/", name)
            } else {
                name.clone()
            }
        })
        .collect()
}

/// Replace the last space-delimited word of `input`.
fn replace_last_word(input: &str, word: &str) -> String {
    match input.rsplit_once(' ') {
        Some((head, _)) => format!("{} {}", head, word),
        None => word.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_candidates_single() {
        assert_eq!(complete_command("ec"), vec!["echo"]);
    }

    #[test]
    fn test_command_candidates_keep_table_order() {
        assert_eq!(
            complete_command("c"),
            vec!["cd", "cat", "clear", "cp"]
        );
    }

    #[test]
    fn test_command_candidates_case_sensitive() {
        assert!(complete_command("EC").is_empty());
        assert!(complete_command("xyz").is_empty());
    }

    #[test]
    fn test_path_candidates_insertion_order() {
        let fs = VirtualFs::seeded();
        assert_eq!(
            candidates_for("ls ", "~", &fs),
            vec!["welcome.txt", "projects/", "hidden/"]
        );
        assert_eq!(candidates_for("cat w", "~", &fs), vec!["welcome.txt"]);
    }

    #[test]
    fn test_path_candidates_use_current_directory() {
        let fs = VirtualFs::seeded();
        assert_eq!(
            candidates_for("cat s", "/projects", &fs),
            vec!["startup_ideas.txt"]
        );
        // Only the current directory is searched, not the typed prefix.
        assert!(candidates_for("cat projects/s", "~", &fs).is_empty());
    }

    #[test]
    fn test_replace_last_word() {
        assert_eq!(replace_last_word("ec", "echo"), "echo");
        assert_eq!(replace_last_word("cat w", "welcome.txt"), "cat welcome.txt");
        assert_eq!(replace_last_word("grep a ", "hidden/"), "grep a hidden/");
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut cycle = TabCycle::default();
        assert_eq!(cycle.advance(), None);

        cycle.start(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cycle.advance(), Some("a"));
        assert_eq!(cycle.advance(), Some("b"));
        assert_eq!(cycle.advance(), Some("a"));
        assert_eq!(cycle.cursor(), 1);

        cycle.clear();
        assert!(!cycle.is_active());
    }

    #[test]
    fn test_complete_single_command_repeats() {
        let fs = VirtualFs::seeded();
        let mut session = TerminalSession::new();
        session.input_buffer = "ec".to_string();

        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "echo");
        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "echo");
        assert_eq!(session.completion.candidates(), ["echo".to_string()]);
    }

    #[test]
    fn test_complete_cycles_paths() {
        let fs = VirtualFs::seeded();
        let mut session = TerminalSession::new();
        session.input_buffer = "cd ".to_string();

        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "cd welcome.txt");
        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "cd projects/");
        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "cd hidden/");
        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "cd welcome.txt");
    }

    #[test]
    fn test_complete_without_candidates_leaves_buffer() {
        let fs = VirtualFs::seeded();
        let mut session = TerminalSession::new();
        session.input_buffer = "zz".to_string();

        complete(&mut session, &fs);
        assert_eq!(session.input_buffer, "zz");
        assert!(!session.completion.is_active());
    }
}
