//! Core configuration.
//!
//! Centralizes the constants used by the interpreter and filesystem.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Seed manifest for the virtual filesystem.
pub const FIXTURE_MANIFEST: &str = include_str!("../assets/fixture.json");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Prefix written before each submitted line in the transcript.
pub const PROMPT_PREFIX: &str = "> ";

/// Home alias used as the current directory when at the root.
pub const HOME_DIR: &str = "~";

/// Separator placed between entries in `ls` output.
pub const LS_SEPARATOR: &str = "  ";

/// Command names offered by tab completion, in the order they are cycled.
pub const COMPLETION_COMMANDS: &[&str] = &[
    "ls", "cd", "pwd", "cat", "clear", "tree", "echo", "grep", "help", "warp", "glitch", "void",
    "pulse", "ai", "snake", "touch", "rm", "mkdir", "mv", "cp",
];

/// `tree` drawing connectors.
pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const LAST_BRANCH: &str = "└── ";
    pub const PIPE_INDENT: &str = "│   ";
    pub const BLANK_INDENT: &str = "    ";
}

/// Bounds for the `warp` command.
pub mod warp {
    /// Exclusive lower bound.
    pub const MIN_SPEED: f64 = 0.0;
    /// Inclusive upper bound.
    pub const MAX_SPEED: f64 = 10.0;
}

/// Fixed messages for the easter-egg commands.
pub mod messages {
    pub const GLITCH: &str = "Initiating glitch sequence...";
    pub const VOID: &str = "Entering the void...";
    pub const PULSE: &str = "Initiating pulse sequence...";
    pub const SNAKE_START: &str = "Snake game started. Use arrow keys to play, Escape to end.";
    pub const MARGO: &str = "I love you";
    pub const WARP_USAGE: &str = "Usage: warp <speed> (1-10)";
    pub const AI_USAGE: &str = "Usage: ai <message> or ai init";
}
