//! Web shell configuration.

/// Number of trailing transcript lines shown in the overlay.
pub const VISIBLE_LINES: usize = 13;

/// Reply delivered for `ai` requests when no text-generation backend is loaded.
pub const AI_UNAVAILABLE: &str = "Cannot initialize AI: text generation backend not loaded.";

/// Reply delivered for `ai <message>` before the AI has been initialized.
pub const AI_NOT_INITIALIZED: &str = "AI is not initialized. Use \"ai init\" to start the AI.";
