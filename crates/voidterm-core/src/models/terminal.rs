//! Terminal input and host-facing effect types.

/// A decoded keystroke delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character appended to the input buffer
    Char(char),
    Backspace,
    /// Enter: run the buffered line
    Submit,
    /// Tab: cycle completion candidates
    Complete,
}

/// A request for the host to run a feature that lives outside the core.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Set the wormhole animation speed
    Warp(f64),
    Glitch,
    Void,
    Pulse,
    /// Start the snake minigame
    Snake,
    /// Load the text-generation model
    AiInit,
    /// Send a message to the text-generation model
    AiChat(String),
}
