//! Host side of core effect requests.
//!
//! The wormhole canvas and the snake game are not part of this build, so
//! visual effects are only logged. `ai init` gets an immediate reply
//! explaining that no backend is loaded, and chat requests are told the AI
//! was never initialized.

use leptos::prelude::*;
use voidterm_core::utils::console;
use voidterm_core::{Effect, TerminalSession};

use crate::config::{AI_NOT_INITIALIZED, AI_UNAVAILABLE};

/// Run one effect requested by a command.
pub fn run(effect: Effect, session: RwSignal<TerminalSession>) {
    match effect {
        Effect::Warp(speed) => console::log(&format!("effect: warp speed {}", speed)),
        Effect::Glitch => console::log("effect: glitch"),
        Effect::Void => console::log("effect: void"),
        Effect::Pulse => console::log("effect: pulse"),
        Effect::Snake => console::log("effect: snake"),
        Effect::AiInit | Effect::AiChat(_) => {
            if let Some(reply) = ai_reply(&effect) {
                session.update(|s| s.deliver([reply]));
            }
        }
    }
}

/// Line delivered back for an AI request, `None` for visual effects.
fn ai_reply(effect: &Effect) -> Option<&'static str> {
    match effect {
        Effect::AiInit => Some(AI_UNAVAILABLE),
        Effect::AiChat(_) => Some(AI_NOT_INITIALIZED),
        _ => None,
    }
}
