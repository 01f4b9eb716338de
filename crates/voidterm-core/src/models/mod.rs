//! Data models for the terminal core.
//!
//! - [`Node`], [`Manifest`], [`FileEntry`] - Virtual filesystem representation
//! - [`InputEvent`], [`Effect`] - Host-facing terminal types

mod filesystem;
mod terminal;

pub use filesystem::{FileEntry, Manifest, Node};
pub use terminal::{Effect, InputEvent};
