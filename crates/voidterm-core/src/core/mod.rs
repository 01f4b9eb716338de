//! Core terminal logic.
//!
//! This module provides:
//! - [`path::resolve`] path resolution against the current directory
//! - [`VirtualFs`] in-memory filesystem
//! - [`Command`] parsing and [`execute`] for running input lines
//! - [`complete`] tab completion
//! - [`TerminalSession`] per-page session state

pub mod autocomplete;
pub mod commands;
mod filesystem;
pub mod parser;
pub mod path;
mod session;

pub use autocomplete::{TabCycle, complete};
pub use commands::{Command, CommandResult, execute};
pub use filesystem::VirtualFs;
pub use session::TerminalSession;
