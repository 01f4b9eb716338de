//! Terminal core for the void landing page.
//!
//! A fake shell over an in-memory filesystem: path resolution, a small
//! command interpreter, tab completion, and the session state the page
//! renders from. Rendering and visual effects live in the host.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::core::{TerminalSession, VirtualFs};
pub use error::{CommandError, FsError};
pub use models::{Effect, InputEvent, Node};
