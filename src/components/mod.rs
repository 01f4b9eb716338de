//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal overlay

pub mod terminal;

pub use terminal::Terminal;
