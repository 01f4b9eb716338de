//! Utility modules.
//!
//! - [`console`] - Browser console logging (no-op off wasm32)

pub mod console;
