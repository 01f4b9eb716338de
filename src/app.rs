//! Root application module.
//!
//! Contains the App component and the AppContext shared with child
//! components.

use leptos::prelude::*;
use voidterm_core::{TerminalSession, VirtualFs};

use crate::components::Terminal;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide state.
///
/// `Copy` because both fields are Leptos handles to arena-owned values.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session the overlay renders from.
    pub session: RwSignal<TerminalSession>,
    /// Filesystem; not rendered directly, so it needs no reactivity.
    pub fs: StoredValue<VirtualFs>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(TerminalSession::new()),
            fs: StoredValue::new(VirtualFs::seeded()),
        }
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! { <Terminal /> }
}
