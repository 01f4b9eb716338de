//! Terminal overlay component.
//!
//! Renders the transcript tail and the input line, and feeds window
//! keystrokes into the session.

use leptos::{ev, prelude::*};

use super::{effects, keys};
use crate::app::AppContext;
use crate::config::VISIBLE_LINES;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;
    let fs = ctx.fs;

    // The overlay lives for the whole page, so the listener is never removed.
    let _listener = window_event_listener(ev::keydown, move |ev| {
        let Some(event) = keys::decode_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        // Keep Tab from moving focus and Backspace from navigating back.
        ev.prevent_default();

        let mut pending = Vec::new();
        session.update(|s| {
            fs.update_value(|fs| s.handle(event, fs));
            pending = s.take_effects();
        });
        for effect in pending {
            effects::run(effect, session);
        }
    });

    let lines = move || {
        session.with(|s| s.tail(VISIBLE_LINES).to_vec())
            .into_iter()
            .map(|line| view! { <div class=css::line>{line}</div> })
            .collect_view()
    };
    let input = move || session.with(|s| s.input_buffer().to_string());

    view! {
        <div class=css::terminal>
            <div class=css::transcript>{lines}</div>
            <div class=css::line>
                <span class=css::prompt>"> "</span>
                <span>{input}</span>
                <span class=css::cursor>"_"</span>
            </div>
        </div>
    }
}
