//! Browser console logging.
//!
//! Messages go to `console.log` / `console.warn` when running in the browser.
//! Off wasm32 there is no console to write to, so these are no-ops.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Log an informational message.
#[allow(unused_variables)]
pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Log a warning.
#[allow(unused_variables)]
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
