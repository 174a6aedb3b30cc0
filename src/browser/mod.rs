//! Browser Bindings
//!
//! Platform APIs the form depends on, wrapped behind the core traits.

mod file;
mod geolocation;
pub mod leaflet;
mod navigator;

pub use file::PickedFile;
pub use geolocation::BrowserLocator;
pub use navigator::RouterNavigator;

use wasm_bindgen::JsValue;

/// Best-effort text for a rejected promise or thrown value
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
