//! Thin wrappers over the browser APIs the widget needs.
//!
//! Native builds no-op so the rest of the crate stays testable off-wasm.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Element id the widget mounts into when present.
pub const HOST_ELEMENT_ID: &str = "login-widget";

/// Full page reload; discards all widget state and pending requests.
pub fn reload_page() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("reload requested without a window");
            return;
        };
        if let Err(e) = window.location().reload() {
            log::warn!("page reload failed: {e:?}");
        }
    }
}

/// The widget's host element, if the page provides one.
#[cfg(feature = "csr")]
pub fn host_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(HOST_ELEMENT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
