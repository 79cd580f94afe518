//! # clash-login
//!
//! Leptos + WASM login widget for the clash manager pages.
//!
//! Renders the session header (login button, or avatar + username + logout)
//! and the two-step login popup, and drives them against the backend's
//! `/services/authenticate`, `/services/login_request`, `/services/login` and
//! `/services/logout` endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install panic hook and logger, then mount the widget
/// into `#login-widget` or, failing that, `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::LoginWidget;
    use crate::config::WidgetConfig;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    if let Some(host) = util::browser::host_element() {
        let config = WidgetConfig::from_element(&host);
        log::debug!(
            "mounting login widget into #{} with {config:?}",
            util::browser::HOST_ELEMENT_ID
        );
        leptos::mount::mount_to(host, move || view! { <LoginWidget config=config/> }).forget();
    } else {
        log::debug!(
            "no #{} element; mounting login widget into <body>",
            util::browser::HOST_ELEMENT_ID
        );
        leptos::mount::mount_to_body(|| view! { <LoginWidget/> });
    }
}
