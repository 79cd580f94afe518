//! Root `LoginWidget` component.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{login_popup::LoginPopup, session_bar::SessionBar};
use crate::config::WidgetConfig;
use crate::controller::{Effect, LoginController};
use crate::net::api::HttpAuthService;
use crate::state::{popup::PopupState, session::SessionState};

/// Run a handler future on the UI thread and honor its effect.
fn run<F>(fut: F)
where
    F: Future<Output = Effect> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if fut.await == Effect::Reload {
            crate::util::browser::reload_page();
        }
    });
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Session header plus login popup, bound to the `/services/*` backend.
///
/// Runs the session check once on mount. State signals are also provided as
/// context for any sibling markup that wants to react to sign-in.
#[component]
pub fn LoginWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    let session = RwSignal::new(SessionState::pending());
    let popup = RwSignal::new(PopupState::default());
    provide_context(session);
    provide_context(popup);

    let service = Arc::new(HttpAuthService::new(config.clone()));
    let controller = LoginController::new(service, session, popup);

    {
        let ctl = controller.clone();
        run(async move {
            ctl.check_session().await;
            Effect::None
        });
    }

    let avatar_url = Signal::derive(move || session.with(|s| s.avatar_url(&config)));

    let on_login = {
        let ctl = controller.clone();
        Callback::new(move |()| ctl.open_popup())
    };
    let on_logout = {
        let ctl = controller.clone();
        Callback::new(move |()| {
            let ctl = ctl.clone();
            run(async move { ctl.logout().await });
        })
    };
    let on_input = {
        let ctl = controller.clone();
        Callback::new(move |value: String| ctl.set_username(value))
    };
    let on_next = {
        let ctl = controller.clone();
        Callback::new(move |()| {
            let ctl = ctl.clone();
            run(async move {
                ctl.advance().await;
                Effect::None
            });
        })
    };
    let on_verify = {
        let ctl = controller.clone();
        Callback::new(move |()| {
            let ctl = ctl.clone();
            run(async move { ctl.confirm().await });
        })
    };
    let on_cancel = Callback::new(move |()| controller.cancel());

    view! {
        <div class="login-widget">
            <SessionBar
                session=session
                avatar_url=avatar_url
                on_login=on_login
                on_logout=on_logout
            />
            <LoginPopup
                popup=popup
                on_input=on_input
                on_next=on_next
                on_verify=on_verify
                on_cancel=on_cancel
            />
        </div>
    }
}
