//! Header showing either the login button or the signed-in user.

use leptos::prelude::*;

use crate::state::popup::css_display;
use crate::state::session::SessionState;

/// Logged-out view with a login button, logged-in view with avatar, name and
/// logout button. Exactly one of the two is displayed.
#[component]
pub fn SessionBar(
    session: RwSignal<SessionState>,
    avatar_url: Signal<String>,
    on_login: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let logged_in = move || session.with(SessionState::is_logged_in);
    let username = move || session.with(|s| s.username().to_owned());
    let checking = move || if session.with(|s| s.loading) { "true" } else { "false" };

    view! {
        <div class="session-bar" aria-busy=checking>
            <div
                class="loggedout-container"
                style:display=move || css_display(!logged_in(), "block")
            >
                <button class="login-button" type="button" on:click=move |_| on_login.run(())>
                    "Log in"
                </button>
            </div>
            <div class="loggedin-container" style:display=move || css_display(logged_in(), "block")>
                <img class="user-avatar" src=move || avatar_url.get() alt=""/>
                <span class="username">{username}</span>
                <button class="logout-button" type="button" on:click=move |_| on_logout.run(())>
                    "Log out"
                </button>
            </div>
        </div>
    }
}
