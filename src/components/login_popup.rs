//! Two-step login popup: username entry, then auth-code verification.
//!
//! Rendering is driven by `PopupState::visibility`; handlers only forward to
//! the callbacks supplied by the widget.

use leptos::prelude::*;

use crate::state::popup::{PopupState, css_display};

#[component]
pub fn LoginPopup(
    popup: RwSignal<PopupState>,
    on_input: Callback<String>,
    on_next: Callback<()>,
    on_verify: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vis = Memo::new(move |_| popup.with(PopupState::visibility));
    let busy = move || popup.with(|p| p.busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_next.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="login-popup"
            role="dialog"
            style:display=move || css_display(vis.get().popup, "block")
            on:keydown=on_keydown
        >
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-username"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    style:display=move || css_display(vis.get().username_input, "inline")
                    prop:value=move || popup.with(|p| p.username.clone())
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <div
                    class="login-auth_field"
                    style:display=move || css_display(vis.get().auth_field, "block")
                >
                    "Authentication code: "
                    <span class="login-auth_code">
                        {move || popup.with(|p| p.auth_code.clone().unwrap_or_default())}
                    </span>
                </div>
                <p class="login-error" style:display=move || css_display(vis.get().error, "block")>
                    {move || popup.with(|p| p.error.clone())}
                </p>
                <div class="login-actions">
                    <button
                        class="login-cancel-button"
                        type="button"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="login-next-button"
                        type="submit"
                        style:display=move || css_display(vis.get().next_button, "inline")
                        disabled=busy
                    >
                        "Next"
                    </button>
                    <button
                        class="login-verify-button"
                        type="button"
                        style:display=move || css_display(vis.get().verify_button, "inline")
                        disabled=busy
                        on:click=move |_| on_verify.run(())
                    >
                        "Verify"
                    </button>
                </div>
            </form>
        </div>
    }
}
