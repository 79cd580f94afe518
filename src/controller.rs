//! User actions of the login widget.
//!
//! ARCHITECTURE
//! ============
//! Each handler reads and writes state through `StateCell`, calls the
//! `AuthService` at most once, and reports whether the page has to reload.
//! The caller performs the reload; nothing here touches the browser.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use crate::net::api::AuthService;
use crate::state::cell::StateCell;
use crate::state::popup::PopupState;
use crate::state::session::SessionState;

/// Side effect requested by a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    None,
    /// Reload the whole page.
    Reload,
}

pub struct LoginController<S: ?Sized, Sess, Pop> {
    service: Arc<S>,
    session: Sess,
    popup: Pop,
}

impl<S: ?Sized, Sess: Clone, Pop: Clone> Clone for LoginController<S, Sess, Pop> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            session: self.session.clone(),
            popup: self.popup.clone(),
        }
    }
}

impl<S, Sess, Pop> LoginController<S, Sess, Pop>
where
    S: AuthService + ?Sized,
    Sess: StateCell<SessionState>,
    Pop: StateCell<PopupState>,
{
    pub fn new(service: Arc<S>, session: Sess, popup: Pop) -> Self {
        Self { service, session, popup }
    }

    /// Ask the backend whether this browser already holds a session.
    pub async fn check_session(&self) {
        self.session.modify(|s| s.loading = true);
        let result = self.service.authenticate().await;
        if let Ok(user) = &result {
            log::info!("signed in as {}", user.username);
        }
        self.session.modify(|s| s.apply_check(result));
    }

    /// End the session. The page reloads whatever the backend answers.
    pub async fn logout(&self) -> Effect {
        if let Err(e) = self.service.logout().await {
            log::warn!("logout request failed: {e}");
        }
        Effect::Reload
    }

    pub fn open_popup(&self) {
        self.popup.modify(PopupState::open);
    }

    pub fn cancel(&self) {
        self.popup.modify(PopupState::cancel);
    }

    pub fn set_username(&self, value: String) {
        self.popup.modify(|p| p.set_username(value));
    }

    /// "Next": send the entered username and move on to code verification.
    pub async fn advance(&self) {
        let mut request = None;
        self.popup.modify(|p| request = p.begin_login_request());
        let Some((attempt, username)) = request else {
            return;
        };
        let result = self.service.login_request(&username).await;
        if let Err(e) = &result {
            log::warn!("login request for {username:?} failed: {e}");
        }
        self.popup.modify(|p| p.finish_login_request(attempt, result));
    }

    /// "Verify": finalize the login started by `advance`.
    pub async fn confirm(&self) -> Effect {
        let mut started = None;
        self.popup.modify(|p| started = p.begin_login());
        let Some(attempt) = started else {
            return Effect::None;
        };
        let result = self.service.login().await;
        if let Err(e) = &result {
            log::warn!("login failed: {e}");
        }
        let mut effect = Effect::None;
        self.popup.modify(|p| effect = p.finish_login(attempt, result));
        effect
    }

    pub fn session(&self) -> &Sess {
        &self.session
    }

    pub fn popup(&self) -> &Pop {
        &self.popup
    }
}
