//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once by the session check on mount and never cleared afterwards; a
//! login or logout reloads the page instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::WidgetConfig;
use crate::error::AuthError;
use crate::net::types::UserInfo;
use crate::util::avatar::avatar_url;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// The session check has not answered yet.
    pub loading: bool,
}

impl SessionState {
    /// State before the session check has answered.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the session check outcome. Any error means "logged out".
    pub fn apply_check(&mut self, result: Result<UserInfo, AuthError>) {
        self.loading = false;
        match result {
            Ok(user) => self.user = Some(user),
            Err(e) => {
                log::debug!("session check: not signed in ({e})");
                self.user = None;
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.username.as_str())
    }

    /// Avatar image URL for the signed-in user, empty when there is none.
    pub fn avatar_url(&self, config: &WidgetConfig) -> String {
        let id = self.user.as_ref().and_then(|u| u.avatar_id.as_deref());
        avatar_url(&config.avatar_template, id)
    }
}
