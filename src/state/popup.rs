//! Login popup stage machine.
//!
//! DESIGN
//! ======
//! The stage is explicit state; element visibility is derived from it by
//! `PopupState::visibility` instead of being toggled piecemeal. Every stage
//! change goes through a method here so the error field is cleared
//! consistently.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use crate::controller::Effect;
use crate::error::AuthError;

pub const EMPTY_USERNAME_MESSAGE: &str = "Enter a username first.";

/// Which part of the popup is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupStage {
    /// Popup closed.
    #[default]
    Hidden,
    /// Username input and "Next" button.
    UsernameEntry,
    /// Auth code display and "Verify" button.
    CodeVerification,
}

/// Transient state of the login popup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    pub stage: PopupStage,
    /// Current contents of the username input.
    pub username: String,
    /// Code returned by the last successful login request.
    pub auth_code: Option<String>,
    /// Text of the error field; empty when there is nothing to show.
    pub error: String,
    /// A Next or Verify request is in flight.
    pub busy: bool,
    /// Bumped by `open` and `cancel`; replies tagged with an older value
    /// belong to an abandoned attempt.
    pub attempt: u64,
}

/// Which popup elements are displayed, derived from `PopupState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupVisibility {
    pub popup: bool,
    pub username_input: bool,
    pub next_button: bool,
    pub verify_button: bool,
    pub auth_field: bool,
    pub error: bool,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        self.stage != PopupStage::Hidden
    }

    /// Show the popup at the username step.
    pub fn open(&mut self) {
        self.abandon_attempt();
        self.stage = PopupStage::UsernameEntry;
        self.auth_code = None;
        self.error.clear();
    }

    /// Step back one stage: verification returns to username entry, username
    /// entry closes the popup.
    pub fn cancel(&mut self) {
        self.abandon_attempt();
        self.error.clear();
        match self.stage {
            PopupStage::CodeVerification => {
                self.stage = PopupStage::UsernameEntry;
                self.auth_code = None;
            }
            PopupStage::UsernameEntry | PopupStage::Hidden => {
                self.stage = PopupStage::Hidden;
            }
        }
    }

    fn abandon_attempt(&mut self) {
        self.attempt = self.attempt.wrapping_add(1);
        self.busy = false;
    }

    fn is_stale(&self, attempt: u64) -> bool {
        attempt != self.attempt
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    /// Prepare a login request. Returns the attempt tag and the trimmed
    /// username to send, or `None` when nothing should be sent.
    pub fn begin_login_request(&mut self) -> Option<(u64, String)> {
        if self.busy || self.stage != PopupStage::UsernameEntry {
            return None;
        }
        self.error.clear();
        let username = self.username.trim();
        if username.is_empty() {
            self.error = EMPTY_USERNAME_MESSAGE.to_owned();
            return None;
        }
        self.busy = true;
        Some((self.attempt, username.to_owned()))
    }

    /// Fold the login-request reply for `attempt` in. Replies from an
    /// abandoned attempt leave the popup untouched.
    pub fn finish_login_request(&mut self, attempt: u64, result: Result<String, AuthError>) {
        if self.is_stale(attempt) {
            log::debug!("login request reply for abandoned attempt {attempt} ignored");
            return;
        }
        self.busy = false;
        match result {
            Ok(code) => {
                self.stage = PopupStage::CodeVerification;
                self.auth_code = Some(code);
                self.error.clear();
            }
            Err(e) => self.error = e.user_message().to_owned(),
        }
    }

    /// Prepare the final login call. Returns the attempt tag, or `None` when
    /// it should not be sent.
    pub fn begin_login(&mut self) -> Option<u64> {
        if self.busy || self.stage != PopupStage::CodeVerification {
            return None;
        }
        self.error.clear();
        self.busy = true;
        Some(self.attempt)
    }

    /// Fold the login reply for `attempt` in. Success always reloads since the
    /// session is now valid; the page is replaced so `busy` is left set.
    pub fn finish_login(&mut self, attempt: u64, result: Result<(), AuthError>) -> Effect {
        match result {
            Ok(()) => Effect::Reload,
            Err(e) if self.is_stale(attempt) => {
                log::debug!("login failure for abandoned attempt {attempt} not shown: {e}");
                Effect::None
            }
            Err(e) => {
                self.busy = false;
                self.error = e.user_message().to_owned();
                Effect::None
            }
        }
    }

    pub fn visibility(&self) -> PopupVisibility {
        let entry = self.stage == PopupStage::UsernameEntry;
        let verify = self.stage == PopupStage::CodeVerification;
        PopupVisibility {
            popup: self.is_open(),
            username_input: entry,
            next_button: entry,
            verify_button: verify,
            auth_field: verify,
            error: self.is_open() && !self.error.is_empty(),
        }
    }
}

/// CSS `display` value for an element shown as `shown` when visible.
pub fn css_display(visible: bool, shown: &'static str) -> &'static str {
    if visible { shown } else { "none" }
}
