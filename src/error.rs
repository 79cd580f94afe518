//! Error type shared by the auth service and the popup flow.
//!
//! ERROR HANDLING
//! ==============
//! Rejections carry the server's own wording and are shown verbatim. Transport
//! and decode failures collapse into a generic message; their detail is only
//! logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown in the popup when the backend could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Could not reach the server. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend answered with a non-2xx status.
    #[error("request rejected: {message}")]
    RequestRejected { message: String },

    /// The request never completed or the reply could not be decoded.
    #[error("network error: {0}")]
    Network(String),
}

impl AuthError {
    /// Text to place in the popup's error field.
    pub fn user_message(&self) -> &str {
        match self {
            Self::RequestRejected { message } => message,
            Self::Network(_) => NETWORK_ERROR_MESSAGE,
        }
    }
}

/// Fallback rejection text for a non-2xx reply without a readable body.
pub fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
