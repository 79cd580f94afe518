//! REST client for the auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (unit tests, tooling): stubs returning `AuthError::Network`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies become `RequestRejected` carrying the server's `message`
//! when the body has one. Transport and decode failures become `Network`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::UserInfo;
#[cfg(feature = "csr")]
use super::types::{AuthCodeResponse, ErrorResponse, LoginRequestBody};
use crate::config::WidgetConfig;
use crate::error::AuthError;
#[cfg(feature = "csr")]
use crate::error::request_failed_message;

pub const AUTHENTICATE: &str = "authenticate";
pub const LOGOUT: &str = "logout";
pub const LOGIN_REQUEST: &str = "login_request";
pub const LOGIN: &str = "login";

/// The four calls the widget makes against the auth backend.
///
/// Futures are `!Send`: everything runs on the page's UI thread.
#[async_trait(?Send)]
pub trait AuthService {
    /// Session check. `Ok` means the browser already holds a valid session,
    /// even when the reply body could not be decoded.
    ///
    /// # Errors
    ///
    /// Any non-2xx reply or transport failure; callers treat all of them as
    /// "logged out".
    async fn authenticate(&self) -> Result<UserInfo, AuthError>;

    /// End the current session. The reply body is ignored.
    ///
    /// # Errors
    ///
    /// Transport failure only; status codes are not inspected.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Start a login for `username` and return the auth code to display.
    ///
    /// # Errors
    ///
    /// `RequestRejected` with the server's message on non-2xx, `Network` otherwise.
    async fn login_request(&self, username: &str) -> Result<String, AuthError>;

    /// Finalize the login started by the previous `login_request`.
    ///
    /// # Errors
    ///
    /// `RequestRejected` with the server's message on non-2xx, `Network` otherwise.
    async fn login(&self) -> Result<(), AuthError>;
}

/// `AuthService` backed by `fetch` against the hosting origin.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthService {
    config: WidgetConfig,
}

impl HttpAuthService {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    fn url(&self, name: &str) -> String {
        self.config.endpoint(name)
    }
}

/// Decode a 2xx session-check body. The status alone decides that the user
/// is signed in; an undecodable body only loses the name and avatar.
#[cfg(any(test, feature = "csr"))]
fn session_user(body: &str) -> UserInfo {
    serde_json::from_str(body).unwrap_or_else(|e| {
        log::warn!("session check body not decodable: {e}");
        UserInfo::default()
    })
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> AuthError {
    AuthError::Network("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn network(e: gloo_net::Error) -> AuthError {
    AuthError::Network(e.to_string())
}

/// Turn a non-2xx reply into a rejection, preferring the server's message.
#[cfg(feature = "csr")]
async fn rejection(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => AuthError::RequestRejected { message: body.message },
        Err(_) => AuthError::RequestRejected { message: request_failed_message(status) },
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn authenticate(&self) -> Result<UserInfo, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(AUTHENTICATE))
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            let body = resp.text().await.unwrap_or_else(|e| {
                log::warn!("session check body unreadable: {e}");
                String::new()
            });
            Ok(session_user(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url(AUTHENTICATE);
            Err(unavailable())
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            gloo_net::http::Request::post(&self.url(LOGOUT))
                .send()
                .await
                .map_err(network)?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url(LOGOUT);
            Err(unavailable())
        }
    }

    async fn login_request(&self, username: &str) -> Result<String, AuthError> {
        #[cfg(feature = "csr")]
        {
            let payload = LoginRequestBody { username: username.to_owned() };
            let resp = gloo_net::http::Request::post(&self.url(LOGIN_REQUEST))
                .json(&payload)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            let body: AuthCodeResponse = resp.json().await.map_err(network)?;
            Ok(body.auth_code)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(LOGIN_REQUEST), username);
            Err(unavailable())
        }
    }

    async fn login(&self) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGIN))
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url(LOGIN);
            Err(unavailable())
        }
    }
}
