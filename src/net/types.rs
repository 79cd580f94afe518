//! Wire DTOs for the `/services/*` auth endpoints.
//!
//! DESIGN
//! ======
//! Field names match the backend's JSON keys so no serde renames are needed.
//! `avatar_id` is normalized on the way in: the backend stores `""` for users
//! without an avatar and some accounts carry a numeric id.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the signed-in user, as returned by the session check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    /// Image-service id of the user's avatar. `None` when the user has none.
    #[serde(default, deserialize_with = "deserialize_avatar_id")]
    pub avatar_id: Option<String>,
}

/// Body of `POST /services/login_request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequestBody {
    pub username: String,
}

/// Success reply of `POST /services/login_request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCodeResponse {
    pub auth_code: String,
}

/// Failure reply of `login_request` and `login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

fn deserialize_avatar_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected avatar id string or number")),
    }
}
