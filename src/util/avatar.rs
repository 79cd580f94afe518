//! Avatar image URL construction.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config::AVATAR_ID_PLACEHOLDER;

/// Substitute `avatar_id` into `template`. Returns an empty string when the
/// user has no avatar.
pub fn avatar_url(template: &str, avatar_id: Option<&str>) -> String {
    match avatar_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => template.replace(AVATAR_ID_PLACEHOLDER, id),
        None => String::new(),
    }
}
