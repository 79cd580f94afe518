//! Widget configuration read from the host element's data attributes.
//!
//! Recognized attributes:
//! - `data-services-base`: prefix for the auth endpoints (default `/services`)
//! - `data-avatar-template`: avatar image URL containing `{avatar_id}`
//!
//! Missing or blank attributes fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SERVICES_BASE: &str = "/services";
pub const DEFAULT_AVATAR_TEMPLATE: &str =
    "https://static.codingame.com/servlet/fileservlet?id={avatar_id}&format=navigation_avatar";
pub const AVATAR_ID_PLACEHOLDER: &str = "{avatar_id}";

pub const SERVICES_BASE_ATTR: &str = "data-services-base";
pub const AVATAR_TEMPLATE_ATTR: &str = "data-avatar-template";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub services_base: String,
    pub avatar_template: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            services_base: DEFAULT_SERVICES_BASE.to_owned(),
            avatar_template: DEFAULT_AVATAR_TEMPLATE.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Build config from raw attribute values, falling back per key.
    pub fn from_attrs(services_base: Option<&str>, avatar_template: Option<&str>) -> Self {
        Self {
            services_base: parse_services_base(services_base),
            avatar_template: parse_avatar_template(avatar_template),
        }
    }

    /// Read config from the `data-*` attributes of `el`.
    #[cfg(feature = "csr")]
    pub fn from_element(el: &web_sys::Element) -> Self {
        let base = el.get_attribute(SERVICES_BASE_ATTR);
        let template = el.get_attribute(AVATAR_TEMPLATE_ATTR);
        Self::from_attrs(base.as_deref(), template.as_deref())
    }

    /// Absolute path of the endpoint `name` under the services base.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.services_base)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_services_base(raw: Option<&str>) -> String {
    match non_blank(raw) {
        // "/" alone means the origin root.
        Some(v) => v.trim_end_matches('/').to_owned(),
        None => DEFAULT_SERVICES_BASE.to_owned(),
    }
}

fn parse_avatar_template(raw: Option<&str>) -> String {
    match non_blank(raw) {
        Some(v) if v.contains(AVATAR_ID_PLACEHOLDER) => v.to_owned(),
        Some(v) => {
            log::warn!("avatar template {v:?} lacks {AVATAR_ID_PLACEHOLDER}; using default");
            DEFAULT_AVATAR_TEMPLATE.to_owned()
        }
        None => DEFAULT_AVATAR_TEMPLATE.to_owned(),
    }
}
