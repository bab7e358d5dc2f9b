//! Settings-bound facade over the stateless helpers, for call sites that
//! hold one `Settings` and want URL/stat/permission answers off it.

use crate::{common::image, settings::Settings};
use gearbase_core::{
    access::{AccessRights, Limits, Profile, Role},
    stats::{self, StatError, StatValue, Stats},
};
use serde_json::Value;

///
/// Helper
///

#[derive(Clone, Debug, Default)]
pub struct Helper {
    settings: Settings,
}

impl Helper {
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Attachment image straight from the CDN.
    #[must_use]
    pub fn image_cdn_url(
        &self,
        group_id: &str,
        attachment_id: &str,
        size: Option<&str>,
    ) -> String {
        image::image_cdn_url(&self.settings, group_id, attachment_id, size)
    }

    /// Image through the API's own endpoint.
    /// Sizes in use: XS 64, S 128, M 256, L 512.
    #[must_use]
    pub fn image_url(&self, pk: &str, size: Option<&str>, bust: Option<u64>) -> String {
        let base = format!("{}/", self.settings.api_base_url.trim_end_matches('/'));

        image::image_url(&base, pk, size, bust)
    }

    pub fn num_items_left(&self, limits: &Limits, stats: &Stats) -> Result<i64, StatError> {
        stats::num_items_left(limits, stats)
    }

    pub fn num_users_left(&self, limits: &Limits, stats: &Stats) -> Result<i64, StatError> {
        stats::num_users_left(limits, stats)
    }

    /// One stat field, with the location/mode fallbacks of the stats layer.
    pub fn stat<'a>(
        &self,
        stats: &'a Stats,
        kind: &str,
        field: &str,
        location: Option<&str>,
        mode: Option<&str>,
    ) -> Result<&'a StatValue, StatError> {
        stats::stat(stats, kind, field, location, mode)
    }

    #[must_use]
    pub fn access_rights(&self, role: Role, profile: &Profile, limits: &Limits) -> AccessRights {
        AccessRights::derive(role, profile, limits)
    }
}

/// Property value of an object, or the string itself when given a string.
#[must_use]
pub fn ensure_value<'a>(value: &'a Value, prop: &str) -> Option<&'a str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get(prop).and_then(Value::as_str),
        _ => None,
    }
}

/// Id of a document reference: `ensure_id("abc")` is `"abc"`,
/// `ensure_id({"_id": "abc", ...})` is `"abc"`.
#[must_use]
pub fn ensure_id(value: &Value) -> Option<&str> {
    ensure_value(value, "_id")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_url_uses_the_settings_base() {
        let helper = Helper::default();

        assert_eq!(
            helper.image_url("att-1", Some("S"), None),
            "https://api.gearbase.app/v2/att-1?mimeType=image/jpeg&size=S"
        );
    }

    #[test]
    fn ensure_id_handles_strings_and_documents() {
        assert_eq!(ensure_id(&json!("abc123")), Some("abc123"));
        assert_eq!(
            ensure_id(&json!({"_id": "abc123", "name": "example"})),
            Some("abc123")
        );
        assert_eq!(ensure_id(&json!(42)), None);
        assert_eq!(ensure_id(&json!({"name": "no id"})), None);
    }

    #[test]
    fn access_rights_pass_through_matches_core() {
        let helper = Helper::default();
        let profile = Profile::default();
        let limits = Limits::default();

        assert_eq!(
            helper.access_rights(Role::Admin, &profile, &limits),
            AccessRights::derive(Role::Admin, &profile, &limits)
        );
    }
}
