//! Image URL builders for the application's own image endpoint and the
//! public attachment CDN.

use crate::settings::Settings;
use std::fmt::Write as _;

/// Image served through the API's `/get` endpoint with a forced JPEG mime
/// type. `base_url` must end with `/` (it comes off the data source).
/// `bust` is a caller-supplied millisecond stamp that defeats caches.
#[must_use]
pub fn image_url(base_url: &str, pk: &str, size: Option<&str>, bust: Option<u64>) -> String {
    let mut url = format!("{base_url}{pk}?mimeType=image/jpeg");

    if let Some(size) = size {
        let _ = write!(url, "&size={size}");
    }
    if let Some(bust) = bust {
        let _ = write!(url, "&_bust={bust}");
    }

    url
}

/// Attachment image served straight from the CDN.
#[must_use]
pub fn image_cdn_url(
    settings: &Settings,
    group_id: &str,
    attachment_id: &str,
    size: Option<&str>,
) -> String {
    let base = settings.cdn_base_url.trim_end_matches('/');
    let mut url = format!("{base}/{group_id}/{attachment_id}.jpg");

    if let Some(size) = size {
        let _ = write!(url, "?size={size}");
    }

    url
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_appends_optional_sections_in_order() {
        assert_eq!(
            image_url("https://api.gearbase.app/v2/attachments/", "att-1", None, None),
            "https://api.gearbase.app/v2/attachments/att-1?mimeType=image/jpeg"
        );
        assert_eq!(
            image_url(
                "https://api.gearbase.app/v2/attachments/",
                "att-1",
                Some("S"),
                Some(1_756_400_000_000)
            ),
            "https://api.gearbase.app/v2/attachments/att-1?mimeType=image/jpeg\
             &size=S&_bust=1756400000000"
        );
    }

    #[test]
    fn cdn_url_is_group_scoped() {
        let settings = Settings::default();

        assert_eq!(
            image_cdn_url(&settings, "grp-1", "att-1", Some("M")),
            "https://cdn.gearbase.app/attachments/grp-1/att-1.jpg?size=M"
        );
    }
}
