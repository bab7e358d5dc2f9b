//! User avatar helpers.

use crate::common::image;
use gearbase_core::model::UserFields;

///
/// UserImage
/// What the UI should render for a user: a picture URL or a letter avatar.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserImage {
    Url(String),
    Initial(String),
}

/// Fallback avatar label: uppercased first letter of the display name,
/// `"?"` when there is no usable name.
#[must_use]
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().to_string())
}

/// Profile picture when the user has one, letter avatar otherwise.
#[must_use]
pub fn user_image(base_url: &str, user: &UserFields, size: Option<&str>, bust: Option<u64>) -> UserImage {
    if user.picture.is_empty() {
        UserImage::Initial(avatar_initial(&user.name))
    } else {
        UserImage::Url(image::image_url(base_url, &user.picture, size, bust))
    }
}
