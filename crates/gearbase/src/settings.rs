use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// SettingsError
///

#[derive(Debug, ThisError)]
pub enum SettingsError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),
}

///
/// Settings
///
/// Deployment endpoints the helper layer builds URLs against. `Default`
/// carries the production values; deployments override via TOML.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// REST API base, including the version segment.
    pub api_base_url: String,
    /// Public CDN that serves attachment images.
    pub cdn_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.gearbase.app/v2".to_owned(),
            cdn_base_url: "https://cdn.gearbase.app/attachments".to_owned(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        toml::from_str(s).map_err(|err| SettingsError::CannotParseToml(err.to_string()))
    }
}
