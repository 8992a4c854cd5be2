use crate::config::StoreSettings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config file. Every field is optional; unset fields fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl StoreConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn into_settings(self) -> StoreSettings {
        let defaults = StoreSettings::default();
        StoreSettings {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

    #[test]
    fn parses_a_full_file() {
        let config = StoreConfig::from_toml_str(
            r#"
base_url = "https://shop.example.com"
request_timeout_secs = 5
"#,
        )
        .unwrap();

        let settings = config.into_settings();
        assert_eq!(settings.base_url, "https://shop.example.com");
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let settings = StoreConfig::from_toml_str("").unwrap().into_settings();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(StoreConfig::from_toml_str("base_url = [").is_err());
    }
}
