//! Page configuration
//!
//! The server-rendered page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="cashflow-config">
//!   {"cascades": [{"type_id": "filter_type", "category_id": "filter_category",
//!                  "subcategory_id": "filter_subcategory"}]}
//! </script>
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults below.

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Id of the `<script>` element holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "cashflow-config";

pub const DEFAULT_PLACEHOLDER_LABEL: &str = "———";
pub const DEFAULT_ALERT_SELECTOR: &str = ".alert";
pub const DEFAULT_ALERT_DISMISS_DELAY_MS: u32 = 5000;
pub const DEFAULT_DELETE_SELECTOR: &str = ".btn-delete";
pub const DEFAULT_DELETE_CONFIRM_MESSAGE: &str = "Вы уверены, что хотите удалить эту запись?";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Ids of the three linked `<select>` controls of one form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub type_id: String,
    pub category_id: String,
    pub subcategory_id: String,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            type_id: "id_type".to_string(),
            category_id: "id_category".to_string(),
            subcategory_id: "id_subcategory".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix for the ajax endpoints; empty means same origin
    pub api_base: String,
    pub cascades: Vec<CascadeConfig>,
    pub placeholder_label: String,
    pub alert_selector: String,
    pub alert_dismiss_delay_ms: u32,
    pub delete_selector: String,
    pub delete_confirm_message: String,
    /// Apply only the newest response per control instead of the last one to arrive
    pub discard_stale_responses: bool,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            cascades: vec![CascadeConfig::default()],
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
            alert_selector: DEFAULT_ALERT_SELECTOR.to_string(),
            alert_dismiss_delay_ms: DEFAULT_ALERT_DISMISS_DELAY_MS,
            delete_selector: DEFAULT_DELETE_SELECTOR.to_string(),
            delete_confirm_message: DEFAULT_DELETE_CONFIRM_MESSAGE.to_string(),
            discard_stale_responses: false,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// An unknown `log_level` does not reject the rest; see [`effective_log_level`](Self::effective_log_level)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded config element; absent or blank element gives the defaults
    pub fn from_document(document: &web_sys::Document) -> Result<Self, ConfigError> {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&text)
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Configured level, or `Info` together with the reason it was not usable
    pub fn effective_log_level(&self) -> (log::Level, Option<ConfigError>) {
        match self.log_level() {
            Ok(level) => (level, None),
            Err(err) => (log::Level::Info, Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.cascades[0].type_id, "id_type");
        assert_eq!(config.alert_dismiss_delay_ms, 5000);
        assert_eq!(config.placeholder_label, "———");
        assert!(!config.discard_stale_responses);
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{
                "api_base": "https://cash.example.com",
                "cascades": [
                    {},
                    {"type_id": "filter_type", "category_id": "filter_category"}
                ],
                "discard_stale_responses": true,
                "log_level": "DEBUG"
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://cash.example.com");
        assert_eq!(config.cascades.len(), 2);
        assert_eq!(config.cascades[0], CascadeConfig::default());
        assert_eq!(config.cascades[1].type_id, "filter_type");
        assert_eq!(config.cascades[1].subcategory_id, "id_subcategory");
        assert!(config.discard_stale_responses);
        assert_eq!(config.log_level().unwrap(), log::Level::Debug);
        assert_eq!(config.delete_selector, ".btn-delete");
    }

    #[test]
    fn test_invalid_json() {
        let err = PageConfig::from_json("{cascades:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_log_level_keeps_other_overrides() {
        let config = PageConfig::from_json(
            r#"{"log_level": "loud", "cascades": [{"type_id": "filter_type"}], "alert_dismiss_delay_ms": 3000}"#,
        )
        .unwrap();

        assert_eq!(config.cascades[0].type_id, "filter_type");
        assert_eq!(config.alert_dismiss_delay_ms, 3000);

        let (level, err) = config.effective_log_level();
        assert_eq!(level, log::Level::Info);
        assert!(matches!(err, Some(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }

    #[test]
    fn test_valid_log_level_has_no_warning() {
        let config = PageConfig::from_json(r#"{"log_level": "warn"}"#).unwrap();
        let (level, err) = config.effective_log_level();
        assert_eq!(level, log::Level::Warn);
        assert!(err.is_none());
    }
}
