use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::{SortDirection, SortKey};
use crate::currency::is_valid_date_format;

/// Stores user-configurable shell preferences.
///
/// Only preferences live here; transactions are never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default = "Config::default_true")]
    pub warn_on_overspend: bool,
    #[serde(default = "Config::default_true")]
    pub auto_summary: bool,
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default)]
    pub default_direction: SortDirection,
    #[serde(default = "Config::default_true")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            date_format: Self::default_date_format(),
            warn_on_overspend: true,
            auto_summary: true,
            default_sort: SortKey::default(),
            default_direction: SortDirection::default(),
            color: true,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 7] = [
        "currency_symbol",
        "date_format",
        "warn_on_overspend",
        "auto_summary",
        "default_sort",
        "default_direction",
        "color",
    ];

    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_date_format() -> String {
        "%Y-%m-%d".into()
    }

    fn default_true() -> bool {
        true
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("date_format", self.date_format.clone()),
            ("warn_on_overspend", self.warn_on_overspend.to_string()),
            ("auto_summary", self.auto_summary.to_string()),
            ("default_sort", self.default_sort.to_string()),
            ("default_direction", self.default_direction.to_string()),
            ("color", self.color.to_string()),
        ]
    }

    /// Updates one setting from user text.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => {
                if !is_valid_date_format(value) {
                    return Err(invalid(key, format!("`{}` is not a date format", value)));
                }
                self.date_format = value.to_string();
            }
            "warn_on_overspend" => self.warn_on_overspend = parse_bool(key, value)?,
            "auto_summary" => self.auto_summary = parse_bool(key, value)?,
            "default_sort" => {
                self.default_sort = value
                    .parse()
                    .map_err(|err: crate::core::ViewError| invalid(key, err.to_string()))?;
            }
            "default_direction" => {
                self.default_direction = value
                    .parse()
                    .map_err(|err: crate::core::ViewError| invalid(key, err.to_string()))?;
            }
            "color" => self.color = parse_bool(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, format!("expected on/off, got `{}`", value))),
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.trim().to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(config.warn_on_overspend);
        assert_eq!(config.default_sort, SortKey::None);
    }

    #[test]
    fn set_parses_values() {
        let mut config = Config::default();
        config.set("warn_on_overspend", "off").unwrap();
        config.set("default_sort", "Amount").unwrap();
        config.set("default_direction", "desc").unwrap();
        config.set("date_format", "%d/%m/%Y").unwrap();
        assert!(!config.warn_on_overspend);
        assert_eq!(config.default_sort, SortKey::Amount);
        assert_eq!(config.default_direction, SortDirection::Descending);
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("theme", "dark"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            config.set("auto_summary", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("date_format", "%H:%M"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn entries_cover_every_key() {
        let config = Config::default();
        let keys: Vec<_> = config.entries().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, Config::KEYS.to_vec());
    }
}
