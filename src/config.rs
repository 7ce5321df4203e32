use crate::constants::DEFAULT_METHOD_SEPARATOR;
use crate::error::{MartError, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub mart: MartConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MartConfig {
    /// Separator used when rendering the distinct payment method set
    #[serde(default = "default_separator")]
    pub payment_method_separator: String,
}

fn default_separator() -> String {
    DEFAULT_METHOD_SEPARATOR.to_string()
}

impl Default for MartConfig {
    fn default() -> Self {
        Self {
            payment_method_separator: default_separator(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            MartError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load `config.toml` if present, otherwise fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or(Config {
            mart: MartConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator() {
        let config = MartConfig::default();
        assert_eq!(config.payment_method_separator, ", ");
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str("[mart]\npayment_method_separator = \" | \"\n").unwrap();
        assert_eq!(config.mart.payment_method_separator, " | ");
    }

    #[test]
    fn test_parse_config_uses_default_when_omitted() {
        let config: Config = toml::from_str("[mart]\n").unwrap();
        assert_eq!(config.mart.payment_method_separator, ", ");
    }
}
