//! Library configuration management.

use serde::Deserialize;

/// Library configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenderConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Locale identifier used when no locale is given explicitly (e.g. `nl_NL`).
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl TenderConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `config/default.toml` (optional)
    /// - `config/{RUN_MODE}.toml` (optional)
    /// - `TENDER__*` environment variables, e.g. `TENDER__DISPLAY__LOCALE=nl_NL`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TENDER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TenderConfig::default();
        assert_eq!(config.display.locale, "en_US");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_var_unset("TENDER__DISPLAY__LOCALE", || {
            let config = TenderConfig::load().unwrap();
            assert_eq!(config.display.locale, "en_US");
        });
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_var("TENDER__DISPLAY__LOCALE", Some("nl_NL"), || {
            let config = TenderConfig::load().unwrap();
            assert_eq!(config.display.locale, "nl_NL");
        });
    }
}
