use super::{
    LoggingConfig, limits::*, search::SearchConfig, theme::ThemeConfig,
    validation::ConfigValidationError,
};
use crate::theme::types::Rgb;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_SUGGESTION_TIMEOUT_SECS: u64 = 10;

/// Main application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    suggestion_timeout_secs: Option<u64>,
    scheme_directory: Option<String>,

    #[serde(default)]
    search: SearchConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let timeout = self.suggestion_timeout_secs();
        if !(MIN_SUGGESTION_TIMEOUT_SECS..=MAX_SUGGESTION_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::SuggestionTimeout {
                configured: timeout,
                min_limit: MIN_SUGGESTION_TIMEOUT_SECS,
                max_limit: MAX_SUGGESTION_TIMEOUT_SECS,
            });
        }

        if let Some(id) = self.search.provider() {
            if hearth_core::provider::provider_by_id(id).is_none() {
                errors.push(ConfigValidationError::UnknownProvider { id: id.to_string() });
            }
        }

        if let Some(base) = self.search.suggestions_base() {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                errors.push(ConfigValidationError::InvalidSuggestionsBase {
                    url: base.to_string(),
                    reason: "URL must start with http:// or https://".to_string(),
                });
            }
        }

        if let Some(accent) = self.theme.accent() {
            if let Err(e) = Rgb::from_hex(accent) {
                errors.push(ConfigValidationError::InvalidAccentColor {
                    value: accent.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn suggestion_timeout_secs(&self) -> u64 {
        self.suggestion_timeout_secs
            .unwrap_or(DEFAULT_SUGGESTION_TIMEOUT_SECS)
    }

    pub fn suggestion_timeout(&self) -> Duration {
        Duration::from_secs(self.suggestion_timeout_secs())
    }

    pub fn scheme_directory(&self) -> Option<&str> {
        self.scheme_directory
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
