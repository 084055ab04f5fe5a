//! Active-provider resolution and the suggestion service.
//!
//! Ties the static provider registry to the preference store and the
//! configuration: the user's provider preference wins when it names a
//! registered provider, otherwise the registry default is used.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::prefs::PreferenceStore;
use hearth_core::SuggestionClient;
use hearth_core::provider::{self, SearchProvider};

/// Resolve the active search provider from preferences.
///
/// Unknown ids fall back to the registry default with a logged warning
/// rather than failing the whole launcher.
pub fn active_provider(prefs: &PreferenceStore) -> &'static SearchProvider {
    match prefs.search_provider() {
        Some(id) => provider::provider_by_id(&id).unwrap_or_else(|| {
            let fallback = provider::default_provider();
            log::warn!("Unknown search provider '{id}', falling back to '{}'", fallback.id);
            fallback
        }),
        None => provider::default_provider(),
    }
}

/// Suggestion client bound to the active provider and configuration.
pub struct SuggestionService {
    client: SuggestionClient,
}

impl SuggestionService {
    /// Build the service for a provider. A configured `suggestions_base`
    /// overrides the provider's own endpoint.
    pub fn new(config: &AppConfig, provider: &SearchProvider) -> AppResult<Self> {
        let timeout = config.suggestion_timeout();
        let client = match config.search().suggestions_base() {
            Some(base) => SuggestionClient::new(base, timeout)?,
            None => SuggestionClient::for_provider(provider, timeout)?,
        };
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch raw suggestion data for a query.
    pub async fn fetch_raw(&self, query: &str) -> AppResult<String> {
        Ok(self.client.fetch_raw(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_active_provider_defaults_when_unset() {
        let prefs = Arc::new(PreferenceStore::default());
        assert_eq!(active_provider(&prefs).id, provider::default_provider().id);
    }

    #[test]
    fn test_active_provider_honors_preference() {
        let prefs = Arc::new(PreferenceStore::default());
        prefs.set_search_provider(Some("duckduckgo".to_string()));
        assert_eq!(active_provider(&prefs).id, "duckduckgo");
    }

    #[test]
    fn test_active_provider_falls_back_on_unknown_id() {
        let prefs = Arc::new(PreferenceStore::default());
        prefs.set_search_provider(Some("altavista".to_string()));
        assert_eq!(active_provider(&prefs).id, provider::default_provider().id);
    }

    #[test]
    fn test_service_prefers_configured_base_url() {
        let config: AppConfig = toml::from_str(
            "[search]\nsuggestions_base = \"https://suggest.example.com\"",
        )
        .unwrap();
        let service = SuggestionService::new(&config, &provider::GOOGLE)
            .expect("override base should not require a provider endpoint");
        assert_eq!(service.base_url(), "https://suggest.example.com");
    }

    #[test]
    fn test_service_uses_provider_endpoint_by_default() {
        let config = AppConfig::default();
        let service = SuggestionService::new(&config, &provider::STARTPAGE).unwrap();
        assert_eq!(service.base_url(), "https://www.startpage.com");
    }
}
