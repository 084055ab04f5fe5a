use serde::Deserialize;

/// Search configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SearchConfig {
    /// Id of the active search provider. Falls back to the registry
    /// default when unset.
    provider: Option<String>,
    /// Override for the suggestion endpoint base URL. When unset, the
    /// active provider's own endpoint is used.
    suggestions_base: Option<String>,
}

impl SearchConfig {
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn suggestions_base(&self) -> Option<&str> {
        self.suggestions_base
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}
