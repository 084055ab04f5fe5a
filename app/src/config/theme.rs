use crate::theme::types::ThemeChoice;
use serde::Deserialize;

/// Theme configuration, used to seed the preference store at startup.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeConfig {
    /// Dark/light/system selection.
    choice: Option<ThemeChoice>,
    /// Accent color seed as a hex string, e.g. "#2196f3".
    accent: Option<String>,
    /// Name of a scheme file to load instead of deriving one from the
    /// accent color.
    scheme: Option<String>,
}

impl ThemeConfig {
    pub fn choice(&self) -> ThemeChoice {
        self.choice.unwrap_or(ThemeChoice::System)
    }

    pub fn accent(&self) -> Option<&str> {
        self.accent.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref().filter(|s| !s.trim().is_empty())
    }
}
