//! Search provider descriptors and the static registry.
//!
//! Every web search engine the launcher can hand a query to is described by
//! a [`SearchProvider`] constant. Descriptors are process-lifetime constants
//! with no mutation path; the launcher front end only ever reads them.

use serde::{Deserialize, Serialize};

/// Strategy by which a provider's icon is recolored to match the active
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemingMethod {
    /// Icon is a monochrome glyph tinted with the palette accent.
    Tint,
    /// Icon is used as-is.
    None,
}

/// What kind of surface a provider offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Installed application only.
    App,
    /// Installed application with a website fallback.
    AppAndWebsite,
    /// Website only.
    Website,
}

/// Immutable descriptor for a named web search engine.
///
/// Created once at load time as a constant and never mutated. The provider
/// registry external consumers iterate over is [`providers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchProvider {
    /// Stable identifier used in configuration and preferences.
    pub id: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Icon asset reference, resolved by the rendering layer.
    pub icon: &'static str,
    /// How the icon is recolored against the active palette.
    pub theming_method: ThemingMethod,
    /// Package identifier of the provider's application, if any.
    pub package_name: &'static str,
    /// Provider homepage.
    pub website: &'static str,
    /// Base URL for the suggestion endpoint, when the provider offers one.
    /// Requests go to `<base>/suggestions?q=<query>`.
    pub suggestions_base: Option<&'static str>,
    pub kind: ProviderKind,
    pub sponsored: bool,
}

pub const STARTPAGE: SearchProvider = SearchProvider {
    id: "startpage",
    display_name: "Startpage",
    icon: "ic_startpage",
    theming_method: ThemingMethod::Tint,
    package_name: "",
    website: "https://www.startpage.com/",
    suggestions_base: Some("https://www.startpage.com"),
    kind: ProviderKind::Website,
    sponsored: false,
};

pub const DUCKDUCKGO: SearchProvider = SearchProvider {
    id: "duckduckgo",
    display_name: "DuckDuckGo",
    icon: "ic_duckduckgo",
    theming_method: ThemingMethod::None,
    package_name: "com.duckduckgo.mobile.android",
    website: "https://duckduckgo.com/",
    suggestions_base: None,
    kind: ProviderKind::AppAndWebsite,
    sponsored: false,
};

pub const GOOGLE: SearchProvider = SearchProvider {
    id: "google",
    display_name: "Google",
    icon: "ic_super_g_color",
    theming_method: ThemingMethod::None,
    package_name: "com.google.android.googlequicksearchbox",
    website: "https://www.google.com/",
    suggestions_base: None,
    kind: ProviderKind::AppAndWebsite,
    sponsored: false,
};

pub const KAGI: SearchProvider = SearchProvider {
    id: "kagi",
    display_name: "Kagi",
    icon: "ic_kagi",
    theming_method: ThemingMethod::Tint,
    package_name: "",
    website: "https://kagi.com/",
    suggestions_base: None,
    kind: ProviderKind::Website,
    sponsored: false,
};

pub const SEARX: SearchProvider = SearchProvider {
    id: "searx",
    display_name: "SearXNG",
    icon: "ic_searx",
    theming_method: ThemingMethod::Tint,
    package_name: "",
    website: "https://searx.be/",
    suggestions_base: None,
    kind: ProviderKind::Website,
    sponsored: false,
};

static PROVIDERS: &[SearchProvider] = &[STARTPAGE, DUCKDUCKGO, GOOGLE, KAGI, SEARX];

/// The full provider registry, in stable display order.
pub fn providers() -> &'static [SearchProvider] {
    PROVIDERS
}

/// Look up a provider by its stable id.
pub fn provider_by_id(id: &str) -> Option<&'static SearchProvider> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Registry fallback used when a configured id is unknown.
pub fn default_provider() -> &'static SearchProvider {
    &PROVIDERS[0]
}
