//! # Theme System Module
//!
//! Dynamic theming for the Hearth launcher. A wallpaper-style
//! [`ColorScheme`](scheme::ColorScheme) (tonal palettes per hue group) and
//! the dark-mode decision are combined into the small
//! [`Palette`](types::Palette) the rendering layer consumes. The palette is
//! recomputed whenever the accent-color or theme-choice preference changes.
//!
//! ## Architecture
//!
//! - **[`types`]** - Colors, tiers, theme choice, and the resolved palette
//! - **[`scheme`]** - Tonal palettes, scheme derivation, and scheme providers
//! - **[`resolver`]** - Dark-mode decision and palette resolution
//! - **[`manager`]** - Global theme manager with preference subscriptions
//! - **[`validation`]** - Validators for scheme names, colors, and files
//!
//! ## Basic Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use hearth::prefs::PreferenceStore;
//! use hearth::platform::DesktopSignal;
//! use hearth::theme::{ThemeManager, scheme::DerivedSchemeProvider};
//!
//! let prefs = Arc::new(PreferenceStore::default());
//! ThemeManager::init_global(
//!     prefs,
//!     Box::new(DerivedSchemeProvider::default()),
//!     Box::new(DesktopSignal),
//! )?;
//!
//! // Accessors fall back to default colors when uninitialized.
//! let accent = ThemeManager::primary();
//! let surface = ThemeManager::surface();
//! # Ok::<(), hearth::AppError>(())
//! ```

pub mod manager;
pub mod resolver;
pub mod scheme;
pub mod types;
pub mod validation;

pub use manager::ThemeManager;
pub use types::{Palette, Rgb, ThemeChoice};

use thiserror::Error;
use types::ColorGroup;

/// Errors produced while resolving or loading themes.
///
/// A missing color tier is an explicit error rather than a panic: the
/// manager falls back to default colors and keeps the launcher usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The color scheme has no entry for the requested tier.
    #[error("Color scheme has no {group} color at tier {tier}")]
    MissingTier { group: ColorGroup, tier: u16 },

    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// A scheme file could not be loaded or failed validation.
    #[error("Failed to load scheme '{name}': {reason}")]
    SchemeLoad { name: String, reason: String },
}
