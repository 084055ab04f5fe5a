use super::resolver;
use super::scheme::SchemeProvider;
use super::types::{Palette, Rgb};
use crate::error::{AppError, AppResult};
use crate::platform::DarkModeSignal;
use crate::prefs::{PrefKey, PreferenceStore, Subscription};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

// Global theme manager instance - wrapped in Mutex for thread-safe updates
static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

// Fallback colors for when the manager is uninitialized or busy
mod fallback_colors {
    use crate::theme::types::{Palette, Rgb};

    pub const PRIMARY: Rgb = Rgb(0x21, 0x96, 0xf3);
    pub const SECONDARY: Rgb = PRIMARY;
    pub const BACKGROUND: Rgb = Rgb(0x12, 0x12, 0x12);
    pub const SURFACE: Rgb = Rgb(0x1e, 0x1e, 0x1e);

    pub const PALETTE: Palette = Palette {
        primary: PRIMARY,
        secondary: SECONDARY,
        background: BACKGROUND,
        surface: SURFACE,
    };
}

/// Owner of the resolved palette.
///
/// Holds the current [`Palette`] and recomputes it whenever the
/// accent-color or theme-choice preference changes. Other preference keys
/// are ignored. Reads never block: accessors fall back to default colors
/// under contention so the render path cannot stall on a recompute.
pub struct ThemeManager {
    palette: Palette,
    dark: bool,
    revision: u64,
    prefs: Arc<PreferenceStore>,
    provider: Box<dyn SchemeProvider>,
    signal: Box<dyn DarkModeSignal>,
    _subscription: Option<Subscription>,
}

impl ThemeManager {
    /// Initialize the global theme manager - call this once at app startup
    pub fn init_global(
        prefs: Arc<PreferenceStore>,
        provider: Box<dyn SchemeProvider>,
        signal: Box<dyn DarkModeSignal>,
    ) -> AppResult<()> {
        let dark = resolver::resolve_dark_mode(&prefs, signal.as_ref());
        let scheme = provider.scheme(prefs.accent_color())?;
        let palette = resolver::resolve_palette(dark, &scheme)?;

        let subscription = prefs.subscribe(|key| match key {
            PrefKey::AccentColor | PrefKey::ThemeChoice => {
                if let Err(e) = ThemeManager::global_recompute() {
                    log::warn!("Palette recomputation failed: {e}");
                }
            }
            _ => {}
        });

        let manager = Self {
            palette,
            dark,
            revision: 0,
            prefs,
            provider,
            signal,
            _subscription: Some(subscription),
        };

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(manager))
            .map_err(|_| AppError::Theme("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized (dark = {dark})");
        Ok(())
    }

    /// Get the global theme manager instance
    pub fn global() -> &'static Mutex<ThemeManager> {
        GLOBAL_THEME_MANAGER
            .get()
            .expect("Theme manager not initialized. Call ThemeManager::init_global() first.")
    }

    /// Safe helper to read from the manager with a fallback instead of
    /// blocking.
    fn with_theme_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&ThemeManager) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(manager) => f(&manager),
                Err(_) => {
                    log::warn!("Theme manager lock contention, using fallback");
                    fallback
                }
            },
            None => {
                log::warn!("Theme manager not initialized, using fallback");
                fallback
            }
        }
    }

    /// Recompute the palette from the current preferences and signals.
    pub fn recompute(&mut self) -> AppResult<()> {
        let dark = resolver::resolve_dark_mode(&self.prefs, self.signal.as_ref());
        let scheme = self.provider.scheme(self.prefs.accent_color())?;
        let palette = resolver::resolve_palette(dark, &scheme)?;

        self.dark = dark;
        self.palette = palette;
        self.revision += 1;
        log::info!(
            "Theme palette recomputed (dark = {dark}, revision = {})",
            self.revision
        );
        Ok(())
    }

    /// Recompute through the global instance.
    pub fn global_recompute() -> AppResult<()> {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(mut manager) => manager.recompute(),
                Err(_) => Err(AppError::Theme(
                    "Theme manager is busy, try again".to_string(),
                )),
            },
            None => Err(AppError::Theme(
                "Theme manager not initialized".to_string(),
            )),
        }
    }

    pub fn primary() -> Rgb {
        Self::with_theme_manager(|m| m.palette.primary, fallback_colors::PRIMARY)
    }

    pub fn secondary() -> Rgb {
        Self::with_theme_manager(|m| m.palette.secondary, fallback_colors::SECONDARY)
    }

    pub fn background() -> Rgb {
        Self::with_theme_manager(|m| m.palette.background, fallback_colors::BACKGROUND)
    }

    pub fn surface() -> Rgb {
        Self::with_theme_manager(|m| m.palette.surface, fallback_colors::SURFACE)
    }

    /// The full palette in one read.
    pub fn current_palette() -> Palette {
        Self::with_theme_manager(|m| m.palette, fallback_colors::PALETTE)
    }

    /// Whether the current palette was resolved for dark mode.
    pub fn is_dark() -> bool {
        Self::with_theme_manager(|m| m.dark, true)
    }

    /// Monotonic counter bumped on every recomputation, so the rendering
    /// layer can tell whether its cached colors are stale.
    pub fn revision() -> u64 {
        Self::with_theme_manager(|m| m.revision, 0)
    }
}
