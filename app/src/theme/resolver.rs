//! Dark-mode decision and palette resolution.
//!
//! `resolve_dark_mode` honors an explicit user choice first and only then
//! consults the platform. `resolve_palette` picks the four palette colors
//! from fixed lightness tiers of the scheme: darker tiers in dark mode,
//! lighter ones in light mode. A missing tier is an explicit error, never
//! a panic.

use super::ThemeError;
use super::scheme::ColorScheme;
use super::types::{ColorGroup, Palette, ThemeChoice};
use crate::platform::DarkModeSignal;
use crate::prefs::PreferenceStore;

pub const ACCENT_TIER_DARK: u16 = 100;
pub const ACCENT_TIER_LIGHT: u16 = 600;
pub const SURFACE_TIER_DARK: u16 = 900;
pub const SURFACE_TIER_LIGHT: u16 = 100;
pub const BACKGROUND_TIER_DARK: u16 = 900;
pub const BACKGROUND_TIER_LIGHT: u16 = 50;

/// Decide whether the launcher renders dark.
///
/// An explicit user selection always wins. `System` defers to the platform
/// dark-mode flag; platforms that cannot report one fall back to the
/// wallpaper capability check.
pub fn resolve_dark_mode(prefs: &PreferenceStore, signal: &dyn DarkModeSignal) -> bool {
    match prefs.theme_choice() {
        ThemeChoice::Light => false,
        ThemeChoice::Dark => true,
        ThemeChoice::System => signal
            .system_dark_mode()
            .unwrap_or_else(|| signal.wallpaper_supports_dark_theme()),
    }
}

/// Derive the 4-color palette for the given mode from a color scheme.
///
/// Primary and secondary share the accent color, mirroring how the
/// launcher applies one accent across both roles.
pub fn resolve_palette(dark: bool, scheme: &ColorScheme) -> Result<Palette, ThemeError> {
    let color = |group, tier| {
        scheme
            .color(group, tier)
            .ok_or(ThemeError::MissingTier { group, tier })
    };

    let accent = color(
        ColorGroup::Accent1,
        if dark { ACCENT_TIER_DARK } else { ACCENT_TIER_LIGHT },
    )?;
    let surface = color(
        ColorGroup::Neutral1,
        if dark { SURFACE_TIER_DARK } else { SURFACE_TIER_LIGHT },
    )?;
    let background = color(
        ColorGroup::Neutral1,
        if dark {
            BACKGROUND_TIER_DARK
        } else {
            BACKGROUND_TIER_LIGHT
        },
    )?;

    Ok(Palette {
        primary: accent,
        secondary: accent,
        background,
        surface,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::scheme::TonalPalette;
    use crate::theme::types::Rgb;
    use std::sync::Arc;

    struct FixedSignal {
        system: Option<bool>,
        wallpaper: bool,
    }

    impl DarkModeSignal for FixedSignal {
        fn system_dark_mode(&self) -> Option<bool> {
            self.system
        }

        fn wallpaper_supports_dark_theme(&self) -> bool {
            self.wallpaper
        }
    }

    fn store_with(choice: ThemeChoice) -> Arc<PreferenceStore> {
        let store = Arc::new(PreferenceStore::default());
        store.set_theme_choice(choice);
        store
    }

    #[test]
    fn test_explicit_choice_wins_over_platform_state() {
        let dark_platform = FixedSignal {
            system: Some(true),
            wallpaper: true,
        };
        assert!(!resolve_dark_mode(
            &store_with(ThemeChoice::Light),
            &dark_platform
        ));

        let light_platform = FixedSignal {
            system: Some(false),
            wallpaper: false,
        };
        assert!(resolve_dark_mode(
            &store_with(ThemeChoice::Dark),
            &light_platform
        ));
    }

    #[test]
    fn test_system_choice_follows_platform_flag() {
        let prefs = store_with(ThemeChoice::System);
        assert!(resolve_dark_mode(
            &prefs,
            &FixedSignal {
                system: Some(true),
                wallpaper: false,
            }
        ));
        assert!(!resolve_dark_mode(
            &prefs,
            &FixedSignal {
                system: Some(false),
                wallpaper: true,
            }
        ));
    }

    #[test]
    fn test_system_choice_falls_back_to_wallpaper() {
        let prefs = store_with(ThemeChoice::System);
        assert!(resolve_dark_mode(
            &prefs,
            &FixedSignal {
                system: None,
                wallpaper: true,
            }
        ));
        assert!(!resolve_dark_mode(
            &prefs,
            &FixedSignal {
                system: None,
                wallpaper: false,
            }
        ));
    }

    #[test]
    fn test_palette_tier_selection() {
        let scheme = ColorScheme::derive(Rgb(0x21, 0x96, 0xf3));

        let dark = resolve_palette(true, &scheme).unwrap();
        assert_eq!(
            dark.primary,
            scheme.color(ColorGroup::Accent1, ACCENT_TIER_DARK).unwrap()
        );
        assert_eq!(dark.secondary, dark.primary);
        assert_eq!(
            dark.surface,
            scheme
                .color(ColorGroup::Neutral1, SURFACE_TIER_DARK)
                .unwrap()
        );
        assert_eq!(dark.background, dark.surface);

        let light = resolve_palette(false, &scheme).unwrap();
        assert_eq!(
            light.primary,
            scheme
                .color(ColorGroup::Accent1, ACCENT_TIER_LIGHT)
                .unwrap()
        );
        assert_eq!(
            light.surface,
            scheme
                .color(ColorGroup::Neutral1, SURFACE_TIER_LIGHT)
                .unwrap()
        );
        assert_eq!(
            light.background,
            scheme
                .color(ColorGroup::Neutral1, BACKGROUND_TIER_LIGHT)
                .unwrap()
        );
        assert_ne!(light.surface, light.background);
    }

    #[test]
    fn test_dark_palette_from_minimal_scheme() {
        // Dark mode needs only accent1[100] and neutral1[900].
        let mut scheme = ColorScheme::default();
        scheme.accent1 = TonalPalette::from_iter([(100, Rgb(0x11, 0x22, 0x33))]);
        scheme.neutral1 = TonalPalette::from_iter([(900, Rgb::BLACK)]);

        let palette = resolve_palette(true, &scheme).unwrap();
        assert_eq!(palette.primary, Rgb(0x11, 0x22, 0x33));
        assert_eq!(palette.secondary, Rgb(0x11, 0x22, 0x33));
        assert_eq!(palette.surface, Rgb::BLACK);
        assert_eq!(palette.background, Rgb::BLACK);
    }

    #[test]
    fn test_missing_tier_is_an_error_not_a_panic() {
        let scheme = ColorScheme::default();
        let result = resolve_palette(true, &scheme);
        assert_eq!(
            result,
            Err(ThemeError::MissingTier {
                group: ColorGroup::Accent1,
                tier: ACCENT_TIER_DARK,
            })
        );
    }
}
