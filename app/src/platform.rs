//! Platform signals feeding the dark-mode decision.
//!
//! When the user's theme choice is `System`, the resolver asks the platform
//! whether dark mode is active. Not every platform can answer; when it
//! cannot, the wallpaper capability check is the fallback, matching how
//! older launcher hosts decide.

use std::env;

/// Source of the platform dark-mode and wallpaper signals.
pub trait DarkModeSignal: Send + Sync {
    /// Whether the platform reports dark mode. `None` when the platform
    /// has no such signal.
    fn system_dark_mode(&self) -> Option<bool>;

    /// Whether the current wallpaper supports a dark theme.
    fn wallpaper_supports_dark_theme(&self) -> bool;
}

/// Default signal for desktop use, driven by environment hooks so the CLI
/// stays scriptable: `HEARTH_SYSTEM_DARK` and `HEARTH_WALLPAPER_DARK`.
pub struct DesktopSignal;

pub const SYSTEM_DARK_ENV: &str = "HEARTH_SYSTEM_DARK";
pub const WALLPAPER_DARK_ENV: &str = "HEARTH_WALLPAPER_DARK";

/// Parse a boolean flag value the way shell users write them.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().as_deref().and_then(parse_flag)
}

impl DarkModeSignal for DesktopSignal {
    fn system_dark_mode(&self) -> Option<bool> {
        env_flag(SYSTEM_DARK_ENV)
    }

    fn wallpaper_supports_dark_theme(&self) -> bool {
        env_flag(WALLPAPER_DARK_ENV).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }
}
