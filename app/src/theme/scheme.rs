//! Color schemes: tonal palettes per hue group.
//!
//! A scheme is the launcher-side stand-in for the wallpaper color
//! extractor: five tonal palettes (accent1-3, neutral1-2), each mapping a
//! lightness tier to a color. Schemes either come from a TOML file or are
//! derived from a single accent seed by blending toward white and black in
//! linear light, so tiers darken evenly instead of drifting muddy.

use super::ThemeError;
use super::types::{COLOR_TIERS, ColorGroup, Rgb};
use super::validation::{SchemeNameValidator, SchemePathValidator, SchemeValidator};
use crate::error::{AppError, AppResult};
use crate::validation::Validator;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Default accent seed used when the user has not picked one.
pub const DEFAULT_ACCENT: Rgb = Rgb(0x21, 0x96, 0xf3);

/// Convert an sRGB component (0-255) to linear light (0.0-1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value (0.0-1.0) to sRGB (0-255), clamped.
fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

/// Blend two colors in linear light. `t` = 0 yields `a`, `t` = 1 yields `b`.
fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| linear_to_srgb(srgb_to_linear(x) * (1.0 - t) + srgb_to_linear(y) * t);
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// The gray of equal perceived brightness, used to mute accent seeds into
/// neutral palettes.
fn luminance_gray(color: Rgb) -> Rgb {
    let lum = 0.2126 * srgb_to_linear(color.0)
        + 0.7152 * srgb_to_linear(color.1)
        + 0.0722 * srgb_to_linear(color.2);
    let g = linear_to_srgb(lum);
    Rgb(g, g, g)
}

/// A generated tonal palette: color tier (lightness index) to color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TonalPalette {
    colors: BTreeMap<u16, Rgb>,
}

impl TonalPalette {
    pub fn get(&self, tier: u16) -> Option<Rgb> {
        self.colors.get(&tier).copied()
    }

    pub fn insert(&mut self, tier: u16, color: Rgb) {
        self.colors.insert(tier, color);
    }

    pub fn tiers(&self) -> impl Iterator<Item = u16> + '_ {
        self.colors.keys().copied()
    }

    /// Generate the full tier range from a seed color. Tier 500 is the
    /// seed itself; tiers run from white (0) to black (1000).
    fn from_seed(seed: Rgb) -> Self {
        let mut colors = BTreeMap::new();
        for tier in COLOR_TIERS {
            let color = if tier <= 500 {
                blend(Rgb::WHITE, seed, tier as f64 / 500.0)
            } else {
                blend(seed, Rgb::BLACK, (tier - 500) as f64 / 500.0)
            };
            colors.insert(tier, color);
        }
        Self { colors }
    }
}

impl FromIterator<(u16, Rgb)> for TonalPalette {
    fn from_iter<I: IntoIterator<Item = (u16, Rgb)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

/// A complete color scheme: one tonal palette per hue group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScheme {
    pub accent1: TonalPalette,
    pub accent2: TonalPalette,
    pub accent3: TonalPalette,
    pub neutral1: TonalPalette,
    pub neutral2: TonalPalette,
}

impl ColorScheme {
    pub fn palette(&self, group: ColorGroup) -> &TonalPalette {
        match group {
            ColorGroup::Accent1 => &self.accent1,
            ColorGroup::Accent2 => &self.accent2,
            ColorGroup::Accent3 => &self.accent3,
            ColorGroup::Neutral1 => &self.neutral1,
            ColorGroup::Neutral2 => &self.neutral2,
        }
    }

    /// Look up the color for a group at a lightness tier.
    pub fn color(&self, group: ColorGroup, tier: u16) -> Option<Rgb> {
        self.palette(group).get(tier)
    }

    /// Derive a full scheme from an accent seed.
    ///
    /// Secondary accents are progressively muted toward gray; neutrals are
    /// almost gray with a trace of the seed hue left in.
    pub fn derive(seed: Rgb) -> Self {
        let gray = luminance_gray(seed);
        let muted = |amount: f64| TonalPalette::from_seed(blend(seed, gray, amount));

        Self {
            accent1: TonalPalette::from_seed(seed),
            accent2: muted(0.3),
            accent3: muted(0.5),
            neutral1: muted(0.85),
            neutral2: muted(0.92),
        }
    }
}

/// Source of the active color scheme.
///
/// The accent argument is the user's accent-color preference; providers may
/// ignore it (file-backed schemes are fixed) or use it as the seed.
pub trait SchemeProvider: Send {
    fn scheme(&self, accent: Option<Rgb>) -> AppResult<ColorScheme>;
}

/// Derives the scheme from the accent preference, falling back to
/// [`DEFAULT_ACCENT`].
#[derive(Debug, Clone)]
pub struct DerivedSchemeProvider {
    default_seed: Rgb,
}

impl DerivedSchemeProvider {
    pub fn new(default_seed: Rgb) -> Self {
        Self { default_seed }
    }
}

impl Default for DerivedSchemeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ACCENT)
    }
}

impl SchemeProvider for DerivedSchemeProvider {
    fn scheme(&self, accent: Option<Rgb>) -> AppResult<ColorScheme> {
        Ok(ColorScheme::derive(accent.unwrap_or(self.default_seed)))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SchemeMetadata {
    name: String,
    #[allow(dead_code)]
    description: Option<String>,
}

/// On-disk scheme file: `[metadata]` plus one table of tier -> hex string
/// per hue group.
#[derive(Debug, Clone, Deserialize)]
struct SchemeFile {
    metadata: SchemeMetadata,
    accent1: BTreeMap<String, String>,
    accent2: BTreeMap<String, String>,
    accent3: BTreeMap<String, String>,
    neutral1: BTreeMap<String, String>,
    neutral2: BTreeMap<String, String>,
}

impl SchemeFile {
    fn group(&self, group: ColorGroup) -> &BTreeMap<String, String> {
        match group {
            ColorGroup::Accent1 => &self.accent1,
            ColorGroup::Accent2 => &self.accent2,
            ColorGroup::Accent3 => &self.accent3,
            ColorGroup::Neutral1 => &self.neutral1,
            ColorGroup::Neutral2 => &self.neutral2,
        }
    }

    fn into_scheme(self, name: &str) -> Result<ColorScheme, ThemeError> {
        let mut scheme = ColorScheme::default();
        for group in ColorGroup::ALL {
            let mut palette = TonalPalette::default();
            for (tier, hex) in self.group(group) {
                let tier: u16 = tier.parse().map_err(|_| ThemeError::SchemeLoad {
                    name: name.to_string(),
                    reason: format!("invalid tier '{tier}' in [{group}]"),
                })?;
                palette.insert(tier, Rgb::from_hex(hex)?);
            }
            match group {
                ColorGroup::Accent1 => scheme.accent1 = palette,
                ColorGroup::Accent2 => scheme.accent2 = palette,
                ColorGroup::Accent3 => scheme.accent3 = palette,
                ColorGroup::Neutral1 => scheme.neutral1 = palette,
                ColorGroup::Neutral2 => scheme.neutral2 = palette,
            }
        }
        Ok(scheme)
    }
}

/// Loads schemes from TOML files in a schemes directory.
pub struct FileSchemeProvider {
    schemes_dir: PathBuf,
    name: String,
    name_validator: SchemeNameValidator,
    path_validator: SchemePathValidator,
    scheme_validator: SchemeValidator,
}

impl FileSchemeProvider {
    pub fn new(schemes_dir: Option<&str>, name: &str) -> Self {
        let schemes_dir = schemes_dir
            .map(PathBuf::from)
            .unwrap_or_else(Self::find_schemes_directory);

        Self {
            schemes_dir,
            name: name.to_string(),
            name_validator: SchemeNameValidator,
            path_validator: SchemePathValidator,
            scheme_validator: SchemeValidator,
        }
    }

    fn find_schemes_directory() -> PathBuf {
        // Probe the locations the binary is usually run from, then the
        // user's config directory.
        let mut possible_paths = vec![
            PathBuf::from("schemes"),
            PathBuf::from("app/schemes"),
            PathBuf::from("../schemes"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            possible_paths.push(config_dir.join("hearth").join("schemes"));
        }

        for path in possible_paths {
            if path.exists() && path.is_dir() {
                log::info!("Found schemes directory at: {}", path.display());
                return path;
            }
        }

        log::warn!(
            "Could not find schemes directory in any expected location, using default 'schemes'"
        );
        PathBuf::from("schemes")
    }

    pub fn load(&self) -> AppResult<ColorScheme> {
        self.load_named(&self.name)
    }

    fn load_named(&self, name: &str) -> AppResult<ColorScheme> {
        self.name_validator.validate(name)?;

        let scheme_path = self.schemes_dir.join(format!("{name}.toml"));
        self.path_validator.validate(&scheme_path)?;

        let content = fs::read_to_string(&scheme_path).map_err(|e| {
            AppError::Theme(format!(
                "Failed to read scheme file '{}': {}",
                scheme_path.display(),
                e
            ))
        })?;

        let file: SchemeFile = toml::from_str(&content).map_err(|e| {
            AppError::Theme(format!(
                "Failed to parse scheme file '{}': {}",
                scheme_path.display(),
                e
            ))
        })?;

        let display_name = if file.metadata.name.is_empty() {
            name.to_string()
        } else {
            file.metadata.name.clone()
        };

        let scheme = file.into_scheme(name)?;
        self.scheme_validator.validate(&scheme)?;

        log::info!("Loaded color scheme '{display_name}'");
        Ok(scheme)
    }

    /// List scheme names available in the schemes directory.
    pub fn discover_schemes(&self) -> AppResult<Vec<String>> {
        if !self.schemes_dir.exists() {
            return Ok(vec![]);
        }

        let mut schemes = Vec::new();
        let entries = fs::read_dir(&self.schemes_dir).map_err(|e| {
            AppError::Theme(format!(
                "Failed to read schemes directory '{}': {}",
                self.schemes_dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| AppError::Theme(format!("Failed to read directory entry: {e}")))?;

            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
                if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                    if self.name_validator.validate(name).is_ok() {
                        schemes.push(name.to_string());
                    }
                }
            }
        }

        schemes.sort();
        Ok(schemes)
    }
}

impl SchemeProvider for FileSchemeProvider {
    fn scheme(&self, _accent: Option<Rgb>) -> AppResult<ColorScheme> {
        self.load()
    }
}
