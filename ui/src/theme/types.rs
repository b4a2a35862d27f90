use crate::theme::validation::ThemeValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tuirealm::props::Color;

/// Name of the preset whose colors are compiled into the binary.
pub const DEFAULT_PRESET: &str = "classic";

/// The five named color slots every display element reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRole {
    Primary,
    Secondary,
    Background,
    Contrast,
    Accent,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 5] = [
        ThemeRole::Primary,
        ThemeRole::Secondary,
        ThemeRole::Background,
        ThemeRole::Contrast,
        ThemeRole::Accent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeRole::Primary => "primary",
            ThemeRole::Secondary => "secondary",
            ThemeRole::Background => "background",
            ThemeRole::Contrast => "contrast",
            ThemeRole::Accent => "accent",
        }
    }

    /// Name of the global style variable mirroring this role.
    pub fn css_variable(&self) -> String {
        format!("--color-{}", self.as_str())
    }
}

impl Display for ThemeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeRole {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeValidationError::UnknownRole {
                role: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub contrast: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#9c8b7a".to_string(),
            secondary: "#e0c9b8".to_string(),
            background: "#faf9f7".to_string(),
            contrast: "#292524".to_string(),
            accent: "#c5b8ac".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn get(&self, role: ThemeRole) -> &str {
        match role {
            ThemeRole::Primary => &self.primary,
            ThemeRole::Secondary => &self.secondary,
            ThemeRole::Background => &self.background,
            ThemeRole::Contrast => &self.contrast,
            ThemeRole::Accent => &self.accent,
        }
    }

    /// Replace one role and return the previous value. No validation here;
    /// the store validates before calling.
    pub(crate) fn set(&mut self, role: ThemeRole, value: String) -> String {
        let slot = match role {
            ThemeRole::Primary => &mut self.primary,
            ThemeRole::Secondary => &mut self.secondary,
            ThemeRole::Background => &mut self.background,
            ThemeRole::Contrast => &mut self.contrast,
            ThemeRole::Accent => &mut self.accent,
        };
        std::mem::replace(slot, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeRole, &str)> {
        ThemeRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Terminal color for a role
    pub fn color(&self, role: ThemeRole) -> Color {
        hex_to_color(self.get(role))
    }
}

/// Convert a `#rrggbb` string to a tuirealm color; anything else resets.
pub fn hex_to_color(hex: &str) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            metadata: ThemeMetadata {
                name: DEFAULT_PRESET.to_string(),
                description: "Warm beige on ivory".to_string(),
                author: None,
            },
            colors: ThemeColors::default(),
        }
    }
}

/// `[theme]` section of the configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    preset: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
    export_css: Option<PathBuf>,
}

impl ThemeConfig {
    pub fn new(preset: &str) -> Self {
        Self {
            preset: Some(preset.to_string()),
            ..Self::default()
        }
    }

    pub fn preset(&self) -> &str {
        self.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// Per-role overrides applied on top of the preset, as configured
    pub fn raw_color_overrides(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    /// Per-role overrides with role names resolved
    pub fn color_overrides(&self) -> Result<Vec<(ThemeRole, &str)>, ThemeValidationError> {
        self.colors
            .iter()
            .map(|(role, value)| role.parse::<ThemeRole>().map(|role| (role, value.as_str())))
            .collect()
    }

    pub fn with_color(mut self, role: ThemeRole, value: &str) -> Self {
        self.colors.insert(role.to_string(), value.to_string());
        self
    }

    pub fn with_export_css(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_css = Some(path.into());
        self
    }

    /// Where to mirror the `--color-*` variables as a stylesheet, if anywhere
    pub fn export_css(&self) -> Option<&PathBuf> {
        self.export_css.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_are_populated() {
        let colors = ThemeColors::default();
        assert_eq!(colors.get(ThemeRole::Primary), "#9c8b7a");
        assert_eq!(colors.get(ThemeRole::Secondary), "#e0c9b8");
        assert_eq!(colors.get(ThemeRole::Background), "#faf9f7");
        assert_eq!(colors.get(ThemeRole::Contrast), "#292524");
        assert_eq!(colors.get(ThemeRole::Accent), "#c5b8ac");
        assert_eq!(colors.iter().count(), 5);
    }

    #[test]
    fn test_role_parsing_and_css_names() {
        assert_eq!("Accent".parse::<ThemeRole>().unwrap(), ThemeRole::Accent);
        assert!("highlight".parse::<ThemeRole>().is_err());
        assert_eq!(ThemeRole::Background.css_variable(), "--color-background");
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#9c8b7a"), Color::Rgb(0x9c, 0x8b, 0x7a));
        assert_eq!(hex_to_color("#FAF9F7"), Color::Rgb(0xfa, 0xf9, 0xf7));
        assert_eq!(hex_to_color("9c8b7a"), Color::Reset);
        assert_eq!(hex_to_color("#9c8b7"), Color::Reset);
        assert_eq!(hex_to_color("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut colors = ThemeColors::default();
        let previous = colors.set(ThemeRole::Accent, "#000000".to_string());
        assert_eq!(previous, "#c5b8ac");
        assert_eq!(colors.accent, "#000000");
    }

    #[test]
    fn test_theme_config_defaults_to_classic() {
        let config = ThemeConfig::default();
        assert_eq!(config.preset(), DEFAULT_PRESET);
        assert!(config.raw_color_overrides().is_empty());
        assert!(config.export_css().is_none());
    }

    #[test]
    fn test_color_overrides_resolve_roles() {
        let config: ThemeConfig =
            toml::from_str("preset = 'sage'\n[colors]\nAccent = '#d4a5a5'").expect("valid toml");

        let overrides = config.color_overrides().expect("known role");
        assert_eq!(overrides, vec![(ThemeRole::Accent, "#d4a5a5")]);

        let built = ThemeConfig::new("sage").with_color(ThemeRole::Primary, "#000000");
        assert_eq!(built.color_overrides().expect("known role").len(), 1);

        let bad: ThemeConfig = toml::from_str("[colors]\nhighlight = '#ffffff'").expect("valid toml");
        assert!(bad.color_overrides().is_err());
    }
}
