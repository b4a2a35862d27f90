use std::collections::HashMap;

/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

/// Preset files embedded in the binary, keyed by file name
pub fn default_themes() -> HashMap<&'static str, &'static str> {
    let mut themes = HashMap::new();
    themes.insert("classic.toml", include_str!("../../themes/classic.toml"));
    themes.insert("sand.toml", include_str!("../../themes/sand.toml"));
    themes.insert("blush.toml", include_str!("../../themes/blush.toml"));
    themes.insert("sage.toml", include_str!("../../themes/sage.toml"));
    themes.insert("midnight.toml", include_str!("../../themes/midnight.toml"));
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_default_config_is_not_empty() {
        assert!(!DEFAULT_CONFIG.is_empty());
        assert!(DEFAULT_CONFIG.contains("[event]"));
        assert!(DEFAULT_CONFIG.contains("[countdown]"));
        assert!(DEFAULT_CONFIG.contains("2025-03-24T18:00:00"));
    }

    #[test]
    fn test_default_themes_available() {
        let themes = default_themes();
        assert_eq!(themes.len(), 5);
        assert!(themes.contains_key("classic.toml"));

        for (name, content) in themes.iter() {
            assert!(content.contains("[colors]"), "Theme {name} has no colors");
        }
    }
}
