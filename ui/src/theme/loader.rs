use crate::config::defaults::default_themes;
use crate::config::setup::get_themes_dir;
use crate::error::{AppError, AppResult};
use crate::theme::types::{Theme, ThemeMetadata};
use crate::theme::validation::{PresetNameValidator, ThemePathValidator, ThemeValidator};
use crate::validation::Validator;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Where a preset was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSource {
    Embedded,
    UserDir,
}

/// A preset listed by [`ThemeLoader::discover_presets`]
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    pub name: String,
    pub metadata: ThemeMetadata,
    pub source: PresetSource,
}

/// Loads color presets from the user's themes directory, falling back to the
/// presets embedded in the binary.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    themes_dir: Option<PathBuf>,
    name_validator: PresetNameValidator,
    path_validator: ThemePathValidator,
    theme_validator: ThemeValidator,
}

impl ThemeLoader {
    pub fn new() -> Self {
        let themes_dir = match get_themes_dir() {
            Ok(dir) if dir.is_dir() => Some(dir),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Could not determine themes directory: {e}");
                None
            }
        };

        Self::with_optional_dir(themes_dir)
    }

    pub fn with_themes_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_optional_dir(Some(dir.into()))
    }

    /// Only the presets compiled into the binary
    pub fn embedded_only() -> Self {
        Self::with_optional_dir(None)
    }

    fn with_optional_dir(themes_dir: Option<PathBuf>) -> Self {
        Self {
            themes_dir,
            name_validator: PresetNameValidator,
            path_validator: ThemePathValidator,
            theme_validator: ThemeValidator,
        }
    }

    pub fn load_preset(&self, name: &str) -> AppResult<Theme> {
        self.name_validator.validate(name)?;

        if let Some(path) = self.user_preset_path(name) {
            return self.load_from_file(name, &path);
        }

        let file_name = format!("{name}.toml");
        match default_themes().get(file_name.as_str()) {
            Some(content) => self.parse(name, content, "embedded preset"),
            None => Err(AppError::Config(format!(
                "Theme preset '{name}' not found"
            ))),
        }
    }

    fn user_preset_path(&self, name: &str) -> Option<PathBuf> {
        let path = self.themes_dir.as_ref()?.join(format!("{name}.toml"));
        path.is_file().then_some(path)
    }

    fn load_from_file(&self, name: &str, path: &PathBuf) -> AppResult<Theme> {
        self.path_validator.validate(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read theme file '{}': {e}",
                path.display()
            ))
        })?;

        self.parse(name, &content, &path.display().to_string())
    }

    fn parse(&self, name: &str, content: &str, origin: &str) -> AppResult<Theme> {
        let mut theme: Theme = toml::from_str(content).map_err(|e| {
            AppError::Config(format!("Failed to parse theme '{origin}': {e}"))
        })?;

        // Presets are addressed by file name; the embedded name is informational.
        if theme.metadata.name != name {
            if !theme.metadata.name.is_empty() {
                log::debug!(
                    "Theme '{origin}' declares name '{}', using '{name}'",
                    theme.metadata.name
                );
            }
            theme.metadata.name = name.to_string();
        }

        self.theme_validator.validate(&theme)?;
        log::debug!("Loaded theme preset '{name}' from {origin}");
        Ok(theme)
    }

    /// All loadable presets, sorted by name. A user file shadows the embedded
    /// preset of the same name; files that fail to load are skipped.
    pub fn discover_presets(&self) -> AppResult<Vec<PresetEntry>> {
        let mut presets = BTreeMap::new();

        for (file_name, content) in default_themes() {
            let Some(name) = file_name.strip_suffix(".toml") else {
                continue;
            };
            match self.parse(name, content, "embedded preset") {
                Ok(theme) => {
                    presets.insert(
                        name.to_string(),
                        PresetEntry {
                            name: name.to_string(),
                            metadata: theme.metadata,
                            source: PresetSource::Embedded,
                        },
                    );
                }
                Err(e) => log::warn!("Skipping embedded preset '{name}': {e}"),
            }
        }

        if let Some(dir) = self.themes_dir.as_ref().filter(|dir| dir.is_dir()) {
            let entries = fs::read_dir(dir).map_err(|e| {
                AppError::Config(format!(
                    "Failed to read themes directory '{}': {e}",
                    dir.display()
                ))
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|e| AppError::Config(format!("Failed to read directory entry: {e}")))?
                    .path();

                if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|n| n.to_str()) else {
                    continue;
                };
                if self.name_validator.validate(name).is_err() {
                    continue;
                }

                match self.load_from_file(name, &path) {
                    Ok(theme) => {
                        presets.insert(
                            name.to_string(),
                            PresetEntry {
                                name: name.to_string(),
                                metadata: theme.metadata,
                                source: PresetSource::UserDir,
                            },
                        );
                    }
                    Err(e) => log::warn!("Skipping theme file '{}': {e}", path.display()),
                }
            }
        }

        Ok(presets.into_values().collect())
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::{DEFAULT_PRESET, ThemeColors};
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_embedded_classic_matches_compiled_defaults() {
        let loader = ThemeLoader::embedded_only();

        let theme = assert_ok!(loader.load_preset(DEFAULT_PRESET));

        assert_eq!(theme.metadata.name, DEFAULT_PRESET);
        assert_eq!(theme.colors, ThemeColors::default());
    }

    #[test]
    fn test_missing_preset_is_config_error() {
        let loader = ThemeLoader::embedded_only();

        let err = assert_err!(loader.load_preset("nonexistent"));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_invalid_preset_name_rejected_before_lookup() {
        let loader = ThemeLoader::embedded_only();
        assert_err!(loader.load_preset("../classic"));
    }

    #[test]
    fn test_discover_lists_every_embedded_preset() {
        let loader = ThemeLoader::embedded_only();

        let presets = assert_ok!(loader.discover_presets());
        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["blush", "classic", "midnight", "sage", "sand"]);
        assert!(presets.iter().all(|p| p.source == PresetSource::Embedded));
        assert!(presets.iter().all(|p| !p.metadata.description.is_empty()));
    }

    #[test]
    fn test_user_preset_is_named_after_its_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("dusk.toml"),
            r##"
[metadata]
name = "sunset"
description = "Copied from another preset"

[colors]
primary = "#6b7f6a"
secondary = "#b7c4a8"
background = "#f6f7f2"
contrast = "#2f3a2f"
accent = "#a3b18a"
"##,
        )
        .expect("write preset");
        let loader = ThemeLoader::with_themes_dir(dir.path());

        let theme = assert_ok!(loader.load_preset("dusk"));
        assert_eq!(theme.metadata.name, "dusk");

        let presets = assert_ok!(loader.discover_presets());
        let dusk = presets
            .iter()
            .find(|p| p.name == "dusk")
            .expect("dusk listed");
        assert_eq!(dusk.metadata.name, "dusk");
        assert_eq!(dusk.source, PresetSource::UserDir);
        assert!(presets.iter().all(|p| p.name != "sunset"));
    }
}
