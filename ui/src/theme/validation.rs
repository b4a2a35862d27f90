use crate::error::AppError;
use crate::theme::types::{Theme, ThemeRole, parse_hex_color};
use crate::validation::Validator;
use std::path::PathBuf;

/// Validation errors specific to theme operations
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    InvalidPresetName { name: String, reason: String },
    InvalidColor { value: String },
    InvalidThemeColor { role: ThemeRole, value: String },
    UnknownRole { role: String },
    InvalidThemePath { path: String, reason: String },
    MissingMetadata { field: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidPresetName { name, reason } => {
                format!(
                    "Invalid theme preset name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use preset names made of letters, digits, hyphens and underscores."
                )
            }
            ThemeValidationError::InvalidColor { value } => {
                format!(
                    "Invalid color value: '{value}'\n\n\
                    Colors must be written as #rrggbb, for example #9c8b7a."
                )
            }
            ThemeValidationError::InvalidThemeColor { role, value } => {
                format!(
                    "Invalid color for role '{role}': '{value}'\n\n\
                    Colors must be written as #rrggbb, for example #9c8b7a."
                )
            }
            ThemeValidationError::UnknownRole { role } => {
                format!(
                    "Unknown color role: '{role}'\n\n\
                    Known roles are primary, secondary, background, contrast and accent."
                )
            }
            ThemeValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the preset file exists and ends in .toml."
                )
            }
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Please ensure the preset file contains all required metadata fields."
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Config(error.user_message())
    }
}

/// Validator for preset names
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetNameValidator;

impl Validator<str> for PresetNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidPresetName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.len() > 50 {
            return Err(invalid("Name too long (max 50 characters)"));
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(
                "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)",
            ));
        }

        if input.starts_with(['-', '_']) || input.ends_with(['-', '_']) {
            return Err(invalid(
                "Name cannot start or end with hyphens or underscores",
            ));
        }

        Ok(())
    }
}

/// Validator for `#rrggbb` color values
#[derive(Debug, Clone, Copy, Default)]
pub struct HexColorValidator;

impl Validator<str> for HexColorValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match parse_hex_color(input) {
            Some(_) => Ok(()),
            None => Err(ThemeValidationError::InvalidColor {
                value: input.to_string(),
            }),
        }
    }
}

/// Validator for preset file paths
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemePathValidator;

impl Validator<PathBuf> for ThemePathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &PathBuf) -> Result<(), Self::Error> {
        if !input.is_file() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path does not exist or is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Expected a .toml file".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for loaded preset content
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        if input.metadata.name.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "name".to_string(),
            });
        }

        if input.metadata.description.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "description".to_string(),
            });
        }

        for (role, value) in input.colors.iter() {
            HexColorValidator.validate(value).map_err(|_| {
                ThemeValidationError::InvalidThemeColor {
                    role,
                    value: value.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_preset_name_validator() {
        let validator = PresetNameValidator;

        assert_ok!(validator.validate("classic"));
        assert_ok!(validator.validate("dusty-rose"));
        assert_ok!(validator.validate("sage_2025"));

        assert_err!(validator.validate(""));
        assert_err!(validator.validate("_hidden"));
        assert_err!(validator.validate("blush-"));
        assert_err!(validator.validate("../etc/passwd"));
        assert_err!(validator.validate("rosé"));
        assert_err!(validator.validate(&"a".repeat(51)));
    }

    #[test]
    fn test_hex_color_validator() {
        let validator = HexColorValidator;

        assert_ok!(validator.validate("#000000"));
        assert_ok!(validator.validate("#C5B8AC"));

        assert_err!(validator.validate("000000"));
        assert_err!(validator.validate("#fff"));
        assert_err!(validator.validate("#c5b8ac00"));
        assert_err!(validator.validate("beige"));
        assert_err!(validator.validate(""));
    }

    #[test]
    fn test_theme_validator_reports_offending_role() {
        let mut theme = Theme::default();
        theme.colors.contrast = "dark".to_string();

        let err = assert_err!(ThemeValidator.validate(&theme));
        assert_eq!(
            err,
            ThemeValidationError::InvalidThemeColor {
                role: ThemeRole::Contrast,
                value: "dark".to_string(),
            }
        );
    }

    #[test]
    fn test_theme_validator_requires_metadata() {
        let mut theme = Theme::default();
        theme.metadata.description.clear();

        let err = assert_err!(ThemeValidator.validate(&theme));
        assert!(matches!(err, ThemeValidationError::MissingMetadata { .. }));
    }
}
