use super::{
    LoggingConfig, countdown::CountdownConfig, event::EventConfig, keys::KeyBindingsConfig,
    limits::*, validation::ConfigValidationError,
};
use crate::theme::types::{ThemeConfig, ThemeRole};
use crate::theme::validation::{HexColorValidator, PresetNameValidator, ThemeValidationError};
use crate::validation::Validator;
use engine::{CountdownError, TargetInstant};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    event: EventConfig,
    #[serde(default)]
    countdown: CountdownConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    theme: Option<ThemeConfig>,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let cadence = self.countdown.cadence_ms();
        if !(MIN_CADENCE_MS..=MAX_CADENCE_MS).contains(&cadence) {
            errors.push(ConfigValidationError::Cadence {
                configured: cadence,
                min_limit: MIN_CADENCE_MS,
                max_limit: MAX_CADENCE_MS,
            });
        }

        let tick = self.tick_interval_millis();
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        if let Err(e) = self.event.target() {
            errors.push(ConfigValidationError::Target {
                value: self.event.target_raw().to_string(),
                reason: target_error_reason(e),
            });
        }

        if self.event.couple().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyField {
                field: "couple".to_string(),
            });
        }

        let theme = self.theme();
        if let Err(ThemeValidationError::InvalidPresetName { name, reason }) =
            PresetNameValidator.validate(theme.preset())
        {
            errors.push(ConfigValidationError::ThemePreset { name, reason });
        }

        for (role, value) in theme.raw_color_overrides() {
            if role.parse::<ThemeRole>().is_err() {
                errors.push(ConfigValidationError::ThemeRole { role: role.clone() });
            } else if HexColorValidator.validate(value).is_err() {
                errors.push(ConfigValidationError::ThemeColor {
                    role: role.clone(),
                    value: value.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(10))
    }

    fn tick_interval_millis(&self) -> u64 {
        self.tick_interval_millis.unwrap_or(100)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis())
    }

    // Configuration section accessors
    pub fn event(&self) -> &EventConfig {
        &self.event
    }

    /// Event target, already validated by [`AppConfig::validate`]
    pub fn target(&self) -> Result<TargetInstant, CountdownError> {
        self.event.target()
    }

    pub fn countdown(&self) -> &CountdownConfig {
        &self.countdown
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone().unwrap_or_default()
    }
}

/// The part of a target error worth showing next to the configured value
fn target_error_reason(error: CountdownError) -> String {
    match error {
        CountdownError::InvalidTarget { reason, .. } => reason,
        CountdownError::NonexistentLocalTime { .. } => {
            "this time is skipped by a daylight saving change in the local timezone".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn parse(toml_src: &str) -> AppConfig {
        toml::from_str(toml_src).expect("valid toml")
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = parse("");
        assert_ok!(config.validate());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.theme().preset(), "classic");
    }

    #[test]
    fn test_out_of_range_values_collect_every_error() {
        let config = parse(
            r##"
            tick_interval_millis = 5

            [countdown]
            cadence_ms = 50

            [event]
            target = "soon"

            [theme]
            preset = "-bad-"

            [theme.colors]
            accent = "gold"
            "##,
        );

        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::Cadence { configured: 50, .. })));
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::TickInterval { configured: 5, .. })));
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::Target { .. })));
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::ThemePreset { .. })));
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::ThemeColor { .. })));
    }

    #[test]
    fn test_target_error_reasons() {
        let skipped = target_error_reason(CountdownError::NonexistentLocalTime {
            value: "2026-03-29T02:30:00".to_string(),
        });
        assert!(skipped.contains("daylight saving"));

        let malformed = target_error_reason(CountdownError::InvalidTarget {
            value: "soon".to_string(),
            reason: "input contains invalid characters".to_string(),
        });
        assert_eq!(malformed, "input contains invalid characters");
    }

    #[test]
    fn test_user_messages_name_the_setting() {
        let config = parse("[countdown]\ncadence_ms = 120000");
        let errors = assert_err!(config.validate());
        assert!(errors[0].user_message().contains("cadence_ms"));
    }
}
