use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid countdown.cadence_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    Cadence {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid event.target '{value}': {reason}")]
    Target { value: String, reason: String },
    #[error("Invalid theme.colors.{role} '{value}'")]
    ThemeColor { role: String, value: String },
    #[error("Unknown theme.colors role '{role}'")]
    ThemeRole { role: String },
    #[error("Invalid theme.preset '{name}': {reason}")]
    ThemePreset { name: String, reason: String },
    #[error("Empty event.{field}")]
    EmptyField { field: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::Cadence {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Countdown cadence out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update cadence_ms in the [countdown] section of config.toml."
                )
            }
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "UI tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml."
                )
            }
            ConfigValidationError::Target { value, reason } => {
                format!(
                    "Event date could not be read!\n\n\
                    Your configured value: {value}\n\
                    Problem: {reason}\n\n\
                    Please set target in the [event] section as YYYY-MM-DDTHH:MM:SS local time."
                )
            }
            ConfigValidationError::ThemeColor { role, value } => {
                format!(
                    "Theme color override is not a valid color!\n\n\
                    Role: {role}\n\
                    Your configured value: {value}\n\n\
                    Please use #rrggbb values in the [theme.colors] section."
                )
            }
            ConfigValidationError::ThemeRole { role } => {
                format!(
                    "Theme color override names an unknown role!\n\n\
                    Your configured role: {role}\n\
                    Known roles: primary, secondary, background, contrast, accent\n\n\
                    Please fix the [theme.colors] section of config.toml."
                )
            }
            ConfigValidationError::ThemePreset { name, reason } => {
                format!(
                    "Theme preset name is not valid!\n\n\
                    Your configured value: {name}\n\
                    Problem: {reason}\n\n\
                    Please update preset in the [theme] section of config.toml."
                )
            }
            ConfigValidationError::EmptyField { field } => {
                format!(
                    "Event {field} is empty!\n\n\
                    Please set {field} in the [event] section of config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn as_config(&self) -> Option<&AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Some(config),
            _ => None,
        }
    }
}
