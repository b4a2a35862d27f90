use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod countdown;
pub mod defaults;
pub mod event;
pub mod keys;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment variables that override configuration values,
/// e.g. `SAVEDATE_EVENT__TARGET`
pub const ENV_PREFIX: &str = "SAVEDATE";

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Load configuration from the embedded defaults, an optional file and the
/// environment, in that order of precedence (later wins).
///
/// With `explicit` set, that file must exist. Otherwise the first of
/// `./config.toml` and `~/.config/savedate/config.toml` is used if present.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    let file: Option<(PathBuf, bool)> = match explicit {
        Some(path) => Some((path.to_path_buf(), true)),
        None => setup::find_config_file().map(|path| (path, false)),
    };
    if let Some((path, required)) = file {
        log::info!("Using configuration file: {}", path.display());
        builder = builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
    }

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the configuration once, from `explicit` if given. Later calls return
/// the first result.
pub fn init_config(explicit: Option<&Path>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(explicit))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(None))
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ElapsedPolicy;

    #[test]
    fn test_embedded_defaults_load_and_validate() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").expect("write empty config");

        let result = load_config(Some(path.as_path()));
        let config = result.as_config().expect("defaults should load");

        assert!(config.validate().is_ok());
        assert_eq!(config.event().couple(), "ALEXA & MARCO");
        assert_eq!(config.event().target_raw(), "2025-03-24T18:00:00");
        assert_eq!(config.countdown().cadence_ms(), 1000);
        assert_eq!(config.countdown().elapsed_policy(), ElapsedPolicy::Freeze);
        assert_eq!(config.theme().preset(), "classic");
        assert_eq!(config.logging().level(), "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[event]\ncouple = \"ANA & LUIS\"\n\n[countdown]\nelapsed_policy = \"zero\"\n",
        )
        .expect("write config");

        let result = load_config(Some(path.as_path()));
        let config = result.as_config().expect("config should load");

        assert_eq!(config.event().couple(), "ANA & LUIS");
        assert_eq!(config.event().headline(), "SAVE THE DATE");
        assert_eq!(config.countdown().elapsed_policy(), ElapsedPolicy::Zero);
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");

        let result = load_config(Some(dir.path().join("missing.toml").as_path()));

        assert!(matches!(result, ConfigLoadResult::LoadError(_)));
    }

    #[test]
    fn test_wrong_type_is_deserialize_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[countdown]\ncadence_ms = \"fast\"\n").expect("write config");

        let result = load_config(Some(path.as_path()));

        assert!(matches!(result, ConfigLoadResult::DeserializeError(_)));
    }
}
