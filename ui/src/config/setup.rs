use super::defaults::{DEFAULT_CONFIG, default_themes};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/savedate on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push("savedate");
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push("savedate");
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Get the themes directory path
pub fn get_themes_dir() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("themes");
    Ok(config_dir)
}

/// Initialize the standard config directory with default files
pub fn initialize_config_dir() -> Result<PathBuf, SetupError> {
    let config_dir = get_config_dir()?;
    initialize_config_dir_at(&config_dir)?;
    Ok(config_dir)
}

/// Write `config.toml` and the preset files into `config_dir`.
/// Existing files are left alone.
pub fn initialize_config_dir_at(config_dir: &Path) -> Result<(), SetupError> {
    let themes_dir = config_dir.join("themes");

    create_dir_if_not_exists(config_dir)?;
    create_dir_if_not_exists(&themes_dir)?;

    write_if_missing(&config_dir.join("config.toml"), DEFAULT_CONFIG)?;

    for (file_name, content) in default_themes() {
        write_if_missing(&themes_dir.join(file_name), content)?;
    }

    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(())
}

fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<(), SetupError> {
    if path.exists() {
        log::debug!("Keeping existing file: {}", path.display());
        return Ok(());
    }

    fs::write(path, content).map_err(|source| SetupError::WriteFileError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created {}", path.display());
    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // 1. ./config.toml
    // 2. Standard OS config directory
    let current_dir_config = PathBuf::from("config.toml");
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}
