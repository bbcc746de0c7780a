//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration from an explicit path,
//! the local project directory or the platform config directory, then applies
//! command-line overrides.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use paytrail::{PaytrailError, config::AppConfig};

use crate::Args;

const LOCAL_CONFIG_PATH: &str = "paytrail/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for PaytrailError {
    fn from(err: ConfigError) -> Self {
        PaytrailError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (paytrail/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PaytrailError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG_PATH);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "paytrail", "paytrail") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Applies `--lang`, `--width` and `--height` on top of a loaded config.
///
/// # Errors
///
/// Returns a validation error for non-finite or negative sizes.
pub fn apply_overrides(mut config: AppConfig, args: &Args) -> Result<AppConfig, PaytrailError> {
    if let Some(tag) = &args.lang {
        debug!(tag; "Overriding language");
        config.set_language(tag);
    }

    if let Some(width) = args.width {
        validate_size("width", width)?;
        config.chart_mut().set_width(width);
    }

    if let Some(height) = args.height {
        validate_size("height", height)?;
        config.chart_mut().set_height(height);
    }

    Ok(config)
}

fn validate_size(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, PaytrailError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
