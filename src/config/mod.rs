mod init;
mod schema;

pub use init::{run_init_wizard, write_config};
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::samples::validate_samples;
use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/wfd-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("wfd-score"))
}

/// Get the default config file path (~/.config/wfd-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/wfd-score/config.yaml) and falls back to defaults when that file
///   does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config = read_config(&config_path)?;
    info!(path = %config_path.display(), "loaded config");
    Ok(config)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Validate every section of the config, collecting all errors.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(mut scoring_errors) = validate_scoring(&config.effective_scoring()) {
        errors.append(&mut scoring_errors);
    }
    if let Err(mut sample_errors) = validate_samples(&config.samples) {
        errors.append(&mut sample_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
