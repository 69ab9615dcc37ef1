//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{ImportyError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImportyError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ImportyError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ImportyError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |what: &str| {
        Err(ImportyError::config_error(format!(
            "{} in config file: {}",
            what,
            path.display()
        )))
    };

    if settings.dir.as_ref().is_some_and(|dir| dir.as_os_str().is_empty()) {
        return invalid("Invalid empty dir");
    }

    if settings.library.as_ref().is_some_and(|lib| lib.trim().is_empty()) {
        return invalid("Invalid empty library");
    }

    if settings.include.as_ref().is_some_and(|p| p.is_empty()) {
        return invalid("Empty include pattern");
    }

    if settings.exclude.as_ref().is_some_and(|p| p.is_empty()) {
        return invalid("Empty exclude pattern");
    }

    if settings.concurrency == Some(0) {
        return invalid("Invalid concurrency 0 (must be at least 1)");
    }

    if settings
        .output_file
        .as_ref()
        .is_some_and(|file| file.as_os_str().is_empty())
    {
        return invalid("Invalid empty output_file");
    }

    Ok(())
}

/// Candidate default config locations, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("importy").join("config.toml"));
    }

    locations
}

/// Load the first config file that exists among `locations`
pub fn find_config_in<I>(locations: I) -> Result<Option<PartialSettings>>
where
    I: IntoIterator<Item = PathBuf>,
{
    for candidate in locations {
        if candidate.is_file() {
            return parse_config_file(candidate).map(Some);
        }
    }

    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(default_config_locations())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ImportyError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(|e| ImportyError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
