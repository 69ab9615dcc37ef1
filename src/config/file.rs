//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ImportyError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".importy.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "IMPORTY";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ImportyError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_DIR`, `<PREFIX>_LIB`, `<PREFIX>_INCLUDE`,
/// `<PREFIX>_EXCLUDE`, `<PREFIX>_CONCURRENCY` and `<PREFIX>_OUTPUT_FORMAT`.
/// Values that do not parse are ignored.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    const KEYS: [&'static str; 6] = ["DIR", "LIB", "INCLUDE", "EXCLUDE", "CONCURRENCY", "OUTPUT_FORMAT"];

    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    /// Build settings from an arbitrary variable lookup
    pub fn load_with<F>(&self, lookup: F) -> PartialSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(&self.var_name(key)).filter(|value| !value.is_empty());

        PartialSettings {
            dir: get("DIR").map(PathBuf::from),
            library: get("LIB"),
            include: get("INCLUDE"),
            exclude: get("EXCLUDE"),
            concurrency: get("CONCURRENCY").and_then(|value| value.trim().parse().ok()),
            output_format: get("OUTPUT_FORMAT").and_then(|value| value.parse().ok()),
            ..Default::default()
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.load_with(|name| std::env::var(name).ok()))
    }

    fn is_available(&self) -> bool {
        Self::KEYS
            .iter()
            .any(|key| std::env::var(self.var_name(key)).is_ok())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
