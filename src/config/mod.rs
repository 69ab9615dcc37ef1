//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML config file, then
//! `IMPORTY_*` environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring if not available
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }

        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(_) => self,
        }
    }

    /// Add configuration from a file that must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        if !file_config.is_available() {
            return Err(crate::error::ImportyError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.load_from(&file_config)
    }

    /// Add configuration from the first default config file found
    ///
    /// A default file that exists but cannot be parsed is an error.
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        settings::SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from all sources with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, DEFAULT_ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let builder = match &cli_args.config {
        Some(path) => ConfigBuilder::new().add_config_file(path)?,
        None => ConfigBuilder::new().add_default_config_file()?,
    };

    builder
        .try_load_from(&EnvConfig::new(env_prefix))
        .load_from(&CliConfig::new(cli_args))?
        .build()
}
