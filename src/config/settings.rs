//! Validation of fully merged settings

use crate::error::{ImportyError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
///
/// The scan root is deliberately not checked here; the analyzer reports a
/// missing root or a root that is not a directory itself.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.library.trim().is_empty() {
            return Err(ImportyError::config_error(
                "No library specified. Pass --lib <name>, set IMPORTY_LIB or add `library` to .importy.toml",
            ));
        }

        if settings.dir.as_os_str().is_empty() {
            return Err(ImportyError::config_error(
                "No directory specified. Pass --dir <path>, set IMPORTY_DIR or add `dir` to .importy.toml",
            ));
        }

        if settings.concurrency == Some(0) {
            return Err(ImportyError::config_error("Concurrency must be at least 1"));
        }

        for (name, pattern) in [("include", &settings.include), ("exclude", &settings.exclude)] {
            if pattern.as_ref().is_some_and(|p| p.is_empty()) {
                return Err(ImportyError::config_error(format!(
                    "The {} pattern must not be empty",
                    name
                )));
            }
        }

        if let Some(path) = &settings.output_file {
            if path.as_os_str().is_empty() {
                return Err(ImportyError::config_error("Output file path must not be empty"));
            }
        }

        Ok(())
    }
}
