//! Error types and definitions for Importy
//!
//! Every failure the analyzer, the configuration layer or the output layer can
//! produce is a variant of [`ImportyError`]. Variants are ranked by
//! [`ErrorSeverity`] so the driver can decide between logging and aborting.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for Importy operations
#[derive(Debug, Error)]
pub enum ImportyError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read
    #[error("Error reading file {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Scan root does not exist
    #[error("Directory '{path}' does not exist")]
    InvalidPath { path: PathBuf },

    /// Scan root exists but is not a directory
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Glob pattern errors
    #[error("Invalid pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Source file could not be parsed, even after the fallback attempt
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Parallel execution error
    #[error("Parallel execution error: {message}")]
    ParallelExecution { message: String },

    /// Generic analysis error with context
    #[error("Analysis error: {message}")]
    Analysis { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl ImportyError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the file is skipped, the run continues
            ImportyError::PermissionDenied { .. } => ErrorSeverity::Warning,
            ImportyError::IoRead { .. } => ErrorSeverity::Warning,
            ImportyError::Parse { .. } => ErrorSeverity::Warning,
            ImportyError::GlobPattern { .. } => ErrorSeverity::Warning,
            ImportyError::DirectoryTraversal { .. } => ErrorSeverity::Warning,

            // Critical errors - nothing can be scanned
            ImportyError::Config { .. } => ErrorSeverity::Critical,
            ImportyError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ImportyError::ConfigRead { .. } => ErrorSeverity::Critical,
            ImportyError::ConfigParse { .. } => ErrorSeverity::Critical,
            ImportyError::InvalidPath { .. } => ErrorSeverity::Critical,
            ImportyError::NotADirectory { .. } => ErrorSeverity::Critical,
            ImportyError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ImportyError::InvalidPath { path } => {
                format!("Directory '{}' does not exist. Please provide a valid directory to scan.", path.display())
            }
            ImportyError::NotADirectory { path } => {
                format!("'{}' is not a directory. Please provide a directory to scan, not a file.", path.display())
            }
            ImportyError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            ImportyError::Parse { path, message } => {
                format!("Skipping {}: failed to parse: {}", path.display(), message)
            }
            ImportyError::IoRead { path, source } => {
                format!("Error reading file {}: {}", path.display(), source)
            }
            ImportyError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create it with --init or pass options on the command line.", path.display())
            }
            ImportyError::OutputWrite { path, source } => {
                format!("Error writing to output file '{}': {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ImportyError::Io { source }
    }

    /// Create a file read error, promoting permission failures
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            return ImportyError::PermissionDenied { path };
        }
        ImportyError::IoRead { path, source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ImportyError::Config {
            message: message.into(),
        }
    }

    /// Create a parse failure error
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImportyError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a glob pattern error
    pub fn glob_error(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        ImportyError::GlobPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImportyError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ImportyError {
    fn from(err: std::io::Error) -> Self {
        ImportyError::io_error(err)
    }
}

impl From<serde_json::Error> for ImportyError {
    fn from(err: serde_json::Error) -> Self {
        ImportyError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for ImportyError {
    fn from(err: csv::Error) -> Self {
        ImportyError::Csv { source: err }
    }
}

/// Result type alias for Importy operations
pub type Result<T> = std::result::Result<T, ImportyError>;
