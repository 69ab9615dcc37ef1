//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for Importy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to scan
    pub dir: PathBuf,

    /// Library whose imports are reported
    pub library: String,

    /// Only scan files matching this glob
    pub include: Option<String>,

    /// Skip files and prune directories matching this glob
    pub exclude: Option<String>,

    /// Number of concurrent workers (defaults to a value derived from the CPU count)
    pub concurrency: Option<usize>,

    /// Whether to show detailed progress and diagnostic information
    pub verbose: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Output format (json, text, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress bar
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            library: String::new(),
            include: None,
            exclude: None,
            concurrency: None,
            verbose: false,
            quiet: false,
            output_format: OutputFormat::Json,
            output_file: None,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document with summary and components
    Json,
    /// Human-readable text output
    Text,
    /// `component,file` rows for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub dir: Option<PathBuf>,
    pub library: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub concurrency: Option<usize>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.dir.is_some() {
            self.dir = other.dir;
        }
        if other.library.is_some() {
            self.library = other.library;
        }
        if other.include.is_some() {
            self.include = other.include;
        }
        if other.exclude.is_some() {
            self.exclude = other.exclude;
        }
        if other.concurrency.is_some() {
            self.concurrency = other.concurrency;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(dir) = &self.dir {
            settings.dir = dir.clone();
        }
        if let Some(library) = &self.library {
            settings.library = library.clone();
        }
        if let Some(include) = &self.include {
            settings.include = Some(include.clone());
        }
        if let Some(exclude) = &self.exclude {
            settings.exclude = Some(exclude.clone());
        }
        if let Some(concurrency) = self.concurrency {
            settings.concurrency = Some(concurrency);
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
