//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Importy - find every import of a library in a JavaScript/TypeScript codebase
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "importy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report which components of a library are imported, and where")]
#[command(long_about = "Importy scans a directory of .js, .jsx, .ts and .tsx files and reports every import \
of a target library. Each imported binding is recorded under the name it is exported as \
(\"default\" for default imports, \"*\" for namespace imports), together with the files that import it.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory for imports of ui-library
    importy --dir . --lib ui-library

    # Scan a specific directory
    importy --dir ./my-project --lib @mui/material

Filtering:
    # Only scan files below src directories
    importy -d . --lib ui-library --include '**/src/**'

    # Skip test directories
    importy -d . --lib ui-library --exclude '**/__tests__/**'

Output Options:
    # Human-readable output
    importy -d . --lib ui-library --format text

    # component,file rows for spreadsheets
    importy -d . --lib ui-library --format csv --output imports.csv

Configuration:
    # Use a specific configuration file
    importy --config ./importy.toml

    # Create a default configuration file
    importy --init
")]
pub struct Args {
    /// Directory to scan
    #[arg(short, long, value_name = "DIR", help = "Directory to scan (required unless set via IMPORTY_DIR or the config file)")]
    pub dir: Option<PathBuf>,

    /// Library to look for
    #[arg(short, long = "lib", value_name = "NAME", help = "Library whose imports are reported, e.g. 'ui-library' or '@scope/pkg'")]
    pub lib: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Report format: 'json' (default), 'text' or 'csv'")]
    pub format: Option<OutputFormat>,

    /// Only scan matching files
    #[arg(short, long, value_name = "GLOB", help = "Only scan files whose path matches this glob, e.g. '**/src/**'")]
    pub include: Option<String>,

    /// Skip matching files and directories
    #[arg(short, long, value_name = "GLOB", help = "Skip files and directories whose path matches this glob, e.g. '**/node_modules/**'")]
    pub exclude: Option<String>,

    /// Number of files processed concurrently
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(usize), help = "Number of files parsed concurrently (defaults to min(4, CPUs - 1))")]
    pub concurrency: Option<usize>,

    /// Show detailed progress and debug information
    #[arg(short, long, overrides_with = "quiet", help = "Show detailed progress and diagnostic information on stderr")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, overrides_with = "verbose", help = "Suppress non-essential output (warnings are still shown)")]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE", help = "Path to a configuration file (defaults to .importy.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored text output")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar (useful in CI or when redirecting output)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.importy.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON document with summary and components
    Json,
    /// Human-readable text output
    Text,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
