//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::{AnalysisOptions, ImportAnalyzer};
use crate::error::{ErrorSeverity, Result};
use crate::models::analysis::AnalysisResult;
use crate::models::config::Settings;
use crate::output::{create_formatter, write_with_fallback, ProgressReporter, StdoutWriter};
use std::path::Path;
use std::sync::Arc;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze imports in the configured directory
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                run_analysis(&settings).map(|_| ())
            }
            Command::Init => {
                let config_path = Path::new(DEFAULT_CONFIG_FILE);
                if init_config(config_path)? {
                    println!("Created default configuration file at: {}", config_path.display());
                    println!("Set `library` in it (or pass --lib) before running an analysis.");
                } else {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                }
                Ok(())
            }
        }
    }
}

/// Process exit code for an error of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Write the default config template to `path` unless a file is already there
///
/// Returns whether a file was created.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    config::create_default_config(path)?;
    Ok(true)
}

/// Analyze, format and write the report described by `settings`
pub fn run_analysis(settings: &Settings) -> Result<AnalysisResult> {
    let reporter = Arc::new(ProgressReporter::new(
        settings.quiet,
        settings.verbose,
        settings.show_progress,
    ));

    reporter.print_verbose(&format!(
        "Importy v{} - scanning {} for imports of '{}'",
        env!("CARGO_PKG_VERSION"),
        settings.dir.display(),
        settings.library
    ));
    reporter.print_verbose(&format!("Settings: {:?}", settings));

    let result = ImportAnalyzer::new(AnalysisOptions::from(settings))
        .with_reporter(Arc::clone(&reporter))
        .analyze()?;

    if !result.has_matches() {
        reporter.print_warning(&format!("No imports from '{}' were found", settings.library));
    }

    let formatter = create_formatter(settings.output_format, settings.use_colors, settings.quiet);
    let content = formatter.format(&result)?;

    let output_file = settings.output_file.as_deref();
    match write_with_fallback(&content, output_file, &StdoutWriter)? {
        Some(err) => {
            reporter.print_error(&format!("{}; wrote results to stdout instead", err.user_message()));
        }
        None => {
            if let Some(path) = output_file {
                reporter.print(&format!("Results written to {}", path.display()));
            }
        }
    }

    Ok(result)
}
