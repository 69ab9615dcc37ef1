//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub dir: Option<PathBuf>,
    pub library: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub concurrency: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            dir: args.dir.clone(),
            library: args.lib.clone(),
            include: args.include.clone(),
            exclude: args.exclude.clone(),
            concurrency: args.concurrency,
            output_format: args.format.map(OutputFormat::from),
            output_file: args.output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            dir: args.dir.clone(),
            library: args.library.clone(),
            include: args.include.clone(),
            exclude: args.exclude.clone(),
            concurrency: args.concurrency,
            output_format: args.output_format,
            output_file: args.output_file.clone(),
            ..Default::default()
        };

        // Flags only override lower layers when given
        if args.quiet {
            settings.quiet = Some(true);
            settings.verbose = Some(false);
        }

        if args.verbose {
            settings.verbose = Some(true);
            settings.quiet = Some(false);
        }

        if args.no_colors {
            settings.use_colors = Some(false);
        }

        if args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
