//! Import analysis of a directory tree
//!
//! [`ImportAnalyzer`] validates the root, discovers source files, extracts
//! the imports of the target library from every file through the
//! [`BatchProcessor`] and folds the matches into an [`AnalysisResult`].

use crate::core::aggregator::ImportAggregator;
use crate::core::discovery::{FileDiscoverer, PathFilter};
use crate::core::parallel::{default_concurrency, BatchProcessor, ProgressUpdate};
use crate::error::{ImportyError, Result};
use crate::models::analysis::{AnalysisResult, ImportMatch};
use crate::models::config::Settings;
use crate::output::ProgressReporter;
use crate::parsers::ast_parser::{ASTParser, SyntaxParser};
use crate::parsers::import_extractor::ImportExtractor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Inputs of one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub dir: PathBuf,
    pub library: String,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub verbose: bool,
    /// Overrides the CPU-derived default when set
    pub concurrency: Option<usize>,
}

impl AnalysisOptions {
    pub fn new(dir: impl Into<PathBuf>, library: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            library: library.into(),
            include: None,
            exclude: None,
            verbose: false,
            concurrency: None,
        }
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Worker count actually used
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(default_concurrency).max(1)
    }
}

impl From<&Settings> for AnalysisOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            dir: settings.dir.clone(),
            library: settings.library.clone(),
            include: settings.include.clone(),
            exclude: settings.exclude.clone(),
            verbose: settings.verbose,
            concurrency: settings.concurrency,
        }
    }
}

type ProgressCallback = Box<dyn Fn(ProgressUpdate) + Send + Sync>;

/// Finds every import of one library below a directory
pub struct ImportAnalyzer<P = ASTParser> {
    options: AnalysisOptions,
    extractor: ImportExtractor<P>,
    reporter: Arc<ProgressReporter>,
    progress: Option<ProgressCallback>,
}

impl ImportAnalyzer<ASTParser> {
    pub fn new(options: AnalysisOptions) -> Self {
        let extractor = ImportExtractor::new(options.library.clone());
        Self::with_extractor(options, extractor)
    }
}

impl<P: SyntaxParser> ImportAnalyzer<P> {
    /// Analyzer using a custom extractor backend
    pub fn with_extractor(options: AnalysisOptions, extractor: ImportExtractor<P>) -> Self {
        let reporter = Arc::new(ProgressReporter::silent(options.verbose));
        Self {
            options,
            extractor,
            reporter,
            progress: None,
        }
    }

    /// Route warnings and verbose diagnostics through `reporter`
    pub fn with_reporter(mut self, reporter: Arc<ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Call `callback` after every processed file
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Run the analysis
    ///
    /// Only a missing root or a root that is not a directory is an error;
    /// unreadable or unparsable files are skipped with a warning.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        self.validate_root()?;

        let files = self.discover_files();
        if files.is_empty() {
            self.reporter.print_verbose("No files found to analyze");
            return Ok(AnalysisResult::empty(&self.options.library));
        }

        let concurrency = self.options.effective_concurrency();
        self.reporter.print_verbose(&format!(
            "Processing {} files with {} concurrent workers",
            files.len(),
            concurrency
        ));
        self.reporter.start(files.len(), "Scanning files");

        let mut aggregator = ImportAggregator::new();
        BatchProcessor::new(concurrency).process_groups(
            &files,
            |path| self.extract(path),
            |update| {
                self.reporter.update_from(update.clone());
                if let Some(progress) = &self.progress {
                    progress(update);
                }
            },
            |group| {
                for matches in &group.results {
                    aggregator.add_matches(matches);
                }
                for (_, err) in &group.failures {
                    self.reporter.print_warning(&err.user_message());
                }
            },
        );

        let result = aggregator.finish(&self.options.library, files.len());
        self.reporter.finish(&format!(
            "Analysis complete - Found {} components with {} total imports across {} files",
            result.summary.components_found, result.summary.total_imports, result.summary.files_scanned
        ));

        Ok(result)
    }

    fn validate_root(&self) -> Result<()> {
        let dir = &self.options.dir;
        if !dir.exists() {
            return Err(ImportyError::InvalidPath { path: dir.clone() });
        }
        if !dir.is_dir() {
            return Err(ImportyError::NotADirectory { path: dir.clone() });
        }
        Ok(())
    }

    fn compile_filter(&self, label: &str, pattern: Option<&str>) -> Option<PathFilter> {
        let pattern = pattern?;
        let (filter, err) = PathFilter::compile(pattern);
        if let Some(err) = err {
            self.reporter.print_warning(&err.user_message());
        }
        self.reporter
            .print_verbose(&format!("Using {} pattern: {}", label, filter.pattern()));
        Some(filter)
    }

    fn discover_files(&self) -> Vec<PathBuf> {
        let discovery = FileDiscoverer::new(&self.options.dir)
            .with_include(self.compile_filter("include", self.options.include.as_deref()))
            .with_exclude(self.compile_filter("exclude", self.options.exclude.as_deref()))
            .discover();

        for err in &discovery.errors {
            self.reporter.print_warning(&err.user_message());
        }
        if self.reporter.is_verbose() {
            for dir in &discovery.pruned_dirs {
                self.reporter
                    .print_verbose(&format!("Skipping excluded directory: {}", dir.display()));
            }
            for file in &discovery.filtered_files {
                self.reporter
                    .print_verbose(&format!("Skipping file due to patterns: {}", file.display()));
            }
        }
        self.reporter
            .print_verbose(&format!("Found {} files to process", discovery.files.len()));

        discovery.files
    }

    fn extract(&self, path: &Path) -> Result<Vec<ImportMatch>> {
        let extraction = self.extractor.extract_file(path)?;

        if self.reporter.is_verbose() {
            if extraction.used_fallback {
                self.reporter.print_verbose(&format!(
                    "Parsed {} with the extended feature set",
                    path.display()
                ));
            }
            if !extraction.recovered_errors.is_empty() {
                self.reporter.print_verbose(&format!(
                    "Recovered from {} parse errors in {}",
                    extraction.recovered_errors.len(),
                    path.display()
                ));
            }
        }

        Ok(extraction.matches)
    }
}

/// Analyze `options.dir` with default settings
pub fn analyze_imports(options: &AnalysisOptions) -> Result<AnalysisResult> {
    ImportAnalyzer::new(options.clone()).analyze()
}
