//! Import extraction for a single source file
//!
//! The extractor parses a file (baseline attempt, then the extended fallback),
//! keeps the import declarations whose module specifier points at the target
//! library and classifies every binding they introduce.

use crate::error::{ImportyError, Result};
use crate::models::analysis::ImportMatch;
use crate::models::syntax::{
    ImportNode, ParseAttempt, ParseDiagnostic, ParseOutcome, SourceDialect, SpecifierNode,
    SyntaxTree,
};
use crate::parsers::ast_parser::{ASTParser, SyntaxParser};
use std::fs;
use std::path::Path;

/// Matches of one file plus what the parser had to recover from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileExtraction {
    pub matches: Vec<ImportMatch>,
    /// Errors recovered from while building a partial tree
    pub recovered_errors: Vec<String>,
    /// Whether the baseline attempt failed and the extended attempt was used
    pub used_fallback: bool,
}

/// Whether `specifier` imports `library` itself or one of its subpaths
pub fn matches_library(specifier: &str, library: &str) -> bool {
    match specifier.strip_prefix(library) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Imported name reported for a specifier
pub fn imported_name(specifier: &SpecifierNode) -> &str {
    match specifier {
        SpecifierNode::Default { .. } => ImportMatch::DEFAULT,
        SpecifierNode::Namespace { .. } => ImportMatch::NAMESPACE,
        SpecifierNode::Named {
            imported: Some(name),
            ..
        } => name.as_str(),
        SpecifierNode::Named { imported: None, .. } => ImportMatch::UNKNOWN,
    }
}

/// Extracts imports of one library from source files
pub struct ImportExtractor<P = ASTParser> {
    library: String,
    parser: P,
}

impl ImportExtractor<ASTParser> {
    /// Create an extractor backed by the OXC parser
    pub fn new(library: impl Into<String>) -> Self {
        Self::with_parser(library, ASTParser::new())
    }
}

impl<P: SyntaxParser> ImportExtractor<P> {
    /// Create an extractor with a custom parser backend
    pub fn with_parser(library: impl Into<String>, parser: P) -> Self {
        Self {
            library: library.into(),
            parser,
        }
    }

    /// Parse with the baseline feature set, retrying once with the extended one
    fn parse(&self, source: &str, dialect: SourceDialect) -> (ParseOutcome, bool) {
        match self.parser.parse(source, dialect, ParseAttempt::Baseline) {
            ParseOutcome::Success(tree) => (ParseOutcome::Success(tree), false),
            ParseOutcome::Failure(_) => (
                self.parser.parse(source, dialect, ParseAttempt::Extended),
                true,
            ),
        }
    }

    /// Extract matches from source text already in memory
    pub fn extract_source(
        &self,
        source: &str,
        file: &str,
        dialect: SourceDialect,
    ) -> std::result::Result<FileExtraction, ParseDiagnostic> {
        let (outcome, used_fallback) = self.parse(source, dialect);

        match outcome {
            ParseOutcome::Success(tree) => Ok(FileExtraction {
                matches: self.collect_matches(&tree, file),
                recovered_errors: tree.recovered_errors,
                used_fallback,
            }),
            ParseOutcome::Failure(diagnostic) => Err(diagnostic),
        }
    }

    /// Read and extract one file
    ///
    /// Read failures and files that cannot be parsed even with the fallback
    /// feature set are returned as errors so the caller can skip the file.
    pub fn extract_file(&self, path: &Path) -> Result<FileExtraction> {
        let bytes = fs::read(path).map_err(|e| ImportyError::read_error(path, e))?;
        // Invalid UTF-8 (e.g. a Latin-1 copyright comment) is replaced, not rejected
        let source = String::from_utf8_lossy(&bytes);
        let dialect = SourceDialect::from_path(path).unwrap_or(SourceDialect::Tsx);
        let file = path.display().to_string();

        self.extract_source(&source, &file, dialect)
            .map_err(|diagnostic| ImportyError::parse_error(path, diagnostic.to_string()))
    }

    fn collect_matches(&self, tree: &SyntaxTree, file: &str) -> Vec<ImportMatch> {
        tree.imports
            .iter()
            .filter(|import| matches_library(&import.source, &self.library))
            .flat_map(|import| Self::matches_for(import, file))
            .collect()
    }

    fn matches_for<'n>(import: &'n ImportNode, file: &'n str) -> impl Iterator<Item = ImportMatch> + 'n {
        import.specifiers.iter().map(move |specifier| {
            ImportMatch::new(imported_name(specifier), specifier.local(), file, import.line)
        })
    }
}
