//! Parser-independent syntax tree for import declarations
//!
//! Parser backends lower their own AST into these owned nodes so the import
//! extractor never depends on a particular parser's object shapes.

use std::fmt;
use std::path::Path;

/// Name under which a binding is exported by the source module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportName {
    /// `import { Button } from "lib"`
    Identifier(String),
    /// `import { "kebab-name" as kebab } from "lib"`
    StringLiteral(String),
}

impl ExportName {
    pub fn as_str(&self) -> &str {
        match self {
            ExportName::Identifier(name) | ExportName::StringLiteral(name) => name,
        }
    }
}

/// One clause of an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifierNode {
    /// `import X from "lib"`
    Default { local: String },
    /// `import * as X from "lib"`
    Namespace { local: String },
    /// `import { a as b } from "lib"`; `imported` is `None` only for trees
    /// a backend could not fully lower
    Named {
        imported: Option<ExportName>,
        local: String,
    },
}

impl SpecifierNode {
    pub fn local(&self) -> &str {
        match self {
            SpecifierNode::Default { local }
            | SpecifierNode::Namespace { local }
            | SpecifierNode::Named { local, .. } => local,
        }
    }
}

/// A single `import ... from "source"` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportNode {
    /// Module specifier string
    pub source: String,
    pub specifiers: Vec<SpecifierNode>,
    /// 1-based line of the declaration, when the backend tracks positions
    pub line: Option<usize>,
    /// `import type { ... }`
    pub type_only: bool,
}

/// The parts of a parsed file the extractor cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub imports: Vec<ImportNode>,
    /// Errors the parser recovered from while building this tree
    pub recovered_errors: Vec<String>,
}

impl SyntaxTree {
    /// Whether the tree was produced despite syntax errors
    pub fn is_partial(&self) -> bool {
        !self.recovered_errors.is_empty()
    }
}

/// Why a file could not be turned into a syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub messages: Vec<String>,
}

impl ParseDiagnostic {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.messages.first() {
            None => write!(f, "unknown parse error"),
            Some(first) if self.messages.len() == 1 => write!(f, "{}", first),
            Some(first) => write!(f, "{} (and {} more)", first, self.messages.len() - 1),
        }
    }
}

/// Result of one parse attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success(SyntaxTree),
    Failure(ParseDiagnostic),
}

/// Which feature set a parse attempt uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAttempt {
    /// Typed + JSX superset, strict: any syntax error fails the attempt
    Baseline,
    /// Extension-specific dialect with permissive options and error recovery
    Extended,
}

/// Source dialect derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDialect {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceDialect {
    /// Extensions of files eligible for scanning
    pub const EXTENSIONS: [&'static str; 4] = ["js", "jsx", "ts", "tsx"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" => Some(SourceDialect::JavaScript),
            "jsx" => Some(SourceDialect::Jsx),
            "ts" => Some(SourceDialect::TypeScript),
            "tsx" => Some(SourceDialect::Tsx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}
