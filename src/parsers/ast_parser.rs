//! AST parser wrapper using OXC
//!
//! [`ASTParser`] parses JavaScript/TypeScript source with OXC and lowers the
//! import declarations of the resulting program into the parser-independent
//! [`SyntaxTree`] while the arena that owns the AST is still alive.

use crate::models::syntax::{
    ExportName, ImportNode, ParseAttempt, ParseDiagnostic, ParseOutcome, SourceDialect,
    SpecifierNode, SyntaxTree,
};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;

/// Turns source text into a [`SyntaxTree`]
pub trait SyntaxParser: Send + Sync {
    /// Parse `source` using the feature set selected by `attempt`
    fn parse(&self, source: &str, dialect: SourceDialect, attempt: ParseAttempt) -> ParseOutcome;
}

/// Thread-safe allocator pool for reuse across parses
pub struct AllocatorPool {
    allocators: Mutex<Vec<Allocator>>,
    capacity: usize,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(capacity: usize) -> Self {
        Self {
            allocators: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take an allocator from the pool, or create one if the pool is empty
    pub fn take(&self) -> Allocator {
        self.allocators.lock().pop().unwrap_or_default()
    }

    /// Return an allocator to the pool
    pub fn give_back(&self, mut allocator: Allocator) {
        allocator.reset();
        let mut allocators = self.allocators.lock();
        if allocators.len() < self.capacity {
            allocators.push(allocator);
        }
    }
}

/// AST parser using OXC
pub struct ASTParser {
    allocator_pool: AllocatorPool,
}

impl ASTParser {
    /// Create a new AST parser
    pub fn new() -> Self {
        Self {
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    fn source_type(dialect: SourceDialect, attempt: ParseAttempt) -> SourceType {
        match attempt {
            // TSX is a superset of everything except angle-bracket type assertions
            ParseAttempt::Baseline => SourceType::tsx(),
            ParseAttempt::Extended => match dialect {
                SourceDialect::JavaScript | SourceDialect::Jsx => SourceType::mjs().with_jsx(true),
                SourceDialect::TypeScript => SourceType::ts(),
                SourceDialect::Tsx => SourceType::tsx(),
            },
        }
    }

    fn parse_options(attempt: ParseAttempt) -> ParseOptions {
        match attempt {
            ParseAttempt::Baseline => ParseOptions::default(),
            ParseAttempt::Extended => ParseOptions {
                allow_return_outside_function: true,
                allow_v8_intrinsics: true,
                ..ParseOptions::default()
            },
        }
    }
}

impl Default for ASTParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxParser for ASTParser {
    fn parse(&self, source: &str, dialect: SourceDialect, attempt: ParseAttempt) -> ParseOutcome {
        let allocator = self.allocator_pool.take();

        // Lower the AST immediately; nothing borrowed from the arena escapes this block
        let outcome = {
            let ret = Parser::new(&allocator, source, Self::source_type(dialect, attempt))
                .with_options(Self::parse_options(attempt))
                .parse();

            let strict = attempt == ParseAttempt::Baseline;
            if ret.panicked || (strict && !ret.errors.is_empty()) {
                ParseOutcome::Failure(ParseDiagnostic::new(diagnostic_messages(&ret.errors)))
            } else {
                let mut tree = ImportLowering::new(source).lower(&ret.program);
                tree.recovered_errors = diagnostic_messages(&ret.errors);
                ParseOutcome::Success(tree)
            }
        };

        self.allocator_pool.give_back(allocator);
        outcome
    }
}

fn diagnostic_messages(errors: &[OxcDiagnostic]) -> Vec<String> {
    errors.iter().map(|e| e.to_string()).collect()
}

/// Maps byte offsets to 1-based line numbers
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(idx, _)| idx + 1));
        Self { line_starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }
}

/// Collects import declarations from an OXC program
struct ImportLowering {
    lines: LineIndex,
    imports: Vec<ImportNode>,
}

impl ImportLowering {
    fn new(source: &str) -> Self {
        Self {
            lines: LineIndex::new(source),
            imports: Vec::new(),
        }
    }

    fn lower(mut self, program: &Program<'_>) -> SyntaxTree {
        self.visit_statements(&program.body);
        SyntaxTree {
            imports: self.imports,
            recovered_errors: Vec::new(),
        }
    }

    fn visit_statements(&mut self, statements: &[Statement<'_>]) {
        for stmt in statements {
            match stmt {
                Statement::ImportDeclaration(decl) => self.visit_import_declaration(decl),
                Statement::TSModuleDeclaration(decl) => self.visit_ts_module(decl),
                _ => {}
            }
        }
    }

    fn visit_ts_module(&mut self, decl: &TSModuleDeclaration<'_>) {
        match &decl.body {
            Some(TSModuleDeclarationBody::TSModuleBlock(block)) => self.visit_statements(&block.body),
            Some(TSModuleDeclarationBody::TSModuleDeclaration(nested)) => self.visit_ts_module(nested),
            None => {}
        }
    }

    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'_>) {
        let specifiers = decl
            .specifiers
            .as_ref()
            .map(|specifiers| specifiers.iter().map(lower_specifier).collect())
            .unwrap_or_default();

        self.imports.push(ImportNode {
            source: decl.source.value.as_str().to_string(),
            specifiers,
            line: Some(self.lines.line_of(decl.span.start as usize)),
            type_only: matches!(decl.import_kind, ImportOrExportKind::Type),
        });
    }
}

fn lower_specifier(specifier: &ImportDeclarationSpecifier<'_>) -> SpecifierNode {
    match specifier {
        ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => SpecifierNode::Default {
            local: spec.local.name.to_string(),
        },
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => SpecifierNode::Namespace {
            local: spec.local.name.to_string(),
        },
        ImportDeclarationSpecifier::ImportSpecifier(spec) => {
            let imported = match &spec.imported {
                ModuleExportName::IdentifierName(ident) => ExportName::Identifier(ident.name.to_string()),
                ModuleExportName::IdentifierReference(ident) => {
                    ExportName::Identifier(ident.name.to_string())
                }
                ModuleExportName::StringLiteral(lit) => ExportName::StringLiteral(lit.value.to_string()),
            };
            SpecifierNode::Named {
                imported: Some(imported),
                local: spec.local.name.to_string(),
            }
        }
    }
}
