//! Data models and structures for Importy

pub mod analysis;
pub mod config;
pub mod syntax;

pub use analysis::{AnalysisResult, AnalysisSummary, ComponentMap, ImportMatch};
pub use config::{OutputFormat, PartialSettings, Settings};
pub use syntax::{
    ExportName, ImportNode, ParseAttempt, ParseDiagnostic, ParseOutcome, SourceDialect,
    SpecifierNode, SyntaxTree,
};
