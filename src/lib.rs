//! Importy - find every import of a library across a JavaScript/TypeScript codebase
//!
//! This library scans a directory of `.js`, `.jsx`, `.ts` and `.tsx` files,
//! parses each one and reports which bindings of a target library are
//! imported, grouped by exported name, together with the importing files.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{analyze_imports, AnalysisOptions, ImportAnalyzer};
pub use error::{ErrorSeverity, ImportyError, Result};
pub use models::{
    analysis::{AnalysisResult, AnalysisSummary, ComponentMap, ImportMatch},
    config::Settings,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
