//! Core functionality for file discovery and import analysis

pub mod aggregator;
pub mod analyzer;
pub mod discovery;
pub mod parallel;

pub use aggregator::ImportAggregator;
pub use analyzer::{analyze_imports, AnalysisOptions, ImportAnalyzer};
pub use discovery::{FileDiscoverer, PathFilter};
pub use parallel::{BatchProcessor, ProgressUpdate};
