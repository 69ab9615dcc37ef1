//! Error handling for Importy
//!
//! Error types and the result alias used throughout the crate.

pub mod types;

pub use types::{ErrorSeverity, ImportyError, Result};
