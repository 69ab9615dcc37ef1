//! Shared utilities

pub mod pattern;

pub use pattern::GlobMatcher;
