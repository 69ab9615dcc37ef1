//! Glob pattern matching for include/exclude filters
//!
//! Patterns are compiled with [`glob::Pattern`] and matched case-insensitively
//! with a literal path separator:
//!
//! - `*` matches any run of characters except `/`
//! - `**` as a whole path component matches any number of directories, including none
//! - `?` matches exactly one character except `/`
//! - `[abc]`, `[a-z]`, `[!abc]` match one character from (or not from) a set
//! - `{a,b}` is expanded into one pattern per alternative before compiling
//!
//! Paths are compared with `/` separators regardless of platform.

use crate::error::{ImportyError, Result};
use glob::{MatchOptions, Pattern};

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

/// Compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    pattern: String,
    alternatives: Vec<Pattern>,
}

impl GlobMatcher {
    /// Compile a glob pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let alternatives = expand_braces(pattern)
            .iter()
            .map(|expanded| Pattern::new(expanded).map_err(|e| ImportyError::glob_error(pattern, e)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            pattern: pattern.to_string(),
            alternatives,
        })
    }

    /// The pattern text as written
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match a path string, normalizing `\` separators to `/`
    pub fn is_match(&self, path: &str) -> bool {
        let path = if path.contains('\\') {
            path.replace('\\', "/")
        } else {
            path.to_string()
        };

        let options = match_options();
        self.alternatives
            .iter()
            .any(|alternative| alternative.matches_with(&path, options))
    }
}

/// Expand `{a,b}` groups into one pattern per combination
///
/// Nested groups are expanded recursively. An unbalanced `{` is kept literally.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0;
    let mut splits = Vec::new();
    let mut close = None;
    for (offset, c) in pattern[open..].char_indices() {
        let idx = open + offset;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(idx);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(idx),
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|pair| {
            let alternative = &pattern[pair[0] + 1..pair[1]];
            expand_braces(&format!("{}{}{}", prefix, alternative, suffix))
        })
        .collect()
}
