//! Analysis result structures

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One matched binding at one import site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportMatch {
    /// Exported name, `"default"` for default imports or `"*"` for namespace imports
    pub imported_name: String,
    /// Identifier bound in the importing file
    pub local_name: String,
    /// File containing the import
    pub file: String,
    /// 1-based line of the import declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ImportMatch {
    pub const DEFAULT: &'static str = "default";
    pub const NAMESPACE: &'static str = "*";
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(
        imported_name: impl Into<String>,
        local_name: impl Into<String>,
        file: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            imported_name: imported_name.into(),
            local_name: local_name.into(),
            file: file.into(),
            line,
        }
    }
}

/// Files using one imported binding, deduplicated, in order of first encounter
#[derive(Debug, Clone, Default)]
struct FileSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl FileSet {
    fn insert(&mut self, file: &str) -> bool {
        if self.seen.contains(file) {
            return false;
        }
        self.seen.insert(file.to_string());
        self.order.push(file.to_string());
        true
    }
}

/// Mapping from imported binding name to the set of files importing it
#[derive(Debug, Clone, Default)]
pub struct ComponentMap {
    entries: BTreeMap<String, FileSet>,
}

impl ComponentMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `file` imports `imported_name`.
    ///
    /// Returns `false` when the file was already recorded for that name.
    pub fn insert(&mut self, imported_name: &str, file: &str) -> bool {
        self.entries
            .entry(imported_name.to_string())
            .or_default()
            .insert(file)
    }

    /// Number of distinct imported names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Files recorded for `imported_name`, in order of first encounter
    pub fn files(&self, imported_name: &str) -> Option<&[String]> {
        self.entries.get(imported_name).map(|set| set.order.as_slice())
    }

    /// Whether `file` is recorded under `imported_name`
    pub fn contains(&self, imported_name: &str, file: &str) -> bool {
        self.entries
            .get(imported_name)
            .is_some_and(|set| set.seen.contains(file))
    }

    /// Iterate over names and their file lists, names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, set)| (name.as_str(), set.order.as_slice()))
    }

    /// Sum of file-list lengths across all names
    pub fn total_imports(&self) -> usize {
        self.entries.values().map(|set| set.order.len()).sum()
    }

    /// Render into the plain name -> file list mapping used for output
    pub fn into_rendered(self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .into_iter()
            .map(|(name, set)| (name, set.order))
            .collect()
    }
}

/// Summary statistics for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub library: String,
    pub components_found: usize,
    pub total_imports: usize,
    pub files_scanned: usize,
}

impl AnalysisSummary {
    /// Summary for a run that found nothing
    pub fn empty(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            components_found: 0,
            total_imports: 0,
            files_scanned: 0,
        }
    }
}

/// Final output of an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    pub components: BTreeMap<String, Vec<String>>,
}

impl AnalysisResult {
    /// Result for a directory without eligible files
    pub fn empty(library: impl Into<String>) -> Self {
        Self {
            summary: AnalysisSummary::empty(library),
            components: BTreeMap::new(),
        }
    }

    /// Build the final result from a finished component map
    pub fn from_components(
        library: impl Into<String>,
        components: ComponentMap,
        files_scanned: usize,
    ) -> Self {
        let summary = AnalysisSummary {
            library: library.into(),
            components_found: components.len(),
            total_imports: components.total_imports(),
            files_scanned,
        };

        Self {
            summary,
            components: components.into_rendered(),
        }
    }

    /// Whether any import of the library was found
    pub fn has_matches(&self) -> bool {
        !self.components.is_empty()
    }
}
