//! Folding per-file matches into the component map

use crate::models::analysis::{AnalysisResult, ComponentMap, ImportMatch};

/// Accumulates matches from many files
#[derive(Debug, Default)]
pub struct ImportAggregator {
    components: ComponentMap,
    matches_seen: usize,
}

impl ImportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches of one file
    pub fn add_matches<'a, I>(&mut self, matches: I)
    where
        I: IntoIterator<Item = &'a ImportMatch>,
    {
        for m in matches {
            self.matches_seen += 1;
            self.components.insert(&m.imported_name, &m.file);
        }
    }

    /// Number of matches folded in, duplicates included
    pub fn matches_seen(&self) -> usize {
        self.matches_seen
    }

    /// Build the final result
    pub fn finish(self, library: impl Into<String>, files_scanned: usize) -> AnalysisResult {
        AnalysisResult::from_components(library, self.components, files_scanned)
    }
}

/// Aggregate per-file match lists in one go
pub fn aggregate<I>(per_file: I) -> ComponentMap
where
    I: IntoIterator<Item = Vec<ImportMatch>>,
{
    let mut aggregator = ImportAggregator::new();
    for matches in per_file {
        aggregator.add_matches(&matches);
    }
    aggregator.components
}
