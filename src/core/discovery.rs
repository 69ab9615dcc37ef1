//! Source file discovery
//!
//! Walks the root directory and collects every `.js`, `.jsx`, `.ts` and
//! `.tsx` file that passes the include/exclude filters. Excluded
//! directories are pruned rather than filtered after the fact.

use crate::error::ImportyError;
use crate::models::syntax::SourceDialect;
use crate::utils::GlobMatcher;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Compiled include or exclude filter
#[derive(Debug, Clone)]
pub enum PathFilter {
    Glob(GlobMatcher),
    /// Pattern failed to compile; matches no path
    Invalid { pattern: String },
}

impl PathFilter {
    /// Compile a pattern, turning a bad pattern into a never-matching filter
    ///
    /// The compile error is returned alongside so the caller can warn about it.
    pub fn compile(pattern: &str) -> (Self, Option<ImportyError>) {
        match GlobMatcher::new(pattern) {
            Ok(matcher) => (PathFilter::Glob(matcher), None),
            Err(err) => (
                PathFilter::Invalid {
                    pattern: pattern.to_string(),
                },
                Some(err),
            ),
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        match self {
            PathFilter::Glob(matcher) => matcher.is_match(path),
            PathFilter::Invalid { .. } => false,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            PathFilter::Glob(matcher) => matcher.pattern(),
            PathFilter::Invalid { pattern } => pattern,
        }
    }
}

/// Everything a discovery walk produced
#[derive(Debug, Default)]
pub struct Discovery {
    /// Eligible files in walk order
    pub files: Vec<PathBuf>,
    /// Directories not descended because they matched the exclude filter
    pub pruned_dirs: Vec<PathBuf>,
    /// Source files dropped by the include/exclude filters
    pub filtered_files: Vec<PathBuf>,
    /// Entries the walk could not read
    pub errors: Vec<ImportyError>,
}

/// Recursive file finder
pub struct FileDiscoverer {
    root: PathBuf,
    include: Option<PathFilter>,
    exclude: Option<PathFilter>,
}

impl FileDiscoverer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include: None,
            exclude: None,
        }
    }

    pub fn with_include(mut self, include: Option<PathFilter>) -> Self {
        self.include = include;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<PathFilter>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Whether the file name carries one of the scanned extensions
    pub fn is_candidate(path: &Path) -> bool {
        SourceDialect::from_path(path).is_some()
    }

    /// Walk the root and collect eligible files
    pub fn discover(&self) -> Discovery {
        let mut discovery = Discovery::default();
        let mut pruned = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if self.is_pruned(entry) {
                    pruned.push(entry.path().to_path_buf());
                    false
                } else {
                    true
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    discovery
                        .errors
                        .push(ImportyError::directory_traversal_error(path, err.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() || !Self::is_candidate(entry.path()) {
                continue;
            }

            if self.accepts(entry.path()) {
                discovery.files.push(entry.into_path());
            } else {
                discovery.filtered_files.push(entry.into_path());
            }
        }

        discovery.pruned_dirs = pruned;
        discovery
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let Some(exclude) = &self.exclude else {
            return false;
        };
        let path = entry.path().to_string_lossy();
        exclude.is_match(&path) || exclude.is_match(&format!("{}/", path))
    }

    fn accepts(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        let included = self
            .include
            .as_ref()
            .map_or(true, |include| include.is_match(&path));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|exclude| exclude.is_match(&path));

        included && !excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("components/nested")).unwrap();
        fs::write(root.join("src/app.tsx"), "").unwrap();
        fs::write(root.join("src/util.js"), "").unwrap();
        fs::write(root.join("src/readme.md"), "").unwrap();
        fs::write(root.join("src/legacy.JS"), "").unwrap();
        fs::write(root.join("components/header.jsx"), "").unwrap();
        fs::write(root.join("components/nested/footer.ts"), "").unwrap();
        dir
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn filter(pattern: &str) -> Option<PathFilter> {
        Some(PathFilter::compile(pattern).0)
    }

    #[test]
    fn test_finds_source_files_only() {
        let dir = project();
        let discovery = FileDiscoverer::new(dir.path()).discover();

        assert_eq!(
            names(&discovery.files, dir.path()),
            vec![
                "components/header.jsx",
                "components/nested/footer.ts",
                "src/app.tsx",
                "src/util.js",
            ]
        );
        assert!(discovery.errors.is_empty());
    }

    #[test]
    fn test_exclude_prunes_directories() {
        let dir = project();
        let discovery = FileDiscoverer::new(dir.path())
            .with_exclude(filter("**/components/**"))
            .discover();

        assert_eq!(names(&discovery.files, dir.path()), vec!["src/app.tsx", "src/util.js"]);
        assert_eq!(names(&discovery.pruned_dirs, dir.path()), vec!["components"]);
    }

    #[test]
    fn test_include_restricts_files() {
        let dir = project();
        let discovery = FileDiscoverer::new(dir.path())
            .with_include(filter("**/*.{ts,tsx}"))
            .discover();

        assert_eq!(
            names(&discovery.files, dir.path()),
            vec!["components/nested/footer.ts", "src/app.tsx"]
        );
        assert_eq!(discovery.filtered_files.len(), 2);
    }

    #[test]
    fn test_invalid_filters() {
        let dir = project();

        let (include, err) = PathFilter::compile("src/[abc");
        assert!(matches!(err, Some(ImportyError::GlobPattern { .. })));
        assert_eq!(include.pattern(), "src/[abc");
        let discovery = FileDiscoverer::new(dir.path())
            .with_include(Some(include))
            .discover();
        assert!(discovery.files.is_empty());

        let (exclude, _) = PathFilter::compile("[oops");
        let discovery = FileDiscoverer::new(dir.path())
            .with_exclude(Some(exclude))
            .discover();
        assert_eq!(discovery.files.len(), 4);
    }

    #[test]
    fn test_valid_filter_keeps_pattern_text() {
        let (filter, err) = PathFilter::compile("**/*.{ts,tsx}");
        assert!(err.is_none());
        assert_eq!(filter.pattern(), "**/*.{ts,tsx}");
        assert!(filter.is_match("/repo/src/App.TSX"));
        assert!(!filter.is_match("/repo/src/app.js"));
    }

    #[test]
    fn test_root_is_never_pruned() {
        let dir = project();
        let discovery = FileDiscoverer::new(dir.path().join("components"))
            .with_exclude(filter("**/components/**"))
            .discover();

        // Files below the root still match the exclude pattern themselves
        assert!(discovery.files.is_empty());
        assert_eq!(discovery.filtered_files.len(), 1);
        assert_eq!(discovery.pruned_dirs.len(), 1);
    }
}
