//! Include and exclude filtering

use super::fixtures::{project, ui_library_project};
use importy::{analyze_imports, AnalysisOptions};

fn component_names(result: &importy::AnalysisResult) -> Vec<&str> {
    result.components.keys().map(String::as_str).collect()
}

#[test]
fn test_include_restricts_to_matching_files() {
    let dir = ui_library_project();
    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_include("**/src/**"),
    )
    .unwrap();

    assert_eq!(component_names(&result), vec!["Button", "Card"]);
    assert_eq!(result.summary.files_scanned, 1);
}

#[test]
fn test_exclude_prunes_directories() {
    let dir = ui_library_project();
    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_exclude("**/components/**"),
    )
    .unwrap();

    assert_eq!(component_names(&result), vec!["Button", "Card"]);
    assert_eq!(result.summary.files_scanned, 1);
}

#[test]
fn test_include_and_exclude_combined() {
    let dir = project(&[
        ("src/app.tsx", "import { Button } from 'ui-library';\n"),
        ("src/app.test.tsx", "import { TestHarness } from 'ui-library';\n"),
        ("src/widgets/card.ts", "import { Card } from 'ui-library';\n"),
        ("node_modules/ui-library/index.js", "import { Internal } from 'ui-library';\n"),
    ]);

    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library")
            .with_include("**/src/**")
            .with_exclude("**/*.test.tsx"),
    )
    .unwrap();

    assert_eq!(component_names(&result), vec!["Button", "Card"]);
    assert_eq!(result.summary.files_scanned, 2);
}

#[test]
fn test_node_modules_exclusion() {
    let dir = project(&[
        ("src/app.ts", "import { Button } from 'ui-library';\n"),
        ("node_modules/ui-library/dist/index.js", "import { Internal } from 'ui-library';\n"),
    ]);

    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_exclude("**/node_modules/**"),
    )
    .unwrap();

    assert_eq!(component_names(&result), vec!["Button"]);
}

#[test]
fn test_brace_alternatives_and_case_insensitivity() {
    let dir = project(&[
        ("Src/a.ts", "import { A } from 'ui-library';\n"),
        ("Src/b.jsx", "import { B } from 'ui-library';\n"),
        ("Src/c.js", "import { C } from 'ui-library';\n"),
    ]);

    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_include("**/src/*.{ts,jsx}"),
    )
    .unwrap();

    assert_eq!(component_names(&result), vec!["A", "B"]);
}

#[test]
fn test_invalid_include_admits_nothing() {
    let dir = ui_library_project();
    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_include("**/[src"),
    )
    .unwrap();

    assert_eq!(result.summary.files_scanned, 0);
    assert!(result.components.is_empty());
}

#[test]
fn test_invalid_exclude_prunes_nothing() {
    let dir = ui_library_project();
    let result = analyze_imports(
        &AnalysisOptions::new(dir.path(), "ui-library").with_exclude("**/[components"),
    )
    .unwrap();

    assert_eq!(result.summary.files_scanned, 3);
    assert_eq!(result.summary.components_found, 4);
}
