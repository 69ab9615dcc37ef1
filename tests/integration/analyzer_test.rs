//! End-to-end analysis of small projects

use super::fixtures::{project, reported, ui_library_project};
use importy::{analyze_imports, AnalysisOptions, ImportAnalyzer, ImportyError};
use std::collections::BTreeSet;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn as_sets(result: &importy::AnalysisResult) -> Vec<(String, BTreeSet<String>)> {
    result
        .components
        .iter()
        .map(|(name, files)| (name.clone(), files.iter().cloned().collect()))
        .collect()
}

#[test]
fn test_ui_library_fixture() {
    let dir = ui_library_project();
    let root = dir.path();

    let result = analyze_imports(&AnalysisOptions::new(root, "ui-library")).unwrap();

    assert_eq!(result.summary.library, "ui-library");
    assert_eq!(result.summary.files_scanned, 3);
    assert_eq!(result.summary.components_found, 4);
    assert_eq!(result.summary.total_imports, 5);

    assert_eq!(result.components["Button"], vec![reported(root, "src/app.tsx")]);
    assert_eq!(result.components["Card"], vec![reported(root, "src/app.tsx")]);
    assert_eq!(result.components["Navbar"], vec![reported(root, "components/header.tsx")]);

    let containers: BTreeSet<_> = result.components["Container"].iter().cloned().collect();
    assert_eq!(
        containers,
        BTreeSet::from([
            reported(root, "components/footer.tsx"),
            reported(root, "components/header.tsx"),
        ])
    );
    assert!(!result.components.contains_key("React"));
}

#[test]
fn test_runs_are_idempotent() {
    let dir = ui_library_project();
    let options = AnalysisOptions::new(dir.path(), "ui-library");

    let first = analyze_imports(&options).unwrap();
    let second = analyze_imports(&options).unwrap();

    assert_eq!(first.summary, second.summary);
    assert_eq!(as_sets(&first), as_sets(&second));
}

#[test]
fn test_concurrency_does_not_change_results() {
    let files: Vec<(String, String)> = (0..10)
        .map(|i| {
            (
                format!("src/file{}.ts", i),
                format!("import {{ Widget{}, Shared }} from 'ui-library';\n", i % 3),
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
    let dir = project(&borrowed);

    let sequential =
        analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library").with_concurrency(1)).unwrap();
    let parallel =
        analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library").with_concurrency(4)).unwrap();

    assert_eq!(sequential.summary, parallel.summary);
    assert_eq!(as_sets(&sequential), as_sets(&parallel));
    assert_eq!(sequential.summary.files_scanned, 10);
    assert_eq!(sequential.components["Shared"].len(), 10);
    assert_eq!(sequential.components["Widget0"].len(), 4);
}

#[test]
fn test_default_namespace_and_named_bindings() {
    let dir = project(&[(
        "src/index.js",
        r#"import UI from "ui-library";
import * as All from "ui-library";
import { Button as PrimaryButton } from "ui-library";
"#,
    )]);

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library")).unwrap();

    assert_eq!(
        result.components.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["*", "Button", "default"]
    );
    assert!(!result.components.contains_key("PrimaryButton"));
}

#[test]
fn test_subpath_imports_and_deduplication() {
    let dir = project(&[(
        "src/form.tsx",
        r#"import { Button } from "ui-library";
import { Button as LegacyButton } from "ui-library/legacy";
import Input from "ui-library/Input";
import { Other } from "ui-library-extras";
"#,
    )]);
    let root = dir.path();

    let result = analyze_imports(&AnalysisOptions::new(root, "ui-library")).unwrap();

    assert_eq!(result.components["Button"], vec![reported(root, "src/form.tsx")]);
    assert_eq!(result.components["default"], vec![reported(root, "src/form.tsx")]);
    assert!(!result.components.contains_key("Other"));
    assert_eq!(result.summary.total_imports, 2);
}

#[test]
fn test_scoped_library() {
    let dir = project(&[(
        "app.jsx",
        "import { Button } from '@acme/ui';\nimport Icon from '@acme/ui/icons/Star';\nimport { X } from '@acme/uikit';\n",
    )]);

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "@acme/ui")).unwrap();
    assert_eq!(result.summary.components_found, 2);
    assert!(result.components.contains_key("Button"));
    assert!(result.components.contains_key("default"));
}

#[test]
fn test_empty_and_unmatched_directories() {
    let empty = project(&[]);
    let result = analyze_imports(&AnalysisOptions::new(empty.path(), "ui-library")).unwrap();
    assert_eq!(result.summary.files_scanned, 0);
    assert_eq!(result.summary.components_found, 0);
    assert_eq!(result.summary.total_imports, 0);
    assert!(result.components.is_empty());

    let unmatched = project(&[
        ("src/a.ts", "import { useState } from 'react';\n"),
        ("README.md", "import { Button } from 'ui-library';\n"),
    ]);
    let result = analyze_imports(&AnalysisOptions::new(unmatched.path(), "ui-library")).unwrap();
    assert_eq!(result.summary.files_scanned, 1);
    assert!(!result.has_matches());
}

#[test]
fn test_invalid_roots() {
    let dir = ui_library_project();

    let missing = analyze_imports(&AnalysisOptions::new(dir.path().join("nope"), "ui-library"));
    assert!(matches!(missing, Err(ImportyError::InvalidPath { .. })));

    let file = analyze_imports(&AnalysisOptions::new(dir.path().join("src/app.tsx"), "ui-library"));
    assert!(matches!(file, Err(ImportyError::NotADirectory { .. })));
}

#[test]
fn test_unparsable_file_is_skipped() {
    let dir = project(&[
        ("src/good.tsx", "import { Button } from 'ui-library';\n"),
        ("src/also-good.js", "import { Card } from 'ui-library';\n"),
        ("src/broken.ts", "export const = ;;; function {{{ <<<\n"),
    ]);

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library")).unwrap();

    assert_eq!(result.summary.files_scanned, 3);
    assert_eq!(result.summary.components_found, 2);
    assert!(result.components.contains_key("Button"));
    assert!(result.components.contains_key("Card"));
}

#[test]
fn test_angle_bracket_assertions_use_fallback() {
    let dir = project(&[(
        "src/legacy.ts",
        "import { Theme } from 'ui-library';\nconst theme = <Theme>window.theme;\n",
    )]);

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library")).unwrap();
    assert!(result.components.contains_key("Theme"));
}

#[test]
fn test_non_utf8_file_still_reports_imports() {
    let dir = project(&[("src/ok.ts", "import { Card } from 'ui-library';\n")]);
    fs::write(
        dir.path().join("src/legacy.js"),
        b"// Copyright \xa9 Acme\nimport { Button } from 'ui-library';\n",
    )
    .unwrap();

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library")).unwrap();

    assert_eq!(result.summary.files_scanned, 2);
    assert_eq!(result.summary.components_found, 2);
    assert_eq!(result.components["Button"], vec![reported(dir.path(), "src/legacy.js")]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = project(&[
        ("src/ok.ts", "import { Button } from 'ui-library';\n"),
        ("src/secret.ts", "import { Card } from 'ui-library';\n"),
    ]);
    let secret = dir.path().join("src/secret.ts");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

    // Running as root ignores file modes
    if fs::read_to_string(&secret).is_ok() {
        return;
    }

    let result = analyze_imports(&AnalysisOptions::new(dir.path(), "ui-library")).unwrap();
    assert_eq!(result.summary.files_scanned, 2);
    assert!(result.components.contains_key("Button"));
    assert!(!result.components.contains_key("Card"));
}

#[test]
fn test_progress_reaches_total() {
    let dir = ui_library_project();
    let seen = Arc::new(AtomicUsize::new(0));
    let max = Arc::new(AtomicUsize::new(0));
    let (seen_cb, max_cb) = (Arc::clone(&seen), Arc::clone(&max));

    ImportAnalyzer::new(AnalysisOptions::new(dir.path(), "ui-library").with_concurrency(2))
        .with_progress(move |update| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
            max_cb.fetch_max(update.current, Ordering::SeqCst);
        })
        .analyze()
        .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 3);
    assert_eq!(max.load(Ordering::SeqCst), 3);
}
