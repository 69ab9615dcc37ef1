//! Shared project fixtures for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `files` (relative path, contents) below a fresh temporary directory
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write_files(dir.path(), files);
    dir
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture file");
    }
}

/// Three files importing from `ui-library`
pub fn ui_library_project() -> TempDir {
    project(&[
        (
            "src/app.tsx",
            r#"import React from "react";
import { Button, Card } from "ui-library";

export function App() {
  return (
    <Card>
      <Button>Click me</Button>
    </Card>
  );
}
"#,
        ),
        (
            "components/header.tsx",
            r#"import { Navbar, Container } from "ui-library";

export const Header = () => (
  <Container>
    <Navbar />
  </Container>
);
"#,
        ),
        (
            "components/footer.tsx",
            r#"import { Container } from "ui-library";

export const Footer = () => <Container>footer</Container>;
"#,
        ),
    ])
}

/// Path of `relative` below `root` as reported in results
pub fn reported(root: &Path, relative: &str) -> String {
    root.join(relative).display().to_string()
}
