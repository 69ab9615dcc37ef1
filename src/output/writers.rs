//! Output writing functionality
//!
//! This module provides writers for different output destinations.

use crate::error::{ImportyError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| ImportyError::StdoutWrite { source: e })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let write_error = |e| ImportyError::OutputWrite {
            path: self.path.clone(),
            source: e,
        };

        let mut file = File::create(&self.path).map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)
    }
}

/// Write to `output_file`, falling back to `fallback` when the file cannot be written
///
/// Returns the file error that triggered the fallback, if any, so the caller
/// can report it.
pub fn write_with_fallback(
    content: &str,
    output_file: Option<&Path>,
    fallback: &dyn OutputWriter,
) -> Result<Option<ImportyError>> {
    let Some(path) = output_file else {
        fallback.write(content)?;
        return Ok(None);
    };

    match FileWriter::new(path).write(content) {
        Ok(()) => Ok(None),
        Err(err) => {
            fallback.write(content)?;
            Ok(Some(err))
        }
    }
}
