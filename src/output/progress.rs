//! Progress reporting functionality
//!
//! This module provides progress reporting for long-running operations
//! with support for quiet and verbose modes. Everything goes to stderr so
//! stdout stays reserved for the report itself.

use crate::core::parallel::ProgressUpdate;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress reporter for long-running operations
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    progress_bar: Option<ProgressBar>,
    current_operation: Mutex<String>,
    last_decile: AtomicUsize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    ///
    /// The bar is only drawn when `show_bar` is set and neither quiet nor
    /// verbose mode is active; verbose mode logs decile lines instead.
    pub fn new(quiet: bool, verbose: bool, show_bar: bool) -> Self {
        let progress_bar = if quiet || verbose || !show_bar {
            None
        } else {
            let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
            {
                bar.set_style(style.progress_chars("#>-"));
            }
            Some(bar)
        };

        Self {
            quiet,
            verbose,
            progress_bar,
            current_operation: Mutex::new(String::new()),
            last_decile: AtomicUsize::new(0),
        }
    }

    /// Reporter that never draws a bar, for library callers
    pub fn silent(verbose: bool) -> Self {
        Self::new(false, verbose, false)
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        self.last_decile.store(0, Ordering::SeqCst);
        *self.current_operation.lock() = operation.to_string();

        if let Some(bar) = &self.progress_bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_position(0);
            bar.set_message(operation.to_string());
        }

        self.print_verbose(&format!("Starting: {}", operation));
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize) {
        if let Some(bar) = &self.progress_bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        }

        if self.verbose {
            let decile = ProgressUpdate::new(current, total, "").decile();
            // Only the first caller to reach a new decile logs it
            if decile > 0 && self.last_decile.fetch_max(decile, Ordering::SeqCst) < decile {
                self.print_verbose(&format_progress(current, total));
            }
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total);
    }

    /// Finish the progress operation
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.progress_bar {
            bar.finish_and_clear();
        }

        let operation = self.current_operation.lock().clone();
        if !operation.is_empty() {
            self.print_verbose(&format!("Finished: {}", operation));
        }
        self.print_verbose(message);
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            self.emit(message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose {
            self.emit(message);
        }
    }

    /// Print a warning message (always printed, even in quiet mode)
    pub fn print_warning(&self, message: &str) {
        self.emit(&format!("Warning: {}", message));
    }

    /// Print an error message (always printed, even in quiet mode)
    pub fn print_error(&self, message: &str) {
        self.emit(&format!("Error: {}", message));
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn emit(&self, line: &str) {
        match &self.progress_bar {
            // Keeps the bar from being overdrawn
            Some(bar) => bar.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

/// Verbose progress line, e.g. `Progress: 40% (4/10 files)`
pub fn format_progress(current: usize, total: usize) -> String {
    let percent = if total == 0 { 0 } else { current * 100 / total };
    format!("Progress: {}% ({}/{} files)", percent, current, total)
}
