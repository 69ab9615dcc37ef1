//! Parallel processing utilities
//!
//! Files are split into groups of `ceil(total / concurrency)`; groups run one
//! after another and the files of a group run concurrently on a dedicated
//! rayon pool. Every file is guarded, so one failure (or panic) only empties
//! that file's result.

use crate::error::{ImportyError, Result};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upper bound for the default concurrency
pub const MAX_DEFAULT_CONCURRENCY: usize = 4;

/// Progress update information for parallel operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }

    /// Completed tenths of the work, 0 through 10
    pub fn decile(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.current * 10 / self.total
        }
    }
}

/// Concurrency used when none is configured: one less than the CPU count, between 1 and 4
pub fn default_concurrency() -> usize {
    num_cpus::get()
        .saturating_sub(1)
        .clamp(1, MAX_DEFAULT_CONCURRENCY)
}

/// Group size so that the number of groups is about `concurrency`
pub fn batch_size(total: usize, concurrency: usize) -> usize {
    total.div_ceil(concurrency.max(1)).max(1)
}

/// Results of a batch, in input order, plus the files that failed
#[derive(Debug)]
pub struct BatchOutcome<R> {
    pub results: Vec<R>,
    pub failures: Vec<(PathBuf, ImportyError)>,
}

impl<R> BatchOutcome<R> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
            failures: Vec::new(),
        }
    }

    fn extend(&mut self, other: BatchOutcome<R>) {
        self.results.extend(other.results);
        self.failures.extend(other.failures);
    }
}

/// Group-sequential, intra-group-parallel file processor
pub struct BatchProcessor {
    concurrency: usize,
    pool: Option<rayon::ThreadPool>,
}

impl BatchProcessor {
    /// Create a processor running at most `concurrency` files at once
    pub fn new(concurrency: usize) -> Self {
        let concurrency = concurrency.max(1);
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(concurrency)
            .thread_name(|idx| format!("importy-worker-{}", idx))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                eprintln!(
                    "Warning: {}",
                    ImportyError::ParallelExecution {
                        message: format!("could not build worker pool, using the global pool: {}", e),
                    }
                );
                None
            }
        };

        Self { concurrency, pool }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Process all items and return every result
    pub fn process<T, R, F, P>(&self, items: &[T], f: F, progress_callback: P) -> BatchOutcome<R>
    where
        T: AsRef<Path> + Sync,
        R: Default + Send,
        F: Fn(&T) -> Result<R> + Send + Sync,
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let mut outcome = BatchOutcome::with_capacity(items.len());
        self.process_groups(items, f, progress_callback, |group| outcome.extend(group));
        outcome
    }

    /// Process items group by group, handing each finished group to `on_group`
    ///
    /// `on_group` runs on the calling thread between groups, so it may fold
    /// results into unsynchronized state.
    pub fn process_groups<T, R, F, P, G>(&self, items: &[T], f: F, progress_callback: P, mut on_group: G)
    where
        T: AsRef<Path> + Sync,
        R: Default + Send,
        F: Fn(&T) -> Result<R> + Send + Sync,
        P: Fn(ProgressUpdate) + Send + Sync,
        G: FnMut(BatchOutcome<R>),
    {
        let total = items.len();
        if total == 0 {
            return;
        }

        let completed = AtomicUsize::new(0);
        let guarded = |item: &T| -> Result<R> {
            let result = panic::catch_unwind(AssertUnwindSafe(|| f(item)))
                .unwrap_or_else(|payload| Err(panic_error(item.as_ref(), payload)));

            let current = completed.fetch_add(1, Ordering::SeqCst) + 1;
            progress_callback(ProgressUpdate::new(
                current,
                total,
                format!("Processed {}", item.as_ref().display()),
            ));

            result
        };

        for group in items.chunks(batch_size(total, self.concurrency)) {
            let run = || group.par_iter().map(&guarded).collect::<Vec<_>>();
            let group_results = match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            };

            let mut outcome = BatchOutcome::with_capacity(group.len());
            for (item, result) in group.iter().zip(group_results) {
                match result {
                    Ok(value) => outcome.results.push(value),
                    Err(err) => {
                        outcome.results.push(R::default());
                        outcome.failures.push((item.as_ref().to_path_buf(), err));
                    }
                }
            }

            on_group(outcome);
        }
    }
}

fn panic_error(path: &Path, payload: Box<dyn std::any::Any + Send>) -> ImportyError {
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    ImportyError::Analysis {
        message: format!("processing {} panicked: {}", path.display(), reason),
    }
}
