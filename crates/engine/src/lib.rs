// crates/engine/src/lib.rs
use p8tokens_shared_kernel::{AggregateReport, FileCount};
use rayon::prelude::*;
use std::path::PathBuf;

pub mod aggregate;
pub mod combine;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod watch;

use crate::aggregate::Workspace;
use crate::config::Config;
use crate::error::{EngineError, Result};

pub use aggregate::{SourceOverride, aggregate, aggregate_with_budget};
pub use processor::count_file;

/// Counted files plus the per-file failures that did not abort the run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub counts: Vec<FileCount>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Workspace report together with the files that could not be counted.
#[derive(Debug)]
pub struct ReportResult {
    pub report: AggregateReport,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Count an explicit list of files in parallel.
///
/// Counts come back in path order.
///
/// # Errors
///
/// In strict mode the first read failure is returned. Otherwise failures are
/// collected in `RunResult::errors`.
pub fn count_files(paths: &[PathBuf], strict: bool) -> Result<RunResult> {
    let mut result = if strict {
        let counts = paths
            .par_iter()
            .map(|path| processor::count_file(path))
            .collect::<Result<Vec<_>>>()?;
        RunResult {
            counts,
            errors: Vec::new(),
        }
    } else {
        let (counts, errors): (Vec<_>, Vec<_>) = paths
            .par_iter()
            .map(|path| processor::count_file(path).map_err(|e| (path.clone(), e)))
            .partition_map(|r| match r {
                Ok(count) => rayon::iter::Either::Left(count),
                Err(err) => rayon::iter::Either::Right(err),
            });
        RunResult { counts, errors }
    };

    for (path, err) in &result.errors {
        log::warn!("skipped {}: {err}", path.display());
    }
    result.counts.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(result)
}

/// Run the file counting engine.
///
/// Walks the configured roots in a background thread and counts the files
/// it finds as they arrive.
///
/// # Errors
///
/// Returns an error for a walk failure, or for the first unreadable file in
/// strict mode.
pub fn run(config: &Config) -> Result<RunResult> {
    let threads = config.walk.threads.max(1);
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk_cfg = config.walk.clone();
    let walker = std::thread::spawn(move || {
        if let Err(e) = crate::filesystem::walk_parallel(&walk_cfg, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let counted = count_received(rx, config.strict);

    // 受信側はここで破棄済み。送信に失敗した walker は自ら終了する。
    if let Err(panic) = walker.join() {
        let message = panic_message(panic.as_ref());
        log::error!("directory walker panicked: {message}");
        return Err(EngineError::WalkerPanicked(message));
    }
    if let Ok(walk_err) = err_rx.try_recv() {
        return Err(walk_err);
    }
    let mut result = counted?;

    for (path, err) in &result.errors {
        log::warn!("skipped {}: {err}", path.display());
    }
    result.counts.sort_by(|a, b| a.path.cmp(&b.path));
    log::debug!("counted {} files with {threads} walker threads", result.counts.len());
    Ok(result)
}

fn count_received(rx: crossbeam_channel::Receiver<PathBuf>, strict: bool) -> Result<RunResult> {
    let iter = rx.into_iter().par_bridge();

    if strict {
        let counts = iter
            .map(processor::process_file)
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            counts,
            errors: Vec::new(),
        });
    }

    let (counts, errors): (Vec<_>, Vec<_>) = iter
        .map(|path| {
            let failed = path.clone();
            processor::process_file(path).map_err(|e| (failed, e))
        })
        .partition_map(|r| match r {
            Ok(count) => rayon::iter::Either::Left(count),
            Err(err) => rayon::iter::Either::Right(err),
        });
    Ok(RunResult { counts, errors })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Walk, count and aggregate with the configured in-memory overrides.
///
/// # Errors
///
/// Same as [`run`].
pub fn report(config: &Config) -> Result<ReportResult> {
    let RunResult { counts, errors } = run(config)?;

    let mut workspace = Workspace::new(config.budget);
    workspace.seed_disk(counts);
    workspace.apply_overrides(&config.overrides);

    Ok(ReportResult {
        report: workspace.report(),
        errors,
    })
}
