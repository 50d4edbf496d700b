use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Parallel recursive directory walk.
///
/// Files named directly as roots are always sent; files found while
/// descending are sent only when their extension is accepted.
///
/// # Errors
/// Returns an error if a root path does not exist. Errors during traversal
/// are logged and skipped.
pub fn walk_parallel(options: &WalkOptions, tx: &Sender<PathBuf>) -> Result<()> {
    if options.roots.is_empty() {
        return Ok(());
    }

    if let Some(missing) = options.roots.iter().find(|root| !root.exists()) {
        return Err(EngineError::Config(format!(
            "Path not found: {}",
            missing.display()
        )));
    }

    let mut builder = WalkBuilder::new(&options.roots[0]);
    for root in &options.roots[1..] {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let filter = options.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        filter.accepts(entry.path())
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    if tx.send(entry.into_path()).is_err() {
                        return ignore::WalkState::Quit;
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("skipping entry: {e}"),
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}

/// ルート配下の対象ファイルをパス順で集める
///
/// # Errors
/// Returns an error if a root path does not exist.
pub fn collect_paths(options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let (tx, rx) = crossbeam_channel::unbounded();
    walk_parallel(options, &tx)?;
    drop(tx);

    let mut paths: Vec<PathBuf> = rx.into_iter().collect();
    paths.sort();
    paths.dedup();
    Ok(paths)
}
