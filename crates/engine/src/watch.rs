// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::Result;
use notify::{EventKind, RecursiveMode, Watcher};
use std::sync::mpsc::channel;

/// Watch the configured roots and run the callback after every change.
///
/// Events are debounced by `config.watch_interval`. Access-only events are
/// ignored. This function blocks until the watcher is dropped.
pub fn watch_loop<F>(config: &Config, mut on_event: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) if !matches!(event.kind, EventKind::Access(_)) => {
                let _ = tx.send(event);
            }
            Ok(_) => {}
            Err(e) => log::warn!("watch error: {e}"),
        }
    })?;

    for root in &config.walk.roots {
        if root.exists() {
            watcher.watch(root, RecursiveMode::Recursive)?;
        }
    }

    log::info!("watching {} path(s) for changes", config.walk.roots.len());
    on_event();

    let debounce_interval = config.watch_interval;

    while rx.recv().is_ok() {
        std::thread::sleep(debounce_interval);
        while rx.try_recv().is_ok() {}

        log::info!("change detected; recounting");
        on_event();
    }

    Ok(())
}
