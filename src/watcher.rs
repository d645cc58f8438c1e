//! File-system watcher that keeps a `ParseStore` current.
//!
//! Raw `notify` events are coalesced per path by `notify-debouncer-mini`, so
//! one editor save triggers one re-extraction. Changes are applied on the
//! calling thread, one at a time, through a single parser.

use crate::error::Result;
use crate::indexing::{FileEvent, FileEventKind, apply_event};
use crate::parsers::{JavaParser, is_java_source};
use crate::store::ParseStore;
use log::{debug, error, info, warn};
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer};
use std::fs;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

pub const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(200);

/// Watches `root_path` recursively and applies every Java file change to
/// `store`, calling `on_change` after each event that changed it.
///
/// The root is canonicalized before watching so event paths line up with the
/// keys written by the directory processor. Blocks until the event channel
/// disconnects.
pub fn watch_directory<F>(
    root_path: &Path,
    parser: &mut JavaParser,
    store: &mut ParseStore,
    mut on_change: F,
) -> Result<()>
where
    F: FnMut(&ParseStore, &FileEvent),
{
    let root_path = fs::canonicalize(root_path).map_err(|e| {
        error!("Failed to canonicalize watch root {:?}: {}", root_path, e);
        e
    })?;

    let (event_tx, event_rx) = channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(DEBOUNCE_TIMEOUT, event_tx)?;
    debouncer
        .watcher()
        .watch(&root_path, RecursiveMode::Recursive)?;

    info!(
        "Watching {:?} for Java changes ({} files tracked)",
        root_path,
        store.len()
    );

    for result in event_rx {
        match result {
            Ok(events) => {
                for event in events {
                    let Some(file_event) = translate_path(&event.path, store) else {
                        continue;
                    };
                    debug!(
                        "File {}: {:?}",
                        file_event.kind.as_str(),
                        file_event.path
                    );
                    if apply_event(parser, store, &file_event) {
                        on_change(store, &file_event);
                    }
                }
            }
            Err(e) => {
                warn!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}

/// Resolves a debounced path into a file event.
///
/// Debounced events carry no direction, so a path that no longer exists is
/// deleted, an existing path the store has not seen is created, and anything
/// else is modified.
pub fn translate_path(path: &Path, store: &ParseStore) -> Option<FileEvent> {
    if !is_java_source(path) {
        return None;
    }

    let kind = if !path.exists() {
        FileEventKind::Deleted
    } else if path.is_dir() {
        return None;
    } else if store.get(path).is_none() {
        FileEventKind::Created
    } else {
        FileEventKind::Modified
    };

    Some(FileEvent::new(path, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let known = dir.path().join("Known.java");
        let fresh = dir.path().join("Fresh.java");
        let gone = dir.path().join("Gone.java");
        fs::write(&known, "class Known {}").unwrap();
        fs::write(&fresh, "class Fresh {}").unwrap();

        let mut store = ParseStore::new();
        store.mark_pending(&known);
        store.mark_pending(&gone);

        assert_eq!(
            translate_path(&known, &store),
            Some(FileEvent::new(&known, FileEventKind::Modified))
        );
        assert_eq!(
            translate_path(&fresh, &store),
            Some(FileEvent::new(&fresh, FileEventKind::Created))
        );
        assert_eq!(
            translate_path(&gone, &store),
            Some(FileEvent::new(&gone, FileEventKind::Deleted))
        );
    }

    #[test]
    fn test_non_java_paths_and_directories_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = ParseStore::new();
        let folder = dir.path().join("weird.java");
        fs::create_dir(&folder).unwrap();
        let script = dir.path().join("build.gradle");
        fs::write(&script, "apply plugin: 'java'").unwrap();

        assert_eq!(translate_path(&folder, &store), None);
        assert_eq!(translate_path(&script, &store), None);
    }
}
