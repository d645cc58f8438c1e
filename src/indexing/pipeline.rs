use crate::indexing::extractor::extract_file;
use crate::parsers::{JavaParser, is_java_source};
use crate::store::ParseStore;
use log::{error, info, trace};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    Created,
    Modified,
    Deleted,
}

impl FileEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileEventKind::Created => "created",
            FileEventKind::Modified => "modified",
            FileEventKind::Deleted => "deleted",
        }
    }
}

/// A change to one file, as reported by the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub path: PathBuf,
    pub kind: FileEventKind,
}

impl FileEvent {
    pub fn new(path: impl Into<PathBuf>, kind: FileEventKind) -> Self {
        FileEvent {
            path: path.into(),
            kind,
        }
    }
}

/// Marks the file pending, extracts it, and stores the result.
///
/// On failure the error is logged and the entry is left pending. Returns
/// whether extraction succeeded.
pub fn parse_and_store(parser: &mut JavaParser, store: &mut ParseStore, file_path: &Path) -> bool {
    store.mark_pending(file_path);
    match extract_file(parser, file_path) {
        Ok(records) => {
            info!(
                "Parsed and stored {} declarations for {:?}",
                records.len(),
                file_path
            );
            store.set_parsed(file_path, records);
            true
        }
        Err(e) => {
            error!("Parsing failed for {:?}: {}", file_path, e);
            false
        }
    }
}

/// Applies one file event to the store. Returns whether the store changed.
pub fn apply_event(parser: &mut JavaParser, store: &mut ParseStore, event: &FileEvent) -> bool {
    if !is_java_source(&event.path) {
        trace!("Ignoring {} event for {:?}", event.kind.as_str(), event.path);
        return false;
    }

    trace!("Applying {} event for {:?}", event.kind.as_str(), event.path);
    match event.kind {
        FileEventKind::Created | FileEventKind::Modified => {
            parse_and_store(parser, store, &event.path);
            true
        }
        FileEventKind::Deleted => store.remove(&event.path).is_some(),
    }
}
