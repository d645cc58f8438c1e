mod declaration;
mod entry;

pub use declaration::{Classification, DeclarationRecord};
pub use entry::{FileEntry, SnapshotEntry};

use indexmap::IndexMap;
use log::trace;
use std::path::{Path, PathBuf};

/// In-memory extraction results keyed by file path.
///
/// Keys keep their first insertion position until removed; overwriting a
/// key's state does not reorder it. Callers are expected to pass paths under
/// a canonical root so one file maps to one key.
#[derive(Debug, Default, Clone)]
pub struct ParseStore {
    entries: IndexMap<PathBuf, FileEntry>,
}

impl ParseStore {
    pub fn new() -> Self {
        ParseStore {
            entries: IndexMap::new(),
        }
    }

    pub fn mark_pending(&mut self, file_path: &Path) {
        self.insert(file_path, FileEntry::Pending);
    }

    pub fn set_parsed(&mut self, file_path: &Path, records: Vec<DeclarationRecord>) {
        self.insert(file_path, FileEntry::Parsed(records));
    }

    pub fn remove(&mut self, file_path: &Path) -> Option<FileEntry> {
        let removed = self.entries.shift_remove(file_path);
        if removed.is_some() {
            trace!("Removed store entry for {:?}", file_path);
        }
        removed
    }

    pub fn get(&self, file_path: &Path) -> Option<&FileEntry> {
        self.entries.get(file_path)
    }

    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.entries
            .iter()
            .map(|(path, entry)| SnapshotEntry {
                file: path.to_string_lossy().into_owned(),
                entry: entry.clone(),
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_pending()).count()
    }

    pub fn declaration_count(&self) -> usize {
        self.entries
            .values()
            .filter_map(|e| e.declarations())
            .map(|records| records.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, file_path: &Path, entry: FileEntry) {
        trace!("Store entry for {:?} -> {:?}", file_path, entry);
        self.entries.insert(file_path.to_path_buf(), entry);
    }
}
