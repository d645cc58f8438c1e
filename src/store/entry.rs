use super::DeclarationRecord;
use serde::{Deserialize, Serialize};

/// State of one file in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum FileEntry {
    Pending,
    Parsed(Vec<DeclarationRecord>),
}

impl FileEntry {
    pub fn is_pending(&self) -> bool {
        matches!(self, FileEntry::Pending)
    }

    pub fn declarations(&self) -> Option<&[DeclarationRecord]> {
        match self {
            FileEntry::Pending => None,
            FileEntry::Parsed(records) => Some(records),
        }
    }
}

/// A `(file, entry)` pair as handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub file: String,
    pub entry: FileEntry,
}
