pub mod error;
pub mod indexing;
pub mod parsers;
pub mod store;
pub mod utils;
pub mod watcher;

pub use error::{CodescapeError, Result};
pub use indexing::{FileEvent, FileEventKind, extract_declarations, extract_file};
pub use parsers::JavaParser;
pub use store::{Classification, DeclarationRecord, FileEntry, ParseStore, SnapshotEntry};

use log::{debug, error, info};
use std::io;
use std::path::Path;

pub fn process_directory(root_path: &Path, num_threads: usize) -> Result<ParseStore> {
    info!(
        "Processing Java sources at: {:?} with {} threads",
        root_path, num_threads
    );
    let store = indexing::processor::process_directory_parallel(root_path, num_threads)?;

    info!(
        "Store built with {} files and {} declarations",
        store.len(),
        store.declaration_count()
    );

    Ok(store)
}

pub fn analyze_directory(root_path: &Path, output_path: &Path, num_threads: usize) -> io::Result<()> {
    info!("Starting directory analysis");
    debug!("Root path: {:?}, Output path: {:?}", root_path, output_path);

    let store = process_directory(root_path, num_threads)?;

    info!("Exporting snapshot to JSON at {:?}", output_path);
    utils::io::export_snapshot_to_json(&store, output_path)?;

    info!(
        "Analysis complete: {} files, {} still pending",
        store.len(),
        store.pending_count()
    );

    Ok(())
}

/// Exports once, then re-exports after every Java change under `root_path`.
pub fn watch_and_export(root_path: &Path, output_path: &Path, num_threads: usize) -> io::Result<()> {
    let mut store = process_directory(root_path, num_threads)?;
    utils::io::export_snapshot_to_json(&store, output_path)?;

    let mut parser = JavaParser::initialized()?;
    watcher::watch_directory(root_path, &mut parser, &mut store, |store, event| {
        debug!("Re-exporting after {} of {:?}", event.kind.as_str(), event.path);
        if let Err(e) = utils::io::export_snapshot_to_json(store, output_path) {
            error!("Failed to export snapshot to {:?}: {}", output_path, e);
        }
    })?;

    Ok(())
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
