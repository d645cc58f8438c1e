use crate::error::Result;
use crate::indexing::extractor::extract_file;
use crate::parsers::{JavaParser, is_java_source};
use crate::store::ParseStore;
use log::{debug, error, info, trace, warn};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extracts every Java file under `root_path` on a pool of `num_threads`
/// workers, each holding its own parser handle.
///
/// The root is canonicalized first, so keys are absolute and match the paths
/// the watcher reports. Files are stored in sorted path order. A file whose
/// extraction fails is logged and stays pending.
pub fn process_directory_parallel(root_path: &Path, num_threads: usize) -> Result<ParseStore> {
    info!(
        "Starting parallel directory processing with {} threads",
        num_threads
    );

    let root_path = fs::canonicalize(root_path).map_err(|e| {
        error!("Failed to canonicalize root {:?}: {}", root_path, e);
        e
    })?;

    // Surface grammar problems once instead of per file
    JavaParser::initialized()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!("Scanning directory for Java files...");
    let files_to_process = collect_files_to_process(&root_path);
    info!("Found {} files to process", files_to_process.len());

    let results: Vec<_> = pool.install(|| {
        files_to_process
            .par_iter()
            .map_init(JavaParser::new, |parser, path| {
                debug!("Processing file: {:?}", path);
                let result = parser.initialize().and_then(|_| extract_file(parser, path));
                (path, result)
            })
            .collect()
    });

    let mut store = ParseStore::new();
    for (path, result) in results {
        store.mark_pending(path);
        match result {
            Ok(records) => {
                trace!("Storing {} declarations for {:?}", records.len(), path);
                store.set_parsed(path, records);
            }
            Err(e) => {
                error!("Error processing file {:?}: {}", path, e);
            }
        }
    }

    info!(
        "Directory processing complete: {} files, {} declarations, {} pending",
        store.len(),
        store.declaration_count(),
        store.pending_count()
    );

    Ok(store)
}

fn collect_files_to_process(root_path: &Path) -> Vec<PathBuf> {
    let mut visited_files = HashSet::new();
    let mut files_to_process = Vec::new();

    for entry in WalkDir::new(root_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !is_java_source(path) {
            trace!("Skipping non-Java file: {:?}", path);
            continue;
        }

        let canonical_path = match fs::canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                warn!("Failed to canonicalize path {:?}: {}", path, e);
                continue;
            }
        };

        if !visited_files.insert(canonical_path) {
            trace!("Skipping already visited file: {:?}", path);
            continue;
        }

        files_to_process.push(path.to_path_buf());
    }

    files_to_process
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FileEntry;
    use std::fs;

    #[test]
    fn test_collects_only_java_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/B.java"), "class B {}").unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "class C {}").unwrap();

        let files = collect_files_to_process(dir.path());
        assert_eq!(
            files,
            vec![dir.path().join("A.java"), dir.path().join("pkg/B.java")]
        );
    }

    #[test]
    fn test_process_directory_populates_store() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Service.java"),
            "public class Service implements Runnable { public void run() {} }",
        )
        .unwrap();
        fs::write(dir.path().join("Empty.java"), "").unwrap();

        let store = process_directory_parallel(dir.path(), 2).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending_count(), 0);

        let snapshot = store.snapshot();
        assert!(snapshot[0].file.ends_with("Empty.java"));
        assert_eq!(snapshot[0].entry, FileEntry::Parsed(Vec::new()));

        let root = fs::canonicalize(dir.path()).unwrap();
        let service = store.get(&root.join("Service.java")).unwrap();
        let records = service.declarations().unwrap();
        assert_eq!(records[0].implements, vec!["Runnable"]);
        assert_eq!(records[0].methods, vec!["run"]);
    }

    #[test]
    fn test_keys_are_canonical() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/A.java"), "class A {}").unwrap();

        let indirect = dir.path().join("src").join("..").join("src");
        let store = process_directory_parallel(&indirect, 1).unwrap();

        let canonical = fs::canonicalize(dir.path()).unwrap().join("src/A.java");
        assert_eq!(store.snapshot()[0].file, canonical.to_string_lossy());
        assert!(store.get(&canonical).is_some());
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(process_directory_parallel(&dir.path().join("absent"), 1).is_err());
    }

    #[test]
    fn test_unreadable_file_stays_pending() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Binary.java"), [0xffu8, 0xfe, 0x00, 0x80]).unwrap();

        let store = process_directory_parallel(dir.path(), 1).unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(store.pending_count(), 1);
        assert_eq!(
            store.get(&root.join("Binary.java")),
            Some(&FileEntry::Pending)
        );
    }
}
