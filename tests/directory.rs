use codescape::{FileEntry, analyze_directory, process_directory};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn copy_fixtures(target: &Path, names: &[&str]) {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    for name in names {
        fs::copy(fixtures.join(name), target.join(name)).unwrap();
    }
}

#[test]
fn processes_every_java_file_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixtures(dir.path(), &["Printable.java", "MultiClass.java"]);
    fs::write(dir.path().join("README.md"), "not java").unwrap();

    let store = process_directory(dir.path(), 2).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.declaration_count(), 4);

    let files: Vec<String> = store.snapshot().into_iter().map(|e| e.file).collect();
    assert!(files[0].ends_with("MultiClass.java"));
    assert!(files[1].ends_with("Printable.java"));

    let root = fs::canonicalize(dir.path()).unwrap();
    match store.get(&root.join("Printable.java")) {
        Some(FileEntry::Parsed(records)) => assert_eq!(records[0].name, "Printable"),
        other => panic!("unexpected entry: {:?}", other),
    }
}

#[test]
fn analyze_writes_presentation_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let sources = dir.path().join("src");
    fs::create_dir(&sources).unwrap();
    copy_fixtures(&sources, &["AbstractService.java"]);
    let output = dir.path().join("out.json");

    analyze_directory(&sources, &output, 1).unwrap();

    let snapshot: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let entries = snapshot.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0]["file"].as_str().unwrap().ends_with("AbstractService.java"));

    let entry = &entries[0]["entry"];
    assert_eq!(entry["status"], "parsed");
    assert_eq!(entry["data"][0]["Classname"], "AbstractService");
    assert_eq!(entry["data"][0]["Type"], "abstract");
    assert_eq!(entry["data"][0]["Extends"], "BaseService");
    assert_eq!(entry["data"][0]["Loc"], 16);
}
