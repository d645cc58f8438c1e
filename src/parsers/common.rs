use std::path::Path;

pub const JAVA_EXTENSION: &str = "java";

pub fn is_java_source(file_path: &Path) -> bool {
    file_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == JAVA_EXTENSION)
}
