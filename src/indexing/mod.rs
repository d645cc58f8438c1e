pub mod extractor;
pub mod pipeline;
pub mod processor;

pub use extractor::{extract_declarations, extract_file};
pub use pipeline::{FileEvent, FileEventKind, apply_event, parse_and_store};
pub use processor::process_directory_parallel;
