mod common;
mod java;
mod modifiers;
mod type_names;

pub use common::SyntaxKind;
pub use java::{JavaExtractor, find_declarations};
pub use modifiers::classify;

use crate::error::Result;
use crate::parsers::JavaParser;
use crate::store::DeclarationRecord;
use log::{debug, error, trace};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parses Java source and returns every class and interface declaration,
/// nested ones included, in source order.
pub fn extract_declarations(
    parser: &mut JavaParser,
    content: &str,
) -> Result<Vec<DeclarationRecord>> {
    let tree = parser.parse(content)?;
    let records = JavaExtractor::new(content).extract(&tree);
    trace!("Extracted {} declarations", records.len());
    Ok(records)
}

pub fn extract_file(parser: &mut JavaParser, file_path: &Path) -> Result<Vec<DeclarationRecord>> {
    trace!("Extracting declarations from: {:?}", file_path);

    let mut file = match File::open(file_path) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to open file {:?}: {}", file_path, e);
            return Err(e.into());
        }
    };

    let mut content = String::new();
    if let Err(e) = file.read_to_string(&mut content) {
        error!("Failed to read file {:?}: {}", file_path, e);
        return Err(e.into());
    }

    let records = extract_declarations(parser, &content)?;
    debug!(
        "Extracted {} declarations from {:?}",
        records.len(),
        file_path
    );
    Ok(records)
}
