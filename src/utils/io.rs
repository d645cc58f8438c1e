use crate::store::ParseStore;
use log::{error, info};
use std::fs;
use std::io::{self};
use std::path::Path;

/// Writes the store snapshot in the presentation layer's wire shape.
pub fn export_snapshot_to_json(store: &ParseStore, output_path: &Path) -> io::Result<()> {
    info!(
        "Exporting snapshot with {} files and {} declarations to JSON: {:?}",
        store.len(),
        store.declaration_count(),
        output_path
    );

    let json = match serde_json::to_string_pretty(&store.snapshot()) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize snapshot to JSON: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, e));
        }
    };

    match fs::write(output_path, &json) {
        Ok(_) => {
            info!(
                "Successfully wrote {} bytes to {:?}",
                json.len(),
                output_path
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to write JSON to file {:?}: {}", output_path, e);
            Err(e)
        }
    }
}
