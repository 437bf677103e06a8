//! File I/O for save records

use super::codec::{decode_str, encode, SaveRecord};
use super::{Grid, GridEngine};
use anyhow::{Context, Result};
use std::path::Path;

/// Save the engine's current grid as a JSON record
pub fn save_record_to_file<P: AsRef<Path>>(engine: &GridEngine, path: P) -> Result<SaveRecord> {
    let record = encode(engine);
    let content = record
        .to_json()
        .context("Failed to serialize save record")?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write save file: {}", path.as_ref().display()))?;

    Ok(record)
}

/// Read and validate a JSON record, returning a grid ready for `GridEngine::load_grid`
pub fn load_record_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read save file: {}", path.as_ref().display()))?;

    decode_str(&content)
        .with_context(|| format!("Not a valid Game of Life save file: {}", path.as_ref().display()))
}

/// Write one save file per registered pattern, each on a grid just large enough to hold it
pub fn create_example_saves<P: AsRef<Path>>(output_dir: P) -> Result<Vec<std::path::PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for pattern in super::patterns::PATTERNS {
        // Leave a margin so oscillators and ships have room on the torus
        let mut engine = GridEngine::new(pattern.extent() + 4)?;
        engine.stamp_cells(pattern.cells);

        let path = dir.join(format!("{}.json", pattern.name));
        save_record_to_file(&engine, &path)?;
        written.push(path);
    }

    Ok(written)
}
