use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Read and decode an exported conversations file
///
/// The size check runs on the open handle to avoid TOCTOU races between
/// checking and reading. Only JSON decoding happens here; whether the
/// document has the right shape is the aggregator's concern.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or its metadata read
/// - The file is larger than `max_bytes`
/// - The contents are not valid JSON
pub fn load_export(path: &Path, max_bytes: u64) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;
    validate_file_size(&file, path, max_bytes)?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid JSON file format: {}", path.display()))
}

/// Validates that a file's size is within `max_bytes`
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than `max_bytes`
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_bytes);
    }

    Ok(())
}
