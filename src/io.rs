//! Zone record I/O.
//!
//! Zone records normally come straight from the host model; the JSON format
//! here keeps fixtures and batch inputs portable between runs.

use crate::ZoneRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes a zone record list to a JSON file.
pub fn write_zones(path: &Path, zones: &[ZoneRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, zones)
        .with_context(|| format!("Failed to serialize zones to: {}", path.display()))?;

    Ok(())
}

/// Reads a zone record list from a JSON file.
pub fn read_zones(path: &Path) -> Result<Vec<ZoneRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let zones: Vec<ZoneRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize zones from: {}", path.display()))?;

    Ok(zones)
}

/// Serializes a zone record list to a JSON string.
pub fn zones_to_string(zones: &[ZoneRecord]) -> Result<String> {
    serde_json::to_string_pretty(zones).context("Failed to serialize zones to string")
}

/// Deserializes a zone record list from a JSON string.
pub fn zones_from_string(json: &str) -> Result<Vec<ZoneRecord>> {
    serde_json::from_str(json).context("Failed to deserialize zones from string")
}
