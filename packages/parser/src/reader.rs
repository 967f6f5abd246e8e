//! CSV row extraction for homeowner files.
//!
//! The first column of each record is the homeowner value. Blank cells
//! and the header label are skipped; everything else is handed to the
//! parsing service as a raw name string.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::{validate_input_path, HEADER_LABEL};
use crate::error::Result;

/// Read raw homeowner rows from CSV input.
///
/// Records may have any number of columns; only the first is used.
/// A cell is skipped when it is empty after trimming or equals the
/// header label case-insensitively.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(cell) = record.get(0) else {
            continue;
        };

        let value = cell.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(HEADER_LABEL) {
            continue;
        }

        rows.push(value.to_string());
    }

    Ok(rows)
}

/// Read raw homeowner rows from a file.
///
/// Validates the path (existence, regular file, accepted extension)
/// before opening it.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    validate_input_path(path)?;
    let file = File::open(path)?;
    read_rows(file)
}
