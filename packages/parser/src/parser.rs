//! Main parsing service that ties all components together.

use std::path::Path;

use crate::error::Result;
use crate::reader::read_file;
use crate::segment::parse_segment;
use crate::splitting::split_segments;
use crate::types::Person;

/// Parse one raw homeowner string into one or more person records.
///
/// The string is split into single-person segments first; each segment is
/// then decomposed. Fails with `ParserError::MissingTitle` when any
/// segment lacks a recognized title.
///
/// # Examples
/// ```
/// use homeowner_parser::parse_raw;
///
/// let people = parse_raw("Mr and Mrs Smith").unwrap();
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[0].last_name, "Smith");
/// ```
pub fn parse_raw(raw: &str) -> Result<Vec<Person>> {
    split_segments(raw)
        .iter()
        .map(|segment| parse_segment(segment))
        .collect()
}

/// Parse a batch of raw homeowner rows, aborting on the first error.
pub fn parse_rows(rows: &[String]) -> Result<Vec<Person>> {
    let mut people = Vec::new();
    for raw in rows {
        people.extend(parse_raw(raw)?);
    }

    tracing::debug!(rows = rows.len(), people = people.len(), "parsed rows");
    Ok(people)
}

/// Read a homeowner file and parse every row.
///
/// # Arguments
/// * `path` - Path to a `.csv` or `.txt` file whose first column holds
///   the homeowner values
///
/// # Returns
/// All person records in row order, with multi-person rows expanded in
/// place.
pub fn parse_file(path: &Path) -> Result<Vec<Person>> {
    let rows = read_file(path)?;
    parse_rows(&rows)
}
