//! Configuration constants and validation functions for the parser.

use std::path::Path;

use crate::error::{ParserError, Result};

/// Regex alternation of every recognized title spelling.
///
/// Shared by the splitter and decomposer patterns so the two stay in sync.
/// Matching is always done case-insensitively.
pub const TITLE_PATTERN: &str = "Mr|Mister|Mrs|Ms|Dr|Prof";

/// Header label marking a non-data row in the first column.
///
/// Compared case-insensitively after trimming.
pub const HEADER_LABEL: &str = "homeowner";

/// File extensions accepted for input files.
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Check whether a file name carries one of the accepted extensions.
///
/// # Examples
/// ```
/// use homeowner_parser::config::has_allowed_extension;
///
/// assert!(has_allowed_extension("homeowners.csv"));
/// assert!(has_allowed_extension("HOMEOWNERS.TXT"));
/// assert!(!has_allowed_extension("homeowners.pdf"));
/// assert!(!has_allowed_extension("homeowners"));
/// ```
#[must_use]
pub fn has_allowed_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Validate an input file path before reading it.
///
/// # Arguments
/// * `path` - Path to the candidate input file
///
/// # Returns
/// * `Ok(())` if the path points to an existing file with an accepted extension
/// * `Err(ParserError::Io)` if the path is missing or not a regular file
/// * `Err(ParserError::UnsupportedExtension)` for other extensions
///
/// # Examples
/// ```
/// use std::path::Path;
/// use homeowner_parser::config::validate_input_path;
///
/// assert!(validate_input_path(Path::new("does-not-exist.csv")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ParserError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", path.display()),
        )));
    }

    if !path.is_file() {
        return Err(ParserError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a file: {}", path.display()),
        )));
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    if !has_allowed_extension(file_name) {
        return Err(ParserError::UnsupportedExtension(file_name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_has_allowed_extension() {
        assert!(has_allowed_extension("names.csv"));
        assert!(has_allowed_extension("names.txt"));
        assert!(has_allowed_extension("names.CSV"));
        assert!(!has_allowed_extension("names.xlsx"));
        assert!(!has_allowed_extension("names."));
        assert!(!has_allowed_extension(""));
    }

    #[test]
    fn test_validate_input_path_missing() {
        let result = validate_input_path(Path::new("no/such/file.csv"));
        assert!(matches!(result, Err(ParserError::Io(_))));
    }

    #[test]
    fn test_validate_input_path_directory() {
        let dir = tempdir().unwrap();
        let result = validate_input_path(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_input_path_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.pdf");
        fs::write(&path, "homeowner\n").unwrap();

        let result = validate_input_path(&path);
        assert!(matches!(result, Err(ParserError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_validate_input_path_valid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.csv");
        fs::write(&path, "homeowner\nMr John Smith\n").unwrap();

        assert!(validate_input_path(&path).is_ok());
    }
}
