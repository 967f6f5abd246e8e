//! JSON output for parsed person records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Person;

/// Generate a pretty-printed JSON document from person records.
///
/// The document ends with a trailing newline.
pub fn generate_json(people: &[Person]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(people)?;
    content.push('\n');
    Ok(content)
}

/// Save person records as a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then
/// renames. This ensures partial writes don't corrupt existing files on
/// crash. Missing parent directories are created.
///
/// # Arguments
/// * `people` - The records to save
/// * `path` - Destination file path
///
/// # Returns
/// Path to the saved file
pub fn save_json(people: &[Person], path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("output.json");
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    let content = generate_json(people)?;

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    // Atomic rename (on most filesystems)
    fs::rename(&temp_file, path)?;

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_people() -> Vec<Person> {
        vec![
            Person::new("Mr", "Fredrickson").with_initial("F"),
            Person::new("Mrs", "Hughes-Eastwood").with_first_name("Faye"),
        ]
    }

    #[test]
    fn test_generate_json() {
        let json = generate_json(&sample_people()).unwrap();
        assert!(json.contains(r#""title": "Mr""#));
        assert!(json.contains(r#""initial": "F""#));
        assert!(json.contains(r#""last_name": "Hughes-Eastwood""#));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_generate_json_round_trip() {
        let people = sample_people();
        let json = generate_json(&people).unwrap();
        let parsed: Vec<Person> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, people);
    }

    #[test]
    fn test_generate_json_empty() {
        assert_eq!(generate_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_save_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");

        let saved = save_json(&sample_people(), &path).unwrap();
        assert_eq!(saved, path);

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Person> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample_people());
    }

    #[test]
    fn test_save_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("people.json");

        save_json(&sample_people(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_json_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");

        save_json(&sample_people(), &path).unwrap();
        save_json(&[Person::new("Ms", "Robbo")], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Person> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
