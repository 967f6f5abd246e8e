//! Core data types for the parser.
//!
//! These types represent parsed homeowner names: the closed set of
//! recognized titles and the structured person record produced for each
//! name segment.

use serde::{Deserialize, Serialize};

/// Recognized titles in their canonical display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    /// "Mr" (also spelled "Mister").
    Mr,

    /// "Mrs".
    Mrs,

    /// "Ms".
    Ms,

    /// "Dr".
    Dr,

    /// "Prof".
    Prof,
}

impl Title {
    /// Get the canonical display form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Mrs => "Mrs",
            Self::Ms => "Ms",
            Self::Dr => "Dr",
            Self::Prof => "Prof",
        }
    }

    /// Parse a raw title token, case-insensitively.
    ///
    /// Returns `None` for tokens outside the recognized set.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "mr" | "mister" => Some(Self::Mr),
            "mrs" => Some(Self::Mrs),
            "ms" => Some(Self::Ms),
            "dr" => Some(Self::Dr),
            "prof" => Some(Self::Prof),
            _ => None,
        }
    }
}

/// Normalize a raw title token to its canonical display form.
///
/// Unrecognized tokens fall back to the trimmed original (not lowercased);
/// callers that pre-validate tokens against the title pattern never hit
/// that branch.
///
/// # Examples
/// ```
/// use homeowner_parser::types::normalize_title;
///
/// assert_eq!(normalize_title("MR"), "Mr");
/// assert_eq!(normalize_title("mister"), "Mr");
/// assert_eq!(normalize_title(" Prof "), "Prof");
/// assert_eq!(normalize_title("Sir"), "Sir");
/// ```
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    match Title::from_token(raw) {
        Some(title) => title.as_str().to_string(),
        None => raw.trim().to_string(),
    }
}

/// A structured person record parsed from one name segment.
///
/// At most one of `first_name` and `initial` is set; both may be absent
/// for title-and-surname-only segments. Absent fields serialize as
/// omitted keys, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Canonical title (e.g., "Mr").
    pub title: String,

    /// First name, when the segment carries a full one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub first_name: Option<String>,

    /// Single uppercase initial letter, when the segment abbreviates the
    /// first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub initial: Option<String>,

    /// Surname; multi-word surnames are joined by single spaces.
    pub last_name: String,
}

impl Person {
    /// Create a record with title and surname only.
    #[must_use]
    pub fn new(title: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            first_name: None,
            initial: None,
            last_name: last_name.into(),
        }
    }

    /// Set the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the initial.
    #[must_use]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }
}
