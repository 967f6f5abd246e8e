//! Decomposition of a single-person segment into a structured record.
//!
//! A segment must start with a recognized title; the remainder is
//! classified by token count. A leading token of one letter with an
//! optional trailing period is an initial, anything else is a first name,
//! and every token after the first joins the surname.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TITLE_PATTERN;
use crate::error::{ParserError, Result};
use crate::splitting::collapse_whitespace;
use crate::types::{normalize_title, Person};

/// Anchored pattern for a segment: a recognized title, whitespace, and the
/// remainder.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SEGMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({TITLE_PATTERN})\s+(.*)$")).expect("valid regex")
});

/// Pattern for an initial: one letter with an optional trailing period.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INITIAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\.?$").expect("valid regex"));

/// Check whether a token is a single-letter initial.
///
/// # Examples
/// ```
/// use homeowner_parser::segment::is_initial;
///
/// assert!(is_initial("F"));
/// assert!(is_initial("f."));
/// assert!(!is_initial("Fr"));
/// assert!(!is_initial("1"));
/// assert!(!is_initial(""));
/// ```
#[must_use]
pub fn is_initial(token: &str) -> bool {
    INITIAL_PATTERN.is_match(token)
}

/// Parse a single-person segment into a [`Person`] record.
///
/// # Arguments
/// * `segment` - A segment produced by the splitter (or a raw single name)
///
/// # Returns
/// * `Ok(Person)` with title, optional first name or initial, and surname
/// * `Err(ParserError::MissingTitle)` when the segment does not start with
///   a recognized title followed by at least one more token; the error
///   carries the offending segment for diagnostics
pub fn parse_segment(segment: &str) -> Result<Person> {
    let s = collapse_whitespace(segment);

    let missing_title = || ParserError::MissingTitle(segment.to_string());

    let caps = SEGMENT_PATTERN.captures(&s).ok_or_else(missing_title)?;
    let (Some(raw_title), Some(rest)) = (caps.get(1), caps.get(2)) else {
        return Err(missing_title());
    };

    let title = normalize_title(raw_title.as_str());
    let tokens: Vec<&str> = rest.as_str().split_whitespace().collect();

    match tokens.as_slice() {
        // Anchoring over a collapsed string guarantees a non-empty
        // remainder; surfaced as the same error if it is ever violated.
        [] => Err(missing_title()),
        [last] => Ok(Person::new(title, *last)),
        [head, rest @ ..] => Ok(with_leading_token(
            Person::new(title, rest.join(" ")),
            head,
        )),
    }
}

/// Attach the leading token as either an initial or a first name.
fn with_leading_token(person: Person, token: &str) -> Person {
    if is_initial(token) {
        match token.chars().next() {
            Some(letter) => person.with_initial(letter.to_ascii_uppercase().to_string()),
            None => person,
        }
    } else {
        person.with_first_name(token)
    }
}
