//! Segment splitting for combined homeowner name strings.
//!
//! One raw row can describe several people ("Mr and Mrs Smith",
//! "Mr Tom Staff and Mr John Doe"). The splitter turns such a row into an
//! ordered list of single-person segments, applying two rules in strict
//! priority order:
//!
//! 1. **Shared-tail couples**: `<Title> and/& <Title> <tail>`. The tail
//!    is redistributed, so "Dr & Mrs Joe Bloggs" becomes
//!    `["Dr Joe Bloggs", "Mrs Bloggs"]`. Produces exactly two segments,
//!    rebuilt with normalized titles.
//! 2. **Independent clauses**: the string is cut at each `and`/`&` that is
//!    immediately followed by a recognized title, and the pieces are
//!    returned verbatim when every one of them starts with a title.
//!
//! Anything else is returned as a single segment. The splitter never
//! fails; an unsplittable segment without a title surfaces as an error at
//! the decompose stage instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TITLE_PATTERN;
use crate::types::normalize_title;

/// Pattern for the shared-tail couple form: two titles joined by a
/// conjunction, followed by the shared remainder.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SHARED_TAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^({TITLE_PATTERN})\s+(?:and|&)\s+({TITLE_PATTERN})\s+(.+)$"
    ))
    .expect("valid regex")
});

/// Pattern for an `and`/`&` conjunction between two names.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CONJUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:and|&)\s+").expect("valid regex"));

/// Pattern for a recognized title at the start of a piece.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{TITLE_PATTERN})\b")).expect("valid regex")
});

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// # Examples
/// ```
/// use homeowner_parser::splitting::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Mr   John\tSmith "), "Mr John Smith");
/// ```
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a raw homeowner name string into single-person segments.
///
/// Returns at least one segment for non-empty input and never fails.
///
/// # Examples
/// ```
/// use homeowner_parser::splitting::split_segments;
///
/// assert_eq!(
///     split_segments("Mr and Mrs Smith"),
///     vec!["Mr Smith", "Mrs Smith"]
/// );
/// assert_eq!(split_segments("Ms Claire Robbo"), vec!["Ms Claire Robbo"]);
/// ```
#[must_use]
pub fn split_segments(raw: &str) -> Vec<String> {
    let s = collapse_whitespace(raw);

    if let Some(segments) = split_shared_tail(&s) {
        return segments;
    }

    let pieces = split_at_conjunctions(&s);
    if pieces.len() > 1 && pieces.iter().all(|piece| LEADING_TITLE_PATTERN.is_match(piece)) {
        return pieces.into_iter().map(str::to_string).collect();
    }

    vec![s]
}

/// Apply the shared-tail couple rule.
///
/// A multi-token tail contributes its first token as person 1's first name
/// and the remaining tokens as the shared surname; person 2 receives the
/// surname only. A single-token tail is a shared surname for both.
fn split_shared_tail(s: &str) -> Option<Vec<String>> {
    let caps = SHARED_TAIL_PATTERN.captures(s)?;
    let (Some(first), Some(second), Some(tail)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return None;
    };

    let first_title = normalize_title(first.as_str());
    let second_title = normalize_title(second.as_str());

    let mut tokens = tail.as_str().split_whitespace();
    let head = tokens.next()?;
    let surname = tokens.collect::<Vec<_>>().join(" ");

    if surname.is_empty() {
        // Single-token tail: a surname shared by both people.
        Some(vec![
            format!("{first_title} {head}"),
            format!("{second_title} {head}"),
        ])
    } else {
        Some(vec![
            format!("{first_title} {head} {surname}"),
            format!("{second_title} {surname}"),
        ])
    }
}

/// Cut the string at every conjunction that is directly followed by a
/// recognized title, keeping the title with the following piece.
///
/// A rejected conjunction is re-scanned from inside its own whitespace so
/// an adjacent conjunction ("Mr A and and Mrs B") is still found. The
/// input is whitespace-collapsed, so every separator starts at an ASCII
/// space and byte arithmetic stays on char boundaries.
fn split_at_conjunctions(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut search_from = 0;

    while let Some(sep) = CONJUNCTION_PATTERN.find_at(s, search_from) {
        if LEADING_TITLE_PATTERN.is_match(&s[sep.end()..]) {
            pieces.push(&s[piece_start..sep.start()]);
            piece_start = sep.end();
            search_from = sep.end();
        } else {
            search_from = sep.start() + 1;
        }
    }

    pieces.push(&s[piece_start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_shared_surname_pair() {
        assert_eq!(
            split_segments("Mr and Mrs Smith"),
            vec!["Mr Smith", "Mrs Smith"]
        );
    }

    #[test]
    fn test_split_shared_surname_pair_ampersand() {
        assert_eq!(
            split_segments("Mr & Mrs Smith"),
            vec!["Mr Smith", "Mrs Smith"]
        );
    }

    #[test]
    fn test_split_shared_tail_with_first_name() {
        assert_eq!(
            split_segments("Dr & Mrs Joe Bloggs"),
            vec!["Dr Joe Bloggs", "Mrs Bloggs"]
        );
    }

    #[test]
    fn test_split_shared_tail_first_name_not_duplicated() {
        let segments = split_segments("Dr & Mrs Joe Bloggs");
        assert_eq!(segments.len(), 2);
        assert!(!segments[1].contains("Joe"));
    }

    #[test]
    fn test_split_shared_tail_multiword_surname() {
        assert_eq!(
            split_segments("Mr and Mrs John Vaughan Williams"),
            vec!["Mr John Vaughan Williams", "Mrs Vaughan Williams"]
        );
    }

    #[test]
    fn test_split_shared_tail_normalizes_titles() {
        assert_eq!(
            split_segments("MISTER and MRS Smith"),
            vec!["Mr Smith", "Mrs Smith"]
        );
    }

    #[test]
    fn test_split_two_full_people() {
        assert_eq!(
            split_segments("Mr Tom Staff and Mr John Doe"),
            vec!["Mr Tom Staff", "Mr John Doe"]
        );
    }

    #[test]
    fn test_split_two_full_people_ampersand() {
        assert_eq!(
            split_segments("Mrs Jane McMaster & Dr P Gunn"),
            vec!["Mrs Jane McMaster", "Dr P Gunn"]
        );
    }

    #[test]
    fn test_split_three_full_people() {
        assert_eq!(
            split_segments("Mr Tom Staff and Mrs Jane Staff and Ms Amy Staff"),
            vec!["Mr Tom Staff", "Mrs Jane Staff", "Ms Amy Staff"]
        );
    }

    #[test]
    fn test_split_clause_pieces_are_verbatim() {
        // Rule pieces keep their titles as written; normalization happens
        // at the decompose stage.
        assert_eq!(
            split_segments("MR Tom Staff and MRS Jane Doe"),
            vec!["MR Tom Staff", "MRS Jane Doe"]
        );
    }

    #[test]
    fn test_split_single_person_unchanged() {
        assert_eq!(split_segments("Ms Claire Robbo"), vec!["Ms Claire Robbo"]);
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(
            split_segments("  Mr   and  Mrs   Smith "),
            vec!["Mr Smith", "Mrs Smith"]
        );
    }

    #[test]
    fn test_split_conjunction_without_title_not_split() {
        // "and" inside a name does not start a new clause.
        assert_eq!(
            split_segments("Mr Tom Staff and John Doe"),
            vec!["Mr Tom Staff and John Doe"]
        );
    }

    #[test]
    fn test_split_untitled_row_unchanged() {
        assert_eq!(split_segments("No Title Here"), vec!["No Title Here"]);
    }

    #[test]
    fn test_split_bare_titles_defer_to_decomposer() {
        // A couple with no tail has nothing to redistribute; the pieces
        // fail later with a missing-title error rather than a guessed name.
        assert_eq!(split_segments("Mr and Mrs"), vec!["Mr", "Mrs"]);
    }

    #[test]
    fn test_split_adjacent_conjunctions() {
        assert_eq!(
            split_segments("Mr A and and Mrs B"),
            vec!["Mr A and", "Mrs B"]
        );
    }

    #[test]
    fn test_split_case_insensitive_conjunction() {
        assert_eq!(
            split_segments("Mr Tom Staff AND Mr John Doe"),
            vec!["Mr Tom Staff", "Mr John Doe"]
        );
    }

    #[test]
    fn test_split_title_prefix_word_not_treated_as_title() {
        // "Mrsmith" must not satisfy the leading-title check after "and".
        assert_eq!(
            split_segments("Mr Tom Staff and Mrsmith"),
            vec!["Mr Tom Staff and Mrsmith"]
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t c\n"), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
