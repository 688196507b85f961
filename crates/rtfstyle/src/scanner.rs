//! Token scanning for RTF style clauses.
//!
//! A style clause is a run of RTF control words introduced by a numbered
//! `\s<n>` marker. The scanner recognizes three token shapes:
//!
//! | Token | Pattern | Matching |
//! |-------|---------|----------|
//! | Clause marker | `\s` + digits + optional whitespace | searches forward |
//! | Subgroup | `{` + non-`}` run + `}` + optional whitespace | anchored |
//! | Control word | `\` + lowercase letter + `[a-z0-9-]*` + optional whitespace | anchored |
//!
//! Every operation returns a [`Match`] with byte offsets into the scanned
//! text, or `None`.

use once_cell::sync::Lazy;
use regex::Regex;

static CLAUSE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\s[0-9]+\s*").unwrap());

static SUBGROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{[^}]*\}\s*").unwrap());

static CONTROL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\[a-z][a-z0-9-]*\s*").unwrap());

/// A token located by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Byte length of the token, trailing whitespace included.
    pub len: usize,
}

impl Match {
    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Finds the first `\s<n>` clause marker at or after `from`.
pub fn find_clause_marker(text: &str, from: usize) -> Option<Match> {
    let m = CLAUSE_MARKER.find(text.get(from..)?)?;
    Some(Match {
        start: from + m.start(),
        len: m.len(),
    })
}

/// Matches a brace-delimited subgroup starting exactly at `at`.
pub fn find_subgroup(text: &str, at: usize) -> Option<Match> {
    anchored(&SUBGROUP, text, at)
}

/// Matches a single lowercase control word starting exactly at `at`.
pub fn find_control_word(text: &str, at: usize) -> Option<Match> {
    anchored(&CONTROL_WORD, text, at)
}

fn anchored(re: &Regex, text: &str, at: usize) -> Option<Match> {
    re.find(text.get(at..)?).map(|m| Match {
        start: at,
        len: m.len(),
    })
}
