//! Splitting a style clause into its reference and definition halves.
//!
//! After the `\s<n>` marker the clause is scanned token by token. Control
//! words and `{...}` subgroups extend the reference. The scan stops at the
//! first `\snext` or `\sbasedon` keyword, at a token that is neither, or at
//! plain text; everything from there on is the new definition. A clause that
//! is all formatting (the scan runs off the end) keeps the old definition.

use super::entry::StyleEntry;
use crate::error::{Result, StyleError};
use crate::scanner::{find_clause_marker, find_control_word, find_subgroup, Match};

/// Linkage keywords that open the definition half of a clause.
const LINKAGE_KEYWORDS: &[&str] = &["\\snext", "\\sbasedon"];

/// Where the formatting scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Linkage data starts at this offset.
    Definition(usize),
    /// The clause ended inside the formatting codes.
    EndOfClause,
}

/// Finds the clause marker and returns it with its index.
pub(super) fn locate_marker(clause: &str, style_name: &str) -> Result<(Match, u32)> {
    let marker = find_clause_marker(clause, 0).ok_or_else(|| StyleError::NoClauseMarker {
        style: style_name.to_string(),
        clause: clause.to_string(),
    })?;
    let token = &clause[marker.start..marker.end()];
    let index = token[2..]
        .trim_end()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0);
    debug_assert!(index.is_some(), "clause marker {token:?} has no positive index");
    let index = index.ok_or_else(|| StyleError::InvalidIndex {
        clause: token.trim_end().to_string(),
    })?;
    Ok((marker, index))
}

/// Applies `clause` to `entry`, replacing its index and reference and, when
/// linkage data follows the formatting codes, its definition.
pub(super) fn apply_override(entry: &mut StyleEntry, clause: &str, style_name: &str) -> Result<()> {
    let (marker, index) = locate_marker(clause, style_name)?;
    let stop = scan_formatting(clause, marker.end());

    let end = match stop {
        Stop::Definition(at) => at,
        Stop::EndOfClause => clause.len(),
    };
    let reference = &clause[marker.start..end];
    let definition = match stop {
        Stop::Definition(at) => Some(&clause[at..]),
        Stop::EndOfClause => None,
    };
    entry.replace(index, reference, definition);
    Ok(())
}

fn scan_formatting(clause: &str, mut pos: usize) -> Stop {
    loop {
        let rest = &clause[pos..];
        let token = match rest.as_bytes().first() {
            None => return Stop::EndOfClause,
            Some(b'{') => find_subgroup(clause, pos),
            Some(b'\\') => {
                if LINKAGE_KEYWORDS.iter().any(|kw| rest.starts_with(kw)) {
                    return Stop::Definition(pos);
                }
                find_control_word(clause, pos)
            }
            Some(_) => None,
        };
        match token {
            Some(m) => pos = m.end(),
            None => return Stop::Definition(pos),
        }
    }
}
