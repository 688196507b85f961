//! Line-oriented `key = value` file loaders.
//!
//! Both the style sheet and the extensions file share one syntax: blank
//! lines and lines starting with `#` are skipped, every other line (trimmed)
//! must hold a non-empty key, an `=` sign with optional blanks or tabs around
//! it, and a value.

mod extensions;
mod stylesheet;

pub use extensions::ExtensionsLoader;
pub use stylesheet::StylesheetLoader;

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::Diagnostics;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*=[ \t]*").unwrap());

/// One significant line of a loader file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statement<'a> {
    Assignment { key: &'a str, value: &'a str },
    Malformed,
}

/// Yields the statements of `content`, skipping blanks and comments.
///
/// A leading byte order mark is not part of the first key.
fn statements(content: &str) -> impl Iterator<Item = Statement<'_>> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(split_assignment)
}

fn split_assignment(line: &str) -> Statement<'_> {
    match SEPARATOR.find(line) {
        Some(sep) if sep.start() > 0 => Statement::Assignment {
            key: &line[..sep.start()],
            value: &line[sep.end()..],
        },
        _ => Statement::Malformed,
    }
}

/// Reads a loader file, reporting failure as an error diagnostic.
///
/// `kind` names the file in messages ("style sheet", "extensions").
/// Invalid UTF-8 sequences are replaced rather than rejected; only an I/O
/// failure counts as an unreadable file.
fn read_source(path: &Path, kind: &str, diag: &mut dyn Diagnostics) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => {
            diag.msg(&format!("Loading RTF {} {}...", kind, path.display()));
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(_) => {
            diag.err(&format!(
                "Can't open RTF {} file {}. Using defaults.",
                kind,
                path.display()
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_separator_blanks() {
        assert_eq!(
            split_assignment("Title \t=  My Doc"),
            Statement::Assignment {
                key: "Title",
                value: "My Doc"
            }
        );
    }

    #[test]
    fn test_split_keeps_later_equals_in_value() {
        assert_eq!(
            split_assignment("Keywords=a=b"),
            Statement::Assignment {
                key: "Keywords",
                value: "a=b"
            }
        );
    }

    #[test]
    fn test_split_rejects_missing_key_or_separator() {
        assert_eq!(split_assignment("NoEqualsHere"), Statement::Malformed);
        assert_eq!(split_assignment("= value"), Statement::Malformed);
    }

    #[test]
    fn test_statements_skip_blanks_and_comments() {
        let content = "\n# comment\n   \n  Title = x  \n   # indented comment\nbad\n";
        let found: Vec<_> = statements(content).collect();
        assert_eq!(
            found,
            [
                Statement::Assignment {
                    key: "Title",
                    value: "x"
                },
                Statement::Malformed,
            ]
        );
    }

    #[test]
    fn test_statements_skip_byte_order_mark() {
        let found: Vec<_> = statements("\u{feff}Title = x\n").collect();
        assert_eq!(
            found,
            [Statement::Assignment {
                key: "Title",
                value: "x"
            }]
        );
    }

    #[test]
    fn test_read_source_replaces_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Title = caf\xe9\n").unwrap();
        let mut diag = crate::CollectingDiagnostics::new();

        let content = read_source(file.path(), "extensions", &mut diag).unwrap();

        assert_eq!(content, "Title = caf\u{fffd}\n");
        assert_eq!(diag.errors().count(), 0);
        assert_eq!(diag.messages().count(), 1);
    }

    #[test]
    fn test_read_source_missing_file() {
        let mut diag = crate::CollectingDiagnostics::new();
        let missing = Path::new("/nonexistent/rtfstyle/none.cfg");
        assert!(read_source(missing, "extensions", &mut diag).is_none());
        let errors: Vec<_> = diag.errors().collect();
        assert_eq!(
            errors,
            ["Can't open RTF extensions file /nonexistent/rtfstyle/none.cfg. Using defaults."]
        );
    }
}
