//! Style sheet files: per-style clause overrides.
//!
//! ```text
//! # comment
//! Heading1 = \s1\sb240\sa60\keepn\b\f1\fs36 \sbasedon0 \snext0 heading 1
//! BodyText = \s17\fs24
//! ```

use std::path::Path;

use super::{read_source, statements, Statement};
use crate::diagnostics::Diagnostics;
use crate::style::StyleTable;

/// Applies style sheet files to a [`StyleTable`].
#[derive(Debug)]
pub struct StylesheetLoader<'a> {
    table: &'a mut StyleTable,
}

impl<'a> StylesheetLoader<'a> {
    /// Creates a loader that patches `table`.
    pub fn new(table: &'a mut StyleTable) -> Self {
        Self { table }
    }

    /// Loads the style sheet at `path`.
    ///
    /// If the file cannot be read the table is left as it is and a single
    /// error is reported.
    pub fn load(&mut self, path: impl AsRef<Path>, diag: &mut dyn Diagnostics) {
        let path = path.as_ref();
        if let Some(content) = read_source(path, "style sheet", diag) {
            self.load_str(&path.display().to_string(), &content, diag);
        }
    }

    /// Applies style sheet `content`; `source` names it in warnings.
    ///
    /// Malformed lines and unknown style names are warned about and skipped.
    /// A clause without a `\s<n>` marker is reported as an error and leaves
    /// its style unchanged.
    pub fn load_str(&mut self, source: &str, content: &str, diag: &mut dyn Diagnostics) {
        // Only advances after a known style was processed, so warnings carry
        // the count of applied overrides plus one rather than the file line.
        let mut line_nr = 1;
        for statement in statements(content) {
            let (key, value) = match statement {
                Statement::Assignment { key, value } => (key, value),
                Statement::Malformed => {
                    diag.warn(source, line_nr, "Assignment of style sheet name expected!");
                    continue;
                }
            };
            let Some(entry) = self.table.find_mut(key) else {
                diag.warn(
                    source,
                    line_nr,
                    &format!("Unknown style sheet name {key} ignored."),
                );
                continue;
            };
            // trailing separator so the last control word is always closed
            let clause = format!("{value} ");
            if let Err(e) = entry.set_style(&clause, key) {
                diag.err(&e.to_string());
            }
            line_nr += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingDiagnostics, Diagnostic};

    fn load(content: &str) -> (StyleTable, CollectingDiagnostics) {
        let mut table = StyleTable::with_defaults();
        let mut diag = CollectingDiagnostics::new();
        StylesheetLoader::new(&mut table).load_str("test.rtf", content, &mut diag);
        (table, diag)
    }

    #[test]
    fn test_full_override_line() {
        let (table, diag) = load("Heading2 = \\s2\\b\\fs30 \\sbasedon0 \\snext0 My heading\n");
        let entry = table.find("Heading2").unwrap();
        assert_eq!(entry.index(), 2);
        assert_eq!(entry.reference(), "\\s2\\b\\fs30 ");
        assert_eq!(entry.definition(), "\\sbasedon0 \\snext0 My heading ");
        assert!(diag.is_clean());
    }

    #[test]
    fn test_partial_override_line() {
        let (table, _) = load("DenseText = \\s18\\fs18");
        let entry = table.find("DenseText").unwrap();
        assert_eq!(entry.reference(), "\\s18\\fs18 ");
        assert_eq!(entry.definition(), "\\sbasedon0 \\snext18 DenseText");
    }

    #[test]
    fn test_unknown_name_is_warned() {
        let (table, diag) = load("Bogus = \\s1\\b");
        assert_eq!(
            diag.warnings().cloned().collect::<Vec<_>>(),
            [Diagnostic::Warning {
                file: "test.rtf".to_string(),
                line: 1,
                message: "Unknown style sheet name Bogus ignored.".to_string(),
            }]
        );
        let defaults = StyleTable::with_defaults();
        for (name, entry) in table.iter() {
            assert_eq!(Some(entry), defaults.find(name));
        }
    }

    #[test]
    fn test_malformed_line_is_warned() {
        let (_, diag) = load("NoEqualsHere");
        let warnings: Vec<_> = diag.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            Diagnostic::Warning { message, .. } if message == "Assignment of style sheet name expected!"
        ));
    }

    #[test]
    fn test_missing_marker_is_an_error() {
        let (table, diag) = load("Title = \\qc\\b Big");
        let errors: Vec<_> = diag.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Style sheet 'Title' contains no '\\s' clause."));
        assert_eq!(
            table.find("Title"),
            StyleTable::with_defaults().find("Title")
        );
    }

    #[test]
    fn test_line_counter_only_counts_applied_styles() {
        let content = "\
# header comment

Heading1 = \\s1\\b
Bogus = \\s1
Heading2 = \\s2\\b
broken line
";
        let (_, diag) = load(content);
        let lines: Vec<_> = diag
            .warnings()
            .map(|w| match w {
                Diagnostic::Warning { line, .. } => *line,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(lines, [2, 3]);
    }
}
