//! Extensions files: document information fields.
//!
//! ```text
//! Title   = Reference Manual
//! Company = Example Corp
//! ```

use std::path::Path;

use super::{read_source, statements, Statement};
use crate::diagnostics::Diagnostics;
use crate::extensions::ExtensionsRecord;

/// Fills an [`ExtensionsRecord`] from extensions files.
#[derive(Debug)]
pub struct ExtensionsLoader<'a> {
    record: &'a mut ExtensionsRecord,
}

impl<'a> ExtensionsLoader<'a> {
    /// Creates a loader that fills `record`.
    pub fn new(record: &'a mut ExtensionsRecord) -> Self {
        Self { record }
    }

    /// Loads the extensions file at `path`.
    ///
    /// If the file cannot be read the record is left as it is and a single
    /// error is reported.
    pub fn load(&mut self, path: impl AsRef<Path>, diag: &mut dyn Diagnostics) {
        let path = path.as_ref();
        if let Some(content) = read_source(path, "extensions", diag) {
            self.load_str(&path.display().to_string(), &content, diag);
        }
    }

    /// Applies extensions `content`; `source` names it in warnings.
    ///
    /// Keys outside the recognized set are ignored without a warning.
    pub fn load_str(&mut self, source: &str, content: &str, diag: &mut dyn Diagnostics) {
        let mut line_nr = 1;
        for statement in statements(content) {
            match statement {
                Statement::Assignment { key, value } => {
                    self.record.set(key, value);
                    line_nr += 1;
                }
                Statement::Malformed => {
                    diag.warn(source, line_nr, "Assignment of extension field expected!");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingDiagnostics, Diagnostic};

    #[test]
    fn test_known_and_unknown_keys() {
        let mut record = ExtensionsRecord::new();
        let mut diag = CollectingDiagnostics::new();
        ExtensionsLoader::new(&mut record).load_str(
            "ext.cfg",
            "Title = My Doc\nRandomKey = ignored\n",
            &mut diag,
        );
        assert_eq!(record.title, "My Doc");
        assert_eq!(
            ExtensionsRecord {
                title: String::new(),
                ..record.clone()
            },
            ExtensionsRecord::default()
        );
        assert!(diag.is_clean());
    }

    #[test]
    fn test_later_assignment_wins() {
        let mut record = ExtensionsRecord::new();
        let mut diag = CollectingDiagnostics::new();
        ExtensionsLoader::new(&mut record).load_str(
            "ext.cfg",
            "Author = First\nAuthor\t=\tSecond Person",
            &mut diag,
        );
        assert_eq!(record.author, "Second Person");
    }

    #[test]
    fn test_malformed_line_counts_successful_lines() {
        let mut record = ExtensionsRecord::new();
        let mut diag = CollectingDiagnostics::new();
        ExtensionsLoader::new(&mut record).load_str(
            "ext.cfg",
            "# c\nTitle = T\nUnknown = u\n\njust text\n",
            &mut diag,
        );
        assert_eq!(
            diag.warnings().cloned().collect::<Vec<_>>(),
            [Diagnostic::Warning {
                file: "ext.cfg".to_string(),
                line: 3,
                message: "Assignment of extension field expected!".to_string(),
            }]
        );
        assert_eq!(record.title, "T");
    }
}
