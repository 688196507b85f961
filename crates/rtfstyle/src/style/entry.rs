//! A single named RTF paragraph style.

use serde::Serialize;

use super::parse::{apply_override, locate_marker};
use crate::error::Result;

/// One entry of the style table.
///
/// `reference` holds the formatting codes, always starting at the `\s<n>`
/// marker; `definition` holds the linkage that follows it (`\sbasedon`,
/// `\snext`, the visible style name). `index` is the number carried by the
/// marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    index: u32,
    reference: String,
    definition: String,
}

impl StyleEntry {
    /// Builds an entry from a compiled-in reference and definition pair.
    ///
    /// The reference is trimmed to start at its clause marker. Unlike an
    /// override, the reference is not scanned for a linkage boundary.
    ///
    /// # Errors
    ///
    /// Fails if `reference` carries no clause marker or the marker index is
    /// not positive.
    pub fn new(reference: &str, definition: impl Into<String>) -> Result<Self> {
        let (marker, index) = locate_marker(reference, "")?;
        Ok(Self {
            index,
            reference: reference[marker.start..].to_string(),
            definition: definition.into(),
        })
    }

    /// Number following the `\s` marker.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Formatting codes, starting at the clause marker.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Linkage and name section.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The full clause as it appears in a style sheet file.
    pub fn clause(&self) -> String {
        format!("{}{}", self.reference, self.definition)
    }

    /// Re-splits this entry from an override clause.
    ///
    /// `style_name` only feeds the error message. On error the entry is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// See [`StyleError`](crate::StyleError).
    pub fn set_style(&mut self, clause: &str, style_name: &str) -> Result<()> {
        apply_override(self, clause, style_name)
    }

    pub(super) fn replace(&mut self, index: u32, reference: &str, definition: Option<&str>) {
        self.index = index;
        self.reference = reference.to_string();
        if let Some(definition) = definition {
            self.definition = definition.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleError;

    #[test]
    fn test_new_trims_to_marker() {
        let entry = StyleEntry::new("\\pard\\s17\\qj ", "\\sbasedon0 \\snext17 BodyText").unwrap();
        assert_eq!(entry.index(), 17);
        assert_eq!(entry.reference(), "\\s17\\qj ");
        assert_eq!(entry.definition(), "\\sbasedon0 \\snext17 BodyText");
    }

    #[test]
    fn test_new_keeps_reference_unscanned() {
        let entry = StyleEntry::new("\\s3\\b plain \\snext4", "").unwrap();
        assert_eq!(entry.reference(), "\\s3\\b plain \\snext4");
    }

    #[test]
    fn test_new_without_marker() {
        let err = StyleEntry::new("\\b\\f1 ", "x").unwrap_err();
        assert!(matches!(err, StyleError::NoClauseMarker { .. }));
    }

    #[test]
    fn test_clause_concatenates() {
        let entry = StyleEntry::new("\\s18\\fs22 ", "\\sbasedon0 DenseText").unwrap();
        assert_eq!(entry.clause(), "\\s18\\fs22 \\sbasedon0 DenseText");
    }
}
