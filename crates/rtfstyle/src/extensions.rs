//! Document metadata read from an RTF extensions file.

use serde::Serialize;

/// Recognized extension keys, in the order they are documented.
pub const EXTENSION_KEYS: &[&str] = &[
    "Title",
    "Subject",
    "Comments",
    "Company",
    "LogoFilename",
    "Author",
    "Manager",
    "DocumentType",
    "DocumentId",
    "Keywords",
];

/// Document information fields. Every field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionsRecord {
    pub title: String,
    pub subject: String,
    pub comments: String,
    pub company: String,
    pub logo_filename: String,
    pub author: String,
    pub manager: String,
    pub document_type: String,
    pub document_id: String,
    pub keywords: String,
}

impl ExtensionsRecord {
    /// Creates a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field named by `key`.
    ///
    /// Returns `false`, changing nothing, if `key` is not one of
    /// [`EXTENSION_KEYS`]. Keys are case-sensitive.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.field_mut(key) {
            Some(field) => {
                *field = value.into();
                true
            }
            None => false,
        }
    }

    /// Value of the field named by `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let field = match key {
            "Title" => &self.title,
            "Subject" => &self.subject,
            "Comments" => &self.comments,
            "Company" => &self.company,
            "LogoFilename" => &self.logo_filename,
            "Author" => &self.author,
            "Manager" => &self.manager,
            "DocumentType" => &self.document_type,
            "DocumentId" => &self.document_id,
            "Keywords" => &self.keywords,
            _ => return None,
        };
        Some(field.as_str())
    }

    /// `(key, value)` pairs for every non-empty field.
    pub fn iter_set(&self) -> impl Iterator<Item = (&'static str, &str)> {
        EXTENSION_KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .filter(|(_, value)| !value.is_empty())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = match key {
            "Title" => &mut self.title,
            "Subject" => &mut self.subject,
            "Comments" => &mut self.comments,
            "Company" => &mut self.company,
            "LogoFilename" => &mut self.logo_filename,
            "Author" => &mut self.author,
            "Manager" => &mut self.manager,
            "DocumentType" => &mut self.document_type,
            "DocumentId" => &mut self.document_id,
            "Keywords" => &mut self.keywords,
            _ => return None,
        };
        Some(field)
    }
}
