//! The style table: every known style, looked up by name.

use std::collections::HashMap;

use super::defaults::default_styles;
use super::entry::StyleEntry;

/// Mapping from style name to [`StyleEntry`].
///
/// The set of names is fixed when the table is built. Style sheet overrides
/// mutate existing entries in place; nothing is ever added or removed.
/// Iteration follows the order the defaults were declared in.
#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: HashMap<String, StyleEntry>,
    order: Vec<String>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StyleTable {
    /// Builds the table from the compiled-in default styles.
    ///
    /// # Panics
    ///
    /// Panics if a default style has no clause marker or a non-positive
    /// index. That means the compiled-in table itself is broken.
    pub fn with_defaults() -> Self {
        let defaults = default_styles();
        let mut entries = HashMap::with_capacity(defaults.len());
        let mut order = Vec::with_capacity(defaults.len());
        for style in defaults {
            let entry = StyleEntry::new(&style.reference, style.definition)
                .unwrap_or_else(|e| panic!("default style '{}' is invalid: {}", style.name, e));
            entries.insert(style.name.clone(), entry);
            order.push(style.name);
        }
        Self { entries, order }
    }

    /// Looks up a style by its case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&StyleEntry> {
        self.entries.get(name)
    }

    /// Looks up a style for in-place modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut StyleEntry> {
        self.entries.get_mut(name)
    }

    /// Returns `true` if `name` is a known style.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the table holds no styles.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Style names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, entry)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|e| (name.as_str(), e)))
    }
}
