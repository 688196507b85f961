//! The style table and document metadata bundled for downstream consumers.

use crate::config::RtfConfig;
use crate::diagnostics::Diagnostics;
use crate::extensions::ExtensionsRecord;
use crate::loader::{ExtensionsLoader, StylesheetLoader};
use crate::style::StyleTable;

/// Everything an RTF generator needs to know about styles and metadata.
///
/// Build it once, finish all loading, then hand it to readers.
#[derive(Debug, Clone, Default)]
pub struct RtfStyleContext {
    /// Styles by name.
    pub styles: StyleTable,
    /// Document information fields.
    pub extensions: ExtensionsRecord,
}

impl RtfStyleContext {
    /// Built-in styles and empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the defaults and applies the files named in `config`.
    ///
    /// The style sheet is applied before the extensions file. Unreadable
    /// files and bad lines are reported to `diag`; loading never fails.
    pub fn load(config: &RtfConfig, diag: &mut dyn Diagnostics) -> Self {
        let mut context = Self::new();
        if let Some(path) = &config.stylesheet_file {
            StylesheetLoader::new(&mut context.styles).load(path, diag);
        }
        if let Some(path) = &config.extensions_file {
            ExtensionsLoader::new(&mut context.extensions).load(path, diag);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectingDiagnostics;

    #[test]
    fn test_empty_config_is_silent() {
        let mut diag = CollectingDiagnostics::new();
        let context = RtfStyleContext::load(&RtfConfig::new(), &mut diag);
        assert!(diag.records().is_empty());
        assert_eq!(context.styles.len(), StyleTable::with_defaults().len());
        assert_eq!(context.extensions, ExtensionsRecord::default());
    }

    #[test]
    fn test_missing_files_keep_defaults() {
        let config = RtfConfig::new()
            .with_stylesheet("/nonexistent/style.cfg")
            .with_extensions("/nonexistent/ext.cfg");
        let mut diag = CollectingDiagnostics::new();
        let context = RtfStyleContext::load(&config, &mut diag);
        assert_eq!(diag.errors().count(), 2);
        assert_eq!(diag.warnings().count(), 0);
        assert_eq!(
            context.styles.find("Heading1"),
            StyleTable::with_defaults().find("Heading1")
        );
    }
}
