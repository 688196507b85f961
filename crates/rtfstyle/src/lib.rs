//! # rtfstyle - RTF style sheet defaults and overrides
//!
//! `rtfstyle` keeps the table of named paragraph styles an RTF generator
//! emits, lets users override individual styles from a style sheet file,
//! and reads document information (title, author, ...) from an extensions
//! file.
//!
//! ## Core Concepts
//!
//! - [`StyleEntry`]: one style, split into a `reference` (formatting codes
//!   starting at the `\s<n>` marker) and a `definition` (the `\sbasedon`,
//!   `\snext` linkage and the visible name)
//! - [`StyleTable`]: all styles by name, seeded from the built-in defaults
//! - [`StylesheetLoader`] / [`ExtensionsLoader`]: line-oriented `key = value`
//!   file loaders that report problems to a [`Diagnostics`] sink
//! - [`RtfStyleContext`]: the finished table and metadata, built from an
//!   [`RtfConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rtfstyle::{CollectingDiagnostics, StyleTable, StylesheetLoader};
//!
//! let mut styles = StyleTable::with_defaults();
//! let mut diag = CollectingDiagnostics::new();
//!
//! StylesheetLoader::new(&mut styles).load_str(
//!     "inline",
//!     "Heading1 = \\s1\\b\\fs40 \\sbasedon0 \\snext0 big heading",
//!     &mut diag,
//! );
//!
//! let heading = styles.find("Heading1").unwrap();
//! assert_eq!(heading.index(), 1);
//! assert_eq!(heading.reference(), "\\s1\\b\\fs40 ");
//! assert_eq!(heading.definition(), "\\sbasedon0 \\snext0 big heading ");
//! assert!(diag.is_clean());
//! ```
//!
//! ## Clause Splitting
//!
//! An override clause is scanned from its `\s<n>` marker onwards. Control
//! words (`\fs20`, `\fi-360`) and brace groups (`{\*\pn ...}`) belong to the
//! reference. The first `\snext` or `\sbasedon`, plain text, or any token
//! that is not a lowercase control word ends it. When the clause ends
//! while still inside formatting codes, the previous definition is kept:
//!
//! ```rust
//! use rtfstyle::StyleTable;
//!
//! let mut styles = StyleTable::with_defaults();
//! let body = styles.find_mut("BodyText").unwrap();
//! body.set_style("\\s17\\fs24 ", "BodyText").unwrap();
//! assert_eq!(body.reference(), "\\s17\\fs24 ");
//! assert_eq!(body.definition(), "\\sbasedon0 \\snext17 BodyText");
//! ```

mod config;
mod context;
mod diagnostics;
mod error;
mod extensions;
mod loader;
pub mod scanner;
mod style;
mod writer;

pub use config::RtfConfig;
pub use context::RtfStyleContext;
pub use diagnostics::{CollectingDiagnostics, ConsoleDiagnostics, Diagnostic, Diagnostics};
pub use error::{ConfigError, Result, StyleError};
pub use extensions::{ExtensionsRecord, EXTENSION_KEYS};
pub use loader::{ExtensionsLoader, StylesheetLoader};
pub use style::{
    default_styles, DefaultStyle, StyleEntry, StyleTable, INDENT_TWIPS, MAX_INDENT_LEVELS,
};
pub use writer::{write_extensions, write_stylesheet};
