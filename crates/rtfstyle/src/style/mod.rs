//! Style entries, the default style table and clause override parsing.

mod defaults;
mod entry;
mod parse;
mod table;

pub use defaults::{default_styles, DefaultStyle, INDENT_TWIPS, MAX_INDENT_LEVELS};
pub use entry::StyleEntry;
pub use table::StyleTable;
