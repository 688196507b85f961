//! Template files for users to start their own style sheet or extensions
//! file from.
//!
//! Every assignment in a template is commented out, so loading a template
//! unchanged is a no-op.

use std::io::{self, Write};

use crate::style::StyleTable;

const HEADER: &str = "\
# All text after a hash (#) is considered a comment and will be ignored.
# Remove a hash to activate a line.
";

/// Description of each extension key, in template order.
const EXTENSION_DOCS: &[(&str, &[&str])] = &[
    ("Title", &["Overrides the project title."]),
    ("Company", &["Name of the company that produced this document."]),
    ("LogoFilename", &["Filename of a company or project logo."]),
    ("Author", &["Author of the document."]),
    (
        "DocumentType",
        &["Type of document (e.g. Design Specification, User Manual, etc.)."],
    ),
    ("DocumentId", &["Document tracking number."]),
    (
        "Manager",
        &[
            "Name of the author's manager.",
            "This field is not displayed in the document itself, but it is",
            "available in the information block of the rtf file.",
        ],
    ),
    ("Subject", &["Subject of the document."]),
    ("Comments", &["Comments regarding the document."]),
    ("Keywords", &["Keywords associated with the document."]),
];

/// Column the `=` of an extensions template line is aligned to.
const KEY_WIDTH: usize = 15;

/// Writes `table` as a commented-out style sheet.
///
/// Each style becomes `# <name> = <reference><definition>`. Removing the
/// leading `# ` from a line and loading it gives back that same entry.
pub fn write_stylesheet(table: &StyleTable, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "# This file describes styles used for generating RTF output.")?;
    writeln!(out, "{HEADER}")?;
    for (name, entry) in table.iter() {
        writeln!(out, "# {} = {}", name, entry.clause())?;
    }
    Ok(())
}

/// Writes a commented-out extensions file listing every recognized key.
pub fn write_extensions(mut out: impl Write) -> io::Result<()> {
    writeln!(out, "# This file describes extensions used for generating RTF output.")?;
    writeln!(out, "{HEADER}")?;
    for (key, doc) in EXTENSION_DOCS {
        for line in *doc {
            writeln!(out, "# {line}")?;
        }
        writeln!(out, "#{key:<KEY_WIDTH$} = ")?;
        writeln!(out)?;
    }
    Ok(())
}
