//! Error types for style sheet parsing and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while applying a style clause to a [`StyleEntry`](crate::StyleEntry).
///
/// The loaders never propagate these: they report them through
/// [`Diagnostics::err`](crate::Diagnostics::err) and move on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The clause has no `\s<n>` marker anywhere in it.
    #[error("Style sheet '{style}' contains no '\\s' clause.\n{{{clause}}}")]
    NoClauseMarker {
        /// Style name the clause was meant for.
        style: String,
        /// The offending clause, verbatim.
        clause: String,
    },

    /// The clause marker does not carry a positive index.
    #[error("Style clause '{clause}' has a marker without a positive index")]
    InvalidIndex {
        /// The clause marker text.
        clause: String,
    },
}

/// Errors raised while reading an [`RtfConfig`](crate::RtfConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML for [`RtfConfig`](crate::RtfConfig).
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for style clause operations.
pub type Result<T> = std::result::Result<T, StyleError>;
