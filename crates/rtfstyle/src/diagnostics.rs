//! Diagnostic output for the loaders.
//!
//! Loaders never fail: every problem they meet is reported through a
//! [`Diagnostics`] sink and the load carries on with whatever state it has.
//! [`ConsoleDiagnostics`] writes to stderr; [`CollectingDiagnostics`] keeps
//! the reports in memory so tests can inspect them.

use console::{style, Term};

/// Receiver for loader warnings, errors and progress messages.
pub trait Diagnostics {
    /// A problem on a specific line of an input file.
    fn warn(&mut self, file: &str, line: usize, message: &str);

    /// A problem that is not tied to a line.
    fn err(&mut self, message: &str);

    /// Progress information.
    fn msg(&mut self, message: &str);
}

/// Writes diagnostics to stderr, colored when the terminal supports it.
#[derive(Debug, Clone)]
pub struct ConsoleDiagnostics {
    term: Term,
    quiet: bool,
}

impl Default for ConsoleDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDiagnostics {
    /// Creates a sink writing to stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            quiet: false,
        }
    }

    /// Suppresses progress messages. Warnings and errors are still shown.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write(&self, line: &str) {
        // stderr going away is not something a diagnostic can report
        let _ = self.term.write_line(line);
    }
}

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&mut self, file: &str, line: usize, message: &str) {
        self.write(&format!(
            "{}:{}: {} {}",
            file,
            line,
            style("warning:").yellow().bold(),
            message
        ));
    }

    fn err(&mut self, message: &str) {
        self.write(&format!("{} {}", style("error:").red().bold(), message));
    }

    fn msg(&mut self, message: &str) {
        if !self.quiet {
            self.write(message);
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Line-level warning.
    Warning {
        /// File the warning refers to.
        file: String,
        /// Line number as counted by the loader.
        line: usize,
        /// Warning text.
        message: String,
    },
    /// Error message.
    Error(String),
    /// Progress message.
    Message(String),
}

/// Records diagnostics in memory.
///
/// # Example
///
/// ```
/// use rtfstyle::{CollectingDiagnostics, StyleTable, StylesheetLoader};
///
/// let mut table = StyleTable::with_defaults();
/// let mut diag = CollectingDiagnostics::new();
/// StylesheetLoader::new(&mut table).load_str("inline", "Bogus = \\s1 ", &mut diag);
/// assert_eq!(diag.warnings().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectingDiagnostics {
    records: Vec<Diagnostic>,
}

impl CollectingDiagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    /// Recorded warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records
            .iter()
            .filter(|d| matches!(d, Diagnostic::Warning { .. }))
    }

    /// Recorded error messages.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|d| match d {
            Diagnostic::Error(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Recorded progress messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|d| match d {
            Diagnostic::Message(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Returns `true` if no warning or error was recorded.
    pub fn is_clean(&self) -> bool {
        self.records
            .iter()
            .all(|d| matches!(d, Diagnostic::Message(_)))
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&mut self, file: &str, line: usize, message: &str) {
        self.records.push(Diagnostic::Warning {
            file: file.to_string(),
            line,
            message: message.to_string(),
        });
    }

    fn err(&mut self, message: &str) {
        self.records.push(Diagnostic::Error(message.to_string()));
    }

    fn msg(&mut self, message: &str) {
        self.records.push(Diagnostic::Message(message.to_string()));
    }
}
