//! `rtfstyle` - inspect and template RTF style sheets.
//!
//! ```text
//! rtfstyle write-stylesheet style.cfg
//! rtfstyle write-extensions ext.cfg
//! rtfstyle show --stylesheet style.cfg --style Heading1
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use rtfstyle::{
    write_extensions, write_stylesheet, ConsoleDiagnostics, ExtensionsRecord, RtfConfig,
    RtfStyleContext, StyleEntry, StyleTable,
};
use serde::Serialize;

/// Inspect the built-in RTF styles and apply user overrides.
#[derive(Parser)]
#[command(name = "rtfstyle")]
#[command(version)]
#[command(about = "Inspect and template RTF style sheets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default style sheet, every line commented out
    WriteStylesheet {
        /// Output file (stdout when omitted)
        file: Option<PathBuf>,
    },

    /// Write an extensions file template
    WriteExtensions {
        /// Output file (stdout when omitted)
        file: Option<PathBuf>,
    },

    /// Show styles and document fields after applying user files
    Show {
        /// YAML config naming the style sheet and extensions files
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Style sheet file (overrides the config)
        #[arg(short, long)]
        stylesheet: Option<PathBuf>,

        /// Extensions file (overrides the config)
        #[arg(short, long)]
        extensions: Option<PathBuf>,

        /// Only show this style
        #[arg(long)]
        style: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Hide progress messages
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Serialize)]
struct NamedEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    entry: &'a StyleEntry,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    styles: Vec<NamedEntry<'a>>,
    extensions: &'a ExtensionsRecord,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::WriteStylesheet { file } => {
            let table = StyleTable::with_defaults();
            with_output(file, |out| write_stylesheet(&table, out))
        }
        Command::WriteExtensions { file } => with_output(file, |out| write_extensions(out)),
        Command::Show {
            config,
            stylesheet,
            extensions,
            style,
            json,
            quiet,
        } => {
            let mut config = match config {
                Some(path) => RtfConfig::from_file(&path)?,
                None => RtfConfig::new(),
            };
            if let Some(path) = stylesheet {
                config.stylesheet_file = Some(path);
            }
            if let Some(path) = extensions {
                config.extensions_file = Some(path);
            }

            let mut diag = ConsoleDiagnostics::new().quiet(quiet);
            let context = RtfStyleContext::load(&config, &mut diag);
            show(&context, style.as_deref(), json)
        }
    }
}

fn with_output(
    file: Option<PathBuf>,
    write: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> Result<()> {
    match file {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write(&mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write(&mut out)?;
        }
    }
    Ok(())
}

fn show(context: &RtfStyleContext, only: Option<&str>, json: bool) -> Result<()> {
    let styles: Vec<NamedEntry<'_>> = match only {
        Some(name) => match context.styles.find(name) {
            Some(entry) => vec![NamedEntry { name, entry }],
            None => bail!("unknown style '{}'", name),
        },
        None => context
            .styles
            .iter()
            .map(|(name, entry)| NamedEntry { name, entry })
            .collect(),
    };

    if json {
        let report = ShowReport {
            styles,
            extensions: &context.extensions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let name_style = Style::new().bold().cyan();
    let index_style = Style::new().yellow();
    let muted = Style::new().dim();
    for NamedEntry { name, entry } in &styles {
        println!(
            "{} {}",
            name_style.apply_to(name),
            index_style.apply_to(format!("\\s{}", entry.index()))
        );
        println!("  {} {}", muted.apply_to("reference: "), entry.reference());
        println!("  {} {}", muted.apply_to("definition:"), entry.definition());
    }

    let fields: Vec<_> = context.extensions.iter_set().collect();
    if !fields.is_empty() {
        println!();
        for (key, value) in fields {
            println!("{} {}", name_style.apply_to(format!("{key}:")), value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from([
            "rtfstyle",
            "show",
            "--stylesheet",
            "style.cfg",
            "--style",
            "Heading1",
            "-q",
        ])
        .unwrap();
        match cli.command {
            Command::Show {
                stylesheet,
                style,
                quiet,
                json,
                ..
            } => {
                assert_eq!(stylesheet, Some(PathBuf::from("style.cfg")));
                assert_eq!(style.as_deref(), Some("Heading1"));
                assert!(quiet);
                assert!(!json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_write_stylesheet_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.cfg");
        let table = StyleTable::with_defaults();
        with_output(Some(path.clone()), |out| write_stylesheet(&table, out)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# ListEnum13 = \\s153"));
    }

    #[test]
    fn test_show_unknown_style_fails() {
        let context = RtfStyleContext::new();
        let err = show(&context, Some("Bogus"), true).unwrap_err();
        assert!(err.to_string().contains("Bogus"));
    }
}
