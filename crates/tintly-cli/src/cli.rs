//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tintly::{ExportError, ExportFormat};

#[derive(Debug, Parser)]
#[command(name = "tintly", version, about = "Export design-token themes to Tailwind, CSS and JSON")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export a theme in one of the supported formats
    Export(ExportArgs),
    /// List the supported export formats
    Formats,
    /// List the built-in preset themes
    Presets,
    /// Print the default theme template as JSON
    Template,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Target format: tailwind, css, json or shadcn
    #[arg(value_parser = parse_format)]
    pub format: ExportFormat,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory the exported file is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// Print the export to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

/// Where the theme comes from. With neither flag the default template is used.
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Theme file (.json, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Built-in preset id (see `tintly presets`)
    #[arg(short, long, value_name = "ID")]
    pub preset: Option<String>,
}

fn parse_format(key: &str) -> Result<ExportFormat, ExportError> {
    key.parse()
}
