//! `tintly` command-line exporter.

mod cli;
mod load;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tintly::{default_theme, export_artifact, formats, presets, ExportArtifact};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ExportArgs};
use crate::render::{Renderer, WroteFile};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli.command)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Export(args) => run_export(&args),
        Command::Formats => {
            let renderer = Renderer::new()?;
            print!("{}", renderer.formats(&formats())?);
            Ok(())
        }
        Command::Presets => {
            let renderer = Renderer::new()?;
            print!("{}", renderer.presets(presets::all())?);
            Ok(())
        }
        Command::Template => {
            let json = serde_json::to_string_pretty(default_theme())
                .context("Failed to serialize the default template")?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let theme = load::resolve(&args.source)?;
    let artifact = export_artifact(&theme, args.format.key())?;

    if args.stdout {
        print!("{}", artifact.content);
        return Ok(());
    }

    let path = write_artifact(&artifact, &args.out)?;
    let renderer = Renderer::new()?;
    let message = renderer.render(
        "wrote",
        &WroteFile {
            theme: artifact.theme_name.clone(),
            format: artifact.format.label(),
            path: path.display().to_string(),
        },
    )?;
    println!("{}", message);
    Ok(())
}

/// Writes the artifact into `dir` under its suggested file name.
fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = artifact.content.len(), "wrote export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;
    use tintly::ExportFormat;

    #[test]
    fn test_write_artifact_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let theme = presets::get("blue").unwrap();
        let artifact = export_artifact(theme, "css").unwrap();

        let path = write_artifact(&artifact, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("ocean-blue.css"));
        assert_eq!(fs::read_to_string(&path).unwrap(), artifact.content);
    }

    #[test]
    fn test_write_artifact_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("exports");
        let artifact = export_artifact(default_theme(), "json").unwrap();

        let path = write_artifact(&artifact, &out).unwrap();
        assert_eq!(path.file_name().unwrap(), "untitled-theme-tokens.json");
        assert!(path.exists());
    }

    #[test]
    fn test_run_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            format: ExportFormat::Tailwind,
            source: SourceArgs {
                preset: Some("purple".into()),
                ..Default::default()
            },
            out: dir.path().to_path_buf(),
            stdout: false,
        };
        run_export(&args).unwrap();

        let written = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert!(written.starts_with("/** @type {import('tailwindcss').Config} */"));
    }
}
