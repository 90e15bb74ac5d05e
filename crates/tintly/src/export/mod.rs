//! Export engine: turns a [`Theme`] into downstream configuration files.
//!
//! This module provides:
//!
//! - [`ExportFormat`]: the closed set of target formats
//! - [`export_theme`] / [`export`]: string-keyed and typed dispatch
//! - [`export_artifact`]: generated content plus its suggested file name
//! - [`file_extension`] / [`file_name`]: the naming policy
//! - [`formats`]: a catalogue of the formats for listing in a UI
//!
//! Every generator is a pure function of the theme. The only
//! non-determinism is the `generatedAt` timestamp in JSON token documents.

mod css;
mod error;
mod filename;
mod json;
mod shadcn;
mod tailwind;

pub use css::css_variables;
pub use error::ExportError;
pub use filename::{file_extension, file_name, file_stem, FALLBACK_FILE_STEM};
pub use json::{tokens_json, tokens_json_at, GENERATOR_NAME, TOKENS_VERSION};
pub use shadcn::components_manifest;
pub use tailwind::tailwind_config;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::tokens::Theme;

/// A target textual representation of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `tailwind.config.js` extending the default Tailwind theme.
    Tailwind,
    /// CSS custom properties for light and dark mode.
    Css,
    /// A design-token JSON document.
    Json,
    /// The shadcn/ui `components.json` manifest.
    Shadcn,
}

impl ExportFormat {
    /// Every format, in catalogue order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Tailwind,
        ExportFormat::Css,
        ExportFormat::Json,
        ExportFormat::Shadcn,
    ];

    /// The key used to select this format (`tailwind`, `css`, `json`, `shadcn`).
    pub fn key(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Css => "css",
            ExportFormat::Json => "json",
            ExportFormat::Shadcn => "shadcn",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "js",
            ExportFormat::Css => "css",
            ExportFormat::Json | ExportFormat::Shadcn => "json",
        }
    }

    /// The suggested file name, derived from the theme name where the
    /// format calls for it.
    pub fn file_name(self, theme_name: Option<&str>) -> String {
        match self {
            ExportFormat::Tailwind => "tailwind.config.js".to_string(),
            ExportFormat::Css => format!("{}.css", file_stem(theme_name)),
            ExportFormat::Json => format!("{}-tokens.json", file_stem(theme_name)),
            ExportFormat::Shadcn => "components.json".to_string(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "Tailwind Config",
            ExportFormat::Css => "CSS Variables",
            ExportFormat::Json => "JSON Tokens",
            ExportFormat::Shadcn => "shadcn/ui Components",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "Generate tailwind.config.js file",
            ExportFormat::Css => "Generate CSS file with theme variables",
            ExportFormat::Json => "Generate design tokens as JSON",
            ExportFormat::Shadcn => "Generate components.json for the shadcn/ui CLI",
        }
    }

    /// Runs this format's generator.
    pub fn generate(self, theme: &Theme) -> String {
        match self {
            ExportFormat::Tailwind => tailwind_config(theme),
            ExportFormat::Css => css_variables(theme),
            ExportFormat::Json => tokens_json(theme),
            ExportFormat::Shadcn => components_manifest(theme),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.key() == key)
            .ok_or_else(|| ExportError::UnsupportedFormat(key.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Generated file content together with where it should be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub content: String,
    pub file_name: String,
    pub format: ExportFormat,
    pub file_extension: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    pub theme_name: String,
}

/// Catalogue entry describing one export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub file_extension: &'static str,
    /// File name used when the theme has no name.
    pub file_name: String,
}

/// Lists every export format.
pub fn formats() -> Vec<FormatInfo> {
    ExportFormat::ALL
        .into_iter()
        .map(|format| FormatInfo {
            key: format.key(),
            name: format.label(),
            description: format.description(),
            file_extension: format.extension(),
            file_name: format.file_name(None),
        })
        .collect()
}

/// Exports a theme in a known format.
pub fn export(theme: &Theme, format: ExportFormat) -> String {
    tracing::debug!(format = format.key(), theme = %theme.name, "exporting theme");
    format.generate(theme)
}

/// Exports a theme in the format named by `format`.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] carrying the key when it is
/// not one of `tailwind`, `css`, `json`, `shadcn`. No output is produced in
/// that case.
///
/// # Example
///
/// ```rust
/// use tintly::{default_theme, export_theme, ExportError};
///
/// let css = export_theme(default_theme(), "css").unwrap();
/// assert!(css.contains("--primary: 199 89% 48%;"));
///
/// let err = export_theme(default_theme(), "invalid-format").unwrap_err();
/// assert_eq!(err, ExportError::UnsupportedFormat("invalid-format".into()));
/// ```
pub fn export_theme(theme: &Theme, format: &str) -> Result<String, ExportError> {
    let format = format.parse::<ExportFormat>()?;
    Ok(export(theme, format))
}

/// Exports a theme and attaches the suggested file name and extension.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] for unknown format keys.
pub fn export_artifact(theme: &Theme, format: &str) -> Result<ExportArtifact, ExportError> {
    let format = format.parse::<ExportFormat>()?;
    Ok(ExportArtifact {
        content: export(theme, format),
        file_name: format.file_name(Some(theme.name.as_str())),
        format,
        file_extension: format.extension(),
        theme_id: theme.id.clone(),
        theme_name: theme.name.clone(),
    })
}
