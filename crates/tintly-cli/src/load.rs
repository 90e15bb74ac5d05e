//! Resolving the theme an export runs against.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tintly::{default_theme, presets, Theme};
use tracing::{debug, warn};

use crate::cli::SourceArgs;

/// Loads the theme named by the source flags, falling back to the default
/// template.
pub fn resolve(source: &SourceArgs) -> Result<Theme> {
    let theme = if let Some(path) = &source.theme {
        read_theme_file(path)?
    } else if let Some(id) = &source.preset {
        presets::get(id).cloned().ok_or_else(|| {
            let known: Vec<_> = presets::ids().collect();
            anyhow!("Unknown preset '{}' (available: {})", id, known.join(", "))
        })?
    } else {
        debug!("no theme given, using the default template");
        default_theme().clone()
    };

    for (path, value) in theme.colors.malformed() {
        warn!(token = %path, value = %value, "color is not a 6-digit hex value and will export as neutral");
    }
    Ok(theme)
}

/// Reads a theme from JSON or YAML, chosen by file extension.
pub fn read_theme_file(path: &Path) -> Result<Theme> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let theme = match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML theme in {}", path.display()))?,
        Some("json") | None => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON theme in {}", path.display()))?,
        Some(other) => bail!("Unsupported theme file extension '.{}' (use .json, .yaml or .yml)", other),
    };
    debug!(path = %path.display(), "loaded theme file");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn theme_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_defaults_to_template() {
        let theme = resolve(&SourceArgs::default()).unwrap();
        assert_eq!(&theme, default_theme());
    }

    #[test]
    fn test_resolve_preset() {
        let source = SourceArgs {
            preset: Some("green".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&source).unwrap().name, "Forest Green");
    }

    #[test]
    fn test_resolve_unknown_preset_lists_ids() {
        let source = SourceArgs {
            preset: Some("neon".into()),
            ..Default::default()
        };
        let err = resolve(&source).unwrap_err().to_string();
        assert!(err.contains("neon"));
        assert!(err.contains("orange"));
    }

    #[test]
    fn test_read_json_theme() {
        let file = theme_file(
            ".json",
            r##"{ "name": "Json Theme", "colors": { "primary": { "500": "#0ea5e9" } } }"##,
        );
        let theme = read_theme_file(file.path()).unwrap();
        assert_eq!(theme.name, "Json Theme");
        assert_eq!(theme.colors.step("primary", "500"), Some("#0ea5e9"));
    }

    #[test]
    fn test_read_yaml_theme() {
        let file = theme_file(
            ".yaml",
            "name: Yaml Theme\ncolors:\n  background: \"#ffffff\"\n  primary:\n    500: \"#0ea5e9\"\n    foreground: \"#ffffff\"\nradius:\n  md: 0.5rem\n",
        );
        let theme = read_theme_file(file.path()).unwrap();
        assert_eq!(theme.name, "Yaml Theme");
        assert_eq!(theme.colors.flat("background"), Some("#ffffff"));
        assert_eq!(theme.colors.step("primary", "500"), Some("#0ea5e9"));
        assert_eq!(theme.radius.get("md").map(String::as_str), Some("0.5rem"));
    }

    #[test]
    fn test_read_rejects_unknown_extension() {
        let file = theme_file(".toml", "name = 'x'");
        let err = read_theme_file(file.path()).unwrap_err().to_string();
        assert!(err.contains(".toml"));
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_theme_file(Path::new("/nonexistent/theme.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read theme file"));
    }
}
