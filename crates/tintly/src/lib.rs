//! # Tintly - design-token themes and exporters
//!
//! Tintly models a visual theme as five token groups (colors, typography,
//! spacing, radius, shadows) and exports it into the files front-end
//! tooling consumes:
//!
//! | Format | Output | File |
//! |--------|--------|------|
//! | `tailwind` | Tailwind config module | `tailwind.config.js` |
//! | `css` | shadcn/ui CSS variables, light and dark | `<name>.css` |
//! | `json` | Design-token document | `<name>-tokens.json` |
//! | `shadcn` | shadcn/ui CLI manifest | `components.json` |
//!
//! ## Quick Start
//!
//! ```rust
//! use tintly::{default_theme, export_theme, file_name};
//!
//! let theme = default_theme();
//! let css = export_theme(theme, "css").unwrap();
//! assert!(css.starts_with("@layer base {"));
//! assert_eq!(file_name("css", Some("Ocean Blue")), "ocean-blue.css");
//! ```
//!
//! ## Colors
//!
//! Every color is a `#rrggbb` string. The CSS exporter converts colors to
//! `H S% L%` triples with [`hex_to_hsl`]; a missing or malformed color
//! becomes `0 0% 0%` rather than failing the export.
//!
//! ## Storage
//!
//! Exporters take a [`Theme`] value and never touch storage. The
//! [`ThemeStore`] trait describes the persistence collaborator;
//! [`MemoryThemeStore`] implements it in memory.

pub mod color;
pub mod export;
pub mod presets;
pub mod store;
pub mod tokens;

pub use color::{hex_to_hsl, is_hex_color, parse_hex, Hsl, NEUTRAL_HSL};
pub use export::{
    components_manifest, css_variables, export, export_artifact, export_theme, file_extension,
    file_name, formats, tailwind_config, tokens_json, tokens_json_at, ExportArtifact,
    ExportError, ExportFormat, FormatInfo,
};
pub use store::{MemoryThemeStore, StoreError, ThemeDraft, ThemePatch, ThemeStore};
pub use tokens::{
    default_theme, scale, ColorRamp, ColorTokens, ColorValue, ScaleMap, Theme, Typography,
    DEFAULT_THEME_NAME,
};
