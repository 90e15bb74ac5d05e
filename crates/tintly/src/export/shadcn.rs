//! `components.json` generator for the shadcn/ui CLI.

use serde_json::json;

use crate::tokens::Theme;

/// Renders the shadcn/ui project manifest.
///
/// The manifest only points the shadcn/ui CLI at the Tailwind config and
/// global stylesheet; it carries no per-theme data.
pub fn components_manifest(_theme: &Theme) -> String {
    let manifest = json!({
        "style": "default",
        "rsc": false,
        "tsx": true,
        "tailwind": {
            "config": "./tailwind.config.js",
            "css": "./src/app/globals.css",
            "baseColor": "slate",
            "cssVariables": true,
            "prefix": "",
        },
        "aliases": {
            "components": "@/components",
            "utils": "@/lib/utils",
        },
    });
    format!("{:#}", manifest)
}
