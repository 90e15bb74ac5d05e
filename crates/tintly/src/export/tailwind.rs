//! `tailwind.config.js` generator.

use serde_json::{json, Map, Value};

use crate::tokens::Theme;

const HEADER: &str = "/** @type {import('tailwindcss').Config} */\nmodule.exports = ";

/// Roles aliased to a single CSS variable.
const SINGLE_ROLES: [&str; 5] = ["border", "input", "ring", "background", "foreground"];

/// Roles aliased to a `DEFAULT` / `foreground` variable pair.
const PAIRED_ROLES: [&str; 7] = [
    "primary",
    "secondary",
    "destructive",
    "muted",
    "accent",
    "popover",
    "card",
];

/// Renders a Tailwind config module extending the default theme.
///
/// The palette starts from the theme's raw colors; the shadcn/ui roles are
/// then replaced with `hsl(var(--role))` references so the config tracks
/// the CSS variable sheet. A replaced role keeps its original position.
/// Typography, spacing, radius and shadow groups pass through unchanged.
pub fn tailwind_config(theme: &Theme) -> String {
    let mut colors = match serde_json::to_value(&theme.colors) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for role in SINGLE_ROLES {
        colors.insert(role.to_string(), Value::String(var_ref(role)));
    }
    for role in PAIRED_ROLES {
        colors.insert(
            role.to_string(),
            json!({
                "DEFAULT": var_ref(role),
                "foreground": var_ref(&format!("{}-foreground", role)),
            }),
        );
    }

    let typography = &theme.typography;
    let mut extend = Map::new();
    extend.insert("colors".to_string(), Value::Object(colors));
    if let Some(families) = &typography.font_family {
        extend.insert("fontFamily".to_string(), json!(families));
    }
    if let Some(sizes) = &typography.font_size {
        extend.insert("fontSize".to_string(), json!(sizes));
    }
    if let Some(weights) = &typography.font_weight {
        extend.insert("fontWeight".to_string(), json!(weights));
    }
    if let Some(heights) = &typography.line_height {
        extend.insert("lineHeight".to_string(), json!(heights));
    }
    extend.insert("spacing".to_string(), json!(theme.spacing));
    extend.insert("borderRadius".to_string(), json!(theme.radius));
    extend.insert("boxShadow".to_string(), json!(theme.shadows));

    let config = json!({
        "theme": { "extend": extend },
        "plugins": [],
    });
    format!("{}{:#}", HEADER, config)
}

fn var_ref(name: &str) -> String {
    format!("hsl(var(--{}))", name)
}
