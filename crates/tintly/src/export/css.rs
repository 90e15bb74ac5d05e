//! CSS variable sheet generator (shadcn/ui `globals.css` shape).
//!
//! Both modes are driven by fixed lookup tables. The dark table does not
//! mirror the light one: background, card, popover, border and input all
//! borrow steps of the `secondary` ramp rather than their own roles. The
//! generated sheets are consumed as-is downstream, so the tables are kept
//! exactly as published even though the borrowing looks accidental.

use crate::color::hex_to_hsl;
use crate::tokens::{default_theme, ColorTokens, Theme};

/// Where a CSS variable takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// A flat color role.
    Flat(&'static str),
    /// One entry of a ramp role.
    Step(&'static str, &'static str),
}

impl Source {
    fn resolve(self, colors: &ColorTokens) -> Option<&str> {
        match self {
            Source::Flat(role) => colors.flat(role),
            Source::Step(role, key) => colors.step(role, key),
        }
    }
}

use self::Source::{Flat, Step};

const LIGHT_VARIABLES: [(&str, Source); 19] = [
    ("background", Flat("background")),
    ("foreground", Flat("foreground")),
    ("card", Flat("card")),
    ("card-foreground", Flat("card-foreground")),
    ("popover", Flat("popover")),
    ("popover-foreground", Flat("popover-foreground")),
    ("primary", Step("primary", "500")),
    ("primary-foreground", Step("primary", "foreground")),
    ("secondary", Step("secondary", "500")),
    ("secondary-foreground", Step("secondary", "foreground")),
    ("muted", Step("muted", "100")),
    ("muted-foreground", Step("muted", "foreground")),
    ("accent", Step("accent", "500")),
    ("accent-foreground", Step("accent", "foreground")),
    ("destructive", Flat("destructive")),
    ("destructive-foreground", Flat("destructive-foreground")),
    ("border", Flat("border")),
    ("input", Flat("input")),
    ("ring", Flat("ring")),
];

const DARK_VARIABLES: [(&str, Source); 19] = [
    ("background", Step("secondary", "900")),
    ("foreground", Step("secondary", "50")),
    ("card", Step("secondary", "900")),
    ("card-foreground", Step("secondary", "50")),
    ("popover", Step("secondary", "900")),
    ("popover-foreground", Step("secondary", "50")),
    ("primary", Step("primary", "400")),
    ("primary-foreground", Step("primary", "900")),
    ("secondary", Step("secondary", "800")),
    ("secondary-foreground", Step("secondary", "50")),
    ("muted", Step("secondary", "800")),
    ("muted-foreground", Step("secondary", "400")),
    ("accent", Step("accent", "400")),
    ("accent-foreground", Step("accent", "900")),
    ("destructive", Flat("destructive")),
    ("destructive-foreground", Flat("destructive-foreground")),
    ("border", Step("secondary", "800")),
    ("input", Step("secondary", "800")),
    ("ring", Step("primary", "400")),
];

const UTILITY_LAYER: &str = "@layer base {
  * {
    @apply border-border;
  }
  body {
    @apply bg-background text-foreground;
  }
}";

/// Renders the light (`:root`) and dark (`.dark`) variable blocks followed
/// by the base utility layer.
///
/// Every color is written as an `H S% L%` triple; colors the theme does not
/// define come out as `0 0% 0%`. `--radius` is the theme's `radius.md`,
/// falling back to the default template's value.
pub fn css_variables(theme: &Theme) -> String {
    let colors = &theme.colors;
    let radius = theme
        .radius
        .get("md")
        .or_else(|| default_theme().radius.get("md"))
        .map(String::as_str)
        .unwrap_or_default();

    let mut css = String::from("@layer base {\n  :root {\n    /* Colors */\n");
    css.push_str(&declarations(&LIGHT_VARIABLES, colors));
    css.push_str("\n    /* Border Radius */\n");
    css.push_str(&format!("    --radius: {};\n  }}\n\n  .dark {{\n", radius));
    css.push_str(&declarations(&DARK_VARIABLES, colors));
    css.push_str("  }\n}\n\n");
    css.push_str(UTILITY_LAYER);
    css
}

fn declarations(table: &[(&str, Source)], colors: &ColorTokens) -> String {
    table
        .iter()
        .map(|(name, source)| {
            format!("    --{}: {};\n", name, hex_to_hsl(source.resolve(colors)))
        })
        .collect()
}
