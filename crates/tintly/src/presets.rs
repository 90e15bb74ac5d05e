//! Built-in starting themes.
//!
//! Presets are partial token sets: each defines the `500` step and
//! foreground of its ramps, the flat surface roles, and a single `md` entry
//! per scale. Exporters degrade gracefully for the steps a preset omits.

use once_cell::sync::Lazy;

use crate::tokens::{scale, ColorRamp, ColorTokens, Theme, Typography};

static PRESETS: Lazy<Vec<Theme>> = Lazy::new(build_presets);

/// Returns every preset, in display order.
pub fn all() -> &'static [Theme] {
    &PRESETS
}

/// Finds a preset by id (`default`, `dark`, `blue`, `green`, `purple`, `orange`).
///
/// # Example
///
/// ```rust
/// let ocean = tintly::presets::get("blue").unwrap();
/// assert_eq!(ocean.name, "Ocean Blue");
/// assert!(tintly::presets::get("neon").is_none());
/// ```
pub fn get(id: &str) -> Option<&'static Theme> {
    all().iter().find(|theme| theme.id.as_deref() == Some(id))
}

/// Returns the ids of every preset, in display order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    all().iter().filter_map(|theme| theme.id.as_deref())
}

struct Palette<'a> {
    primary: (&'a str, &'a str),
    secondary: (&'a str, &'a str),
    muted: (&'a str, &'a str),
    background: &'a str,
    foreground: &'a str,
    border: &'a str,
    ring: &'a str,
    destructive_foreground: &'a str,
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    colors: ColorTokens,
    radius: &str,
    shadow: &str,
) -> Theme {
    let mut theme = Theme::new(name)
        .with_description(description)
        .with_colors(colors)
        .with_typography(
            Typography::new()
                .font_family("sans", &["Inter", "ui-sans-serif", "system-ui", "sans-serif"])
                .font_size(scale(&[("base", "16px")])),
        )
        .with_spacing(scale(&[("md", "16px")]))
        .with_radius(scale(&[("md", radius)]))
        .with_shadows(scale(&[("md", shadow)]));
    theme.id = Some(id.to_string());
    theme
}

/// Colors shared by every preset except `orange`, which reshapes its surfaces.
fn palette_colors(p: Palette<'_>) -> ColorTokens {
    ColorTokens::new()
        .add(
            "primary",
            ColorRamp::new().step(500, p.primary.0).with_foreground(p.primary.1),
        )
        .add(
            "secondary",
            ColorRamp::new().step(500, p.secondary.0).with_foreground(p.secondary.1),
        )
        .add(
            "accent",
            ColorRamp::new().step(500, p.secondary.0).with_foreground(p.secondary.1),
        )
        .add(
            "muted",
            ColorRamp::new().step(100, p.muted.0).with_foreground(p.muted.1),
        )
        .add("background", p.background)
        .add("foreground", p.foreground)
        .add("border", p.border)
        .add("ring", p.ring)
        .add("destructive", "#ef4444")
        .add("destructive-foreground", p.destructive_foreground)
}

fn build_presets() -> Vec<Theme> {
    vec![
        preset(
            "default",
            "Default",
            "Clean and minimal shadcn/ui theme",
            palette_colors(Palette {
                primary: ("#0f172a", "#f8fafc"),
                secondary: ("#f1f5f9", "#0f172a"),
                muted: ("#f1f5f9", "#64748b"),
                background: "#ffffff",
                foreground: "#0f172a",
                border: "#e2e8f0",
                ring: "#0f172a",
                destructive_foreground: "#f8fafc",
            }),
            "6px",
            "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        ),
        preset(
            "dark",
            "Dark Mode",
            "Dark theme with high contrast",
            palette_colors(Palette {
                primary: ("#f8fafc", "#0f172a"),
                secondary: ("#1e293b", "#f8fafc"),
                muted: ("#1e293b", "#94a3b8"),
                background: "#0f172a",
                foreground: "#f8fafc",
                border: "#1e293b",
                ring: "#f8fafc",
                destructive_foreground: "#f8fafc",
            }),
            "6px",
            "0 4px 6px -1px rgb(0 0 0 / 0.3), 0 2px 4px -2px rgb(0 0 0 / 0.3)",
        ),
        preset(
            "blue",
            "Ocean Blue",
            "Calming blue color scheme",
            palette_colors(Palette {
                primary: ("#2563eb", "#ffffff"),
                secondary: ("#dbeafe", "#1e40af"),
                muted: ("#f0f9ff", "#64748b"),
                background: "#ffffff",
                foreground: "#0f172a",
                border: "#e0e7ff",
                ring: "#2563eb",
                destructive_foreground: "#ffffff",
            }),
            "8px",
            "0 4px 6px -1px rgb(37 99 235 / 0.1), 0 2px 4px -2px rgb(37 99 235 / 0.1)",
        ),
        preset(
            "green",
            "Forest Green",
            "Natural green color palette",
            palette_colors(Palette {
                primary: ("#059669", "#ffffff"),
                secondary: ("#d1fae5", "#064e3b"),
                muted: ("#f0fdf4", "#64748b"),
                background: "#ffffff",
                foreground: "#0f172a",
                border: "#dcfce7",
                ring: "#059669",
                destructive_foreground: "#ffffff",
            }),
            "8px",
            "0 4px 6px -1px rgb(5 150 105 / 0.1), 0 2px 4px -2px rgb(5 150 105 / 0.1)",
        ),
        preset(
            "purple",
            "Royal Purple",
            "Elegant purple theme",
            palette_colors(Palette {
                primary: ("#7c3aed", "#ffffff"),
                secondary: ("#ede9fe", "#581c87"),
                muted: ("#faf5ff", "#64748b"),
                background: "#ffffff",
                foreground: "#0f172a",
                border: "#e9d5ff",
                ring: "#7c3aed",
                destructive_foreground: "#ffffff",
            }),
            "12px",
            "0 4px 6px -1px rgb(124 58 237 / 0.1), 0 2px 4px -2px rgb(124 58 237 / 0.1)",
        ),
        preset(
            "orange",
            "Sunset Orange",
            "Warm orange color scheme",
            ColorTokens::new()
                .add(
                    "primary",
                    ColorRamp::new().step(500, "#ea580c").with_foreground("#ffffff"),
                )
                .add(
                    "secondary",
                    ColorRamp::new().step(500, "#fed7aa").with_foreground("#9a3412"),
                )
                .add(
                    "accent",
                    ColorRamp::new().step(500, "#fed7aa").with_foreground("#9a3412"),
                )
                .add(
                    "muted",
                    ColorRamp::new().step(100, "#fff7ed").with_foreground("#64748b"),
                )
                .add("background", "#ffffff")
                .add("foreground", "#0f172a")
                .add("border", "#fed7aa")
                .add("input", "#fed7aa")
                .add("ring", "#ea580c")
                .add(
                    "card",
                    ColorRamp::new().with("DEFAULT", "#ffffff").with_foreground("#0f172a"),
                )
                .add(
                    "popover",
                    ColorRamp::new().with("DEFAULT", "#ffffff").with_foreground("#0f172a"),
                )
                .add(
                    "destructive",
                    ColorRamp::new().with("DEFAULT", "#ef4444").with_foreground("#ffffff"),
                ),
            "6px",
            "0 4px 6px -1px rgb(234 88 12 / 0.1), 0 2px 4px -2px rgb(234 88 12 / 0.1)",
        ),
    ]
}
