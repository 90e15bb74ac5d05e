//! Reference template used when a theme omits token groups.

use once_cell::sync::Lazy;

use super::{scale, ColorRamp, ColorTokens, Theme, Typography};

/// Name given to themes created without one.
pub const DEFAULT_THEME_NAME: &str = "Untitled Theme";

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(build_default_theme);

/// Returns the reference template: shadcn/ui roles over Tailwind palettes.
///
/// The template is built once and shared; clone it to customize.
///
/// # Example
///
/// ```rust
/// use tintly::default_theme;
///
/// let theme = default_theme();
/// assert_eq!(theme.colors.step("primary", "500"), Some("#0ea5e9"));
/// assert_eq!(theme.radius["md"], "0.375rem");
/// ```
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

fn build_default_theme() -> Theme {
    let colors = ColorTokens::new()
        .add(
            "primary",
            ColorRamp::from_steps(
                &[
                    (50, "#f0f9ff"),
                    (100, "#e0f2fe"),
                    (500, "#0ea5e9"),
                    (600, "#0284c7"),
                    (900, "#0c4a6e"),
                ],
                "#ffffff",
            ),
        )
        .add(
            "secondary",
            ColorRamp::from_steps(
                &[
                    (50, "#f8fafc"),
                    (100, "#f1f5f9"),
                    (500, "#64748b"),
                    (600, "#475569"),
                    (900, "#0f172a"),
                ],
                "#ffffff",
            ),
        )
        .add(
            "accent",
            ColorRamp::from_steps(
                &[
                    (50, "#fefce8"),
                    (100, "#fef3c7"),
                    (500, "#eab308"),
                    (600, "#ca8a04"),
                    (900, "#713f12"),
                ],
                "#000000",
            ),
        )
        .add(
            "muted",
            ColorRamp::from_steps(
                &[
                    (50, "#f9fafb"),
                    (100, "#f3f4f6"),
                    (500, "#6b7280"),
                    (600, "#4b5563"),
                    (900, "#111827"),
                ],
                "#374151",
            ),
        )
        .add("background", "#ffffff")
        .add("foreground", "#09090b")
        .add("card", "#ffffff")
        .add("card-foreground", "#09090b")
        .add("popover", "#ffffff")
        .add("popover-foreground", "#09090b")
        .add("border", "#e4e4e7")
        .add("input", "#e4e4e7")
        .add("ring", "#0ea5e9")
        .add("destructive", "#ef4444")
        .add("destructive-foreground", "#fef2f2");

    let typography = Typography::new()
        .font_family("sans", &["Inter", "ui-sans-serif", "system-ui"])
        .font_family("mono", &["JetBrains Mono", "ui-monospace", "Consolas"])
        .font_size(scale(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
        ]))
        .font_weight(scale(&[
            ("normal", "400"),
            ("medium", "500"),
            ("semibold", "600"),
            ("bold", "700"),
        ]))
        .line_height(scale(&[
            ("tight", "1.25"),
            ("normal", "1.5"),
            ("relaxed", "1.75"),
        ]));

    Theme::new(DEFAULT_THEME_NAME)
        .with_colors(colors)
        .with_typography(typography)
        .with_spacing(scale(&[
            ("xs", "0.5rem"),
            ("sm", "0.75rem"),
            ("md", "1rem"),
            ("lg", "1.5rem"),
            ("xl", "2rem"),
            ("2xl", "3rem"),
            ("3xl", "4rem"),
        ]))
        .with_radius(scale(&[
            ("none", "0px"),
            ("sm", "0.125rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("xl", "0.75rem"),
            ("full", "9999px"),
        ]))
        .with_shadows(scale(&[
            ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
            ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1)"),
            ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1)"),
            ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1)"),
        ]))
}
