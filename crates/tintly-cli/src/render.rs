//! Terminal listings rendered from MiniJinja templates.

use std::collections::HashMap;

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use tintly::{FormatInfo, Theme};

const FORMATS_TEMPLATE: &str = "\
{% for f in formats %}{{ f.key | style(\"key\") }}  {{ f.name | style(\"title\") }} {{ (\"(\" ~ f.fileName ~ \")\") | style(\"muted\") }}
{{ f.description | detail }}
{% endfor %}";

const PRESETS_TEMPLATE: &str = "\
{% for p in presets %}{{ p.id | style(\"key\") }}  {{ p.name | style(\"title\") }}{% if p.description %}
{{ p.description | style(\"muted\") | detail }}{% endif %}
{% endfor %}";

const WROTE_TEMPLATE: &str = "\
{{ \"Exported\" | style(\"ok\") }} {{ theme | style(\"title\") }} as {{ format | style(\"key\") }} to {{ path }}";

#[derive(Debug, Serialize)]
pub struct WroteFile {
    pub theme: String,
    pub format: &'static str,
    pub path: String,
}

/// Indent of the detail line under each listing entry.
const DETAIL_INDENT: usize = 10;

/// Renders the CLI listings with named console styles.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer, colorizing only when stdout supports it.
    pub fn new() -> Result<Self, Error> {
        Self::with_color(console::colors_enabled())
    }

    pub fn with_color(use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, default_styles(), use_color);
        env.add_template("formats", FORMATS_TEMPLATE)?;
        env.add_template("presets", PRESETS_TEMPLATE)?;
        env.add_template("wrote", WROTE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    pub fn formats(&self, formats: &[FormatInfo]) -> Result<String, Error> {
        self.render("formats", &minijinja::context! { formats })
    }

    pub fn presets(&self, presets: &[Theme]) -> Result<String, Error> {
        self.render("presets", &minijinja::context! { presets })
    }
}

fn default_styles() -> HashMap<&'static str, Style> {
    HashMap::from([
        ("key", Style::new().cyan().bold()),
        ("title", Style::new().bold()),
        ("muted", Style::new().dim()),
        ("ok", Style::new().green()),
    ])
}

fn register_filters(
    env: &mut Environment<'static>,
    styles: HashMap<&'static str, Style>,
    use_color: bool,
) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match styles.get(name.as_str()) {
            Some(style) => style
                .apply_to(text)
                .force_styling(use_color)
                .to_string(),
            None => text,
        }
    });

    env.add_filter("detail", |value: Value| -> String {
        format!("{:width$}{}", "", value, width = DETAIL_INDENT)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::with_color(false).unwrap()
    }

    #[test]
    fn test_formats_listing_plain() {
        let rows = vec![FormatInfo {
            key: "css",
            name: "CSS Variables",
            description: "CSS custom properties",
            file_extension: "css",
            file_name: "theme.css".into(),
        }];
        let out = plain().formats(&rows).unwrap();
        assert_eq!(
            out,
            "css  CSS Variables (theme.css)\n          CSS custom properties\n"
        );
    }

    #[test]
    fn test_presets_listing_skips_missing_description() {
        let mut dark = Theme::new("Dark Mode");
        dark.id = Some("dark".into());
        let mut blue = Theme::new("Ocean Blue").with_description("Cool blues");
        blue.id = Some("blue".into());
        let rows = vec![dark, blue];
        let out = plain().presets(&rows).unwrap();
        assert_eq!(
            out,
            "dark  Dark Mode\nblue  Ocean Blue\n          Cool blues\n"
        );
    }

    #[test]
    fn test_style_filter_colors_when_enabled() {
        let renderer = Renderer::with_color(true).unwrap();
        let out = renderer
            .render(
                "wrote",
                &WroteFile {
                    theme: "Ocean".into(),
                    format: "css",
                    path: "ocean.css".into(),
                },
            )
            .unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("ocean.css"));
    }

    #[test]
    fn test_unknown_style_passes_through() {
        let mut env = Environment::new();
        register_filters(&mut env, default_styles(), true);
        let out = env
            .render_str(r#"{{ "x" | style("nope") }}"#, ())
            .unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn test_unknown_template_errors() {
        assert!(plain().render("missing", &()).is_err());
    }
}
