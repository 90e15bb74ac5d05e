//! Design-token JSON document generator.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use crate::tokens::{Theme, DEFAULT_THEME_NAME};

/// Schema version written into every token document.
pub const TOKENS_VERSION: &str = "1.0.0";

/// Generator name recorded in the document metadata.
pub const GENERATOR_NAME: &str = "Tintly Theme Generator";

/// Renders the token document stamped with the current time.
pub fn tokens_json(theme: &Theme) -> String {
    tokens_json_at(theme, Utc::now())
}

/// Renders the token document with an explicit generation timestamp.
///
/// All five token groups are written verbatim under `tokens`. An empty
/// name becomes `Untitled Theme` and a missing description becomes `""`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tintly::{default_theme, tokens_json_at};
///
/// let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let doc = tokens_json_at(default_theme(), at);
/// assert!(doc.contains("\"generatedAt\": \"2024-05-01T12:00:00.000Z\""));
/// ```
pub fn tokens_json_at(theme: &Theme, generated_at: DateTime<Utc>) -> String {
    let name = if theme.name.is_empty() {
        DEFAULT_THEME_NAME
    } else {
        theme.name.as_str()
    };
    let document = json!({
        "name": name,
        "description": theme.description.as_deref().unwrap_or_default(),
        "version": TOKENS_VERSION,
        "tokens": {
            "colors": theme.colors,
            "typography": theme.typography,
            "spacing": theme.spacing,
            "radius": theme.radius,
            "shadows": theme.shadows,
        },
        "metadata": {
            "generatedAt": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "generator": GENERATOR_NAME,
        },
    });
    format!("{:#}", document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::default_theme;
    use chrono::TimeZone;
    use serde_json::Value;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_document_header_fields() {
        let theme = Theme::new("Ocean Blue").with_description("Calming");
        let value: Value = serde_json::from_str(&tokens_json_at(&theme, fixed_time())).unwrap();
        assert_eq!(value["name"], "Ocean Blue");
        assert_eq!(value["description"], "Calming");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["metadata"]["generator"], GENERATOR_NAME);
        assert_eq!(value["metadata"]["generatedAt"], "2024-05-01T12:30:45.000Z");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let value: Value =
            serde_json::from_str(&tokens_json_at(&Theme::default(), fixed_time())).unwrap();
        assert_eq!(value["name"], DEFAULT_THEME_NAME);
        assert_eq!(value["description"], "");
    }

    #[test]
    fn test_blank_name_is_kept() {
        let value: Value =
            serde_json::from_str(&tokens_json_at(&Theme::new("   "), fixed_time())).unwrap();
        assert_eq!(value["name"], "   ");
    }

    #[test]
    fn test_key_order() {
        let output = tokens_json_at(default_theme(), fixed_time());
        let positions: Vec<usize> = ["\"name\"", "\"description\"", "\"version\"", "\"tokens\"", "\"metadata\""]
            .iter()
            .map(|key| output.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.starts_with("{\n  \"name\": "));
    }

    #[test]
    fn test_same_timestamp_is_deterministic() {
        let theme = default_theme();
        assert_eq!(
            tokens_json_at(theme, fixed_time()),
            tokens_json_at(theme, fixed_time())
        );
    }
}
