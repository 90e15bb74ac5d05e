//! Color token group: flat roles and lightness ramps.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::is_hex_color;

/// A color role expressed as lightness steps plus named entries.
///
/// Numeric steps (`50`, `100`, ... `900`) are kept in ascending order. Named
/// entries such as `foreground` or `DEFAULT` keep their insertion order and
/// always serialize after the numeric steps.
///
/// # Example
///
/// ```rust
/// use tintly::ColorRamp;
///
/// let ramp = ColorRamp::new()
///     .step(500, "#0ea5e9")
///     .step(50, "#f0f9ff")
///     .with_foreground("#ffffff");
///
/// assert_eq!(ramp.get("500"), Some("#0ea5e9"));
/// assert_eq!(ramp.foreground(), Some("#ffffff"));
/// assert_eq!(ramp.keys().collect::<Vec<_>>(), ["50", "500", "foreground"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRamp {
    steps: BTreeMap<u16, String>,
    named: IndexMap<String, String>,
}

impl ColorRamp {
    /// Creates an empty ramp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ramp from `(step, hex)` pairs and a foreground color.
    pub fn from_steps(steps: &[(u16, &str)], foreground: &str) -> Self {
        steps
            .iter()
            .fold(Self::new(), |ramp, (step, hex)| ramp.step(*step, *hex))
            .with_foreground(foreground)
    }

    /// Adds a numeric lightness step, returning the ramp for chaining.
    pub fn step(mut self, step: u16, hex: impl Into<String>) -> Self {
        self.steps.insert(step, hex.into());
        self
    }

    /// Sets the `foreground` entry, returning the ramp for chaining.
    pub fn with_foreground(self, hex: impl Into<String>) -> Self {
        self.with("foreground", hex)
    }

    /// Sets an arbitrary entry, returning the ramp for chaining.
    pub fn with(mut self, key: &str, hex: impl Into<String>) -> Self {
        self.insert(key, hex.into());
        self
    }

    /// Inserts an entry. Keys in canonical integer form become steps.
    pub fn insert(&mut self, key: &str, hex: String) {
        match step_key(key) {
            Some(step) => {
                self.steps.insert(step, hex);
            }
            None => {
                self.named.insert(key.to_string(), hex);
            }
        }
    }

    /// Looks up an entry by key (`"500"`, `"foreground"`, `"DEFAULT"`, ...).
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match step_key(key) {
            Some(step) => self.steps.get(&step),
            None => self.named.get(key),
        };
        value.map(String::as_str)
    }

    /// The contrasting `foreground` color, if present.
    pub fn foreground(&self) -> Option<&str> {
        self.get("foreground")
    }

    /// Iterates over keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, hex)` pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.steps
            .iter()
            .map(|(step, hex)| (step.to_string(), hex.as_str()))
            .chain(
                self.named
                    .iter()
                    .map(|(key, hex)| (key.clone(), hex.as_str())),
            )
    }

    pub fn len(&self) -> usize {
        self.steps.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.named.is_empty()
    }
}

/// Parses keys such as `"50"` or `"900"`; `"050"` stays a named key.
fn step_key(key: &str) -> Option<u16> {
    let step: u16 = key.parse().ok()?;
    (step.to_string() == key).then_some(step)
}

impl Serialize for ColorRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, hex) in self.iter() {
            map.serialize_entry(&key, hex)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorRamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RampVisitor;

        impl<'de> Visitor<'de> for RampVisitor {
            type Value = ColorRamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ramp steps to hex colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColorRamp, A::Error> {
                let mut ramp = ColorRamp::new();
                while let Some((RampKey(key), hex)) = access.next_entry::<RampKey, String>()? {
                    ramp.insert(&key, hex);
                }
                Ok(ramp)
            }
        }

        deserializer.deserialize_map(RampVisitor)
    }
}

/// A ramp key as written in a document. YAML writes `500:` as an integer.
struct RampKey(String);

impl<'de> Deserialize<'de> for RampKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = RampKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a ramp step number or key name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RampKey, E> {
                Ok(RampKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RampKey, E> {
                Ok(RampKey(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RampKey, E> {
                Ok(RampKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RampKey, E> {
                Ok(RampKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// A single color role: either one hex value or a ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Flat(String),
    Ramp(ColorRamp),
}

impl ColorValue {
    pub fn as_flat(&self) -> Option<&str> {
        match self {
            ColorValue::Flat(hex) => Some(hex.as_str()),
            ColorValue::Ramp(_) => None,
        }
    }

    pub fn as_ramp(&self) -> Option<&ColorRamp> {
        match self {
            ColorValue::Flat(_) => None,
            ColorValue::Ramp(ramp) => Some(ramp),
        }
    }
}

impl From<&str> for ColorValue {
    fn from(hex: &str) -> Self {
        ColorValue::Flat(hex.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(hex: String) -> Self {
        ColorValue::Flat(hex)
    }
}

impl From<ColorRamp> for ColorValue {
    fn from(ramp: ColorRamp) -> Self {
        ColorValue::Ramp(ramp)
    }
}

/// The `colors` token group: semantic role name to color value.
///
/// Role order is preserved exactly as inserted (or as read from a document),
/// so exported palettes list roles in the order the author wrote them.
///
/// Lookups never fail. Asking for a flat value of a ramp role, or a step of a
/// flat role, simply returns `None`, which the CSS exporter renders as the
/// neutral color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTokens(IndexMap<String, ColorValue>);

impl ColorTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role, returning the token group for chaining.
    pub fn add<V: Into<ColorValue>>(mut self, role: &str, value: V) -> Self {
        self.insert(role, value);
        self
    }

    /// Inserts or replaces a role. A replaced role keeps its position.
    pub fn insert<V: Into<ColorValue>>(&mut self, role: &str, value: V) {
        self.0.insert(role.to_string(), value.into());
    }

    pub fn get(&self, role: &str) -> Option<&ColorValue> {
        self.0.get(role)
    }

    /// The hex value of a flat role.
    pub fn flat(&self, role: &str) -> Option<&str> {
        self.get(role).and_then(ColorValue::as_flat)
    }

    /// The hex value of one entry of a ramp role.
    pub fn step(&self, role: &str, key: &str) -> Option<&str> {
        self.get(role)
            .and_then(ColorValue::as_ramp)
            .and_then(|ramp| ramp.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.0.iter().map(|(role, value)| (role.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lists every value that is not a `#`-prefixed 6-digit hex color.
    ///
    /// Paths are `role` for flat values and `role.key` for ramp entries.
    pub fn malformed(&self) -> Vec<(String, String)> {
        let mut found = Vec::new();
        for (role, value) in self.iter() {
            match value {
                ColorValue::Flat(hex) => {
                    if !is_hex_color(hex) {
                        found.push((role.to_string(), hex.clone()));
                    }
                }
                ColorValue::Ramp(ramp) => {
                    for (key, hex) in ramp.iter() {
                        if !is_hex_color(hex) {
                            found.push((format!("{}.{}", role, key), hex.to_string()));
                        }
                    }
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ramp_orders_steps_before_named() {
        let ramp = ColorRamp::new()
            .with_foreground("#ffffff")
            .step(900, "#0c4a6e")
            .step(50, "#f0f9ff");

        let keys: Vec<String> = ramp.keys().collect();
        assert_eq!(keys, ["50", "900", "foreground"]);
    }

    #[test]
    fn test_ramp_non_canonical_step_is_named() {
        let ramp = ColorRamp::new().with("050", "#ffffff");
        assert_eq!(ramp.get("050"), Some("#ffffff"));
        assert_eq!(ramp.get("50"), None);
    }

    #[test]
    fn test_ramp_deserialize_default_key() {
        let ramp: ColorRamp =
            serde_json::from_value(json!({ "DEFAULT": "#ef4444", "foreground": "#ffffff" }))
                .unwrap();
        assert_eq!(ramp.get("DEFAULT"), Some("#ef4444"));
        assert_eq!(ramp.foreground(), Some("#ffffff"));
    }

    #[test]
    fn test_ramp_rejects_non_string_values() {
        let result: Result<ColorRamp, _> = serde_json::from_value(json!({ "500": 12 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_ramp_serializes_numeric_keys_first() {
        let ramp: ColorRamp = serde_json::from_value(
            json!({ "foreground": "#ffffff", "500": "#0ea5e9", "100": "#e0f2fe" }),
        )
        .unwrap();
        let text = serde_json::to_string(&ramp).unwrap();
        assert_eq!(
            text,
            r##"{"100":"#e0f2fe","500":"#0ea5e9","foreground":"#ffffff"}"##
        );
    }

    #[test]
    fn test_color_value_untagged() {
        let flat: ColorValue = serde_json::from_value(json!("#ffffff")).unwrap();
        assert_eq!(flat.as_flat(), Some("#ffffff"));

        let ramp: ColorValue = serde_json::from_value(json!({ "500": "#0ea5e9" })).unwrap();
        assert_eq!(ramp.as_ramp().and_then(|r| r.get("500")), Some("#0ea5e9"));
    }

    #[test]
    fn test_tokens_lookup_mismatched_shape() {
        let colors = ColorTokens::new()
            .add("background", "#ffffff")
            .add("primary", ColorRamp::new().step(500, "#0ea5e9"));

        assert_eq!(colors.flat("background"), Some("#ffffff"));
        assert_eq!(colors.flat("primary"), None);
        assert_eq!(colors.step("primary", "500"), Some("#0ea5e9"));
        assert_eq!(colors.step("background", "500"), None);
        assert_eq!(colors.step("missing", "500"), None);
    }

    #[test]
    fn test_tokens_preserve_insertion_order() {
        let colors: ColorTokens = serde_json::from_str(
            r##"{"ring":"#000000","background":"#ffffff","border":"#e4e4e7"}"##,
        )
        .unwrap();
        let roles: Vec<&str> = colors.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, ["ring", "background", "border"]);
    }

    #[test]
    fn test_tokens_malformed() {
        let colors = ColorTokens::new()
            .add("background", "#fff")
            .add("ring", "#0ea5e9")
            .add("primary", ColorRamp::new().step(500, "blue"));

        let malformed = colors.malformed();
        assert_eq!(
            malformed,
            vec![
                ("background".to_string(), "#fff".to_string()),
                ("primary.500".to_string(), "blue".to_string()),
            ]
        );
    }
}
