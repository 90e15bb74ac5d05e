//! Design-token model.
//!
//! This module provides:
//!
//! - [`Theme`]: a named bundle of the five token groups
//! - [`ColorTokens`], [`ColorValue`], [`ColorRamp`]: the color group
//! - [`Typography`]: font stacks and type scales
//! - [`ScaleMap`]: the label-to-CSS-value map used by spacing, radius and shadows
//! - [`default_theme`]: the reference template new themes start from

mod colors;
mod defaults;
mod theme;
mod typography;

pub use colors::{ColorRamp, ColorTokens, ColorValue};
pub use defaults::{default_theme, DEFAULT_THEME_NAME};
pub use theme::Theme;
pub use typography::Typography;

use indexmap::IndexMap;

/// Scale label (`sm`, `md`, `2xl`, ...) to CSS value, in authoring order.
pub type ScaleMap = IndexMap<String, String>;

/// Builds a [`ScaleMap`] from `(label, value)` pairs.
pub fn scale(entries: &[(&str, &str)]) -> ScaleMap {
    entries
        .iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}
