//! Typography token group.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ScaleMap;

/// Font stacks and type scales.
///
/// Each sub-map is optional: a theme that never set `lineHeight` has `None`
/// there, and the field is omitted again when the theme is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font role (`sans`, `mono`) to font names in fallback order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<ScaleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<ScaleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<ScaleMap>,
}

impl Typography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font stack for a role, returning the group for chaining.
    pub fn font_family(mut self, role: &str, fonts: &[&str]) -> Self {
        self.font_family
            .get_or_insert_with(IndexMap::new)
            .insert(role.to_string(), fonts.iter().map(|f| f.to_string()).collect());
        self
    }

    pub fn font_size(mut self, sizes: ScaleMap) -> Self {
        self.font_size = Some(sizes);
        self
    }

    pub fn font_weight(mut self, weights: ScaleMap) -> Self {
        self.font_weight = Some(weights);
        self
    }

    pub fn line_height(mut self, heights: ScaleMap) -> Self {
        self.line_height = Some(heights);
        self
    }
}
