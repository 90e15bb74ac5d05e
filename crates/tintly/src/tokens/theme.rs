//! The Theme record: identity plus five token groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ColorTokens, ScaleMap, Typography};

/// A named, identified bundle of design tokens.
///
/// Token groups that are missing from a document deserialize as empty
/// groups. Identity and timestamps are assigned by a
/// [`ThemeStore`](crate::ThemeStore); a theme built in memory has neither.
///
/// # Example
///
/// ```rust
/// use tintly::{ColorRamp, ColorTokens, Theme};
///
/// let theme = Theme::new("Ocean Blue")
///     .with_description("Calming blue color scheme")
///     .with_colors(
///         ColorTokens::new()
///             .add("primary", ColorRamp::new().step(500, "#2563eb").with_foreground("#ffffff"))
///             .add("background", "#ffffff"),
///     );
///
/// assert_eq!(theme.colors.step("primary", "500"), Some("#2563eb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub spacing: ScaleMap,
    #[serde(default)]
    pub radius: ScaleMap,
    #[serde(default)]
    pub shadows: ScaleMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Theme {
    /// Creates a theme with the given name and empty token groups.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_spacing(mut self, spacing: ScaleMap) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_radius(mut self, radius: ScaleMap) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_shadows(mut self, shadows: ScaleMap) -> Self {
        self.shadows = shadows;
        self
    }
}
