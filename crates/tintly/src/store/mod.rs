//! Theme persistence interface.
//!
//! The export engine never touches storage; callers fetch a [`Theme`]
//! through a [`ThemeStore`] and hand the snapshot to the exporters.
//! [`MemoryThemeStore`] is the in-process implementation.

mod memory;

pub use memory::MemoryThemeStore;

use serde::Deserialize;

use crate::tokens::{default_theme, ColorTokens, ScaleMap, Theme, Typography};

/// Longest accepted theme name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted theme description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Errors raised by a [`ThemeStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The draft or patch failed validation.
    #[error("invalid theme: {0}")]
    Validation(String),
    /// A token group could not be encoded to or decoded from its stored text.
    #[error("failed to convert {group} tokens")]
    Serialization {
        group: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// Another thread panicked while holding the store lock.
    #[error("theme store lock poisoned")]
    Poisoned,
}

/// Create/read/update/delete access to themes keyed by id.
///
/// Lookups of unknown ids are not errors: `get` and `update` return
/// `Ok(None)` and `delete` returns `Ok(false)`.
pub trait ThemeStore: Send + Sync {
    /// All themes, most recently updated first.
    fn list(&self) -> Result<Vec<Theme>, StoreError>;

    fn get(&self, id: &str) -> Result<Option<Theme>, StoreError>;

    /// Stores a new theme. Omitted token groups are taken from the
    /// default template. The store assigns the id and timestamps.
    fn create(&self, draft: ThemeDraft) -> Result<Theme, StoreError>;

    /// Applies a patch. Each provided group replaces the stored group
    /// wholesale; groups are never merged.
    fn update(&self, id: &str, patch: ThemePatch) -> Result<Option<Theme>, StoreError>;

    /// Removes a theme, returning whether it existed.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// The template new themes start from.
    fn default_template(&self) -> Theme {
        default_theme().clone()
    }
}

/// Input for [`ThemeStore::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: Option<ColorTokens>,
    #[serde(default)]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub spacing: Option<ScaleMap>,
    #[serde(default)]
    pub radius: Option<ScaleMap>,
    #[serde(default)]
    pub shadows: Option<ScaleMap>,
}

impl ThemeDraft {
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
        self.colors = Some(colors);
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn with_spacing(mut self, spacing: ScaleMap) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_radius(mut self, radius: ScaleMap) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_shadows(mut self, shadows: ScaleMap) -> Self {
        self.shadows = Some(shadows);
        self
    }

    /// Checks name and description limits.
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

impl From<Theme> for ThemeDraft {
    fn from(theme: Theme) -> Self {
        Self {
            name: theme.name,
            description: theme.description,
            colors: Some(theme.colors),
            typography: Some(theme.typography),
            spacing: Some(theme.spacing),
            radius: Some(theme.radius),
            shadows: Some(theme.shadows),
        }
    }
}

/// Input for [`ThemeStore::update`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: Option<ColorTokens>,
    #[serde(default)]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub spacing: Option<ScaleMap>,
    #[serde(default)]
    pub radius: Option<ScaleMap>,
    #[serde(default)]
    pub shadows: Option<ScaleMap>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn colors(mut self, colors: ColorTokens) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn spacing(mut self, spacing: ScaleMap) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn radius(mut self, radius: ScaleMap) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn shadows(mut self, shadows: ScaleMap) -> Self {
        self.shadows = Some(shadows);
        self
    }

    /// Checks the limits of whichever of name and description are present.
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_description(self.description.as_deref())
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::Validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> Result<(), StoreError> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(StoreError::Validation(
            format!("description must be at most {} characters", MAX_DESCRIPTION_LEN),
        )),
        _ => Ok(()),
    }
}
