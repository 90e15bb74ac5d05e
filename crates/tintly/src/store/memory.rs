//! In-memory theme store.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{StoreError, ThemeDraft, ThemePatch, ThemeStore};
use crate::tokens::{default_theme, Theme};

/// A stored theme. Each token group is kept as its own JSON document, the
/// way a single-table datastore would hold it.
#[derive(Debug, Clone)]
struct ThemeRow {
    id: String,
    name: String,
    description: Option<String>,
    colors: String,
    typography: String,
    spacing: String,
    radius: String,
    shadows: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ThemeRow {
    fn decode(&self) -> Result<Theme, StoreError> {
        Ok(Theme {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            colors: decode("colors", &self.colors)?,
            typography: decode("typography", &self.typography)?,
            spacing: decode("spacing", &self.spacing)?,
            radius: decode("radius", &self.radius)?,
            shadows: decode("shadows", &self.shadows)?,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        })
    }
}

fn encode<T: Serialize>(group: &'static str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialization { group, source })
}

fn decode<T: DeserializeOwned>(group: &'static str, text: &str) -> Result<T, StoreError> {
    serde_json::from_str(text).map_err(|source| StoreError::Serialization { group, source })
}

/// A [`ThemeStore`] backed by a lock-protected map.
///
/// # Example
///
/// ```rust
/// use tintly::{MemoryThemeStore, ThemeDraft, ThemePatch, ThemeStore};
///
/// let store = MemoryThemeStore::new();
/// let theme = store.create(ThemeDraft::new("Ocean Blue")).unwrap();
/// let id = theme.id.clone().unwrap();
///
/// let renamed = store.update(&id, ThemePatch::new().name("Deep Ocean")).unwrap();
/// assert_eq!(renamed.unwrap().name, "Deep Ocean");
/// assert!(store.delete(&id).unwrap());
/// assert!(store.get(&id).unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    rows: RwLock<IndexMap<String, ThemeRow>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.rows.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn list(&self) -> Result<Vec<Theme>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        let mut ordered: Vec<&ThemeRow> = rows.values().collect();
        ordered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        ordered.into_iter().map(ThemeRow::decode).collect()
    }

    fn get(&self, id: &str) -> Result<Option<Theme>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        rows.get(id).map(ThemeRow::decode).transpose()
    }

    fn create(&self, draft: ThemeDraft) -> Result<Theme, StoreError> {
        draft.validate()?;
        let defaults = default_theme();
        let now = Utc::now();
        let row = ThemeRow {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            colors: encode("colors", draft.colors.as_ref().unwrap_or(&defaults.colors))?,
            typography: encode(
                "typography",
                draft.typography.as_ref().unwrap_or(&defaults.typography),
            )?,
            spacing: encode("spacing", draft.spacing.as_ref().unwrap_or(&defaults.spacing))?,
            radius: encode("radius", draft.radius.as_ref().unwrap_or(&defaults.radius))?,
            shadows: encode("shadows", draft.shadows.as_ref().unwrap_or(&defaults.shadows))?,
            created_at: now,
            updated_at: now,
        };
        let theme = row.decode()?;

        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        tracing::debug!(id = %row.id, name = %row.name, "created theme");
        rows.insert(row.id.clone(), row);
        Ok(theme)
    }

    fn update(&self, id: &str, patch: ThemePatch) -> Result<Option<Theme>, StoreError> {
        patch.validate()?;
        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        let Some(row) = rows.get_mut(id) else {
            return Ok(None);
        };

        // Encode every group before touching the row so a failure leaves it intact.
        let colors = patch.colors.as_ref().map(|v| encode("colors", v)).transpose()?;
        let typography = patch
            .typography
            .as_ref()
            .map(|v| encode("typography", v))
            .transpose()?;
        let spacing = patch.spacing.as_ref().map(|v| encode("spacing", v)).transpose()?;
        let radius = patch.radius.as_ref().map(|v| encode("radius", v)).transpose()?;
        let shadows = patch.shadows.as_ref().map(|v| encode("shadows", v)).transpose()?;

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(colors) = colors {
            row.colors = colors;
        }
        if let Some(typography) = typography {
            row.typography = typography;
        }
        if let Some(spacing) = spacing {
            row.spacing = spacing;
        }
        if let Some(radius) = radius {
            row.radius = radius;
        }
        if let Some(shadows) = shadows {
            row.shadows = shadows;
        }
        row.updated_at = Utc::now();

        tracing::debug!(id, "updated theme");
        row.decode().map(Some)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        let removed = rows.shift_remove(id).is_some();
        if removed {
            tracing::debug!(id, "deleted theme");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{scale, ColorRamp, ColorTokens};

    #[test]
    fn test_create_assigns_identity() {
        let store = MemoryThemeStore::new();
        let theme = store.create(ThemeDraft::new("Ocean")).unwrap();
        let id = theme.id.as_deref().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert!(theme.created_at.is_some());
        assert_eq!(theme.created_at, theme.updated_at);
    }

    #[test]
    fn test_create_fills_missing_groups_from_template() {
        let store = MemoryThemeStore::new();
        let spacing = scale(&[("md", "16px")]);
        let theme = store
            .create(ThemeDraft::new("Partial").with_spacing(spacing.clone()))
            .unwrap();
        assert_eq!(theme.spacing, spacing);
        assert_eq!(theme.colors, default_theme().colors);
        assert_eq!(theme.radius, default_theme().radius);
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let store = MemoryThemeStore::new();
        assert!(matches!(
            store.create(ThemeDraft::new("")),
            Err(StoreError::Validation(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_update_replaces_group_wholesale() {
        let store = MemoryThemeStore::new();
        let theme = store.create(ThemeDraft::new("Whole")).unwrap();
        let id = theme.id.unwrap();

        let colors = ColorTokens::new().add("primary", ColorRamp::new().step(500, "#2563eb"));
        let updated = store
            .update(&id, ThemePatch::new().colors(colors.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(updated.colors, colors);
        assert_eq!(updated.colors.flat("background"), None);
        assert_eq!(updated.name, "Whole");
        assert_eq!(updated.typography, default_theme().typography);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryThemeStore::new();
        let result = store.update("missing", ThemePatch::new().name("X")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let store = MemoryThemeStore::new();
        let id = store.create(ThemeDraft::new("Named")).unwrap().id.unwrap();
        assert!(store.update(&id, ThemePatch::new().name("")).is_err());
        assert_eq!(store.get(&id).unwrap().unwrap().name, "Named");
    }

    #[test]
    fn test_list_most_recent_first() {
        let store = MemoryThemeStore::new();
        let first = store.create(ThemeDraft::new("First")).unwrap().id.unwrap();
        store.create(ThemeDraft::new("Second")).unwrap();
        store
            .update(&first, ThemePatch::new().description("touched"))
            .unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_delete_is_independent() {
        let store = MemoryThemeStore::new();
        let a = store.create(ThemeDraft::new("A")).unwrap().id.unwrap();
        let b = store.create(ThemeDraft::new("B")).unwrap().id.unwrap();

        assert!(store.delete(&a).unwrap());
        assert!(!store.delete(&a).unwrap());
        assert!(store.get(&b).unwrap().is_some());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_default_template() {
        let store = MemoryThemeStore::new();
        assert_eq!(&store.default_template(), default_theme());
    }
}
