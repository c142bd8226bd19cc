/// Read-only lookup data consulted while enriching course records.
///
/// A `Catalog` is built once at startup (built-in tables, optionally merged with an
/// operator-supplied override file) and then passed by reference to the record
/// builder. Nothing mutates it after construction.
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CatalogError;
use crate::tables::{CATEGORY_ICONS, DEFAULT_CATEGORY, DEFAULT_ICON, ORIGIN_SCHOOLS};

#[derive(Debug, Clone)]
pub struct Catalog {
    schools: HashMap<String, String>,
    icons: HashMap<String, String>,
    default_category: String,
    default_icon: String,
}

/// Shape of the optional override file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogOverrides {
    pub schools: HashMap<String, String>,
    pub icons: HashMap<String, String>,
    pub default_category: Option<String>,
    pub default_icon: Option<String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            schools: to_owned_map(ORIGIN_SCHOOLS),
            icons: to_owned_map(CATEGORY_ICONS),
            default_category: DEFAULT_CATEGORY.to_string(),
            default_icon: DEFAULT_ICON.to_string(),
        }
    }

    /// Built-in tables merged with the overrides stored at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: CatalogOverrides =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            schools = overrides.schools.len(),
            icons = overrides.icons.len(),
            "catalog overrides loaded"
        );
        Ok(Self::builtin().with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: CatalogOverrides) -> Self {
        self.schools.extend(overrides.schools);
        self.icons.extend(overrides.icons);
        if let Some(category) = overrides.default_category {
            self.default_category = category;
        }
        if let Some(icon) = overrides.default_icon {
            self.default_icon = icon;
        }
        self
    }

    /// Institution name for an origin token. Unknown origins are returned unchanged.
    pub fn school_for<'a>(&'a self, origin: &'a str) -> &'a str {
        self.schools.get(origin).map(String::as_str).unwrap_or(origin)
    }

    /// Icon filename for a category, falling back to the default icon.
    pub fn icon_for(&self, category: &str) -> &str {
        self.icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.default_icon)
    }

    /// Label assigned to courses without a resolved category.
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub fn default_icon(&self) -> &str {
        &self.default_icon
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
