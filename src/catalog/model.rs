//! Typed representation of the reference catalog.
//!
//! The same structs back the bundled catalog and catalogs read from JSON files,
//! so export and reload go through one serde shape. Use `CatalogIndex` for id
//! lookups and filtering; use these structs directly when the whole tree is
//! needed (export, rendering a category page).

use crate::catalog::identity::{CategoryId, EntryId, EntryKind, Modality};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Full catalog: categories in display order.
pub struct ReferenceCatalog {
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Named group of entries (usually a subspecialty or a family of systems).
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One classification or scoring system with its rendered reference table.
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub category: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<BTreeSet<Modality>>,
    /// Opaque markup; never interpreted by this crate.
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Content-free view of an entry for listings.
pub struct EntrySummary {
    pub id: EntryId,
    pub name: String,
    pub category: CategoryId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Vec<Modality>>,
}

impl ReferenceCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.categories
            .iter()
            .flat_map(|category| category.entries.iter())
    }

    pub fn to_json_value(&self) -> Result<Value> {
        serde_json::to_value(self).context("serializing reference catalog")
    }
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, entries: Vec<Entry>) -> Self {
        Self {
            id: CategoryId::from(id),
            name: name.to_string(),
            icon: icon.to_string(),
            entries,
        }
    }
}

impl Entry {
    pub fn new(id: &str, name: &str, category: &str, kind: EntryKind) -> Self {
        Self {
            id: EntryId::from(id),
            name: name.to_string(),
            category: CategoryId::from(category),
            subcategory: None,
            kind,
            modality: None,
            content: String::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: &str) -> Self {
        self.subcategory = Some(subcategory.to_string());
        self
    }

    pub fn with_modality<I>(mut self, modalities: I) -> Self
    where
        I: IntoIterator<Item = Modality>,
    {
        self.modality = Some(modalities.into_iter().collect());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// True when the entry carries a modality set containing `modality`.
    pub fn has_modality(&self, modality: &Modality) -> bool {
        self.modality
            .as_ref()
            .is_some_and(|set| set.contains(modality))
    }

    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            kind: self.kind,
            modality: self
                .modality
                .as_ref()
                .map(|set| set.iter().cloned().collect()),
        }
    }
}

/// Read and parse a catalog file without schema or invariant checks.
pub fn load_catalog_from_path(path: &Path) -> Result<ReferenceCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: ReferenceCatalog =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}
