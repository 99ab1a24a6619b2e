//! Indexed, read-only view of a reference catalog.
//!
//! The index is the query surface consumers use: category and entry lookup by
//! id, attribute filtering, and a few listing helpers. Construction from an
//! untrusted catalog is strict about duplicate ids and dangling category
//! references so a lookup by id is never ambiguous.

use crate::catalog::filter::{EntryFilter, FilteredEntries};
use crate::catalog::identity::{CategoryId, EntryId, Modality};
use crate::catalog::model::{Category, Entry, EntrySummary, ReferenceCatalog};
use crate::catalog::{data, load_catalog_from_path};
use crate::schema_loader::{SchemaValidator, bundled_catalog_schema};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

#[derive(Debug)]
/// Reference catalog plus derived indexes keyed by category and entry id.
pub struct CatalogIndex {
    catalog: ReferenceCatalog,
    categories_by_id: BTreeMap<CategoryId, usize>,
    entries_by_id: BTreeMap<EntryId, (usize, usize)>,
}

static BUILTIN: LazyLock<CatalogIndex> =
    LazyLock::new(|| CatalogIndex::assemble(data::reference_catalog()));

/// The catalog bundled with the crate, built on first access.
pub fn builtin() -> &'static CatalogIndex {
    &BUILTIN
}

impl CatalogIndex {
    /// Validate `catalog` and build its id indexes.
    ///
    /// Rejects empty catalogs, blank ids or names, duplicate category or entry
    /// ids, and entries whose `category` does not name their containing
    /// category.
    pub fn new(catalog: ReferenceCatalog) -> Result<Self> {
        validate_catalog(&catalog)?;
        Ok(Self::assemble(catalog))
    }

    /// Load a catalog file, checking it against the bundled JSON Schema before
    /// the structural invariants.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        let index = Self::new(catalog)
            .inspect_err(|err| tracing::warn!(path = %path.display(), "rejected catalog: {err:#}"))
            .with_context(|| format!("validating {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            categories = index.catalog.categories.len(),
            entries = index.entries_by_id.len(),
            "loaded catalog file"
        );
        Ok(index)
    }

    // Callers must have validated `catalog`; duplicates resolve to the first
    // occurrence rather than failing.
    fn assemble(catalog: ReferenceCatalog) -> Self {
        let mut categories_by_id = BTreeMap::new();
        let mut entries_by_id = BTreeMap::new();
        for (cat_idx, category) in catalog.categories.iter().enumerate() {
            categories_by_id
                .entry(category.id.clone())
                .or_insert(cat_idx);
            for (entry_idx, entry) in category.entries.iter().enumerate() {
                entries_by_id
                    .entry(entry.id.clone())
                    .or_insert((cat_idx, entry_idx));
            }
        }
        tracing::debug!(
            categories = categories_by_id.len(),
            entries = entries_by_id.len(),
            "indexed reference catalog"
        );
        Self {
            catalog,
            categories_by_id,
            entries_by_id,
        }
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    /// Resolve a category by id.
    ///
    /// Returns `None` for unknown ids (including the empty string); callers
    /// render their own not-found state.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories_by_id
            .get(id)
            .map(|&idx| &self.catalog.categories[idx])
    }

    /// Resolve an entry by id across every category.
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries_by_id
            .get(id)
            .map(|&(cat, entry)| &self.catalog.categories[cat].entries[entry])
    }

    /// Every entry, category order first, then entry order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.catalog.entries()
    }

    /// Entries matching every criterion in `filter`.
    pub fn filter<'a>(&'a self, filter: &'a EntryFilter) -> FilteredEntries<'a> {
        FilteredEntries::new(&self.catalog.categories, filter)
    }

    /// Distinct subcategory tags used inside a category, in first-seen order.
    pub fn subcategories(&self, category_id: &str) -> Option<Vec<&str>> {
        let category = self.category(category_id)?;
        let mut seen = BTreeSet::new();
        Some(
            category
                .entries
                .iter()
                .filter_map(|entry| entry.subcategory.as_deref())
                .filter(|tag| seen.insert(*tag))
                .collect(),
        )
    }

    /// Distinct modality codes used anywhere in the catalog, sorted.
    pub fn modalities(&self) -> BTreeSet<&Modality> {
        self.entries()
            .filter_map(|entry| entry.modality.as_ref())
            .flatten()
            .collect()
    }

    /// Content-free listing of every entry.
    pub fn summary(&self) -> Vec<EntrySummary> {
        self.entries().map(Entry::summary).collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries_by_id.len()
    }

    /// Access the underlying catalog tree (for export).
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }
}

fn validate_catalog(catalog: &ReferenceCatalog) -> Result<()> {
    if catalog.categories.is_empty() {
        bail!("catalog contains no categories");
    }

    let mut category_ids: BTreeSet<&CategoryId> = BTreeSet::new();
    let mut entry_owner: BTreeMap<&EntryId, &CategoryId> = BTreeMap::new();
    for category in &catalog.categories {
        if category.id.0.trim().is_empty() {
            bail!("encountered category with no id");
        }
        if category.name.trim().is_empty() {
            bail!("category {} has an empty name", category.id);
        }
        if !category_ids.insert(&category.id) {
            bail!("duplicate category id {}", category.id);
        }

        for entry in &category.entries {
            if entry.id.0.trim().is_empty() {
                bail!("category {} contains an entry with no id", category.id);
            }
            if entry.name.trim().is_empty() {
                bail!("entry {} has an empty name", entry.id);
            }
            if entry.category != category.id {
                bail!(
                    "entry {} declares category {} but is listed under {}",
                    entry.id,
                    entry.category,
                    category.id
                );
            }
            if let Some(previous) = entry_owner.insert(&entry.id, &category.id) {
                bail!(
                    "duplicate entry id {} (in {} and {})",
                    entry.id,
                    previous,
                    category.id
                );
            }
        }
    }
    Ok(())
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema: &SchemaValidator = bundled_catalog_schema()?;
    let errors = schema.violations(&catalog_value);
    if !errors.is_empty() {
        bail!(
            "reference catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            errors.join("\n")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::identity::EntryKind;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(id: &str, category: &str) -> Entry {
        Entry::new(id, id, category, EntryKind::Informative)
    }

    #[test]
    fn builtin_catalog_passes_strict_validation() {
        let index = CatalogIndex::new(data::reference_catalog()).expect("builtin catalog valid");
        assert_eq!(index.entry_count(), builtin().entry_count());
        assert_eq!(index.categories(), builtin().categories());
    }

    #[test]
    fn rejects_duplicate_entry_ids_across_categories() {
        let catalog = ReferenceCatalog::new(vec![
            Category::new("a", "A", "icon", vec![entry("dup", "a")]),
            Category::new("b", "B", "icon", vec![entry("dup", "b")]),
        ]);
        let err = CatalogIndex::new(catalog).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate entry id dup"));
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let catalog = ReferenceCatalog::new(vec![
            Category::new("a", "A", "icon", vec![]),
            Category::new("a", "Again", "icon", vec![]),
        ]);
        let err = CatalogIndex::new(catalog).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate category id a"));
    }

    #[test]
    fn rejects_mismatched_back_reference() {
        let catalog = ReferenceCatalog::new(vec![
            Category::new("a", "A", "icon", vec![entry("x", "b")]),
            Category::new("b", "B", "icon", vec![]),
        ]);
        let err = CatalogIndex::new(catalog).expect_err("misplaced entry should fail");
        assert!(err.to_string().contains("declares category b"));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = CatalogIndex::new(ReferenceCatalog::new(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }

    #[test]
    fn subcategories_keep_first_seen_order() {
        let catalog = ReferenceCatalog::new(vec![Category::new(
            "a",
            "A",
            "icon",
            vec![
                entry("1", "a").with_subcategory("Spine"),
                entry("2", "a"),
                entry("3", "a").with_subcategory("Brain"),
                entry("4", "a").with_subcategory("Spine"),
            ],
        )]);
        let index = CatalogIndex::new(catalog).unwrap();
        assert_eq!(index.subcategories("a"), Some(vec!["Spine", "Brain"]));
        assert_eq!(index.subcategories("missing"), None);
    }

    #[test]
    fn load_rejects_schema_violation() {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(
            &mut file,
            &json!({
                "categories": [{
                    "id": "a", "name": "A", "icon": "i",
                    "entries": [{"id": "x", "name": "X", "category": "a",
                                 "kind": "calculator", "content": ""}]
                }]
            }),
        )
        .unwrap();
        file.flush().unwrap();
        let err = CatalogIndex::load(file.path()).expect_err("bad kind should fail");
        assert!(err.to_string().contains("failed schema validation"));
    }
}
