//! Radiology reference catalog.
//!
//! The crate bundles a read-only catalog of classification and scoring systems
//! used in radiology reports (BI-RADS, LI-RADS, Fleischner, ...). Each entry
//! carries descriptive metadata plus an opaque markup payload that consumers
//! render as-is. Public functions here form the lookup contract: list
//! categories, resolve a category or entry by id, and filter entries by
//! category, subcategory, kind, modality, or name.

use anyhow::Result;
use std::path::Path;

pub mod catalog;
pub mod schema_loader;

pub use catalog::{
    CatalogIndex, Category, CategoryId, Entry, EntryFilter, EntryId, EntryKind, EntrySummary,
    FilteredEntries, Modality, ReferenceCatalog, builtin, load_catalog_from_path,
};

/// Environment variable naming a catalog file that replaces the bundled data.
pub const CATALOG_ENV: &str = "RADREF_CATALOG";

/// All categories of the bundled catalog in display order.
pub fn all_categories() -> &'static [Category] {
    builtin().categories()
}

/// Resolve a bundled category by id; `None` when absent.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    builtin().category(id)
}

/// Resolve a bundled entry by id; `None` when absent.
pub fn entry_by_id(id: &str) -> Option<&'static Entry> {
    builtin().entry(id)
}

/// Filter the bundled catalog.
pub fn filter_entries(filter: &EntryFilter) -> FilteredEntries<'_> {
    builtin().filter(filter)
}

/// Either a catalog loaded from disk or the bundled one.
pub enum CatalogSource {
    Bundled(&'static CatalogIndex),
    File(Box<CatalogIndex>),
}

impl CatalogSource {
    /// Load `path` when given, otherwise fall back to the bundled catalog.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(CatalogSource::File(Box::new(CatalogIndex::load(path)?))),
            None => Ok(CatalogSource::Bundled(builtin())),
        }
    }

    pub fn index(&self) -> &CatalogIndex {
        match self {
            CatalogSource::Bundled(index) => index,
            CatalogSource::File(index) => index,
        }
    }
}
