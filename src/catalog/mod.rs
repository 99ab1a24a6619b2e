//! Reference catalog wiring.
//!
//! The bundled catalog lives in `data` as literal Rust so it cannot fail to
//! load; catalogs read from JSON go through the same types after schema and
//! invariant checks. Callers use `CatalogIndex` for lookups and filtering.

mod data;
pub mod filter;
pub mod identity;
pub mod index;
pub mod model;

pub use filter::{EntryFilter, FilteredEntries};
pub use identity::{CategoryId, EntryId, EntryKind, Modality};
pub use index::{CatalogIndex, builtin};
pub use model::{Category, Entry, EntrySummary, ReferenceCatalog};

pub use model::load_catalog_from_path;
