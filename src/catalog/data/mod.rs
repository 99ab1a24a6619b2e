//! Bundled catalog content.
//!
//! One module per category. Content strings are HTML fragments rendered by
//! the consumer; each ends with a `<footer class="citation">` block.

use crate::catalog::model::ReferenceCatalog;

mod abdomen;
mod chest;
mod measurements;
mod msk;
mod neuro;
mod oncology;
mod rads;
mod vascular;

/// Builds the bundled catalog in display order.
pub(crate) fn reference_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(vec![
        rads::category(),
        oncology::category(),
        neuro::category(),
        chest::category(),
        abdomen::category(),
        msk::category(),
        vascular::category(),
        measurements::category(),
    ])
}
