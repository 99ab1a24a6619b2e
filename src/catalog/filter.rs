//! Attribute filtering over catalog entries.
//!
//! Criteria combine with AND; the modality criterion is an OR over its codes.
//! Filters deserialize from JSON so front-ends can pass query objects straight
//! through; unknown keys are ignored.

use crate::catalog::identity::{CategoryId, EntryKind, Modality};
use crate::catalog::model::{Category, Entry};
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
/// Optional criteria; `None` leaves that attribute unconstrained.
pub struct EntryFilter {
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub kind: Option<EntryKind>,
    /// Entry must carry at least one of these codes. An empty set matches nothing.
    #[serde(default)]
    pub modality: Option<BTreeSet<Modality>>,
    /// Case-insensitive substring of the entry name.
    #[serde(default)]
    pub name: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: &str) -> Self {
        self.category = Some(CategoryId::from(id));
        self
    }

    pub fn subcategory(mut self, tag: &str) -> Self {
        self.subcategory = Some(tag.to_string());
        self
    }

    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Adds `modality` to the accepted set.
    pub fn modality(mut self, modality: Modality) -> Self {
        self.modality
            .get_or_insert_with(BTreeSet::new)
            .insert(modality);
        self
    }

    pub fn name_contains(mut self, needle: &str) -> Self {
        self.name = Some(needle.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.subcategory.is_none()
            && self.kind.is_none()
            && self.modality.is_none()
            && self.name.is_none()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(category) = &self.category {
            if &entry.category != category {
                return false;
            }
        }
        if let Some(tag) = &self.subcategory {
            match &entry.subcategory {
                Some(sub) if sub.to_lowercase() == tag.to_lowercase() => {}
                _ => return false,
            }
        }
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(wanted) = &self.modality {
            if !wanted.iter().any(|modality| entry.has_modality(modality)) {
                return false;
            }
        }
        if let Some(needle) = &self.name {
            if !entry
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Lazy iterator over entries accepted by an `EntryFilter`.
///
/// Cloning yields an independent cursor at the same position, so a caller can
/// re-walk the results without re-running the query.
#[derive(Clone, Debug)]
pub struct FilteredEntries<'a> {
    filter: &'a EntryFilter,
    categories: std::slice::Iter<'a, Category>,
    current: std::slice::Iter<'a, Entry>,
}

impl<'a> FilteredEntries<'a> {
    pub(crate) fn new(categories: &'a [Category], filter: &'a EntryFilter) -> Self {
        Self {
            filter,
            categories: categories.iter(),
            current: Default::default(),
        }
    }
}

impl<'a> Iterator for FilteredEntries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.by_ref().find(|e| self.filter.matches(e)) {
                return Some(entry);
            }
            let category = self.categories.next()?;
            // Skip whole categories the filter pins away from.
            if let Some(wanted) = &self.filter.category {
                if &category.id != wanted {
                    continue;
                }
            }
            self.current = category.entries.iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Category> {
        vec![
            Category::new(
                "rads",
                "RADS",
                "clipboard",
                vec![
                    Entry::new("birads", "BI-RADS", "rads", EntryKind::Informative)
                        .with_subcategory("Breast")
                        .with_modality([Modality::Mg, Modality::Us]),
                    Entry::new("tirads", "ACR TI-RADS", "rads", EntryKind::Dynamic)
                        .with_modality([Modality::Us]),
                ],
            ),
            Category::new(
                "tools",
                "Tools",
                "ruler",
                vec![Entry::new("volume", "Ellipsoid volume", "tools", EntryKind::Dynamic)],
            ),
        ]
    }

    fn ids<'a>(iter: impl Iterator<Item = &'a Entry>) -> Vec<&'a str> {
        iter.map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_yields_everything_in_order() {
        let data = sample();
        let filter = EntryFilter::new();
        assert!(filter.is_empty());
        assert_eq!(
            ids(FilteredEntries::new(&data, &filter)),
            vec!["birads", "tirads", "volume"]
        );
    }

    #[test]
    fn criteria_are_anded() {
        let data = sample();
        let filter = EntryFilter::new()
            .kind(EntryKind::Dynamic)
            .modality(Modality::Us);
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["tirads"]);
    }

    #[test]
    fn modality_is_ored_and_excludes_untagged() {
        let data = sample();
        let filter = EntryFilter::new()
            .modality(Modality::Mg)
            .modality(Modality::Ct);
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["birads"]);

        let empty = EntryFilter {
            modality: Some(BTreeSet::new()),
            ..EntryFilter::default()
        };
        assert_eq!(FilteredEntries::new(&data, &empty).count(), 0);
    }

    #[test]
    fn hand_built_other_modality_matches_like_known_code() {
        let data = sample();
        let known = EntryFilter::new().modality(Modality::Us);
        let expected = ids(FilteredEntries::new(&data, &known));
        assert_eq!(expected, vec!["birads", "tirads"]);
        for raw in ["US", "us"] {
            let filter = EntryFilter::new().modality(Modality::Other(raw.to_string()));
            assert_eq!(ids(FilteredEntries::new(&data, &filter)), expected, "{raw}");
        }
    }

    #[test]
    fn name_and_subcategory_ignore_case() {
        let data = sample();
        let filter = EntryFilter::new().name_contains("ti-rads");
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["tirads"]);

        let filter = EntryFilter::new().subcategory("breast");
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["birads"]);
    }

    #[test]
    fn subcategory_and_name_fold_non_ascii_case() {
        let data = vec![Category::new(
            "chest",
            "Chest",
            "lungs",
            vec![
                Entry::new("tnm-torax", "Estadificación TNM", "chest", EntryKind::Informative)
                    .with_subcategory("Tórax"),
            ],
        )];
        let filter = EntryFilter::new().subcategory("TÓRAX");
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["tnm-torax"]);

        let filter = EntryFilter::new().name_contains("ESTADIFICACIÓN");
        assert_eq!(ids(FilteredEntries::new(&data, &filter)), vec!["tnm-torax"]);
    }

    #[test]
    fn cloned_cursor_restarts_independently() {
        let data = sample();
        let filter = EntryFilter::new().category("rads");
        let mut results = FilteredEntries::new(&data, &filter);
        let fresh = results.clone();
        assert_eq!(results.next().map(|e| e.id.as_str()), Some("birads"));
        assert_eq!(ids(fresh), vec!["birads", "tirads"]);
        assert_eq!(ids(results), vec!["tirads"]);
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let filter: EntryFilter = serde_json::from_value(json!({
            "kind": "informative",
            "modality": ["us"],
            "sort": "name"
        }))
        .unwrap();
        assert_eq!(filter.kind, Some(EntryKind::Informative));
        assert_eq!(filter.modality, Some(BTreeSet::from([Modality::Us])));
        assert!(filter.category.is_none());
    }
}
