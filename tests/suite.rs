// Integration suite for the reference catalog: identity invariants of the
// bundled data, the lookup/filter contract, catalog files, and the CLI.
mod support;

use anyhow::Result;
use radref::schema_loader::bundled_catalog_schema;
use radref::{
    CatalogIndex, CatalogSource, EntryFilter, EntryKind, Modality, ReferenceCatalog,
    all_categories, builtin, category_by_id, entry_by_id, filter_entries,
};
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};
use support::{radref_command, run_command, write_catalog};

// === bundled catalog invariants ===

#[test]
fn category_ids_are_unique() {
    let mut seen = BTreeSet::new();
    for category in all_categories() {
        assert!(
            seen.insert(category.id.as_str()),
            "duplicate category id {}",
            category.id
        );
    }
    assert!(!seen.is_empty());
}

#[test]
fn entry_ids_are_unique_across_categories() {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for category in all_categories() {
        for entry in &category.entries {
            if let Some(previous) = seen.insert(entry.id.as_str(), category.id.as_str()) {
                panic!(
                    "entry id {} appears in {} and {}",
                    entry.id, previous, category.id
                );
            }
        }
    }
    assert_eq!(seen.len(), builtin().entry_count());
}

#[test]
fn every_entry_references_exactly_its_containing_category() {
    for category in all_categories() {
        for entry in &category.entries {
            let owners: Vec<_> = all_categories()
                .iter()
                .filter(|candidate| candidate.id == entry.category)
                .collect();
            assert_eq!(owners.len(), 1, "entry {} has {} owners", entry.id, owners.len());
            assert_eq!(owners[0].id, category.id, "entry {} is misfiled", entry.id);
        }
    }
}

#[test]
fn bundled_entries_carry_content_and_citation() {
    for entry in builtin().entries() {
        assert!(!entry.name.trim().is_empty(), "{} has no name", entry.id);
        assert!(
            entry.content.contains("class=\"citation\""),
            "{} is missing a citation footer",
            entry.id
        );
    }
}

// === lookups ===

#[test]
fn category_lookup_resolves_every_id() {
    for category in all_categories() {
        let found = category_by_id(category.id.as_str()).expect("category present");
        assert_eq!(found.id, category.id);
        assert_eq!(found, category);
    }
}

#[test]
fn entry_lookup_resolves_every_id() {
    for entry in builtin().entries() {
        let found = entry_by_id(entry.id.as_str()).expect("entry present");
        assert_eq!(found, entry);
    }
}

#[test]
fn lookups_return_none_for_unknown_ids() {
    for id in ["", " ", "nonexistent-id-xyz", "RADS", " rads", "birads ", "BIRADS"] {
        assert!(category_by_id(id).is_none(), "category lookup matched {id:?}");
        assert!(entry_by_id(id).is_none(), "entry lookup matched {id:?}");
    }
}

#[test]
fn birads_resolves_to_rads_category() {
    let entry = entry_by_id("birads").expect("birads present");
    assert!(entry.name.contains("BI-RADS"));
    assert_eq!(entry.category.as_str(), "rads");
    assert_eq!(entry.kind, EntryKind::Informative);
    assert!(entry.has_modality(&Modality::Mg));
}

#[test]
fn nonexistent_id_is_not_found_for_both_lookups() {
    assert!(entry_by_id("nonexistent-id-xyz").is_none());
    assert!(category_by_id("nonexistent-id-xyz").is_none());
}

// === filtering ===

#[test]
fn kind_filter_matches_direct_enumeration() {
    for kind in [EntryKind::Informative, EntryKind::Dynamic] {
        let filter = EntryFilter::new().kind(kind);
        let filtered: Vec<_> = filter_entries(&filter).collect();
        assert!(filtered.iter().all(|entry| entry.kind == kind));
        let expected = builtin().entries().filter(|entry| entry.kind == kind).count();
        assert_eq!(filtered.len(), expected, "count mismatch for {kind}");
        assert!(expected > 0, "bundled catalog has no {kind} entries");
    }
}

#[test]
fn modality_filter_excludes_untagged_entries() {
    let filter = EntryFilter::new().modality(Modality::Us);
    let filtered: Vec<_> = filter_entries(&filter).collect();
    assert!(!filtered.is_empty());
    for entry in &filtered {
        assert!(entry.has_modality(&Modality::Us), "{} lacks US", entry.id);
    }
    assert!(
        builtin().entries().any(|entry| entry.modality.is_none()),
        "fixture expects at least one untagged entry"
    );
    assert!(filtered.iter().all(|entry| entry.modality.is_some()));
    let expected = builtin()
        .entries()
        .filter(|entry| entry.has_modality(&Modality::Us))
        .count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn modality_filter_ors_codes_and_ands_with_category() {
    let filter = EntryFilter::new()
        .category("rads")
        .modality(Modality::Ct)
        .modality(Modality::Mri);
    let ids: BTreeSet<_> = filter_entries(&filter)
        .map(|entry| entry.id.as_str())
        .collect();
    assert!(ids.contains("lirads"));
    assert!(ids.contains("pirads"));
    assert!(ids.contains("birads"));
    assert!(!ids.contains("tirads"));
    assert!(!ids.contains("fleischner"));
}

#[test]
fn name_filter_is_case_insensitive() {
    let filter = EntryFilter::new().name_contains("bi-rads");
    let ids: Vec<_> = filter_entries(&filter).map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["birads"]);
}

#[test]
fn filter_from_json_ignores_unknown_keys() -> Result<()> {
    let filter: EntryFilter = serde_json::from_value(json!({
        "category": "neuro",
        "subcategory": "spine",
        "page": 3
    }))?;
    let ids: Vec<_> = filter_entries(&filter).map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["modic", "pfirrmann"]);
    Ok(())
}

#[test]
fn queries_are_idempotent_and_restartable() {
    let filter = EntryFilter::new().kind(EntryKind::Dynamic);
    let results = filter_entries(&filter);
    let first: Vec<_> = results.clone().collect();
    let second: Vec<_> = results.collect();
    let third: Vec<_> = filter_entries(&filter).collect();
    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(all_categories(), all_categories());
    assert_eq!(entry_by_id("lirads"), entry_by_id("lirads"));
}

#[test]
fn subcategories_and_modalities_summarize_catalog() {
    let rads = builtin().subcategories("rads").expect("rads present");
    assert_eq!(rads.first(), Some(&"Breast"));
    assert!(rads.contains(&"Gynecology"));
    let modalities = builtin().modalities();
    for code in [Modality::Us, Modality::Ct, Modality::Mri, Modality::Xr] {
        assert!(modalities.contains(&code), "missing {code}");
    }
}

// === catalog files ===

#[test]
fn exported_catalog_validates_and_reloads() -> Result<()> {
    let exported = builtin().catalog().to_json_value()?;
    let violations = bundled_catalog_schema()?.violations(&exported);
    assert!(violations.is_empty(), "{violations:?}");

    let file = write_catalog(&exported)?;
    let reloaded = CatalogIndex::load(file.path())?;
    assert_eq!(reloaded.catalog(), builtin().catalog());
    let reparsed: ReferenceCatalog = serde_json::from_value(exported)?;
    assert_eq!(&reparsed, builtin().catalog());
    Ok(())
}

fn small_catalog(entries_b: Value) -> Value {
    json!({
        "categories": [
            {"id": "a", "name": "A", "icon": "i", "entries": [
                {"id": "one", "name": "One", "category": "a", "kind": "informative",
                 "modality": ["US"], "content": "<p>one</p>"}
            ]},
            {"id": "b", "name": "B", "icon": "i", "entries": entries_b}
        ]
    })
}

#[test]
fn load_rejects_dangling_category_reference() -> Result<()> {
    let file = write_catalog(&small_catalog(json!([
        {"id": "two", "name": "Two", "category": "missing", "kind": "dynamic", "content": ""}
    ])))?;
    let err = CatalogIndex::load(file.path()).expect_err("dangling ref should fail");
    let message = format!("{err:#}");
    assert!(message.contains("declares category missing"), "{message}");
    Ok(())
}

#[test]
fn load_rejects_duplicate_entry_ids() -> Result<()> {
    let file = write_catalog(&small_catalog(json!([
        {"id": "one", "name": "Again", "category": "b", "kind": "dynamic", "content": ""}
    ])))?;
    let err = CatalogIndex::load(file.path()).expect_err("duplicate should fail");
    assert!(format!("{err:#}").contains("duplicate entry id one"));
    Ok(())
}

#[test]
fn load_accepts_small_catalog_and_serves_queries() -> Result<()> {
    let file = write_catalog(&small_catalog(json!([
        {"id": "two", "name": "Two", "category": "b", "kind": "dynamic", "content": ""}
    ])))?;
    let source = CatalogSource::open(Some(file.path()))?;
    let index = source.index();
    assert_eq!(index.entry_count(), 2);
    assert_eq!(index.entry("two").map(|e| e.kind), Some(EntryKind::Dynamic));
    assert!(index.entry("birads").is_none());
    let us_filter = EntryFilter::new().modality(Modality::Us);
    let us: Vec<_> = index
        .filter(&us_filter)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(us, vec!["one"]);
    Ok(())
}

// === CLI ===

#[test]
fn cli_shows_entry_json() -> Result<()> {
    let mut cmd = radref_command();
    cmd.args(["entry", "birads"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.get("category").and_then(Value::as_str), Some("rads"));
    assert!(
        value
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.contains("BI-RADS"))
    );
    Ok(())
}

#[test]
fn cli_reports_unknown_entry() -> Result<()> {
    let mut cmd = radref_command();
    cmd.args(["entry", "nonexistent-id-xyz"]);
    let output = cmd.output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent-id-xyz"), "{stderr}");
    Ok(())
}

#[test]
fn cli_filter_by_modality_and_kind() -> Result<()> {
    let mut cmd = radref_command();
    cmd.args(["filter", "--modality", "us", "--kind", "dynamic", "--json"]);
    let output = run_command(cmd)?;
    let rows: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row.get("kind").and_then(Value::as_str), Some("dynamic"));
        let codes = row
            .get("modality")
            .and_then(Value::as_array)
            .expect("modality present");
        assert!(codes.iter().any(|code| code == "US"));
        assert!(row.get("content").is_none());
    }
    Ok(())
}

#[test]
fn cli_uses_catalog_from_environment() -> Result<()> {
    let file = write_catalog(&small_catalog(json!([])))?;
    let mut cmd = radref_command();
    cmd.env("RADREF_CATALOG", file.path())
        .args(["categories", "--json"]);
    let output = run_command(cmd)?;
    let rows: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<_> = rows
        .iter()
        .filter_map(|row| row.get("id").and_then(Value::as_str))
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
    Ok(())
}

#[test]
fn cli_empty_catalog_setting_falls_back_to_bundled() -> Result<()> {
    let mut cmd = radref_command();
    cmd.env("RADREF_CATALOG", "").args(["entry", "birads"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.get("id").and_then(Value::as_str), Some("birads"));

    let mut cmd = radref_command();
    cmd.args(["--catalog", "", "entry", "birads"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.get("category").and_then(Value::as_str), Some("rads"));
    Ok(())
}

#[test]
fn cli_validate_flags_schema_violations() -> Result<()> {
    let file = write_catalog(&json!({"categories": []}))?;
    let mut cmd = radref_command();
    cmd.arg("validate").arg(file.path());
    let output = cmd.output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed schema validation"), "{stderr}");
    Ok(())
}

#[test]
fn cli_export_round_trips() -> Result<()> {
    let mut cmd = radref_command();
    cmd.arg("export");
    let output = run_command(cmd)?;
    let catalog: ReferenceCatalog = serde_json::from_slice(&output.stdout)?;
    assert_eq!(&catalog, builtin().catalog());
    Ok(())
}
