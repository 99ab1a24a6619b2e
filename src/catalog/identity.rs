use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Stable routing key for a category (e.g., `rads`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// Stable deep-link key for an entry (e.g., `birads`).
///
/// Entry ids are unique across the whole catalog, not just within their
/// category, so a bare id is enough to resolve an entry.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_string())
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

// Lets the id indexes answer lookups for plain `&str` keys.
impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an entry is plain lookup material or expects user input.
///
/// The catalog stores no calculation logic for `Dynamic` entries; the consumer
/// decides how to collect input from the embedded markup.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Informative,
    Dynamic,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Informative => "informative",
            EntryKind::Dynamic => "dynamic",
        }
    }
}

impl FromStr for EntryKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "informative" => Ok(EntryKind::Informative),
            "dynamic" => Ok(EntryKind::Dynamic),
            other => bail!("unknown entry kind '{other}' (expected informative|dynamic)"),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Imaging modality tag attached to entries.
///
/// Known codes serialize to their canonical upper-case form; `Other` keeps
/// catalogs that introduce new modalities loadable by older binaries.
/// Equality, ordering and hashing use the canonical code, so `Other("us")`
/// and `Us` are the same modality.
#[derive(Clone, Debug)]
pub enum Modality {
    Us,
    Ct,
    Mri,
    Xr,
    Mg,
    Pet,
    Nm,
    Fluoro,
    Other(String),
}

impl Modality {
    pub fn as_str(&self) -> &str {
        match self {
            Modality::Us => "US",
            Modality::Ct => "CT",
            Modality::Mri => "MRI",
            Modality::Xr => "XR",
            Modality::Mg => "MG",
            Modality::Pet => "PET",
            Modality::Nm => "NM",
            Modality::Fluoro => "FLUORO",
            Modality::Other(value) => value.as_str(),
        }
    }

    /// Parse a modality code, ignoring case and surrounding whitespace.
    pub fn from_code(value: &str) -> Self {
        let code = value.trim().to_ascii_uppercase();
        match code.as_str() {
            "US" => Modality::Us,
            "CT" => Modality::Ct,
            "MRI" | "MR" => Modality::Mri,
            "XR" | "CR" | "DX" => Modality::Xr,
            "MG" => Modality::Mg,
            "PET" => Modality::Pet,
            "NM" => Modality::Nm,
            "FLUORO" | "RF" => Modality::Fluoro,
            _ => Modality::Other(code),
        }
    }

    fn canonical(&self) -> Cow<'_, str> {
        match self {
            Modality::Other(raw) => match Modality::from_code(raw) {
                Modality::Other(code) => Cow::Owned(code),
                known => Cow::Owned(known.as_str().to_string()),
            },
            known => Cow::Borrowed(known.as_str()),
        }
    }
}

impl PartialEq for Modality {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Modality {}

impl Ord for Modality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl PartialOrd for Modality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Modality {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for Modality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for Modality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_code(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modality_round_trips_known_and_unknown() {
        let known = Modality::Mri;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"MRI\"");
        let back: Modality = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let parsed: Modality = serde_json::from_str("\"spect\"").unwrap();
        assert_eq!(parsed, Modality::Other("SPECT".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"SPECT\"");
    }

    #[test]
    fn modality_codes_are_case_insensitive() {
        assert_eq!(Modality::from_code("us"), Modality::Us);
        assert_eq!(Modality::from_code(" Ct "), Modality::Ct);
        assert_eq!(Modality::from_code("mr"), Modality::Mri);
    }

    #[test]
    fn hand_built_other_codes_compare_canonically() {
        assert_eq!(Modality::Other("US".to_string()), Modality::Us);
        assert_eq!(Modality::Other("us".to_string()), Modality::Us);
        assert_eq!(Modality::Other(" mr ".to_string()), Modality::Mri);
        assert_eq!(
            Modality::Other("spect".to_string()),
            Modality::Other("SPECT".to_string())
        );
        assert_ne!(Modality::Other("SPECT".to_string()), Modality::Nm);

        let set = std::collections::BTreeSet::from([Modality::Us, Modality::Ct]);
        assert!(set.contains(&Modality::Other("us".to_string())));
        let hashed = std::collections::HashSet::from([Modality::Other("ct".to_string())]);
        assert!(hashed.contains(&Modality::Ct));
        assert_eq!(
            serde_json::to_string(&Modality::Other("mr".to_string())).unwrap(),
            "\"MRI\""
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Informative).unwrap(),
            "\"informative\""
        );
        let parsed: EntryKind = serde_json::from_str("\"dynamic\"").unwrap();
        assert_eq!(parsed, EntryKind::Dynamic);
        assert!(serde_json::from_str::<EntryKind>("\"calculator\"").is_err());
    }

    #[test]
    fn kind_parses_from_cli_text() {
        assert_eq!("Dynamic".parse::<EntryKind>().unwrap(), EntryKind::Dynamic);
        let err = "static".parse::<EntryKind>().unwrap_err();
        assert!(err.to_string().contains("static"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = EntryId::from("birads");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"birads\"");
        let parsed: CategoryId = serde_json::from_str("\"rads\"").unwrap();
        assert_eq!(parsed.as_str(), "rads");
    }
}
