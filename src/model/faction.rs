use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::relationship::RelationshipKind;

/// Per-faction stance table, keyed by target faction name.
///
/// In memory this is a plain ordered map. The serialized form is a pair of
/// parallel `keys`/`values` arrays (the shape external editors persist), so
/// the conversion lives entirely at the serde boundary.
///
/// Decoding is tolerant of malformed documents: a key with no value at the
/// same index is dropped, and duplicate keys keep the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "RelationEntries", from = "RelationEntries")]
pub struct RelationshipMap(pub BTreeMap<String, RelationshipKind>);

#[derive(Serialize, Deserialize)]
struct RelationEntries {
    keys: Vec<String>,
    values: Vec<RelationshipKind>,
}

impl From<RelationshipMap> for RelationEntries {
    fn from(map: RelationshipMap) -> Self {
        let mut keys = Vec::with_capacity(map.0.len());
        let mut values = Vec::with_capacity(map.0.len());
        for (key, kind) in map.0 {
            keys.push(key);
            values.push(kind);
        }
        RelationEntries { keys, values }
    }
}

impl From<RelationEntries> for RelationshipMap {
    fn from(entries: RelationEntries) -> Self {
        let mut map = BTreeMap::new();
        // zip truncates to the shorter list, dropping keys without a value
        for (key, kind) in entries.keys.into_iter().zip(entries.values) {
            map.entry(key).or_insert(kind);
        }
        RelationshipMap(map)
    }
}

/// A named faction and its stance toward every other faction it knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub name: String,
    #[serde(default)]
    pub relationships: RelationshipMap,
}

impl Faction {
    /// Create a faction with an empty stance table.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            relationships: RelationshipMap::default(),
        }
    }
}
