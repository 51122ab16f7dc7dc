use std::collections::BTreeSet;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::faction::Faction;
use super::relationship::RelationshipKind;

/// Errors returned by mutating [`RelationshipStore`] operations.
///
/// Read paths never error: lookups on unknown names resolve to
/// [`RelationshipKind::Neutral`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationsError {
    /// The name is already taken, or is empty and therefore unusable.
    #[error("faction name {0:?} is empty or already in use")]
    DuplicateName(String),
    /// No faction with this name exists in the store.
    #[error("no faction named {0:?}")]
    NotFound(String),
}

/// Per-kind counts over the forward direction of each unordered faction pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipTally {
    pub neutral: usize,
    pub friendly: usize,
    pub hostile: usize,
    pub allied: usize,
}

impl RelationshipTally {
    /// Total pairs counted: F * (F - 1) / 2 for a roster of F factions.
    pub fn total(&self) -> usize {
        self.neutral + self.friendly + self.hostile + self.allied
    }
}

/// Ordered collection of factions and their pairwise stances.
///
/// Factions keep insertion order, so every iteration view (names, matrix,
/// serialized output) is deterministic and display-stable. Stance lookups are
/// total functions: an unknown name on either side, or a missing explicit
/// entry, resolves to `Neutral` rather than erroring. Consumers rely on that
/// to render sensible defaults for pairs nobody has configured yet.
///
/// `add_faction` and `remove_faction` reconcile the store afterwards, so
/// between mutations every faction holds an explicit entry for every other
/// faction and no entry names a faction that no longer exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelationshipStore {
    factions: Vec<Faction>,
}

impl RelationshipStore {
    pub fn new() -> Self {
        Self {
            factions: Vec::new(),
        }
    }

    /// Build a store from a roster of names, applying `add_faction` rules
    /// (and reconciliation) per name.
    pub fn with_factions<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, RelationsError> {
        let mut store = Self::new();
        for name in names {
            store.add_faction(name)?;
        }
        Ok(store)
    }

    /// Append a faction to the roster and reconcile.
    ///
    /// Fails with `DuplicateName` if `name` is empty or already present.
    pub fn add_faction(&mut self, name: &str) -> Result<(), RelationsError> {
        if name.is_empty() || self.contains(name) {
            return Err(RelationsError::DuplicateName(name.to_string()));
        }
        self.factions.push(Faction::new(name));
        self.reconcile();
        Ok(())
    }

    /// Remove a faction and reconcile, dropping every entry that named it.
    pub fn remove_faction(&mut self, name: &str) -> Result<(), RelationsError> {
        let idx = self
            .factions
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| RelationsError::NotFound(name.to_string()))?;
        self.factions.remove(idx);
        self.reconcile();
        Ok(())
    }

    /// Stance of `a` toward `b`.
    ///
    /// Total: unknown names on either side and unconfigured pairs all resolve
    /// to `Neutral`. This never fails by design.
    pub fn relationship(&self, a: &str, b: &str) -> RelationshipKind {
        self.faction(a)
            .and_then(|f| f.relationships.0.get(b).copied())
            .unwrap_or_default()
    }

    /// Set the single directed stance `a` -> `b`. The reverse direction is
    /// left untouched.
    pub fn set_relationship(
        &mut self,
        a: &str,
        b: &str,
        kind: RelationshipKind,
    ) -> Result<(), RelationsError> {
        let idx = self
            .factions
            .iter()
            .position(|f| f.name == a)
            .ok_or_else(|| RelationsError::NotFound(a.to_string()))?;
        if !self.contains(b) {
            return Err(RelationsError::NotFound(b.to_string()));
        }
        self.factions[idx]
            .relationships
            .0
            .insert(b.to_string(), kind);
        Ok(())
    }

    /// Set both directions of a pair in one call.
    ///
    /// Both names are validated before either side is written, so a failed
    /// call never leaves the pair half-updated.
    pub fn set_relationship_mutual(
        &mut self,
        a: &str,
        b: &str,
        kind: RelationshipKind,
    ) -> Result<(), RelationsError> {
        if !self.contains(a) {
            return Err(RelationsError::NotFound(a.to_string()));
        }
        if !self.contains(b) {
            return Err(RelationsError::NotFound(b.to_string()));
        }
        self.set_relationship(a, b, kind)?;
        self.set_relationship(b, a, kind)
    }

    /// Bring every stance table in line with the current roster.
    ///
    /// Each faction gains an explicit `Neutral` entry for every other faction
    /// it has no entry for, and entries naming factions that no longer exist
    /// are dropped. Idempotent; O(F^2) over a roster of F factions, which
    /// stays small in practice.
    pub fn reconcile(&mut self) {
        let names: Vec<String> = self.factions.iter().map(|f| f.name.clone()).collect();
        let known: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        for faction in &mut self.factions {
            for other in &names {
                if *other != faction.name && !faction.relationships.0.contains_key(other) {
                    faction
                        .relationships
                        .0
                        .insert(other.clone(), RelationshipKind::Neutral);
                }
            }
            faction
                .relationships
                .0
                .retain(|target, _| known.contains(target.as_str()));
        }
    }

    /// Look up a faction by name.
    pub fn faction(&self, name: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factions.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }

    /// Faction names in insertion order (never sorted).
    pub fn faction_names(&self) -> impl Iterator<Item = &str> {
        self.factions.iter().map(|f| f.name.as_str())
    }

    /// Read-only view of the roster in insertion order.
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// Every ordered pair of distinct factions with its resolved stance, in
    /// roster order (outer loop over sources, inner over targets). Yields
    /// F * (F - 1) items and skips the diagonal.
    pub fn matrix(&self) -> impl Iterator<Item = (&str, &str, RelationshipKind)> {
        self.factions.iter().flat_map(move |source| {
            self.factions
                .iter()
                .filter(move |target| target.name != source.name)
                .map(move |target| {
                    let kind = source
                        .relationships
                        .0
                        .get(&target.name)
                        .copied()
                        .unwrap_or_default();
                    (source.name.as_str(), target.name.as_str(), kind)
                })
        })
    }

    /// Count stance kinds over the forward direction of each unordered pair
    /// (roster order decides which direction is forward).
    pub fn tally(&self) -> RelationshipTally {
        let mut tally = RelationshipTally::default();
        for (i, source) in self.factions.iter().enumerate() {
            for target in &self.factions[i + 1..] {
                let kind = source
                    .relationships
                    .0
                    .get(&target.name)
                    .copied()
                    .unwrap_or_default();
                match kind {
                    RelationshipKind::Neutral => tally.neutral += 1,
                    RelationshipKind::Friendly => tally.friendly += 1,
                    RelationshipKind::Hostile => tally.hostile += 1,
                    RelationshipKind::Allied => tally.allied += 1,
                }
            }
        }
        tally
    }
}

impl<'de> Deserialize<'de> for RelationshipStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            factions: Vec<Faction>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let mut seen = BTreeSet::new();
        for faction in &wire.factions {
            if faction.name.is_empty() {
                return Err(de::Error::custom("faction name cannot be empty"));
            }
            if !seen.insert(faction.name.as_str()) {
                return Err(de::Error::custom(format!(
                    "duplicate faction name {:?}",
                    faction.name
                )));
            }
        }
        // No reconcile during deserialization: round-trips return exactly
        // what was stored. Session owners reconcile at startup.
        Ok(RelationshipStore {
            factions: wire.factions,
        })
    }
}
