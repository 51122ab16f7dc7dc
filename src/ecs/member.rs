use bevy_ecs::component::Component;

use crate::model::{RelationshipKind, RelationshipStore};

/// Faction membership for an ECS entity.
///
/// Members are locked by default: gameplay code opts an entity into faction
/// switching by constructing it with [`FactionMember::unlocked`] or calling
/// [`FactionMember::set_locked`]. The faction name is never validated against
/// a store; stance lookups through an unknown name resolve to `Neutral` like
/// any other unknown name.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FactionMember {
    faction: String,
    locked: bool,
}

impl FactionMember {
    /// Member whose faction is fixed for its lifetime.
    pub fn new(faction: &str) -> Self {
        Self {
            faction: faction.to_string(),
            locked: true,
        }
    }

    /// Member that may be moved between factions later.
    pub fn unlocked(faction: &str) -> Self {
        Self {
            faction: faction.to_string(),
            locked: false,
        }
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Change this member's faction.
    ///
    /// Returns the previous faction name, or `None` when the member is
    /// locked and the change is refused.
    pub fn set_faction(&mut self, faction: &str) -> Option<String> {
        if self.locked {
            return None;
        }
        Some(std::mem::replace(&mut self.faction, faction.to_string()))
    }

    /// This member's stance toward another member, resolved through `store`.
    pub fn relationship_to(
        &self,
        store: &RelationshipStore,
        other: &FactionMember,
    ) -> RelationshipKind {
        store.relationship(&self.faction, &other.faction)
    }

    /// This member's stance toward the faction named `other`.
    pub fn relationship_with(&self, store: &RelationshipStore, other: &str) -> RelationshipKind {
        store.relationship(&self.faction, other)
    }

    pub fn is_hostile_to(&self, store: &RelationshipStore, other: &FactionMember) -> bool {
        self.relationship_to(store, other) == RelationshipKind::Hostile
    }

    pub fn is_friendly_to(&self, store: &RelationshipStore, other: &FactionMember) -> bool {
        self.relationship_to(store, other) == RelationshipKind::Friendly
    }

    pub fn is_allied_to(&self, store: &RelationshipStore, other: &FactionMember) -> bool {
        self.relationship_to(store, other) == RelationshipKind::Allied
    }

    pub fn is_neutral_to(&self, store: &RelationshipStore, other: &FactionMember) -> bool {
        self.relationship_to(store, other) == RelationshipKind::Neutral
    }
}

impl Default for FactionMember {
    /// Locked member of the conventional placeholder faction.
    fn default() -> Self {
        Self::new("Neutral")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RelationshipStore {
        let mut store = RelationshipStore::with_factions(["Red", "Blue", "Green"]).unwrap();
        store
            .set_relationship_mutual("Red", "Blue", RelationshipKind::Hostile)
            .unwrap();
        store
            .set_relationship("Red", "Green", RelationshipKind::Allied)
            .unwrap();
        store
    }

    #[test]
    fn locked_member_refuses_change() {
        let mut member = FactionMember::new("Red");
        assert!(member.is_locked());
        assert_eq!(member.set_faction("Blue"), None);
        assert_eq!(member.faction(), "Red");
    }

    #[test]
    fn unlocked_member_changes_and_returns_old_name() {
        let mut member = FactionMember::unlocked("Red");
        assert_eq!(member.set_faction("Blue"), Some("Red".to_string()));
        assert_eq!(member.faction(), "Blue");
    }

    #[test]
    fn unlocking_enables_change() {
        let mut member = FactionMember::new("Red");
        member.set_locked(false);
        assert_eq!(member.set_faction("Blue"), Some("Red".to_string()));
    }

    #[test]
    fn predicates_resolve_through_store() {
        let store = store();
        let red = FactionMember::new("Red");
        let blue = FactionMember::new("Blue");
        let green = FactionMember::new("Green");

        assert!(red.is_hostile_to(&store, &blue));
        assert!(blue.is_hostile_to(&store, &red));
        assert!(red.is_allied_to(&store, &green));
        // Directed: Green never declared anything toward Red.
        assert!(green.is_neutral_to(&store, &red));
        assert!(!red.is_friendly_to(&store, &blue));
    }

    #[test]
    fn unknown_faction_degrades_to_neutral() {
        let store = store();
        let red = FactionMember::new("Red");
        let stranger = FactionMember::new("Gold");

        assert_eq!(red.relationship_to(&store, &stranger), RelationshipKind::Neutral);
        assert_eq!(stranger.relationship_with(&store, "Red"), RelationshipKind::Neutral);
        assert!(red.is_neutral_to(&store, &stranger));
    }

    #[test]
    fn default_member_is_locked_neutral() {
        let member = FactionMember::default();
        assert_eq!(member.faction(), "Neutral");
        assert!(member.is_locked());
    }
}
