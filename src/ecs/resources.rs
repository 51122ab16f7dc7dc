use std::ops::{Deref, DerefMut};

use bevy_ecs::resource::Resource;

use crate::model::RelationshipStore;

/// The relationship store owned by a running session.
///
/// Hosts insert a populated one before adding `RelationsPlugin`, or let the
/// plugin initialize an empty store. All lookup goes through the owning
/// `World`; there is no process-global instance. Derefs to the wrapped
/// [`RelationshipStore`], so store methods are callable on the resource
/// directly; the tuple field is public for explicit access.
#[derive(Resource, Debug, Clone, Default)]
pub struct FactionRelations(pub RelationshipStore);

impl Deref for FactionRelations {
    type Target = RelationshipStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FactionRelations {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationshipKind;

    #[test]
    fn store_methods_resolve_through_deref() {
        let mut relations = FactionRelations::default();
        assert!(relations.is_empty());

        relations.add_faction("Red").unwrap();
        relations.add_faction("Blue").unwrap();
        relations
            .set_relationship("Red", "Blue", RelationshipKind::Hostile)
            .unwrap();

        assert_eq!(relations.len(), 2);
        assert_eq!(relations.relationship("Red", "Blue"), RelationshipKind::Hostile);
        assert!(relations.0.contains("Blue"));
    }
}
