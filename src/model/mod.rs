pub mod faction;
pub mod relationship;
pub mod store;

pub use faction::{Faction, RelationshipMap};
pub use relationship::RelationshipKind;
pub use store::{RelationsError, RelationshipStore, RelationshipTally};
