pub mod ecs;
pub mod model;
pub mod snapshot;

pub use ecs::{
    FactionMember, FactionRelations, MemberFactionChanged, RelationsPlugin, SetMemberFaction,
};
pub use model::{
    Faction, RelationsError, RelationshipKind, RelationshipMap, RelationshipStore,
    RelationshipTally,
};
pub use snapshot::{read_snapshot, write_snapshot};
