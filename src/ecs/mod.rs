pub mod events;
pub mod member;
pub mod plugin;
pub mod resources;

pub use events::{MemberFactionChanged, SetMemberFaction};
pub use member::FactionMember;
pub use plugin::{RelationsPlugin, apply_member_faction_changes};
pub use resources::FactionRelations;
