use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// Command requesting that an entity's `FactionMember` switch factions.
///
/// Drained by `apply_member_faction_changes`. Commands refused by a locked
/// member, or targeting an entity without a `FactionMember`, are logged and
/// dropped without a notification.
#[derive(Message, Clone, Debug)]
pub struct SetMemberFaction {
    pub entity: Entity,
    pub faction: String,
}

/// Emitted after a member's faction actually changed, for cross-system
/// reactions.
#[derive(Message, Clone, Debug)]
pub struct MemberFactionChanged {
    pub entity: Entity,
    pub old_faction: String,
    pub new_faction: String,
}
