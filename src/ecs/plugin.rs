//! Plugin wiring for the relations layer.
//!
//! `RelationsPlugin` installs the `FactionRelations` resource (keeping a
//! host-seeded one intact), reconciles the roster once at build so every
//! pre-seeded faction has a complete stance table, registers the membership
//! messages, and schedules `apply_member_faction_changes` in `Update`.

use bevy_app::{App, Plugin, Update};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::system::Query;

use super::events::{MemberFactionChanged, SetMemberFaction};
use super::member::FactionMember;
use super::resources::FactionRelations;

pub struct RelationsPlugin;

impl Plugin for RelationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FactionRelations>();
        app.add_message::<SetMemberFaction>();
        app.add_message::<MemberFactionChanged>();
        app.add_systems(Update, apply_member_faction_changes);

        // A seeded roster may carry sparse or stale stance tables.
        app.world_mut()
            .resource_mut::<FactionRelations>()
            .0
            .reconcile();
    }
}

/// Drain pending `SetMemberFaction` commands, apply them through the member
/// component, and emit `MemberFactionChanged` for every applied change.
pub fn apply_member_faction_changes(
    mut commands: MessageReader<SetMemberFaction>,
    mut changed: MessageWriter<MemberFactionChanged>,
    mut members: Query<&mut FactionMember>,
) {
    for command in commands.read() {
        let Ok(mut member) = members.get_mut(command.entity) else {
            tracing::warn!(
                "SetMemberFaction for {:?} ignored: no FactionMember",
                command.entity
            );
            continue;
        };
        match member.set_faction(&command.faction) {
            Some(old_faction) => {
                tracing::debug!(
                    "{:?} moved from faction {:?} to {:?}",
                    command.entity,
                    old_faction,
                    command.faction
                );
                changed.write(MemberFactionChanged {
                    entity: command.entity,
                    old_faction,
                    new_faction: command.faction.clone(),
                });
            }
            None => {
                tracing::warn!(
                    "SetMemberFaction for {:?} refused: member is locked",
                    command.entity
                );
            }
        }
    }
}
