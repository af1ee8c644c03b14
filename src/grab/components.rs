//! Grab metadata store and avatar identity types.
use std::{collections::HashMap, fmt};

use bevy::prelude::*;

/// Unique identifier for an avatar (a holder of grabbable props).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvatarId(u64);

impl AvatarId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AvatarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AVATAR-{:04}", self.0)
    }
}

/// Resource identifying the avatar controlled by this process.
///
/// The emitter only reacts to grabs whose holder matches this id, so a
/// prop held by a remote avatar stays inert locally.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LocalAvatar {
    pub id: AvatarId,
}

impl Default for LocalAvatar {
    fn default() -> Self {
        Self {
            id: AvatarId::new(1),
        }
    }
}

/// Grab metadata for a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrabState {
    /// Whether the entity is currently held.
    pub activated: bool,
    /// Who is holding it, when known.
    pub holder: Option<AvatarId>,
}

/// Per-entity grab metadata, keyed by the grabbed entity's id.
///
/// Written only by the grab input systems; every other reader treats it
/// as read-only. Absent entries read as the default "not grabbed" state
/// rather than an error.
#[derive(Resource, Debug, Default)]
pub struct GrabStates {
    states: HashMap<Entity, GrabState>,
}

impl GrabStates {
    /// Returns the grab state for `entity`, or the default when no entry exists.
    pub fn get(&self, entity: Entity) -> GrabState {
        self.states.get(&entity).copied().unwrap_or_default()
    }

    /// Marks `entity` as held by `holder`.
    pub fn set_grabbed(&mut self, entity: Entity, holder: AvatarId) {
        self.states.insert(
            entity,
            GrabState {
                activated: true,
                holder: Some(holder),
            },
        );
    }

    /// Clears any grab on `entity`.
    pub fn release(&mut self, entity: Entity) {
        self.states.remove(&entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entry_reads_as_not_grabbed() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        let states = GrabStates::default();
        let state = states.get(entity);
        assert!(!state.activated);
        assert!(state.holder.is_none());
    }

    #[test]
    fn grab_and_release_round_trip() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        let mut states = GrabStates::default();
        let holder = AvatarId::new(3);

        states.set_grabbed(entity, holder);
        let state = states.get(entity);
        assert!(state.activated);
        assert_eq!(state.holder, Some(holder));

        states.release(entity);
        assert_eq!(states.get(entity), GrabState::default());
    }

    #[test]
    fn avatar_id_display_is_padded() {
        assert_eq!(AvatarId::new(3).to_string(), "AVATAR-0003");
    }
}
