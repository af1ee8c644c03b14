//! Components for the bubble wand and its emitter state.
use std::collections::VecDeque;

use bevy::prelude::*;

/// How many recently spawned bubble ids the emitter remembers.
///
/// The history is purely for debugging/introspection; released bubbles are
/// otherwise fire-and-forget, owned by their own lifetime and physics.
const RECENT_BUBBLE_CAPACITY: usize = 16;

/// Marker component for the wand prop.
#[derive(Component, Debug)]
pub struct Wand;

/// Per-wand emitter state driven by `update_bubble_emitters`.
///
/// Holds a weak reference to the one bubble being grown this tick, the
/// wand position observed last tick (for velocity), and whether the wand
/// was held last tick (to detect the release transition).
#[derive(Component, Debug, Default)]
pub struct BubbleEmitter {
    current_bubble: Option<Entity>,
    last_position: Vec3,
    being_grabbed: bool,
    recent_bubbles: VecDeque<Entity>,
}

impl BubbleEmitter {
    /// The bubble currently attached to the wand tip, if any.
    pub fn current_bubble(&self) -> Option<Entity> {
        self.current_bubble
    }

    /// Wand position observed on the previous tick.
    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }

    pub fn set_last_position(&mut self, position: Vec3) {
        self.last_position = position;
    }

    /// Whether the wand was held on the previous tick.
    pub fn being_grabbed(&self) -> bool {
        self.being_grabbed
    }

    pub fn set_being_grabbed(&mut self, grabbed: bool) {
        self.being_grabbed = grabbed;
    }

    /// Adopts a freshly spawned bubble as the current one and resets the
    /// velocity reference point to the wand's center position.
    pub fn track_new_bubble(&mut self, bubble: Entity, wand_position: Vec3) {
        self.current_bubble = Some(bubble);
        self.last_position = wand_position;
        if self.recent_bubbles.len() == RECENT_BUBBLE_CAPACITY {
            self.recent_bubbles.pop_front();
        }
        self.recent_bubbles.push_back(bubble);
    }

    /// Detaches the current bubble, returning its id.
    pub fn release_current(&mut self) -> Option<Entity> {
        self.current_bubble.take()
    }

    /// Number of bubble ids retained in the debug history.
    pub fn recent_bubble_count(&self) -> usize {
        self.recent_bubbles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_history_is_bounded() {
        let mut world = World::new();
        let mut emitter = BubbleEmitter::default();

        for i in 0..RECENT_BUBBLE_CAPACITY + 5 {
            let bubble = world.spawn_empty().id();
            emitter.track_new_bubble(bubble, Vec3::splat(i as f32));
        }

        assert_eq!(emitter.recent_bubble_count(), RECENT_BUBBLE_CAPACITY);
    }

    #[test]
    fn track_new_bubble_resets_velocity_reference() {
        let mut world = World::new();
        let bubble = world.spawn_empty().id();

        let mut emitter = BubbleEmitter::default();
        emitter.track_new_bubble(bubble, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(emitter.current_bubble(), Some(bubble));
        assert_eq!(emitter.last_position(), Vec3::new(1.0, 2.0, 3.0));
    }
}
