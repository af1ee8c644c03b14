//! Components for bubble entities.
use bevy::prelude::*;

/// Marker component for bubble entities.
#[derive(Component, Debug)]
pub struct Bubble;

/// Uniform per-axis size of a bubble, in world units.
///
/// The authoritative size lives here rather than in `Transform::scale`;
/// `apply_bubble_dimensions` copies it onto the scale each frame (the
/// bubble mesh is a unit-diameter sphere, so scale equals world size).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Dimensions(pub Vec3);

/// Motion handed to a bubble when the wand lets go of it.
///
/// Present only on released bubbles; the current (still growing) bubble
/// has no motion of its own and just rides the wand tip.
#[derive(Component, Debug, Clone, Copy)]
pub struct Released {
    pub velocity: Vec3,
    pub gravity: Vec3,
}

/// Despawn timer for a released bubble.
#[derive(Component, Debug)]
pub struct Lifetime {
    timer: Timer,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    pub fn duration(&self) -> std::time::Duration {
        self.timer.duration()
    }
}

/// Shared render assets for all bubbles, created once at startup.
#[derive(Resource, Debug)]
pub struct BubbleAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}
