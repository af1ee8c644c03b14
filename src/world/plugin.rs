//! WorldPlugin coordinates the picnic scene and camera controls.
use bevy::prelude::*;

use crate::world::systems::{fly_camera_control, spawn_world_environment};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_world_environment)
            .add_systems(Update, fly_camera_control);
    }
}
