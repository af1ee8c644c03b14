//! GrabPlugin owns the grab metadata store and the carry systems.
use bevy::prelude::*;

use crate::grab::{
    components::{GrabStates, LocalAvatar},
    systems::{carry_grabbed_wand, update_wand_grab},
};

pub struct GrabPlugin;

impl Plugin for GrabPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrabStates>()
            .init_resource::<LocalAvatar>()
            .add_systems(
                Update,
                (update_wand_grab, carry_grabbed_wand.after(update_wand_grab)),
            );
    }
}
