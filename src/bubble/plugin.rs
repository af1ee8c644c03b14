//! BubblePlugin runs the host-side behavior of every bubble.
use bevy::prelude::*;

use crate::{
    bubble::systems::{
        advance_released_bubbles, apply_bubble_dimensions, dress_new_bubbles, expire_bubbles,
        prepare_bubble_assets,
    },
    wand::systems::update_bubble_emitters,
};

pub struct BubblePlugin;

impl Plugin for BubblePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, prepare_bubble_assets).add_systems(
            Update,
            (
                dress_new_bubbles,
                apply_bubble_dimensions.after(update_bubble_emitters),
                advance_released_bubbles.after(update_bubble_emitters),
                expire_bubbles.after(advance_released_bubbles),
            ),
        );
    }
}
