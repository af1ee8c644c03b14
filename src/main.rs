use bevy::prelude::*;

mod bubble;
mod grab;
mod wand;
mod world;

use crate::{bubble::BubblePlugin, grab::GrabPlugin, wand::WandPlugin, world::WorldPlugin};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            WorldPlugin,
            GrabPlugin,
            WandPlugin, // After GrabPlugin so the emitter can order after the carry systems
            BubblePlugin,
        ))
        .run();
}
