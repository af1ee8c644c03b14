//! WandPlugin wires the bubble emitter and its configuration.
use bevy::prelude::*;
#[cfg(feature = "wand_debug")]
use bevy::time::TimerMode;

use crate::{
    grab::systems::carry_grabbed_wand,
    wand::{
        config::WandSettings,
        systems::{spawn_wand_prop, update_bubble_emitters},
    },
};
#[cfg(feature = "wand_debug")]
use crate::{
    bubble::components::Bubble,
    wand::components::{BubbleEmitter, Wand},
};

pub struct WandPlugin;

impl Plugin for WandPlugin {
    fn build(&self, app: &mut App) {
        let settings = WandSettings::load_or_default();
        info!(
            "Wand configured: growth {} per unit speed, release target {}-{} / {}, lifetime {}-{}s",
            settings.growth_factor,
            settings.size_min,
            settings.size_max,
            settings.size_divisor,
            settings.lifetime_min_seconds,
            settings.lifetime_max_seconds
        );

        app.insert_resource(settings)
            .add_systems(Startup, spawn_wand_prop)
            .add_systems(Update, update_bubble_emitters.after(carry_grabbed_wand));

        #[cfg(feature = "wand_debug")]
        {
            app.init_resource::<EmitterDebugTimer>().add_systems(
                Update,
                log_emitter_state.after(update_bubble_emitters),
            );
        }
    }
}

#[cfg(feature = "wand_debug")]
#[derive(Resource)]
struct EmitterDebugTimer {
    timer: Timer,
}

#[cfg(feature = "wand_debug")]
impl Default for EmitterDebugTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Once-per-second emitter summary, only with the `wand_debug` feature.
#[cfg(feature = "wand_debug")]
fn log_emitter_state(
    time: Res<Time>,
    mut debug_timer: ResMut<EmitterDebugTimer>,
    emitters: Query<&BubbleEmitter, With<Wand>>,
    bubbles: Query<(), With<Bubble>>,
) {
    debug_timer.timer.tick(time.delta());
    if !debug_timer.timer.just_finished() {
        return;
    }

    for emitter in emitters.iter() {
        info!(
            "emitter: grabbed={} current={:?} recent={} bubbles_alive={}",
            emitter.being_grabbed(),
            emitter.current_bubble(),
            emitter.recent_bubble_count(),
            bubbles.iter().count()
        );
    }
}
