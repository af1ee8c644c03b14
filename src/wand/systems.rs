//! The bubble emitter: grows a bubble at the wand tip while the wand is
//! held, releases it once it outgrows a randomized target size, and pops
//! it if the wand is dropped mid-growth.
use bevy::{math::primitives::Cylinder, prelude::*};
use rand::Rng;

use crate::{
    bubble::components::{Bubble, Dimensions, Lifetime, Released},
    grab::components::{GrabStates, LocalAvatar},
    wand::{
        components::{BubbleEmitter, Wand},
        config::WandSettings,
    },
};

const WAND_HANDLE_RADIUS: f32 = 0.015;
const WAND_HANDLE_LENGTH: f32 = 0.35;
const WAND_START_POSITION: Vec3 = Vec3::new(0.0, 1.2, -2.0);

/// Released bubbles sink with gravity `(0, -n/10, 0)` for a random `n` in `0..=3`.
const GRAVITY_STEP_MAX: u32 = 3;
const GRAVITY_DIVISOR: f32 = 10.0;

type BubbleQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut Transform, &'static mut Dimensions),
    (With<Bubble>, Without<Wand>),
>;

/// Spawns the wand prop the player can pick up.
pub fn spawn_wand_prop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Wand,
        BubbleEmitter::default(),
        Mesh3d(meshes.add(Mesh::from(Cylinder::new(
            WAND_HANDLE_RADIUS,
            WAND_HANDLE_LENGTH,
        )))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(150, 80, 200),
            perceptual_roughness: 0.4,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_translation(WAND_START_POSITION),
    ));
}

/// Per-tick emitter update, run after the grab/carry systems so the wand
/// pose for this frame is final.
pub fn update_bubble_emitters(
    mut commands: Commands,
    grab_states: Res<GrabStates>,
    local_avatar: Res<LocalAvatar>,
    settings: Res<WandSettings>,
    mut wand_query: Query<(Entity, &Transform, &mut BubbleEmitter), With<Wand>>,
    mut bubble_query: BubbleQuery,
) {
    for (wand_entity, wand_transform, mut emitter) in wand_query.iter_mut() {
        let grab = grab_states.get(wand_entity);
        let held_locally = grab.activated && grab.holder == Some(local_avatar.id);

        if held_locally {
            emitter.set_being_grabbed(true);

            let wand_position = wand_transform.translation;
            let tip = wand_tip_position(wand_transform, settings.tip_offset);

            if emitter.current_bubble().is_none() {
                // First tick of a grab: the bubble starts near-zero at the
                // tip. Growth would see zero wand velocity this tick, so
                // there is nothing further to do.
                let bubble = spawn_bubble(&mut commands, tip, settings.initial_dimension);
                emitter.track_new_bubble(bubble, wand_position);
                debug!("spawned bubble {:?} at the wand tip", bubble);
                continue;
            }

            grow_bubble_with_wand_velocity(
                &mut commands,
                &settings,
                &mut emitter,
                wand_position,
                tip,
                &mut bubble_query,
            );

            // Keep the (possibly just replaced) current bubble on the tip.
            if let Some(current) = emitter.current_bubble() {
                if let Ok((mut bubble_transform, _)) = bubble_query.get_mut(current) {
                    bubble_transform.translation = tip;
                }
            }
        } else if emitter.being_grabbed() {
            // Held last tick, not any more: the wand was dropped. The
            // half-grown bubble pops instead of floating off.
            emitter.set_being_grabbed(false);
            if let Some(current) = emitter.release_current() {
                commands.entity(current).despawn();
                debug!("wand dropped, popped bubble {:?}", current);
            }
        }
    }
}

/// World-space point just above the wand's center, along its local up axis.
pub fn wand_tip_position(wand_transform: &Transform, tip_offset: f32) -> Vec3 {
    wand_transform.translation + wand_transform.rotation * Vec3::Y * tip_offset
}

/// Grows or releases the current bubble based on how fast the wand moved
/// since last tick.
fn grow_bubble_with_wand_velocity(
    commands: &mut Commands,
    settings: &WandSettings,
    emitter: &mut BubbleEmitter,
    wand_position: Vec3,
    wand_tip: Vec3,
    bubble_query: &mut BubbleQuery,
) {
    let velocity = wand_position - emitter.last_position();
    let speed = velocity.length() * settings.velocity_multiplier;
    emitter.set_last_position(wand_position);

    let Some(current) = emitter.current_bubble() else {
        return;
    };
    let Ok((_, mut dimensions)) = bubble_query.get_mut(current) else {
        return;
    };

    let mut size = dimensions.0;
    if speed > settings.velocity_threshold {
        let mut rng = rand::thread_rng();
        // Vary bubble sizes: each tick rolls a fresh release target.
        let target =
            rng.gen_range(settings.size_min..=settings.size_max) as f32 / settings.size_divisor;

        if size.x > target {
            // Big enough: hand the bubble its own motion and lifetime,
            // then start growing a replacement at the tip. The released
            // bubble keeps the dimensions it had; we do not rewrite them.
            let lifetime =
                rng.gen_range(settings.lifetime_min_seconds..=settings.lifetime_max_seconds);
            commands.entity(current).insert((
                Released {
                    velocity,
                    gravity: randomized_gravity(&mut rng),
                },
                Lifetime::new(lifetime as f32),
            ));
            let replacement = spawn_bubble(commands, wand_tip, settings.initial_dimension);
            emitter.track_new_bubble(replacement, wand_position);
            debug!(
                "released bubble {:?} (lifetime {}s), now growing {:?}",
                current, lifetime, replacement
            );
            return;
        }

        size += Vec3::splat(settings.growth_factor * speed);
    } else if size.x > settings.shrink_lower_limit {
        // Wand roughly stationary: deflate, but never below the limit.
        size = (size - Vec3::splat(settings.shrink_factor))
            .max(Vec3::splat(settings.shrink_lower_limit));
    }

    dimensions.0 = size;
}

fn spawn_bubble(commands: &mut Commands, position: Vec3, initial_dimension: f32) -> Entity {
    commands
        .spawn((
            Bubble,
            Dimensions(Vec3::splat(initial_dimension)),
            Transform::from_translation(position).with_scale(Vec3::splat(initial_dimension)),
        ))
        .id()
}

fn randomized_gravity(rng: &mut impl Rng) -> Vec3 {
    let step = rng.gen_range(0..=GRAVITY_STEP_MAX);
    Vec3::new(0.0, -(step as f32) / GRAVITY_DIVISOR, 0.0)
}
