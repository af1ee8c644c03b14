//! Systems that run every bubble after it leaves the emitter's hands:
//! render dressing, size application, drift, and lifetime expiry.
use bevy::{math::primitives::Sphere, prelude::*};

use crate::bubble::components::{Bubble, BubbleAssets, Dimensions, Lifetime, Released};

/// Creates the shared bubble mesh and material.
pub fn prepare_bubble_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Unit-diameter sphere so a bubble's Transform::scale is its world size.
    let mesh = meshes.add(Mesh::from(Sphere::new(0.5)));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.72, 0.85, 1.0, 0.25),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.05,
        metallic: 0.0,
        ..default()
    });

    commands.insert_resource(BubbleAssets { mesh, material });
}

/// Attaches the shared mesh/material to bubbles that do not have one yet.
///
/// The emitter spawns bubbles as bare simulation entities; keeping the
/// render components out of the emitter lets its systems run headless.
pub fn dress_new_bubbles(
    mut commands: Commands,
    assets: Res<BubbleAssets>,
    undressed: Query<Entity, (With<Bubble>, Without<Mesh3d>)>,
) {
    for entity in undressed.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
        ));
    }
}

/// Copies each bubble's dimensions onto its transform scale.
pub fn apply_bubble_dimensions(
    mut bubbles: Query<(&Dimensions, &mut Transform), (With<Bubble>, Changed<Dimensions>)>,
) {
    for (dimensions, mut transform) in bubbles.iter_mut() {
        transform.scale = dimensions.0;
    }
}

/// Integrates velocity and gravity for bubbles the wand has let go of.
pub fn advance_released_bubbles(
    time: Res<Time>,
    mut bubbles: Query<(&mut Transform, &mut Released), With<Bubble>>,
) {
    let delta = time.delta_secs();
    for (mut transform, mut released) in bubbles.iter_mut() {
        let gravity = released.gravity;
        released.velocity += gravity * delta;
        transform.translation += released.velocity * delta;
    }
}

/// Ticks lifetimes and despawns bubbles whose time is up.
pub fn expire_bubbles(
    mut commands: Commands,
    time: Res<Time>,
    mut bubbles: Query<(Entity, &mut Lifetime), With<Bubble>>,
) {
    for (entity, mut lifetime) in bubbles.iter_mut() {
        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}
