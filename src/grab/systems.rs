//! Systems that detect grabs and carry held props.
use bevy::prelude::*;

use crate::{
    grab::components::{GrabStates, LocalAvatar},
    wand::components::Wand,
    world::components::FlyCamera,
};

/// Maximum distance (in world units) at which a prop can be grabbed.
const GRAB_RANGE: f32 = 3.0;

/// Where a held prop sits relative to the camera (right, down, forward).
const HAND_OFFSET: Vec3 = Vec3::new(0.3, -0.25, -0.7);

/// Tilt applied to a held prop so the tip leans away from the camera.
const HAND_TILT_RADIANS: f32 = -0.35;

/// Grabs the nearest wand in range while the left mouse button is held,
/// and releases it when the button goes up.
pub fn update_wand_grab(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    local_avatar: Res<LocalAvatar>,
    mut grab_states: ResMut<GrabStates>,
    camera_query: Query<&Transform, With<FlyCamera>>,
    wand_query: Query<(Entity, &Transform), With<Wand>>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        let Ok(camera_transform) = camera_query.single() else {
            return;
        };
        let hand_position = camera_transform.translation;

        let mut nearest: Option<(Entity, f32)> = None;
        for (entity, transform) in wand_query.iter() {
            let distance = hand_position.distance(transform.translation);
            if distance <= GRAB_RANGE && nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((entity, distance));
            }
        }

        if let Some((entity, distance)) = nearest {
            grab_states.set_grabbed(entity, local_avatar.id);
            info!(
                "{} grabbed the wand (distance: {:.2})",
                local_avatar.id, distance
            );
        }
    } else if mouse_buttons.just_released(MouseButton::Left) {
        for (entity, _) in wand_query.iter() {
            if grab_states.get(entity).holder == Some(local_avatar.id) {
                grab_states.release(entity);
                info!("{} released the wand", local_avatar.id);
            }
        }
    }
}

/// Keeps a held wand at the hand anchor in front of the camera, so camera
/// motion is what waves the wand.
pub fn carry_grabbed_wand(
    local_avatar: Res<LocalAvatar>,
    grab_states: Res<GrabStates>,
    camera_query: Query<&Transform, (With<FlyCamera>, Without<Wand>)>,
    mut wand_query: Query<(Entity, &mut Transform), With<Wand>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    for (entity, mut transform) in wand_query.iter_mut() {
        let state = grab_states.get(entity);
        if !(state.activated && state.holder == Some(local_avatar.id)) {
            continue;
        }

        transform.translation =
            camera_transform.translation + camera_transform.rotation * HAND_OFFSET;
        transform.rotation = camera_transform.rotation * Quat::from_rotation_x(HAND_TILT_RADIANS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wand::components::BubbleEmitter;

    #[test]
    fn carried_wand_follows_the_camera_hand_anchor() {
        let mut app = App::new();
        app.init_resource::<GrabStates>()
            .init_resource::<LocalAvatar>()
            .add_systems(Update, carry_grabbed_wand);

        let camera_transform = Transform::from_xyz(0.0, 1.6, 4.0);
        app.world_mut().spawn((FlyCamera::new(0.0, 0.0), camera_transform));
        let wand = app
            .world_mut()
            .spawn((Wand, BubbleEmitter::default(), Transform::from_xyz(5.0, 0.5, 0.0)))
            .id();

        let local = app.world().resource::<LocalAvatar>().id;
        app.world_mut()
            .resource_mut::<GrabStates>()
            .set_grabbed(wand, local);

        app.update();

        let expected = camera_transform.translation + camera_transform.rotation * HAND_OFFSET;
        let actual = app.world().get::<Transform>(wand).unwrap().translation;
        assert!((actual - expected).length() < 1e-6);
    }

    #[test]
    fn ungrabbed_wand_stays_put() {
        let mut app = App::new();
        app.init_resource::<GrabStates>()
            .init_resource::<LocalAvatar>()
            .add_systems(Update, carry_grabbed_wand);

        app.world_mut()
            .spawn((FlyCamera::new(0.0, 0.0), Transform::from_xyz(0.0, 1.6, 4.0)));
        let start = Transform::from_xyz(5.0, 0.5, 0.0);
        let wand = app
            .world_mut()
            .spawn((Wand, BubbleEmitter::default(), start))
            .id();

        app.update();

        let actual = app.world().get::<Transform>(wand).unwrap().translation;
        assert!((actual - start.translation).length() < 1e-6);
    }
}
