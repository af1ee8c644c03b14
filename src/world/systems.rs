//! Systems for the world module.
use bevy::{
    ecs::message::MessageReader,
    input::{mouse::MouseMotion, ButtonInput},
    math::primitives::{Cuboid, Plane3d},
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::world::components::FlyCamera;

const LAWN_SCALE: f32 = 40.0;
const TABLE_POSITION: Vec3 = Vec3::new(0.0, 0.5, -2.0);
const CAMERA_START_POS: Vec3 = Vec3::new(0.0, 1.6, 0.5);
const PITCH_LIMIT: f32 = 1.54;

/// Spawns the picnic scene: a lawn, a table for the wand to rest on, a sun,
/// and the fly camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(96, 150, 92),
            perceptual_roughness: 0.95,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(LAWN_SCALE)),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cuboid::new(0.8, 1.0, 0.5)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(140, 105, 70),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_translation(TABLE_POSITION),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 18_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 24.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START_POS),
        FlyCamera::new(0.0, 0.0),
    ));
}

/// Mouse look plus keyboard flight for the camera in one pass.
///
/// Looking is active while the right mouse button is held (the left button
/// is reserved for grabbing the wand); the cursor locks for the duration.
pub fn fly_camera_control(
    mut motion_events: MessageReader<MouseMotion>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cursor_options: Single<&mut CursorOptions>,
    mut query: Query<(&mut FlyCamera, &mut Transform)>,
) {
    if mouse_buttons.just_pressed(MouseButton::Right) {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    } else if mouse_buttons.just_released(MouseButton::Right) {
        cursor_options.visible = true;
        cursor_options.grab_mode = CursorGrabMode::None;
    }

    let mut look_delta = Vec2::ZERO;
    for motion in motion_events.read() {
        look_delta += motion.delta;
    }

    let Ok((mut fly_cam, mut transform)) = query.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) && look_delta != Vec2::ZERO {
        fly_cam.yaw -= look_delta.x * fly_cam.look_sensitivity * time.delta_secs();
        fly_cam.pitch = (fly_cam.pitch - look_delta.y * fly_cam.look_sensitivity * time.delta_secs())
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        transform.rotation = Quat::from_euler(EulerRot::YXZ, fly_cam.yaw, fly_cam.pitch, 0.0);
    }

    let mut wish = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        wish.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        wish.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        wish.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        wish.x += 1.0;
    }
    if keyboard.pressed(KeyCode::Space) {
        wish.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ShiftLeft) {
        wish.y -= 1.0;
    }

    if wish != Vec3::ZERO {
        let motion = transform.rotation * wish.normalize();
        transform.translation += motion * fly_cam.move_speed * time.delta_secs();
    }
}
