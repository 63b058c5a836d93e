//! World setup systems for camera, lighting, and shared assets

use bevy::prelude::*;

use super::components::{HostResource, MainCamera, VoxelPalette};
use super::to_vec3;

/// Background color behind the world
pub const BACKGROUND: Color = Color::srgb(0.082, 0.102, 0.133);

/// System to setup the world environment (camera, lighting, palette)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    host: Res<HostResource>,
) {
    let camera = host.0.session().camera;

    // Spawn a 3D perspective camera trailing the player
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 60f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(to_vec3(camera.position))
            .looking_at(to_vec3(camera.look_at), Vec3::Y),
    ));

    // Spawn a directional light
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let mut material = |color: Color, roughness: f32, metallic: f32| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: roughness,
            metallic,
            ..default()
        })
    };

    let palette = VoxelPalette {
        cube: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        marking: meshes.add(Cuboid::new(1.0, 0.01, 0.25)),
        grass: material(Color::srgb(0.18, 0.49, 0.2), 0.9, 0.0),
        dirt: material(Color::srgb(0.47, 0.33, 0.28), 1.0, 0.0),
        road: material(Color::srgb(0.22, 0.28, 0.31), 1.0, 0.0),
        line: material(Color::srgb(1.0, 0.98, 0.77), 1.0, 0.0),
        player_body: material(Color::srgb(0.56, 0.79, 0.98), 0.7, 0.1),
        player_head: material(Color::srgb(0.73, 0.87, 0.98), 0.8, 0.0),
        car_bodies: [
            material(Color::srgb(0.94, 0.33, 0.31), 0.6, 0.2),
            material(Color::srgb(0.26, 0.65, 0.96), 0.6, 0.2),
            material(Color::srgb(1.0, 0.79, 0.16), 0.6, 0.2),
        ],
        car_top: material(Color::srgb(0.93, 0.93, 0.93), 0.8, 0.0),
    };
    commands.insert_resource(palette);
}
