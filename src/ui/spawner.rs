//! Spawning of session visuals
//!
//! Everything spawned here is tagged `SessionVisual` so a restart can tear
//! the whole scene down and rebuild it from the new session.

use bevy::prelude::*;

use super::components::{HostResource, PlayerAvatar, SessionVisual, VehicleLink, VoxelPalette};
use crate::simulation::{Lane, SimSession};

/// Rows of dirt drawn before the start line and past the last lane
const BASE_PADDING: i32 = 2;

/// System to create the visuals of the first session
pub fn spawn_initial_visuals(
    mut commands: Commands,
    palette: Res<VoxelPalette>,
    host: Res<HostResource>,
) {
    spawn_session_visuals(&mut commands, &palette, host.0.session());
}

/// Spawn ground, lanes, vehicles and the player for `session`
pub fn spawn_session_visuals(commands: &mut Commands, palette: &VoxelPalette, session: &SimSession) {
    let cols = session.config.cols;
    let rows = session.lanes.len() as i32;

    // Dirt platform under everything
    for z in -BASE_PADDING..rows + BASE_PADDING {
        for x in -1..=cols {
            commands.spawn((
                SessionVisual,
                Mesh3d(palette.cube.clone()),
                MeshMaterial3d(palette.dirt.clone()),
                Transform::from_xyz(x as f32, -0.5, z as f32),
            ));
        }
    }

    for (lane_index, lane) in session.lanes.iter().enumerate() {
        spawn_lane_visual(commands, palette, lane, cols);
        for vehicle_index in 0..lane.vehicles.len() {
            spawn_vehicle_visual(commands, palette, lane, lane_index, vehicle_index);
        }
    }

    spawn_player_visual(commands, palette, session);
}

/// Spawn the surface tiles of one lane, plus dashed markings on roads
pub fn spawn_lane_visual(commands: &mut Commands, palette: &VoxelPalette, lane: &Lane, cols: i32) {
    let z = lane.index as f32;
    let material = if lane.is_traffic() {
        palette.road.clone()
    } else {
        palette.grass.clone()
    };

    for x in 0..cols {
        commands.spawn((
            SessionVisual,
            Mesh3d(palette.cube.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(x as f32, 0.0, z),
        ));
    }

    if lane.is_traffic() {
        for x in (0..cols).step_by(2) {
            commands.spawn((
                SessionVisual,
                Mesh3d(palette.marking.clone()),
                MeshMaterial3d(palette.line.clone()),
                Transform::from_xyz(x as f32 + 0.5, 0.51, z + 0.5),
            ));
        }
    }
}

/// Spawn a two-block car linked to its simulation vehicle
pub fn spawn_vehicle_visual(
    commands: &mut Commands,
    palette: &VoxelPalette,
    lane: &Lane,
    lane_index: usize,
    vehicle_index: usize,
) {
    let vehicle = &lane.vehicles[vehicle_index];
    let body = palette.car_bodies[vehicle_index % palette.car_bodies.len()].clone();

    commands
        .spawn((
            SessionVisual,
            VehicleLink {
                lane: lane_index,
                vehicle: vehicle_index,
            },
            Transform::from_xyz(vehicle.x, 0.4, lane.index as f32),
            Visibility::default(),
        ))
        .with_children(|car| {
            car.spawn((
                Mesh3d(palette.cube.clone()),
                MeshMaterial3d(body),
                Transform::from_scale(Vec3::new(1.3, 0.8, 0.9)),
            ));
            car.spawn((
                Mesh3d(palette.cube.clone()),
                MeshMaterial3d(palette.car_top.clone()),
                Transform::from_xyz(0.0, 0.7, 0.0).with_scale(Vec3::new(0.9, 0.5, 0.7)),
            ));
        });
}

/// Spawn the player avatar at its starting cell
pub fn spawn_player_visual(commands: &mut Commands, palette: &VoxelPalette, session: &SimSession) {
    let position = session.player.position;

    commands
        .spawn((
            SessionVisual,
            PlayerAvatar,
            Transform::from_xyz(position.x, 0.5, position.z),
            Visibility::default(),
        ))
        .with_children(|player| {
            player.spawn((
                Mesh3d(palette.cube.clone()),
                MeshMaterial3d(palette.player_body.clone()),
                Transform::from_xyz(0.0, 0.45, 0.0).with_scale(Vec3::splat(0.9)),
            ));
            player.spawn((
                Mesh3d(palette.cube.clone()),
                MeshMaterial3d(palette.player_head.clone()),
                Transform::from_xyz(0.0, 1.1, 0.0).with_scale(Vec3::splat(0.6)),
            ));
        });
}
