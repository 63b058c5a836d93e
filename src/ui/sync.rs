//! Systems for driving the simulation and syncing Bevy entities with it

use bevy::prelude::*;

use super::components::{
    ControlsHint, GameOverPanel, HostResource, HudText, MainCamera, PlayerAvatar, VehicleLink,
};
use super::to_vec3;

/// System to run one simulation tick (vehicles, collision, camera)
pub fn tick_simulation(mut host: ResMut<HostResource>) {
    host.0.tick();
}

/// System to advance the player's step animation on the real clock
pub fn advance_player_step(time: Res<Time>, mut host: ResMut<HostResource>) {
    host.0.advance_step(time.elapsed_secs_f64());
}

/// System to sync vehicle transforms from simulation state
pub fn sync_vehicles(
    host: Res<HostResource>,
    mut vehicle_query: Query<(&VehicleLink, &mut Transform)>,
) {
    let lanes = &host.0.session().lanes;
    for (link, mut transform) in vehicle_query.iter_mut() {
        if let Some(vehicle) = lanes
            .get(link.lane)
            .and_then(|lane| lane.vehicles.get(link.vehicle))
        {
            transform.translation.x = vehicle.x;
        }
    }
}

/// System to sync the player avatar; a hit player is squashed flat
pub fn sync_player(
    host: Res<HostResource>,
    mut player_query: Query<&mut Transform, With<PlayerAvatar>>,
) {
    let player = &host.0.session().player;
    for mut transform in player_query.iter_mut() {
        transform.translation = Vec3::new(player.position.x, 0.5, player.position.z);
        transform.scale = if player.alive {
            Vec3::ONE
        } else {
            Vec3::new(1.2, 0.3, 1.2)
        };
    }
}

/// System to place the camera where the simulation's follow camera is
pub fn sync_camera(
    host: Res<HostResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let camera = host.0.session().camera;
    for mut transform in camera_query.iter_mut() {
        *transform = Transform::from_translation(to_vec3(camera.position))
            .looking_at(to_vec3(camera.look_at), Vec3::Y);
    }
}

/// System to update the score texts and the game-over panel
pub fn update_hud(
    host: Res<HostResource>,
    mut text_query: Query<(&HudText, &mut Text)>,
    mut panel_query: Query<&mut Visibility, (With<GameOverPanel>, Without<ControlsHint>)>,
    mut hint_query: Query<&mut Visibility, (With<ControlsHint>, Without<GameOverPanel>)>,
) {
    let scoreboard = &host.0.scoreboard;

    for (kind, mut text) in text_query.iter_mut() {
        match kind {
            HudText::Score => {
                **text = scoreboard.status_line();
            }
            HudText::FinalScore => {
                **text = scoreboard.game_over_line();
            }
        }
    }

    let (panel, hint) = if scoreboard.game_over {
        (Visibility::Inherited, Visibility::Hidden)
    } else {
        (Visibility::Hidden, Visibility::Inherited)
    };
    for mut visibility in panel_query.iter_mut() {
        visibility.set_if_neq(panel);
    }
    for mut visibility in hint_query.iter_mut() {
        visibility.set_if_neq(hint);
    }
}
