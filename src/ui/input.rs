//! Input handling systems

use bevy::prelude::*;

use super::components::{HostResource, RestartRequested};
use crate::simulation::Direction;

/// Keyboard binding for the four moves (arrows and WASD)
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
        _ => None,
    }
}

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Forward directional key presses to the session.
///
/// The session itself drops presses while a step is running or the game is
/// over, so nothing is queued here.
pub fn handle_movement_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut host: ResMut<HostResource>,
) {
    let now = time.elapsed_secs_f64();
    for direction in keyboard
        .get_just_pressed()
        .filter_map(|key| direction_for_key(*key))
    {
        host.0.press(direction, now);
    }
}

/// R restarts once the run is over
pub fn handle_restart_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    host: Res<HostResource>,
    mut restart: MessageWriter<RestartRequested>,
) {
    if host.0.scoreboard.game_over && keyboard.just_pressed(KeyCode::KeyR) {
        restart.write(RestartRequested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_bindings() {
        assert_eq!(direction_for_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::KeyW), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(direction_for_key(KeyCode::Space), None);
    }
}
