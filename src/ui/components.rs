//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::GameHost;

/// Resource wrapper for the host that owns the running session
#[derive(Resource)]
pub struct HostResource(pub GameHost);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for every entity that belongs to the current session.
///
/// All of them are despawned on restart and rebuilt from the new session.
#[derive(Component)]
pub struct SessionVisual;

/// Marker for the player avatar
#[derive(Component)]
pub struct PlayerAvatar;

/// Links a Bevy entity to a vehicle of the simulation
#[derive(Component)]
pub struct VehicleLink {
    pub lane: usize,
    pub vehicle: usize,
}

/// HUD text elements that show scoreboard values
#[derive(Component)]
pub enum HudText {
    /// Score badge in the top-left corner
    Score,
    /// Sentence on the game-over panel
    FinalScore,
}

/// Marker for the game-over panel
#[derive(Component)]
pub struct GameOverPanel;

/// Marker for the key hint row, hidden after game over
#[derive(Component)]
pub struct ControlsHint;

/// Marker for the restart button
#[derive(Component)]
pub struct RestartButton;

/// Request to throw the current session away and start a new one
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RestartRequested;

/// Shared meshes and materials for the voxel look.
///
/// Built once so restarts reuse the same assets.
#[derive(Resource)]
pub struct VoxelPalette {
    pub cube: Handle<Mesh>,
    pub marking: Handle<Mesh>,
    pub grass: Handle<StandardMaterial>,
    pub dirt: Handle<StandardMaterial>,
    pub road: Handle<StandardMaterial>,
    pub line: Handle<StandardMaterial>,
    pub player_body: Handle<StandardMaterial>,
    pub player_head: Handle<StandardMaterial>,
    pub car_bodies: [Handle<StandardMaterial>; 3],
    pub car_top: Handle<StandardMaterial>,
}
