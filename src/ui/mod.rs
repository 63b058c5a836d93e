//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization and input routing - all game
//! logic is in the `simulation` module. The UI reads state from the
//! `GameHost` and renders it using Bevy's 3D graphics.
//!
//! The plugin expects a `HostResource` to be inserted before it runs.

mod components;
mod hud;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{HostResource, RestartRequested};

use crate::simulation::Position;
use hud::{apply_restart, handle_restart_button, setup_hud};
use input::{handle_input, handle_movement_keys, handle_restart_key};
use spawner::spawn_initial_visuals;
use sync::{
    advance_player_step, sync_camera, sync_player, sync_vehicles, tick_simulation, update_hud,
};
use world::{setup_world, BACKGROUND};

/// Simulation ticks per second; each tick moves traffic by the nominal step
const TICK_RATE_HZ: f64 = 60.0;

/// Plugin to register all UI systems
pub struct LaneCrosserUIPlugin;

impl Plugin for LaneCrosserUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_message::<RestartRequested>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_initial_visuals.after(setup_world),
                    setup_hud,
                ),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_movement_keys,
                    advance_player_step.after(handle_movement_keys),
                    handle_restart_key,
                    handle_restart_button,
                    apply_restart
                        .after(handle_restart_key)
                        .after(handle_restart_button),
                    sync_vehicles.after(apply_restart),
                    sync_player.after(advance_player_step).after(apply_restart),
                    sync_camera,
                    update_hud.after(apply_restart),
                ),
            );
    }
}

/// Convert a simulation position into a Bevy vector
pub(crate) fn to_vec3(position: Position) -> Vec3 {
    Vec3::new(position.x, position.y, position.z)
}
