//! Standalone crossing simulation module
//!
//! This module contains all the core game logic (world generation, player
//! movement, traffic, collisions, camera, scoring) and runs independently
//! of the Bevy game engine. It can be tested via console without needing to
//! boot up the full game.

mod camera;
mod config;
mod generator;
mod host;
mod input;
mod lane;
mod player;
mod scoreboard;
mod session;
mod stats;
mod types;

// Re-export public types for external use
pub use camera::FollowCamera;
pub use config::{
    WorldConfig, CAMERA_SMOOTHING, COLLISION_X, COLLISION_Z, DEFAULT_COLS, DEFAULT_ROWS,
    SAFE_START_LANES, STEP_DURATION, TICK_SCALE, TRAFFIC_PROBABILITY,
};
pub use generator::generate_lanes;
pub use host::GameHost;
pub use input::{Autopilot, MoveSource, ScriptedMoves};
pub use lane::{overlaps, Lane, LaneKind, Vehicle};
pub use player::{Motion, PlayerState, Step};
pub use scoreboard::Scoreboard;
pub use session::SimSession;
pub use stats::SessionStats;
pub use types::{Direction, GridPos, Position, SessionEvent};
