//! Tunable world parameters
//!
//! Every constant the generator and the simulation loop depend on lives here
//! so a session can be built with a different world shape (tests use tiny,
//! traffic-free worlds; the CLI can override the grid size).

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use anyhow::{bail, Result};

/// Number of columns the player can stand on (x from 0 to 12)
pub const DEFAULT_COLS: i32 = 13;

/// Number of lanes generated ahead of the start line
pub const DEFAULT_ROWS: i32 = 40;

/// Leading lanes that are always grass
pub const SAFE_START_LANES: i32 = 3;

/// Chance that a lane after the start zone is a road
pub const TRAFFIC_PROBABILITY: f64 = 0.55;

/// How long a single one-cell step takes to animate
pub const STEP_DURATION: Duration = Duration::from_millis(120);

/// Nominal time step per simulation tick (60 Hz)
pub const TICK_SCALE: f32 = 1.0 / 60.0;

/// Lateral distance under which a vehicle hits the player
pub const COLLISION_X: f32 = 0.7;

/// Forward distance under which a vehicle hits the player
pub const COLLISION_Z: f32 = 0.6;

/// Fraction of the remaining distance the camera covers each tick
pub const CAMERA_SMOOTHING: f32 = 0.1;

/// Shape and tuning of a world
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub cols: i32,
    pub rows: i32,
    pub safe_start_lanes: i32,
    pub traffic_probability: f64,
    pub speed_range: Range<f32>,
    pub vehicles_per_lane: RangeInclusive<usize>,
    /// Vehicles spawn anywhere in `[-spawn_margin, cols + spawn_margin)`
    pub spawn_margin: f32,
    /// Vehicles wrap once they leave `[-wrap_margin, cols + wrap_margin]`
    pub wrap_margin: f32,
    pub step_duration: Duration,
    pub tick_scale: f32,
    pub collision_x: f32,
    pub collision_z: f32,
    pub camera_smoothing: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            safe_start_lanes: SAFE_START_LANES,
            traffic_probability: TRAFFIC_PROBABILITY,
            speed_range: 1.2..2.4,
            vehicles_per_lane: 2..=4,
            spawn_margin: 5.0,
            wrap_margin: 6.0,
            step_duration: STEP_DURATION,
            tick_scale: TICK_SCALE,
            collision_x: COLLISION_X,
            collision_z: COLLISION_Z,
            camera_smoothing: CAMERA_SMOOTHING,
        }
    }
}

impl WorldConfig {
    /// Column the player starts on
    pub fn start_column(&self) -> i32 {
        self.cols / 2
    }

    /// Left wrap boundary for vehicles
    pub fn min_x(&self) -> f32 {
        -self.wrap_margin
    }

    /// Right wrap boundary for vehicles
    pub fn max_x(&self) -> f32 {
        self.cols as f32 + self.wrap_margin
    }

    /// Range vehicle start positions are drawn from
    pub fn spawn_range(&self) -> Range<f32> {
        -self.spawn_margin..self.cols as f32 + self.spawn_margin
    }

    /// Check that the configuration describes a playable world
    pub fn validate(&self) -> Result<()> {
        if self.cols <= 0 {
            bail!("World needs at least one column, got {}", self.cols);
        }
        if self.rows <= 0 {
            bail!("World needs at least one lane, got {}", self.rows);
        }
        if self.safe_start_lanes < 0 {
            bail!(
                "Safe start lanes must not be negative, got {}",
                self.safe_start_lanes
            );
        }
        if !(0.0..=1.0).contains(&self.traffic_probability) {
            bail!(
                "Traffic probability must be within [0, 1], got {}",
                self.traffic_probability
            );
        }
        if self.speed_range.is_empty() || self.speed_range.start <= 0.0 {
            bail!("Invalid lane speed range {:?}", self.speed_range);
        }
        if self.vehicles_per_lane.is_empty() || *self.vehicles_per_lane.start() == 0 {
            bail!("Invalid vehicle count range {:?}", self.vehicles_per_lane);
        }
        if self.spawn_margin < 0.0 || self.wrap_margin < self.spawn_margin {
            bail!(
                "Wrap margin ({}) must cover the spawn margin ({})",
                self.wrap_margin,
                self.spawn_margin
            );
        }
        if self.step_duration.is_zero() {
            bail!("Step duration must be positive");
        }
        if self.tick_scale <= 0.0 {
            bail!("Tick scale must be positive, got {}", self.tick_scale);
        }
        if self.collision_x <= 0.0 || self.collision_z <= 0.0 {
            bail!(
                "Collision thresholds must be positive, got ({}, {})",
                self.collision_x,
                self.collision_z
            );
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) || self.camera_smoothing == 0.0 {
            bail!(
                "Camera smoothing must be within (0, 1], got {}",
                self.camera_smoothing
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_column(), 6);
        assert_eq!(config.min_x(), -6.0);
        assert_eq!(config.max_x(), 19.0);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = WorldConfig {
            cols: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_world_is_all_start_zone() {
        let config = WorldConfig {
            rows: 2,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = WorldConfig {
            safe_start_lanes: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let config = WorldConfig {
            traffic_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            vehicles_per_lane: 0..=3,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            speed_range: 2.0..2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            safe_start_lanes: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_step_duration() {
        let config = WorldConfig {
            step_duration: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
