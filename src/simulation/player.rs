//! Player movement state machine
//!
//! The player lives on a discrete grid but is drawn at an interpolated
//! position while a step is animating. Only one step can be in flight;
//! presses that arrive meanwhile are dropped, not queued.

use std::time::Duration;

use super::config::WorldConfig;
use super::types::{Direction, GridPos, Position};

/// A one-cell move in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: GridPos,
    pub to: GridPos,
    /// Timestamp (seconds) the step began at
    pub started_at: f64,
}

impl Step {
    /// Animation progress in `[0, 1]` at time `now`
    pub fn progress(&self, now: f64, duration: Duration) -> f32 {
        let elapsed = (now - self.started_at).max(0.0);
        (elapsed / duration.as_secs_f64()).min(1.0) as f32
    }
}

/// Whether a step animation is running
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    Idle,
    Stepping(Step),
}

/// The player avatar
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Committed grid cell. Only changes when a step completes.
    pub grid: GridPos,
    /// Position drawn on screen and used for collisions
    pub position: Position,
    pub alive: bool,
    /// Farthest row ever committed this session
    pub farthest_z: i32,
    pub motion: Motion,
}

impl PlayerState {
    /// Player standing on the middle column of the start line
    pub fn new(config: &WorldConfig) -> Self {
        Self::at(GridPos::new(config.start_column(), 0))
    }

    /// Player standing idle on `grid`
    pub fn at(grid: GridPos) -> Self {
        Self {
            grid,
            position: grid.to_position(),
            alive: true,
            farthest_z: grid.z.max(0),
            motion: Motion::Idle,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Stepping(_))
    }

    /// Cell a press in `direction` would lead to, clamped to the grid.
    ///
    /// Columns are clamped to `[0, cols - 1]`; rows only at 0, the world has
    /// no far edge.
    pub fn target_for(&self, direction: Direction, cols: i32) -> GridPos {
        let (dx, dz) = direction.offset();
        GridPos::new(
            (self.grid.x + dx).clamp(0, cols - 1),
            (self.grid.z + dz).max(0),
        )
    }

    /// Start a step towards `direction`.
    ///
    /// Returns the target cell, or `None` if a step is already running.
    pub fn begin_step(&mut self, direction: Direction, cols: i32, now: f64) -> Option<GridPos> {
        if self.is_moving() {
            return None;
        }
        let to = self.target_for(direction, cols);
        self.motion = Motion::Stepping(Step {
            from: self.grid,
            to,
            started_at: now,
        });
        self.position = self.grid.to_position();
        Some(to)
    }

    /// Interpolate the running step at time `now`.
    ///
    /// Returns the committed cell when the step finishes.
    pub fn advance(&mut self, now: f64, duration: Duration) -> Option<GridPos> {
        let Motion::Stepping(step) = self.motion else {
            return None;
        };
        let t = step.progress(now, duration);
        self.position = step.from.to_position().lerp(&step.to.to_position(), t);
        if t < 1.0 {
            return None;
        }
        self.grid = step.to;
        self.position = step.to.to_position();
        self.motion = Motion::Idle;
        Some(step.to)
    }

    /// Fold the committed row into `farthest_z` and return the new value
    pub fn record_progress(&mut self) -> i32 {
        self.farthest_z = self.farthest_z.max(self.grid.z);
        self.farthest_z
    }

    /// Mark the player as hit. Returns true only on the first call.
    pub fn kill(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(120);

    #[test]
    fn test_starts_centered() {
        let player = PlayerState::new(&WorldConfig::default());
        assert_eq!(player.grid, GridPos::new(6, 0));
        assert_eq!(player.farthest_z, 0);
        assert!(player.alive);
        assert!(!player.is_moving());
    }

    #[test]
    fn test_targets_are_clamped() {
        let player = PlayerState::at(GridPos::new(0, 0));
        assert_eq!(player.target_for(Direction::Left, 13), GridPos::new(0, 0));
        assert_eq!(player.target_for(Direction::Down, 13), GridPos::new(0, 0));

        let player = PlayerState::at(GridPos::new(12, 100));
        assert_eq!(player.target_for(Direction::Right, 13), GridPos::new(12, 100));
        assert_eq!(player.target_for(Direction::Up, 13), GridPos::new(12, 101));
    }

    #[test]
    fn test_step_interpolates_linearly() {
        let mut player = PlayerState::new(&WorldConfig::default());
        assert_eq!(
            player.begin_step(Direction::Right, 13, 1.0),
            Some(GridPos::new(7, 0))
        );
        assert_eq!(player.advance(1.06, DURATION), None);
        assert!((player.position.x - 6.5).abs() < 1e-4);
        assert_eq!(player.grid, GridPos::new(6, 0));

        assert_eq!(player.advance(1.12, DURATION), Some(GridPos::new(7, 0)));
        assert_eq!(player.grid, GridPos::new(7, 0));
        assert_eq!(player.position.x, 7.0);
        assert!(!player.is_moving());
    }

    #[test]
    fn test_second_press_is_dropped() {
        let mut player = PlayerState::new(&WorldConfig::default());
        assert!(player.begin_step(Direction::Up, 13, 0.0).is_some());
        assert!(player.begin_step(Direction::Left, 13, 0.05).is_none());
        player.advance(0.2, DURATION);
        assert_eq!(player.grid, GridPos::new(6, 1));
    }

    #[test]
    fn test_kill_is_one_shot() {
        let mut player = PlayerState::new(&WorldConfig::default());
        assert!(player.kill());
        assert!(!player.kill());
        assert!(!player.alive);
    }
}
