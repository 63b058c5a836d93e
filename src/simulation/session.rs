//! A single play-through
//!
//! `SimSession` owns the generated lanes, the player, and the follow
//! camera. It is created once per mount/restart and never reset in place:
//! a restart throws the whole session away and builds a new one.

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::camera::FollowCamera;
use super::config::WorldConfig;
use super::generator::generate_lanes;
use super::lane::Lane;
use super::player::PlayerState;
use super::stats::SessionStats;
use super::types::{Direction, GridPos, SessionEvent};

/// Lanes drawn behind and ahead of the player by `draw_map`
const MAP_ROWS_BEHIND: i32 = 2;
const MAP_ROWS_AHEAD: i32 = 8;

/// The world, the player, and everything that happened to them
pub struct SimSession {
    pub config: WorldConfig,

    /// Lanes indexed by their z coordinate
    pub lanes: Vec<Lane>,

    pub player: PlayerState,

    pub camera: FollowCamera,

    pub stats: SessionStats,

    /// Set by the host after game over; freezes traffic and input
    disabled: bool,

    /// Set on teardown; nothing runs afterwards
    disposed: bool,

    /// Events not yet collected by the host
    events: Vec<SessionEvent>,
}

impl SimSession {
    /// Create a session with a world drawn from OS randomness
    pub fn new(config: WorldConfig) -> Result<Self> {
        Self::with_rng(config, &mut StdRng::from_os_rng())
    }

    /// Create a session with a reproducible world
    pub fn new_with_seed(config: WorldConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a session, generating the world from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: WorldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let lanes = generate_lanes(&config, rng);
        Self::from_lanes(config, lanes)
    }

    /// Create a session over a prepared set of lanes
    pub fn from_lanes(config: WorldConfig, lanes: Vec<Lane>) -> Result<Self> {
        config.validate()?;
        let player = PlayerState::new(&config);
        info!(
            "New session: {} lanes ({} roads), {} columns",
            lanes.len(),
            lanes.iter().filter(|lane| lane.is_traffic()).count(),
            config.cols
        );
        Ok(Self {
            config,
            lanes,
            player,
            camera: FollowCamera::default(),
            stats: SessionStats::default(),
            disabled: false,
            disposed: false,
            events: Vec::new(),
        })
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Freeze (or unfreeze) traffic and input
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Tear the session down. A step animation in flight stops here.
    pub fn dispose(&mut self) {
        if !self.disposed {
            debug!("Session disposed after {} ticks", self.stats.ticks);
        }
        self.disposed = true;
    }

    /// Whether the session currently accepts moves
    pub fn accepts_input(&self) -> bool {
        !self.disposed && !self.disabled && self.player.alive
    }

    /// Lane at row `z`, if one was generated there
    pub fn lane(&self, z: i32) -> Option<&Lane> {
        usize::try_from(z).ok().and_then(|i| self.lanes.get(i))
    }

    /// Farthest row reached, as reported to the host
    pub fn farthest_row(&self) -> u32 {
        self.player.farthest_z.max(0) as u32
    }

    /// Handle a directional press at time `now` (seconds).
    ///
    /// Returns the target cell if a step started. Presses while a step is
    /// running, while disabled, or after death are dropped.
    pub fn press(&mut self, direction: Direction, now: f64) -> Option<GridPos> {
        if self.disposed {
            warn!("Ignoring {:?} press on a disposed session", direction);
            return None;
        }
        if !self.accepts_input() {
            self.stats.presses_while_inactive += 1;
            return None;
        }
        match self.player.begin_step(direction, self.config.cols, now) {
            Some(target) => {
                self.stats.steps_started += 1;
                Some(target)
            }
            None => {
                self.stats.presses_while_moving += 1;
                debug!("Dropped {:?} press, step already running", direction);
                None
            }
        }
    }

    /// Advance the step animation to time `now` (seconds).
    ///
    /// When the step completes the grid cell is committed and, if the player
    /// is still alive, a score event carrying the farthest row is queued.
    pub fn advance_step(&mut self, now: f64) {
        if self.disposed {
            return;
        }
        let Some(cell) = self.player.advance(now, self.config.step_duration) else {
            return;
        };
        self.stats.steps_committed += 1;
        if !self.player.alive {
            debug!("Step to {:?} finished after game over", cell);
            return;
        }
        let farthest = self.player.record_progress();
        debug!("Step committed at {:?}, farthest row {}", cell, farthest);
        self.events.push(SessionEvent::Score(farthest.max(0) as u32));
    }

    /// One simulation tick: move traffic, check for a hit, follow with the
    /// camera, in that order.
    pub fn tick(&mut self) {
        if self.disposed {
            return;
        }
        self.stats.ticks += 1;

        self.update_vehicles();

        if !self.disabled && self.player.alive && self.player_is_hit() {
            self.end_game();
        }

        self.camera
            .update(&self.player.position, self.config.camera_smoothing);
    }

    /// Advance the step animation and run one tick
    pub fn frame(&mut self, now: f64) {
        self.advance_step(now);
        self.tick();
    }

    /// Hand pending events to the caller
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn update_vehicles(&mut self) {
        let (min_x, max_x) = (self.config.min_x(), self.config.max_x());
        for lane in &mut self.lanes {
            lane.advance_vehicles(self.config.tick_scale, self.disabled, min_x, max_x);
        }
    }

    /// Check the lane the player is committed to against the drawn position
    fn player_is_hit(&self) -> bool {
        self.lane(self.player.grid.z).is_some_and(|lane| {
            lane.hits(
                &self.player.position,
                self.config.collision_x,
                self.config.collision_z,
            )
        })
    }

    fn end_game(&mut self) {
        if self.player.kill() {
            info!(
                "Player hit at {:?} after {} ticks, farthest row {}",
                self.player.grid, self.stats.ticks, self.player.farthest_z
            );
            self.events.push(SessionEvent::GameOver);
        }
    }

    /// Print a summary of the session state
    pub fn print_summary(&self) {
        println!("=== Crossing Session Summary ===");
        println!(
            "Player: cell=({}, {}), position=({:.2}, {:.2}), {}",
            self.player.grid.x,
            self.player.grid.z,
            self.player.position.x,
            self.player.position.z,
            if self.player.alive { "alive" } else { "hit" }
        );
        println!("Farthest row: {}", self.farthest_row());
        println!(
            "Lanes: {} ({} roads), vehicles: {}",
            self.lanes.len(),
            self.lanes.iter().filter(|lane| lane.is_traffic()).count(),
            self.lanes.iter().map(|lane| lane.vehicles.len()).sum::<usize>()
        );
        println!(
            "Ticks: {}, steps: {}/{}, dropped presses: {}",
            self.stats.ticks,
            self.stats.steps_committed,
            self.stats.steps_started,
            self.stats.presses_dropped()
        );
        println!(
            "Camera: ({:.1}, {:.1}, {:.1})",
            self.camera.position.x, self.camera.position.y, self.camera.position.z
        );
    }

    /// Draw the lanes around the player as ASCII, farthest row on top
    pub fn draw_map(&self) {
        let cols = self.config.cols;
        let bottom = (self.player.grid.z - MAP_ROWS_BEHIND).max(0);
        let top = self.player.grid.z + MAP_ROWS_AHEAD;

        println!("\n=== World Map ===");
        println!("Legend: .=Grass, ==Road, C=Vehicle, @=Player, X=Hit player");
        println!();
        for z in (bottom..=top).rev() {
            let lane = self.lane(z);
            let mut row: Vec<char> = (0..cols)
                .map(|_| match lane {
                    Some(lane) if lane.is_traffic() => '=',
                    _ => '.',
                })
                .collect();

            if let Some(lane) = lane {
                for vehicle in &lane.vehicles {
                    let col = vehicle.x.round() as i32;
                    if (0..cols).contains(&col) {
                        row[col as usize] = 'C';
                    }
                }
            }

            if z == self.player.grid.z {
                let col = self.player.position.x.round().clamp(0.0, (cols - 1) as f32) as usize;
                row[col] = if self.player.alive { '@' } else { 'X' };
            }

            let line: String = row.into_iter().collect();
            println!("{:>4} {}", z, line);
        }
        println!();
    }
}
