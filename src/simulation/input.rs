//! Injected move sources
//!
//! The session never reads a keyboard. Whatever produces moves (a human via
//! the Bevy front end, a script, or the autopilot) hands them in through
//! `SimSession::press`. Headless runs and tests use the sources here.

use std::collections::VecDeque;

use anyhow::{bail, Result};
use ordered_float::OrderedFloat;

use super::lane::Lane;
use super::session::SimSession;
use super::types::Direction;

/// Something that decides the next move while the player is idle
pub trait MoveSource {
    /// Next move to press, or `None` to wait this frame
    fn next_move(&mut self, session: &SimSession) -> Option<Direction>;
}

/// A fixed list of moves, consumed one per idle frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    /// `None` entries are deliberate pauses
    moves: VecDeque<Option<Direction>>,
}

impl ScriptedMoves {
    /// Parse a move script.
    ///
    /// Comma-separated scripts are read as key names (`ArrowUp,ArrowUp,d`),
    /// anything else one character per move: `w a s d` in either case,
    /// `^ v < >`, and `.` to wait a frame. Whitespace is ignored.
    pub fn parse(script: &str) -> Result<Self> {
        let mut moves = VecDeque::new();
        if script.contains(',') {
            for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                moves.push_back(Self::parse_token(token)?);
            }
        } else {
            for c in script.chars().filter(|c| !c.is_whitespace()) {
                let token = match c {
                    '^' => "ArrowUp".to_string(),
                    'v' => "ArrowDown".to_string(),
                    '<' => "ArrowLeft".to_string(),
                    '>' => "ArrowRight".to_string(),
                    _ => c.to_string(),
                };
                moves.push_back(Self::parse_token(&token)?);
            }
        }
        Ok(Self { moves })
    }

    fn parse_token(token: &str) -> Result<Option<Direction>> {
        if token == "." || token.eq_ignore_ascii_case("wait") {
            return Ok(None);
        }
        match Direction::from_key(token) {
            Some(direction) => Ok(Some(direction)),
            None => bail!("Unknown move '{}' in script", token),
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _session: &SimSession) -> Option<Direction> {
        self.moves.pop_front().flatten()
    }
}

/// A cautious player: advances when the next lane is clear, sidesteps when
/// its own lane gets dangerous, otherwise waits.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How many ticks of vehicle travel to treat as dangerous
    pub lookahead_ticks: u32,
    /// Minimum lateral gap to a vehicle's swept path
    pub clearance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead_ticks: 30,
            clearance: 1.2,
        }
    }
}

impl Autopilot {
    /// Smallest gap between `x` and any vehicle's path over the lookahead
    fn nearest_gap(&self, lane: &Lane, x: f32, tick_scale: f32) -> Option<OrderedFloat<f32>> {
        if !lane.is_traffic() {
            return None;
        }
        let sweep = lane.tick_delta(tick_scale) * self.lookahead_ticks as f32;
        lane.vehicles
            .iter()
            .map(|vehicle| {
                let (lo, hi) = if sweep >= 0.0 {
                    (vehicle.x, vehicle.x + sweep)
                } else {
                    (vehicle.x + sweep, vehicle.x)
                };
                OrderedFloat((lo - x).max(x - hi).max(0.0))
            })
            .min()
    }

    fn is_clear(&self, session: &SimSession, z: i32, x: i32) -> bool {
        session
            .lane(z)
            .and_then(|lane| self.nearest_gap(lane, x as f32, session.config.tick_scale))
            .is_none_or(|gap| gap.into_inner() >= self.clearance)
    }
}

impl MoveSource for Autopilot {
    fn next_move(&mut self, session: &SimSession) -> Option<Direction> {
        let grid = session.player.grid;
        if self.is_clear(session, grid.z + 1, grid.x) {
            return Some(Direction::Up);
        }
        if self.is_clear(session, grid.z, grid.x) {
            return None;
        }
        [Direction::Left, Direction::Right, Direction::Down]
            .into_iter()
            .find(|direction| {
                let target = session.player.target_for(*direction, session.config.cols);
                target != grid && self.is_clear(session, target.z, target.x)
            })
    }
}
