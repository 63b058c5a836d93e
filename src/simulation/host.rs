//! Owner of the running session
//!
//! The host mounts a session, forwards its events into the scoreboard, feeds
//! the game-over flag back as the session's `disabled` input, and rebuilds
//! everything from scratch on restart.

use anyhow::Result;
use log::info;

use super::config::WorldConfig;
use super::scoreboard::Scoreboard;
use super::session::SimSession;
use super::types::{Direction, GridPos};

pub struct GameHost {
    config: WorldConfig,

    /// Base seed for reproducible runs; `None` draws from the OS
    seed: Option<u64>,

    session: SimSession,

    pub scoreboard: Scoreboard,
}

impl GameHost {
    pub fn new(config: WorldConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Host whose sessions are seeded from `seed` and the restart count
    pub fn new_with_seed(config: WorldConfig, seed: u64) -> Result<Self> {
        Self::build(config, Some(seed))
    }

    fn build(config: WorldConfig, seed: Option<u64>) -> Result<Self> {
        let scoreboard = Scoreboard::new();
        let session = Self::mount(&config, seed, scoreboard.restart_token)?;
        Ok(Self {
            config,
            seed,
            session,
            scoreboard,
        })
    }

    fn mount(config: &WorldConfig, seed: Option<u64>, token: u64) -> Result<SimSession> {
        match seed {
            Some(seed) => SimSession::new_with_seed(config.clone(), seed.wrapping_add(token)),
            None => SimSession::new(config.clone()),
        }
    }

    pub fn session(&self) -> &SimSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SimSession {
        &mut self.session
    }

    pub fn press(&mut self, direction: Direction, now: f64) -> Option<GridPos> {
        self.session.set_disabled(self.scoreboard.game_over);
        self.session.press(direction, now)
    }

    pub fn advance_step(&mut self, now: f64) {
        self.session.advance_step(now);
        self.collect_events();
    }

    pub fn tick(&mut self) {
        self.session.set_disabled(self.scoreboard.game_over);
        self.session.tick();
        self.collect_events();
    }

    pub fn frame(&mut self, now: f64) {
        self.advance_step(now);
        self.tick();
    }

    fn collect_events(&mut self) {
        for event in self.session.drain_events() {
            self.scoreboard.apply(event);
        }
        self.session.set_disabled(self.scoreboard.game_over);
    }

    /// Throw the current session away and start a fresh one
    pub fn restart(&mut self) -> Result<()> {
        let session = Self::mount(&self.config, self.seed, self.scoreboard.restart_token + 1)?;
        self.session.dispose();
        self.session = session;
        self.scoreboard.reset_for_restart();
        info!("Restarted, session #{}", self.scoreboard.restart_token);
        Ok(())
    }
}
