//! Per-session counters

use log::info;

/// Counters collected while a session runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub steps_started: u32,
    pub steps_committed: u32,
    /// Presses that arrived while a step was already running
    pub presses_while_moving: u32,
    /// Presses rejected because the session was disabled or the player dead
    pub presses_while_inactive: u32,
}

impl SessionStats {
    pub fn presses_dropped(&self) -> u32 {
        self.presses_while_moving + self.presses_while_inactive
    }

    /// Log the final report of a session
    pub fn log_report(&self, farthest_row: u32, game_over: bool) {
        info!("=== SESSION COMPLETE ===");
        info!("Farthest row: {}", farthest_row);
        info!("Game over: {}", if game_over { "yes" } else { "no" });
        info!("Ticks simulated: {}", self.ticks);
        info!("Steps started: {}", self.steps_started);
        info!("Steps committed: {}", self.steps_committed);
        info!("Presses dropped: {}", self.presses_dropped());
    }
}
