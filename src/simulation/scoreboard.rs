//! Host-side game state
//!
//! This is what the HUD shows: the best row reached, whether the run is over,
//! and which restart we are on. It only learns about the session through
//! `SessionEvent`s.

use super::types::SessionEvent;

/// Score and game-over flag as displayed to the player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Farthest row reached in the current session
    pub score: u32,

    /// Whether the current session ended in a collision
    pub game_over: bool,

    /// Incremented on every restart; identifies the current session
    pub restart_token: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the best score seen so far
    pub fn record_score(&mut self, score: u32) {
        self.score = self.score.max(score);
    }

    pub fn record_game_over(&mut self) {
        self.game_over = true;
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Score(score) => self.record_score(score),
            SessionEvent::GameOver => self.record_game_over(),
        }
    }

    /// Clear the score and game-over flag for a new session
    pub fn reset_for_restart(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.restart_token += 1;
    }

    /// Text for the score badge
    pub fn status_line(&self) -> String {
        format!("Farthest row: {}", self.score)
    }

    /// Text for the game-over panel
    pub fn game_over_line(&self) -> String {
        format!("You were hit by a car. Final score: {}", self.score)
    }
}
