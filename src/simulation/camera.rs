//! Follow camera math
//!
//! Pure presentation: the camera has no effect on gameplay, it only eases
//! towards a point ahead of and above the player.

use super::types::Position;

/// Smoothed camera that trails the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub position: Position,
    pub look_at: Position,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Position::new(6.0, 10.0, 14.0),
            look_at: Position::new(6.0, 0.0, 8.0),
        }
    }
}

impl FollowCamera {
    /// Where the camera wants to be for a player at `player`
    pub fn desired_position(player: &Position) -> Position {
        Position::new(player.x + 2.0, 10.0, player.z + 6.0 + 8.0)
    }

    /// Ease towards the desired position by `smoothing` of the remaining
    /// distance and aim slightly ahead of the player.
    pub fn update(&mut self, player: &Position, smoothing: f32) {
        let desired = Self::desired_position(player);
        self.position = self.position.lerp(&desired, smoothing);
        self.look_at = Position::new(player.x, 0.0, player.z + 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_without_overshoot() {
        let mut camera = FollowCamera::default();
        let player = Position::new(6.0, 0.0, 20.0);
        let desired = FollowCamera::desired_position(&player);

        let mut last_distance = camera.position.distance(&desired);
        for _ in 0..200 {
            camera.update(&player, 0.1);
            let distance = camera.position.distance(&desired);
            assert!(distance <= last_distance);
            assert!(camera.position.z <= desired.z);
            last_distance = distance;
        }
        assert!(last_distance < 0.01);
        assert_eq!(camera.look_at, Position::new(6.0, 0.0, 22.0));
    }
}
