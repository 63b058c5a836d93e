//! Lanes and the vehicles driving on them
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::Position;

/// What kind of terrain a lane is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    /// Grass, never carries vehicles
    Safe,
    /// Road with moving vehicles
    Traffic,
}

/// A vehicle on a traffic lane
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Lateral position in world units
    pub x: f32,
    /// Index of the lane this vehicle drives on (its z coordinate)
    pub lane_index: i32,
}

impl Vehicle {
    pub fn new(x: f32, lane_index: i32) -> Self {
        Self { x, lane_index }
    }

    /// Move the vehicle by `delta` and wrap it to the opposite bound once it
    /// leaves `[min_x, max_x]`.
    pub fn advance(&mut self, delta: f32, min_x: f32, max_x: f32) {
        self.x += delta;
        if self.x < min_x {
            self.x = max_x;
        } else if self.x > max_x {
            self.x = min_x;
        }
    }
}

/// One row of the world grid
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub index: i32,
    pub kind: LaneKind,
    /// Travel direction of the lane's vehicles, -1 or +1
    pub direction: i32,
    pub speed: f32,
    pub vehicles: Vec<Vehicle>,
}

impl Lane {
    pub fn safe(index: i32) -> Self {
        Self {
            index,
            kind: LaneKind::Safe,
            direction: 1,
            speed: 0.0,
            vehicles: Vec::new(),
        }
    }

    pub fn traffic(index: i32, direction: i32, speed: f32, vehicle_xs: &[f32]) -> Self {
        Self {
            index,
            kind: LaneKind::Traffic,
            direction: direction.signum(),
            speed,
            vehicles: vehicle_xs.iter().map(|&x| Vehicle::new(x, index)).collect(),
        }
    }

    pub fn is_traffic(&self) -> bool {
        self.kind == LaneKind::Traffic
    }

    /// Lateral displacement for one tick
    pub fn tick_delta(&self, tick_scale: f32) -> f32 {
        let direction = if self.direction < 0 { -1.0 } else { 1.0 };
        self.speed * direction * tick_scale
    }

    /// Advance every vehicle of a traffic lane by one tick.
    ///
    /// A frozen lane keeps its vehicles where they are.
    pub fn advance_vehicles(&mut self, tick_scale: f32, frozen: bool, min_x: f32, max_x: f32) {
        if !self.is_traffic() {
            return;
        }
        let delta = if frozen {
            0.0
        } else {
            self.tick_delta(tick_scale)
        };
        for vehicle in &mut self.vehicles {
            vehicle.advance(delta, min_x, max_x);
        }
    }

    /// Whether any vehicle on this lane overlaps `position`
    pub fn hits(&self, position: &Position, collision_x: f32, collision_z: f32) -> bool {
        if !self.is_traffic() {
            return false;
        }
        let dz = (self.index as f32 - position.z).abs();
        self.vehicles
            .iter()
            .any(|vehicle| overlaps((vehicle.x - position.x).abs(), dz, collision_x, collision_z))
    }
}

/// Axis-aligned threshold test. Both distances must be strictly below
/// their thresholds.
pub fn overlaps(dx: f32, dz: f32, collision_x: f32, collision_z: f32) -> bool {
    dx < collision_x && dz < collision_z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_thresholds_are_strict() {
        assert!(!overlaps(0.7, 0.0, 0.7, 0.6));
        assert!(!overlaps(0.7001, 0.0, 0.7, 0.6));
        assert!(overlaps(0.6999, 0.0, 0.7, 0.6));
        assert!(!overlaps(0.0, 0.6, 0.7, 0.6));
        assert!(!overlaps(0.0, 0.6001, 0.7, 0.6));
        assert!(overlaps(0.0, 0.5999, 0.7, 0.6));
    }

    #[test]
    fn test_vehicle_wraps_both_ways() {
        let mut vehicle = Vehicle::new(18.9, 4);
        vehicle.advance(0.2, -6.0, 19.0);
        assert_eq!(vehicle.x, -6.0);

        let mut vehicle = Vehicle::new(-5.9, 4);
        vehicle.advance(-0.2, -6.0, 19.0);
        assert_eq!(vehicle.x, 19.0);
    }

    #[test]
    fn test_safe_lane_never_hits() {
        let lane = Lane::safe(2);
        assert!(!lane.hits(&Position::new(0.0, 0.0, 2.0), 0.7, 0.6));
    }

    #[test]
    fn test_traffic_lane_hits_nearby_player() {
        let lane = Lane::traffic(5, -1, 1.5, &[3.0, 10.0]);
        assert!(lane.hits(&Position::new(3.5, 0.0, 5.0), 0.7, 0.6));
        assert!(!lane.hits(&Position::new(3.7, 0.0, 5.0), 0.7, 0.6));
        assert!(!lane.hits(&Position::new(3.0, 0.0, 4.0), 0.7, 0.6));
    }

    #[test]
    fn test_frozen_lane_keeps_positions() {
        let mut lane = Lane::traffic(3, 1, 2.0, &[1.0, 4.0]);
        lane.advance_vehicles(1.0 / 60.0, true, -6.0, 19.0);
        assert_eq!(lane.vehicles[0].x, 1.0);
        assert_eq!(lane.vehicles[1].x, 4.0);

        lane.advance_vehicles(0.5, false, -6.0, 19.0);
        assert_eq!(lane.vehicles[0].x, 2.0);
        assert_eq!(lane.vehicles[1].x, 5.0);
    }
}
