//! Procedural lane generation

use log::debug;
use rand::Rng;

use super::config::WorldConfig;
use super::lane::{Lane, LaneKind, Vehicle};

/// Build the lanes of a fresh world.
///
/// The first `safe_start_lanes` lanes are always grass. Every later lane is
/// a road with probability `traffic_probability`. Roads carry a random number
/// of vehicles scattered across a range wider than the visible columns so
/// traffic is already flowing when the session starts.
pub fn generate_lanes<R: Rng + ?Sized>(config: &WorldConfig, rng: &mut R) -> Vec<Lane> {
    let mut lanes = Vec::with_capacity(config.rows.max(0) as usize);

    for index in 0..config.rows {
        let kind = if index < config.safe_start_lanes {
            LaneKind::Safe
        } else if rng.random_bool(config.traffic_probability) {
            LaneKind::Traffic
        } else {
            LaneKind::Safe
        };

        // Direction and speed are drawn for every lane so the random stream
        // does not depend on the lane kind.
        let direction = if rng.random_bool(0.5) { -1 } else { 1 };
        let speed = rng.random_range(config.speed_range.clone());

        let vehicles = match kind {
            LaneKind::Safe => Vec::new(),
            LaneKind::Traffic => {
                let count = rng.random_range(config.vehicles_per_lane.clone());
                (0..count)
                    .map(|_| Vehicle::new(rng.random_range(config.spawn_range()), index))
                    .collect()
            }
        };

        lanes.push(Lane {
            index,
            kind,
            direction,
            speed,
            vehicles,
        });
    }

    debug!(
        "Generated {} lanes ({} roads)",
        lanes.len(),
        lanes.iter().filter(|lane| lane.is_traffic()).count()
    );

    lanes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_start_lanes_are_safe_for_any_seed() {
        let config = WorldConfig {
            traffic_probability: 1.0,
            ..Default::default()
        };
        for seed in 0..64 {
            let lanes = generate_lanes(&config, &mut StdRng::seed_from_u64(seed));
            assert_eq!(lanes.len(), config.rows as usize);
            for lane in lanes.iter().take(3) {
                assert_eq!(lane.kind, LaneKind::Safe);
                assert!(lane.vehicles.is_empty());
            }
            assert!(lanes[3..].iter().all(|lane| lane.is_traffic()));
        }
    }

    #[test]
    fn test_traffic_lanes_within_bands() {
        let config = WorldConfig::default();
        for seed in 0..64 {
            let lanes = generate_lanes(&config, &mut StdRng::seed_from_u64(seed));
            for (i, lane) in lanes.iter().enumerate() {
                assert_eq!(lane.index, i as i32);
                assert!(lane.direction == -1 || lane.direction == 1);
                if !lane.is_traffic() {
                    continue;
                }
                assert!((2..=4).contains(&lane.vehicles.len()));
                assert!(config.speed_range.contains(&lane.speed));
                for vehicle in &lane.vehicles {
                    assert_eq!(vehicle.lane_index, lane.index);
                    assert!(config.spawn_range().contains(&vehicle.x));
                }
            }
        }
    }

    #[test]
    fn test_no_traffic_when_probability_zero() {
        let config = WorldConfig {
            traffic_probability: 0.0,
            ..Default::default()
        };
        let lanes = generate_lanes(&config, &mut StdRng::seed_from_u64(7));
        assert!(lanes.iter().all(|lane| !lane.is_traffic()));
    }

    #[test]
    fn test_same_seed_same_world() {
        let config = WorldConfig::default();
        let a = generate_lanes(&config, &mut StdRng::seed_from_u64(42));
        let b = generate_lanes(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
