//! Gameplay validation tests
//!
//! These drive sessions through the public simulation API exactly the way a
//! front end would: presses with timestamps, steps, and ticks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lane_crosser::simulation::{
    Direction, GameHost, GridPos, Lane, LaneKind, PlayerState, SessionEvent, SimSession,
    WorldConfig, STEP_DURATION,
};

fn step_secs() -> f64 {
    STEP_DURATION.as_secs_f64()
}

fn safe_config() -> WorldConfig {
    WorldConfig {
        traffic_probability: 0.0,
        ..Default::default()
    }
}

/// World of grass with a single road at `road_z` carrying one vehicle
fn session_with_road(road_z: i32, vehicle_x: f32, speed: f32) -> SimSession {
    let config = WorldConfig::default();
    let lanes = (0..config.rows)
        .map(|z| {
            if z == road_z {
                Lane::traffic(z, 1, speed, &[vehicle_x])
            } else {
                Lane::safe(z)
            }
        })
        .collect();
    SimSession::from_lanes(config, lanes).expect("valid config")
}

#[test]
fn test_scenario_single_step_forward() {
    let config = WorldConfig {
        cols: 13,
        ..safe_config()
    };
    let mut session = SimSession::new_with_seed(config, 2024).unwrap();
    assert_eq!(session.player.grid, GridPos::new(6, 0));

    assert_eq!(session.press(Direction::Up, 0.0), Some(GridPos::new(6, 1)));
    session.frame(step_secs() / 2.0);
    assert!(session.drain_events().is_empty());
    assert_eq!(session.player.grid, GridPos::new(6, 0));

    session.frame(step_secs());
    assert_eq!(session.drain_events(), vec![SessionEvent::Score(1)]);
    assert_eq!(session.player.grid, GridPos::new(6, 1));
}

#[test]
fn test_scenario_vehicle_hits_player() {
    let mut session = session_with_road(5, 6.0, 1.2);
    session.player = PlayerState::at(GridPos::new(6, 5));

    session.tick();
    assert_eq!(session.drain_events(), vec![SessionEvent::GameOver]);
    assert!(!session.player.alive);

    // Further ticks never report the crash again and never move the score
    for _ in 0..500 {
        session.tick();
    }
    assert!(session.drain_events().is_empty());
    assert_eq!(session.player.farthest_z, 5);
}

#[test]
fn test_scenario_restart_after_game_over() {
    let config = WorldConfig {
        traffic_probability: 1.0,
        ..Default::default()
    };
    let mut host = GameHost::new_with_seed(config, 77).unwrap();

    host.press(Direction::Up, 0.0);
    host.frame(1.0);
    assert_eq!(host.scoreboard.score, 1);

    let session = host.session_mut();
    session.player = PlayerState::at(GridPos::new(6, 4));
    session.lanes[4].vehicles[0].x = 6.0;
    host.tick();
    assert!(host.scoreboard.game_over);
    let frozen: Vec<f32> = host.session().lanes[5]
        .vehicles
        .iter()
        .map(|vehicle| vehicle.x)
        .collect();
    host.tick();
    let after: Vec<f32> = host.session().lanes[5]
        .vehicles
        .iter()
        .map(|vehicle| vehicle.x)
        .collect();
    assert_eq!(frozen, after);

    host.restart().unwrap();
    assert_eq!(host.scoreboard.score, 0);
    assert!(!host.scoreboard.game_over);
    assert!(!host.session().is_disabled());
    assert!(host.session().player.alive);
    for lane in host.session().lanes.iter().take(3) {
        assert_eq!(lane.kind, LaneKind::Safe);
    }

    // The new session accepts input again
    assert!(host.press(Direction::Up, 5.0).is_some());
}

#[test]
fn test_two_presses_one_move() {
    let mut session = SimSession::new_with_seed(safe_config(), 3).unwrap();
    assert!(session.press(Direction::Up, 0.0).is_some());
    assert!(session.press(Direction::Right, 0.01).is_none());
    assert!(session.press(Direction::Up, 0.05).is_none());

    session.frame(step_secs());
    assert_eq!(session.player.grid, GridPos::new(6, 1));
    assert_eq!(session.drain_events(), vec![SessionEvent::Score(1)]);
    assert_eq!(session.stats.presses_while_moving, 2);
}

#[test]
fn test_farthest_row_is_running_maximum() {
    let mut session = SimSession::new_with_seed(safe_config(), 8).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let mut now = 0.0;
    let mut max_committed = 0;
    let mut last_farthest = 0;

    for _ in 0..300 {
        let direction = Direction::ALL[rng.random_range(0..4)];
        session.press(direction, now);
        now += step_secs() * 1.5;
        session.frame(now);

        let z = session.player.grid.z;
        assert!(z >= 0);
        assert!((0..13).contains(&session.player.grid.x));
        max_committed = max_committed.max(z);

        let farthest = session.player.farthest_z;
        assert!(farthest >= last_farthest);
        assert_eq!(farthest, max_committed);
        last_farthest = farthest;

        for event in session.drain_events() {
            assert_eq!(event, SessionEvent::Score(farthest as u32));
        }
    }
}

#[test]
fn test_vehicles_stay_in_bounds() {
    let mut session = session_with_road(3, 18.5, 2.4);
    let (min_x, max_x) = (session.config.min_x(), session.config.max_x());
    let cols = session.config.cols as f32;
    let mut seen_on_screen = false;

    for _ in 0..5_000 {
        session.tick();
        let lane = &session.lanes[3];
        assert_eq!(lane.vehicles.len(), 1);
        let x = lane.vehicles[0].x;
        assert!((min_x..=max_x).contains(&x), "vehicle drifted to {}", x);
        if (0.0..cols).contains(&x) {
            seen_on_screen = true;
        }
    }
    assert!(seen_on_screen);
}

#[test]
fn test_collision_threshold_boundaries() {
    // Lateral: exactly at the threshold is a miss, just inside is a hit
    for (dx, expect_hit) in [(0.7f32, false), (0.71, false), (0.69, true)] {
        let mut session = session_with_road(0, 0.0, 0.0);
        session.player = PlayerState::at(GridPos::new(0, 0));
        session.player.position.x = dx;
        session.tick();
        assert_eq!(!session.player.alive, expect_hit, "lateral offset {}", dx);
    }

    // Forward: the player drawn part way between lanes
    for (dz, expect_hit) in [(0.6f32, false), (0.61, false), (0.59, true)] {
        let mut session = session_with_road(0, 0.0, 0.0);
        session.player = PlayerState::at(GridPos::new(0, 0));
        session.player.position.z = dz;
        session.tick();
        assert_eq!(!session.player.alive, expect_hit, "forward offset {}", dz);
    }
}

#[test]
fn test_start_zone_safe_for_many_seeds() {
    let config = WorldConfig {
        traffic_probability: 1.0,
        ..Default::default()
    };
    for seed in 0..100 {
        let session = SimSession::new_with_seed(config.clone(), seed).unwrap();
        for lane in &session.lanes[..3] {
            assert_eq!(lane.kind, LaneKind::Safe);
        }
        for lane in &session.lanes[3..] {
            assert!((2..=4).contains(&lane.vehicles.len()));
        }
    }
}

#[test]
fn test_step_in_flight_at_death_commits_without_score() {
    let mut session = session_with_road(5, 6.0, 0.0);
    session.player = PlayerState::at(GridPos::new(6, 5));

    assert_eq!(session.press(Direction::Up, 0.0), Some(GridPos::new(6, 6)));
    session.tick();
    assert!(!session.player.alive);

    session.advance_step(1.0);
    assert_eq!(session.drain_events(), vec![SessionEvent::GameOver]);
    assert_eq!(session.player.grid, GridPos::new(6, 6));
    assert_eq!(session.player.farthest_z, 5);
    assert_eq!(session.farthest_row(), 5);
}

#[test]
fn test_world_shorter_than_start_zone() {
    let config = WorldConfig {
        rows: 2,
        traffic_probability: 1.0,
        ..Default::default()
    };
    let session = SimSession::new_with_seed(config, 1).unwrap();
    assert_eq!(session.lanes.len(), 2);
    assert!(session.lanes.iter().all(|lane| lane.kind == LaneKind::Safe));
}
