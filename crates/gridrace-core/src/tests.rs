//! Tests for core types, action mapping, and geometric conventions.

use crate::components::{Pose, RadarArray, RadarReading};
use crate::constants::*;
use crate::enums::{Action, EndReason};
use crate::events::SimEvent;
use crate::types::{heading_vector, Position};

#[test]
fn test_action_argmax_basic() {
    assert_eq!(
        Action::from_outputs(&[0.1, 0.9, 0.2, 0.3]),
        Action::SteerRight
    );
    assert_eq!(
        Action::from_outputs(&[0.0, 0.0, 0.0, 1.0]),
        Action::Accelerate
    );
}

#[test]
fn test_action_argmax_tie_breaks_to_first_index() {
    assert_eq!(
        Action::from_outputs(&[0.5, 0.5, 0.5, 0.5]),
        Action::SteerLeft
    );
    assert_eq!(
        Action::from_outputs(&[0.1, 0.7, 0.7, 0.2]),
        Action::SteerRight
    );
}

#[test]
#[should_panic(expected = "expected 4")]
fn test_action_argmax_rejects_wrong_arity() {
    Action::from_outputs(&[0.1, 0.2, 0.3]);
}

#[test]
fn test_heading_vector_convention() {
    // Heading 0 moves along +x.
    let v = heading_vector(0.0, 0.0);
    assert!((v.x - 1.0).abs() < 1e-12);
    assert!(v.y.abs() < 1e-12);

    // Positive heading turns counter-clockwise on a y-down bitmap:
    // heading 90 moves along -y (up the screen).
    let v = heading_vector(90.0, 0.0);
    assert!(v.x.abs() < 1e-12);
    assert!((v.y + 1.0).abs() < 1e-12);

    // Offsets compose additively with heading.
    let a = heading_vector(30.0, 60.0);
    let b = heading_vector(90.0, 0.0);
    assert!((a.x - b.x).abs() < 1e-12);
    assert!((a.y - b.y).abs() < 1e-12);
}

#[test]
fn test_pose_center_truncates_position() {
    let pose = Pose {
        position: Position::new(100.9, 200.4),
        heading_deg: 0.0,
    };
    let c = pose.center();
    assert!((c.x - (100.0 + CAR_SIZE / 2.0)).abs() < 1e-12);
    assert!((c.y - (200.0 + CAR_SIZE / 2.0)).abs() < 1e-12);
}

#[test]
fn test_radar_observation_discretization() {
    let mut radar = RadarArray::default();
    radar.readings[0] = RadarReading {
        hit: Position::default(),
        distance: 0,
    };
    radar.readings[1] = RadarReading {
        hit: Position::default(),
        distance: 29,
    };
    radar.readings[2] = RadarReading {
        hit: Position::default(),
        distance: 30,
    };
    radar.readings[3] = RadarReading {
        hit: Position::default(),
        distance: 299,
    };
    radar.readings[4] = RadarReading {
        hit: Position::default(),
        distance: RADAR_MAX_LENGTH,
    };

    assert_eq!(radar.observation(), [0, 0, 1, 9, 10]);
}

#[test]
fn test_constants_relationships() {
    assert!(MIN_SPEED < INITIAL_SPEED && INITIAL_SPEED < MAX_SPEED);
    assert_eq!(RADAR_MAX_LENGTH / RADAR_SCALE, 10);
    assert!(DEFAULT_LAP_FINISH_X < DEFAULT_LAP_START_X);
    assert_eq!(CORNER_OFFSETS_DEG.len(), 4);
    assert_eq!(RADAR_OFFSETS_DEG.len(), RADAR_COUNT);
}

#[test]
fn test_event_serde_round_trip() {
    let event = SimEvent::LapCompleted {
        vehicle: 2,
        lap_ticks: 340,
        record: true,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"LapCompleted\""));
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);

    let end = SimEvent::RunEnded {
        reason: EndReason::TickBudget,
    };
    let json = serde_json::to_string(&end).unwrap();
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, end);
}

#[test]
fn test_action_serde_round_trip() {
    for action in Action::ALL {
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}

#[test]
fn test_position_distance() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
}
