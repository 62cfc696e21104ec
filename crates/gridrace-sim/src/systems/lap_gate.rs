//! Lap-gate state machine.
//!
//! A one-way corridor defined by two distinct x-thresholds: crossing above
//! the start threshold arms the lap clock, crossing below the (lower)
//! finish threshold completes the lap. A vehicle oscillating near either
//! threshold cannot double-count a lap.
//!
//! The finish check runs before the start check within a tick, so the
//! same tick that completes a lap cannot also re-arm the clock unless the
//! vehicle is genuinely past the start threshold.

use hecs::World;

use gridrace_core::components::{LapClock, LifeState, Odometer, Pose, VehicleId};
use gridrace_core::events::SimEvent;
use gridrace_track::TrackHeader;

use crate::session::SessionState;

/// Advance the gate machine for every alive vehicle. Completed laps are
/// recorded against the session and returned as events.
pub fn run(world: &mut World, header: &TrackHeader, session: &mut SessionState) -> Vec<SimEvent> {
    let mut events = Vec::new();

    for (_entity, (id, pose, odometer, clock, life)) in world.query_mut::<(
        &VehicleId,
        &Pose,
        &mut Odometer,
        &mut LapClock,
        &LifeState,
    )>() {
        // A completion report lives for exactly one tick.
        clock.just_completed = None;

        if !life.alive {
            continue;
        }

        if pose.position.x < header.lap_finish_x {
            if let Some(start) = clock.start_tick.take() {
                let lap_ticks = odometer.lap_ticks - start;
                odometer.lap_ticks = 0;
                clock.just_completed = Some(lap_ticks);
                let record = session.record_lap(lap_ticks);
                events.push(SimEvent::LapCompleted {
                    vehicle: id.0,
                    lap_ticks,
                    record,
                });
            }
        }

        if pose.position.x > header.lap_start_x && clock.start_tick.is_none() {
            clock.start_tick = Some(odometer.lap_ticks);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrace_core::components::{LifeState, Pose, VehicleId};
    use gridrace_core::types::Position;

    fn gate_header() -> TrackHeader {
        TrackHeader {
            width: 2000,
            height: 2000,
            start_x: 1196.0,
            start_y: 530.0,
            lap_start_x: 1196.0,
            lap_finish_x: 50.0,
        }
    }

    fn spawn_at(world: &mut World, x: f64, lap_ticks: u64) -> hecs::Entity {
        world.spawn((
            VehicleId(0),
            Pose {
                position: Position::new(x, 530.0),
                heading_deg: 0.0,
            },
            Odometer {
                distance: 0.0,
                lap_ticks,
            },
            LapClock::default(),
            LifeState { alive: true },
        ))
    }

    #[test]
    fn test_gate_arms_above_start_threshold() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();
        let e = spawn_at(&mut world, 1200.0, 100);

        let events = run(&mut world, &header, &mut session);
        assert!(events.is_empty());

        let clock = world.get::<&LapClock>(e).unwrap();
        assert_eq!(clock.start_tick, Some(100));
        assert_eq!(clock.just_completed, None);
    }

    #[test]
    fn test_gate_reports_lap_on_finish_crossing() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();

        // Armed at lap clock 100, now at clock 175 past the finish line.
        let e = spawn_at(&mut world, 40.0, 175);
        world.get::<&mut LapClock>(e).unwrap().start_tick = Some(100);

        let events = run(&mut world, &header, &mut session);
        assert_eq!(
            events,
            vec![SimEvent::LapCompleted {
                vehicle: 0,
                lap_ticks: 75,
                record: true,
            }]
        );

        let clock = world.get::<&LapClock>(e).unwrap();
        assert_eq!(clock.just_completed, Some(75));
        assert_eq!(clock.start_tick, None);
        assert_eq!(world.get::<&Odometer>(e).unwrap().lap_ticks, 0);
        assert_eq!(session.fastest_lap_ticks, Some(75));
    }

    #[test]
    fn test_gate_ignores_finish_when_disarmed() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();
        let e = spawn_at(&mut world, 40.0, 50);

        let events = run(&mut world, &header, &mut session);
        assert!(events.is_empty());
        assert_eq!(world.get::<&LapClock>(e).unwrap().start_tick, None);
        assert_eq!(session.fastest_lap_ticks, None);
    }

    #[test]
    fn test_gate_no_double_count_in_middle_corridor() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();

        // Armed vehicle sitting between the two thresholds: nothing fires.
        let e = spawn_at(&mut world, 600.0, 120);
        world.get::<&mut LapClock>(e).unwrap().start_tick = Some(100);

        for _ in 0..5 {
            let events = run(&mut world, &header, &mut session);
            assert!(events.is_empty());
        }
        assert_eq!(world.get::<&LapClock>(e).unwrap().start_tick, Some(100));
    }

    #[test]
    fn test_gate_skips_dead_vehicles() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();

        let e = spawn_at(&mut world, 40.0, 175);
        world.get::<&mut LapClock>(e).unwrap().start_tick = Some(100);
        world.get::<&mut LifeState>(e).unwrap().alive = false;

        let events = run(&mut world, &header, &mut session);
        assert!(events.is_empty());
        assert_eq!(session.laps_completed, 0);
    }

    #[test]
    fn test_completion_report_clears_next_tick() {
        let mut world = World::new();
        let header = gate_header();
        let mut session = SessionState::default();

        let e = spawn_at(&mut world, 40.0, 175);
        world.get::<&mut LapClock>(e).unwrap().start_tick = Some(100);

        run(&mut world, &header, &mut session);
        assert_eq!(world.get::<&LapClock>(e).unwrap().just_completed, Some(75));

        run(&mut world, &header, &mut session);
        assert_eq!(world.get::<&LapClock>(e).unwrap().just_completed, None);
    }
}
