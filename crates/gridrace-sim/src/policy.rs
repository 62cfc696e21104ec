//! Driving policies.
//!
//! A policy maps one vehicle's discretized radar observation to an action
//! every tick. The engine never calls policies itself. The driver loop
//! reads observations, asks each policy, and feeds the actions back into
//! `SimulationEngine::tick`, so evolved controllers plug in behind the
//! same trait as the built-in baselines.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridrace_core::constants::RADAR_COUNT;
use gridrace_core::enums::Action;

/// A per-vehicle controller queried once per tick.
pub trait Policy: Send {
    /// Short human-readable name for logs and summaries.
    fn name(&self) -> &str;

    /// Pick an action from the latest radar observation.
    fn act(&mut self, observation: &[i32; RADAR_COUNT]) -> Action;
}

/// Baseline that only ever accelerates. Useful as a floor: any evolved
/// controller should outscore a vehicle that drives straight into walls.
pub struct FullThrottle;

impl Policy for FullThrottle {
    fn name(&self) -> &str {
        "full-throttle"
    }

    fn act(&mut self, _observation: &[i32; RADAR_COUNT]) -> Action {
        Action::Accelerate
    }
}

/// Baseline that steers at random from a seeded stream. Two wanderers with
/// the same seed produce the same action sequence.
pub struct SeededWander {
    rng: ChaCha8Rng,
}

impl SeededWander {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for SeededWander {
    fn name(&self) -> &str {
        "seeded-wander"
    }

    fn act(&mut self, _observation: &[i32; RADAR_COUNT]) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
    }
}

/// Reactive baseline: steer away from whichever side reads closer, slow
/// down when the forward ray gets short, otherwise accelerate.
pub struct WallAvoider {
    /// Forward reading at or below this triggers braking.
    pub brake_below: i32,
}

impl Default for WallAvoider {
    fn default() -> Self {
        Self { brake_below: 2 }
    }
}

impl Policy for WallAvoider {
    fn name(&self) -> &str {
        "wall-avoider"
    }

    fn act(&mut self, observation: &[i32; RADAR_COUNT]) -> Action {
        // Readings are ordered right to left: [-90, -45, 0, 45, 90].
        let right = observation[0] + observation[1];
        let forward = observation[2];
        let left = observation[3] + observation[4];

        if forward <= self.brake_below {
            if left > right {
                Action::SteerLeft
            } else if right > left {
                Action::SteerRight
            } else {
                Action::Decelerate
            }
        } else if left > right + 2 {
            Action::SteerLeft
        } else if right > left + 2 {
            Action::SteerRight
        } else {
            Action::Accelerate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_throttle_always_accelerates() {
        let mut policy = FullThrottle;
        assert_eq!(policy.act(&[0; RADAR_COUNT]), Action::Accelerate);
        assert_eq!(policy.act(&[10; RADAR_COUNT]), Action::Accelerate);
    }

    #[test]
    fn test_seeded_wander_is_reproducible() {
        let mut a = SeededWander::new(42);
        let mut b = SeededWander::new(42);
        for _ in 0..64 {
            assert_eq!(a.act(&[5; RADAR_COUNT]), b.act(&[5; RADAR_COUNT]));
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = SeededWander::new(1);
        let mut b = SeededWander::new(2);
        let same = (0..64)
            .filter(|_| a.act(&[5; RADAR_COUNT]) == b.act(&[5; RADAR_COUNT]))
            .count();
        assert!(same < 64);
    }

    #[test]
    fn test_wall_avoider_steers_toward_open_side() {
        let mut policy = WallAvoider::default();
        assert_eq!(policy.act(&[1, 1, 8, 9, 9]), Action::SteerLeft);
        assert_eq!(policy.act(&[9, 9, 8, 1, 1]), Action::SteerRight);
        assert_eq!(policy.act(&[5, 5, 8, 5, 5]), Action::Accelerate);
    }

    #[test]
    fn test_wall_avoider_brakes_when_blocked() {
        let mut policy = WallAvoider::default();
        assert_eq!(policy.act(&[4, 4, 1, 4, 4]), Action::Decelerate);
        assert_eq!(policy.act(&[2, 2, 1, 6, 6]), Action::SteerLeft);
    }
}
