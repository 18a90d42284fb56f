//! Reward function for the navigation task.

use crate::environment::Environment;
use crate::types::Position;

/// Computes per-tick rewards.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward for moving from `old` to `new` in one tick.
    ///
    /// # Components
    ///
    /// 1. **Capture bonus**: `goal_reward` when `new` is within capture range
    ///    of the target; overrides everything else.
    /// 2. **Collision penalty**: `collision_penalty` when `new` lies inside an
    ///    obstacle's collision zone; overrides shaping.
    /// 3. **Progress shaping**: distance gained toward the target times
    ///    `progress_scale`, minus the per-tick time penalty.
    ///
    /// `old` must be the agent's pre-move position so the shaping term
    /// measures the effect of this tick alone.
    pub fn compute(env: &Environment, old: Position, new: Position) -> f64 {
        let config = env.config();

        if env.reached_target(new) {
            return config.goal_reward;
        }

        if env.collides(new) {
            return config.collision_penalty;
        }

        let target = env.target();
        let progress = old.distance_to(&target) - new.distance_to(&target);
        progress * config.progress_scale - config.time_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::environment::Obstacle;

    fn standard() -> Environment {
        Environment::standard(SimConfig::default())
    }

    #[test]
    fn goal_short_circuits() {
        let env = standard();
        let old = Position::new(7.0, 0.5, 8.0);
        let new = Position::new(7.9, 0.5, 8.0);
        assert_eq!(RewardComputer::compute(&env, old, new), 100.0);
    }

    #[test]
    fn goal_overrides_obstacle_proximity() {
        // an obstacle placed right on the target must not mask the capture bonus
        let config = SimConfig::default();
        let target = Position::new(8.0, 0.15, 8.0);
        let env = Environment::new(
            config,
            target,
            vec![Obstacle::new(Position::new(8.0, 1.0, 8.0), 1.5)],
        );
        let new = Position::new(7.9, 0.5, 8.0);
        assert_eq!(RewardComputer::compute(&env, Position::new(5.0, 0.5, 5.0), new), 100.0);
    }

    #[test]
    fn collision_short_circuits() {
        let env = standard();
        // at an obstacle center, far from the target
        let new = Position::new(0.0, 1.0, 4.0);
        let old = Position::new(0.0, 0.5, 2.0);
        assert_eq!(RewardComputer::compute(&env, old, new), -50.0);
    }

    #[test]
    fn progress_shaping_with_time_penalty() {
        let env = standard();
        let target = env.target();
        let old = Position::new(-8.0, 0.5, -8.0);
        let new = Position::new(-8.0, 0.5, -7.85);
        let expected = (old.distance_to(&target) - new.distance_to(&target)) * 10.0 - 0.1;
        let reward = RewardComputer::compute(&env, old, new);
        assert!((reward - expected).abs() < 1e-10);
        // moving toward the target nets a positive shaped reward
        assert!(reward > 0.0);
    }

    #[test]
    fn moving_away_is_penalized() {
        let env = standard();
        let old = Position::new(-8.0, 0.5, -7.85);
        let new = Position::new(-8.0, 0.5, -8.0);
        let reward = RewardComputer::compute(&env, old, new);
        assert!(reward < 0.0);
    }

    #[test]
    fn standing_still_costs_the_time_penalty() {
        let env = standard();
        let p = Position::new(-8.0, 0.5, -8.0);
        let reward = RewardComputer::compute(&env, p, p);
        assert!((reward + 0.1).abs() < 1e-10);
    }
}
