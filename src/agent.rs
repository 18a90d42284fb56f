//! Agent state and the per-tick learning cycle.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{SimConfig, Tunables};
use crate::environment::Environment;
use crate::policy::Policy;
use crate::qtable::QTable;
use crate::reward::RewardComputer;
use crate::types::{Action, GridCell, Position, Velocity};
use crate::Id;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The agent reached the target.
    Success,
    /// The agent ran into an obstacle.
    Collision,
    /// The per-episode step budget ran out.
    OutOfSteps,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// The action taken.
    pub action: Action,
    /// The reward received for it.
    pub reward: f64,
    /// Set when the tick ended the episode.
    pub terminal: Option<Terminal>,
}

/// Recent positions an agent has visited, oldest first.
///
/// Capped: pushing beyond the cap evicts the oldest point. Consumed read-only
/// by a renderer for trail drawing; never feeds back into learning.
#[derive(Debug, Clone)]
pub struct PathTrail {
    points: VecDeque<Position>,
    cap: usize,
}

impl PathTrail {
    /// Creates an empty trail retaining at most `cap` points.
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Appends a point, evicting the oldest once the cap is exceeded.
    pub fn push(&mut self, point: Position) {
        self.points.push_back(point);
        while self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no point is retained.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the retained points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.points.iter()
    }

    /// Drops every retained point.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// A single learning agent.
///
/// Owns its Q-table, which persists across episode respawns and is cleared
/// only by a full simulation reset. Position and velocity are public so an
/// embedding renderer can read them every frame.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Unique identifier for this agent.
    pub id: Id,
    /// Current position in the scene.
    pub position: Position,
    /// Velocity applied on the last committed tick.
    pub velocity: Velocity,
    /// Reward accumulated in the current episode.
    pub episode_reward: f64,
    /// Steps taken in the current episode.
    pub step_count: u32,
    qtable: QTable,
    trail: PathTrail,
}

impl Agent {
    /// Creates an agent at the spawn corner with an empty Q-table.
    pub fn new(id: Id, config: &SimConfig) -> Self {
        Self {
            id,
            position: config.spawn_corner,
            velocity: Velocity::zero(),
            episode_reward: 0.0,
            step_count: 0,
            qtable: QTable::new(),
            trail: PathTrail::new(config.trail_cap),
        }
    }

    /// This agent's learned action values.
    pub fn qtable(&self) -> &QTable {
        &self.qtable
    }

    /// This agent's path trail.
    pub fn trail(&self) -> &PathTrail {
        &self.trail
    }

    /// Drops the trail points. Visual state only; learning is unaffected.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Runs one learning step and returns what happened.
    ///
    /// Encodes the current position, lets `policy` pick an action, applies it
    /// through the environment, rewards the move, performs the one-step
    /// Q-learning update
    /// `Q(s,a) += α (r + γ max_a' Q(s',a') - Q(s,a))`,
    /// and commits position, velocity, trail and per-episode counters. The
    /// final terminal check runs on the committed position: capture wins over
    /// collision, and the step budget ends episodes that do neither.
    ///
    /// The caller decides when to call this (only while training and not
    /// paused) and reacts to the returned terminal by respawning the agent.
    pub fn tick(
        &mut self,
        env: &Environment,
        policy: &dyn Policy,
        tunables: &Tunables,
        rng: &mut StdRng,
    ) -> StepOutcome {
        let config = env.config();

        let state = GridCell::encode(self.position, config.grid_size);
        let action = policy.select(&self.qtable, state, rng);

        let speed = config.base_speed * tunables.speed_multiplier;
        let candidate = env.step(self.position, action, speed);
        let reward = RewardComputer::compute(env, self.position, candidate);
        let next_state = GridCell::encode(candidate, config.grid_size);

        // max over the next state is read before the write below lands
        let old_q = self.qtable.get(state, action);
        let max_next = self.qtable.max_value(next_state);
        let new_q = old_q + tunables.learning_rate * (reward + config.discount * max_next - old_q);
        self.qtable.set(state, action, new_q);

        self.velocity = action.velocity(speed);
        self.position = candidate;
        self.trail.push(candidate);
        self.episode_reward += reward;
        self.step_count += 1;

        let terminal = if env.reached_target(self.position) {
            Some(Terminal::Success)
        } else if env.collides(self.position) {
            Some(Terminal::Collision)
        } else if self.step_count > config.max_steps {
            Some(Terminal::OutOfSteps)
        } else {
            None
        };

        StepOutcome {
            action,
            reward,
            terminal,
        }
    }

    /// Starts a new episode: repositions within the spawn region and zeroes
    /// velocity and per-episode counters. The Q-table and trail are kept.
    pub fn respawn(&mut self, config: &SimConfig, rng: &mut StdRng) {
        let corner = config.spawn_corner;
        self.position = Position::new(
            corner.x + rng.gen::<f64>() * config.spawn_jitter,
            corner.y,
            corner.z + rng.gen::<f64>() * config.spawn_jitter,
        );
        self.velocity = Velocity::zero();
        self.episode_reward = 0.0;
        self.step_count = 0;
    }

    /// Full wipe for a simulation reset: forgets everything learned, drops
    /// the trail, and respawns.
    pub fn wipe(&mut self, config: &SimConfig, rng: &mut StdRng) {
        self.qtable.clear();
        self.trail.clear();
        self.respawn(config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{EpsilonGreedy, GreedyPolicy};
    use rand::SeedableRng;

    fn setup() -> (Environment, Agent, StdRng) {
        let config = SimConfig::default();
        let env = Environment::standard(config.clone());
        let agent = Agent::new("a1".into(), &config);
        (env, agent, StdRng::seed_from_u64(42))
    }

    #[test]
    fn trail_caps_at_limit_keeping_newest() {
        let mut trail = PathTrail::new(100);
        for i in 0..250 {
            trail.push(Position::new(i as f64, 0.5, 0.0));
        }
        assert_eq!(trail.len(), 100);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs[0], 150.0);
        assert_eq!(xs[99], 249.0);
    }

    #[test]
    fn new_agent_starts_at_spawn_corner() {
        let (_, agent, _) = setup();
        assert_eq!(agent.position, Position::new(-8.0, 0.5, -8.0));
        assert_eq!(agent.velocity, Velocity::zero());
        assert!(agent.qtable().is_empty());
    }

    #[test]
    fn tick_reaching_target_reports_success() {
        let (env, mut agent, mut rng) = setup();
        agent.position = Position::new(7.9, 0.5, 8.0);
        // greedy over an empty table picks Forward, which captures the target
        let outcome = agent.tick(&env, &GreedyPolicy::new(), &Tunables::default(), &mut rng);
        assert_eq!(outcome.action, Action::Forward);
        assert_eq!(outcome.reward, 100.0);
        assert_eq!(outcome.terminal, Some(Terminal::Success));
        assert!((agent.position.z - 8.15).abs() < 1e-10);
    }

    #[test]
    fn tick_applies_q_learning_update() {
        let (env, mut agent, mut rng) = setup();
        agent.position = Position::new(7.9, 0.5, 8.0);
        let state = GridCell::encode(agent.position, 2.0);

        let tunables = Tunables::default();
        agent.tick(&env, &GreedyPolicy::new(), &tunables, &mut rng);

        // fresh table: Q(s,a) = 0 + 0.1 * (100 + 0.95 * 0 - 0) = 10
        let q = agent.qtable().get(state, Action::Forward);
        assert!((q - 10.0).abs() < 1e-10);
    }

    #[test]
    fn tick_into_obstacle_reports_collision() {
        let (env, mut agent, mut rng) = setup();
        // one step left of the obstacle at (0, 1, 4), moving right into it
        agent.position = Position::new(-1.0, 0.5, 4.0);
        let mut table_bias = QTable::new();
        let state = GridCell::encode(agent.position, 2.0);
        table_bias.set(state, Action::Right, 1.0);
        agent.qtable = table_bias;

        let outcome = agent.tick(&env, &GreedyPolicy::new(), &Tunables::default(), &mut rng);
        assert_eq!(outcome.action, Action::Right);
        assert_eq!(outcome.reward, -50.0);
        assert_eq!(outcome.terminal, Some(Terminal::Collision));
    }

    #[test]
    fn tick_exceeding_step_budget_fails_episode() {
        let config = SimConfig {
            max_steps: 3,
            ..SimConfig::default()
        };
        let env = Environment::standard(config.clone());
        let mut agent = Agent::new("a1".into(), &config);
        let mut rng = StdRng::seed_from_u64(0);
        let policy = EpsilonGreedy::new(0.0);
        let tunables = Tunables::default();

        for _ in 0..3 {
            let outcome = agent.tick(&env, &policy, &tunables, &mut rng);
            assert_eq!(outcome.terminal, None);
        }
        let outcome = agent.tick(&env, &policy, &tunables, &mut rng);
        assert_eq!(outcome.terminal, Some(Terminal::OutOfSteps));
    }

    #[test]
    fn speed_multiplier_scales_displacement() {
        let (env, mut agent, mut rng) = setup();
        let start = agent.position;
        let mut tunables = Tunables::default();
        tunables.set_speed_multiplier(2.0).unwrap();
        agent.tick(&env, &EpsilonGreedy::new(0.0), &tunables, &mut rng);
        assert!((agent.position.z - (start.z + 0.3)).abs() < 1e-10);
    }

    #[test]
    fn respawn_lands_in_spawn_region_and_zeroes_counters() {
        let (env, mut agent, mut rng) = setup();
        let config = env.config();
        agent.tick(&env, &EpsilonGreedy::new(0.3), &Tunables::default(), &mut rng);
        agent.respawn(config, &mut rng);

        assert!(agent.position.x >= -8.0 && agent.position.x < -6.0);
        assert!(agent.position.z >= -8.0 && agent.position.z < -6.0);
        assert_eq!(agent.position.y, 0.5);
        assert_eq!(agent.velocity, Velocity::zero());
        assert_eq!(agent.episode_reward, 0.0);
        assert_eq!(agent.step_count, 0);
    }

    #[test]
    fn respawn_keeps_qtable_and_trail() {
        let (env, mut agent, mut rng) = setup();
        agent.tick(&env, &EpsilonGreedy::new(0.3), &Tunables::default(), &mut rng);
        assert!(!agent.qtable().is_empty());
        assert!(!agent.trail().is_empty());

        agent.respawn(env.config(), &mut rng);
        assert!(!agent.qtable().is_empty());
        assert!(!agent.trail().is_empty());
    }

    #[test]
    fn wipe_forgets_everything() {
        let (env, mut agent, mut rng) = setup();
        agent.tick(&env, &EpsilonGreedy::new(0.3), &Tunables::default(), &mut rng);
        agent.wipe(env.config(), &mut rng);
        assert!(agent.qtable().is_empty());
        assert!(agent.trail().is_empty());
        assert_eq!(agent.step_count, 0);
    }
}
