//! Simulation driver: owns the world, the agents, and the run lifecycle.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::{Agent, Terminal};
use crate::config::Tunables;
use crate::environment::Environment;
use crate::error::SimError;
use crate::policy::EpsilonGreedy;
use crate::stats::GlobalStats;
use crate::{generate_id, Id};

/// Run mode of the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No training has been started.
    Stopped,
    /// Agents learn on every tick.
    Training,
    /// Training is suspended; ticks are no-ops.
    Paused,
}

/// Drives the simulation one frame at a time.
///
/// Owns every piece of mutable run state: the environment, the agents, the
/// live tunables, the global statistics, and the seeded RNG. A rendering
/// layer calls [`TrainingLoop::tick`] once per frame; all agent ticks run
/// synchronously inside it in collection order, so a tick either fully
/// commits or (paused or stopped) does nothing at all.
#[derive(Debug)]
pub struct TrainingLoop {
    env: Environment,
    tunables: Tunables,
    agents: Vec<Agent>,
    stats: GlobalStats,
    mode: Mode,
    rng: StdRng,
}

impl TrainingLoop {
    /// Creates a stopped loop with a single agent at the spawn corner.
    pub fn new(env: Environment, seed: u64) -> Self {
        let initial = Agent::new(generate_id(), env.config());
        Self {
            env,
            tunables: Tunables::default(),
            agents: vec![initial],
            stats: GlobalStats::default(),
            mode: Mode::Stopped,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Starts (or resumes) training.
    pub fn start(&mut self) {
        self.mode = Mode::Training;
    }

    /// Toggles between Training and Paused; a stopped loop stays stopped.
    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            Mode::Training => Mode::Paused,
            Mode::Paused => Mode::Training,
            Mode::Stopped => Mode::Stopped,
        };
    }

    /// Full reset: wipes every Q-table and trail, respawns all agents, and
    /// zeroes the statistics. The run mode is left unchanged.
    pub fn reset(&mut self) {
        for agent in &mut self.agents {
            agent.wipe(self.env.config(), &mut self.rng);
        }
        self.stats.reset();
    }

    /// Adds an agent at the spawn corner and returns its id.
    ///
    /// Fails once the configured agent limit is reached.
    pub fn add_agent(&mut self) -> Result<Id, SimError> {
        let max = self.env.config().max_agents;
        if self.agents.len() >= max {
            return Err(SimError::AgentLimit { max });
        }
        let id = generate_id();
        self.agents.push(Agent::new(id.clone(), self.env.config()));
        Ok(id)
    }

    /// Clears every agent's path trail. Visual state only; Q-tables and
    /// statistics are untouched.
    pub fn clear_trails(&mut self) {
        for agent in &mut self.agents {
            agent.clear_trail();
        }
    }

    /// Sets the learning rate, rejecting values outside `[0, 1]`.
    pub fn set_learning_rate(&mut self, value: f64) -> Result<(), SimError> {
        self.tunables.set_learning_rate(value)
    }

    /// Sets the exploration rate, rejecting values outside `[0, 1]`.
    pub fn set_epsilon(&mut self, value: f64) -> Result<(), SimError> {
        self.tunables.set_epsilon(value)
    }

    /// Sets the speed multiplier, rejecting non-finite or non-positive values.
    pub fn set_speed_multiplier(&mut self, value: f64) -> Result<(), SimError> {
        self.tunables.set_speed_multiplier(value)
    }

    /// Runs one frame.
    ///
    /// A no-op unless training and not paused. Otherwise every agent ticks
    /// once in collection order under an epsilon-greedy policy built from the
    /// current exploration rate; the loop accumulates global statistics and
    /// respawns any agent whose episode ended.
    pub fn tick(&mut self) {
        if self.mode != Mode::Training {
            return;
        }

        let policy = EpsilonGreedy::new(self.tunables.epsilon);
        for agent in &mut self.agents {
            let outcome = agent.tick(&self.env, &policy, &self.tunables, &mut self.rng);
            self.stats.steps += 1;
            self.stats.total_reward += outcome.reward;

            if let Some(terminal) = outcome.terminal {
                if terminal == Terminal::Success {
                    self.stats.successes += 1;
                }
                self.stats.episodes += 1;
                agent.respawn(self.env.config(), &mut self.rng);
            }
        }
    }

    /// The world being navigated.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The agents, in tick order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The global statistics surface.
    pub fn stats(&self) -> &GlobalStats {
        &self.stats
    }

    /// The current run mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The live tunables currently in effect.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }
}
