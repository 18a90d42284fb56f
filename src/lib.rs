//! qnav - tabular Q-learning navigation engine.
//!
//! The headless core of a real-time multi-agent reinforcement-learning scene:
//! agents discretize their position onto a coarse grid, pick axis-aligned
//! moves with an epsilon-greedy policy, and learn action values with one-step
//! Q-learning while a frame-driven loop aggregates global statistics.
//!
//! Rendering and UI live outside this crate. The engine exposes per-agent
//! positions and path trails for a renderer, live tunables and lifecycle
//! commands for a control layer, and a statistics surface for display.

pub mod agent;
pub mod config;
pub mod environment;
pub mod error;
pub mod policy;
pub mod qtable;
pub mod reward;
pub mod stats;
pub mod training;
pub mod types;

pub use agent::{Agent, PathTrail, StepOutcome, Terminal};
pub use config::{SimConfig, Tunables};
pub use environment::{Environment, Obstacle};
pub use error::SimError;
pub use policy::{EpsilonGreedy, GreedyPolicy, Policy};
pub use qtable::QTable;
pub use reward::RewardComputer;
pub use stats::GlobalStats;
pub use training::{Mode, TrainingLoop};
pub use types::{Action, GridCell, Position, Velocity};

/// Identifier type used for agents.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
