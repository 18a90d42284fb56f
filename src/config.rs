//! Configuration for the navigation environment and training.

use crate::error::SimError;
use crate::types::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static configuration for the simulation.
///
/// Controls world geometry, state discretization, reward constants, and the
/// episode lifecycle. Fixed for the lifetime of a run; the live-adjustable
/// values live in [`Tunables`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimConfig {
    // --- World geometry ---
    /// Half-extent of the square floor; x and z are clamped to
    /// `[-half_extent, half_extent]`.
    pub half_extent: f64,
    /// Grid cell size used for state discretization.
    pub grid_size: f64,

    // --- Goal and obstacles ---
    /// An agent within this distance of the target has reached it.
    pub capture_radius: f64,
    /// Default collision radius around an obstacle center.
    pub collision_radius: f64,

    // --- Movement ---
    /// Displacement per tick before the speed multiplier is applied.
    pub base_speed: f64,

    // --- Reward constants ---
    /// Reward for reaching the target.
    pub goal_reward: f64,
    /// Reward for running into an obstacle (negative).
    pub collision_penalty: f64,
    /// Multiplier on per-tick progress toward the target.
    pub progress_scale: f64,
    /// Penalty subtracted every non-terminal tick.
    pub time_penalty: f64,

    // --- Learning ---
    /// Discount factor for the Q-learning update. Fixed here rather than in
    /// [`Tunables`]: unlike the learning and exploration rates it is not
    /// adjustable mid-run.
    pub discount: f64,

    // --- Episode lifecycle ---
    /// An episode fails once the per-episode step counter exceeds this.
    pub max_steps: u32,
    /// Maximum number of concurrent agents.
    pub max_agents: usize,
    /// Maximum number of retained path-trail points per agent.
    pub trail_cap: usize,
    /// Corner of the spawn region; respawns land within
    /// `[corner, corner + spawn_jitter)` on x and z.
    pub spawn_corner: Position,
    /// Extent of the spawn region along each horizontal axis.
    pub spawn_jitter: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            half_extent: 14.0,
            grid_size: 2.0,
            capture_radius: 1.5,
            collision_radius: 1.5,
            base_speed: 0.15,
            goal_reward: 100.0,
            collision_penalty: -50.0,
            progress_scale: 10.0,
            time_penalty: 0.1,
            discount: 0.95,
            max_steps: 200,
            max_agents: 10,
            trail_cap: 100,
            spawn_corner: Position::new(-8.0, 0.5, -8.0),
            spawn_jitter: 2.0,
        }
    }
}

/// Live-adjustable training parameters.
///
/// An embedding UI may rewrite these at any time between frames; every tick
/// reads the current values rather than caching them.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tunables {
    /// Learning rate α in `[0, 1]`.
    pub learning_rate: f64,
    /// Exploration rate ε in `[0, 1]`.
    pub epsilon: f64,
    /// Multiplier on the base movement speed, positive.
    pub speed_multiplier: f64,
}

impl Tunables {
    /// Sets the learning rate, rejecting values outside `[0, 1]`.
    pub fn set_learning_rate(&mut self, value: f64) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SimError::TunableOutOfRange {
                name: "learning rate",
                value,
            });
        }
        self.learning_rate = value;
        Ok(())
    }

    /// Sets the exploration rate, rejecting values outside `[0, 1]`.
    pub fn set_epsilon(&mut self, value: f64) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SimError::TunableOutOfRange {
                name: "epsilon",
                value,
            });
        }
        self.epsilon = value;
        Ok(())
    }

    /// Sets the speed multiplier, rejecting non-finite or non-positive values.
    pub fn set_speed_multiplier(&mut self, value: f64) -> Result<(), SimError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SimError::TunableOutOfRange {
                name: "speed multiplier",
                value,
            });
        }
        self.speed_multiplier = value;
        Ok(())
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epsilon: 0.3,
            speed_multiplier: 1.0,
        }
    }
}
