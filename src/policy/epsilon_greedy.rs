//! Epsilon-greedy action selection.

use rand::rngs::StdRng;
use rand::Rng;

use super::trait_::Policy;
use crate::qtable::QTable;
use crate::types::{Action, GridCell};

/// Epsilon-greedy policy: with probability ε a uniformly random action,
/// otherwise the highest-valued known action.
///
/// ε is a live tunable, so callers construct a fresh instance from the
/// current value each frame instead of holding one across frames.
/// Construction clamps ε into `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a policy exploring with probability `epsilon`.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.clamp(0.0, 1.0),
        }
    }

    /// The exploration rate in effect.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn select(&self, qtable: &QTable, state: GridCell, rng: &mut StdRng) -> Action {
        if rng.gen::<f64>() < self.epsilon {
            Action::all()[rng.gen_range(0..Action::COUNT)]
        } else {
            qtable.best(state).0
        }
    }

    fn name(&self) -> &str {
        "epsilon_greedy"
    }
}
