//! Policy trait for the navigation agents.

use rand::rngs::StdRng;

use crate::qtable::QTable;
use crate::types::{Action, GridCell};

/// Selects one action per tick from an agent's Q-table and current state.
///
/// Implementations draw any randomness from the injected `rng`, so a whole
/// run is reproducible from a single seed.
pub trait Policy {
    /// Selects the action to take from `state`.
    fn select(&self, qtable: &QTable, state: GridCell, rng: &mut StdRng) -> Action;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
