//! Pure-exploitation baseline.

use rand::rngs::StdRng;

use super::trait_::Policy;
use crate::qtable::QTable;
use crate::types::{Action, GridCell};

/// Always selects the highest-valued known action.
///
/// Equivalent to epsilon-greedy at ε = 0; used to evaluate what an agent has
/// learned once training is frozen.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Creates the greedy policy.
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn select(&self, qtable: &QTable, state: GridCell, _rng: &mut StdRng) -> Action {
        qtable.best(state).0
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn greedy_matches_table_best() {
        let mut table = QTable::new();
        let s = GridCell { x: 2, z: -1 };
        table.set(s, Action::Right, 7.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(GreedyPolicy::new().select(&table, s, &mut rng), Action::Right);
    }
}
