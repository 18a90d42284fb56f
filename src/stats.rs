//! Global training statistics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Process-wide counters aggregated across all agents.
///
/// Steps and reward accumulate every tick, episodes and successes at episode
/// boundaries. Cleared only by an explicit full reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlobalStats {
    /// Completed episodes across all agents.
    pub episodes: u64,
    /// Committed agent ticks across all episodes.
    pub steps: u64,
    /// Cumulative reward across all agents and episodes.
    pub total_reward: f64,
    /// Episodes that ended at the target.
    pub successes: u64,
}

impl GlobalStats {
    /// Fraction of episodes that ended in success, 0.0 before any episode.
    pub fn success_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.successes as f64 / self.episodes as f64
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for GlobalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Training Stats ===")?;
        writeln!(f, "  Episodes:     {}", self.episodes)?;
        writeln!(f, "  Steps:        {}", self.steps)?;
        writeln!(f, "  Total reward: {:.2}", self.total_reward)?;
        write!(f, "  Success rate: {:.1}%", self.success_rate() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_zero_without_episodes() {
        let stats = GlobalStats::default();
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn success_rate_is_fraction_of_episodes() {
        let stats = GlobalStats {
            episodes: 4,
            successes: 1,
            ..GlobalStats::default()
        };
        assert!((stats.success_rate() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn reset_zeroes_counters() {
        let mut stats = GlobalStats {
            episodes: 3,
            steps: 500,
            total_reward: -12.5,
            successes: 2,
        };
        stats.reset();
        assert_eq!(stats, GlobalStats::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stats_serde_round_trip() {
        let stats = GlobalStats {
            episodes: 7,
            steps: 1400,
            total_reward: 321.5,
            successes: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: GlobalStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
