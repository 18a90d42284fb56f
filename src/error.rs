use thiserror::Error;

/// Errors that can occur when driving the simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("agent limit reached ({max} concurrent agents)")]
    AgentLimit { max: usize },

    #[error("{name} out of range: {value}")]
    TunableOutOfRange { name: &'static str, value: f64 },
}
