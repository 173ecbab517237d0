use thiserror::Error;

/// Everything the engine can reject
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config json: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("body radius {actual} does not match the run's uniform radius {expected}")]
    RadiusMismatch { expected: f32, actual: f32 },

    #[error("body {id} has a non-finite position or velocity")]
    NonFiniteState { id: u32 },

    #[error("velocity bounds are empty or negative: min {min}, max {max}")]
    InvalidVelocityBounds { min: f32, max: f32 },

    #[error("body ids exhausted; clear the world to start again from 1")]
    IdsExhausted,

    #[error("bvh node at depth {node_depth} does not enclose its subtree")]
    BoundingInvariant { node_depth: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
