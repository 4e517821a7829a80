use thiserror::Error;

/// Top-level error type for the snapguide engine.
#[derive(Debug, Error)]
pub enum SnapguideError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the persistent arrangement.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to shape and constraint operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to drawing parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Convenience type alias for results using [`SnapguideError`].
pub type Result<T> = std::result::Result<T, SnapguideError>;
