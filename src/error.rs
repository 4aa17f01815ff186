use thiserror::Error;

/// Top-level error type for the Flashform engine.
#[derive(Debug, Error)]
pub enum FlashformError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while editing a profile graph.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("segment cannot start and end at the same point")]
    SelfLoop,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised at the configuration boundary (materials, pricing).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("material {0} has no allowed widths")]
    EmptyAllowedWidths(String),

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`FlashformError`].
pub type Result<T> = std::result::Result<T, FlashformError>;
