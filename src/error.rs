//! Error types for map-graph construction

use std::fmt;

/// Errors that can occur during graph construction or queries
#[derive(Debug, Clone)]
pub enum MapGenError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Vector arithmetic was attempted across differing dimensions
    DimensionMismatch {
        /// Dimension of the left-hand operand
        left: usize,
        /// Dimension of the right-hand operand
        right: usize,
    },
    /// A provider-supplied dual reference could not be resolved.
    /// Construction aborts; no partial graph is returned.
    InconsistentGraph(String),
    /// Generation failed due to geometry issues
    GenerationFailed(String),
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapGenError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            MapGenError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {} vs {}", left, right)
            }
            MapGenError::InconsistentGraph(msg) => write!(f, "inconsistent graph: {}", msg),
            MapGenError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
        }
    }
}

impl std::error::Error for MapGenError {}

/// Result type alias for map-graph operations
pub type Result<T> = std::result::Result<T, MapGenError>;
