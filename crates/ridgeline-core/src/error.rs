use thiserror::Error;

/// Errors raised when constructing generators or mesh descriptors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RidgelineError {
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("invalid mesh dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidMeshDimensions { rows: u32, cols: u32 },

    #[error("mesh {rows}x{cols} has more vertices than a u16 index buffer can address")]
    TooManyVertices { rows: u32, cols: u32 },

    #[error("invalid mesh extent: {0}")]
    InvalidMeshExtent(String),

    #[error("height zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
}
