//! Error types for rayfrustum.

use thiserror::Error;

/// The main error type for rayfrustum operations.
#[derive(Error, Debug)]
pub enum FrustumError {
    /// A cascade was requested with too few or too many split planes.
    #[error("number of cascade planes must be >= {min} and <= {max}, got {count}")]
    PlaneCount {
        count: usize,
        min: usize,
        max: usize,
    },

    /// Split planes are not strictly ascending.
    #[error(
        "cascade planes must ascend: planes[{index}] = {near}, planes[{next}] = {far}",
        next = .index + 1
    )]
    PlanesNotAscending { index: usize, near: f32, far: f32 },

    /// A projection kind index that is neither perspective nor orthographic.
    #[error("unsupported projection kind {0}")]
    UnsupportedProjection(u32),

    /// Text that names no projection kind.
    #[error("invalid projection kind {0:?}, expected 0, 1, perspective or orthographic")]
    InvalidProjection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rayfrustum operations.
pub type Result<T> = std::result::Result<T, FrustumError>;
