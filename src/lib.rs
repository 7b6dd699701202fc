pub mod angle;
pub mod cross;
pub mod projection;
pub mod utils;
pub mod vector;

use thiserror::Error;

/// Magnitudes and dot products below this are treated as exactly zero.
pub const INFINITE_SMALL: f64 = 1e-10;

/// The operation that was handed a zero vector it cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    Normalize,
    Angle,
    ParallelComponent,
    OrthogonalComponent,
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Degeneracy::Normalize => "cannot normalize the zero vector",
            Degeneracy::Angle => "cannot compute an angle with the zero vector",
            Degeneracy::ParallelComponent => {
                "cannot compute a unique parallel component with the zero-vector basis"
            }
            Degeneracy::OrthogonalComponent => {
                "cannot compute a unique orthogonal component with the zero-vector basis"
            }
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Degenerate Vector: {0}")]
    DegenerateVector(Degeneracy),
    #[error("Unsupported Dimension: only defined for 2D or 3D vectors, got {0}D")]
    UnsupportedDimension(usize),
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use angle::AngleUnit;
pub use utils::{cosine_similarity, euclidean_distance};
pub use vector::Vector;
