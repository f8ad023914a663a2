//! Error types for scene composition.

use thiserror::Error;

use crate::mesh::MeshKind;

/// Transform stack misuse.
///
/// Every variant indicates a push/pop mismatch in a draw group, which is a
/// programming defect rather than a runtime condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` was called with no pushed frames.
    #[error("Transform stack is empty: pop without a matching push")]
    Empty,

    /// A scope guard found fewer frames than it pushed.
    #[error("Transform stack underflow: expected depth {expected}, found {found}")]
    Underflow {
        /// Depth the scope expected to unwind from.
        expected: usize,
        /// Depth actually present.
        found: usize,
    },
}

/// Failure reported by the rendering backend.
///
/// Draw errors are recoverable: the current draw group is abandoned and the
/// traversal continues with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The backend could not build or bind the mesh.
    #[error("Mesh {0:?} is unavailable")]
    MeshUnavailable(MeshKind),

    /// The backend ran out of a resource (buffers, descriptor slots, ...).
    #[error("Backend resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Any other backend failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type alias for draw operations.
pub type DrawResult<T = ()> = std::result::Result<T, DrawError>;
