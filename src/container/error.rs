//! Container error types.

use thiserror::Error;

/// Errors that can occur when filling a container.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContainerError {
    /// Adding the requested amount would exceed the container's capacity.
    /// The container is left unchanged.
    #[error("container full: adding {requested} would exceed capacity {capacity}")]
    Full { requested: f64, capacity: f64 },
}
