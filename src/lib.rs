pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{BodyId, DynamicId, HandlePool, PhysicsWorld, SimulationConfig, StaticId};
pub use crate::bodies::{DynamicBody, StaticBody};
pub use crate::math::Vector3;

/// Error types for the physics core
pub mod error {
    use thiserror::Error;

    /// Failures of the generic handle pool.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PoolError {
        #[error("handle {0} is not bound to a live value")]
        NotFound(u32),

        #[error("dense index {index} out of range (live count {len})")]
        IndexOutOfRange { index: usize, len: usize },

        #[error("handle table full (capacity {0})")]
        CapacityExceeded(usize),
    }

    /// Failures of the physics world API.
    #[derive(Error, Debug, Clone, Copy, PartialEq)]
    pub enum PhysicsError {
        #[error("invalid mass {0}: mass must be positive and finite")]
        InvalidMass(f32),

        #[error("no dynamic body bound to handle {0}")]
        DynamicNotFound(u32),

        #[error("no static body bound to handle {0}")]
        StaticNotFound(u32),

        #[error(transparent)]
        Pool(#[from] PoolError),

        /// The resolver met an overlap pattern outside its face/edge table
        /// (a corner contact or full prior containment). Not locally
        /// recoverable: the resolution table is incomplete for this
        /// geometry, so the step aborts instead of leaving the pair
        /// interpenetrating silently.
        #[error("unresolved contact geometry between dynamic body {dynamic} and the static body at dense index {static_index}")]
        UnresolvedContact { dynamic: u32, static_index: usize },
    }
}

/// Result type for physics core operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
