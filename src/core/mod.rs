pub mod pool;
pub mod config;
pub mod world;

pub use self::config::SimulationConfig;
pub use self::pool::{Handle, HandlePool};
pub use self::world::{BodyId, PhysicsWorld};

/// A unique identifier for a dynamic body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DynamicId(pub(crate) Handle);

/// A unique identifier for a static body in the physics world
///
/// Dynamic and static handles live in independent namespaces: a `DynamicId`
/// and a `StaticId` carrying the same integer refer to different objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaticId(pub(crate) Handle);

impl DynamicId {
    /// Returns the raw handle value, for diagnostics
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl StaticId {
    /// Returns the raw handle value, for diagnostics
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}
