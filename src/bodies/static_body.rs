use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An immovable collision obstacle.
///
/// Static bodies have no velocity or mass response; the integrator never
/// touches them and collisions against them move only the dynamic side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StaticBody {
    pub position: Vector3,
}

impl StaticBody {
    /// Creates a new static body at `position`
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Moves the obstacle by `displacement`
    #[inline]
    pub fn translate(&mut self, displacement: Vector3) {
        self.position += displacement;
    }
}
