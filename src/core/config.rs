use crate::core::pool::DEFAULT_CAPACITY;
use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Constant gravitational acceleration applied to every dynamic body
    pub gravity: Vector3,

    /// Fraction of normal-direction velocity retained (sign-flipped) after
    /// a collision response
    pub restitution: f32,

    /// Half extent of the axis-aligned cube every body collides as
    pub half_width: f32,

    /// Handle capacity of each body pool; a hard limit fixed at world
    /// construction
    pub handle_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -9.806, 0.0),
            restitution: 0.6,
            half_width: 0.5,
            handle_capacity: DEFAULT_CAPACITY,
        }
    }
}
