use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A simulated body with finite positive mass, subject to force accumulation
/// and integration.
///
/// `force` is an accumulator: forces applied between steps are summed here
/// and the integrator zeroes it after converting it into velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DynamicBody {
    pub position: Vector3,
    pub velocity: Vector3,
    pub force: Vector3,
    mass: f32,
}

impl DynamicBody {
    /// Creates a new dynamic body.
    ///
    /// Mass must be positive and finite; the integrator divides by it
    /// unguarded, so positivity is a construction invariant rather than a
    /// per-step special case.
    pub fn new(position: Vector3, velocity: Vector3, force: Vector3, mass: f32) -> Result<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        Ok(Self { position, velocity, force, mass })
    }

    /// Creates a body at rest with unit mass
    pub fn at_rest(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            force: Vector3::zero(),
            mass: 1.0,
        }
    }

    /// Returns the body's mass
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Adds `force` to the accumulator for the next integration step
    #[inline]
    pub fn apply_force(&mut self, force: Vector3) {
        self.force += force;
    }

    /// Moves the body by `displacement`
    #[inline]
    pub fn translate(&mut self, displacement: Vector3) {
        self.position += displacement;
    }

    /// Changes the body's velocity by `acceleration`
    #[inline]
    pub fn accelerate(&mut self, acceleration: Vector3) {
        self.velocity += acceleration;
    }

    /// Resets the force accumulator to zero
    #[inline]
    pub fn clear_force(&mut self) {
        self.force = Vector3::zero();
    }
}
