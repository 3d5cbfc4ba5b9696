use crate::bodies::{DynamicBody, StaticBody};
use crate::collision::resolve_contact;
use crate::core::{DynamicId, HandlePool, SimulationConfig, StaticId};
use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

/// A body of either kind, for callers that interact with dynamic and static
/// objects uniformly.
///
/// Resolved through the world's own lookups on every use, so a stale id
/// surfaces as `NotFound` instead of dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Dynamic(DynamicId),
    Static(StaticId),
}

/// The physics world: owns all bodies and advances the simulation.
///
/// Dynamic and static bodies live in two independent handle pools. The only
/// place the two interact is [`step`](Self::step), which integrates every
/// dynamic body and resolves its collisions against every static body
/// (brute-force all pairs, no broad phase). Dynamic bodies never collide
/// with one another.
pub struct PhysicsWorld {
    dynamics: HandlePool<DynamicBody>,
    statics: HandlePool<StaticBody>,
    config: SimulationConfig,
}

impl PhysicsWorld {
    /// Creates a world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            dynamics: HandlePool::with_capacity(config.handle_capacity),
            statics: HandlePool::with_capacity(config.handle_capacity),
            config,
        }
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector3) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn gravity(&self) -> Vector3 {
        self.config.gravity
    }

    /// Adds an immovable obstacle at `position` and returns its handle
    pub fn add_static(&mut self, position: Vector3) -> Result<StaticId> {
        let handle = self.statics.add(StaticBody::new(position))?;
        log::debug!("added static body {handle} at {position}");
        Ok(StaticId(handle))
    }

    /// Adds a dynamic body and returns its handle.
    ///
    /// Fails with [`PhysicsError::InvalidMass`] unless `mass` is positive
    /// and finite.
    pub fn add_dynamic(
        &mut self,
        position: Vector3,
        velocity: Vector3,
        force: Vector3,
        mass: f32,
    ) -> Result<DynamicId> {
        let body = DynamicBody::new(position, velocity, force, mass)?;
        let handle = self.dynamics.add(body)?;
        log::debug!("added dynamic body {handle} at {position} (mass {mass})");
        Ok(DynamicId(handle))
    }

    /// Gets a reference to a static body
    pub fn get_static(&self, id: StaticId) -> Result<&StaticBody> {
        self.statics.get(id.0).map_err(|_| PhysicsError::StaticNotFound(id.0))
    }

    /// Gets a mutable reference to a static body
    pub fn get_static_mut(&mut self, id: StaticId) -> Result<&mut StaticBody> {
        self.statics.get_mut(id.0).map_err(|_| PhysicsError::StaticNotFound(id.0))
    }

    /// Gets a reference to a dynamic body
    pub fn get_dynamic(&self, id: DynamicId) -> Result<&DynamicBody> {
        self.dynamics.get(id.0).map_err(|_| PhysicsError::DynamicNotFound(id.0))
    }

    /// Gets a mutable reference to a dynamic body
    pub fn get_dynamic_mut(&mut self, id: DynamicId) -> Result<&mut DynamicBody> {
        self.dynamics.get_mut(id.0).map_err(|_| PhysicsError::DynamicNotFound(id.0))
    }

    /// Removes a static body; its handle becomes invalid until recycled
    pub fn remove_static(&mut self, id: StaticId) -> Result<StaticBody> {
        self.statics.remove(id.0).map_err(|_| PhysicsError::StaticNotFound(id.0))
    }

    /// Removes a dynamic body; its handle becomes invalid until recycled
    pub fn remove_dynamic(&mut self, id: DynamicId) -> Result<DynamicBody> {
        self.dynamics.remove(id.0).map_err(|_| PhysicsError::DynamicNotFound(id.0))
    }

    /// Advances the simulation by one tick of `delta_time` seconds.
    ///
    /// For every dynamic body: gravity is accumulated into the force
    /// accumulator, velocity then position are updated by semi-implicit
    /// Euler, the accumulator is cleared, and the body is tested and
    /// resolved against every static body.
    ///
    /// Callers are expected to drive this at a fixed tick rate. An
    /// [`PhysicsError::UnresolvedContact`] aborts the step; bodies already
    /// processed keep their advanced state, which is safe since resolution
    /// never couples two dynamic bodies, but the tick is not atomic.
    pub fn step(&mut self, delta_time: f32) -> Result<()> {
        let SimulationConfig { gravity, restitution, half_width, .. } = self.config;
        log::trace!(
            "step dt={delta_time}: {} dynamic vs {} static bodies",
            self.dynamics.len(),
            self.statics.len()
        );

        let statics = &self.statics;
        for i in 0..self.dynamics.len() {
            let handle = self.dynamics.get_associated_handle(i)?;
            let body = &mut self.dynamics.dense_mut()[i];

            body.apply_force(gravity * body.mass());
            let acceleration = body.force / body.mass();
            body.accelerate(acceleration * delta_time);

            let old_position = body.position;
            let displacement = body.velocity * delta_time;
            body.translate(displacement);
            body.clear_force();

            for (static_index, obstacle) in statics.dense().iter().enumerate() {
                resolve_contact(body, old_position, obstacle.position, half_width, restitution)
                    .map_err(|_| PhysicsError::UnresolvedContact {
                        dynamic: handle,
                        static_index,
                    })?;
            }
        }
        Ok(())
    }

    /// Describes every live dynamic body as `(id, position, velocity)`.
    ///
    /// Lazy and restartable; intended for diagnostic consumers.
    pub fn debug_dump(&self) -> impl Iterator<Item = (DynamicId, Vector3, Vector3)> + '_ {
        self.dynamics
            .iter()
            .map(|(handle, body)| (DynamicId(handle), body.position, body.velocity))
    }

    /// Gets the position of either kind of body
    pub fn position_of(&self, id: BodyId) -> Result<Vector3> {
        match id {
            BodyId::Dynamic(id) => Ok(self.get_dynamic(id)?.position),
            BodyId::Static(id) => Ok(self.get_static(id)?.position),
        }
    }

    /// Gets the velocity of either kind of body; static bodies are always
    /// at rest
    pub fn velocity_of(&self, id: BodyId) -> Result<Vector3> {
        match id {
            BodyId::Dynamic(id) => Ok(self.get_dynamic(id)?.velocity),
            BodyId::Static(id) => {
                self.get_static(id)?;
                Ok(Vector3::zero())
            }
        }
    }

    /// Applies a force to either kind of body; a no-op on static bodies
    pub fn apply_force(&mut self, id: BodyId, force: Vector3) -> Result<()> {
        match id {
            BodyId::Dynamic(id) => {
                self.get_dynamic_mut(id)?.apply_force(force);
            }
            BodyId::Static(id) => {
                self.get_static(id)?;
                log::debug!("ignoring force applied to static body {}", id.raw());
            }
        }
        Ok(())
    }

    /// Moves either kind of body by `displacement`
    pub fn translate(&mut self, id: BodyId, displacement: Vector3) -> Result<()> {
        match id {
            BodyId::Dynamic(id) => self.get_dynamic_mut(id)?.translate(displacement),
            BodyId::Static(id) => self.get_static_mut(id)?.translate(displacement),
        }
        Ok(())
    }

    /// Returns the number of live dynamic bodies
    pub fn dynamic_count(&self) -> usize {
        self.dynamics.len()
    }

    /// Returns the number of live static bodies
    pub fn static_count(&self) -> usize {
        self.statics.len()
    }

    /// Removes every body from the world
    pub fn clear(&mut self) {
        self.dynamics.clear();
        self.statics.clear();
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
