use core::fmt;

use crate::core::math::Vec2;
use crate::error::{EngineError, EngineResult};

/// Handle of a body owned by a world. It is the insertion index and stays
/// valid until the world is cleared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BodyId({})", self.0)
    }
}

/// Rigid box - moves as a single unit
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec2,
    /// Rotation angle (radians)
    pub rotation: f32,
    /// Linear velocity (units per second)
    pub velocity: Vec2,
    /// Angular velocity (radians per second)
    pub angular_velocity: f32,

    // === Applied loads, cleared at the end of every step ===
    pub force: Vec2,
    pub torque: f32,

    // === Shape Definition ===
    /// Full box extents (width, height)
    pub width: Vec2,

    // === Material properties ===
    pub friction: f32,

    // === Mass properties ===
    pub mass: f32,
    /// `0.0` marks a static body
    pub inv_mass: f32,
    /// Moment of inertia about the center
    pub i: f32,
    pub inv_i: f32,
}

impl Body {
    /// Mass value that marks a body as immovable.
    pub const STATIC_MASS: f32 = f32::MAX;

    /// Create a box with full extents `width`. A `mass` of [`Body::STATIC_MASS`]
    /// makes the body static.
    pub fn new(width: Vec2, mass: f32) -> Self {
        let mut body = Self {
            position: Vec2::zero(),
            rotation: 0.0,
            velocity: Vec2::zero(),
            angular_velocity: 0.0,
            force: Vec2::zero(),
            torque: 0.0,
            width,
            friction: 0.2,
            mass,
            inv_mass: 0.0,
            i: 0.0,
            inv_i: 0.0,
        };
        body.set(width, mass);
        body
    }

    /// Like [`Body::new`], but rejects non-positive extents or mass instead of
    /// producing a body with infinite inverse mass.
    pub fn try_new(width: Vec2, mass: f32) -> EngineResult<Self> {
        if !(width.x > 0.0 && width.y > 0.0) {
            return Err(EngineError::InvalidBody(format!("extents must be positive, got {width:?}")));
        }
        if !(mass > 0.0) {
            return Err(EngineError::InvalidBody(format!("mass must be positive, got {mass}")));
        }
        Ok(Self::new(width, mass))
    }

    /// Create an immovable box
    pub fn new_static(width: Vec2) -> Self {
        Self::new(width, Self::STATIC_MASS)
    }

    /// Reset shape and mass properties. Kinematic state is left alone.
    pub fn set(&mut self, width: Vec2, mass: f32) {
        debug_assert!(mass > 0.0, "body mass must be positive, got {mass}");
        self.width = width;
        self.mass = mass;

        if mass < Self::STATIC_MASS {
            self.inv_mass = 1.0 / mass;
            // Solid rectangle about its center: m (w^2 + h^2) / 12
            self.i = mass * (width.x * width.x + width.y * width.y) / 12.0;
            self.inv_i = 1.0 / self.i;
        } else {
            self.inv_mass = 0.0;
            self.i = f32::MAX;
            self.inv_i = 0.0;
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Half extents, the form the narrow phase works with
    #[inline]
    pub fn half_width(&self) -> Vec2 {
        self.width * 0.5
    }

    /// Accumulate a force through the center of mass for the next step
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn add_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Zero kinematic state and accumulated loads.
    pub fn clear(&mut self) {
        self.position = Vec2::zero();
        self.rotation = 0.0;
        self.velocity = Vec2::zero();
        self.angular_velocity = 0.0;
        self.force = Vec2::zero();
        self.torque = 0.0;
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::new(1.0, 1.0), Self::STATIC_MASS)
    }
}

/// Borrow two distinct bodies mutably at once.
///
/// Panics if `a == b`; the broad phase never pairs a body with itself.
pub(crate) fn pair_mut(bodies: &mut [Body], a: BodyId, b: BodyId) -> (&mut Body, &mut Body) {
    let (ia, ib) = (a.index(), b.index());
    assert_ne!(ia, ib, "a constraint cannot reference the same body twice");
    if ia < ib {
        let (lo, hi) = bodies.split_at_mut(ib);
        (&mut lo[ia], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(ia);
        (&mut hi[0], &mut lo[ib])
    }
}
