use crate::core::math::Vec2;
use crate::systems::collide::FeatureId;

/// Box-box manifolds never need more than two points.
pub const MAX_CONTACTS: usize = 2;

/// One point of a contact manifold.
#[derive(Clone, Copy, Debug, Default)]
pub struct Contact {
    // === Geometry (rewritten by every narrow phase pass) ===
    pub position: Vec2,
    /// Points from the first body of the pair to the second
    pub normal: Vec2,
    /// Lever arm from the first body's center
    pub r1: Vec2,
    /// Lever arm from the second body's center
    pub r2: Vec2,
    /// Negative while penetrating
    pub separation: f32,

    // === Accumulated impulses (carried across steps by feature id) ===
    pub normal_impulse: f32,
    pub tangent_impulse: f32,
    pub normal_bias_impulse: f32,

    // === Solver coefficients (rebuilt in pre-step) ===
    pub mass_normal: f32,
    pub mass_tangent: f32,
    pub bias: f32,

    pub feature: FeatureId,
}

impl Contact {
    pub fn new(position: Vec2, normal: Vec2, separation: f32, feature: FeatureId) -> Self {
        Self {
            position,
            normal,
            separation,
            feature,
            ..Self::default()
        }
    }

    /// Take over the accumulated impulses of the same feature from the previous step.
    pub(crate) fn inherit_impulses(&mut self, previous: &Contact) {
        self.normal_impulse = previous.normal_impulse;
        self.tangent_impulse = previous.tangent_impulse;
        self.normal_bias_impulse = previous.normal_bias_impulse;
    }

    pub(crate) fn reset_impulses(&mut self) {
        self.normal_impulse = 0.0;
        self.tangent_impulse = 0.0;
        self.normal_bias_impulse = 0.0;
    }
}
