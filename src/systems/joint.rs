//! Revolute joint: pins a point of one body to a point of another.
//!
//! Bilateral, so the impulse is never clamped. Solved with the same
//! pre-step / impulse-iteration protocol as contacts.

use core::fmt;

use crate::core::math::{cross_sv, Mat22, Vec2};
use crate::domain::body::{pair_mut, Body, BodyId};
use crate::domain::settings::SolverSettings;
use crate::systems::arbiter::apply;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct JointId(pub u32);

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JointId({})", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Joint {
    pub body1: BodyId,
    pub body2: BodyId,

    /// Anchor in body 1's local frame
    pub local_anchor1: Vec2,
    /// Anchor in body 2's local frame
    pub local_anchor2: Vec2,

    // === Rebuilt every pre-step ===
    pub r1: Vec2,
    pub r2: Vec2,
    pub m: Mat22,
    pub bias: Vec2,

    /// Accumulated impulse
    pub p: Vec2,

    /// Fraction of anchor drift removed per step
    pub bias_factor: f32,
    /// Constraint force mixing; `0.0` is a rigid pin
    pub softness: f32,
}

impl Joint {
    /// Pin `body1` and `body2` together at the world point `anchor`, using
    /// their current poses.
    pub fn new(id1: BodyId, body1: &Body, id2: BodyId, body2: &Body, anchor: Vec2) -> Self {
        let rot1t = Mat22::from_angle(body1.rotation).transpose();
        let rot2t = Mat22::from_angle(body2.rotation).transpose();

        Self {
            body1: id1,
            body2: id2,
            local_anchor1: rot1t * (anchor - body1.position),
            local_anchor2: rot2t * (anchor - body2.position),
            r1: Vec2::zero(),
            r2: Vec2::zero(),
            m: Mat22::identity(),
            bias: Vec2::zero(),
            p: Vec2::zero(),
            bias_factor: 0.2,
            softness: 0.0,
        }
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    pub fn with_bias_factor(mut self, bias_factor: f32) -> Self {
        self.bias_factor = bias_factor;
        self
    }

    /// World-space anchor points as seen from each body. They coincide when
    /// the joint is satisfied.
    pub fn world_anchors(&self, bodies: &[Body]) -> (Vec2, Vec2) {
        let b1 = &bodies[self.body1.index()];
        let b2 = &bodies[self.body2.index()];
        (
            b1.position + Mat22::from_angle(b1.rotation) * self.local_anchor1,
            b2.position + Mat22::from_angle(b2.rotation) * self.local_anchor2,
        )
    }

    pub fn pre_step(&mut self, bodies: &mut [Body], inv_dt: f32, settings: &SolverSettings) {
        let (b1, b2) = pair_mut(bodies, self.body1, self.body2);

        // Pre-compute anchors, mass matrix, and bias.
        let rot1 = Mat22::from_angle(b1.rotation);
        let rot2 = Mat22::from_angle(b2.rotation);

        self.r1 = rot1 * self.local_anchor1;
        self.r2 = rot2 * self.local_anchor2;
        let (r1, r2) = (self.r1, self.r2);

        // deltaV = deltaV0 + K * impulse
        // invM = [(1/m1 + 1/m2) * eye(2) - skew(r1) * invI1 * skew(r1) - skew(r2) * invI2 * skew(r2)]
        //      = [1/m1+1/m2     0    ] + invI1 * [r1.y*r1.y -r1.x*r1.y] + invI2 * [r2.y*r2.y -r2.x*r2.y]
        //        [    0     1/m1+1/m2]           [-r1.x*r1.y r1.x*r1.x]           [-r2.x*r2.y r2.x*r2.x]
        let inv_mass = b1.inv_mass + b2.inv_mass;
        let k1 = Mat22::new(Vec2::new(inv_mass, 0.0), Vec2::new(0.0, inv_mass));
        let k2 = Mat22::new(
            Vec2::new(b1.inv_i * r1.y * r1.y, -b1.inv_i * r1.x * r1.y),
            Vec2::new(-b1.inv_i * r1.x * r1.y, b1.inv_i * r1.x * r1.x),
        );
        let k3 = Mat22::new(
            Vec2::new(b2.inv_i * r2.y * r2.y, -b2.inv_i * r2.x * r2.y),
            Vec2::new(-b2.inv_i * r2.x * r2.y, b2.inv_i * r2.x * r2.x),
        );

        let mut k = k1 + k2 + k3;
        k.col1.x += self.softness;
        k.col2.y += self.softness;

        self.m = k.invert();

        let p1 = b1.position + r1;
        let p2 = b2.position + r2;
        let dp = p2 - p1;

        self.bias = if settings.position_correction {
            -self.bias_factor * inv_dt * dp
        } else {
            Vec2::zero()
        };

        if settings.warm_starting {
            apply(b1, b2, r1, r2, self.p);
        } else {
            self.p = Vec2::zero();
        }
    }

    pub fn apply_impulse(&mut self, bodies: &mut [Body]) {
        let (b1, b2) = pair_mut(bodies, self.body1, self.body2);

        let dv = b2.velocity + cross_sv(b2.angular_velocity, self.r2)
            - b1.velocity
            - cross_sv(b1.angular_velocity, self.r1);

        let impulse = self.m * (self.bias - dv - self.softness * self.p);

        apply(b1, b2, self.r1, self.r2, impulse);

        self.p += impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn anchor_error(joint: &Joint, bodies: &[Body]) -> f32 {
        let (a1, a2) = joint.world_anchors(bodies);
        (a2 - a1).length()
    }

    fn integrate(bodies: &mut [Body]) {
        for b in bodies.iter_mut().filter(|b| !b.is_static()) {
            b.position += DT * b.velocity;
            b.rotation += DT * b.angular_velocity;
        }
    }

    #[test]
    fn local_anchors_reproduce_the_world_anchor() {
        let bodies = vec![
            Body::new_static(Vec2::new(1.0, 1.0)).with_position(Vec2::new(2.0, 0.0)),
            Body::new(Vec2::new(1.0, 1.0), 1.0)
                .with_position(Vec2::new(0.0, 3.0))
                .with_rotation(0.7),
        ];
        let joint = Joint::new(BodyId(0), &bodies[0], BodyId(1), &bodies[1], Vec2::new(1.0, 1.0));
        let (a1, a2) = joint.world_anchors(&bodies);
        assert!((a1 - Vec2::new(1.0, 1.0)).length() < 1e-5);
        assert!((a2 - Vec2::new(1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn anchor_error_decays_by_the_bias_factor_each_step() {
        let mut bodies = vec![
            Body::new_static(Vec2::new(1.0, 1.0)).with_position(Vec2::new(0.0, -50.0)),
            Body::new(Vec2::new(1.0, 1.0), 1.0),
        ];
        let settings = SolverSettings::default();
        let mut joint = Joint::new(BodyId(0), &bodies[0], BodyId(1), &bodies[1], Vec2::zero());

        // Kinematic override: drag the body off its anchor.
        let d = 0.5;
        bodies[1].position = Vec2::new(d, 0.0);
        assert!((anchor_error(&joint, &bodies) - d).abs() < 1e-6);

        let mut expected = d;
        for _ in 0..30 {
            joint.pre_step(&mut bodies, 1.0 / DT, &settings);
            for _ in 0..10 {
                joint.apply_impulse(&mut bodies);
            }
            integrate(&mut bodies);
            expected *= 1.0 - joint.bias_factor;
            let err = anchor_error(&joint, &bodies);
            assert!((err - expected).abs() < 1e-3, "error {err} expected {expected}");
        }
        assert!(anchor_error(&joint, &bodies) < 0.001);
    }

    #[test]
    fn pendulum_keeps_its_anchor_under_gravity() {
        let mut bodies = vec![
            Body::new_static(Vec2::new(1.0, 1.0)).with_position(Vec2::new(0.0, 10.0)),
            Body::new(Vec2::new(1.0, 1.0), 100.0).with_position(Vec2::new(9.0, 11.0)),
        ];
        let settings = SolverSettings::default();
        let mut joint = Joint::new(BodyId(0), &bodies[0], BodyId(1), &bodies[1], Vec2::new(0.0, 11.0));
        let radius = 9.0;

        for _ in 0..120 {
            bodies[1].velocity += DT * Vec2::new(0.0, -10.0);
            joint.pre_step(&mut bodies, 1.0 / DT, &settings);
            for _ in 0..10 {
                joint.apply_impulse(&mut bodies);
            }
            integrate(&mut bodies);
            assert!(anchor_error(&joint, &bodies) < 0.05);
        }

        // The bob swung down but stayed on its circle.
        let bob = bodies[1].position;
        assert!(bob.y < 10.0);
        assert!(((bob - Vec2::new(0.0, 11.0)).length() - radius).abs() < 0.1);
    }

    #[test]
    fn without_warm_starting_the_accumulated_impulse_restarts() {
        let mut bodies = vec![
            Body::new_static(Vec2::new(1.0, 1.0)),
            Body::new(Vec2::new(1.0, 1.0), 1.0).with_position(Vec2::new(0.0, -2.0)),
        ];
        let mut joint = Joint::new(BodyId(0), &bodies[0], BodyId(1), &bodies[1], Vec2::new(0.0, -1.0));
        joint.p = Vec2::new(3.0, 3.0);
        let settings = SolverSettings { warm_starting: false, ..Default::default() };
        joint.pre_step(&mut bodies, 1.0 / DT, &settings);
        assert_eq!(joint.p, Vec2::zero());
        assert_eq!(bodies[1].velocity, Vec2::zero());
    }
}
