//! Stock scenes, one per classic solver stress case.
//!
//! Each demo clears the world, resets gravity to `(0, -10)` and populates
//! bodies and joints. Ground is always body 0: a static 100 x 20 slab whose
//! top face is at `y = 0`.

use std::f32::consts::PI;

use crate::core::math::Vec2;
use crate::domain::body::{Body, BodyId};
use crate::systems::joint::Joint;

use super::random::random_range;
use super::WorldCore;

/// Timestep the soft-joint demos are tuned for
const TUNING_DT: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    SingleBox,
    SimplePendulum,
    VaryingFriction,
    RandomizedStacking,
    PyramidStacking,
    Teeter,
    SuspensionBridge,
    Dominos,
    MultiPendulum,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::SingleBox,
        Demo::SimplePendulum,
        Demo::VaryingFriction,
        Demo::RandomizedStacking,
        Demo::PyramidStacking,
        Demo::Teeter,
        Demo::SuspensionBridge,
        Demo::Dominos,
        Demo::MultiPendulum,
    ];

    pub fn from_index(index: u32) -> Option<Demo> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Demo::SingleBox => "A Single Box",
            Demo::SimplePendulum => "Simple Pendulum",
            Demo::VaryingFriction => "Varying Friction Coefficients",
            Demo::RandomizedStacking => "Randomized Stacking",
            Demo::PyramidStacking => "Pyramid Stacking",
            Demo::Teeter => "A Teeter",
            Demo::SuspensionBridge => "A Suspension Bridge",
            Demo::Dominos => "Dominos",
            Demo::MultiPendulum => "Multi-pendulum",
        }
    }
}

pub(super) fn load_demo(world: &mut WorldCore, demo: Demo) {
    world.clear();
    world.gravity = Vec2::new(0.0, -10.0);

    match demo {
        Demo::SingleBox => single_box(world),
        Demo::SimplePendulum => simple_pendulum(world),
        Demo::VaryingFriction => varying_friction(world),
        Demo::RandomizedStacking => randomized_stacking(world),
        Demo::PyramidStacking => pyramid_stacking(world),
        Demo::Teeter => teeter(world),
        Demo::SuspensionBridge => suspension_bridge(world),
        Demo::Dominos => dominos(world),
        Demo::MultiPendulum => multi_pendulum(world),
    }

    log::info!(
        "demo loaded: {} ({} bodies, {} joints)",
        demo.name(),
        world.bodies.len(),
        world.joints.len()
    );
}

fn ground(world: &mut WorldCore) -> BodyId {
    world.add_body(Body::new_static(Vec2::new(100.0, 20.0)).with_position(Vec2::new(0.0, -10.0)))
}

fn dynamic(world: &mut WorldCore, width: Vec2, mass: f32, position: Vec2) -> BodyId {
    world.add_body(Body::new(width, mass).with_position(position))
}

fn fixed(world: &mut WorldCore, width: Vec2, position: Vec2, rotation: f32) -> BodyId {
    world.add_body(Body::new_static(width).with_position(position).with_rotation(rotation))
}

/// Joint between two bodies this module just created.
fn pin(world: &mut WorldCore, b1: BodyId, b2: BodyId, anchor: Vec2) -> Joint {
    Joint::new(b1, &world.bodies[b1.index()], b2, &world.bodies[b2.index()], anchor)
}

/// Softness and bias factor of a spring-damper with the given stiffness.
fn soft_joint_params(mass: f32, frequency_hz: f32, damping_ratio: f32) -> (f32, f32) {
    let omega = 2.0 * PI * frequency_hz;
    let d = 2.0 * mass * damping_ratio * omega;
    let k = mass * omega * omega;
    let softness = 1.0 / (d + TUNING_DT * k);
    let bias_factor = TUNING_DT * k / (d + TUNING_DT * k);
    (softness, bias_factor)
}

fn push_joint(world: &mut WorldCore, joint: Joint) {
    // Both ends were created by the demo itself, the ids are valid.
    world.joints.push(joint);
}

fn single_box(world: &mut WorldCore) {
    ground(world);
    dynamic(world, Vec2::new(1.0, 1.0), 200.0, Vec2::new(0.0, 4.0));
}

fn simple_pendulum(world: &mut WorldCore) {
    let b1 = ground(world);
    let b2 = dynamic(world, Vec2::new(1.0, 1.0), 100.0, Vec2::new(9.0, 11.0));
    let joint = pin(world, b1, b2, Vec2::new(0.0, 11.0));
    push_joint(world, joint);
}

fn varying_friction(world: &mut WorldCore) {
    ground(world);

    fixed(world, Vec2::new(13.0, 0.25), Vec2::new(-2.0, 11.0), -0.25);
    fixed(world, Vec2::new(0.25, 1.0), Vec2::new(5.25, 9.5), 0.0);
    fixed(world, Vec2::new(13.0, 0.25), Vec2::new(2.0, 7.0), 0.25);
    fixed(world, Vec2::new(0.25, 1.0), Vec2::new(-5.25, 5.5), 0.0);
    fixed(world, Vec2::new(13.0, 0.25), Vec2::new(-2.0, 3.0), -0.25);

    let friction = [0.75, 0.5, 0.35, 0.1, 0.0];
    for (i, f) in friction.iter().enumerate() {
        let id = dynamic(world, Vec2::new(0.5, 0.5), 25.0, Vec2::new(-7.5 + 2.0 * i as f32, 14.0));
        world.bodies[id.index()].friction = *f;
    }
}

fn randomized_stacking(world: &mut WorldCore) {
    ground(world);

    let mut rng = 12345u32;
    for i in 0..10 {
        let x = random_range(&mut rng, -0.1, 0.1);
        dynamic(world, Vec2::new(1.0, 1.0), 1.0, Vec2::new(x, 0.51 + 1.05 * i as f32));
    }
}

fn pyramid_stacking(world: &mut WorldCore) {
    ground(world);

    let mut x = Vec2::new(-6.0, 0.75);
    for i in 0..12 {
        let mut y = x;
        for _ in i..12 {
            dynamic(world, Vec2::new(1.0, 1.0), 10.0, y);
            y += Vec2::new(1.125, 0.0);
        }
        x += Vec2::new(0.5625, 2.0);
    }
}

fn teeter(world: &mut WorldCore) {
    let b1 = ground(world);
    let plank = dynamic(world, Vec2::new(12.0, 0.25), 100.0, Vec2::new(0.0, 1.0));
    dynamic(world, Vec2::new(0.5, 0.5), 25.0, Vec2::new(-5.0, 2.0));
    dynamic(world, Vec2::new(0.5, 0.5), 25.0, Vec2::new(-5.5, 2.0));
    dynamic(world, Vec2::new(1.0, 1.0), 100.0, Vec2::new(5.5, 15.0));

    let joint = pin(world, b1, plank, Vec2::new(0.0, 1.0));
    push_joint(world, joint);
}

fn suspension_bridge(world: &mut WorldCore) {
    let ground = ground(world);

    const NUM_PLANKS: usize = 15;
    let mass = 50.0;

    let mut chain = vec![ground];
    for i in 0..NUM_PLANKS {
        let id = dynamic(world, Vec2::new(1.0, 0.25), mass, Vec2::new(-8.5 + 1.25 * i as f32, 5.0));
        chain.push(id);
    }

    let (softness, bias_factor) = soft_joint_params(mass, 2.0, 0.7);

    for i in 0..NUM_PLANKS {
        let joint = pin(world, chain[i], chain[i + 1], Vec2::new(-9.125 + 1.25 * i as f32, 5.0))
            .with_softness(softness)
            .with_bias_factor(bias_factor);
        push_joint(world, joint);
    }

    // Tie the last plank back to the ground.
    let joint = pin(world, chain[NUM_PLANKS], ground, Vec2::new(-9.125 + 1.25 * NUM_PLANKS as f32, 5.0))
        .with_softness(softness)
        .with_bias_factor(bias_factor);
    push_joint(world, joint);
}

fn dominos(world: &mut WorldCore) {
    let b1 = ground(world);

    fixed(world, Vec2::new(12.0, 0.5), Vec2::new(-1.5, 10.0), 0.0);

    for i in 0..10 {
        let id = dynamic(world, Vec2::new(0.2, 2.0), 10.0, Vec2::new(-6.0 + 1.0 * i as f32, 11.125));
        world.bodies[id.index()].friction = 0.1;
    }

    fixed(world, Vec2::new(14.0, 0.5), Vec2::new(1.0, 6.0), 0.3);

    let b2 = fixed(world, Vec2::new(0.5, 3.0), Vec2::new(-7.0, 4.0), 0.0);

    let b3 = dynamic(world, Vec2::new(12.0, 0.25), 20.0, Vec2::new(-0.9, 1.0));
    let joint = pin(world, b1, b3, Vec2::new(-2.0, 1.0));
    push_joint(world, joint);

    let b4 = dynamic(world, Vec2::new(0.5, 0.5), 10.0, Vec2::new(-10.0, 15.0));
    let joint = pin(world, b2, b4, Vec2::new(-7.0, 15.0));
    push_joint(world, joint);

    let b5 = dynamic(world, Vec2::new(2.0, 2.0), 20.0, Vec2::new(6.0, 2.5));
    world.bodies[b5.index()].friction = 0.1;
    let joint = pin(world, b1, b5, Vec2::new(6.0, 2.6));
    push_joint(world, joint);

    let b6 = dynamic(world, Vec2::new(2.0, 0.2), 10.0, Vec2::new(6.0, 3.6));
    let joint = pin(world, b5, b6, Vec2::new(7.0, 3.5));
    push_joint(world, joint);
}

fn multi_pendulum(world: &mut WorldCore) {
    let mut b1 = ground(world);

    let mass = 10.0;
    let (softness, bias_factor) = soft_joint_params(mass, 4.0, 0.7);

    let y = 12.0;
    for i in 0..15 {
        let b = dynamic(world, Vec2::new(0.75, 0.25), mass, Vec2::new(0.5 + i as f32, y));
        let joint = pin(world, b1, b, Vec2::new(i as f32, y))
            .with_softness(softness)
            .with_bias_factor(bias_factor);
        push_joint(world, joint);
        b1 = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldCore {
        WorldCore::new(Vec2::new(0.0, -10.0), 10)
    }

    #[test]
    fn every_demo_loads_and_steps() {
        let mut w = world();
        for demo in Demo::ALL {
            w.load_demo(demo);
            assert!(w.body_count() > 1, "{} is empty", demo.name());
            for _ in 0..30 {
                w.step(TUNING_DT);
            }
            for b in w.bodies() {
                assert!(b.position.x.is_finite() && b.position.y.is_finite(), "{} blew up", demo.name());
            }
        }
    }

    #[test]
    fn demo_sizes_match_their_layouts() {
        let mut w = world();
        w.load_demo(Demo::PyramidStacking);
        assert_eq!(w.body_count(), 1 + 12 * 13 / 2);

        w.load_demo(Demo::SuspensionBridge);
        assert_eq!(w.body_count(), 16);
        assert_eq!(w.joint_count(), 16);

        w.load_demo(Demo::MultiPendulum);
        assert_eq!(w.joint_count(), 15);
    }

    #[test]
    fn from_index_covers_all_demos() {
        assert_eq!(Demo::from_index(0), Some(Demo::SingleBox));
        assert_eq!(Demo::from_index(8), Some(Demo::MultiPendulum));
        assert_eq!(Demo::from_index(9), None);
    }

    #[test]
    fn soft_joint_params_are_in_range() {
        let (softness, bias_factor) = soft_joint_params(50.0, 2.0, 0.7);
        assert!(softness > 0.0);
        assert!(bias_factor > 0.0 && bias_factor < 1.0);
    }

    #[test]
    fn single_box_comes_to_rest_on_the_ground() {
        let mut w = world();
        w.load_demo(Demo::SingleBox);
        for _ in 0..240 {
            w.step(TUNING_DT);
        }
        let b = &w.bodies()[1];
        assert!((b.position.y - 0.5).abs() < 0.05);
        assert!(b.velocity.length() < 0.05);
    }
}
