//! World - owner of bodies, joints, and contact arbiters
//!
//! WorldCore only orchestrates; the work lives in the submodules:
//! - step/      - the per-step pipeline (broad phase, integration, solver)
//! - commands/  - adding and removing entities
//! - init/      - construction and settings
//! - scene/     - JSON scene loading
//! - demos/     - the stock demo scenes
//! - perf/      - optional step timing
//!
//! Per step: broad phase refreshes arbiters from the previous positions,
//! forces integrate into velocities, every arbiter and joint pre-steps, a
//! fixed number of impulse iterations runs over arbiters then joints, and
//! finally velocities integrate into positions and loads are cleared.

use std::collections::BTreeMap;

use crate::core::math::Vec2;
use crate::domain::body::{Body, BodyId};
use crate::domain::settings::SolverSettings;
use crate::error::EngineResult;
use crate::systems::arbiter::{Arbiter, ArbiterKey};
use crate::systems::joint::{Joint, JointId};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "step/broad_phase.rs"]
mod broad_phase;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "scene/load.rs"]
mod scene;
#[path = "demos/demos.rs"]
pub mod demos;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use demos::Demo;
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,
    joints: Vec<Joint>,
    /// Ordered so the solver visits pairs in the same order every step
    arbiters: BTreeMap<ArbiterKey, Arbiter>,

    // Settings
    gravity: Vec2,
    iterations: u32,
    settings: SolverSettings,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with the default solver settings
    pub fn new(gravity: Vec2, iterations: u32) -> Self {
        init::create_world_core(gravity, iterations, SolverSettings::default())
    }

    pub fn with_settings(gravity: Vec2, iterations: u32, settings: SolverSettings) -> Self {
        init::create_world_core(gravity, iterations, settings)
    }

    /// Build a world from a JSON scene description
    pub fn from_scene_json(json: &str) -> EngineResult<Self> {
        let mut world = Self::new(Vec2::zero(), 1);
        world.load_scene_json(json)?;
        Ok(world)
    }

    /// Replace the world contents with a JSON scene
    pub fn load_scene_json(&mut self, json: &str) -> EngineResult<()> {
        scene::load_scene_json(self, json)
    }

    /// Replace the world contents with one of the stock demos
    pub fn load_demo(&mut self, demo: Demo) {
        demos::load_demo(self, demo)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn iterations(&self) -> u32 { self.iterations }

    pub fn settings(&self) -> &SolverSettings { &self.settings }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        settings::set_iterations(self, iterations);
    }

    pub fn set_settings(&mut self, settings: SolverSettings) {
        settings::set_settings(self, settings);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ENTITY API ===

    /// Register a body; the world takes ownership
    pub fn add_body(&mut self, body: Body) -> BodyId {
        commands::add_body(self, body)
    }

    /// Register a joint built against this world's bodies
    pub fn add_joint(&mut self, joint: Joint) -> EngineResult<JointId> {
        commands::add_joint(self, joint)
    }

    /// Pin two bodies together at a world-space anchor
    pub fn attach_joint(&mut self, body1: BodyId, body2: BodyId, anchor: Vec2) -> EngineResult<JointId> {
        commands::attach_joint(self, body1, body2, anchor)
    }

    /// Drop all bodies, joints, and arbiters
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn apply_force(&mut self, id: BodyId, force: Vec2) -> EngineResult<()> {
        commands::apply_force(self, id, force)
    }

    pub fn apply_torque(&mut self, id: BodyId, torque: f32) -> EngineResult<()> {
        commands::apply_torque(self, id, torque)
    }

    // === READ SURFACE ===

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, id: BodyId) -> Option<&Body> { self.bodies.get(id.index()) }

    /// Mutable access for kinematic overrides between steps
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> { self.bodies.get_mut(id.index()) }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn joints(&self) -> &[Joint] { &self.joints }

    pub fn joint(&self, id: JointId) -> Option<&Joint> { self.joints.get(id.0 as usize) }

    pub fn joint_count(&self) -> usize { self.joints.len() }

    /// Live arbiters in solver order
    pub fn arbiters(&self) -> impl Iterator<Item = &Arbiter> {
        self.arbiters.values()
    }

    pub fn arbiter(&self, a: BodyId, b: BodyId) -> Option<&Arbiter> {
        self.arbiters.get(&ArbiterKey::new(a, b))
    }

    pub fn arbiter_count(&self) -> usize { self.arbiters.len() }

    /// Total contact points over all arbiters
    pub fn contact_count(&self) -> usize {
        self.arbiters.values().map(Arbiter::num_contacts).sum()
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private pipeline stages, exposed to the step driver and tests
impl WorldCore {
    /// Refresh the arbiter map from current positions; returns pairs tested
    fn broad_phase(&mut self) -> u32 {
        broad_phase::broad_phase(self)
    }

    fn integrate_forces(&mut self, dt: f32) {
        integrate::integrate_forces(self, dt);
    }

    fn pre_step(&mut self, inv_dt: f32) {
        step::pre_step(self, inv_dt);
    }

    fn apply_impulses(&mut self) {
        step::apply_impulses(self);
    }

    fn integrate_velocities(&mut self, dt: f32) {
        integrate::integrate_velocities(self, dt);
    }
}
