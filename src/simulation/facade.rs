use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;
use crate::domain::body::{Body, BodyId};
use crate::error::EngineError;

use super::demos::Demo;
use super::perf_stats::PerfStats;
use super::WorldCore;

/// Floats per body in [`World::body_transforms`]: x, y, rotation, half width, half height
const TRANSFORM_STRIDE: usize = 5;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle around [`WorldCore`]
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world
    #[wasm_bindgen(constructor)]
    pub fn new(gravity_x: f32, gravity_y: f32, iterations: u32) -> Self {
        Self {
            core: WorldCore::new(Vec2::new(gravity_x, gravity_y), iterations),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 { self.core.joint_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn arbiter_count(&self) -> u32 { self.core.arbiter_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn contact_count(&self) -> u32 { self.core.contact_count() as u32 }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(Vec2::new(x, y));
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        self.core.set_iterations(iterations);
    }

    pub fn set_accumulate_impulses(&mut self, enabled: bool) {
        let mut settings = *self.core.settings();
        settings.accumulate_impulses = enabled;
        self.core.set_settings(settings);
    }

    pub fn set_warm_starting(&mut self, enabled: bool) {
        let mut settings = *self.core.settings();
        settings.warm_starting = enabled;
        self.core.set_settings(settings);
    }

    pub fn set_position_correction(&mut self, enabled: bool) {
        let mut settings = *self.core.settings();
        settings.position_correction = enabled;
        self.core.set_settings(settings);
    }

    // === BODIES ===

    /// Add a dynamic box with full extents `w` x `h`; returns its id.
    /// Fails for non-positive extents or mass.
    #[allow(clippy::too_many_arguments)]
    pub fn add_box(&mut self, w: f32, h: f32, mass: f32, x: f32, y: f32, rotation: f32, friction: f32) -> Result<u32, JsValue> {
        let body = Body::try_new(Vec2::new(w, h), mass)
            .map_err(to_js)?
            .with_position(Vec2::new(x, y))
            .with_rotation(rotation)
            .with_friction(friction);
        Ok(self.core.add_body(body).0)
    }

    pub fn add_static_box(&mut self, w: f32, h: f32, x: f32, y: f32, rotation: f32, friction: f32) -> u32 {
        let body = Body::new_static(Vec2::new(w, h))
            .with_position(Vec2::new(x, y))
            .with_rotation(rotation)
            .with_friction(friction);
        self.core.add_body(body).0
    }

    /// Pin two bodies at a world-space anchor; returns the joint id
    pub fn add_joint(&mut self, body1: u32, body2: u32, anchor_x: f32, anchor_y: f32) -> Result<u32, JsValue> {
        self.core
            .attach_joint(BodyId(body1), BodyId(body2), Vec2::new(anchor_x, anchor_y))
            .map(|id| id.0)
            .map_err(to_js)
    }

    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> Result<(), JsValue> {
        self.core.apply_force(BodyId(id), Vec2::new(fx, fy)).map_err(to_js)
    }

    pub fn apply_torque(&mut self, id: u32, torque: f32) -> Result<(), JsValue> {
        self.core.apply_torque(BodyId(id), torque).map_err(to_js)
    }

    /// Teleport a body; its velocity is left alone. Returns false for an unknown id.
    pub fn set_body_transform(&mut self, id: u32, x: f32, y: f32, rotation: f32) -> bool {
        match self.core.body_mut(BodyId(id)) {
            Some(body) => {
                body.position = Vec2::new(x, y);
                body.rotation = rotation;
                true
            }
            None => false,
        }
    }

    // Per-body reads return 0 for unknown ids

    pub fn body_x(&self, id: u32) -> f32 {
        self.core.body(BodyId(id)).map_or(0.0, |b| b.position.x)
    }

    pub fn body_y(&self, id: u32) -> f32 {
        self.core.body(BodyId(id)).map_or(0.0, |b| b.position.y)
    }

    pub fn body_rotation(&self, id: u32) -> f32 {
        self.core.body(BodyId(id)).map_or(0.0, |b| b.rotation)
    }

    pub fn body_half_width(&self, id: u32) -> f32 {
        self.core.body(BodyId(id)).map_or(0.0, |b| b.half_width().x)
    }

    pub fn body_half_height(&self, id: u32) -> f32 {
        self.core.body(BodyId(id)).map_or(0.0, |b| b.half_width().y)
    }

    /// Packed `[x, y, rotation, hw, hh]` per body, in id order
    pub fn body_transforms(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.body_count() * TRANSFORM_STRIDE);
        for b in self.core.bodies() {
            let h = b.half_width();
            out.extend_from_slice(&[b.position.x, b.position.y, b.rotation, h.x, h.y]);
        }
        out
    }

    // === SIMULATION ===

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Replace the world with a JSON scene
    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_scene_json(&json).map_err(to_js)
    }

    /// Load a stock demo by index; false when the index is out of range
    pub fn load_demo(&mut self, index: u32) -> bool {
        match Demo::from_index(index) {
            Some(demo) => {
                self.core.load_demo(demo);
                true
            }
            None => false,
        }
    }

    pub fn demo_count() -> u32 {
        Demo::ALL.len() as u32
    }

    pub fn demo_name(index: u32) -> Option<String> {
        Demo::from_index(index).map(|d| d.name().to_string())
    }
}
