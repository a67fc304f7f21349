//! Boxlite Engine - 2D rigid box physics in WASM
//!
//! Oriented boxes, contact with friction, and revolute joints, solved with
//! sequential impulses and warm starting.
//!
//! Architecture:
//! - core/        - math primitives
//! - domain/      - bodies, solver settings, scene descriptions
//! - systems/     - narrow phase, contact arbiters, joints
//! - simulation/  - the world, its step pipeline, and the JS facade

pub mod core;
pub mod domain;
pub mod error;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Boxlite WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Mat22, Vec2};
pub use domain::body::{Body, BodyId};
pub use domain::scene::{BodyDesc, JointDesc, SceneDesc};
pub use domain::settings::SolverSettings;
pub use error::{EngineError, EngineResult};
pub use simulation::{Demo, PerfStats, World, WorldCore};
pub use systems::arbiter::{Arbiter, ArbiterKey, Contact};
pub use systems::collide::{collide, FeatureId};
pub use systems::joint::{Joint, JointId};
