use crate::core::math::Vec2;
use crate::domain::settings::SolverSettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: Vec2) {
    world.gravity = gravity;
}

pub(super) fn set_iterations(world: &mut WorldCore, iterations: u32) {
    if iterations == 0 {
        log::warn!("solver iterations must be at least 1, clamping");
    }
    world.iterations = iterations.max(1);
}

pub(super) fn set_settings(world: &mut WorldCore, settings: SolverSettings) {
    world.settings = settings;
}
