use std::collections::BTreeMap;

use crate::core::math::Vec2;
use crate::domain::settings::SolverSettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(gravity: Vec2, iterations: u32, settings: SolverSettings) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        joints: Vec::new(),
        arbiters: BTreeMap::new(),
        gravity,
        iterations: iterations.max(1),
        settings,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
